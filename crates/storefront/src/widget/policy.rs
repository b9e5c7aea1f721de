//! Size availability and default selection rules.
//!
//! These are merchandising decisions rather than widget logic, so they are
//! carried as data and loaded from configuration.

use lexic_core::Size;

/// Default unavailable size.
const DEFAULT_UNAVAILABLE_SIZE: u32 = 7;
/// Default index of the size chip that starts active.
const DEFAULT_INITIAL_SIZE_INDEX: usize = 2;

/// Which sizes can be picked and what starts selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    unavailable_sizes: Vec<Size>,
    initial_size_index: usize,
    initial_swatch_index: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            unavailable_sizes: vec![Size::from(DEFAULT_UNAVAILABLE_SIZE)],
            initial_size_index: DEFAULT_INITIAL_SIZE_INDEX,
            initial_swatch_index: 0,
        }
    }
}

impl SelectionPolicy {
    /// Create a policy from explicit values.
    #[must_use]
    pub const fn new(
        unavailable_sizes: Vec<Size>,
        initial_size_index: usize,
        initial_swatch_index: usize,
    ) -> Self {
        Self {
            unavailable_sizes,
            initial_size_index,
            initial_swatch_index,
        }
    }

    #[must_use]
    pub fn with_unavailable_sizes(mut self, sizes: Vec<Size>) -> Self {
        self.unavailable_sizes = sizes;
        self
    }

    #[must_use]
    pub const fn with_initial_size_index(mut self, index: usize) -> Self {
        self.initial_size_index = index;
        self
    }

    #[must_use]
    pub const fn with_initial_swatch_index(mut self, index: usize) -> Self {
        self.initial_swatch_index = index;
        self
    }

    /// Whether a size can be selected. Comparison is exact.
    #[must_use]
    pub fn is_size_available(&self, size: Size) -> bool {
        !self.unavailable_sizes.contains(&size)
    }

    #[must_use]
    pub fn unavailable_sizes(&self) -> &[Size] {
        &self.unavailable_sizes
    }

    #[must_use]
    pub const fn initial_size_index(&self) -> usize {
        self.initial_size_index
    }

    #[must_use]
    pub const fn initial_swatch_index(&self) -> usize {
        self.initial_swatch_index
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_blocks_exactly_seven() {
        let policy = SelectionPolicy::default();
        assert!(!policy.is_size_available("7".parse().unwrap()));
        assert!(!policy.is_size_available("7.0".parse().unwrap()));
        assert!(policy.is_size_available("7.5".parse().unwrap()));
        assert!(policy.is_size_available("6.5".parse().unwrap()));
        assert_eq!(policy.initial_size_index(), 2);
        assert_eq!(policy.initial_swatch_index(), 0);
    }

    #[test]
    fn test_custom_unavailable_sizes() {
        let policy = SelectionPolicy::default()
            .with_unavailable_sizes(vec!["5".parse().unwrap(), "8.5".parse().unwrap()]);
        assert!(policy.is_size_available("7".parse().unwrap()));
        assert!(!policy.is_size_available("8.5".parse().unwrap()));
    }
}
