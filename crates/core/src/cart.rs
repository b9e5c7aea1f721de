//! Session cart.
//!
//! Lines are merged by [`LineKey`]: adding the same product with the same
//! selection bumps the existing line's quantity instead of appending a
//! duplicate. Insertion order is display order.

use crate::catalog::Product;
use crate::types::{DEFAULT_CURRENCY_SYMBOL, LineKey, Price, ProductId, Selection};

impl LineKey {
    /// Derive the key for a product and selection.
    ///
    /// The selection part is its canonical encoding, so option order never
    /// matters: `{size, color}` and `{color, size}` give the same key.
    #[must_use]
    pub fn from_parts(product_id: &ProductId, selection: &Selection) -> Self {
        Self::new(format!("{product_id}{}", selection.canonical()))
    }
}

/// An add-to-cart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub currency: String,
    pub quantity: u32,
    pub selection: Selection,
}

impl CartItem {
    /// Quantity 1, default currency, no selection.
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            currency: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            quantity: 1,
            selection: Selection::new(),
        }
    }

    /// Snapshot a catalog product's id, name, price and currency.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self::new(product.id.clone(), product.name.clone(), product.price)
            .with_currency(product.currency_symbol())
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    /// The key this item merges under.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::from_parts(&self.product_id, &self.selection)
    }
}

/// One distinct purchasable configuration in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    key: LineKey,
    product_id: ProductId,
    name: String,
    price: Price,
    currency: String,
    quantity: u32,
    selection: Selection,
}

impl CartLine {
    #[must_use]
    pub const fn key(&self) -> &LineKey {
        &self.key
    }

    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price captured when the line was created.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A mutable, session-only collection of cart lines.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add an item, merging into an existing line with the same key.
    ///
    /// A quantity of 0 counts as 1. Returns the key of the affected line.
    pub fn add(&mut self, item: CartItem) -> LineKey {
        let key = item.key();
        let quantity = item.quantity.max(1);

        if let Some(line) = self.lines.iter_mut().find(|line| line.key == key) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                key: key.clone(),
                product_id: item.product_id,
                name: item.name,
                price: item.price,
                currency: item.currency,
                quantity,
                selection: item.selection,
            });
        }

        key
    }

    /// Remove the line with this key. Does nothing if there is none.
    pub fn remove(&mut self, key: &LineKey) {
        self.lines.retain(|line| &line.key != key);
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price * quantity` across all lines, in minor units.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by key.
    #[must_use]
    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.key == key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn r1() -> CartItem {
        CartItem::new("r1", "First Product Name", Price::from_minor(1500))
    }

    fn cuff(size: &str, color: &str) -> CartItem {
        CartItem::new("lexic-cuff", "The Lexic Cuff Ring", Price::from_minor(6990)).with_selection(
            Selection::new()
                .with(Selection::SIZE, size)
                .with(Selection::COLOR, color),
        )
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_same_key_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(r1());
        cart.add(r1());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 2);

        cart.add(r1().with_quantity(3));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity(), 5);
    }

    #[test]
    fn test_distinct_selection_creates_distinct_lines() {
        let mut cart = Cart::new();
        let first = cart.add(cuff("6", "#ffffff"));
        let second = cart.add(cuff("6.5", "#ffffff"));
        assert_ne!(first, second);
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_selection_order_does_not_split_lines() {
        let mut cart = Cart::new();
        let product = ProductId::new("lexic-cuff");
        let forward = Selection::new().with("size", "6").with("color", "#ffffff");
        let backward = Selection::new().with("color", "#ffffff").with("size", "6");
        assert_eq!(
            LineKey::from_parts(&product, &forward),
            LineKey::from_parts(&product, &backward)
        );

        cart.add(cuff("6", "#ffffff"));
        cart.add(
            CartItem::new("lexic-cuff", "The Lexic Cuff Ring", Price::from_minor(6990))
                .with_selection(backward),
        );
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_no_selection_and_empty_selection_share_a_key() {
        let plain = r1();
        let empty = r1().with_selection(Selection::new());
        assert_eq!(plain.key(), empty.key());
        assert_eq!(plain.key().as_str(), "r1{}");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(CartItem::new("r2", "Second", Price::from_minor(1500)));
        cart.add(r1());
        cart.add(CartItem::new("r2", "Second", Price::from_minor(1500)));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id().as_str()).collect();
        assert_eq!(ids, ["r2", "r1"]);
    }

    #[test]
    fn test_total_and_count_consistency() {
        let mut cart = Cart::new();
        cart.add(r1().with_quantity(2));
        cart.add(cuff("6.5", "#f0c7a0"));
        cart.add(cuff("5", "#ffffff").with_quantity(4));

        let expected_total: u64 = cart
            .lines()
            .iter()
            .map(|l| l.price().minor_units() * u64::from(l.quantity()))
            .sum();
        let expected_count: u64 = cart.lines().iter().map(|l| u64::from(l.quantity())).sum();

        assert_eq!(cart.total().minor_units(), expected_total);
        assert_eq!(cart.total().minor_units(), 2 * 1500 + 6990 + 4 * 6990);
        assert_eq!(cart.count(), expected_count);
        assert_eq!(cart.count(), 7);
    }

    #[test]
    fn test_zero_quantity_counts_as_one() {
        let mut cart = Cart::new();
        cart.add(r1().with_quantity(0));
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        let key = cart.add(r1().with_quantity(3));
        cart.add(cuff("6", "#ffffff"));

        cart.remove(&key);
        assert!(cart.line(&key).is_none());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add(r1());
        cart.remove(&LineKey::new("nope{}"));
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_price_is_captured_at_add_time() {
        let mut product = Product::new("r1", "First", Price::from_minor(1500));
        let mut cart = Cart::new();
        let key = cart.add(CartItem::from_product(&product));

        product.price = Price::from_minor(9999);
        cart.add(CartItem::from_product(&product));

        let line = cart.line(&key).unwrap();
        assert_eq!(line.price(), Price::from_minor(1500));
        assert_eq!(line.quantity(), 2);
    }
}
