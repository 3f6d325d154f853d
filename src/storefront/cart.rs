use crate::api::response::ProductResponse;

/// One cart line: the product attributes the shopper saw, frozen at the
/// moment of adding, plus the chosen quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub material: String,
    pub stone: String,
    pub size: String,
    pub quantity: i64,
}

impl CartItem {
    pub fn from_product(product: &ProductResponse, quantity: i64) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            material: product.material.clone(),
            stone: product.stone.clone(),
            size: product.size.clone(),
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// The shopping cart. Lines keep their insertion order; adding a product
/// that is already present merges into the existing line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn add(&mut self, product: &ProductResponse, quantity: i64) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(CartItem::from_product(product, quantity)),
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        self.items.retain(|item| item.id != product_id);
    }

    /// Sets the quantity of a line; zero or less removes it. Unknown ids
    /// are ignored.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of units across all lines, the badge count next to the cart
    /// icon.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
