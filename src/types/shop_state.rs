use std::collections::{HashMap, HashSet};

/// Ephemeral viewer state for one reel session: wishlist marks, cart counts,
/// and the shop panel flag. Lives for the screen's lifetime only and is never
/// serialized; a fresh screen starts empty.
#[derive(Debug, Clone, Default)]
pub struct ShopState {
    wishlist: HashSet<String>,
    cart: HashMap<String, u32>,
    pub panel_visible: bool,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip wishlist membership for a product. Applying it twice restores
    /// the original state.
    pub fn toggle_wishlist(&mut self, product_id: &str) {
        if !self.wishlist.remove(product_id) {
            self.wishlist.insert(product_id.to_string());
        }
    }

    pub fn is_wishlisted(&self, product_id: &str) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Bump the cart quantity for a product. There is no decrement; removing
    /// items from the cart is out of scope for this prototype.
    pub fn add_to_cart(&mut self, product_id: &str) {
        *self.cart.entry(product_id.to_string()).or_insert(0) += 1;
    }

    pub fn cart_quantity(&self, product_id: &str) -> u32 {
        self.cart.get(product_id).copied().unwrap_or(0)
    }

    /// Total number of items across the cart, for the tab badge.
    pub fn cart_total(&self) -> u32 {
        self.cart.values().sum()
    }
}
