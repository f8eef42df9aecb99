//! Shopping cart kept in the session storage area.
//!
//! The cart is an insertion-ordered list of [`CartItem`] serialized as a
//! bare JSON array under [`CART_KEY`]. An absent or unreadable value is an
//! empty cart.

mod render;

pub use render::{format_money, render_cart, CartView};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use crate::storage::{parse_or_default, to_json, Result, SessionStore, CART_KEY};

/// One product line in the cart. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Unit price in currency units.
    pub price: f64,
    /// Always at least 1; a stored 0 reads as 1.
    #[serde(default = "default_qty", deserialize_with = "deserialize_qty")]
    pub qty: u32,
}

fn default_qty() -> u32 {
    1
}

fn deserialize_qty<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::deserialize(deserializer)?.max(1))
}

impl CartItem {
    /// Create an item with quantity 1. Negative or non-finite prices become 0.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        let price = if price.is_finite() && price > 0.0 {
            price
        } else {
            0.0
        };
        Self {
            id: id.into(),
            name: name.into(),
            price,
            qty: 1,
        }
    }

    /// `price * qty`.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// Ordered cart contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of `item`.
    ///
    /// The first entry with the same id gets `qty + 1`; the quantity carried
    /// by `item` is ignored. Otherwise `item` is appended with quantity 1.
    pub fn add(&mut self, mut item: CartItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.qty = existing.qty.saturating_add(1),
            None => {
                item.qty = 1;
                self.items.push(item);
            }
        }
    }

    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |units, item| units.saturating_add(item.qty))
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

/// Reads and writes the cart in the session area.
#[derive(Debug, Clone)]
pub struct CartManager {
    session: SessionStore,
}

impl CartManager {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Current cart. Never fails: a missing, malformed or unreadable value
    /// yields an empty cart.
    pub async fn get_cart(&self) -> Cart {
        let raw = match self.session.get(CART_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    scope = self.session.scope(),
                    key = CART_KEY,
                    error = %e,
                    "Cart read failed, using empty cart"
                );
                None
            }
        };
        parse_or_default(raw.as_deref(), Cart::new())
    }

    /// Replace the stored cart with `cart`.
    pub async fn set_cart(&self, cart: &Cart) -> Result<()> {
        let encoded = to_json(cart)?;
        self.session.set(CART_KEY, &encoded).await?;
        debug!(items = cart.len(), "Cart stored");
        Ok(())
    }

    /// Remove the cart key entirely.
    pub async fn clear_cart(&self) -> Result<()> {
        self.session.remove(CART_KEY).await?;
        info!("Cart cleared");
        Ok(())
    }

    /// Add one unit of `item` and store the result.
    pub async fn add_to_cart(&self, item: CartItem) -> Result<()> {
        let mut cart = self.get_cart().await;
        let id = item.id.clone();
        cart.add(item);
        self.set_cart(&cart).await?;
        info!(item_id = %id, lines = cart.len(), units = cart.unit_count(), "Item added to cart");
        Ok(())
    }
}
