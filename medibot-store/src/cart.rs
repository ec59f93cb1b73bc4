//! File-backed shopping cart under the `cart` key.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medibot_core::cart::{CartAction, CartAdd, CartSink};
use medibot_core::format_price;

use crate::list_store::ListStore;

pub const CART_KEY: &str = "cart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    /// When the item was first added.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct LocalCart {
    store: ListStore,
}

impl LocalCart {
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }

    pub fn items(&self) -> Result<Vec<CartItem>> {
        self.store.load(CART_KEY)
    }

    /// Sum of quantities (the badge number).
    pub fn count(&self) -> Result<u32> {
        Ok(self.items()?.iter().map(|i| i.quantity).sum())
    }

    pub fn total(&self) -> Result<f64> {
        Ok(self.items()?.iter().map(CartItem::subtotal).sum())
    }

    /// Drop the item with this name, ignoring case and surrounding spaces.
    /// Returns whether it was present.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let name = name.trim();
        let mut items = self.items()?;
        let before = items.len();
        items.retain(|i| !i.name.eq_ignore_ascii_case(name));
        if items.len() == before {
            return Ok(false);
        }
        self.store.save(CART_KEY, &items)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.save::<CartItem>(CART_KEY, &[])
    }

    /// One line per item plus the total, for printing.
    pub fn summary(&self) -> Result<String> {
        let items = self.items()?;
        if items.is_empty() {
            return Ok("Your cart is empty.".to_string());
        }
        let mut out = String::new();
        for i in &items {
            out.push_str(&format!(
                "{} x{} @ {} = {}\n",
                i.name,
                i.quantity,
                format_price(i.price),
                format_price(i.subtotal())
            ));
        }
        let total: f64 = items.iter().map(CartItem::subtotal).sum();
        out.push_str(&format!("Total: {}", format_price(total)));
        Ok(out)
    }
}

impl CartSink for LocalCart {
    fn add(&mut self, action: &CartAction) -> Result<CartAdd> {
        let mut items = self.items()?;
        let outcome = match items.iter_mut().find(|i| i.name == action.product_name) {
            Some(existing) => {
                existing.quantity += 1;
                CartAdd::Incremented {
                    product_name: existing.name.clone(),
                    quantity: existing.quantity,
                }
            }
            None => {
                items.push(CartItem {
                    name: action.product_name.clone(),
                    price: action.price,
                    quantity: 1,
                    timestamp: Utc::now(),
                });
                CartAdd::Added {
                    product_name: action.product_name.clone(),
                }
            }
        };
        self.store.save(CART_KEY, &items)?;
        tracing::info!(product = %action.product_name, price = action.price, "cart updated");
        Ok(outcome)
    }
}
