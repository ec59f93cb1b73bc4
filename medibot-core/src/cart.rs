//! Cart capability handed to the assistant.
//!
//! Recommendations expose "add to cart" actions; where they go is decided by
//! whoever builds the assistant. [`NoopCart`] is used when no cart exists.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single "add to cart" request derived from a medicine line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartAction {
    pub product_name: String,
    pub price: f64,
}

/// What happened to an add request.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAdd {
    /// New line item.
    Added { product_name: String },
    /// Existing item, quantity bumped.
    Incremented { product_name: String, quantity: u32 },
    /// No cart is wired in.
    Unavailable,
}

impl CartAdd {
    pub fn message(&self) -> String {
        match self {
            CartAdd::Added { product_name } => format!("✅ Added {product_name} to your cart!"),
            CartAdd::Incremented {
                product_name,
                quantity,
            } => format!("✅ Added {product_name} to your cart! (quantity: {quantity})"),
            CartAdd::Unavailable => "⚠️ Cart is not available right now.".to_string(),
        }
    }
}

pub trait CartSink {
    fn add(&mut self, action: &CartAction) -> Result<CartAdd>;
}

/// Fallback sink: accepts nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCart;

impl CartSink for NoopCart {
    fn add(&mut self, action: &CartAction) -> Result<CartAdd> {
        tracing::warn!(product = %action.product_name, "no cart configured; dropping add request");
        Ok(CartAdd::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_cart_reports_unavailable() {
        let mut cart = NoopCart;
        let r = cart
            .add(&CartAction {
                product_name: "Paracetamol 500mg".to_string(),
                price: 50.0,
            })
            .unwrap();
        assert_eq!(r, CartAdd::Unavailable);
        assert!(r.message().contains("not available"));
    }
}
