//! medibot-store: JSON list storage, the local cart and symptom-check history

pub mod cart;
pub mod list_store;
pub mod records;

pub use cart::{CartItem, LocalCart};
pub use list_store::ListStore;
pub use records::CheckHistory;
