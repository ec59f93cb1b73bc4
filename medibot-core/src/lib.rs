//! medibot-core: symptom catalogue, rule engine and conversation flow for MediBot

pub mod answers;
pub mod assistant;
pub mod cart;
pub mod catalogue;
pub mod checks;
pub mod classifier;
pub mod flow;
pub mod medicine;
pub mod recommendation;
pub mod rules;
pub mod sessions;
pub mod symptom;
pub mod transcript;

pub use answers::Answers;
pub use assistant::{Assistant, Reply};
pub use cart::{CartAction, CartAdd, CartSink, NoopCart};
pub use catalogue::{Catalogue, SymptomProtocol};
pub use checks::{CheckLog, CheckRecord, NoopLog};
pub use classifier::classify;
pub use flow::{Session, Step};
pub use medicine::MedicineRecommendation;
pub use recommendation::{Block, Recommendation, format_price};
pub use rules::{Item, Rule, Stage};
pub use sessions::{SessionId, SessionRegistry};
pub use symptom::SymptomKey;
pub use transcript::{ChatTurn, Message, Role, Speaker};
