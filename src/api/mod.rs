pub mod client;
pub mod exchange;
pub mod types;

pub use client::{ChatBackend, HttpChatBackend, RequestError};
pub use exchange::run_exchange;
pub use types::{ChatRequest, ChatResponse};
