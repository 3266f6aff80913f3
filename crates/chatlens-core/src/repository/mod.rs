//! Repository trait definitions.
//!
//! Implementations live in chatlens-infra (SQLite via sqlx). All traits use
//! native async fn in traits (RPITIT, Rust 2024 edition).

pub mod chat;
pub mod message;
pub mod user;

pub use chat::{ChatRepository, PageBoundary, PageDirection};
pub use message::{DigestRow, MessageRepository};
pub use user::UserRepository;
