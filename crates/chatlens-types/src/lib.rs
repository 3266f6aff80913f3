//! Shared domain types for Chatlens.
//!
//! This crate contains the core domain types used across the Chatlens admin
//! viewer: User, Chat, Message (and its parts), Vote, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod error;
pub mod message;
pub mod user;
pub mod vote;
