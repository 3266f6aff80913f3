//! Infrastructure implementations for Chatlens.
//!
//! SQLite-backed repositories implementing the traits from `chatlens-core`,
//! built on sqlx with a split reader/writer pool.

pub mod sqlite;
