//! Query services and repository trait definitions for Chatlens.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, the read services built on top of them, and the viewer
//! selection model. It depends only on `chatlens-types` -- never on
//! `chatlens-infra` or any database/IO crate.

pub mod repository;
pub mod service;
pub mod viewer;
