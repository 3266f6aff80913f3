//! HTTP layer: router, handlers, extractors, error mapping.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;
