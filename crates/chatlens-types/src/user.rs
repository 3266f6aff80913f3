//! User account type.
//!
//! Users are created by the external auth system; this viewer only reads them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account as stored by the auth system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
}
