//! UserRepository trait definition.

use chatlens_types::error::RepositoryError;
use chatlens_types::user::User;
use uuid::Uuid;

/// Read-only access to user accounts.
///
/// Accounts are provisioned by the external auth system; this viewer never
/// writes them.
pub trait UserRepository: Send + Sync {
    /// List all users, ordered by email ascending.
    fn list_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<User>, RepositoryError>> + Send;

    /// Look up a single user by id.
    fn get_user(
        &self,
        user_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;
}
