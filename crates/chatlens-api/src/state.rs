//! Application state wiring the services to their SQLite implementations.
//!
//! Services are generic over repository traits; AppState pins them to the
//! concrete infra implementations.

use std::sync::Arc;

use chatlens_core::service::{ConversationService, DigestService, HistoryService};
use chatlens_infra::sqlite::pool::{DatabasePool, default_database_url, resolve_data_dir};
use chatlens_infra::sqlite::{
    SqliteChatRepository, SqliteMessageRepository, SqliteUserRepository,
};

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteHistoryService = HistoryService<SqliteChatRepository>;
pub type ConcreteConversationService =
    ConversationService<SqliteChatRepository, SqliteMessageRepository>;
pub type ConcreteDigestService = DigestService<SqliteMessageRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<SqliteUserRepository>,
    pub history: Arc<ConcreteHistoryService>,
    pub conversations: Arc<ConcreteConversationService>,
    pub digest: Arc<ConcreteDigestService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the DB, wire services.
    ///
    /// With no explicit URL the database lives under the resolved data
    /// directory, which is created if missing.
    pub async fn init(database_url: Option<String>) -> anyhow::Result<Self> {
        let db_url = match database_url {
            Some(url) => url,
            None => {
                tokio::fs::create_dir_all(resolve_data_dir()).await?;
                default_database_url()
            }
        };

        let db_pool = DatabasePool::new(&db_url).await?;

        let history = HistoryService::new(SqliteChatRepository::new(db_pool.clone()));
        let conversations = ConversationService::new(
            SqliteChatRepository::new(db_pool.clone()),
            SqliteMessageRepository::new(db_pool.clone()),
        );
        let digest = DigestService::new(SqliteMessageRepository::new(db_pool.clone()));
        let users = SqliteUserRepository::new(db_pool.clone());

        Ok(Self {
            users: Arc::new(users),
            history: Arc::new(history),
            conversations: Arc::new(conversations),
            digest: Arc::new(digest),
            db_pool,
        })
    }
}
