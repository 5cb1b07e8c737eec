//! PostgreSQL implementation of UserProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use like_core::entities::UserProfile;
use like_core::traits::{RepoResult, UserProfileRepository};
use like_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserProfileRepository
#[derive(Clone)]
pub struct PgUserProfileRepository {
    pool: PgPool,
}

impl PgUserProfileRepository {
    /// Create a new PgUserProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for PgUserProfileRepository {
    #[instrument(skip(self))]
    async fn find_profile(&self, user_id: UserId) -> RepoResult<Option<UserProfile>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, nickname, avatar
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(UserProfile::try_from).transpose()
    }
}
