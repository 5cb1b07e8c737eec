//! PostgreSQL implementation of LikeActionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use like_core::entities::LikeAction;
use like_core::traits::{LikeActionPage, LikeActionRepository, LikeQuery, RepoResult};
use like_core::value_objects::{TargetId, UserId};

use crate::models::LikeActionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LikeActionRepository
#[derive(Clone)]
pub struct PgLikeActionRepository {
    pool: PgPool,
}

impl PgLikeActionRepository {
    /// Create a new PgLikeActionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeActionRepository for PgLikeActionRepository {
    #[instrument(skip(self))]
    async fn find_by_participants(
        &self,
        user_id: UserId,
        target_id: TargetId,
    ) -> RepoResult<Option<LikeAction>> {
        let result = sqlx::query_as::<_, LikeActionModel>(
            r#"
            SELECT user_id, target_id, mood, deleted, created_at, updated_at
            FROM like_actions
            WHERE user_id = $1 AND target_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(LikeAction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_target(
        &self,
        target_id: TargetId,
        query: LikeQuery,
    ) -> RepoResult<LikeActionPage> {
        let mood = query.mood.map(|m| m.as_i32());

        let rows = sqlx::query_as::<_, LikeActionModel>(
            r#"
            SELECT user_id, target_id, mood, deleted, created_at, updated_at
            FROM like_actions
            WHERE target_id = $1
              AND deleted = FALSE
              AND ($2::INT IS NULL OR mood = $2)
            ORDER BY updated_at DESC
            LIMIT $3
            "#,
        )
        .bind(target_id.into_inner())
        .bind(mood)
        .bind(i64::from(query.limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM like_actions
            WHERE target_id = $1
              AND deleted = FALSE
              AND ($2::INT IS NULL OR mood = $2)
            "#,
        )
        .bind(target_id.into_inner())
        .bind(mood)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        // A corrupt row drops out of the page; `total` still counts it
        let actions = rows
            .into_iter()
            .filter_map(|row| {
                let user_id = row.user_id;
                match LikeAction::try_from(row) {
                    Ok(action) => Some(action),
                    Err(e) => {
                        warn!(user_id, error = %e, "Skipping unreadable like row");
                        None
                    }
                }
            })
            .collect();

        Ok(LikeActionPage { actions, total })
    }
}
