//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use like_core::TargetId;

use crate::response::ApiError;

/// The feed id in `/feeds/:id/...`
#[derive(Debug, Clone, Copy)]
pub struct TargetPath(pub TargetId);

#[async_trait]
impl<S> FromRequestParts<S> for TargetPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_input(e.body_text()))?;

        let target_id = TargetId::parse(&raw)
            .map_err(|_| ApiError::invalid_input(format!("Invalid feed id: {raw}")))?;

        Ok(TargetPath(target_id))
    }
}
