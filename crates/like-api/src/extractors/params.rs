//! Like endpoint parameters
//!
//! Parameters may arrive in a form body, in the query string, or split across
//! both. Form values win over query values for the same key.

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::header,
    Form,
};
use like_service::dto::LikeParams;
use validator::Validate;

use crate::response::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Validated like parameters merged from form body and query string
#[derive(Debug, Clone)]
pub struct LikeRequestParams(pub LikeParams);

#[async_trait]
impl<S> FromRequest<S> for LikeRequestParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<LikeParams>::try_from_uri(req.uri())
            .map_err(|e| ApiError::invalid_input(e.body_text()))?;

        let params = if has_form_body(&req) {
            let Form(form) = Form::<LikeParams>::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_input(e.body_text()))?;
            form.or(query)
        } else {
            query
        };

        params.validate()?;

        Ok(LikeRequestParams(params))
    }
}

fn has_form_body(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with(FORM_CONTENT_TYPE))
}
