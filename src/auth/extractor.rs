use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::jwt;
use crate::config::AuthMode;
use crate::error::AppError;
use crate::state::SharedState;

/// Identity of the requesting user.
///
/// With auth disabled no token is inspected and `user_id` is `None`. With auth
/// enabled extraction fails unless a valid bearer token or `access_token`
/// cookie is present, so handlers never see an anonymous caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Option<i32>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn user(user_id: i32) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}

impl FromRequestParts<SharedState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let secret = match &state.config.auth {
            AuthMode::Disabled => return Ok(Caller::anonymous()),
            AuthMode::Enabled { jwt_secret } => jwt_secret,
        };

        let token = bearer_token(parts)?.or_else(|| {
            CookieJar::from_headers(&parts.headers)
                .get("access_token")
                .map(|c| c.value().to_string())
        });

        let Some(token) = token else {
            return Err(AppError::Unauthorized(
                "Missing authentication token".to_string(),
            ));
        };

        let claims = jwt::decode_token(&token, secret).map_err(|e| {
            tracing::debug!("Rejected token: {e}");
            AppError::Unauthorized("Invalid or expired token".to_string())
        })?;

        Ok(Caller::user(claims.sub))
    }
}

fn bearer_token(parts: &Parts) -> Result<Option<String>, AppError> {
    let Some(header) = parts.headers.get("authorization") else {
        return Ok(None);
    };
    let value = header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;
    Ok(value.strip_prefix("Bearer ").map(str::to_string))
}
