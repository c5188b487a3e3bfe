use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::auth::repo_types::User;
use crate::state::AppState;

/// Resolves the bearer token to the full user row. This is the only way a
/// handler obtains an identity; everything it reads or writes afterwards is
/// scoped by `user.id`.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing Authorization header".to_string(),
            ))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header".to_string(),
            ))?;

        let keys = JwtKeys::from_ref(state);
        let claims = match keys.verify(token) {
            Some(c) => c,
            None => {
                warn!("invalid token");
                return Err((StatusCode::UNAUTHORIZED, "Invalid token".to_string()));
            }
        };

        // The user may have been deleted after the token was issued.
        let user = User::find_by_id(&state.db, claims.sub)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "user lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            })?
            .ok_or_else(|| {
                warn!(user_id = %claims.sub, "token for unknown user");
                (StatusCode::UNAUTHORIZED, "User not found".to_string())
            })?;

        Ok(CurrentUser(user))
    }
}
