use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, RegisterRequest, RegisterResponse, TokenResponse},
        extractors::CurrentUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::User,
    },
    state::AppState,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();
    payload.username = payload.username.trim().to_string();

    if payload.username.is_empty() {
        warn!("empty username");
        return Err((StatusCode::BAD_REQUEST, "Username is required".into()));
    }

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err((StatusCode::BAD_REQUEST, "Password too short".into()));
    }

    // Ensure username and email are not taken; the conflicting field is named.
    if let Ok(Some(_)) = User::find_by_username(&state.db, &payload.username).await {
        warn!(username = %payload.username, "username already registered");
        return Err((StatusCode::CONFLICT, "Username already exists".into()));
    }
    if let Ok(Some(_)) = User::find_by_email(&state.db, &payload.email).await {
        warn!(email = %payload.email, "email already registered");
        return Err((StatusCode::CONFLICT, "Email already exists".into()));
    }

    let hash = match hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "hash_password failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            ));
        }
    };

    let user = match User::create(
        &state.db,
        &payload.username,
        &payload.email,
        &payload.phone_number,
        &hash,
    )
    .await
    {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            ));
        }
    };

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user_id: user.id }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, String)> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Username and password are required".into(),
        ));
    }

    let user = match User::find_by_username(&state.db, payload.username.trim()).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(username = %payload.username, "login unknown username");
            return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()));
        }
        Err(e) => {
            error!(error = %e, "find_by_username failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            ));
        }
    };

    let ok = match verify_password(&payload.password, &user.password_hash) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "verify_password failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            ));
        }
    };

    if !ok {
        warn!(username = %payload.username, user_id = %user.id, "login invalid password");
        return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = match keys.sign(user.id) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "jwt sign failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            ));
        }
    };

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".into(),
    }))
}

#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(PublicUser {
        id: user.id,
        username: user.username,
        email: user.email,
        phone_number: user.phone_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("m@x.com"));
        assert!(is_valid_email("mia.long+tag@example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn token_response_serialization() {
        let response = TokenResponse {
            access_token: "abc.def.ghi".into(),
            token_type: "bearer".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("access_token"));
        assert!(json.contains("bearer"));
    }

    #[test]
    fn public_user_hides_nothing_it_should_show() {
        let response = PublicUser {
            id: uuid::Uuid::new_v4(),
            username: "mia".into(),
            email: "m@x.com".into(),
            phone_number: "+4712345678".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("mia"));
        assert!(json.contains("m@x.com"));
    }
}
