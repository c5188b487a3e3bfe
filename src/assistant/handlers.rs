use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, instrument};

use crate::{
    assistant::context::build_context,
    assistant::dto::{AskRequest, AskResponse},
    auth::extractors::CurrentUser,
    auth::repo_types::User,
    state::AppState,
};

pub const SYSTEM_PROMPT: &str = "You are a helpful personal finance assistant.";

/// Returned when the user's data could not be fetched.
pub const DATA_FALLBACK: &str = "Sorry, I couldn't retrieve your data.";

/// Returned when the model call itself fails. The underlying error goes to
/// the log, never to the client.
pub const MODEL_FALLBACK: &str = "Sorry, something went wrong while answering your question.";

pub fn assistant_routes() -> Router<AppState> {
    Router::new().route("/assistant/ask", post(ask))
}

#[instrument(skip(state, user, payload))]
pub async fn ask(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<AskRequest>,
) -> Json<AskResponse> {
    let answer = answer_query(&state, &user, &payload.query).await;
    Json(AskResponse { answer })
}

/// The full ask path: context assembly, then the model call. Always yields a
/// string; both failure legs collapse to fixed fallback text.
pub async fn answer_query(state: &AppState, user: &User, query: &str) -> String {
    let context = match build_context(&state.db, user.id).await {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, user_id = %user.id, "context assembly failed");
            return DATA_FALLBACK.to_string();
        }
    };

    let prompt = format!("{context}User Query: {query}");
    match state.assistant.complete(SYSTEM_PROMPT, &prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            error!(error = %e, user_id = %user.id, "model call failed");
            MODEL_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "mia".into(),
            email: "m@x.com".into(),
            phone_number: "+4712345678".into(),
            password_hash: "unused".into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn ask_falls_back_when_data_fetch_fails() {
        // The fake state's pool points at a closed port, so every fetch in
        // build_context fails and the literal fallback must come back.
        let state = AppState::fake();
        let answer = answer_query(&state, &test_user(), "how much did I spend?").await;
        assert_eq!(answer, DATA_FALLBACK);
    }

    #[test]
    fn ask_response_serialization() {
        let response = AskResponse {
            answer: "You spent 12.50 on Food.".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("answer"));
        assert!(json.contains("12.50"));
    }
}
