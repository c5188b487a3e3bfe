use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::extractors::CurrentUser,
    finance::dto::{
        parse_due_date, CreateExpenseRequest, CreateReminderRequest, CreateSavingsJarRequest,
        CreatedResponse, ExpenseItem, ReminderItem, SavingsJarItem,
    },
    finance::repo_types::{Expense, Reminder, SavingsJar},
    state::AppState,
};

pub fn expense_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses))
        .route("/expenses", post(create_expense))
}

pub fn savings_jar_routes() -> Router<AppState> {
    Router::new()
        .route("/savings-jars", get(list_savings_jars))
        .route("/savings-jars", post(create_savings_jar))
}

pub fn reminder_routes() -> Router<AppState> {
    Router::new()
        .route("/reminders", get(list_reminders))
        .route("/reminders", post(create_reminder))
}

#[instrument(skip(state, user))]
pub async fn list_expenses(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ExpenseItem>>, (StatusCode, String)> {
    let rows = Expense::list_by_user(&state.db, user.id)
        .await
        .map_err(internal)?;
    let items = rows
        .into_iter()
        .map(|e| ExpenseItem {
            id: e.id,
            category: e.category,
            amount: e.amount,
            note: e.note,
            recurring: e.recurring,
            created_at: e.created_at,
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, user, payload))]
pub async fn create_expense(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), (StatusCode, String)> {
    if payload.category.trim().is_empty() {
        warn!("expense without category");
        return Err((StatusCode::BAD_REQUEST, "Category is required".into()));
    }
    if payload.amount <= Decimal::ZERO {
        warn!(amount = %payload.amount, "non-positive expense amount");
        return Err((StatusCode::BAD_REQUEST, "Amount must be positive".into()));
    }

    let expense = Expense::create(
        &state.db,
        user.id,
        payload.category.trim(),
        payload.amount,
        payload.note.as_deref(),
        payload.recurring,
    )
    .await
    .map_err(internal)?;

    info!(user_id = %user.id, expense_id = %expense.id, "expense created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: expense.id,
            created_at: expense.created_at,
        }),
    ))
}

#[instrument(skip(state, user))]
pub async fn list_savings_jars(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<SavingsJarItem>>, (StatusCode, String)> {
    let rows = SavingsJar::list_by_user(&state.db, user.id)
        .await
        .map_err(internal)?;
    let items = rows
        .into_iter()
        .map(|j| SavingsJarItem {
            id: j.id,
            name: j.name,
            goal: j.goal,
            description: j.description,
            progress: j.progress,
            created_at: j.created_at,
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, user, payload))]
pub async fn create_savings_jar(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateSavingsJarRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), (StatusCode, String)> {
    if payload.name.trim().is_empty() {
        warn!("savings jar without name");
        return Err((StatusCode::BAD_REQUEST, "Name is required".into()));
    }
    if payload.goal <= Decimal::ZERO {
        warn!(goal = %payload.goal, "non-positive savings goal");
        return Err((StatusCode::BAD_REQUEST, "Goal must be positive".into()));
    }
    if !(0..=100).contains(&payload.progress) {
        warn!(progress = payload.progress, "progress out of range");
        return Err((
            StatusCode::BAD_REQUEST,
            "Progress must be between 0 and 100".into(),
        ));
    }

    let jar = SavingsJar::create(
        &state.db,
        user.id,
        payload.name.trim(),
        payload.goal,
        payload.description.as_deref(),
        payload.progress,
    )
    .await
    .map_err(internal)?;

    info!(user_id = %user.id, jar_id = %jar.id, "savings jar created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: jar.id,
            created_at: jar.created_at,
        }),
    ))
}

#[instrument(skip(state, user))]
pub async fn list_reminders(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ReminderItem>>, (StatusCode, String)> {
    let rows = Reminder::list_by_user(&state.db, user.id)
        .await
        .map_err(internal)?;
    let items = rows
        .into_iter()
        .map(|r| ReminderItem {
            id: r.id,
            name: r.name,
            amount: r.amount,
            due_at: r.due_at,
            created_at: r.created_at,
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, user, payload))]
pub async fn create_reminder(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateReminderRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), (StatusCode, String)> {
    if payload.name.trim().is_empty() {
        warn!("reminder without name");
        return Err((StatusCode::BAD_REQUEST, "Name is required".into()));
    }
    let due_at = match parse_due_date(&payload.due_date) {
        Some(d) => d,
        None => {
            warn!(due_date = %payload.due_date, "malformed due date");
            return Err((StatusCode::BAD_REQUEST, "Invalid date format".into()));
        }
    };

    let reminder = Reminder::create(&state.db, user.id, payload.name.trim(), payload.amount, due_at)
        .await
        .map_err(internal)?;

    info!(user_id = %user.id, reminder_id = %reminder.id, "reminder created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: reminder.id,
            created_at: reminder.created_at,
        }),
    ))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    error!(error = %e, "repository failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".into(),
    )
}
