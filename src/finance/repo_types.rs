use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A single expense, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub amount: Decimal,
    pub note: Option<String>,
    pub recurring: bool,
    pub created_at: OffsetDateTime,
}

/// A savings goal with a progress counter.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavingsJar {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub goal: Decimal,
    pub description: Option<String>,
    pub progress: i32,
    pub created_at: OffsetDateTime,
}

/// A payment reminder due at a specific point in time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reminder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub due_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
}
