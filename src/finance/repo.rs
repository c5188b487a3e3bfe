use rust_decimal::Decimal;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::finance::repo_types::{Expense, Reminder, SavingsJar};

impl Expense {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Expense>> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, category, amount, note, recurring, created_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        category: &str,
        amount: Decimal,
        note: Option<&str>,
        recurring: bool,
    ) -> anyhow::Result<Expense> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (user_id, category, amount, note, recurring)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, category, amount, note, recurring, created_at
            "#,
        )
        .bind(user_id)
        .bind(category)
        .bind(amount)
        .bind(note)
        .bind(recurring)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}

impl SavingsJar {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<SavingsJar>> {
        let rows = sqlx::query_as::<_, SavingsJar>(
            r#"
            SELECT id, user_id, name, goal, description, progress, created_at
            FROM savings_jars
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        goal: Decimal,
        description: Option<&str>,
        progress: i32,
    ) -> anyhow::Result<SavingsJar> {
        let row = sqlx::query_as::<_, SavingsJar>(
            r#"
            INSERT INTO savings_jars (user_id, name, goal, description, progress)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, goal, description, progress, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(goal)
        .bind(description)
        .bind(progress)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}

impl Reminder {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, Reminder>(
            r#"
            SELECT id, user_id, name, amount, due_at, created_at
            FROM reminders
            WHERE user_id = $1
            ORDER BY due_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        amount: Decimal,
        due_at: OffsetDateTime,
    ) -> anyhow::Result<Reminder> {
        let row = sqlx::query_as::<_, Reminder>(
            r#"
            INSERT INTO reminders (user_id, name, amount, due_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, amount, due_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(amount)
        .bind(due_at)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
