use sqlx::PgPool;
use std::fmt::Write;
use uuid::Uuid;

use crate::finance::repo_types::{Expense, Reminder, SavingsJar};

/// Fetch everything the user owns and flatten it into the textual context
/// block sent to the model. The three fetches run concurrently; if any of
/// them fails the whole assembly fails, so the caller never sees a context
/// built from a subset of the categories.
pub async fn build_context(db: &PgPool, user_id: Uuid) -> anyhow::Result<String> {
    let (expenses, jars, reminders) = tokio::join!(
        Expense::list_by_user(db, user_id),
        SavingsJar::list_by_user(db, user_id),
        Reminder::list_by_user(db, user_id),
    );
    let (expenses, jars, reminders) = merge_fetches(expenses, jars, reminders)?;
    Ok(render_context(&expenses, &jars, &reminders))
}

/// Collapse the three fetch results into one. A single failed leg fails the
/// whole assembly; the model must never see a context missing a category it
/// cannot tell apart from "no data".
fn merge_fetches(
    expenses: anyhow::Result<Vec<Expense>>,
    jars: anyhow::Result<Vec<SavingsJar>>,
    reminders: anyhow::Result<Vec<Reminder>>,
) -> anyhow::Result<(Vec<Expense>, Vec<SavingsJar>, Vec<Reminder>)> {
    Ok((expenses?, jars?, reminders?))
}

pub fn render_context(expenses: &[Expense], jars: &[SavingsJar], reminders: &[Reminder]) -> String {
    let mut out = String::from("User Information:\n");

    out.push_str("Expenses:\n");
    for e in expenses {
        let _ = write!(out, "- {}: {}", e.category, e.amount);
        if let Some(note) = &e.note {
            let _ = write!(out, " ({})", note);
        }
        if e.recurring {
            out.push_str(" [recurring]");
        }
        out.push('\n');
    }

    out.push_str("Savings Jars:\n");
    for j in jars {
        let _ = write!(out, "- {}: goal {}, progress {}%", j.name, j.goal, j.progress);
        if let Some(description) = &j.description {
            let _ = write!(out, " ({})", description);
        }
        out.push('\n');
    }

    out.push_str("Reminders:\n");
    for r in reminders {
        let _ = writeln!(out, "- {}: {} due {}", r.name, r.amount, r.due_at.date());
    }

    out.push_str("Please use this information to respond to the user's query.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use time::OffsetDateTime;

    fn expense(category: &str, amount: &str, note: Option<&str>, recurring: bool) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            category: category.into(),
            amount: amount.parse::<Decimal>().unwrap(),
            note: note.map(Into::into),
            recurring,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn one_failed_fetch_fails_the_whole_assembly() {
        // Expenses and jars came back fine; reminders did not. No partial
        // context may be built from the two healthy categories.
        let expenses = Ok(vec![expense("Food", "12.50", None, false)]);
        let jars = Ok(vec![]);
        let reminders = Err(anyhow::anyhow!("connection reset"));
        assert!(merge_fetches(expenses, jars, reminders).is_err());
    }

    #[test]
    fn all_successful_fetches_merge() {
        let merged = merge_fetches(Ok(vec![]), Ok(vec![]), Ok(vec![])).expect("all legs ok");
        assert!(merged.0.is_empty() && merged.1.is_empty() && merged.2.is_empty());
    }

    #[test]
    fn empty_collections_keep_all_headings() {
        let text = render_context(&[], &[], &[]);
        assert!(text.contains("Expenses:\n"));
        assert!(text.contains("Savings Jars:\n"));
        assert!(text.contains("Reminders:\n"));
        assert!(text.ends_with("Please use this information to respond to the user's query.\n"));
        // No data rows at all.
        assert!(!text.contains("- "));
    }

    #[test]
    fn renders_expense_rows_with_note_and_recurring_flag() {
        let expenses = vec![
            expense("Food", "12.50", Some("lunch"), false),
            expense("Rent", "1200", None, true),
        ];
        let text = render_context(&expenses, &[], &[]);
        assert!(text.contains("- Food: 12.50 (lunch)\n"));
        assert!(text.contains("- Rent: 1200 [recurring]\n"));
    }

    #[test]
    fn renders_jars_and_reminders() {
        let jar = SavingsJar {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Vacation".into(),
            goal: "500".parse().unwrap(),
            description: Some("summer trip".into()),
            progress: 40,
            created_at: OffsetDateTime::now_utc(),
        };
        let reminder = Reminder {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Electricity".into(),
            amount: "89.90".parse().unwrap(),
            due_at: time::macros::datetime!(2026-09-01 00:00 UTC),
            created_at: OffsetDateTime::now_utc(),
        };
        let text = render_context(&[], &[jar], &[reminder]);
        assert!(text.contains("- Vacation: goal 500, progress 40% (summer trip)\n"));
        assert!(text.contains("- Electricity: 89.90 due 2026-09-01\n"));
    }
}
