use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub category: String,
    pub amount: Decimal,
    pub note: Option<String>,
    #[serde(default)]
    pub recurring: bool,
}

#[derive(Debug, Serialize)]
pub struct ExpenseItem {
    pub id: Uuid,
    pub category: String,
    pub amount: Decimal,
    pub note: Option<String>,
    pub recurring: bool,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateSavingsJarRequest {
    pub name: String,
    pub goal: Decimal,
    pub description: Option<String>,
    #[serde(default)]
    pub progress: i32,
}

#[derive(Debug, Serialize)]
pub struct SavingsJarItem {
    pub id: Uuid,
    pub name: String,
    pub goal: Decimal,
    pub description: Option<String>,
    pub progress: i32,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateReminderRequest {
    pub name: String,
    pub amount: Decimal,
    pub due_date: String, // ISO calendar date, e.g. "2026-09-01"
}

#[derive(Debug, Serialize)]
pub struct ReminderItem {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub due_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

/// Acknowledgment returned by all three creators.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
    pub created_at: OffsetDateTime,
}

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse an ISO calendar date into the timestamp stored for a reminder
/// (midnight UTC of that day).
pub(crate) fn parse_due_date(s: &str) -> Option<OffsetDateTime> {
    let date = Date::parse(s, DATE_FORMAT).ok()?;
    Some(date.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_calendar_date_to_midnight_utc() {
        let due = parse_due_date("2026-09-01").expect("valid date");
        assert_eq!(due.year(), 2026);
        assert_eq!(due.month() as u8, 9);
        assert_eq!(due.day(), 1);
        assert_eq!(due.hour(), 0);
        assert_eq!(due.offset().whole_seconds(), 0);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_due_date("01-09-2026").is_none());
        assert!(parse_due_date("2026-13-01").is_none());
        assert!(parse_due_date("next tuesday").is_none());
        assert!(parse_due_date("").is_none());
    }
}
