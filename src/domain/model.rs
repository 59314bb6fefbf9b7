use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw fragrance record as returned by the catalog endpoint. Extra fields
/// are ignored; only `name` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragranceRecord {
    pub name: String,
}

/// A selectable catalog entry. `value` and `label` are derived copies of
/// `name` so the selection control can consume the option directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragranceOption {
    pub name: String,
    pub value: String,
    pub label: String,
}

impl From<FragranceRecord> for FragranceOption {
    fn from(record: FragranceRecord) -> Self {
        Self {
            value: record.name.clone(),
            label: record.name.clone(),
            name: record.name,
        }
    }
}

/// Transient form state for one order. Reset to defaults after a successful
/// submission; left untouched when a submission fails so the user can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub first_name: String,
    pub last_name: String,
    pub quantity: u32,
    pub selected: Vec<FragranceOption>,
}

impl OrderDraft {
    /// Freezes the draft into a submission. The selected fragrance values are
    /// joined with `", "` for the board's dropdown column.
    pub fn to_submission(&self, date: NaiveDate) -> OrderSubmission {
        let fragrances = self
            .selected
            .iter()
            .map(|f| f.value.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        OrderSubmission {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            quantity: self.quantity,
            fragrances,
            date,
        }
    }
}

/// A validated order, ready to be sent to the board API. `fragrances` holds
/// the selected values already joined with `", "`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSubmission {
    pub first_name: String,
    pub last_name: String,
    pub quantity: u32,
    pub fragrances: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Positive,
    Negative,
}

/// User-facing feedback message. The form holds at most one at a time; a new
/// notification replaces whatever is currently shown. Closed state is
/// modeled as `Option<Notification>::None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn positive(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Positive,
        }
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Negative,
        }
    }
}

/// How long a notification stays open before the surface auto-dismisses it.
pub const NOTIFICATION_AUTO_HIDE: Duration = Duration::from_millis(3000);
