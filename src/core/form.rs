use crate::domain::model::{FragranceOption, Notification, OrderDraft};
use crate::domain::ports::OrderGateway;
use chrono::Local;

/// Hard cap on the dropdown column; the board rejects longer selections.
pub const MAX_FRAGRANCES: usize = 3;

pub const MSG_MISSING_FIELDS: &str = "Please fill out all fields.";
pub const MSG_NO_FRAGRANCE: &str = "Please select a fragrance.";
pub const MSG_TOO_MANY_FRAGRANCES: &str = "You can only select up to 3 fragrances.";
pub const MSG_ORDER_CREATED: &str = "Your order has been successfully created.";
pub const MSG_ORDER_FAILED: &str = "There was an error creating your order. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
}

/// How a submission attempt ended. `Rejected` means validation failed and no
/// request was sent; `Failed` means the request was sent but did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Created,
    Failed,
}

/// Owns all transient order-entry state: the draft being edited, the loaded
/// catalog, and the currently shown notification. Every user event maps to
/// one transition method; submission drives the
/// Idle -> Validating -> Submitting -> Idle cycle.
pub struct OrderForm {
    draft: OrderDraft,
    catalog: Vec<FragranceOption>,
    notification: Option<Notification>,
    phase: FormPhase,
}

impl OrderForm {
    pub fn new(catalog: Vec<FragranceOption>) -> Self {
        Self {
            draft: OrderDraft::default(),
            catalog,
            notification: None,
            phase: FormPhase::Idle,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &[FragranceOption] {
        &self.catalog
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.draft.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.draft.last_name = value.into();
    }

    pub fn set_quantity(&mut self, value: u32) {
        self.draft.quantity = value;
    }

    /// Replaces the fragrance selection. A selection longer than
    /// [`MAX_FRAGRANCES`] is rejected: the previous selection stays in place
    /// and a negative notification is shown. Returns whether the change was
    /// accepted.
    pub fn set_selection(&mut self, selection: Vec<FragranceOption>) -> bool {
        if selection.len() > MAX_FRAGRANCES {
            tracing::debug!(
                "rejecting selection of {} fragrances (max {})",
                selection.len(),
                MAX_FRAGRANCES
            );
            self.show(Notification::negative(MSG_TOO_MANY_FRAGRANCES));
            return false;
        }
        self.draft.selected = selection;
        true
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // A new notification replaces whatever is currently shown.
    fn show(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    // Field completeness is checked before the fragrance selection, so one
    // attempt surfaces exactly one message.
    fn validate(&mut self) -> bool {
        if self.draft.first_name.is_empty()
            || self.draft.last_name.is_empty()
            || self.draft.quantity == 0
        {
            self.show(Notification::negative(MSG_MISSING_FIELDS));
            return false;
        }

        if self.draft.selected.is_empty() {
            self.show(Notification::negative(MSG_NO_FRAGRANCE));
            return false;
        }

        true
    }

    /// Validates the draft and, if it passes, sends it through the gateway.
    /// On success the draft resets to its empty defaults; on failure it is
    /// left untouched so the user can retry without re-entering data.
    pub async fn submit<G: OrderGateway>(&mut self, gateway: &G) -> SubmitOutcome {
        self.phase = FormPhase::Validating;
        if !self.validate() {
            self.phase = FormPhase::Idle;
            return SubmitOutcome::Rejected;
        }

        self.phase = FormPhase::Submitting;
        let submission = self.draft.to_submission(Local::now().date_naive());

        let outcome = match gateway.create_order(&submission).await {
            Ok(response) => {
                // response body is logged, not schema-validated
                tracing::debug!("board API response: {}", response);
                self.show(Notification::positive(MSG_ORDER_CREATED));
                self.draft = OrderDraft::default();
                SubmitOutcome::Created
            }
            Err(e) => {
                tracing::error!("order submission failed: {}", e);
                self.show(Notification::negative(MSG_ORDER_FAILED));
                SubmitOutcome::Failed
            }
        };

        self.phase = FormPhase::Idle;
        outcome
    }
}
