//! Order form state: current values, per-field errors, the submit gate, and the
//! submission lifecycle (`Idle -> Submitting -> settled -> Idle`).

use std::fmt;

use shared::{
    domain::{topping_by_id, topping_by_name, ToppingId, TOPPINGS},
    error::DomainError,
    protocol::{OrderPayload, OrderResponse},
};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::{
    validation::{is_order_valid, validate_full_name, validate_size},
    SubmitError,
};

/// Banner text shown for every failed submission, whatever the cause.
pub const FAILURE_BANNER: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Size,
    Topping(ToppingId),
}

impl Field {
    /// Accepts `fullName`, `size`, or a topping display name.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        match name {
            "fullName" => Ok(Field::FullName),
            "size" => Ok(Field::Size),
            other => topping_by_name(other)
                .map(|topping| Field::Topping(topping.id))
                .map_err(|_| DomainError::UnknownField(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Size => "size",
            Field::Topping(id) => topping_by_id(id).map(|t| t.name).unwrap_or("topping"),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field {field} expects {expected} input")]
    ValueKindMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("unknown topping id {0}")]
    UnknownTopping(ToppingId),
    #[error("order form is not valid; submit is disabled")]
    NotSubmittable,
}

/// One slot per field. Topping flags are indexed by position in `TOPPINGS`,
/// so no key can ever be added or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub size: String,
    toppings: [bool; TOPPINGS.len()],
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            size: String::new(),
            toppings: [false; TOPPINGS.len()],
        }
    }
}

impl FormValues {
    pub fn topping(&self, id: ToppingId) -> bool {
        topping_index(id)
            .map(|idx| self.toppings[idx])
            .unwrap_or(false)
    }

    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::FullName => FieldValue::Text(self.full_name.clone()),
            Field::Size => FieldValue::Text(self.size.clone()),
            Field::Topping(id) => FieldValue::Flag(self.topping(id)),
        }
    }

    /// Identifiers of the checked toppings, in reference-list order.
    pub fn selected_toppings(&self) -> Vec<ToppingId> {
        TOPPINGS
            .iter()
            .zip(self.toppings.iter())
            .filter(|(_, checked)| **checked)
            .map(|(topping, _)| topping.id)
            .collect()
    }

    pub fn to_payload(&self) -> OrderPayload {
        OrderPayload {
            full_name: self.full_name.trim().to_string(),
            size: self.size.trim().to_string(),
            toppings: self.selected_toppings(),
        }
    }

    fn set_topping(&mut self, id: ToppingId, checked: bool) -> Result<(), FormError> {
        let idx = topping_index(id).ok_or(FormError::UnknownTopping(id))?;
        self.toppings[idx] = checked;
        Ok(())
    }
}

fn topping_index(id: ToppingId) -> Option<usize> {
    TOPPINGS.iter().position(|topping| topping.id == id)
}

/// Inline messages for the validated fields; empty string means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: String,
    pub size: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Size => &self.size,
            Field::Topping(_) => "",
        }
    }

    pub fn is_clear(&self) -> bool {
        self.full_name.is_empty() && self.size.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub payload: OrderPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting(SubmissionId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBanner {
    Success(String),
    Failure,
}

impl OrderBanner {
    pub fn text(&self) -> &str {
        match self {
            OrderBanner::Success(message) => message,
            OrderBanner::Failure => FAILURE_BANNER,
        }
    }
}

pub type SubmissionOutcome = Result<OrderResponse, SubmitError>;

#[derive(Debug, Clone)]
pub struct OrderForm {
    values: FormValues,
    errors: FieldErrors,
    disabled: bool,
    phase: SubmissionPhase,
    banner: Option<OrderBanner>,
    last_submitted: Option<OrderPayload>,
    next_submission: u64,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            disabled: true,
            phase: SubmissionPhase::Idle,
            banner: None,
            last_submitted: None,
            next_submission: 1,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn can_submit(&self) -> bool {
        !self.disabled
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn banner(&self) -> Option<&OrderBanner> {
        self.banner.as_ref()
    }

    pub fn is_success(&self) -> bool {
        matches!(self.banner, Some(OrderBanner::Success(_)))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.banner, Some(OrderBanner::Failure))
    }

    pub fn last_submitted(&self) -> Option<&OrderPayload> {
        self.last_submitted.as_ref()
    }

    /// Validates the single field, stores the value, then re-checks the whole
    /// form. A value of the wrong kind is rejected without touching state.
    pub fn input_change(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (Field::FullName, FieldValue::Text(text)) => {
                self.errors.full_name = validate_full_name(&text).message().to_string();
                self.values.full_name = text;
            }
            (Field::Size, FieldValue::Text(text)) => {
                self.errors.size = validate_size(&text).message().to_string();
                self.values.size = text;
            }
            (Field::Topping(id), FieldValue::Flag(checked)) => {
                self.values.set_topping(id, checked)?;
            }
            (Field::Topping(_), FieldValue::Text(_)) => {
                return Err(FormError::ValueKindMismatch {
                    field: field.name(),
                    expected: "checkbox",
                });
            }
            (_, FieldValue::Flag(_)) => {
                return Err(FormError::ValueKindMismatch {
                    field: field.name(),
                    expected: "text",
                });
            }
        }
        self.revalidate();
        Ok(())
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.errors.full_name = validate_full_name(&value).message().to_string();
        self.values.full_name = value;
        self.revalidate();
    }

    pub fn set_size(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.errors.size = validate_size(&value).message().to_string();
        self.values.size = value;
        self.revalidate();
    }

    pub fn set_topping(&mut self, id: ToppingId, checked: bool) -> Result<(), FormError> {
        self.values.set_topping(id, checked)?;
        self.revalidate();
        Ok(())
    }

    pub fn toggle_topping(&mut self, id: ToppingId) -> Result<(), FormError> {
        let checked = !self.values.topping(id);
        self.set_topping(id, checked)
    }

    pub fn selected_toppings(&self) -> Vec<ToppingId> {
        self.values.selected_toppings()
    }

    /// Builds the payload and marks the form as submitting. Each call issues
    /// a fresh id; only the latest one is accepted by `complete_submission`.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, FormError> {
        if self.disabled {
            return Err(FormError::NotSubmittable);
        }
        let id = SubmissionId(self.next_submission);
        self.next_submission += 1;

        let payload = self.values.to_payload();
        self.last_submitted = Some(payload.clone());
        if let SubmissionPhase::Submitting(previous) = self.phase {
            debug!(%previous, superseded_by = %id, "order submission superseded");
        }
        self.phase = SubmissionPhase::Submitting(id);
        Ok(PendingSubmission { id, payload })
    }

    /// Applies a settled request. Returns `false` when `id` is not the
    /// in-flight submission; such results leave the form untouched.
    pub fn complete_submission(&mut self, id: SubmissionId, outcome: SubmissionOutcome) -> bool {
        if self.phase != SubmissionPhase::Submitting(id) {
            debug!(submission = %id, "ignoring stale order completion");
            return false;
        }

        self.banner = Some(match outcome {
            Ok(response) => {
                info!(submission = %id, message = %response.message, "order accepted");
                OrderBanner::Success(response.message)
            }
            Err(err) => {
                error!(submission = %id, error = %err, "order submission failed");
                OrderBanner::Failure
            }
        });

        self.values = FormValues::default();
        self.errors = FieldErrors::default();
        self.phase = SubmissionPhase::Idle;
        self.revalidate();
        true
    }

    fn revalidate(&mut self) {
        self.disabled = !is_order_valid(&self.values.full_name, &self.values.size);
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
