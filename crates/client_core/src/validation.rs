//! Field rules for the order form: pure predicates, no form state.

use shared::domain::PizzaSize;

pub const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
pub const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
pub const SIZE_INCORRECT: &str = "size must be S or M or L";

pub const FULL_NAME_MIN_CHARS: usize = 3;
pub const FULL_NAME_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(&'static str),
}

impl ValidationOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Text for the field's error slot; empty when valid.
    pub fn message(self) -> &'static str {
        match self {
            ValidationOutcome::Valid => "",
            ValidationOutcome::Invalid(message) => message,
        }
    }
}

/// Length is counted in characters after trimming.
pub fn validate_full_name(value: &str) -> ValidationOutcome {
    let len = value.trim().chars().count();
    if len < FULL_NAME_MIN_CHARS {
        ValidationOutcome::Invalid(FULL_NAME_TOO_SHORT)
    } else if len > FULL_NAME_MAX_CHARS {
        ValidationOutcome::Invalid(FULL_NAME_TOO_LONG)
    } else {
        ValidationOutcome::Valid
    }
}

pub fn validate_size(value: &str) -> ValidationOutcome {
    match PizzaSize::from_code(value.trim()) {
        Ok(_) => ValidationOutcome::Valid,
        Err(_) => ValidationOutcome::Invalid(SIZE_INCORRECT),
    }
}

/// Whole-form check behind the submit control. Topping flags carry no rule.
pub fn is_order_valid(full_name: &str, size: &str) -> bool {
    validate_full_name(full_name).is_valid() && validate_size(size).is_valid()
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
