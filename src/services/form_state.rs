// src/services/form_state.rs
//
// Result of one action invocation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::FieldErrors;

/// `success == true` always comes with empty errors; `success == false`
/// always carries at least one populated channel.
///
/// `timestamp` (epoch milliseconds) is strictly greater than the previous
/// state's, so two identical failures in a row are still distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub success: bool,
    pub errors: FieldErrors,
    pub timestamp: i64,
}

impl FormState {
    /// State of a form that has not been submitted yet.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn succeeded(previous: &FormState) -> Self {
        Self {
            success: true,
            errors: FieldErrors::new(),
            timestamp: next_timestamp(previous),
        }
    }

    pub fn failed(previous: &FormState, errors: FieldErrors) -> Self {
        let errors = if errors.is_empty() {
            FieldErrors::form(super::gateway::INTERNAL_ERROR)
        } else {
            errors
        };
        Self {
            success: false,
            errors,
            timestamp: next_timestamp(previous),
        }
    }

    pub fn from_result(previous: &FormState, result: Result<(), FieldErrors>) -> Self {
        match result {
            Ok(()) => Self::succeeded(previous),
            Err(errors) => Self::failed(previous, errors),
        }
    }

    /// First whole-form message, if any.
    pub fn form_error(&self) -> Option<&str> {
        self.errors.form_errors().first().map(String::as_str)
    }
}

fn next_timestamp(previous: &FormState) -> i64 {
    Utc::now().timestamp_millis().max(previous.timestamp.saturating_add(1))
}
