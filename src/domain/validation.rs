// src/domain/validation.rs
//
// Field-level validation primitives shared by every form validator.
//
// A validator runs every rule for every field and records failures in a
// FieldErrors map instead of stopping at the first problem, so a form can
// annotate all offending inputs at once.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Key of the whole-form error channel.
pub const FORM_ERRORS: &str = "formErrors";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

/// Field name -> human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors holding a single whole-form message.
    pub fn form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(FORM_ERRORS, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(|messages| !messages.is_empty())
    }

    pub fn form_errors(&self) -> &[String] {
        self.get(FORM_ERRORS).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.0.values().filter(|messages| !messages.is_empty()).count()
    }

    /// `Ok` with the assembled value when no field failed, otherwise the
    /// collected errors. Never returns an empty `Err`.
    pub fn finish<T>(mut self, build: impl FnOnce() -> Option<T>) -> Result<T, FieldErrors> {
        if !self.is_empty() {
            return Err(self);
        }
        match build() {
            Some(value) => Ok(value),
            None => {
                self.add(FORM_ERRORS, "Invalid form input");
                Err(self)
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, messages)| format!("{}: {}", field, messages.join("; ")))
            .collect();
        write!(f, "{}", rendered.join(", "))
    }
}

/// Accepted age range for a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRule {
    /// Inclusive bounds.
    Range { min: u32, max: u32 },
    /// Any integer above zero.
    Positive,
}

/// Admin accounts (profile edits).
pub const ADMIN_AGE: AgeRule = AgeRule::Range { min: 10, max: 120 };

/// Members, trainers and self-registration.
pub const PERSON_AGE: AgeRule = AgeRule::Positive;

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub fn is_digits(value: &str) -> bool {
    DIGITS.is_match(value)
}

/// Non-blank text. Returns the trimmed value.
pub fn required(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    message: &str,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, message);
        return None;
    }
    Some(trimmed.to_string())
}

/// Email shape. `missing` is reported for blank input, `invalid` otherwise.
pub fn email(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    missing: &str,
    invalid: &str,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, missing);
        return None;
    }
    if !is_email(trimmed) {
        errors.add(field, invalid);
        return None;
    }
    Some(trimmed.to_string())
}

/// Exactly ten digits.
pub fn phone(errors: &mut FieldErrors, field: &str, value: &str) -> Option<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, "Phone number is required");
        return None;
    }
    if !is_digits(trimmed) {
        errors.add(field, "Phone number must contain only digits");
        return None;
    }
    if trimmed.len() != 10 {
        errors.add(field, "Phone number must be 10 digits");
        return None;
    }
    match trimmed.parse::<u64>() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.add(field, "Phone number must be 10 digits");
            None
        }
    }
}

pub fn age(errors: &mut FieldErrors, field: &str, value: &str, rule: AgeRule) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, "Age is required");
        return None;
    }
    let parsed = if is_digits(trimmed) {
        trimmed.parse::<u32>().ok()
    } else {
        None
    };
    let Some(years) = parsed else {
        errors.add(field, "Age must be a number");
        return None;
    };

    match rule {
        AgeRule::Range { min, max } if years < min || years > max => {
            errors.add(field, format!("Age must be between {} and {}", min, max));
            None
        }
        AgeRule::Positive if years == 0 => {
            errors.add(field, "Age must be positive");
            None
        }
        _ => Some(years),
    }
}

/// One of an enumerated set, parsed through `FromStr`.
pub fn choice<T: FromStr>(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    message: &str,
) -> Option<T> {
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(field, message);
            None
        }
    }
}

/// Strictly positive `digits[.digits]` amount, e.g. a price or salary.
pub fn positive_amount(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    label: &str,
) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{} is required", label));
        return None;
    }
    let amount = if DECIMAL.is_match(trimmed) {
        Decimal::from_str(trimmed).ok()
    } else {
        None
    };
    match amount {
        None => {
            errors.add(field, format!("{} must be a valid number", label));
            None
        }
        Some(amount) if amount <= Decimal::ZERO => {
            errors.add(field, format!("{} must be positive", label));
            None
        }
        Some(amount) => Some(amount),
    }
}

/// Required all-digit identifier.
pub fn numeric_id(errors: &mut FieldErrors, field: &str, value: &str, message: &str) -> Option<u64> {
    let trimmed = value.trim();
    let parsed = if is_digits(trimmed) {
        trimmed.parse::<u64>().ok()
    } else {
        None
    };
    if parsed.is_none() {
        errors.add(field, message);
    }
    parsed
}

/// Optional all-digit identifier. Blank input is `Some(None)`.
pub fn optional_id(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    message: &str,
) -> Option<Option<u64>> {
    match value.map(str::trim) {
        None | Some("") => Some(None),
        Some(text) => match text.parse::<u64>() {
            Ok(id) => Some(Some(id)),
            Err(_) => {
                errors.add(field, message);
                None
            }
        },
    }
}
