//! Form engine: the application draft, its step cursor, consent flag and
//! the error set of the last validation run.

use super::field::{ApplicationRecord, Field};
use super::validation::{
    digits_only, parse_float_prefix, strip_separators, validate_record, ErrorCode, ErrorKey, Step,
    ValidationErrorSet,
};

/// Maximum fractional digits kept when formatting an amount for display
const MAX_FRACTION_DIGITS: usize = 3;

/// Session-scoped state of one application
#[derive(Debug, Clone, Default)]
pub struct FormEngine {
    record: ApplicationRecord,
    errors: ValidationErrorSet,
    step: Step,
    consent: bool,
}

impl FormEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    #[cfg(test)]
    pub fn errors(&self) -> &ValidationErrorSet {
        &self.errors
    }

    pub fn error(&self, key: impl Into<ErrorKey>) -> Option<ErrorCode> {
        self.errors.get(key)
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    /// Store a raw value and drop any error currently shown for that field.
    /// The field is not re-validated here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value.into());
        self.errors.remove(field);
    }

    /// Validate `step` against the current draft without touching stored
    /// state.
    pub fn validate_step(&self, step: Step) -> ValidationErrorSet {
        let mut errors = validate_record(&self.record, step);
        if step == Step::ReviewConsent && !self.consent {
            errors.insert(ErrorKey::Consent, ErrorCode::Consent);
        }
        errors
    }

    /// Validate the active step and replace the stored errors with the
    /// result. Returns true when the step is valid.
    pub fn validate_current_step(&mut self) -> bool {
        self.errors = self.validate_step(self.step);
        if !self.errors.is_empty() {
            tracing::debug!(
                step = self.step.number(),
                errors = self.errors.len(),
                "Step validation failed"
            );
        }
        self.errors.is_empty()
    }

    /// Move to the next step if the current one validates
    pub fn advance_step(&mut self) -> bool {
        if !self.validate_current_step() {
            return false;
        }
        let from = self.step;
        self.step = self.step.next();
        tracing::debug!(from = from.number(), to = self.step.number(), "Advanced step");
        true
    }

    /// Move to the previous step. Errors are left as they are.
    pub fn retreat_step(&mut self) {
        self.step = self.step.prev();
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    /// Re-render a typed amount for display, grouping thousands with the
    /// locale's separator. Unreadable input is returned unchanged.
    pub fn format_amount(&self, raw: &str, grouping: char) -> String {
        format_amount_with(raw, grouping)
    }

    /// Build the outbound text handed to the messaging agent
    pub fn generate_message(&self) -> String {
        let record = &self.record;
        let country = record.country.map(|c| c.code()).unwrap_or("");
        format!(
            "Hello! I've submitted an application through African Dev't Funds.\n\
             \n\
             Full Name: {}\n\
             Country: {}\n\
             Phone: {}\n\
             Email: {}\n\
             Amount Needed: ${}\n\
             Purpose: {}\n\
             \n\
             I understand these are donations/free funds, not loans. Please assist me with my application.",
            record.full_name,
            country,
            digits_only(&record.phone),
            record.email,
            strip_separators(&record.amount),
            record.purpose,
        )
    }

    /// Return to the initial empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Separators are removed first; if no number can be read the input comes
/// back unchanged.
fn format_amount_with(raw: &str, grouping: char) -> String {
    let Some(number) = parse_float_prefix(&strip_separators(raw)) else {
        return raw.to_string();
    };

    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, number.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(grouping);
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if number < 0.0 && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
