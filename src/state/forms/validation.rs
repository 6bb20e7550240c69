//! Step definitions and field validation rules
//!
//! Validators only produce abstract [`ErrorCode`]s. Rendering a code as text
//! is the job of the localization layer.

use super::field::{ApplicationRecord, Field};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 75;
pub const MIN_AMOUNT: f64 = 50.0;
pub const MAX_AMOUNT: f64 = 100_000.0;
pub const MIN_PHONE_DIGITS: usize = 9;
pub const MAX_PHONE_DIGITS: usize = 15;
pub const MIN_PURPOSE_CHARS: usize = 10;

/// Character used to group thousands in typed amounts
pub const THOUSANDS_SEPARATOR: char = ',';

/// One of the three sequential validation groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    PersonalInfo,
    FundingDetails,
    ReviewConsent,
}

impl Step {
    pub const COUNT: u8 = 3;

    pub fn number(&self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::FundingDetails => 2,
            Self::ReviewConsent => 3,
        }
    }

    /// Step for a 1-based number; out-of-range values are clamped.
    pub fn from_number(n: u8) -> Self {
        match n {
            0 | 1 => Self::PersonalInfo,
            2 => Self::FundingDetails,
            _ => Self::ReviewConsent,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_number(self.number().saturating_sub(1))
    }

    pub fn is_last(&self) -> bool {
        *self == Self::ReviewConsent
    }

    /// Record fields edited and validated in this step
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::PersonalInfo => &[
                Field::FullName,
                Field::Phone,
                Field::Email,
                Field::Age,
                Field::Gender,
                Field::Country,
            ],
            Self::FundingDetails => &[Field::Amount, Field::Purpose],
            Self::ReviewConsent => &[],
        }
    }

    /// Completion percentage shown in the progress indicator
    pub fn percent(&self) -> u16 {
        (self.number() as u16 * 100 + Self::COUNT as u16 / 2) / Self::COUNT as u16
    }
}

/// Abstract validation failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Required,
    MinLength,
    PhoneFormat,
    InvalidEmail,
    AgeRange,
    AmountRange,
    Consent,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "min_length",
            Self::PhoneFormat => "phone_format",
            Self::InvalidEmail => "invalid_email",
            Self::AgeRange => "age_range",
            Self::AmountRange => "amount_range",
            Self::Consent => "consent",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an error is attached: a record field or the consent checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Field(Field),
    Consent,
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        ErrorKey::Field(field)
    }
}

/// Errors produced by validating one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
    errors: BTreeMap<ErrorKey, ErrorCode>,
}

impl ValidationErrorSet {
    pub fn insert(&mut self, key: impl Into<ErrorKey>, code: ErrorCode) {
        self.errors.insert(key.into(), code);
    }

    pub fn get(&self, key: impl Into<ErrorKey>) -> Option<ErrorCode> {
        self.errors.get(&key.into()).copied()
    }

    pub fn remove(&mut self, key: impl Into<ErrorKey>) -> Option<ErrorCode> {
        self.errors.remove(&key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, ErrorCode)> + '_ {
        self.errors.iter().map(|(k, v)| (*k, *v))
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Keep only ASCII digits
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Remove thousands separators
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect()
}

/// Parse the integer prefix of a string: leading whitespace, optional sign,
/// then digits. Anything after the digits is ignored.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the longest decimal prefix of a string (sign, digits, one dot,
/// optional exponent). Anything after it is ignored.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

fn check_full_name(value: &str) -> Option<ErrorCode> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(ErrorCode::Required)
    } else if trimmed.split(' ').count() < 2 {
        Some(ErrorCode::MinLength)
    } else {
        None
    }
}

fn check_phone(value: &str) -> Option<ErrorCode> {
    if value.trim().is_empty() {
        return Some(ErrorCode::Required);
    }
    let digits = digits_only(value).len();
    if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        None
    } else {
        Some(ErrorCode::PhoneFormat)
    }
}

fn check_email(value: &str) -> Option<ErrorCode> {
    if value.trim().is_empty() {
        Some(ErrorCode::Required)
    } else if !email_pattern().is_match(value) {
        Some(ErrorCode::InvalidEmail)
    } else {
        None
    }
}

fn check_age(value: &str) -> Option<ErrorCode> {
    if value.trim().is_empty() {
        return Some(ErrorCode::Required);
    }
    match parse_int_prefix(value) {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => None,
        _ => Some(ErrorCode::AgeRange),
    }
}

fn check_amount(value: &str) -> Option<ErrorCode> {
    if value.trim().is_empty() {
        return Some(ErrorCode::Required);
    }
    match parse_float_prefix(&strip_separators(value)) {
        Some(amount) if (MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) => None,
        _ => Some(ErrorCode::AmountRange),
    }
}

fn check_purpose(value: &str) -> Option<ErrorCode> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(ErrorCode::Required)
    } else if trimmed.chars().count() < MIN_PURPOSE_CHARS {
        Some(ErrorCode::MinLength)
    } else {
        None
    }
}

/// Validate a single record field in isolation
pub fn check_field(record: &ApplicationRecord, field: Field) -> Option<ErrorCode> {
    match field {
        Field::FullName => check_full_name(&record.full_name),
        Field::Phone => check_phone(&record.phone),
        Field::Email => check_email(&record.email),
        Field::Age => check_age(&record.age),
        Field::Gender => record.gender.is_none().then_some(ErrorCode::Required),
        Field::Country => record.country.is_none().then_some(ErrorCode::Required),
        Field::Amount => check_amount(&record.amount),
        Field::Purpose => check_purpose(&record.purpose),
    }
}

/// Validate every field belonging to `step`. The review step has no record
/// fields; its consent requirement is checked by the caller that owns the
/// consent flag.
pub fn validate_record(record: &ApplicationRecord, step: Step) -> ValidationErrorSet {
    let mut errors = ValidationErrorSet::default();
    for &field in step.fields() {
        if let Some(code) = check_field(record, field) {
            errors.insert(field, code);
        }
    }
    errors
}
