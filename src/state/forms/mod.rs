//! Form domain layer
//!
//! Typed application fields, per-step validation rules and the form engine
//! that owns the draft for one session.

mod field;
mod form_state;
mod validation;

pub use field::{cycle_option, Country, Field, Gender};
pub use form_state::FormEngine;
pub use validation::{digits_only, ErrorCode, ErrorKey, Step, MIN_PURPOSE_CHARS};
