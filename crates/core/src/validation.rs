//! Input validation helpers shared by all create endpoints.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] runs the rules and
//! folds every failure into a single [`CoreError::Validation`] message.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Smallest party size a reservation may request.
pub const MIN_PAX: i32 = 1;

/// Largest party size a reservation may request.
pub const MAX_PAX: i32 = 14;

/// Run the derived validation rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(into_core_error)
}

/// Flatten field errors into `"<msg>; <msg>"`, ordered by field name so the
/// message is stable across runs.
pub fn into_core_error(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    CoreError::Validation(messages.join("; "))
}
