//! Screen forms and their validation
//!
//! Validation happens here, before anything is dispatched. A rejected form
//! never reaches a store.

mod login;
mod olt;
mod onu_config;
mod settings;
mod user;

pub use login::LoginForm;
pub use olt::OltForm;
pub use onu_config::{FormPhase, OnuConfigEditor, OnuConfigForm};
pub use settings::SettingsForm;
pub use user::UserForm;

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::{DomainError, DomainResult};

/// Run the derived validation and flatten failures into one message.
pub(crate) fn check(form: &impl Validate) -> DomainResult<()> {
    form.validate().map_err(|errors| DomainError::Validation(describe(&errors)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages: Vec<String> = Vec::new();
    for (_, errs) in fields {
        for err in errs.iter() {
            let msg = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            if !messages.contains(&msg) {
                messages.push(msg);
            }
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

pub(crate) fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}
