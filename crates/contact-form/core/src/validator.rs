// File: src/validator.rs
// Purpose: Per-field validation state machine and form submission

use crate::annotation;
use crate::config::ContactFormConfig;
use crate::error::FieldError;
use crate::field::{FieldKind, FieldSnapshot, FormHost};
use crate::rules;

/// DOM events the validator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Focus left the field: always validate
    Blur,
    /// The value changed: re-validate only fields already in error
    Input,
    /// A radio/checkbox in the field's group changed: clear the group
    GroupChange,
}

/// Observable state of a field.
///
/// The DOM only distinguishes "annotated" from "not annotated", so a field
/// nobody has blurred yet reports `Valid`, the same as after a page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Valid,
    Invalid,
}

impl From<bool> for FieldState {
    fn from(valid: bool) -> Self {
        if valid {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }
}

/// Result of intercepting a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<F> {
    /// Every field passed; the host navigated to this path
    Navigated(String),
    /// At least one field failed; the first invalid control, if any, got focus
    Blocked { first_invalid: Option<F> },
}

/// Validates one form through its host
pub struct FormValidator<H: FormHost> {
    host: H,
    config: ContactFormConfig,
}

impl<H: FormHost> FormValidator<H> {
    pub fn new(host: H, config: ContactFormConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &ContactFormConfig {
        &self.config
    }

    /// Validate a single control, updating its annotation.
    ///
    /// Returns true when the control is valid.
    pub fn validate_field(&self, field: &H::Field) -> bool {
        let snapshot = self.host.snapshot(field);
        let outcome = self.check(&snapshot);
        self.apply(field, &snapshot, outcome)
    }

    /// Validate every required control plus every filled-in optional phone
    /// field. All controls are visited so every error is shown at once.
    pub fn validate_form(&self) -> bool {
        let mut valid = true;

        for field in self.host.controls() {
            let snapshot = self.host.snapshot(&field);

            let outcome = if snapshot.required {
                self.check(&snapshot)
            } else if snapshot.kind == FieldKind::Tel && !snapshot.is_blank() {
                rules::check_tel(&snapshot.value)
            } else {
                continue;
            };

            if !self.apply(&field, &snapshot, outcome) {
                valid = false;
            }
        }

        valid
    }

    /// React to a DOM event on `field`.
    ///
    /// Returns the field's new state, or `None` when the event was ignored.
    pub fn handle(&self, event: FieldEvent, field: &H::Field) -> Option<FieldState> {
        match event {
            FieldEvent::Blur => Some(self.validate_field(field).into()),
            FieldEvent::Input => {
                if self.host.is_invalid(field, &self.config.invalid_class) {
                    Some(self.validate_field(field).into())
                } else {
                    None
                }
            }
            FieldEvent::GroupChange => {
                let snapshot = self.host.snapshot(field);
                if !snapshot.kind.is_group() {
                    return None;
                }
                for member in self.host.named(&snapshot.name) {
                    annotation::clear(&self.host, &self.config, &member);
                }
                Some(FieldState::Valid)
            }
        }
    }

    /// Validate the whole form as a submit handler would.
    ///
    /// On success the host navigates to the completion page; otherwise the
    /// first invalid control is focused and scrolled into view.
    pub fn submit(&self) -> SubmitOutcome<H::Field> {
        if self.validate_form() {
            tracing::info!("Contact form valid, navigating to {}", self.config.complete_path);
            self.host.navigate(&self.config.complete_path);
            return SubmitOutcome::Navigated(self.config.complete_path.clone());
        }

        let first_invalid = self.first_invalid();
        match &first_invalid {
            Some(field) => self.host.focus(field),
            None => tracing::warn!("Contact form invalid but no control is marked"),
        }

        SubmitOutcome::Blocked { first_invalid }
    }

    /// First control in document order currently marked invalid
    pub fn first_invalid(&self) -> Option<H::Field> {
        self.host
            .controls()
            .into_iter()
            .find(|field| self.host.is_invalid(field, &self.config.invalid_class))
    }

    pub fn state_of(&self, field: &H::Field) -> FieldState {
        if self.host.is_invalid(field, &self.config.invalid_class) {
            FieldState::Invalid
        } else {
            FieldState::Valid
        }
    }

    fn check(&self, snapshot: &FieldSnapshot) -> Result<(), FieldError> {
        match snapshot.kind {
            FieldKind::Email => {
                if snapshot.is_blank() {
                    self.check_required(snapshot)
                } else {
                    rules::check_email(&snapshot.value)
                }
            }
            FieldKind::Tel => rules::check_tel(&snapshot.value),
            _ => self.check_required(snapshot),
        }
    }

    /// Required check that passes for optional controls
    fn check_required(&self, snapshot: &FieldSnapshot) -> Result<(), FieldError> {
        if !snapshot.required {
            return Ok(());
        }

        let group_checked = snapshot.kind == FieldKind::Radio && self.group_checked(&snapshot.name);
        rules::check_required(snapshot, group_checked)
    }

    fn group_checked(&self, name: &str) -> bool {
        self.host
            .named(name)
            .iter()
            .any(|member| self.host.snapshot(member).checked)
    }

    fn apply(&self, field: &H::Field, snapshot: &FieldSnapshot, outcome: Result<(), FieldError>) -> bool {
        match outcome {
            Ok(()) => {
                annotation::clear(&self.host, &self.config, field);
                true
            }
            Err(error) => {
                tracing::debug!("Field '{}' failed: {}", snapshot.name, error.code());
                annotation::show(&self.host, &self.config, field, error);
                false
            }
        }
    }
}
