//! Contact Form Core
//!
//! Validation rules, the per-field state machine and the one-shot reveal
//! transition for the contact page. Nothing here touches the browser: the
//! DOM is reached through [`FormHost`] and [`RevealHost`], implemented by
//! `contact-form-wasm` for real pages and by [`memory`] for tests.

pub mod annotation;
pub mod config;
pub mod error;
pub mod field;
pub mod memory;
pub mod reveal;
pub mod rules;
pub mod validator;

pub use config::{ContactFormConfig, RevealConfig};
pub use error::FieldError;
pub use field::{FieldKind, FieldSnapshot, FormHost};
pub use reveal::{Intersection, RevealHost, ScrollRevealer};
pub use rules::{check_email, check_required, check_tel};
pub use validator::{FieldEvent, FieldState, FormValidator, SubmitOutcome};
