//! Contact Form WASM
//!
//! WebAssembly bindings for the contact page: inline form validation and
//! the one-shot scroll reveal. The rules live in `contact-form-core`; this
//! crate connects them to the live DOM.
//!
//! ```javascript
//! import init, { ContactPage } from './contact_form_wasm.js';
//!
//! await init();
//! const page = ContactPage.mount({ completePath: '/contact/complete.html' });
//! ```

pub mod dom;
pub mod error;
pub mod form;
pub mod logging;
pub mod reveal;

use contact_form_core::{self as core, ContactFormConfig, FieldKind, FieldSnapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

pub use dom::WebForm;
pub use error::BindingError;
pub use form::ContactForm;
pub use reveal::ScrollReveal;

/// Set panic hook and console logging
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init();
}

/// Both contact page components, kept alive for as long as JS holds this
#[wasm_bindgen]
pub struct ContactPage {
    form: Option<ContactForm>,
    reveal: Option<ScrollReveal>,
}

#[wasm_bindgen]
impl ContactPage {
    /// Attach validation to the contact form and start watching reveal
    /// targets.
    ///
    /// `options` is an optional object overriding any configuration field
    /// (`formSelector`, `completePath`, `reveal: { rootMargin }`, ...).
    /// A page without the form only gets the scroll reveal.
    pub fn mount(options: JsValue) -> Result<ContactPage, JsValue> {
        let config = parse_options(options)?;
        let document = document()?;

        let form = match find_form(&document, &config.form_selector)? {
            Some(form) => Some(ContactForm::attach(form, config.clone())?),
            None => {
                tracing::debug!("No form matches {}, skipping validation", config.form_selector);
                None
            }
        };

        let targets = dom::query_document(&document, &config.reveal.marker_selector)?;
        let reveal = if targets.is_empty() {
            None
        } else {
            let reveal = ScrollReveal::new(&config.reveal)?;
            let watched = reveal.observe(&targets);
            tracing::info!("Watching {} reveal target(s)", watched);
            Some(reveal)
        };

        Ok(ContactPage { form, reveal })
    }

    #[wasm_bindgen(getter, js_name = hasForm)]
    pub fn has_form(&self) -> bool {
        self.form.is_some()
    }

    #[wasm_bindgen(getter, js_name = hasReveal)]
    pub fn has_reveal(&self) -> bool {
        self.reveal.is_some()
    }

    /// Validate the whole form without submitting it
    pub fn validate(&self) -> bool {
        self.form
            .as_ref()
            .map(|form| form.validator().validate_form())
            .unwrap_or(true)
    }
}

fn parse_options(options: JsValue) -> Result<ContactFormConfig, BindingError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ContactFormConfig::default());
    }

    serde_wasm_bindgen::from_value(options).map_err(|e| BindingError::Options(e.to_string()))
}

fn document() -> Result<Document, BindingError> {
    web_sys::window()
        .ok_or(BindingError::NoWindow)?
        .document()
        .ok_or(BindingError::NoDocument)
}

fn find_form(document: &Document, selector: &str) -> Result<Option<HtmlFormElement>, BindingError> {
    let found = document
        .query_selector(selector)
        .map_err(BindingError::selector(selector))?;

    Ok(found.and_then(|element| match element.dyn_into::<HtmlFormElement>() {
        Ok(form) => Some(form),
        Err(_) => {
            tracing::warn!("{} does not match a <form>, skipping validation", selector);
            None
        }
    }))
}

/// A single validation failure, as returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct FieldIssue {
    pub code: &'static str,
    pub message: String,
}

impl From<core::FieldError> for FieldIssue {
    fn from(error: core::FieldError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

/// Check a loose value with the contact form rules.
///
/// `kind` is an input `type` (`"email"`, `"tel"`, `"text"`, ...). Returns
/// `null` when valid, otherwise `{ code, message }`.
///
/// # Example (JavaScript)
/// ```javascript
/// const issue = checkValue('tel', '090-abcd-5678', false);
/// // { code: 'tel_format', message: '※電話番号は数字で入力してください（ハイフンは任意）' }
/// ```
#[wasm_bindgen(js_name = checkValue)]
pub fn check_value(kind: &str, value: &str, required: bool) -> Result<JsValue, JsValue> {
    let issue = check_value_issue(kind, value, required).map(FieldIssue::from);
    Ok(serde_wasm_bindgen::to_value(&issue)?)
}

fn check_value_issue(kind: &str, value: &str, required: bool) -> Option<core::FieldError> {
    let snapshot = FieldSnapshot::new("", FieldKind::from_input_type(kind))
        .required(required)
        .value(value);

    let outcome = match snapshot.kind {
        FieldKind::Email if !snapshot.is_blank() => core::check_email(value),
        FieldKind::Tel => core::check_tel(value),
        _ if required => core::check_required(&snapshot, false),
        _ => Ok(()),
    };

    outcome.err()
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::check_email(email).is_ok()
}

/// Quick phone validation; returns the error message, if any
#[wasm_bindgen(js_name = checkTel)]
pub fn check_tel_js(tel: &str) -> Option<String> {
    core::check_tel(tel).err().map(|e| e.to_string())
}
