//! Setup errors raised at the JS boundary

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum BindingError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("invalid options: {0}")]
    Options(String),

    #[error("{operation} failed: {message}")]
    Dom {
        operation: &'static str,
        message: String,
    },
}

impl BindingError {
    pub(crate) fn dom(operation: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |value| BindingError::Dom {
            operation,
            message: describe(&value),
        }
    }

    pub(crate) fn selector(selector: &str) -> impl FnOnce(JsValue) -> Self + '_ {
        move |value| BindingError::Selector {
            selector: selector.to_string(),
            message: describe(&value),
        }
    }
}

impl From<BindingError> for JsValue {
    fn from(error: BindingError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// Best-effort text for a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}
