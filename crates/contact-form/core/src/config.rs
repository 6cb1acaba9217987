// File: src/config.rs
// Purpose: Selectors, class names and paths used by the contact page scripts

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Contact page configuration.
///
/// Every field has a default matching the site's markup, so an empty
/// object (or no object at all) is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormConfig {
    #[serde(default = "default_form_selector", alias = "formSelector")]
    pub form_selector: String,

    /// Container each control's error node is appended to
    #[serde(default = "default_item_selector", alias = "itemSelector")]
    pub item_selector: String,

    /// Class of the inline error node. Used both to create and to find it.
    #[serde(default = "default_error_class", alias = "errorClass")]
    pub error_class: String,

    /// Class added to an invalid control, alongside `aria-invalid`
    #[serde(default = "default_invalid_class", alias = "invalidClass")]
    pub invalid_class: String,

    /// Where a successful submit navigates to
    #[serde(default = "default_complete_path", alias = "completePath")]
    pub complete_path: String,

    #[serde(default)]
    pub reveal: RevealConfig,
}

/// Scroll reveal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_marker_selector", alias = "markerSelector")]
    pub marker_selector: String,

    #[serde(default = "default_visible_class", alias = "visibleClass")]
    pub visible_class: String,

    /// IntersectionObserver root margin. The negative bottom inset fires
    /// the reveal slightly before the element is fully in view.
    #[serde(default = "default_root_margin", alias = "rootMargin")]
    pub root_margin: String,
}

fn default_form_selector() -> String {
    ".form".to_string()
}

fn default_item_selector() -> String {
    ".form__item".to_string()
}

fn default_error_class() -> String {
    "form__error".to_string()
}

fn default_invalid_class() -> String {
    "is-error".to_string()
}

fn default_complete_path() -> String {
    "/contact/complete.html".to_string()
}

fn default_marker_selector() -> String {
    "[data-scroll]".to_string()
}

fn default_visible_class() -> String {
    "is-visible".to_string()
}

fn default_root_margin() -> String {
    "0px 0px -15% 0px".to_string()
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            form_selector: default_form_selector(),
            item_selector: default_item_selector(),
            error_class: default_error_class(),
            invalid_class: default_invalid_class(),
            complete_path: default_complete_path(),
            reveal: RevealConfig::default(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            marker_selector: default_marker_selector(),
            visible_class: default_visible_class(),
            root_margin: default_root_margin(),
        }
    }
}

impl ContactFormConfig {
    /// Parse configuration from TOML text. Blank text yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(content).context("Failed to parse contact form config")
    }
}
