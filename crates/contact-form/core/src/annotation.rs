//! Inline error annotations
//!
//! An annotation is the alert node in the field's container plus
//! `aria-invalid` and the invalid class on the field. Error nodes are tagged
//! with the owning control's name, so controls sharing a container (a name
//! split into family and given name, a radio group) only ever remove their
//! own node. Both operations start by removing that node, so a field never
//! carries more than one annotation.

use crate::config::ContactFormConfig;
use crate::error::FieldError;
use crate::field::FormHost;

/// Attach an annotation for `error`, replacing any existing one
pub fn show<H: FormHost>(host: &H, config: &ContactFormConfig, field: &H::Field, error: FieldError) {
    let owner = host.snapshot(field).name;
    host.remove_error_nodes(field, &config.error_class, &owner);

    let message = error.to_string();
    if !host.append_error_node(field, &config.error_class, &owner, &message) {
        tracing::debug!("Field has no {} container, marking it only", config.item_selector);
    }

    host.set_invalid(field, &config.invalid_class, true);
}

/// Remove the field's annotation, if any
pub fn clear<H: FormHost>(host: &H, config: &ContactFormConfig, field: &H::Field) {
    let owner = host.snapshot(field).name;
    host.remove_error_nodes(field, &config.error_class, &owner);
    host.set_invalid(field, &config.invalid_class, false);
}
