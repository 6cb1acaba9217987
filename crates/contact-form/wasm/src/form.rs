// File: src/form.rs
// Purpose: Event listener wiring for the contact form

use std::rc::Rc;

use contact_form_core::{ContactFormConfig, FieldEvent, FormHost, FormValidator, SubmitOutcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlFormElement};

use crate::dom::WebForm;
use crate::error::{describe, BindingError};

type Listener = Closure<dyn FnMut(Event)>;

/// A validated contact form.
///
/// Owns every listener it registers; dropping it removes them.
pub struct ContactForm {
    validator: Rc<FormValidator<WebForm>>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl ContactForm {
    /// Validate `form` on blur, input, group change and submit
    pub fn attach(form: HtmlFormElement, config: ContactFormConfig) -> Result<Self, BindingError> {
        let host = WebForm::new(form.clone(), &config)?;
        let mut contact = Self {
            validator: Rc::new(FormValidator::new(host, config)),
            listeners: Vec::new(),
        };

        let validator = Rc::clone(&contact.validator);
        contact.listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            if let SubmitOutcome::Blocked { .. } = validator.submit() {
                tracing::info!("Contact form submission blocked by validation");
            }
        })?;

        let controls = contact.validator.host().controls();
        for control in &controls {
            contact.listen_field(control, "blur", FieldEvent::Blur)?;
            contact.listen_field(control, "input", FieldEvent::Input)?;

            if contact.validator.host().snapshot(control).kind.is_group() {
                contact.listen_field(control, "change", FieldEvent::GroupChange)?;
            }
        }

        tracing::info!("Contact form attached ({} controls)", controls.len());
        Ok(contact)
    }

    pub fn validator(&self) -> &FormValidator<WebForm> {
        &self.validator
    }

    fn listen_field(
        &mut self,
        control: &web_sys::Element,
        kind: &'static str,
        event: FieldEvent,
    ) -> Result<(), BindingError> {
        let validator = Rc::clone(&self.validator);
        let field = control.clone();
        self.listen(control, kind, move |_: Event| {
            validator.handle(event, &field);
        })
    }

    fn listen<F>(&mut self, target: &EventTarget, kind: &'static str, handler: F) -> Result<(), BindingError>
    where
        F: FnMut(Event) + 'static,
    {
        let listener = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            .map_err(BindingError::dom("addEventListener"))?;
        self.listeners.push((target.clone(), kind, listener));
        Ok(())
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        for (target, kind, listener) in &self.listeners {
            if let Err(e) = target.remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref()) {
                tracing::warn!("Could not remove {} listener: {}", kind, describe(&e));
            }
        }
    }
}
