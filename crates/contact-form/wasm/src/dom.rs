// File: src/dom.rs
// Purpose: FormHost over a live HtmlFormElement

use contact_form_core::{ContactFormConfig, FieldKind, FieldSnapshot, FormHost};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::error::{describe, BindingError};

const CONTROL_SELECTOR: &str = "input, textarea, select";

/// Error node attribute naming the control that owns it
const OWNER_ATTRIBUTE: &str = "data-for";

/// Collect the elements matching `selector` under `root`
pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, BindingError> {
    let list = root
        .query_selector_all(selector)
        .map_err(BindingError::selector(selector))?;
    Ok(collect_elements(&list))
}

pub(crate) fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>, BindingError> {
    let list = document
        .query_selector_all(selector)
        .map_err(BindingError::selector(selector))?;
    Ok(collect_elements(&list))
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// A contact form in the live document
pub struct WebForm {
    form: HtmlFormElement,
    window: Window,
    document: Document,
    item_selector: String,
}

impl WebForm {
    pub fn new(form: HtmlFormElement, config: &ContactFormConfig) -> Result<Self, BindingError> {
        let window = web_sys::window().ok_or(BindingError::NoWindow)?;
        let document = window.document().ok_or(BindingError::NoDocument)?;

        Ok(Self {
            form,
            window,
            document,
            item_selector: config.item_selector.clone(),
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    fn container(&self, field: &Element) -> Option<Element> {
        field.closest(&self.item_selector).ok().flatten()
    }
}

impl FormHost for WebForm {
    type Field = Element;

    fn controls(&self) -> Vec<Element> {
        query_all(&self.form, CONTROL_SELECTOR).unwrap_or_else(|e| {
            tracing::warn!("Could not list form controls: {}", e);
            Vec::new()
        })
    }

    // Compared by attribute rather than an attribute selector so names
    // needing CSS escaping still match
    fn named(&self, name: &str) -> Vec<Element> {
        self.controls()
            .into_iter()
            .filter(|control| control.get_attribute("name").as_deref() == Some(name))
            .collect()
    }

    fn snapshot(&self, field: &Element) -> FieldSnapshot {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            return FieldSnapshot::new(input.name(), FieldKind::from_input_type(&input.type_()))
                .required(input.required())
                .value(input.value())
                .checked(input.checked());
        }

        if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            return FieldSnapshot::new(area.name(), FieldKind::TextArea)
                .required(area.required())
                .value(area.value());
        }

        if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
            return FieldSnapshot::new(select.name(), FieldKind::Select)
                .required(select.required())
                .value(select.value());
        }

        FieldSnapshot::new(field.get_attribute("name").unwrap_or_default(), FieldKind::Other)
            .required(field.has_attribute("required"))
    }

    fn remove_error_nodes(&self, field: &Element, error_class: &str, owner: &str) {
        let Some(item) = self.container(field) else {
            return;
        };

        // Owner compared by attribute so names needing CSS escaping still match
        match query_all(&item, &format!(".{}", error_class)) {
            Ok(nodes) => nodes
                .iter()
                .filter(|node| node.get_attribute(OWNER_ATTRIBUTE).as_deref() == Some(owner))
                .for_each(Element::remove),
            Err(e) => tracing::warn!("Could not remove error nodes: {}", e),
        }
    }

    fn append_error_node(&self, field: &Element, error_class: &str, owner: &str, message: &str) -> bool {
        let Some(item) = self.container(field) else {
            return false;
        };

        let node = match self.document.create_element("span") {
            Ok(node) => node,
            Err(e) => {
                tracing::warn!("Could not create error node: {}", describe(&e));
                return false;
            }
        };
        node.set_class_name(error_class);
        node.set_text_content(Some(message));
        let tagged = node
            .set_attribute("role", "alert")
            .and_then(|_| node.set_attribute(OWNER_ATTRIBUTE, owner));
        if let Err(e) = tagged {
            tracing::warn!("Could not tag error node: {}", describe(&e));
        }

        match item.append_child(&node) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Could not append error node: {}", describe(&e));
                false
            }
        }
    }

    fn set_invalid(&self, field: &Element, invalid_class: &str, invalid: bool) {
        let result = if invalid {
            field
                .set_attribute("aria-invalid", "true")
                .and_then(|_| field.class_list().add_1(invalid_class))
        } else {
            field
                .remove_attribute("aria-invalid")
                .and_then(|_| field.class_list().remove_1(invalid_class))
        };

        if let Err(e) = result {
            tracing::warn!("Could not update invalid markers: {}", describe(&e));
        }
    }

    fn is_invalid(&self, field: &Element, invalid_class: &str) -> bool {
        field.class_list().contains(invalid_class)
            || field.get_attribute("aria-invalid").as_deref() == Some("true")
    }

    fn focus(&self, field: &Element) {
        if let Some(html) = field.dyn_ref::<HtmlElement>() {
            if let Err(e) = html.focus() {
                tracing::warn!("Could not focus field: {}", describe(&e));
            }
        }

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        field.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn navigate(&self, href: &str) {
        if let Err(e) = self.window.location().set_href(href) {
            tracing::warn!("Could not navigate to {}: {}", href, describe(&e));
        }
    }
}
