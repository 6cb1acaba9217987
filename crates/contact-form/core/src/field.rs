// File: src/field.rs
// Purpose: Field model and the DOM operations the validator needs

/// Kind of a form control, taken from its `type` attribute (or tag name
/// for textarea/select)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Checkbox,
    Radio,
    TextArea,
    Select,
    Other,
}

impl FieldKind {
    /// Map an input `type` attribute to a kind
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.to_ascii_lowercase().as_str() {
            "" | "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio,
            _ => FieldKind::Other,
        }
    }

    /// Radio buttons and checkboxes validate as a same-named group
    pub fn is_group(&self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }
}

/// Read-only copy of a control's state at validation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub checked: bool,
}

impl FieldSnapshot {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            value: String::new(),
            checked: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// The DOM surface of a single form.
///
/// Controls are addressed by the host's own handle type. Class names are
/// passed in by the caller so hosts stay free of configuration.
pub trait FormHost {
    type Field: Clone;

    /// All `input`, `textarea` and `select` controls, in document order
    fn controls(&self) -> Vec<Self::Field>;

    /// Controls whose `name` attribute equals `name`
    fn named(&self, name: &str) -> Vec<Self::Field>;

    fn snapshot(&self, field: &Self::Field) -> FieldSnapshot;

    /// Remove the nodes carrying `error_class` and owned by `owner` from the
    /// field's container. A field without a container is a no-op.
    fn remove_error_nodes(&self, field: &Self::Field, error_class: &str, owner: &str);

    /// Append an alert node with `message`, tagged with `owner`, to the
    /// field's container. Returns false when the field has no container.
    fn append_error_node(&self, field: &Self::Field, error_class: &str, owner: &str, message: &str) -> bool;

    /// Toggle `aria-invalid` and `invalid_class` on the field itself
    fn set_invalid(&self, field: &Self::Field, invalid_class: &str, invalid: bool);

    /// Whether the field currently carries `invalid_class` or `aria-invalid="true"`
    fn is_invalid(&self, field: &Self::Field, invalid_class: &str) -> bool;

    /// Focus the field and scroll it to the middle of the viewport
    fn focus(&self, field: &Self::Field);

    fn navigate(&self, href: &str);
}
