//! In-memory hosts
//!
//! [`MemoryForm`] and [`MemoryReveal`] model just enough of a document to
//! drive [`FormValidator`](crate::FormValidator) and
//! [`ScrollRevealer`](crate::ScrollRevealer) without a browser. They record
//! every side effect (error nodes, focus, navigation, observer calls) so
//! callers can assert on them.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use crate::field::{FieldKind, FieldSnapshot, FormHost};
use crate::reveal::RevealHost;

/// Handle to a control inside a [`MemoryForm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryField(usize);

#[derive(Debug)]
struct Control {
    snapshot: FieldSnapshot,
    container: Option<usize>,
    classes: HashSet<String>,
    aria_invalid: bool,
}

#[derive(Debug, Clone)]
struct ErrorNode {
    class: String,
    owner: String,
    message: String,
}

/// A form held in memory
#[derive(Debug, Default)]
pub struct MemoryForm {
    controls: RefCell<Vec<Control>>,
    containers: RefCell<Vec<Vec<ErrorNode>>>,
    focused: Cell<Option<MemoryField>>,
    scrolls: Cell<usize>,
    navigated: RefCell<Option<String>>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control wrapped in its own container
    pub fn push(&mut self, snapshot: FieldSnapshot) -> MemoryField {
        let container = self.container();
        self.push_in(snapshot, container)
    }

    /// Add a control to an existing container, e.g. a radio group sharing
    /// one form item
    pub fn push_in(&mut self, snapshot: FieldSnapshot, container: usize) -> MemoryField {
        self.insert(snapshot, Some(container))
    }

    /// Add a control that sits outside any container
    pub fn push_uncontained(&mut self, snapshot: FieldSnapshot) -> MemoryField {
        self.insert(snapshot, None)
    }

    /// Create an empty container and return its id
    pub fn container(&mut self) -> usize {
        let containers = self.containers.get_mut();
        containers.push(Vec::new());
        containers.len() - 1
    }

    fn insert(&mut self, snapshot: FieldSnapshot, container: Option<usize>) -> MemoryField {
        let controls = self.controls.get_mut();
        controls.push(Control {
            snapshot,
            container,
            classes: HashSet::new(),
            aria_invalid: false,
        });
        MemoryField(controls.len() - 1)
    }

    pub fn set_value(&self, field: MemoryField, value: &str) {
        self.controls.borrow_mut()[field.0].snapshot.value = value.to_string();
    }

    /// Check or uncheck a control. Checking a radio unchecks the other
    /// radios sharing its name, as a browser would.
    pub fn set_checked(&self, field: MemoryField, checked: bool) {
        let mut controls = self.controls.borrow_mut();
        let (name, kind) = {
            let snapshot = &controls[field.0].snapshot;
            (snapshot.name.clone(), snapshot.kind)
        };

        if checked && kind == FieldKind::Radio {
            for control in controls.iter_mut() {
                if control.snapshot.kind == FieldKind::Radio && control.snapshot.name == name {
                    control.snapshot.checked = false;
                }
            }
        }

        controls[field.0].snapshot.checked = checked;
    }

    /// Messages of the error nodes the field owns in its container
    pub fn error_messages(&self, field: MemoryField) -> Vec<String> {
        let (container, owner) = {
            let controls = self.controls.borrow();
            let control = &controls[field.0];
            (control.container, control.snapshot.name.clone())
        };
        container
            .map(|id| {
                self.containers.borrow()[id]
                    .iter()
                    .filter(|node| node.owner == owner)
                    .map(|node| node.message.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of error nodes in the form
    pub fn error_node_count(&self) -> usize {
        self.containers.borrow().iter().map(Vec::len).sum()
    }

    pub fn focused(&self) -> Option<MemoryField> {
        self.focused.get()
    }

    /// Number of times a control was scrolled into view
    pub fn scroll_count(&self) -> usize {
        self.scrolls.get()
    }

    pub fn navigated_to(&self) -> Option<String> {
        self.navigated.borrow().clone()
    }
}

impl FormHost for MemoryForm {
    type Field = MemoryField;

    fn controls(&self) -> Vec<MemoryField> {
        (0..self.controls.borrow().len()).map(MemoryField).collect()
    }

    fn named(&self, name: &str) -> Vec<MemoryField> {
        self.controls
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, control)| control.snapshot.name == name)
            .map(|(index, _)| MemoryField(index))
            .collect()
    }

    fn snapshot(&self, field: &MemoryField) -> FieldSnapshot {
        self.controls.borrow()[field.0].snapshot.clone()
    }

    fn remove_error_nodes(&self, field: &MemoryField, error_class: &str, owner: &str) {
        if let Some(id) = self.controls.borrow()[field.0].container {
            self.containers.borrow_mut()[id].retain(|node| node.class != error_class || node.owner != owner);
        }
    }

    fn append_error_node(&self, field: &MemoryField, error_class: &str, owner: &str, message: &str) -> bool {
        match self.controls.borrow()[field.0].container {
            Some(id) => {
                self.containers.borrow_mut()[id].push(ErrorNode {
                    class: error_class.to_string(),
                    owner: owner.to_string(),
                    message: message.to_string(),
                });
                true
            }
            None => false,
        }
    }

    fn set_invalid(&self, field: &MemoryField, invalid_class: &str, invalid: bool) {
        let mut controls = self.controls.borrow_mut();
        let control = &mut controls[field.0];
        control.aria_invalid = invalid;
        if invalid {
            control.classes.insert(invalid_class.to_string());
        } else {
            control.classes.remove(invalid_class);
        }
    }

    fn is_invalid(&self, field: &MemoryField, invalid_class: &str) -> bool {
        let controls = self.controls.borrow();
        let control = &controls[field.0];
        control.aria_invalid || control.classes.contains(invalid_class)
    }

    fn focus(&self, field: &MemoryField) {
        self.focused.set(Some(*field));
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn navigate(&self, href: &str) {
        *self.navigated.borrow_mut() = Some(href.to_string());
    }
}

/// Handle to an element inside a [`MemoryReveal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryTarget(usize);

/// A set of reveal targets and a recording intersection watcher
#[derive(Debug, Default)]
pub struct MemoryReveal {
    classes: RefCell<Vec<HashSet<String>>>,
    watched: RefCell<HashSet<MemoryTarget>>,
    class_changes: Cell<usize>,
    unwatch_calls: Cell<usize>,
}

impl MemoryReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&mut self) -> MemoryTarget {
        let classes = self.classes.get_mut();
        classes.push(HashSet::new());
        MemoryTarget(classes.len() - 1)
    }

    pub fn is_watched(&self, target: MemoryTarget) -> bool {
        self.watched.borrow().contains(&target)
    }

    pub fn classes_of(&self, target: MemoryTarget) -> Vec<String> {
        let mut classes: Vec<String> = self.classes.borrow()[target.0].iter().cloned().collect();
        classes.sort();
        classes
    }

    /// Number of class mutations performed on any element
    pub fn class_changes(&self) -> usize {
        self.class_changes.get()
    }

    pub fn unwatch_calls(&self) -> usize {
        self.unwatch_calls.get()
    }
}

impl RevealHost for MemoryReveal {
    type Target = MemoryTarget;

    fn watch(&self, target: &MemoryTarget) {
        self.watched.borrow_mut().insert(*target);
    }

    fn unwatch(&self, target: &MemoryTarget) {
        self.unwatch_calls.set(self.unwatch_calls.get() + 1);
        self.watched.borrow_mut().remove(target);
    }

    fn has_class(&self, target: &MemoryTarget, class: &str) -> bool {
        self.classes.borrow()[target.0].contains(class)
    }

    fn add_class(&self, target: &MemoryTarget, class: &str) {
        self.class_changes.set(self.class_changes.get() + 1);
        self.classes.borrow_mut()[target.0].insert(class.to_string());
    }
}
