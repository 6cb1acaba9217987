// File: src/reveal.rs
// Purpose: IntersectionObserver-backed scroll reveal

use contact_form_core::{Intersection, RevealConfig, RevealHost, ScrollRevealer};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{describe, BindingError};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// RevealHost over one IntersectionObserver
pub struct ObserverHost {
    observer: IntersectionObserver,
}

impl ObserverHost {
    pub fn new(observer: IntersectionObserver) -> Self {
        Self { observer }
    }
}

impl RevealHost for ObserverHost {
    type Target = Element;

    fn watch(&self, target: &Element) {
        self.observer.observe(target);
    }

    fn unwatch(&self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn has_class(&self, target: &Element, class: &str) -> bool {
        target.class_list().contains(class)
    }

    fn add_class(&self, target: &Element, class: &str) {
        if let Err(e) = target.class_list().add_1(class) {
            tracing::warn!("Could not add {} class: {}", class, describe(&e));
        }
    }
}

/// Owns the page's intersection observer and its callback.
///
/// Dropping it disconnects the observer.
pub struct ScrollReveal {
    revealer: ScrollRevealer<ObserverHost>,
    _callback: ObserverCallback,
}

impl ScrollReveal {
    pub fn new(config: &RevealConfig) -> Result<Self, BindingError> {
        let callback_config = config.clone();
        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            // The observer passed to the callback is the same one the
            // revealer below was built with
            let revealer = ScrollRevealer::new(ObserverHost::new(observer), &callback_config);
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection::new(entry.target(), entry.is_intersecting()));
            revealer.on_intersection(entries);
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&config.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(BindingError::dom("new IntersectionObserver"))?;

        Ok(Self {
            revealer: ScrollRevealer::new(ObserverHost::new(observer), config),
            _callback: callback,
        })
    }

    /// Start watching `targets`; returns how many were registered
    pub fn observe(&self, targets: &[Element]) -> usize {
        self.revealer.observe(targets)
    }

    pub fn revealer(&self) -> &ScrollRevealer<ObserverHost> {
        &self.revealer
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.revealer.host().observer.disconnect();
    }
}
