//! One-shot scroll reveal
//!
//! Targets start out pending and are registered with an intersection
//! watcher. The first time a target intersects the viewport it gets the
//! visible class and is unregistered; it never goes back to pending.

use crate::config::RevealConfig;

/// The intersection watcher and class list access a revealer needs
pub trait RevealHost {
    type Target: Clone;

    fn watch(&self, target: &Self::Target);

    fn unwatch(&self, target: &Self::Target);

    fn has_class(&self, target: &Self::Target, class: &str) -> bool;

    fn add_class(&self, target: &Self::Target, class: &str);
}

/// One entry delivered by the intersection watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection<T> {
    pub target: T,
    pub is_intersecting: bool,
}

impl<T> Intersection<T> {
    pub fn new(target: T, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}

pub struct ScrollRevealer<H: RevealHost> {
    host: H,
    visible_class: String,
}

impl<H: RevealHost> ScrollRevealer<H> {
    pub fn new(host: H, config: &RevealConfig) -> Self {
        Self {
            host,
            visible_class: config.visible_class.clone(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Register every target with the watcher
    pub fn observe<'a, I>(&self, targets: I) -> usize
    where
        I: IntoIterator<Item = &'a H::Target>,
        H::Target: 'a,
    {
        let mut count = 0;
        for target in targets {
            self.host.watch(target);
            count += 1;
        }
        count
    }

    /// Reveal every intersecting target and stop watching it.
    ///
    /// A target that already carries the visible class is unwatched without
    /// being touched. Returns how many targets got the class from this call.
    pub fn on_intersection<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = Intersection<H::Target>>,
    {
        let mut revealed = 0;

        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }

            if !self.is_revealed(&entry.target) {
                self.host.add_class(&entry.target, &self.visible_class);
                revealed += 1;
            }
            self.host.unwatch(&entry.target);
        }

        if revealed > 0 {
            tracing::debug!("Revealed {} element(s)", revealed);
        }

        revealed
    }

    pub fn is_revealed(&self, target: &H::Target) -> bool {
        self.host.has_class(target, &self.visible_class)
    }
}
