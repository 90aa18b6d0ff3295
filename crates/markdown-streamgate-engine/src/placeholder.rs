//! Stand-in markers for constructs that are still streaming in.
//!
//! An open construct's raw syntax never reaches the batch parser; a
//! registered kind is replaced by a self-closing marker carrying the raw
//! pending text as a reversibly percent-encoded attribute, and an
//! unregistered kind is simply hidden until it completes.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::stream::ConstructKind;

/// Caller-supplied registration table mapping construct kinds to marker
/// names.
///
/// Only registered kinds produce a marker. An explicit name overrides the
/// `incomplete-<kind>` default. The classifier consults the table but never
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderBindings {
    names: HashMap<ConstructKind, Option<String>>,
}

impl PlaceholderBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every construct kind under its default marker name.
    pub fn all() -> Self {
        let mut bindings = Self::new();
        for kind in ConstructKind::ALL {
            bindings.bind(kind);
        }
        bindings
    }

    /// Register `kind` under its default marker name.
    pub fn bind(&mut self, kind: ConstructKind) -> &mut Self {
        self.names.insert(kind, None);
        self
    }

    /// Register `kind` under a caller-chosen marker name.
    pub fn bind_as(&mut self, kind: ConstructKind, name: impl Into<String>) -> &mut Self {
        self.names.insert(kind, Some(name.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolved marker name for `kind`, or `None` when unregistered.
    pub fn name_for(&self, kind: ConstructKind) -> Option<Cow<'_, str>> {
        match self.names.get(&kind)? {
            Some(name) => Some(Cow::Borrowed(name.as_str())),
            None => Some(Cow::Owned(default_name(kind))),
        }
    }
}

/// Deterministic default marker name for a construct kind.
pub fn default_name(kind: ConstructKind) -> String {
    format!("incomplete-{}", kind.name())
}

/// Renders the stand-in marker for an open construct.
///
/// Empty when there is nothing to stand in for (`Text`, empty pending) or
/// when the kind has no registered marker name — callers that never
/// registered markers observe ordinary hidden-until-complete behavior.
pub fn resolve(kind: ConstructKind, pending: &str, bindings: &PlaceholderBindings) -> String {
    if kind == ConstructKind::Text || pending.is_empty() {
        return String::new();
    }
    let Some(name) = bindings.name_for(kind) else {
        return String::new();
    };
    format!("<{name} raw=\"{}\"/>", urlencoding::encode(pending))
}

/// Recovers the original pending text from a marker's `raw` attribute value,
/// for diffing against the completed construct.
pub fn decode_raw(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_kind_resolves_to_nothing() {
        let bindings = PlaceholderBindings::new();
        assert_eq!(resolve(ConstructKind::Link, "[half", &bindings), "");
    }

    #[test]
    fn registered_kind_uses_default_name() {
        let mut bindings = PlaceholderBindings::new();
        bindings.bind(ConstructKind::Image);
        assert_eq!(
            resolve(ConstructKind::Image, "![a", &bindings),
            "<incomplete-image raw=\"%21%5Ba\"/>"
        );
    }

    #[test]
    fn explicit_name_overrides_default() {
        let mut bindings = PlaceholderBindings::new();
        bindings.bind_as(ConstructKind::Link, "link-stub");
        assert_eq!(
            resolve(ConstructKind::Link, "[x", &bindings),
            "<link-stub raw=\"%5Bx\"/>"
        );
    }

    #[test]
    fn text_kind_never_resolves() {
        let bindings = PlaceholderBindings::all();
        assert_eq!(resolve(ConstructKind::Text, "anything", &bindings), "");
    }

    #[test]
    fn raw_attribute_round_trips() {
        for pending in ["![a](b \"c\"", "*emphasis\nrun", "`tick`s", "привет ["] {
            let encoded = urlencoding::encode(pending).into_owned();
            assert_eq!(decode_raw(&encoded), pending);
        }
    }

    #[test]
    fn all_registers_every_kind() {
        let bindings = PlaceholderBindings::all();
        for kind in ConstructKind::ALL {
            assert!(bindings.name_for(kind).is_some());
        }
        assert!(bindings.name_for(ConstructKind::Text).is_none());
    }
}
