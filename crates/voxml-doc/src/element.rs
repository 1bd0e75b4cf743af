//! Ordered, attributed tree elements.
//!
//! An element owns its children and attributes outright: `add` moves the
//! child in, so a node can never sit under two parents. Identity is
//! positional — there are no global IDs.

use serde::{Deserialize, Serialize};

use crate::attribute::{AttrValue, Attribute};
use crate::walk::Walk;

/// One element of an attributed document tree.
///
/// Carries body text, an ordered attribute list (duplicate names
/// permitted), and an ordered child list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Element {
    body: String,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
    attached: bool,
}

impl Element {
    /// Creates an empty, detached element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element with the given body text.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// The body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replaces the body text.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// The ordered children.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable access to the children for in-place edits.
    ///
    /// Structural changes go through [`Element::add`], [`Element::remove`],
    /// and [`Element::remove_at`].
    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Returns `true` if this element has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` once this element has been added to some parent.
    ///
    /// Set by [`Element::add`] and never cleared, even after removal.
    pub fn has_parent(&self) -> bool {
        self.attached
    }

    /// The ordered attribute list.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Mutable access to the attribute list.
    ///
    /// The editing layer appends, renames, and prunes rows directly.
    pub fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attributes
    }

    /// Appends `child` to the children and marks it attached.
    pub fn add(&mut self, mut child: Element) {
        child.attached = true;
        self.children.push(child);
    }

    /// Removes and returns the first child equal to `child`.
    ///
    /// Returns `None` if no child matches. The removed element keeps its
    /// attached flag.
    pub fn remove(&mut self, child: &Element) -> Option<Element> {
        let Some(index) = self.children.iter().position(|c| c == child) else {
            tracing::debug!("Element::remove found no matching child");
            return None;
        };
        Some(self.children.remove(index))
    }

    /// Removes and returns the child at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range — positional removal is only
    /// issued against indices the caller just enumerated.
    pub fn remove_at(&mut self, index: usize) -> Element {
        self.children.remove(index)
    }

    /// Returns the value of the first attribute named `name`.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Sets the attribute named `name`.
    ///
    /// Overwrites the value of the first attribute with that name, or
    /// appends a new one if none exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.into(),
            None => self.attributes.push(Attribute::new(name, value)),
        }
    }

    /// Depth-bounded pre-order traversal yielding `(element, depth)` pairs,
    /// starting with this element at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }
}

/// Equality is structural: body, attributes, and children.
///
/// The attached flag is bookkeeping, not identity — a detached copy of a
/// child still compares equal to the original inside its parent.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
            && self.attributes == other.attributes
            && self.children == other.children
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
