//! Depth-bounded pre-order traversal.
//!
//! The walk visits an element before its children and stops descending at
//! a fixed depth. The bound caps display height and traversal cost only —
//! tree structure itself is unbounded, and elements below the cutoff
//! simply go unvisited.

use crate::element::Element;

/// Deepest level `walk` descends to. Elements at this depth are still
/// yielded; their children are not visited.
pub const MAX_WALK_DEPTH: usize = 10;

/// Pre-order iterator yielding `(element, depth)` pairs.
///
/// Created by [`Element::walk`]. Lazy and restartable: each call to
/// `walk` starts a fresh traversal at depth 0.
#[derive(Clone)]
pub struct Walk<'a> {
    stack: Vec<(&'a Element, usize)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(root: &'a Element) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a Element, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (element, depth) = self.stack.pop()?;
        if depth < MAX_WALK_DEPTH {
            // Reverse push so children come off the stack in list order.
            for child in element.children().iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }
        Some((element, depth))
    }
}

/// Pre-order iterator over elements only.
///
/// The element component of [`Walk`]; this is what `for child in &element`
/// yields.
#[derive(Clone)]
pub struct Iter<'a>(Walk<'a>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        self.0.next().map(|(element, _)| element)
    }
}

impl<'a> IntoIterator for &'a Element {
    type Item = &'a Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        Iter(self.walk())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
