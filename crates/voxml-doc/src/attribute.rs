//! Element attributes: a name bound to plain text or inline voxel artwork.

use serde::{Deserialize, Serialize};
use voxml_vox::VoxGrid;

/// A named attribute on an [`Element`](crate::Element).
///
/// Attributes live in an ordered list; insertion order is significant and
/// duplicate names are permitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name. May be empty while the user is still typing it.
    pub name: String,
    /// Attribute payload.
    pub value: AttrValue,
}

impl Attribute {
    /// Creates an attribute from a name and anything convertible to a value.
    pub fn new(name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Attribute payload: plain text or an embedded voxel grid.
///
/// An explicit tagged union — whether an attribute holds artwork is a fact
/// of the variant, not inferred from grid contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Free-form text.
    Text(String),
    /// Inline voxel-grid artwork.
    Vox(VoxGrid),
}

impl AttrValue {
    /// The text an artwork attribute collapses to when converted back.
    pub fn placeholder_text() -> AttrValue {
        AttrValue::Text("0".to_string())
    }

    /// The single-cell starter grid a text attribute becomes when converted
    /// to artwork.
    pub fn starter_vox() -> AttrValue {
        AttrValue::Vox(VoxGrid::default())
    }

    /// Returns `true` if this value holds a voxel grid.
    pub fn is_vox(&self) -> bool {
        matches!(self, AttrValue::Vox(_))
    }

    /// The text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            AttrValue::Vox(_) => None,
        }
    }

    /// The grid payload, if this is an artwork value.
    pub fn as_vox(&self) -> Option<&VoxGrid> {
        match self {
            AttrValue::Vox(grid) => Some(grid),
            AttrValue::Text(_) => None,
        }
    }

    /// Mutable access to the grid payload, if this is an artwork value.
    pub fn as_vox_mut(&mut self) -> Option<&mut VoxGrid> {
        match self {
            AttrValue::Vox(grid) => Some(grid),
            AttrValue::Text(_) => None,
        }
    }
}

impl Default for AttrValue {
    fn default() -> Self {
        AttrValue::Text(String::new())
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::Text(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::Text(text)
    }
}

impl From<VoxGrid> for AttrValue {
    fn from(grid: VoxGrid) -> Self {
        AttrValue::Vox(grid)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accessors() {
        let value = AttrValue::from("hello");
        assert!(!value.is_vox());
        assert_eq!(value.as_text(), Some("hello"));
        assert!(value.as_vox().is_none());
    }

    #[test]
    fn test_vox_accessors() {
        let mut value = AttrValue::from(VoxGrid::default());
        assert!(value.is_vox());
        assert!(value.as_text().is_none());
        assert_eq!(value.as_vox().unwrap().volume(), 1);
        assert!(value.as_vox_mut().is_some());
    }

    #[test]
    fn test_conversion_defaults() {
        assert_eq!(AttrValue::placeholder_text(), AttrValue::from("0"));
        assert_eq!(AttrValue::starter_vox(), AttrValue::Vox(VoxGrid::default()));
    }

    #[test]
    fn test_default_is_empty_text() {
        assert_eq!(AttrValue::default(), AttrValue::Text(String::new()));
    }

    #[test]
    fn test_serde_roundtrip_with_grid() {
        let attr = Attribute::new("art", VoxGrid::from_flat(&[2, 1, 1, 0, 1]).unwrap());
        let json = serde_json::to_string(&attr).unwrap();
        let back: Attribute = serde_json::from_str(&json).unwrap();
        assert_eq!(attr, back);
    }
}
