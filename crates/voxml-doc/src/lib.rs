//! Ordered attributed-tree documents whose attribute values can hold
//! inline voxel-grid artwork.

pub mod attribute;
pub mod element;
pub mod walk;

pub use attribute::{AttrValue, Attribute};
pub use element::Element;
pub use walk::{Iter, MAX_WALK_DEPTH, Walk};
