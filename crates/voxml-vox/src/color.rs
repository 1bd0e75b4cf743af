//! Linear RGBA palette colors.

use serde::{Deserialize, Serialize};

/// Linear RGBA color with `f32` components in `[0.0, 1.0]`.
///
/// Palette slot 0 is conventionally [`Color::TRANSPARENT`]. Out-of-range
/// palette reads surface as [`Color::ERROR`] rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component (0.0 = fully transparent).
    pub a: f32,
}

impl Color {
    /// Fully transparent black — the reserved "empty cell" palette entry.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque white — the placeholder for synthesized palette entries.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Magenta sentinel returned for out-of-range palette reads.
    pub const ERROR: Color = Color::new(1.0, 0.0, 1.0, 1.0);

    /// Creates a color from explicit RGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns this color with the alpha component replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Returns this color with the alpha component multiplied by `factor`.
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }

    /// Returns this color with the RGB components multiplied by `factor`.
    ///
    /// Alpha is left untouched. Used for depth shading, where cells deeper
    /// in the grid are drawn darker.
    pub fn scale_rgb(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
