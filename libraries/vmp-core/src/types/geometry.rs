//! Layout geometry in points
use serde::{Deserialize, Serialize};

/// Width and height of a container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with a top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Same rectangle with `inset` points removed from the bottom edge
    ///
    /// The height never goes below zero.
    pub fn inset_bottom(self, inset: f64) -> Self {
        Self {
            height: (self.height - inset).max(0.0),
            ..self
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
