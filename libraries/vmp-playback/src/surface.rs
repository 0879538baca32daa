//! Video render surface

use serde::{Deserialize, Serialize};
use vmp_core::{HandleId, Rect, Size};

/// How video is fitted into the surface frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoGravity {
    /// Keep the aspect ratio and fit inside the frame
    #[default]
    ResizeAspect,
}

/// Layer that renders frames from at most one media handle
#[derive(Debug, Clone, Default)]
pub struct RenderSurface {
    frame: Rect,
    gravity: VideoGravity,
    bound: Option<HandleId>,
}

impl RenderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render frames from `handle`
    ///
    /// Returns `true` if the binding changed.
    pub fn attach(&mut self, handle: HandleId) -> bool {
        self.bound.replace(handle) != Some(handle)
    }

    /// Stop rendering, returning the handle that was bound
    pub fn detach(&mut self) -> Option<HandleId> {
        self.bound.take()
    }

    pub fn bound_handle(&self) -> Option<HandleId> {
        self.bound
    }

    pub fn is_attached(&self) -> bool {
        self.bound.is_some()
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn gravity(&self) -> VideoGravity {
        self.gravity
    }

    /// Fit the surface to `container`, leaving `bottom_inset` points for controls
    pub fn layout(&mut self, container: Size, bottom_inset: f64) {
        self.frame = Rect::from_size(container).inset_bottom(bottom_inset);
    }
}
