//! Canvas API descriptor passed to update/render callbacks each frame.

use std::cell::RefCell;

use super::surface::Surface;

/// Per-frame context lent to update and render callbacks.
///
/// Built by the canvas host for every frame. The surface is behind a
/// `RefCell` so render callbacks can draw through a shared reference.
#[derive(Clone, Copy)]
pub struct CanvasApi<'a> {
    /// Milliseconds since the previous frame. None on the first frame.
    pub delta_time: Option<f64>,
    /// Drawing surface. None until the host has created one.
    pub context: Option<&'a RefCell<Surface>>,
    /// Surface width in cells.
    pub width: u16,
    /// Surface height in cells.
    pub height: u16,
}

impl<'a> CanvasApi<'a> {
    /// Descriptor for a surface, taking dimensions from it.
    pub fn new(delta_time: Option<f64>, surface: &'a RefCell<Surface>) -> Self {
        let (width, height) = {
            let surface = surface.borrow();
            (surface.width(), surface.height())
        };
        Self {
            delta_time,
            context: Some(surface),
            width,
            height,
        }
    }

    /// Descriptor for a host that has no surface yet.
    pub fn detached(delta_time: Option<f64>, width: u16, height: u16) -> Self {
        Self {
            delta_time,
            context: None,
            width,
            height,
        }
    }

    /// True on the first frame (no previous frame to measure from).
    pub fn is_first_frame(&self) -> bool {
        self.delta_time.is_none()
    }
}

impl std::fmt::Debug for CanvasApi<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasApi")
            .field("delta_time", &self.delta_time)
            .field("has_context", &self.context.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
