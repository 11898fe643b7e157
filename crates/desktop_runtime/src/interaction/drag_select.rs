//! Rubber-band rectangle drawn by press-drag-release on empty desktop space.
//!
//! The rectangle is visual feedback only; icons are not hit-tested against it.

use crate::model::{PointerPosition, PressOrigin, SelectionRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSelectController {
    origin: Option<PointerPosition>,
    rect: Option<SelectionRect>,
}

impl DragSelectController {
    /// Starts a drag when the press landed on empty desktop space. Returns whether it started.
    pub fn press(&mut self, pointer: PointerPosition, origin: PressOrigin) -> bool {
        if origin != PressOrigin::EmptyDesktop {
            return false;
        }
        self.origin = Some(pointer);
        self.rect = Some(SelectionRect::spanning(pointer, pointer));
        true
    }

    pub fn move_to(&mut self, pointer: PointerPosition) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };
        self.rect = Some(SelectionRect::spanning(origin, pointer));
        true
    }

    /// Ends the drag and hides the rectangle, returning its last extent.
    pub fn release(&mut self) -> Option<SelectionRect> {
        self.origin = None;
        self.rect.take()
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn rect(&self) -> Option<SelectionRect> {
        self.rect
    }
}
