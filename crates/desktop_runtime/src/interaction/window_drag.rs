//! Title-bar dragging of the single movable window.

use crate::model::PointerPosition;

/// How the window is positioned inside the desktop.
///
/// The window starts centered and switches to `Free` on its first drag; it never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPlacement {
    #[default]
    Centered,
    Free { top_left: PointerPosition },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovableWindow {
    open: bool,
    placement: WindowPlacement,
}

impl Default for MovableWindow {
    fn default() -> Self {
        Self {
            open: true,
            placement: WindowPlacement::Centered,
        }
    }
}

impl MovableWindow {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn placement(&self) -> WindowPlacement {
        self.placement
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowDragController {
    grab_offset: Option<PointerPosition>,
}

impl WindowDragController {
    /// Records the grab offset and pins the window at `current_top_left`.
    ///
    /// Both positions are desktop-relative. Returns `false` when the window is closed.
    pub fn begin(
        &mut self,
        window: &mut MovableWindow,
        pointer: PointerPosition,
        current_top_left: PointerPosition,
    ) -> bool {
        if !window.open {
            return false;
        }
        self.grab_offset = Some(pointer - current_top_left);
        window.placement = WindowPlacement::Free {
            top_left: current_top_left,
        };
        true
    }

    pub fn update(&self, window: &mut MovableWindow, pointer: PointerPosition) -> bool {
        let Some(offset) = self.grab_offset else {
            return false;
        };
        window.placement = WindowPlacement::Free {
            top_left: pointer - offset,
        };
        true
    }

    pub fn end(&mut self) -> bool {
        self.grab_offset.take().is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_follows_pointer_minus_grab_offset() {
        let mut window = MovableWindow::default();
        let mut drag = WindowDragController::default();

        assert!(drag.begin(
            &mut window,
            PointerPosition::new(230, 110),
            PointerPosition::new(200, 100),
        ));
        assert_eq!(
            window.placement(),
            WindowPlacement::Free {
                top_left: PointerPosition::new(200, 100)
            }
        );

        for (x, y) in [(300, 300), (0, 0), (-50, 900)] {
            drag.update(&mut window, PointerPosition::new(x, y));
            assert_eq!(
                window.placement(),
                WindowPlacement::Free {
                    top_left: PointerPosition::new(x - 30, y - 10)
                }
            );
        }
    }

    #[test]
    fn position_stops_updating_after_end() {
        let mut window = MovableWindow::default();
        let mut drag = WindowDragController::default();
        drag.begin(&mut window, PointerPosition::new(10, 10), PointerPosition::new(0, 0));
        drag.update(&mut window, PointerPosition::new(60, 40));

        assert!(drag.end());
        assert!(!drag.update(&mut window, PointerPosition::new(500, 500)));
        assert_eq!(
            window.placement(),
            WindowPlacement::Free {
                top_left: PointerPosition::new(50, 30)
            }
        );
        assert!(!drag.end());
    }

    #[test]
    fn closed_window_cannot_be_grabbed() {
        let mut window = MovableWindow::default();
        window.close();
        let mut drag = WindowDragController::default();

        assert!(!drag.begin(&mut window, PointerPosition::new(1, 1), PointerPosition::new(0, 0)));
        assert!(!drag.is_dragging());
        assert_eq!(window.placement(), WindowPlacement::Centered);
    }
}
