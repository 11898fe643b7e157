//! Hover-delay tooltip. One instance exists for the whole widget.

use crate::{
    model::PointerPosition,
    timer::{ScopedTimer, TimerCommand, TimerSlot, TimerToken},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HoveredElement {
    element_id: String,
    text: String,
}

/// What the shell renders while the tooltip is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipView<'a> {
    pub text: &'a str,
    pub position: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipController {
    arm_ms: u32,
    offset: PointerPosition,
    hovered: Option<HoveredElement>,
    pointer: PointerPosition,
    visible: bool,
    arm: ScopedTimer,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new(600, PointerPosition::new(12, 16))
    }
}

impl TooltipController {
    pub fn new(arm_ms: u32, offset: PointerPosition) -> Self {
        Self {
            arm_ms,
            offset,
            hovered: None,
            pointer: PointerPosition::default(),
            visible: false,
            arm: ScopedTimer::once(TimerSlot::TooltipArm),
        }
    }

    /// Starts the arm delay for a newly hovered element, dropping any previous one.
    pub fn enter(
        &mut self,
        element_id: impl Into<String>,
        text: impl Into<String>,
        pointer: PointerPosition,
    ) -> Vec<TimerCommand> {
        self.hovered = Some(HoveredElement {
            element_id: element_id.into(),
            text: text.into(),
        });
        self.pointer = pointer;
        self.visible = false;
        self.arm.rearm(self.arm_ms)
    }

    /// Pins a visible tooltip to the live pointer. Moves while arming are not recorded here.
    pub fn move_to(&mut self, pointer: PointerPosition) {
        if self.visible {
            self.pointer = pointer;
        }
    }

    /// Hides the tooltip if `element_id` is the hovered element.
    ///
    /// A late leave from an element that was already replaced by another enter is ignored.
    pub fn leave(&mut self, element_id: &str) -> Option<TimerCommand> {
        let is_current = self
            .hovered
            .as_ref()
            .is_some_and(|hovered| hovered.element_id == element_id);
        if !is_current {
            return None;
        }
        self.cancel()
    }

    /// Shows the tooltip at `pointer`, the live position when the arm delay lapsed.
    pub fn fire(&mut self, token: &TimerToken, pointer: PointerPosition) -> bool {
        if !self.arm.fire(token) || self.hovered.is_none() {
            return false;
        }
        self.pointer = pointer;
        self.visible = true;
        true
    }

    pub fn cancel(&mut self) -> Option<TimerCommand> {
        self.hovered = None;
        self.visible = false;
        self.arm.cancel()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_arming(&self) -> bool {
        self.arm.is_armed()
    }

    pub fn view(&self) -> Option<TooltipView<'_>> {
        let hovered = self.hovered.as_ref().filter(|_| self.visible)?;
        Some(TooltipView {
            text: &hovered.text,
            position: self.pointer.offset(self.offset.x, self.offset.y),
        })
    }
}
