use std::{fmt, ops::Sub};

use platform_host::ExternalIdentity;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{DesktopCatalog, DesktopTimings},
    interaction::{
        billing::BillingTimer,
        cheat_code::{CheatCodeDetector, CheatEffect},
        click_intent::ClickIntentClassifier,
        drag_select::DragSelectController,
        menus::MenuSet,
        selection::SelectionState,
        tooltip::TooltipController,
        window_drag::{MovableWindow, WindowDragController},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Sub for PointerPosition {
    type Output = PointerPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl SelectionRect {
    /// Rectangle spanned by two corners, independent of drag direction.
    pub fn spanning(a: PointerPosition, b: PointerPosition) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (b.x - a.x).abs(),
            h: (b.y - a.y).abs(),
        }
    }
}

/// Stable key of an activatable target, taken from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivatableTarget {
    pub id: TargetId,
    /// Resource opened in a new browsing context on activation.
    pub url: String,
    /// Desktop icons take part in selection; the floating assistant button does not.
    pub selectable: bool,
}

/// Where a press on the desktop surface landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressOrigin {
    EmptyDesktop,
    Icon,
    Window,
    OtherWidget,
}

/// Regions a document-level click may pass through, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiRegion {
    StartButton,
    StartMenu,
    AccountButton,
    AccountDropdown,
    BillingTimer,
    BillingPopup,
    Taskbar,
    BottomBar,
    Desktop,
    Window,
}

impl UiRegion {
    /// Value of the `data-region` attribute marking this region in the DOM.
    pub const fn as_attr(self) -> &'static str {
        match self {
            UiRegion::StartButton => "start-button",
            UiRegion::StartMenu => "start-menu",
            UiRegion::AccountButton => "account-button",
            UiRegion::AccountDropdown => "account-dropdown",
            UiRegion::BillingTimer => "billing-timer",
            UiRegion::BillingPopup => "billing-popup",
            UiRegion::Taskbar => "taskbar",
            UiRegion::BottomBar => "bottom-bar",
            UiRegion::Desktop => "desktop",
            UiRegion::Window => "window",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "start-button" => Some(UiRegion::StartButton),
            "start-menu" => Some(UiRegion::StartMenu),
            "account-button" => Some(UiRegion::AccountButton),
            "account-dropdown" => Some(UiRegion::AccountDropdown),
            "billing-timer" => Some(UiRegion::BillingTimer),
            "billing-popup" => Some(UiRegion::BillingPopup),
            "taskbar" => Some(UiRegion::Taskbar),
            "bottom-bar" => Some(UiRegion::BottomBar),
            "desktop" => Some(UiRegion::Desktop),
            "window" => Some(UiRegion::Window),
            _ => None,
        }
    }
}

/// Values the reducer needs from the catalog, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionConfig {
    pub timings: DesktopTimings,
    pub hourly_rate: u32,
    pub closing_remark_count: usize,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self::from_catalog(&DesktopCatalog::default())
    }
}

impl InteractionConfig {
    pub fn from_catalog(catalog: &DesktopCatalog) -> Self {
        Self {
            timings: catalog.timings.clone(),
            hourly_rate: catalog.billing.hourly_rate,
            closing_remark_count: catalog.billing.closing_remarks.len(),
        }
    }
}

/// Rendered widget state. Every field is written only through [`crate::reduce_desktop`].
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub config: InteractionConfig,
    pub targets: Vec<ActivatableTarget>,
    pub identity: ExternalIdentity,
    pub selection: SelectionState,
    pub tooltip: TooltipController,
    pub menus: MenuSet,
    pub welcome: MovableWindow,
    pub billing: BillingTimer,
    pub cheat: CheatCodeDetector,
    pub cheat_effect: CheatEffect,
    pub crt_enabled: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::from_catalog(&DesktopCatalog::default())
    }
}

impl DesktopState {
    pub fn from_catalog(catalog: &DesktopCatalog) -> Self {
        let config = InteractionConfig::from_catalog(catalog);
        Self {
            tooltip: TooltipController::new(
                config.timings.tooltip_arm_ms,
                PointerPosition::new(
                    config.timings.tooltip_offset_x,
                    config.timings.tooltip_offset_y,
                ),
            ),
            config,
            targets: catalog.activatable_targets(),
            identity: ExternalIdentity::default(),
            selection: SelectionState::default(),
            menus: MenuSet::default(),
            welcome: MovableWindow::default(),
            billing: BillingTimer::default(),
            cheat: CheatCodeDetector::new(catalog.cheat.sequence.clone()),
            cheat_effect: CheatEffect::default(),
            crt_enabled: true,
        }
    }

    pub fn target(&self, id: &TargetId) -> Option<&ActivatableTarget> {
        self.targets.iter().find(|target| &target.id == id)
    }
}

/// Pointer-transient state that the view never renders directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub click_intent: ClickIntentClassifier,
    /// Last pointer position over a tip-bearing element, read when the tooltip arm delay lapses.
    pub hover_pointer: PointerPosition,
    pub drag_select: DragSelectController,
    pub window_drag: WindowDragController,
}

impl InteractionState {
    pub fn from_config(config: &InteractionConfig) -> Self {
        Self {
            click_intent: ClickIntentClassifier::new(config.timings.click_intent_ms),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn selection_rect_spans_corners_in_any_order() {
        let a = PointerPosition::new(30, 5);
        let b = PointerPosition::new(10, 25);

        assert_eq!(SelectionRect::spanning(a, b), SelectionRect::spanning(b, a));
        assert_eq!(
            SelectionRect::spanning(a, b),
            SelectionRect { x: 10, y: 5, w: 20, h: 20 }
        );
    }

    #[test]
    fn region_attributes_map_back_to_regions() {
        assert_eq!(UiRegion::StartMenu.as_attr(), "start-menu");
        assert_eq!(UiRegion::from_attr("billing-popup"), Some(UiRegion::BillingPopup));
        assert_eq!(UiRegion::from_attr("sidebar"), None);
    }

    #[test]
    fn every_region_has_a_distinct_attribute() {
        let regions = [
            UiRegion::StartButton,
            UiRegion::StartMenu,
            UiRegion::AccountButton,
            UiRegion::AccountDropdown,
            UiRegion::BillingTimer,
            UiRegion::BillingPopup,
            UiRegion::Taskbar,
            UiRegion::BottomBar,
            UiRegion::Desktop,
            UiRegion::Window,
        ];
        for region in regions {
            assert!(!region.as_attr().is_empty());
            assert_eq!(UiRegion::from_attr(region.as_attr()), Some(region));
        }
    }

    #[test]
    fn default_state_starts_with_crt_on_and_window_open() {
        let state = DesktopState::default();

        assert!(state.crt_enabled);
        assert!(state.welcome.is_open());
        assert!(state.targets.is_empty());
        assert!(!state.identity.is_signed_in());
    }
}
