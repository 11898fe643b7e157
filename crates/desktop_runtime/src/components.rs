//! Desktop widget UI composition and interaction surfaces.
//!
//! Components translate DOM events into [`DesktopAction`]s and render [`DesktopState`]. None of
//! them hold interaction state of their own beyond purely visual signals such as the clock.

mod bottom_bar;
mod desktop_icons;
mod overlays;
mod taskbar;
mod window;

use leptos::*;
use wasm_bindgen::JsCast;

use self::{
    bottom_bar::BottomBar,
    desktop_icons::DesktopIconGroups,
    overlays::{CrtOverlay, SelectionRectangle, Tooltip},
    taskbar::Taskbar,
    window::WelcomeWindow,
};
use crate::{
    model::{DesktopState, InteractionState, PointerPosition, PressOrigin, UiRegion},
    reducer::DesktopAction,
};

const WIDGET_ROOT_ID: &str = "goodlegal-desktop-root";

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Root view of the widget: taskbar, desktop surface, bottom bar, and overlays.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let desktop_ref = create_node_ref::<html::Div>();

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if !runtime.interaction.with_untracked(pointer_captured) {
            return;
        }
        let pointer = desktop_pointer(desktop_ref, ev.client_x(), ev.client_y());
        runtime.dispatch_action(DesktopAction::PointerMove { pointer });
    });
    on_cleanup(move || move_listener.remove());

    let up_listener = window_event_listener(ev::pointerup, move |_| {
        if runtime.interaction.with_untracked(pointer_captured) {
            runtime.dispatch_action(DesktopAction::PointerUp);
        }
    });
    on_cleanup(move || up_listener.remove());

    let outside_click_listener = window_event_listener(ev::click, move |ev| {
        if !state.with_untracked(any_menu_open) {
            return;
        }
        runtime.dispatch_action(DesktopAction::DocumentClick {
            path: region_path(&ev),
        });
    });
    on_cleanup(move || outside_click_listener.remove());

    let on_desktop_press = move |ev: ev::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let origin = press_origin(&ev);
        if origin != PressOrigin::EmptyDesktop {
            return;
        }
        runtime.dispatch_action(DesktopAction::DesktopPointerDown {
            pointer: desktop_pointer(desktop_ref, ev.client_x(), ev.client_y()),
            origin,
        });
    };
    let on_desktop_click = move |ev: ev::MouseEvent| {
        if press_origin(&ev) == PressOrigin::EmptyDesktop
            && state.with_untracked(|desktop| desktop.selection.selected().is_some())
        {
            runtime.dispatch_action(DesktopAction::ClearSelection);
        }
    };

    view! {
        <div
            id=WIDGET_ROOT_ID
            class="desktop-shell"
            class:paid-user=move || state.get().identity.paid_user
            style:filter=move || state.get().cheat_effect.phase().css_filter()
        >
            <Taskbar />
            <div
                id="desktop"
                class="desktop-surface"
                data-region=UiRegion::Desktop.as_attr()
                node_ref=desktop_ref
                on:mousedown:undelegated=on_desktop_press
                on:click:undelegated=on_desktop_click
            >
                <DesktopIconGroups />
                <WelcomeWindow desktop_ref />
                <SelectionRectangle />
            </div>
            <BottomBar />
            <Tooltip />
            <CrtOverlay />
        </div>
    }
}

/// Whether a drag-select or window drag currently owns the pointer stream.
fn pointer_captured(ui: &InteractionState) -> bool {
    ui.drag_select.is_active() || ui.window_drag.is_dragging()
}

fn any_menu_open(desktop: &DesktopState) -> bool {
    crate::MenuId::ALL
        .into_iter()
        .any(|menu| desktop.menus.is_open(menu))
}

/// Converts client coordinates into coordinates relative to the desktop surface.
fn desktop_pointer(desktop: NodeRef<html::Div>, client_x: i32, client_y: i32) -> PointerPosition {
    let (left, top) = desktop
        .get_untracked()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            (rect.left() as i32, rect.top() as i32)
        })
        .unwrap_or((0, 0));
    PointerPosition::new(client_x - left, client_y - top)
}

/// Converts client coordinates into coordinates relative to the widget root, where the tooltip
/// layer is positioned.
fn widget_pointer(ev: &web_sys::MouseEvent) -> PointerPosition {
    let (left, top) = event_element(ev)
        .and_then(|element| element.closest(&format!("#{WIDGET_ROOT_ID}")).ok().flatten())
        .map(|root| {
            let rect = root.get_bounding_client_rect();
            (rect.left() as i32, rect.top() as i32)
        })
        .unwrap_or((0, 0));
    PointerPosition::new(ev.client_x() - left, ev.client_y() - top)
}

fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

fn has_ancestor(element: &web_sys::Element, selector: &str) -> bool {
    matches!(element.closest(selector), Ok(Some(_)))
}

fn press_origin(ev: &web_sys::MouseEvent) -> PressOrigin {
    let Some(element) = event_element(ev) else {
        return PressOrigin::OtherWidget;
    };
    if has_ancestor(&element, ".desktop-icon") {
        PressOrigin::Icon
    } else if has_ancestor(&element, "[data-region=\"window\"]") {
        PressOrigin::Window
    } else {
        PressOrigin::EmptyDesktop
    }
}

/// Regions a click passed through, innermost first. Crosses the shadow boundary.
fn region_path(ev: &web_sys::Event) -> Vec<UiRegion> {
    ev.composed_path()
        .iter()
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|element| element.get_attribute("data-region"))
        .filter_map(|attr| UiRegion::from_attr(&attr))
        .collect()
}
