use super::*;
use crate::interaction::window_drag::WindowPlacement;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_style(placement: WindowPlacement) -> String {
    match placement {
        WindowPlacement::Centered => String::new(),
        WindowPlacement::Free { top_left } => {
            format!("left:{}px;top:{}px;transform:none;", top_left.x, top_left.y)
        }
    }
}

#[component]
/// Welcome window centered on the desktop until its title bar is first dragged.
pub(super) fn WelcomeWindow(desktop_ref: NodeRef<html::Div>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let copy = runtime.catalog.get_value().welcome;
    let window_ref = create_node_ref::<html::Section>();
    let placement = Signal::derive(move || state.get().welcome.placement());

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || (ev.pointer_type() != "mouse" && !ev.is_primary()) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();

        let window_top_left = match (window_ref.get_untracked(), desktop_ref.get_untracked()) {
            (Some(window), Some(desktop)) => {
                let window_rect = window.get_bounding_client_rect();
                let desktop_rect = desktop.get_bounding_client_rect();
                PointerPosition::new(
                    (window_rect.left() - desktop_rect.left()) as i32,
                    (window_rect.top() - desktop_rect.top()) as i32,
                )
            }
            _ => PointerPosition::default(),
        };
        runtime.dispatch_action(DesktopAction::TitlebarPress {
            pointer: desktop_pointer(desktop_ref, ev.client_x(), ev.client_y()),
            window_top_left,
        });
    };
    let close = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::CloseWelcomeWindow);
    };

    view! {
        <Show when=move || state.get().welcome.is_open() fallback=|| ()>
            <section
                id="welcome-window"
                class="xp-window"
                class:centered=move || placement.get() == WindowPlacement::Centered
                style=move || window_style(placement.get())
                role="dialog"
                aria-label=copy.window_title.clone()
                data-region=UiRegion::Window.as_attr()
                node_ref=window_ref
            >
                <header class="xp-titlebar" on:pointerdown:undelegated=begin_move>
                    <span class="xp-title">{copy.window_title.clone()}</span>
                    <button
                        class="xp-close"
                        aria-label="Fermer"
                        on:pointerdown:undelegated=move |ev: web_sys::PointerEvent| {
                            ev.stop_propagation();
                        }
                        on:click:undelegated=close
                    >
                        "✕"
                    </button>
                </header>
                <div class="xp-body">
                    <h2>{copy.heading.clone()}</h2>
                    {copy
                        .paragraphs
                        .iter()
                        .map(|paragraph| view! { <p>{paragraph.clone()}</p> })
                        .collect_view()}
                    <p class="xp-hint">{copy.hint.clone()}</p>
                </div>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn centered_window_uses_stylesheet_position() {
        assert_eq!(window_style(WindowPlacement::Centered), "");
    }

    #[test]
    fn free_window_is_pinned_without_centering_transform() {
        let placement = WindowPlacement::Free {
            top_left: PointerPosition::new(140, -12),
        };
        assert_eq!(
            window_style(placement),
            "left:140px;top:-12px;transform:none;"
        );
    }
}
