use super::*;

/// Handlers wiring an element with help text to the shared tooltip.
#[derive(Clone)]
pub(super) struct TipHandlers {
    runtime: DesktopRuntimeContext,
    element_id: String,
    text: String,
}

impl TipHandlers {
    pub fn new(element_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            runtime: use_desktop_runtime(),
            element_id: element_id.into(),
            text: text.into(),
        }
    }

    pub fn on_enter(&self) -> impl Fn(ev::MouseEvent) + 'static {
        let Self {
            runtime,
            element_id,
            text,
        } = self.clone();
        move |ev| {
            runtime.dispatch_action(DesktopAction::HoverEnter {
                element_id: element_id.clone(),
                text: text.clone(),
                pointer: widget_pointer(&ev),
            });
        }
    }

    /// Until the tooltip shows, moves only update [`InteractionState`], so rendered state is
    /// not rewritten on every pixel.
    pub fn on_move(&self) -> impl Fn(ev::MouseEvent) + 'static {
        let runtime = self.runtime;
        move |ev| {
            runtime.dispatch_action(DesktopAction::HoverMove {
                pointer: widget_pointer(&ev),
            });
        }
    }

    pub fn on_leave(&self) -> impl Fn(ev::MouseEvent) + 'static {
        let runtime = self.runtime;
        let element_id = self.element_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::HoverLeave {
                element_id: element_id.clone(),
            });
        }
    }
}

#[component]
pub(super) fn Tooltip() -> impl IntoView {
    let state = use_desktop_runtime().state;
    let tooltip = Signal::derive(move || {
        state.with(|desktop| {
            desktop
                .tooltip
                .view()
                .map(|view| (view.text.to_string(), view.position))
        })
    });

    view! {
        <div
            id="tooltip"
            role="tooltip"
            class:visible=move || tooltip.get().is_some()
            style=move || {
                tooltip
                    .get()
                    .map(|(_, at)| format!("left:{}px;top:{}px;", at.x, at.y))
                    .unwrap_or_default()
            }
        >
            {move || tooltip.get().map(|(text, _)| text).unwrap_or_default()}
        </div>
    }
}

#[component]
pub(super) fn SelectionRectangle() -> impl IntoView {
    let interaction = use_desktop_runtime().interaction;
    let rect = create_memo(move |_| interaction.with(|ui| ui.drag_select.rect()));

    view! {
        <Show when=move || rect.get().is_some() fallback=|| ()>
            <div
                id="selection-rect"
                style=move || {
                    rect.get()
                        .map(|r| {
                            format!("left:{}px;top:{}px;width:{}px;height:{}px;", r.x, r.y, r.w, r.h)
                        })
                        .unwrap_or_default()
                }
            ></div>
        </Show>
    }
}

#[component]
pub(super) fn CrtOverlay() -> impl IntoView {
    let state = use_desktop_runtime().state;

    view! {
        <div
            id="crt-overlay"
            aria-hidden="true"
            class:active=move || state.with(|desktop| desktop.crt_enabled)
        ></div>
    }
}
