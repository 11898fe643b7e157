use super::{overlays::TipHandlers, *};
use crate::{
    catalog::{GroupLayout, IconEntry, IconGroup},
    model::TargetId,
};

fn layout_class(layout: GroupLayout) -> &'static str {
    match layout {
        GroupLayout::Grid => "icon-group layout-grid",
        GroupLayout::Column => "icon-group layout-column",
        GroupLayout::Row => "icon-group layout-row",
    }
}

#[component]
pub(super) fn DesktopIconGroups() -> impl IntoView {
    let groups = use_desktop_runtime().catalog.get_value().groups;

    view! {
        <div class="desktop-icon-groups">
            {groups
                .into_iter()
                .map(|group| view! { <DesktopIconGroup group /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn DesktopIconGroup(group: IconGroup) -> impl IntoView {
    view! {
        <section class=layout_class(group.layout) data-group=group.id.clone()>
            <div class="section-label">{group.label.clone()}</div>
            <div class="icon-group-items">
                {group
                    .icons
                    .into_iter()
                    .map(|icon| view! { <DesktopIcon icon /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn DesktopIcon(icon: IconEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let target_id = TargetId::new(icon.id.clone());
    let selected = {
        let id = target_id.clone();
        move || state.with(|desktop| desktop.selection.is_selected(&id))
    };
    let flashing = {
        let id = target_id.clone();
        move || state.with(|desktop| desktop.selection.is_flashing(&id))
    };

    let press = move |ev: ev::MouseEvent| {
        // Navigation goes through the reducer; the click still bubbles so open menus close.
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::PressTarget {
            target_id: target_id.clone(),
        });
    };

    let tip = icon
        .tip
        .clone()
        .map(|text| TipHandlers::new(icon.id.clone(), text));
    let (on_enter, on_move, on_leave) = match tip {
        Some(tip) => (Some(tip.on_enter()), Some(tip.on_move()), Some(tip.on_leave())),
        None => (None, None, None),
    };

    view! {
        <a
            class="desktop-icon"
            class:selected=selected
            class:flash=flashing
            href=icon.url.clone()
            draggable="false"
            data-target=icon.id.clone()
            on:click:undelegated=press
            on:mouseenter:undelegated=move |ev| {
                if let Some(handler) = &on_enter {
                    handler(ev);
                }
            }
            on:mousemove:undelegated=move |ev| {
                if let Some(handler) = &on_move {
                    handler(ev);
                }
            }
            on:mouseleave:undelegated=move |ev| {
                if let Some(handler) = &on_leave {
                    handler(ev);
                }
            }
        >
            {icon.badge.map(|badge| view! { <span class=badge.css_class()>{badge.label()}</span> })}
            <div class="icon-img">{icon.glyph.clone()}</div>
            <span class="icon-label">{icon.label.clone()}</span>
        </a>
    }
}
