use std::time::Duration;

use platform_host::{format_clock_hh_mm, local_clock_now};

use super::*;
use crate::{catalog::LinkEntry, interaction::menus::MenuId};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let catalog = runtime.catalog.get_value();
    let upgrade = catalog.upgrade_link.clone();
    let start_menu_open = Signal::derive(move || state.get().menus.is_open(MenuId::Start));

    let toggle_start = move |_| {
        runtime.dispatch_action(DesktopAction::ToggleMenu {
            menu: MenuId::Start,
        });
    };

    view! {
        <div id="taskbar" data-region=UiRegion::Taskbar.as_attr()>
            <div id="taskbar-left">
                <button
                    id="start-btn"
                    data-region=UiRegion::StartButton.as_attr()
                    class:active=move || start_menu_open.get()
                    aria-haspopup="menu"
                    aria-expanded=move || start_menu_open.get().to_string()
                    on:click:undelegated=toggle_start
                >
                    <span class="start-icon">"⚖️"</span>
                    {catalog.brand.clone()}
                </button>
                <div class="taskbar-divider"></div>
                <span class="taskbar-status">{catalog.status_text.clone()}</span>
            </div>
            <div id="taskbar-right">
                {catalog
                    .taskbar_links
                    .iter()
                    .map(|link| view! {
                        <a class="taskbar-link" href=link.url.clone() target=link.html_target()>
                            {link.label.clone()}
                        </a>
                    })
                    .collect_view()}
                <SessionControls />
                <Show when=move || !state.get().identity.paid_user fallback=|| ()>
                    <a
                        id="taskbar-pricing"
                        class="taskbar-link highlight"
                        href=upgrade.url.clone()
                        target=upgrade.html_target()
                    >
                        {upgrade.label.clone()}
                    </a>
                </Show>
                <TaskbarClock />
            </div>
            <StartMenu links=catalog.start_menu.clone() brand=catalog.brand.clone() />
        </div>
    }
}

#[component]
fn StartMenu(links: Vec<LinkEntry>, brand: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div
            id="start-menu"
            role="menu"
            data-region=UiRegion::StartMenu.as_attr()
            class:open=move || state.get().menus.is_open(MenuId::Start)
        >
            <div id="start-menu-header">
                <div class="avatar">"⚖️"</div>
                <div class="user-name">{brand}</div>
            </div>
            <div class="start-menu-items">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            {link.separated.then(|| view! { <div class="start-menu-sep"></div> })}
                            <a class="start-menu-item" role="menuitem" href=link.url.clone() target=link.html_target()>
                                <span class="item-icon">{link.glyph.clone().unwrap_or_default()}</span>
                                " "
                                {link.label.clone()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SessionControls() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let session = runtime.catalog.get_value().session;
    let user_name = Signal::derive(move || state.get().identity.user_name);
    let dropdown_open = Signal::derive(move || state.get().menus.is_open(MenuId::Account));
    let login_label = session.login_label.clone();
    let logout_label = session.logout_label.clone();
    let account_links = session.account_links;

    let request_login = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::RequestLogin);
    };
    let toggle_account = move |_| {
        runtime.dispatch_action(DesktopAction::ToggleMenu {
            menu: MenuId::Account,
        });
    };
    let request_logout = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::RequestLogout);
    };

    view! {
        <Show
            when=move || user_name.get().is_some()
            fallback=move || view! {
                <a id="login-btn" class="taskbar-link" role="button" on:click:undelegated=request_login>
                    {login_label.clone()}
                </a>
            }
        >
            <div id="account-menu-wrapper">
                <button
                    id="account-btn"
                    data-region=UiRegion::AccountButton.as_attr()
                    aria-haspopup="menu"
                    aria-expanded=move || dropdown_open.get().to_string()
                    on:click:undelegated=toggle_account
                >
                    <span id="account-name">{move || user_name.get().unwrap_or_default()}</span>
                    " "
                    <span class="account-arrow">"▼"</span>
                </button>
                <div
                    id="account-dropdown"
                    role="menu"
                    data-region=UiRegion::AccountDropdown.as_attr()
                    class:open=move || dropdown_open.get()
                >
                    {account_links
                        .iter()
                        .map(|link| view! {
                            <a class="account-dropdown-item" role="menuitem" href=link.url.clone() target=link.html_target()>
                                <span class="item-icon">{link.glyph.clone().unwrap_or_default()}</span>
                                " "
                                {link.label.clone()}
                            </a>
                        })
                        .collect_view()}
                    <div class="account-dropdown-sep"></div>
                    <a
                        id="logout-btn"
                        class="account-dropdown-item"
                        role="menuitem"
                        on:click:undelegated=request_logout
                    >
                        <span class="item-icon">"🚪"</span>
                        " "
                        {logout_label.clone()}
                    </a>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let refresh_ms = runtime.state.get_untracked().config.timings.clock_refresh_ms;
    let now = create_rw_signal(local_clock_now());

    if let Ok(interval) = set_interval_with_handle(
        move || now.set(local_clock_now()),
        Duration::from_millis(u64::from(refresh_ms)),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! { <div id="clock" class="taskbar-clock">{move || format_clock_hh_mm(now.get())}</div> }
}
