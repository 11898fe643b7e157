use super::{overlays::TipHandlers, *};
use crate::{
    catalog::{BillingConfig, DesktopCatalog},
    interaction::{billing::BillingRemark, menus::MenuId},
    model::TargetId,
};

fn remark_text(catalog: &DesktopCatalog, remark: BillingRemark) -> String {
    let billing = &catalog.billing;
    match remark {
        BillingRemark::Idle => billing.idle_remark.clone(),
        BillingRemark::Running => billing.running_remark.clone(),
        BillingRemark::Closing(index) => catalog
            .closing_remark(index)
            .unwrap_or(&billing.running_remark)
            .to_string(),
    }
}

#[component]
pub(super) fn BottomBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let catalog = runtime.catalog.get_value();

    let toggle_crt = move |_| runtime.dispatch_action(DesktopAction::ToggleCrt);

    view! {
        <div id="bottom-bar" data-region=UiRegion::BottomBar.as_attr()>
            <div class="bottom-left">
                <AssistantButton />
                <BillingTimer />
            </div>
            <div class="bottom-links">
                {catalog
                    .footer_links
                    .iter()
                    .map(|link| view! {
                        <a
                            class="bottom-link"
                            class:signature=link.signature
                            href=link.url.clone()
                            target=link.html_target()
                        >
                            {link.label.clone()}
                        </a>
                    })
                    .collect_view()}
                <button
                    id="crt-toggle"
                    class="bottom-link"
                    class:active=move || state.with(|desktop| desktop.crt_enabled)
                    aria-pressed=move || state.with(|desktop| desktop.crt_enabled).to_string()
                    on:click:undelegated=toggle_crt
                >
                    "CRT"
                </button>
            </div>
        </div>
    }
}

#[component]
fn AssistantButton() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let assistant = runtime.catalog.get_value().assistant;
    if assistant.id.is_empty() {
        return ().into_view();
    }

    let target_id = TargetId::new(assistant.id.clone());
    let press = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::PressTarget {
            target_id: target_id.clone(),
        });
    };
    let tip = assistant
        .tip
        .clone()
        .map(|text| TipHandlers::new(assistant.id.clone(), text));
    let (on_enter, on_move, on_leave) = match tip {
        Some(tip) => (Some(tip.on_enter()), Some(tip.on_move()), Some(tip.on_leave())),
        None => (None, None, None),
    };

    view! {
        <a
            id="donna-btn"
            href=assistant.url.clone()
            data-target=assistant.id.clone()
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
            <span class="donna-icon">{assistant.glyph.clone()}</span>
            <span class="donna-text">
                <span class="donna-name">{assistant.label.clone()}</span>
                <span class="donna-subtitle">{assistant.subtitle.clone()}</span>
            </span>
        </a>
    }
    .into_view()
}

#[component]
fn BillingTimer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let catalog = runtime.catalog.get_value();
    let BillingConfig {
        title,
        button_label,
        hourly_rate,
        currency,
        ..
    } = catalog.billing.clone();
    let running = move || state.with(|desktop| desktop.billing.is_running());
    let popup_open = move || state.with(|desktop| desktop.menus.is_open(MenuId::Billing));

    let toggle = move |_| {
        runtime.dispatch_action(DesktopAction::ToggleBilling {
            remark_roll: rand::random(),
        });
    };

    let rate_line = format!("Taux horaire : {hourly_rate} {currency}/h");
    let amount_currency = currency.clone();

    view! {
        <div id="billing-wrapper">
            <button
                id="billing-timer"
                data-region=UiRegion::BillingTimer.as_attr()
                class:running=running
                aria-haspopup="dialog"
                aria-expanded=move || popup_open().to_string()
                on:click:undelegated=toggle
            >
                <span class="billing-dot"></span>
                <span class="billing-display">
                    {move || state.with(|desktop| desktop.billing.display())}
                </span>
                <span class="billing-label">{button_label}</span>
            </button>
            <div
                id="billing-popup"
                role="dialog"
                data-region=UiRegion::BillingPopup.as_attr()
                class:open=popup_open
            >
                <div class="billing-popup-title">{title}</div>
                <div class="billing-popup-rate">{rate_line}</div>
                <div class="billing-popup-amount">
                    {move || {
                        let amount = state.with(|desktop| desktop.billing.amount(hourly_rate));
                        format!("{amount} {amount_currency}")
                    }}
                </div>
                <div class="billing-popup-remark">
                    {move || state.with(|desktop| remark_text(&catalog, desktop.billing.remark()))}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn remark_follows_billing_phase() {
        let catalog = DesktopCatalog::load().expect("embedded catalog parses");

        assert_eq!(
            remark_text(&catalog, BillingRemark::Idle),
            catalog.billing.idle_remark
        );
        assert_eq!(
            remark_text(&catalog, BillingRemark::Running),
            catalog.billing.running_remark
        );
        assert_eq!(
            remark_text(&catalog, BillingRemark::Closing(0)),
            "Harvey Specter approuve."
        );
    }

    #[test]
    fn out_of_range_closing_remark_falls_back_to_running_copy() {
        let catalog = DesktopCatalog::load().expect("embedded catalog parses");
        assert_eq!(
            remark_text(&catalog, BillingRemark::Closing(99)),
            catalog.billing.running_remark
        );
    }
}
