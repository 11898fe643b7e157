//! End-to-end interaction flows driven through the reducer against a simulated clock.

use std::collections::BTreeMap;

use desktop_runtime::{
    interaction::{billing::BillingRemark, cheat_code::CheatPhase, window_drag::WindowPlacement},
    reduce_desktop, DesktopAction, DesktopCatalog, DesktopState, InteractionState, MenuId,
    PointerPosition, PressOrigin, RuntimeEffect, SelectionRect, TargetId, TimerMode, TimerSlot,
    TimerToken, UiRegion,
};
use platform_host::{LinkTarget, OutboundSignal};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct PendingTimer {
    due_ms: u64,
    sequence: u64,
    period_ms: Option<u64>,
}

/// Executes runtime effects the way the browser host does, with time under test control.
struct SimulatedHost {
    state: DesktopState,
    interaction: InteractionState,
    now_ms: u64,
    next_sequence: u64,
    timers: BTreeMap<TimerToken, PendingTimer>,
    opened: Vec<(String, LinkTarget)>,
    signals: Vec<OutboundSignal>,
}

impl SimulatedHost {
    fn new() -> Self {
        let catalog = DesktopCatalog::load().expect("embedded catalog");
        let state = DesktopState::from_catalog(&catalog);
        let interaction = InteractionState::from_config(&state.config);
        Self {
            state,
            interaction,
            now_ms: 0,
            next_sequence: 0,
            timers: BTreeMap::new(),
            opened: Vec::new(),
            signals: Vec::new(),
        }
    }

    fn dispatch(&mut self, action: DesktopAction) {
        let effects = reduce_desktop(&mut self.state, &mut self.interaction, action)
            .expect("action applies");
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleTimer {
                token,
                delay_ms,
                mode,
            } => {
                let delay = u64::from(delay_ms);
                self.next_sequence += 1;
                self.timers.insert(
                    token,
                    PendingTimer {
                        due_ms: self.now_ms + delay,
                        sequence: self.next_sequence,
                        period_ms: (mode == TimerMode::Repeating).then_some(delay),
                    },
                );
            }
            RuntimeEffect::CancelTimer { token } => {
                self.timers.remove(&token);
            }
            RuntimeEffect::OpenExternalUrl { url, target } => self.opened.push((url, target)),
            RuntimeEffect::EmitSignal(signal) => self.signals.push(signal),
        }
    }

    fn advance(&mut self, ms: u64) {
        let until = self.now_ms + ms;
        loop {
            let next = self
                .timers
                .iter()
                .filter(|(_, timer)| timer.due_ms <= until)
                .min_by_key(|(_, timer)| (timer.due_ms, timer.sequence))
                .map(|(token, _)| token.clone());
            let Some(token) = next else {
                break;
            };
            let Some(timer) = self.timers.remove(&token) else {
                break;
            };
            self.now_ms = timer.due_ms;
            if let Some(period) = timer.period_ms {
                self.next_sequence += 1;
                self.timers.insert(
                    token.clone(),
                    PendingTimer {
                        due_ms: timer.due_ms + period,
                        sequence: self.next_sequence,
                        period_ms: Some(period),
                    },
                );
            }
            self.dispatch(DesktopAction::TimerFired { token });
        }
        self.now_ms = until;
    }

    fn press(&mut self, id: &str) {
        self.dispatch(DesktopAction::PressTarget {
            target_id: TargetId::new(id),
        });
    }

    fn has_timer(&self, slot: &TimerSlot) -> bool {
        self.timers.keys().any(|token| &token.slot == slot)
    }
}

#[test]
fn double_press_inside_window_opens_target_once() {
    let mut host = SimulatedHost::new();

    host.press("mcp");
    host.advance(150);
    host.press("mcp");
    host.advance(1_000);

    assert_eq!(
        host.opened,
        vec![("https://www.goodlegal.fr/".to_string(), LinkTarget::NewContext)]
    );
    assert!(host.state.selection.is_selected(&TargetId::new("mcp")));
}

#[test]
fn presses_further_apart_than_window_only_select() {
    let mut host = SimulatedHost::new();
    let mcp = TargetId::new("mcp");

    host.press("mcp");
    assert!(host.state.selection.is_flashing(&mcp));
    host.advance(200);
    assert!(!host.state.selection.is_flashing(&mcp));
    host.advance(200);
    host.press("mcp");
    host.advance(400);

    assert!(host.opened.is_empty());
    assert!(host.state.selection.is_selected(&mcp));
    assert!(!host.has_timer(&TimerSlot::ClickIntent(mcp)));
}

#[test]
fn interleaved_targets_keep_separate_windows() {
    let mut host = SimulatedHost::new();

    host.press("api");
    host.advance(100);
    host.press("mcp");
    host.advance(100);
    host.press("api");

    assert_eq!(
        host.opened,
        vec![("https://api.goodlegal.fr".to_string(), LinkTarget::NewContext)]
    );
    assert!(host.state.selection.is_selected(&TargetId::new("api")));
    assert!(host.has_timer(&TimerSlot::ClickIntent(TargetId::new("mcp"))));
}

#[test]
fn assistant_opens_on_double_press_without_taking_selection() {
    let mut host = SimulatedHost::new();
    host.press("mcp");
    host.advance(500);

    host.press("donna");
    host.press("donna");

    assert_eq!(
        host.opened,
        vec![("https://thedonna.ai/".to_string(), LinkTarget::NewContext)]
    );
    assert!(host.state.selection.is_selected(&TargetId::new("mcp")));
}

#[test]
fn tooltip_appears_after_hover_delay_and_follows_pointer() {
    let mut host = SimulatedHost::new();

    host.dispatch(DesktopAction::HoverEnter {
        element_id: "api".to_string(),
        text: "API RESTful pour developpeurs".to_string(),
        pointer: PointerPosition::new(100, 200),
    });
    host.advance(599);
    assert!(host.state.tooltip.view().is_none());

    host.advance(1);
    host.dispatch(DesktopAction::HoverMove {
        pointer: PointerPosition::new(110, 205),
    });
    let view = host.state.tooltip.view().expect("tooltip visible");
    assert_eq!(view.text, "API RESTful pour developpeurs");
    assert_eq!(view.position, PointerPosition::new(122, 221));

    host.dispatch(DesktopAction::HoverLeave {
        element_id: "api".to_string(),
    });
    assert!(host.state.tooltip.view().is_none());
}

#[test]
fn leaving_before_delay_never_shows_tooltip() {
    let mut host = SimulatedHost::new();

    host.dispatch(DesktopAction::HoverEnter {
        element_id: "mcp".to_string(),
        text: "Connectez GoodLegal".to_string(),
        pointer: PointerPosition::new(5, 5),
    });
    host.advance(300);
    host.dispatch(DesktopAction::HoverLeave {
        element_id: "mcp".to_string(),
    });
    host.advance(1_000);

    assert!(host.state.tooltip.view().is_none());
    assert!(!host.has_timer(&TimerSlot::TooltipArm));
}

#[test]
fn billing_hour_accumulates_and_popup_hides_after_stop() {
    let mut host = SimulatedHost::new();

    host.dispatch(DesktopAction::ToggleBilling { remark_roll: 7 });
    assert!(host.state.menus.is_open(MenuId::Billing));
    host.advance(3_661_000);

    assert_eq!(host.state.billing.display(), "01:01:01");
    assert_eq!(host.state.billing.amount(500), "508,47");

    host.dispatch(DesktopAction::ToggleBilling { remark_roll: 7 });
    assert_eq!(host.state.billing.remark(), BillingRemark::Closing(0));
    assert!(!host.has_timer(&TimerSlot::BillingTick));

    host.advance(3_999);
    assert!(host.state.menus.is_open(MenuId::Billing));
    host.advance(1);
    assert!(!host.state.menus.is_open(MenuId::Billing));

    host.advance(10_000);
    assert_eq!(host.state.billing.elapsed_seconds(), 3_661);
}

#[test]
fn restarting_billing_keeps_popup_open_and_resumes_count() {
    let mut host = SimulatedHost::new();

    host.dispatch(DesktopAction::ToggleBilling { remark_roll: 0 });
    host.advance(2_000);
    host.dispatch(DesktopAction::ToggleBilling { remark_roll: 0 });
    host.advance(1_000);
    host.dispatch(DesktopAction::ToggleBilling { remark_roll: 0 });
    host.advance(5_000);

    assert!(host.state.menus.is_open(MenuId::Billing));
    assert_eq!(host.state.billing.elapsed_seconds(), 7);
    assert_eq!(host.state.billing.remark(), BillingRemark::Running);
}

#[test]
fn closing_billing_popup_by_outside_click_cancels_auto_hide() {
    let mut host = SimulatedHost::new();

    host.dispatch(DesktopAction::ToggleBilling { remark_roll: 0 });
    host.advance(1_000);
    host.dispatch(DesktopAction::ToggleBilling { remark_roll: 0 });
    host.dispatch(DesktopAction::DocumentClick {
        path: vec![UiRegion::Desktop],
    });

    assert!(!host.state.menus.is_open(MenuId::Billing));
    assert!(!host.has_timer(&TimerSlot::BillingPopupAutoHide));
}

#[test]
fn cheat_sequence_runs_both_phases_then_clears() {
    let mut host = SimulatedHost::new();
    let sequence = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

    for code in &sequence[..5] {
        host.dispatch(DesktopAction::KeyDown { code: *code });
    }
    host.dispatch(DesktopAction::KeyDown { code: 13 });
    assert_eq!(host.state.cheat_effect.phase(), CheatPhase::Idle);

    for code in sequence {
        host.dispatch(DesktopAction::KeyDown { code });
    }
    assert_eq!(host.state.cheat_effect.phase(), CheatPhase::HueShift);

    host.advance(1_000);
    assert_eq!(host.state.cheat_effect.phase(), CheatPhase::DeepShift);
    host.advance(1_499);
    assert_eq!(host.state.cheat_effect.phase(), CheatPhase::DeepShift);
    host.advance(1);
    assert_eq!(host.state.cheat_effect.phase(), CheatPhase::Idle);
    assert!(!host.has_timer(&TimerSlot::CheatEffect));
}

#[test]
fn outside_clicks_close_only_menus_they_miss() {
    let mut host = SimulatedHost::new();
    host.dispatch(DesktopAction::SetUserName {
        user_name: Some("Maitre Dupont".to_string()),
    });

    host.dispatch(DesktopAction::ToggleMenu {
        menu: MenuId::Account,
    });
    host.dispatch(DesktopAction::DocumentClick {
        path: vec![UiRegion::AccountButton, UiRegion::Taskbar],
    });
    assert!(host.state.menus.is_open(MenuId::Account));

    host.dispatch(DesktopAction::ToggleMenu {
        menu: MenuId::Start,
    });
    host.dispatch(DesktopAction::DocumentClick {
        path: vec![UiRegion::StartButton, UiRegion::Taskbar],
    });
    assert!(host.state.menus.is_open(MenuId::Start));
    assert!(!host.state.menus.is_open(MenuId::Account));

    host.dispatch(DesktopAction::DocumentClick {
        path: vec![UiRegion::StartMenu, UiRegion::Taskbar],
    });
    assert!(host.state.menus.is_open(MenuId::Start));

    host.dispatch(DesktopAction::DocumentClick { path: Vec::new() });
    assert!(!host.state.menus.is_open(MenuId::Start));
}

#[test]
fn drag_select_and_window_drag_share_pointer_stream() {
    let mut host = SimulatedHost::new();

    host.dispatch(DesktopAction::DesktopPointerDown {
        pointer: PointerPosition::new(300, 300),
        origin: PressOrigin::EmptyDesktop,
    });
    host.dispatch(DesktopAction::PointerMove {
        pointer: PointerPosition::new(250, 340),
    });
    assert_eq!(
        host.interaction.drag_select.rect(),
        Some(SelectionRect {
            x: 250,
            y: 300,
            w: 50,
            h: 40,
        })
    );
    host.dispatch(DesktopAction::PointerUp);
    assert_eq!(host.interaction.drag_select.rect(), None);

    host.dispatch(DesktopAction::TitlebarPress {
        pointer: PointerPosition::new(420, 110),
        window_top_left: PointerPosition::new(400, 100),
    });
    host.dispatch(DesktopAction::PointerMove {
        pointer: PointerPosition::new(120, 60),
    });
    host.dispatch(DesktopAction::PointerUp);
    host.dispatch(DesktopAction::PointerMove {
        pointer: PointerPosition::new(0, 0),
    });

    assert_eq!(
        host.state.welcome.placement(),
        WindowPlacement::Free {
            top_left: PointerPosition::new(100, 50),
        }
    );
    assert_eq!(host.interaction.drag_select.rect(), None);
}

#[test]
fn session_affordances_emit_signals() {
    let mut host = SimulatedHost::new();

    host.dispatch(DesktopAction::RequestLogin);
    host.dispatch(DesktopAction::SetUserName {
        user_name: Some("Maitre Dupont".to_string()),
    });
    host.dispatch(DesktopAction::ToggleMenu {
        menu: MenuId::Account,
    });
    host.dispatch(DesktopAction::RequestLogout);

    assert_eq!(
        host.signals,
        vec![OutboundSignal::LoginClick, OutboundSignal::LogoutClick]
    );
    assert!(!host.state.menus.is_open(MenuId::Account));
}

#[test]
fn teardown_leaves_no_timer_behind() {
    let mut host = SimulatedHost::new();
    host.press("api");
    host.dispatch(DesktopAction::HoverEnter {
        element_id: "api".to_string(),
        text: "API".to_string(),
        pointer: PointerPosition::new(0, 0),
    });
    host.dispatch(DesktopAction::ToggleBilling { remark_roll: 0 });
    for code in [38, 38, 40, 40, 37, 39, 37, 39, 66, 65] {
        host.dispatch(DesktopAction::KeyDown { code });
    }
    host.advance(1_500);

    host.dispatch(DesktopAction::Teardown);

    assert!(host.timers.is_empty(), "left {:?}", host.timers.keys());
    assert!(!host.state.billing.is_running());
    assert_eq!(host.state.billing.elapsed_seconds(), 1);
}
