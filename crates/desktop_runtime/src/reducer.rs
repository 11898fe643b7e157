//! Reducer actions, side-effect intents, and transition logic for the desktop widget.

use platform_host::{LinkTarget, OutboundSignal};
use thiserror::Error;

use crate::{
    interaction::{click_intent::PressIntent, menus::MenuId},
    model::{
        DesktopState, InteractionState, PointerPosition, PressOrigin, TargetId, UiRegion,
    },
    timer::{TimerCommand, TimerMode, TimerSlot, TimerToken},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Primary press on an activatable target (desktop icon or assistant button).
    PressTarget {
        /// Target that was pressed.
        target_id: TargetId,
    },
    /// Click on empty desktop space.
    ClearSelection,
    /// Pointer entered a tip-bearing element.
    HoverEnter {
        /// Element key used to match the later leave.
        element_id: String,
        /// Tooltip text.
        text: String,
        /// Pointer position at entry.
        pointer: PointerPosition,
    },
    /// Pointer moved while over a tip-bearing element.
    HoverMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer left a tip-bearing element.
    HoverLeave {
        /// Element the pointer left.
        element_id: String,
    },
    /// Press anywhere on the desktop surface.
    DesktopPointerDown {
        /// Desktop-relative pointer position.
        pointer: PointerPosition,
        /// What the press landed on.
        origin: PressOrigin,
    },
    /// Document-level pointer move.
    PointerMove {
        /// Desktop-relative pointer position.
        pointer: PointerPosition,
    },
    /// Document-level pointer release.
    PointerUp,
    /// Press on the movable window's title bar.
    TitlebarPress {
        /// Desktop-relative pointer position.
        pointer: PointerPosition,
        /// Desktop-relative top-left corner of the window as rendered.
        window_top_left: PointerPosition,
    },
    /// Close control of the movable window.
    CloseWelcomeWindow,
    /// Trigger of a menu was activated.
    ToggleMenu {
        /// Menu whose trigger was activated.
        menu: MenuId,
    },
    /// Close a menu regardless of its state.
    CloseMenu {
        /// Menu to close.
        menu: MenuId,
    },
    /// Any click on the document, with the regions it passed through.
    DocumentClick {
        /// Regions containing the click target, innermost first.
        path: Vec<UiRegion>,
    },
    /// Billing timer control was clicked.
    ToggleBilling {
        /// Random roll used to pick a closing remark when the counter stops.
        remark_roll: u32,
    },
    /// Global key press.
    KeyDown {
        /// Legacy `keyCode` of the key.
        code: u32,
    },
    /// `paid-user` attribute changed.
    SetPaidUser {
        /// Parsed attribute value.
        paid: bool,
    },
    /// `user-name` attribute changed.
    SetUserName {
        /// Parsed attribute value; empty names mean signed out.
        user_name: Option<String>,
    },
    /// Login affordance was activated.
    RequestLogin,
    /// Logout entry of the account menu was activated.
    RequestLogout,
    /// Scanline overlay toggle.
    ToggleCrt,
    /// A host timer scheduled through [`RuntimeEffect::ScheduleTimer`] elapsed.
    TimerFired {
        /// Token the timer was scheduled with.
        token: TimerToken,
    },
    /// Widget is being torn down; every pending timer must be canceled.
    Teardown,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host runtime to execute.
pub enum RuntimeEffect {
    /// Start a host timer that dispatches [`DesktopAction::TimerFired`] with `token`.
    ScheduleTimer {
        /// Token to report back.
        token: TimerToken,
        /// Delay or period in milliseconds.
        delay_ms: u32,
        /// One-shot or repeating.
        mode: TimerMode,
    },
    /// Stop the host timer started for `token`.
    CancelTimer {
        /// Token of the timer to stop.
        token: TimerToken,
    },
    /// Open an external URL.
    OpenExternalUrl {
        /// Destination URL.
        url: String,
        /// Browsing context to open it in.
        target: LinkTarget,
    },
    /// Notify the embedding page.
    EmitSignal(OutboundSignal),
}

impl From<TimerCommand> for RuntimeEffect {
    fn from(command: TimerCommand) -> Self {
        match command {
            TimerCommand::Schedule {
                token,
                delay_ms,
                mode,
            } => Self::ScheduleTimer {
                token,
                delay_ms,
                mode,
            },
            TimerCommand::Cancel(token) => Self::CancelTimer { token },
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The pressed target is not registered in the catalog.
    #[error("activatable target `{0}` not found")]
    TargetNotFound(TargetId),
}

/// Applies a [`DesktopAction`] to the widget state and collects resulting side effects.
///
/// This is the only place widget state changes. A returned error leaves the state untouched.
///
/// # Errors
///
/// Returns [`ReducerError::TargetNotFound`] when a press references an unknown target.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    let timings = state.config.timings.clone();
    match action {
        DesktopAction::PressTarget { target_id } => {
            let target = state
                .target(&target_id)
                .cloned()
                .ok_or_else(|| ReducerError::TargetNotFound(target_id.clone()))?;
            let (intent, command) = interaction.click_intent.press(&target.id);
            push_timers(&mut effects, [command]);
            if target.selectable {
                push_timers(
                    &mut effects,
                    state.selection.select(target.id, timings.icon_flash_ms),
                );
            }
            if intent == PressIntent::Activate {
                effects.push(RuntimeEffect::OpenExternalUrl {
                    url: target.url,
                    target: LinkTarget::NewContext,
                });
            }
        }
        DesktopAction::ClearSelection => {
            push_timers(&mut effects, state.selection.clear());
        }
        DesktopAction::HoverEnter {
            element_id,
            text,
            pointer,
        } => {
            interaction.hover_pointer = pointer;
            push_timers(&mut effects, state.tooltip.enter(element_id, text, pointer));
        }
        DesktopAction::HoverMove { pointer } => {
            interaction.hover_pointer = pointer;
            state.tooltip.move_to(pointer);
        }
        DesktopAction::HoverLeave { element_id } => {
            push_timers(&mut effects, state.tooltip.leave(&element_id));
        }
        DesktopAction::DesktopPointerDown { pointer, origin } => {
            interaction.drag_select.press(pointer, origin);
        }
        DesktopAction::PointerMove { pointer } => {
            interaction.drag_select.move_to(pointer);
            interaction
                .window_drag
                .update(&mut state.welcome, pointer);
        }
        DesktopAction::PointerUp => {
            interaction.drag_select.release();
            interaction.window_drag.end();
        }
        DesktopAction::TitlebarPress {
            pointer,
            window_top_left,
        } => {
            interaction
                .window_drag
                .begin(&mut state.welcome, pointer, window_top_left);
        }
        DesktopAction::CloseWelcomeWindow => {
            state.welcome.close();
            interaction.window_drag.end();
        }
        DesktopAction::ToggleMenu { menu } => {
            if !state.menus.get_mut(menu).toggle() {
                menu_closed(state, menu, &mut effects);
            }
        }
        DesktopAction::CloseMenu { menu } => {
            if state.menus.get_mut(menu).close() {
                menu_closed(state, menu, &mut effects);
            }
        }
        DesktopAction::DocumentClick { path } => {
            for menu in state.menus.close_outside(&path) {
                menu_closed(state, menu, &mut effects);
            }
        }
        DesktopAction::ToggleBilling { remark_roll } => {
            let commands = if state.billing.is_running() {
                let remark_index = remark_index(remark_roll, state.config.closing_remark_count);
                state.billing.stop(remark_index, timings.billing_popup_ms)
            } else {
                state.billing.start(timings.billing_tick_ms)
            };
            push_timers(&mut effects, commands);
            state.menus.get_mut(MenuId::Billing).open();
        }
        DesktopAction::KeyDown { code } => {
            if state.cheat.on_key(code) {
                push_timers(
                    &mut effects,
                    state.cheat_effect.trigger(timings.cheat_phase_two_ms),
                );
            }
        }
        DesktopAction::SetPaidUser { paid } => state.identity.paid_user = paid,
        DesktopAction::SetUserName { user_name } => {
            state.identity.user_name = user_name.filter(|name| !name.is_empty());
            if !state.identity.is_signed_in() {
                state.menus.get_mut(MenuId::Account).close();
            }
        }
        DesktopAction::RequestLogin => {
            effects.push(RuntimeEffect::EmitSignal(OutboundSignal::LoginClick));
        }
        DesktopAction::RequestLogout => {
            state.menus.get_mut(MenuId::Account).close();
            effects.push(RuntimeEffect::EmitSignal(OutboundSignal::LogoutClick));
        }
        DesktopAction::ToggleCrt => state.crt_enabled = !state.crt_enabled,
        DesktopAction::TimerFired { token } => {
            timer_fired(state, interaction, &token, &mut effects);
        }
        DesktopAction::Teardown => {
            push_timers(&mut effects, interaction.click_intent.cancel_all());
            push_timers(&mut effects, state.selection.cancel_timers());
            push_timers(&mut effects, state.tooltip.cancel());
            push_timers(&mut effects, state.billing.cancel_timers());
            push_timers(&mut effects, state.cheat_effect.cancel());
            interaction.drag_select.release();
            interaction.window_drag.end();
        }
    }
    Ok(effects)
}

fn timer_fired(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    token: &TimerToken,
    effects: &mut Vec<RuntimeEffect>,
) {
    match &token.slot {
        TimerSlot::ClickIntent(_) => {
            // The press already selected; a lapsed window only clears the pending flag.
            interaction.click_intent.fire(token);
        }
        TimerSlot::IconFlash => {
            state.selection.fire(token);
        }
        TimerSlot::TooltipArm => {
            state.tooltip.fire(token, interaction.hover_pointer);
        }
        TimerSlot::BillingTick => {
            state.billing.fire_tick(token);
        }
        TimerSlot::BillingPopupAutoHide => {
            if state.billing.fire_popup(token) {
                state.menus.get_mut(MenuId::Billing).close();
            }
        }
        TimerSlot::CheatEffect => {
            let timings = &state.config.timings;
            let deep_shift_ms = timings
                .cheat_end_ms
                .saturating_sub(timings.cheat_phase_two_ms);
            push_timers(effects, state.cheat_effect.fire(token, deep_shift_ms));
        }
    }
}

fn menu_closed(state: &mut DesktopState, menu: MenuId, effects: &mut Vec<RuntimeEffect>) {
    if menu == MenuId::Billing {
        push_timers(effects, state.billing.cancel_popup());
    }
}

fn remark_index(roll: u32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    roll as usize % count
}

fn push_timers(
    effects: &mut Vec<RuntimeEffect>,
    commands: impl IntoIterator<Item = TimerCommand>,
) {
    effects.extend(commands.into_iter().map(RuntimeEffect::from));
}
