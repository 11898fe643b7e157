//! Runtime provider and context wiring for the desktop widget.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::{ExternalIdentity, HostServices};

use crate::{
    catalog::DesktopCatalog,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading widget state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Static presentation catalog the shell renders from.
    pub catalog: StoredValue<DesktopCatalog>,
    /// Reactive widget state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn load_catalog() -> DesktopCatalog {
    match DesktopCatalog::load() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("desktop catalog unavailable, rendering an empty desktop: {err}");
            DesktopCatalog::default()
        }
    }
}

fn install_identity_bridge(runtime: DesktopRuntimeContext, identity: Signal<ExternalIdentity>) {
    create_effect(move |previous: Option<ExternalIdentity>| {
        let current = identity.get();
        let previous = previous.unwrap_or_default();
        if current.paid_user != previous.paid_user {
            runtime.dispatch_action(DesktopAction::SetPaidUser {
                paid: current.paid_user,
            });
        }
        if current.user_name != previous.user_name {
            runtime.dispatch_action(DesktopAction::SetUserName {
                user_name: current.user_name.clone(),
            });
        }
        current
    });
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext, identity: Signal<ExternalIdentity>) {
    effect_executor::install(runtime);
    install_identity_bridge(runtime, identity);
    runtime.host.get_value().install_key_source(runtime.dispatch);

    on_cleanup(move || teardown(runtime));
}

/// Cancels every reducer-owned timer through the host, then releases the host's own handles.
fn teardown(runtime: DesktopRuntimeContext) {
    let DesktopRuntimeContext {
        host,
        state,
        interaction,
        dispatch,
        ..
    } = runtime;
    let cancellations = state
        .try_update(|desktop| {
            interaction.try_update(|ui| reduce_desktop(desktop, ui, DesktopAction::Teardown))
        })
        .flatten();

    host.try_with_value(|host| {
        match cancellations {
            Some(Ok(effects)) => {
                for effect in effects {
                    host.run_runtime_effect(dispatch, effect);
                }
            }
            Some(Err(err)) => logging::warn!("desktop teardown failed: {err}"),
            None => {}
        }
        host.shutdown();
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Attributes mirrored from the embedding element.
    #[prop(into)]
    identity: Signal<ExternalIdentity>,
    children: Children,
) -> impl IntoView {
    let catalog = load_catalog();
    let initial = DesktopState::from_catalog(&catalog);
    let host = store_value(DesktopHostContext::new(host_services));
    let interaction = create_rw_signal(InteractionState::from_config(&initial.config));
    let state = create_rw_signal(initial);
    let catalog = store_value(catalog);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        catalog,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime, identity);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
