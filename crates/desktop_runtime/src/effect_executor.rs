//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the executor that hands queued [`crate::RuntimeEffect`]s to the host in emission order.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }

        // Take the batch first: timer callbacks and URL opens may dispatch again while it runs.
        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();

        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime.dispatch, effect);
        }
    });
}
