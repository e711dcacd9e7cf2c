use tauri::{plugin::TauriPlugin, AppHandle, Wry};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Shortcut, ShortcutState};

use crate::{lifecycle::LifecycleSignal, lifecycle_events};

pub(crate) fn escape_shortcut() -> Shortcut {
    Shortcut::new(None, Code::Escape)
}

pub(crate) fn is_escape_press(shortcut: &Shortcut, state: ShortcutState) -> bool {
    state == ShortcutState::Pressed && *shortcut == escape_shortcut()
}

pub(crate) fn build_plugin() -> TauriPlugin<Wry> {
    tauri_plugin_global_shortcut::Builder::new()
        .with_handler(|app_handle, shortcut, event| {
            if is_escape_press(shortcut, event.state()) {
                lifecycle_events::dispatch_signal(app_handle, LifecycleSignal::EscapePressed);
            }
        })
        .build()
}

pub(crate) fn register_escape(app_handle: &AppHandle) -> Result<(), String> {
    let shortcut = escape_shortcut();
    let shortcuts = app_handle.global_shortcut();
    if shortcuts.is_registered(shortcut) {
        return Ok(());
    }
    shortcuts
        .register(shortcut)
        .map_err(|error| format!("Failed to register Escape shortcut: {error}"))
}

pub(crate) fn unregister_all(app_handle: &AppHandle) -> Result<(), String> {
    app_handle
        .global_shortcut()
        .unregister_all()
        .map_err(|error| format!("Failed to unregister global shortcuts: {error}"))
}
