use tauri::{AppHandle, Manager, RunEvent, Window, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, lifecycle::LifecycleSignal, KioskState,
    MAIN_WINDOW_LABEL,
};

pub(crate) fn dispatch_signal(app_handle: &AppHandle, signal: LifecycleSignal) {
    let Some(state) = app_handle.try_state::<KioskState>() else {
        append_desktop_log(&format!(
            "lifecycle signal {signal:?} ignored: lifecycle not installed"
        ));
        return;
    };

    let log = if matches!(
        signal,
        LifecycleSignal::AllWindowsClosed | LifecycleSignal::WillQuit
    ) {
        append_shutdown_log
    } else {
        append_desktop_log
    };
    if let Err(error) = state.dispatch(signal, log) {
        log(&format!("lifecycle signal {signal:?} failed: {error}"));
    }
}

pub(crate) fn signal_for_window_event(label: &str, event: &WindowEvent) -> Option<LifecycleSignal> {
    if label != MAIN_WINDOW_LABEL {
        return None;
    }
    match event {
        WindowEvent::Destroyed => Some(LifecycleSignal::WindowClosed),
        _ => None,
    }
}

pub(crate) fn handle_window_event(window: &Window, event: &WindowEvent) {
    if let Some(signal) = signal_for_window_event(window.label(), event) {
        dispatch_signal(window.app_handle(), signal);
    }
}

/// `ExitRequested` without a code is what the runtime sends once the last
/// window is gone; coded requests come from an explicit `exit` call.
pub(crate) fn handle_run_event(app_handle: &AppHandle, event: &RunEvent) {
    match event {
        RunEvent::ExitRequested { code: None, .. } => {
            dispatch_signal(app_handle, LifecycleSignal::AllWindowsClosed);
        }
        RunEvent::Exit => {
            dispatch_signal(app_handle, LifecycleSignal::WillQuit);
            append_shutdown_log("desktop process exiting");
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => {
            dispatch_signal(app_handle, LifecycleSignal::Activate);
        }
        _ => {}
    }
}
