use tauri::{AppHandle, Listener, Manager};

use crate::{append_desktop_log, MAIN_WINDOW_LABEL, TOGGLE_DEVTOOLS_EVENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainWindowSnapshot {
    Missing,
    Present { devtools_open: bool },
}

pub(crate) fn describe_toggle_devtools_event(payload: &str, window: MainWindowSnapshot) -> String {
    let payload = if payload.trim().is_empty() {
        "<empty>"
    } else {
        payload
    };
    match window {
        MainWindowSnapshot::Missing => {
            format!("{TOGGLE_DEVTOOLS_EVENT} ipc event: payload={payload}, main window missing")
        }
        MainWindowSnapshot::Present { devtools_open } => format!(
            "{TOGGLE_DEVTOOLS_EVENT} ipc event: payload={payload}, main window present, devtools_open={devtools_open}"
        ),
    }
}

/// Renderer-raised `toggle-devTools` events are only logged.
pub(crate) fn register_toggle_devtools_listener(app_handle: &AppHandle) {
    let listener_handle = app_handle.clone();
    app_handle.listen(TOGGLE_DEVTOOLS_EVENT, move |event| {
        let snapshot = match listener_handle.get_webview_window(MAIN_WINDOW_LABEL) {
            Some(window) => MainWindowSnapshot::Present {
                devtools_open: window.is_devtools_open(),
            },
            None => MainWindowSnapshot::Missing,
        };
        append_desktop_log(&describe_toggle_devtools_event(event.payload(), snapshot));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_toggle_devtools_event_reports_window_state() {
        assert_eq!(
            describe_toggle_devtools_event("null", MainWindowSnapshot::Missing),
            "toggle-devTools ipc event: payload=null, main window missing"
        );
        assert_eq!(
            describe_toggle_devtools_event(
                "",
                MainWindowSnapshot::Present {
                    devtools_open: true
                }
            ),
            "toggle-devTools ipc event: payload=<empty>, main window present, devtools_open=true"
        );
    }
}
