use tauri::{AppHandle, WebviewWindow};

use crate::{
    append_desktop_log,
    display_sleep::DisplaySleepBlocker,
    escape_shortcut,
    lifecycle::{KioskHost, KioskWindow},
    window_actions,
    window_settings::WindowSettings,
};

impl KioskWindow for WebviewWindow {
    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), String> {
        window_actions::set_main_window_fullscreen(self, fullscreen)
    }

    fn open_devtools(&self) {
        window_actions::open_main_window_devtools(self, append_desktop_log);
    }
}

pub(crate) struct TauriKioskHost {
    app_handle: AppHandle,
}

impl TauriKioskHost {
    pub(crate) fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl KioskHost for TauriKioskHost {
    type Window = WebviewWindow;
    type SleepBlocker = DisplaySleepBlocker;

    fn create_window(&self, settings: &WindowSettings) -> Result<WebviewWindow, String> {
        window_actions::build_main_window(&self.app_handle, settings)
    }

    fn register_escape_shortcut(&self) -> Result<(), String> {
        escape_shortcut::register_escape(&self.app_handle)
    }

    fn unregister_shortcuts(&self) -> Result<(), String> {
        escape_shortcut::unregister_all(&self.app_handle)
    }

    fn block_display_sleep(&self) -> Result<DisplaySleepBlocker, String> {
        let blocker = DisplaySleepBlocker::start()?;
        append_desktop_log(&format!(
            "display sleep inhibitor started: {}",
            blocker.is_started()
        ));
        Ok(blocker)
    }

    fn quit(&self) {
        self.app_handle.exit(0);
    }
}
