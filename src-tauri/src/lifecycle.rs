use crate::window_settings::WindowSettings;

/// A window the lifecycle can track and poke at.
pub(crate) trait KioskWindow {
    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), String>;
    fn open_devtools(&self);
}

/// The side effects the lifecycle needs from the desktop runtime.
/// Implemented for Tauri in `kiosk_host`; mocked in tests.
pub(crate) trait KioskHost {
    type Window: KioskWindow;
    type SleepBlocker;

    fn create_window(&self, settings: &WindowSettings) -> Result<Self::Window, String>;
    fn register_escape_shortcut(&self) -> Result<(), String>;
    fn unregister_shortcuts(&self) -> Result<(), String>;
    fn block_display_sleep(&self) -> Result<Self::SleepBlocker, String>;
    fn quit(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleState {
    NotReady,
    ReadyNoWindow,
    WindowOpen,
    WindowClosed,
    Quitting,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleSignal {
    Ready,
    WindowClosed,
    Activate,
    AllWindowsClosed,
    WillQuit,
    EscapePressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Ignore,
    CreateWindow,
    ForgetWindow,
    ExitFullscreen,
    Quit,
    Terminate,
}

pub(crate) fn plan_transition(
    state: LifecycleState,
    signal: LifecycleSignal,
    has_window: bool,
) -> Transition {
    use LifecycleSignal as Signal;
    use LifecycleState as State;

    if state == State::Terminated {
        return Transition::Ignore;
    }

    match (signal, state) {
        (Signal::Ready, State::NotReady) => Transition::CreateWindow,
        (Signal::WindowClosed, State::WindowOpen) => Transition::ForgetWindow,
        (Signal::Activate, State::ReadyNoWindow | State::WindowClosed) if !has_window => {
            Transition::CreateWindow
        }
        (Signal::AllWindowsClosed, State::Quitting) => Transition::Ignore,
        (Signal::AllWindowsClosed, _) => Transition::Quit,
        (Signal::WillQuit, _) => Transition::Terminate,
        (Signal::EscapePressed, State::WindowOpen) if has_window => Transition::ExitFullscreen,
        _ => Transition::Ignore,
    }
}

/// Owns the single kiosk window slot and drives it from lifecycle signals.
pub(crate) struct KioskLifecycle<H: KioskHost> {
    host: H,
    settings: WindowSettings,
    state: LifecycleState,
    window: Option<H::Window>,
    sleep_blocker: Option<H::SleepBlocker>,
    escape_registered: bool,
}

impl<H: KioskHost> KioskLifecycle<H> {
    pub(crate) fn new(host: H, settings: WindowSettings) -> Self {
        Self {
            host,
            settings,
            state: LifecycleState::NotReady,
            window: None,
            sleep_blocker: None,
            escape_registered: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> LifecycleState {
        self.state
    }

    pub(crate) fn has_window(&self) -> bool {
        self.window.is_some()
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }

    /// Applies one signal. Only a failed window creation on `Ready` is
    /// returned as an error; everything else is logged.
    pub(crate) fn handle_signal<F>(
        &mut self,
        signal: LifecycleSignal,
        log: F,
    ) -> Result<LifecycleState, String>
    where
        F: Fn(&str),
    {
        match plan_transition(self.state, signal, self.has_window()) {
            Transition::Ignore => {
                if self.state == LifecycleState::Terminated {
                    log(&format!("{signal:?} ignored after termination"));
                }
            }
            Transition::CreateWindow => {
                if signal == LifecycleSignal::Activate {
                    log("activate");
                } else {
                    self.state = LifecycleState::ReadyNoWindow;
                }
                match self.open_window(&log) {
                    Ok(()) => {}
                    Err(error) if signal == LifecycleSignal::Ready => return Err(error),
                    Err(error) => log(&format!("failed to recreate window on activate: {error}")),
                }
            }
            Transition::ForgetWindow => {
                self.window = None;
                self.state = LifecycleState::WindowClosed;
                log("main window closed");
            }
            Transition::ExitFullscreen => {
                if let Some(window) = &self.window {
                    if let Err(error) = window.set_fullscreen(false) {
                        log(&format!("failed to leave fullscreen on Escape: {error}"));
                    }
                }
            }
            Transition::Quit => {
                self.window = None;
                self.state = LifecycleState::Quitting;
                log("all windows closed, quitting");
                self.host.quit();
            }
            Transition::Terminate => {
                if let Err(error) = self.host.unregister_shortcuts() {
                    log(&format!("failed to unregister global shortcuts: {error}"));
                }
                self.escape_registered = false;
                if self.sleep_blocker.take().is_some() {
                    log("display sleep inhibitor released");
                }
                self.window = None;
                self.state = LifecycleState::Terminated;
            }
        }

        Ok(self.state)
    }

    fn open_window<F>(&mut self, log: F) -> Result<(), String>
    where
        F: Fn(&str),
    {
        log("Create Window");
        log(&format!("window settings: {}", self.settings.to_log_json()));

        let window = self.host.create_window(&self.settings)?;

        if self.settings.show_dev_tools {
            window.open_devtools();
        }

        if self.settings.prevent_screensaver && self.sleep_blocker.is_none() {
            match self.host.block_display_sleep() {
                Ok(blocker) => {
                    self.sleep_blocker = Some(blocker);
                    log("prevent screensaver: true");
                }
                Err(error) => log(&format!("prevent screensaver: false ({error})")),
            }
        }

        if !self.escape_registered {
            match self.host.register_escape_shortcut() {
                Ok(()) => {
                    self.escape_registered = true;
                    log("Escape is registered: true");
                }
                Err(error) => log(&format!("Escape is registered: false ({error})")),
            }
        }

        self.window = Some(window);
        self.state = LifecycleState::WindowOpen;
        Ok(())
    }
}
