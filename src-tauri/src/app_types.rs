use std::sync::Mutex;

use crate::{
    kiosk_host::TauriKioskHost,
    lifecycle::{KioskLifecycle, LifecycleSignal, LifecycleState},
};

pub(crate) struct KioskState {
    lifecycle: Mutex<KioskLifecycle<TauriKioskHost>>,
}

impl KioskState {
    pub(crate) fn new(lifecycle: KioskLifecycle<TauriKioskHost>) -> Self {
        Self {
            lifecycle: Mutex::new(lifecycle),
        }
    }

    pub(crate) fn dispatch<F>(&self, signal: LifecycleSignal, log: F) -> Result<LifecycleState, String>
    where
        F: Fn(&str),
    {
        let mut guard = self
            .lifecycle
            .lock()
            .map_err(|_| "Kiosk lifecycle lock poisoned.".to_string())?;
        guard.handle_signal(signal, log)
    }
}
