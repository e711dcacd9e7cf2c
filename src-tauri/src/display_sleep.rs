use std::{
    sync::mpsc::{self, Sender},
    thread::{self, JoinHandle},
};

use crate::{APP_REVERSE_DOMAIN, DISPLAY_SLEEP_REASON, MAIN_WINDOW_TITLE};

/// Keeps the display awake until dropped.
///
/// The OS assertion lives on a dedicated thread so the handle itself stays
/// `Send` and can sit in Tauri managed state.
#[derive(Debug)]
pub(crate) struct DisplaySleepBlocker {
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl DisplaySleepBlocker {
    pub(crate) fn start() -> Result<Self, String> {
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let worker = thread::Builder::new()
            .name("display-sleep-blocker".to_string())
            .spawn(move || {
                let awake = match keepawake::Builder::default()
                    .display(true)
                    .reason(DISPLAY_SLEEP_REASON)
                    .app_name(MAIN_WINDOW_TITLE)
                    .app_reverse_domain(APP_REVERSE_DOMAIN)
                    .create()
                {
                    Ok(awake) => awake,
                    Err(error) => {
                        let _ = ready_tx.send(Err(format!(
                            "Failed to inhibit display sleep: {error}"
                        )));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));
                // Blocks until the sender side is dropped.
                let _ = stop_rx.recv();
                drop(awake);
            })
            .map_err(|error| format!("Failed to spawn display sleep thread: {error}"))?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                stop_tx: Some(stop_tx),
                worker: Some(worker),
            }),
            Ok(Err(error)) => {
                let _ = worker.join();
                Err(error)
            }
            Err(_) => {
                let _ = worker.join();
                Err("Display sleep thread exited before reporting status.".to_string())
            }
        }
    }

    pub(crate) fn is_started(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }
}

impl Drop for DisplaySleepBlocker {
    fn drop(&mut self) {
        self.stop_tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
