use std::env;

use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_startup_log,
    booth_config::load_booth_config,
    config_path::{resolve_config_candidates, select_config_path},
    kiosk_host::TauriKioskHost,
    lifecycle::{KioskLifecycle, LifecycleSignal},
    window_settings::WindowSettings,
    KioskState, CONFIG_PATH_ENV,
};

/// Loads the booth config, installs the lifecycle and sends it `Ready`.
/// Any error here is fatal to startup.
pub(crate) fn install_kiosk_lifecycle(app_handle: &AppHandle) -> Result<(), String> {
    let resource_dir = app_handle
        .path()
        .resource_dir()
        .map_err(|error| format!("Failed to resolve resource directory: {error}"))?;
    let override_env = env::var(CONFIG_PATH_ENV).ok();
    let candidates = resolve_config_candidates(&resource_dir, override_env.as_deref());
    let (config_path, source) = select_config_path(&candidates);
    append_startup_log(&format!(
        "using {} config: {}",
        source.as_str(),
        config_path.display()
    ));

    let config = load_booth_config(config_path)?;
    append_startup_log(&format!(
        "Register Listeners with Fullscreen config: {}",
        config.fullscreen()
    ));

    let settings = WindowSettings::from_config(&config, append_startup_log);
    let lifecycle = KioskLifecycle::new(TauriKioskHost::new(app_handle.clone()), settings);
    if !app_handle.manage(KioskState::new(lifecycle)) {
        return Err("Kiosk lifecycle is already installed.".to_string());
    }

    let state = app_handle.state::<KioskState>();
    state.dispatch(LifecycleSignal::Ready, append_desktop_log)?;
    Ok(())
}
