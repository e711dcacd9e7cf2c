use tauri::AppHandle;

use crate::{
    append_desktop_log, append_startup_log, devtools_bridge, escape_shortcut, kiosk_startup,
    lifecycle::LifecycleSignal, lifecycle_events, logging, runtime_paths, DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE)
            .display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, argv, _cwd| {
            append_desktop_log(&format!(
                "second instance launch detected (argv={argv:?}), treating as activate"
            ));
            lifecycle_events::dispatch_signal(app_handle, LifecycleSignal::Activate);
        }))
        .plugin(escape_shortcut::build_plugin())
        .enable_macos_default_menu(false)
        .on_window_event(lifecycle_events::handle_window_event)
        .setup(|app| {
            let app_handle = app.handle().clone();
            devtools_bridge::register_toggle_devtools_listener(&app_handle);

            if let Err(error) = kiosk_startup::install_kiosk_lifecycle(&app_handle) {
                show_startup_error(&app_handle, &error);
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| lifecycle_events::handle_run_event(app_handle, &event));
}

fn show_startup_error(app_handle: &AppHandle, message: &str) {
    append_startup_log(&format!("photo booth startup failed: {message}"));
    app_handle.exit(1);
}
