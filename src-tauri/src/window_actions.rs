use tauri::{window::Color, AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{
    window_settings::{parse_hex_color, WindowSettings},
    ENTRY_DOCUMENT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE,
};

pub fn build_main_window(
    app_handle: &AppHandle,
    settings: &WindowSettings,
) -> Result<WebviewWindow, String> {
    let (red, green, blue) = parse_hex_color(settings.background_color).ok_or_else(|| {
        format!(
            "Invalid window background color: {}",
            settings.background_color
        )
    })?;

    WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(ENTRY_DOCUMENT.into()),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(f64::from(settings.width), f64::from(settings.height))
    .fullscreen(settings.fullscreen)
    .background_color(Color(red, green, blue, 255))
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))
}

pub fn set_main_window_fullscreen(window: &WebviewWindow, fullscreen: bool) -> Result<(), String> {
    window
        .set_fullscreen(fullscreen)
        .map_err(|error| format!("Failed to set fullscreen={fullscreen}: {error}"))
}

pub fn open_main_window_devtools<F>(window: &WebviewWindow, log: F)
where
    F: Fn(&str),
{
    window.open_devtools();
    log(&format!(
        "devtools opened for window '{}': {}",
        window.label(),
        window.is_devtools_open()
    ));
}
