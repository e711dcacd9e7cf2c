pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Photo Booth";
pub(crate) const ENTRY_DOCUMENT: &str = "booth.html";
pub(crate) const WINDOW_BACKGROUND_COLOR: &str = "#000000";

pub(crate) const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub(crate) const DEFAULT_WINDOW_HEIGHT: u32 = 600;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "config.json";
pub(crate) const OVERRIDE_CONFIG_FILE: &str = "my.config.json";

pub(crate) const CONFIG_PATH_ENV: &str = "PHOTO_BOOTH_CONFIG";
pub(crate) const ROOT_DIR_ENV: &str = "PHOTO_BOOTH_ROOT";
pub(crate) const LOG_PATH_ENV: &str = "PHOTO_BOOTH_LOG_PATH";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const TOGGLE_DEVTOOLS_EVENT: &str = "toggle-devTools";
pub(crate) const DISPLAY_SLEEP_REASON: &str = "Photo booth kiosk is running";
pub(crate) const APP_REVERSE_DOMAIN: &str = "org.photobooth.desktop";
