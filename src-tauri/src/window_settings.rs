use serde::Serialize;
use serde_json::Value;

use crate::{
    booth_config::{BoothConfig, InitConfig},
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WINDOW_BACKGROUND_COLOR,
};

/// Everything needed to build the kiosk window, derived once from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WindowSettings {
    pub(crate) fullscreen: bool,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) background_color: &'static str,
    #[serde(skip)]
    pub(crate) show_dev_tools: bool,
    #[serde(skip)]
    pub(crate) prevent_screensaver: bool,
}

impl WindowSettings {
    pub(crate) fn from_config<F>(config: &BoothConfig, log: F) -> Self
    where
        F: Fn(&str),
    {
        let (width, height) = resolve_window_dimensions(&config.init(), &log);
        Self {
            fullscreen: config.fullscreen(),
            width,
            height,
            background_color: WINDOW_BACKGROUND_COLOR,
            show_dev_tools: config.show_dev_tools(),
            prevent_screensaver: config.prevent_screensaver(),
        }
    }

    pub(crate) fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|error| format!("<unserializable: {error}>"))
    }
}

/// Accepts a JSON number or numeric string holding a positive integer that
/// fits in `u32`.
pub(crate) fn parse_dimension(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() || number < 1.0 || number.fract() != 0.0 {
        return None;
    }
    if number > f64::from(u32::MAX) {
        return None;
    }
    Some(number as u32)
}

pub(crate) fn resolve_window_dimensions<F>(init: &InitConfig, log: F) -> (u32, u32)
where
    F: Fn(&str),
{
    let fallback = (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
    match (init.width.as_ref(), init.height.as_ref()) {
        (None, None) => {
            log(&format!(
                "width and height not configured, using {}x{}",
                fallback.0, fallback.1
            ));
            fallback
        }
        (width, height) => {
            match (width.and_then(parse_dimension), height.and_then(parse_dimension)) {
                (Some(width), Some(height)) => (width, height),
                _ => {
                    log(&format!(
                        "loading width and height from config failed (width={}, height={}), fallback to {}x{}",
                        describe_raw(width),
                        describe_raw(height),
                        fallback.0,
                        fallback.1
                    ));
                    fallback
                }
            }
        }
    }
}

fn describe_raw(value: Option<&Value>) -> String {
    value.map_or_else(|| "<missing>".to_string(), Value::to_string)
}

pub(crate) fn parse_hex_color(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::booth_config::parse_booth_config;

    fn settings_for(raw: &str) -> WindowSettings {
        let config = parse_booth_config(raw).expect("config should parse");
        WindowSettings::from_config(&config, |_| {})
    }

    #[test]
    fn empty_config_uses_documented_defaults() {
        let settings = settings_for("{}");
        assert_eq!(
            settings,
            WindowSettings {
                fullscreen: true,
                width: 800,
                height: 600,
                background_color: "#000000",
                show_dev_tools: false,
                prevent_screensaver: false,
            }
        );
    }

    #[test]
    fn string_dimensions_and_windowed_mode_are_honoured() {
        let settings =
            settings_for(r#"{"init":{"width":"640","height":"480","fullscreen":false}}"#);
        assert_eq!((settings.width, settings.height), (640, 480));
        assert!(!settings.fullscreen);
    }

    #[test]
    fn non_numeric_dimensions_fall_back_and_log() {
        let logs = RefCell::new(Vec::new());
        let config = parse_booth_config(r#"{"init":{"width":"wide","height":"tall"}}"#)
            .expect("config should parse");
        let settings =
            WindowSettings::from_config(&config, |line| logs.borrow_mut().push(line.to_string()));

        assert_eq!((settings.width, settings.height), (800, 600));
        assert!(logs
            .borrow()
            .iter()
            .any(|line| line.contains("fallback to 800x600")));
    }

    #[test]
    fn one_invalid_dimension_resets_both() {
        let settings = settings_for(r#"{"init":{"width":1280,"height":-1}}"#);
        assert_eq!((settings.width, settings.height), (800, 600));

        let settings = settings_for(r#"{"init":{"width":1280}}"#);
        assert_eq!((settings.width, settings.height), (800, 600));
    }

    #[test]
    fn parse_dimension_rejects_non_positive_or_fractional_values() {
        assert_eq!(parse_dimension(&json!(1920)), Some(1920));
        assert_eq!(parse_dimension(&json!(1080.0)), Some(1080));
        assert_eq!(parse_dimension(&json!(" 720 ")), Some(720));
        assert_eq!(parse_dimension(&json!(0)), None);
        assert_eq!(parse_dimension(&json!(-800)), None);
        assert_eq!(parse_dimension(&json!(640.5)), None);
        assert_eq!(parse_dimension(&json!("640px")), None);
        assert_eq!(parse_dimension(&json!("NaN")), None);
        assert_eq!(parse_dimension(&json!("inf")), None);
        assert_eq!(parse_dimension(&json!(true)), None);
        assert_eq!(parse_dimension(&json!(null)), None);
        assert_eq!(parse_dimension(&json!(5_000_000_000_u64)), None);
    }

    #[test]
    fn window_settings_log_json_omits_internal_flags() {
        let settings = settings_for(r#"{"init":{"showDevTools":true}}"#);
        assert_eq!(
            settings.to_log_json(),
            r##"{"fullscreen":true,"width":800,"height":600,"backgroundColor":"#000000"}"##
        );
    }

    #[test]
    fn parse_hex_color_reads_rgb_triplets() {
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex_color("000000"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }
}
