use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct BoothConfig {
    #[serde(default)]
    init: Option<InitConfig>,
}

/// The `init` block of `config.json`. Every field is optional; defaults are
/// applied by the accessors below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitConfig {
    pub(crate) show_dev_tools: Option<bool>,
    pub(crate) fullscreen: Option<bool>,
    pub(crate) width: Option<Value>,
    pub(crate) height: Option<Value>,
    pub(crate) prevent_screensaver: Option<bool>,
}

impl BoothConfig {
    pub(crate) fn init(&self) -> InitConfig {
        self.init.clone().unwrap_or_default()
    }

    pub(crate) fn show_dev_tools(&self) -> bool {
        self.init.as_ref().and_then(|init| init.show_dev_tools).unwrap_or(false)
    }

    pub(crate) fn fullscreen(&self) -> bool {
        self.init.as_ref().and_then(|init| init.fullscreen).unwrap_or(true)
    }

    pub(crate) fn prevent_screensaver(&self) -> bool {
        self.init
            .as_ref()
            .and_then(|init| init.prevent_screensaver)
            .unwrap_or(false)
    }
}

pub(crate) fn parse_booth_config(raw: &str) -> Result<BoothConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

pub(crate) fn load_booth_config(path: &Path) -> Result<BoothConfig, String> {
    let raw = fs::read_to_string(path).map_err(|error| {
        format!(
            "Failed to read booth config {}: {}",
            path.display(),
            error
        )
    })?;
    parse_booth_config(&raw).map_err(|error| {
        format!(
            "Failed to parse booth config {}: {}",
            path.display(),
            error
        )
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn parse_booth_config_treats_missing_init_as_defaults() {
        for raw in ["{}", r#"{"init": null}"#, r#"{"init": {}}"#] {
            let config = parse_booth_config(raw).expect("config should parse");
            assert!(!config.show_dev_tools());
            assert!(config.fullscreen());
            assert!(!config.prevent_screensaver());
            assert!(config.init().width.is_none());
        }
    }

    #[test]
    fn parse_booth_config_reads_camel_case_fields_and_ignores_unknown() {
        let config = parse_booth_config(
            r#"{
                "init": {
                    "showDevTools": true,
                    "fullscreen": false,
                    "width": 1024,
                    "height": "768",
                    "preventScreensaver": true,
                    "printer": "ignored"
                },
                "camera": {}
            }"#,
        )
        .expect("config should parse");

        assert!(config.show_dev_tools());
        assert!(!config.fullscreen());
        assert!(config.prevent_screensaver());
        assert_eq!(config.init().width, Some(Value::from(1024)));
        assert_eq!(config.init().height, Some(Value::from("768")));
    }

    #[test]
    fn load_booth_config_reports_path_on_invalid_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write config");

        let error = load_booth_config(&path).expect_err("invalid json should fail");
        assert!(error.starts_with("Failed to parse booth config"));
        assert!(error.contains(&path.display().to_string()));
    }

    #[test]
    fn load_booth_config_reports_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let error = load_booth_config(&dir.path().join("absent.json"))
            .expect_err("missing file should fail");
        assert!(error.starts_with("Failed to read booth config"));
    }
}
