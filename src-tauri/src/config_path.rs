use std::path::{Path, PathBuf};

use crate::{DEFAULT_CONFIG_FILE, OVERRIDE_CONFIG_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfigCandidates {
    pub(crate) override_path: PathBuf,
    pub(crate) default_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    Own,
    Default,
}

impl ConfigSource {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ConfigSource::Own => "own",
            ConfigSource::Default => "default",
        }
    }
}

/// Picks the bundled `config.json` and the user override next to it, unless
/// `override_env` names another override file.
pub(crate) fn resolve_config_candidates(
    resource_dir: &Path,
    override_env: Option<&str>,
) -> ConfigCandidates {
    let override_path = override_env
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| resource_dir.join(OVERRIDE_CONFIG_FILE));

    ConfigCandidates {
        override_path,
        default_path: resource_dir.join(DEFAULT_CONFIG_FILE),
    }
}

pub(crate) fn select_config_path(candidates: &ConfigCandidates) -> (&Path, ConfigSource) {
    if candidates.override_path.is_file() {
        (candidates.override_path.as_path(), ConfigSource::Own)
    } else {
        (candidates.default_path.as_path(), ConfigSource::Default)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn select_config_path_prefers_existing_override() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{}").expect("write default config");
        fs::write(dir.path().join(OVERRIDE_CONFIG_FILE), "{}").expect("write own config");

        let candidates = resolve_config_candidates(dir.path(), None);
        let (path, source) = select_config_path(&candidates);

        assert_eq!(path, dir.path().join(OVERRIDE_CONFIG_FILE));
        assert_eq!(source, ConfigSource::Own);
    }

    #[test]
    fn select_config_path_falls_back_to_default_without_override() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{}").expect("write default config");

        let candidates = resolve_config_candidates(dir.path(), None);
        let (path, source) = select_config_path(&candidates);

        assert_eq!(path, dir.path().join(DEFAULT_CONFIG_FILE));
        assert_eq!(source, ConfigSource::Default);
    }

    #[test]
    fn select_config_path_ignores_override_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join(OVERRIDE_CONFIG_FILE)).expect("create dir");

        let candidates = resolve_config_candidates(dir.path(), None);
        assert_eq!(select_config_path(&candidates).1, ConfigSource::Default);
    }

    #[test]
    fn resolve_config_candidates_uses_env_override_when_set() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let custom = dir.path().join("kiosk.json");

        let candidates = resolve_config_candidates(dir.path(), custom.to_str());
        assert_eq!(candidates.override_path, custom);
        assert_eq!(candidates.default_path, dir.path().join(DEFAULT_CONFIG_FILE));

        let blank = resolve_config_candidates(dir.path(), Some("  "));
        assert_eq!(blank.override_path, dir.path().join(OVERRIDE_CONFIG_FILE));
    }
}
