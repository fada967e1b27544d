// SPDX-License-Identifier: MPL-2.0
//! Location of the Yoombaa config directory.
//!
//! `settings.toml` and the preference store share this directory. The first
//! source that yields a path wins:
//!
//! 1. an explicit path passed by the caller (tests, embedding hosts)
//! 2. the `--config-dir` flag, recorded once via [`init_cli_override`]
//! 3. the `YOOMBAA_CONFIG_DIR` environment variable, if non-empty
//! 4. the platform config dir from `dirs`, plus `Yoombaa`

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "Yoombaa";

/// Environment variable that relocates the config directory.
pub const ENV_CONFIG_DIR: &str = "YOOMBAA_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Where a resolved config directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirSource {
    Explicit,
    CommandLine,
    Environment,
    Platform,
}

impl fmt::Display for DirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DirSource::Explicit => "explicit",
            DirSource::CommandLine => "--config-dir",
            DirSource::Environment => ENV_CONFIG_DIR,
            DirSource::Platform => "platform default",
        })
    }
}

/// Records `--config-dir` for the rest of the process.
///
/// Returns `false` if an override was already recorded; the first one stays.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

/// Resolves the config directory and reports which source supplied it.
///
/// `None` only when no source applies and the platform has no config dir.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<(PathBuf, DirSource)> {
    if let Some(dir) = explicit {
        return Some((dir, DirSource::Explicit));
    }
    if let Some(dir) = CLI_CONFIG_DIR.get().cloned().flatten() {
        return Some((dir, DirSource::CommandLine));
    }
    match std::env::var_os(ENV_CONFIG_DIR) {
        Some(dir) if !dir.is_empty() => return Some((PathBuf::from(dir), DirSource::Environment)),
        _ => {}
    }
    dirs::config_dir().map(|dir| (dir.join(APP_NAME), DirSource::Platform))
}

/// Config directory from the regular resolution order.
///
/// Typically `~/.config/Yoombaa` on Linux,
/// `~/Library/Application Support/Yoombaa` on macOS and
/// `%APPDATA%\Yoombaa` on Windows.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory, preferring `override_path` over every other source.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let (dir, source) = resolve_config_dir(override_path)?;
    tracing::trace!(dir = %dir.display(), %source, "config directory resolved");
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The environment is shared by every test thread.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<R>(value: Option<&str>, f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        match value {
            Some(v) => std::env::set_var(ENV_CONFIG_DIR, v),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
        let result = f();
        std::env::remove_var(ENV_CONFIG_DIR);
        result
    }

    #[test]
    fn explicit_path_beats_environment() {
        let resolved = with_env(Some("/from/env"), || {
            resolve_config_dir(Some(PathBuf::from("/from/caller")))
        });
        assert_eq!(
            resolved,
            Some((PathBuf::from("/from/caller"), DirSource::Explicit))
        );
    }

    #[test]
    fn environment_relocates_config_dir() {
        let resolved = with_env(Some("/srv/yoombaa"), || resolve_config_dir(None));
        assert_eq!(
            resolved,
            Some((PathBuf::from("/srv/yoombaa"), DirSource::Environment))
        );
    }

    #[test]
    fn blank_environment_is_ignored() {
        let resolved = with_env(Some(""), || resolve_config_dir(None));
        if let Some((dir, source)) = resolved {
            assert_eq!(source, DirSource::Platform);
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn platform_default_is_app_specific() {
        if let Some(dir) = with_env(None, get_app_config_dir) {
            assert!(dir.ends_with(APP_NAME), "unexpected dir {}", dir.display());
        }
    }

    #[test]
    fn sources_display_their_origin() {
        assert_eq!(DirSource::Environment.to_string(), "YOOMBAA_CONFIG_DIR");
        assert_eq!(DirSource::CommandLine.to_string(), "--config-dir");
    }
}
