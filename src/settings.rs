//! Resolution of the paths and display options aed works with.
//!
//! Each setting is taken from the first source that provides it:
//! 1. CLI flags (`--config`, `--colors-dir`, `--fonts-dir`, `--no-color`)
//! 2. Environment variables (`AED_CONFIG`, `AED_COLORS_DIR`, `AED_FONTS_DIR`,
//!    `NO_COLOR`)
//! 3. `$XDG_CONFIG_HOME/aed/aed.toml` (or `~/.config/aed/aed.toml`)
//! 4. Built-in defaults under `$XDG_CONFIG_HOME/alacritty/`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::EditError;

pub const ENV_CONFIG: &str = "AED_CONFIG";
pub const ENV_COLORS_DIR: &str = "AED_COLORS_DIR";
pub const ENV_FONTS_DIR: &str = "AED_FONTS_DIR";
pub const ENV_NO_COLOR: &str = "NO_COLOR";
const ENV_XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Alacritty configuration document that gets edited.
    pub config_path: PathBuf,
    /// Directory of color preset documents.
    pub colors_dir: PathBuf,
    /// Directory of font preset documents.
    pub fonts_dir: PathBuf,
    /// Whether CLI output uses ANSI styling.
    pub color: bool,
}

/// Values supplied on the command line; `None` defers to later sources.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_path: Option<PathBuf>,
    pub colors_dir: Option<PathBuf>,
    pub fonts_dir: Option<PathBuf>,
    pub no_color: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    #[serde(default)]
    paths: FilePaths,
    #[serde(default)]
    display: FileDisplay,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FilePaths {
    config: Option<String>,
    colors_dir: Option<String>,
    fonts_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileDisplay {
    color: Option<bool>,
}

/// Resolve settings from the real environment and filesystem.
pub fn resolve_settings(overrides: &SettingsOverrides) -> Result<Settings, EditError> {
    resolve_settings_from_sources(
        overrides,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        dirs::home_dir,
    )
}

fn resolve_settings_from_sources<FRead, FEnv, FHome>(
    overrides: &SettingsOverrides,
    read_file: FRead,
    env_lookup: FEnv,
    home_dir: FHome,
) -> Result<Settings, EditError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    let root = config_root(&env_lookup, &home_dir).ok_or_else(|| {
        EditError::Settings("unable to resolve a home or config directory".to_string())
    })?;
    let file = read_settings_file(&root.join("aed").join("aed.toml"), &read_file)?;
    let home = home_dir();
    let expand = |raw: String| expand_home(&raw, home.as_deref());
    let env_path = |name: &str| non_empty(env_lookup(name)).map(&expand);

    let alacritty_root = root.join("alacritty");
    let config_path = overrides
        .config_path
        .clone()
        .or_else(|| env_path(ENV_CONFIG))
        .or_else(|| file.paths.config.map(&expand))
        .unwrap_or_else(|| alacritty_root.join("alacritty.yml"));
    let colors_dir = overrides
        .colors_dir
        .clone()
        .or_else(|| env_path(ENV_COLORS_DIR))
        .or_else(|| file.paths.colors_dir.map(&expand))
        .unwrap_or_else(|| alacritty_root.join("colors"));
    let fonts_dir = overrides
        .fonts_dir
        .clone()
        .or_else(|| env_path(ENV_FONTS_DIR))
        .or_else(|| file.paths.fonts_dir.map(&expand))
        .unwrap_or_else(|| alacritty_root.join("fonts"));

    let color = if overrides.no_color || non_empty(env_lookup(ENV_NO_COLOR)).is_some() {
        false
    } else {
        file.display.color.unwrap_or(true)
    };

    let settings = Settings {
        config_path,
        colors_dir,
        fonts_dir,
        color,
    };
    debug!(?settings, "resolved settings");
    Ok(settings)
}

fn read_settings_file<FRead>(path: &Path, read_file: &FRead) -> Result<FileSettings, EditError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    match read_file(path) {
        Ok(text) => {
            debug!(path = %path.display(), "reading settings file");
            toml::from_str(&text)
                .map_err(|e| EditError::Settings(format!("{}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file");
            Ok(FileSettings::default())
        }
        Err(e) => Err(EditError::io(path, e)),
    }
}

fn config_root<FEnv, FHome>(env_lookup: &FEnv, home_dir: &FHome) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
    FHome: Fn() -> Option<PathBuf>,
{
    if let Some(path) = non_empty(env_lookup(ENV_XDG_CONFIG_HOME)) {
        return Some(PathBuf::from(path));
    }
    home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Expand a leading `~/` against the home directory.
fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    match (raw.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if raw == "~" => home.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(raw)),
        _ => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/tester"))
    }

    fn no_file(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_live_under_dot_config() {
        let s = resolve_settings_from_sources(&SettingsOverrides::default(), no_file, env(&[]), home)
            .expect("resolve");
        assert_eq!(
            s.config_path,
            PathBuf::from("/home/tester/.config/alacritty/alacritty.yml")
        );
        assert_eq!(s.colors_dir, PathBuf::from("/home/tester/.config/alacritty/colors"));
        assert_eq!(s.fonts_dir, PathBuf::from("/home/tester/.config/alacritty/fonts"));
        assert!(s.color);
    }

    #[test]
    fn xdg_config_home_moves_the_root() {
        let s = resolve_settings_from_sources(
            &SettingsOverrides::default(),
            no_file,
            env(&[("XDG_CONFIG_HOME", "/xdg")]),
            home,
        )
        .expect("resolve");
        assert_eq!(s.config_path, PathBuf::from("/xdg/alacritty/alacritty.yml"));
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let read = |path: &Path| {
            assert_eq!(path, Path::new("/home/tester/.config/aed/aed.toml"));
            Ok("[paths]\nconfig = \"~/dotfiles/alacritty.yml\"\ncolors_dir = \"/themes\"\n\n[display]\ncolor = false\n".to_string())
        };
        let s = resolve_settings_from_sources(&SettingsOverrides::default(), read, env(&[]), home)
            .expect("resolve");
        assert_eq!(
            s.config_path,
            PathBuf::from("/home/tester/dotfiles/alacritty.yml")
        );
        assert_eq!(s.colors_dir, PathBuf::from("/themes"));
        assert_eq!(s.fonts_dir, PathBuf::from("/home/tester/.config/alacritty/fonts"));
        assert!(!s.color);
    }

    #[test]
    fn env_beats_file_and_cli_beats_env() {
        let read = |_: &Path| Ok("[paths]\nconfig = \"/from/file.yml\"\n".to_string());
        let vars = env(&[("AED_CONFIG", "/from/env.yml"), ("AED_FONTS_DIR", "~/fonts")]);

        let s = resolve_settings_from_sources(&SettingsOverrides::default(), read, &vars, home)
            .expect("resolve");
        assert_eq!(s.config_path, PathBuf::from("/from/env.yml"));
        assert_eq!(s.fonts_dir, PathBuf::from("/home/tester/fonts"));

        let overrides = SettingsOverrides {
            config_path: Some(PathBuf::from("/from/cli.yml")),
            ..SettingsOverrides::default()
        };
        let s = resolve_settings_from_sources(&overrides, read, &vars, home).expect("resolve");
        assert_eq!(s.config_path, PathBuf::from("/from/cli.yml"));
    }

    #[test]
    fn no_color_sources_disable_color() {
        let s = resolve_settings_from_sources(
            &SettingsOverrides::default(),
            no_file,
            env(&[("NO_COLOR", "1")]),
            home,
        )
        .expect("resolve");
        assert!(!s.color);

        let overrides = SettingsOverrides {
            no_color: true,
            ..SettingsOverrides::default()
        };
        let s = resolve_settings_from_sources(&overrides, no_file, env(&[]), home).expect("resolve");
        assert!(!s.color);
    }

    #[test]
    fn invalid_settings_file_is_reported() {
        let read = |_: &Path| Ok("[paths]\nconfg = \"typo\"\n".to_string());
        let err = resolve_settings_from_sources(&SettingsOverrides::default(), read, env(&[]), home)
            .unwrap_err();
        assert!(matches!(err, EditError::Settings(_)), "got: {err}");
        assert!(err.to_string().contains("aed.toml"));
    }

    #[test]
    fn unreadable_settings_file_is_io_error() {
        let read = |_: &Path| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = resolve_settings_from_sources(&SettingsOverrides::default(), read, env(&[]), home)
            .unwrap_err();
        assert!(matches!(err, EditError::Io { .. }));
    }

    #[test]
    fn expand_home_only_touches_tilde_prefix() {
        let home = Path::new("/h");
        assert_eq!(expand_home("~/a", Some(home)), PathBuf::from("/h/a"));
        assert_eq!(expand_home("~", Some(home)), PathBuf::from("/h"));
        assert_eq!(expand_home("/abs/~/x", Some(home)), PathBuf::from("/abs/~/x"));
        assert_eq!(expand_home("~/a", None), PathBuf::from("~/a"));
    }
}
