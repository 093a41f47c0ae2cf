//! CLI argument parsing via clap.

use std::path::PathBuf;

use aed::settings::SettingsOverrides;
use clap::Parser;

use crate::app::oneshot::Action;

/// Edit Alacritty's colors, font, and opacity. Without action flags, opens
/// a full-screen editor.
#[derive(Debug, Parser)]
#[command(name = "aed", version, long_version = aed::build_info::LONG_VERSION)]
pub struct Args {
    /// Apply the `colors` section of a YAML file.
    #[arg(long = "colors", value_name = "PATH", conflicts_with = "color_preset")]
    pub colors: Option<PathBuf>,

    /// Apply a color preset from the colors directory by name.
    #[arg(long = "color-preset", value_name = "NAME")]
    pub color_preset: Option<String>,

    /// Apply the `font` section of a YAML file.
    #[arg(long = "font", value_name = "PATH", conflicts_with = "font_preset")]
    pub font: Option<PathBuf>,

    /// Apply a font preset from the fonts directory by name.
    #[arg(long = "font-preset", value_name = "NAME")]
    pub font_preset: Option<String>,

    /// Set window opacity (0.0 to 1.0, rounded to two decimals).
    #[arg(long = "opacity", value_name = "FLOAT", allow_negative_numbers = true)]
    pub opacity: Option<f64>,

    /// Print available presets and the current opacity, then exit.
    #[arg(long = "list")]
    pub list: bool,

    /// Path to alacritty.yml (default: ~/.config/alacritty/alacritty.yml).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory of color presets (default: ~/.config/alacritty/colors).
    #[arg(long = "colors-dir", value_name = "DIR")]
    pub colors_dir: Option<PathBuf>,

    /// Directory of font presets (default: ~/.config/alacritty/fonts).
    #[arg(long = "fonts-dir", value_name = "DIR")]
    pub fonts_dir: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            config_path: self.config.clone(),
            colors_dir: self.colors_dir.clone(),
            fonts_dir: self.fonts_dir.clone(),
            no_color: self.no_color,
        }
    }

    /// Requested edits in processing order: colors, font, opacity.
    pub(crate) fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(path) = &self.colors {
            actions.push(Action::ColorsFile(path.clone()));
        }
        if let Some(name) = &self.color_preset {
            actions.push(Action::ColorPreset(name.clone()));
        }
        if let Some(path) = &self.font {
            actions.push(Action::FontFile(path.clone()));
        }
        if let Some(name) = &self.font_preset {
            actions.push(Action::FontPreset(name.clone()));
        }
        if let Some(value) = self.opacity {
            actions.push(Action::Opacity(value));
        }
        actions
    }

    /// True when no action or listing flag was given.
    pub fn is_interactive(&self) -> bool {
        !self.list && self.actions().is_empty()
    }
}
