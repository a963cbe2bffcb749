use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Named colour scheme. Selected through [`crate::config::Config`] and handed
/// to renderers explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreset::Light => "light",
            ThemePreset::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemePreset::Light => Palette::LIGHT,
            ThemePreset::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreset {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreset::Light),
            "dark" => Ok(ThemePreset::Dark),
            _ => Err(ValidationError::UnknownVariant {
                field: "theme",
                value: value.to_string(),
            }),
        }
    }
}

/// Hex colours (`#RRGGBB`) for one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub surface: &'static str,
    pub surface_variant: &'static str,
    pub background: &'static str,
    pub error: &'static str,
    pub on_primary: &'static str,
    pub on_secondary: &'static str,
    pub on_surface: &'static str,
    pub on_surface_variant: &'static str,
    pub outline: &'static str,
    /// Accent used for the assistant entry points.
    pub accent: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: "#8B5CF6",
        secondary: "#06B6D4",
        tertiary: "#10B981",
        surface: "#FFFFFF",
        surface_variant: "#F3F4F6",
        background: "#F9FAFB",
        error: "#EF4444",
        on_primary: "#FFFFFF",
        on_secondary: "#FFFFFF",
        on_surface: "#111827",
        on_surface_variant: "#6B7280",
        outline: "#E5E7EB",
        accent: "#F59E0B",
    };

    pub const DARK: Palette = Palette {
        primary: "#8B5CF6",
        secondary: "#06B6D4",
        tertiary: "#10B981",
        surface: "#1F2937",
        surface_variant: "#374151",
        background: "#111827",
        error: "#EF4444",
        on_primary: "#FFFFFF",
        on_secondary: "#FFFFFF",
        on_surface: "#F9FAFB",
        on_surface_variant: "#D1D5DB",
        outline: "#4B5563",
        accent: "#F59E0B",
    };
}

/// Splits a `#RRGGBB` colour into its channels.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
