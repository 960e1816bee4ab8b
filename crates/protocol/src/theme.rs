use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Theme modes the runtime can be switched to.
///
/// `Web`, `Docket` and `ShadcnDark` name semantic modes of the generated
/// tables. `Light` and `Dark` are legacy aliases that map onto one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "docket")]
    Docket,
    #[serde(rename = "shadcn-dark")]
    ShadcnDark,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl ThemeMode {
    pub const ALL: [Self; 5] = [
        Self::Web,
        Self::Docket,
        Self::ShadcnDark,
        Self::Light,
        Self::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Docket => "docket",
            Self::ShadcnDark => "shadcn-dark",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_alias(self) -> bool {
        matches!(self, Self::Light | Self::Dark)
    }

    /// Class the styling layer puts on the document root for this mode.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Self::Dark | Self::ShadcnDark => Some("dark"),
            Self::Web => Some("mode-web"),
            Self::Docket | Self::Light => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode {0:?}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownThemeMode(s.to_string()))
    }
}

/// Keys of the flattened per-mode color map handed to the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalKey {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
    Chart1,
    Chart2,
    Chart3,
    Chart4,
    Chart5,
}

impl CanonicalKey {
    pub const ALL: [Self; 24] = [
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Popover,
        Self::PopoverForeground,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Destructive,
        Self::DestructiveForeground,
        Self::Border,
        Self::Input,
        Self::Ring,
        Self::Chart1,
        Self::Chart2,
        Self::Chart3,
        Self::Chart4,
        Self::Chart5,
    ];

    /// camelCase name, as used by the component layer.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "cardForeground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popoverForeground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primaryForeground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondaryForeground",
            Self::Muted => "muted",
            Self::MutedForeground => "mutedForeground",
            Self::Accent => "accent",
            Self::AccentForeground => "accentForeground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructiveForeground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
            Self::Chart1 => "chart1",
            Self::Chart2 => "chart2",
            Self::Chart3 => "chart3",
            Self::Chart4 => "chart4",
            Self::Chart5 => "chart5",
        }
    }

    /// Name of the CSS custom property, without the leading `--`.
    pub fn css_name(self) -> String {
        kebab_case(self.name())
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn kebab_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for c in camel.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
