use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An HSL color quantized to whole degrees and percents.
///
/// Serialized as the CSS-variable friendly string `"H S% L%"` (no unit on
/// hue, single spaces), which is also its `Display` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Hsl {
    /// Hue in degrees, `0..360`.
    pub h: u16,
    /// Saturation in percent, `0..=100`.
    pub s: u8,
    /// Lightness in percent, `0..=100`.
    pub l: u8,
}

impl Hsl {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(0, 0, 100);

    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HslParseError {
    #[error("expected three components in {0:?}")]
    Shape(String),
    #[error("invalid hue {0:?}")]
    Hue(String),
    #[error("invalid percentage {0:?}")]
    Percent(String),
}

impl FromStr for Hsl {
    type Err = HslParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [h, sat, light] = parts[..] else {
            return Err(HslParseError::Shape(s.to_string()));
        };

        let h: u16 = h
            .parse()
            .ok()
            .filter(|h| *h < 360)
            .ok_or_else(|| HslParseError::Hue(h.to_string()))?;

        Ok(Self::new(h, parse_percent(sat)?, parse_percent(light)?))
    }
}

fn parse_percent(raw: &str) -> Result<u8, HslParseError> {
    raw.strip_suffix('%')
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| *n <= 100)
        .ok_or_else(|| HslParseError::Percent(raw.to_string()))
}

impl From<Hsl> for String {
    fn from(hsl: Hsl) -> Self {
        hsl.to_string()
    }
}

impl TryFrom<String> for Hsl {
    type Error = HslParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_css_triple() {
        assert_eq!(Hsl::new(222, 47, 11).to_string(), "222 47% 11%");
        assert_eq!(Hsl::BLACK.to_string(), "0 0% 0%");
        assert_eq!(Hsl::WHITE.to_string(), "0 0% 100%");
    }

    #[test]
    fn parses_display_form() {
        assert_eq!("215 16% 47%".parse::<Hsl>(), Ok(Hsl::new(215, 16, 47)));
        assert_eq!("0 0% 100%".parse::<Hsl>(), Ok(Hsl::WHITE));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(matches!("360 0% 0%".parse::<Hsl>(), Err(HslParseError::Hue(_))));
        assert!(matches!(
            "0 101% 0%".parse::<Hsl>(),
            Err(HslParseError::Percent(_))
        ));
        assert!(matches!("0 50 50%".parse::<Hsl>(), Err(HslParseError::Percent(_))));
        assert!(matches!("0 0%".parse::<Hsl>(), Err(HslParseError::Shape(_))));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Hsl::new(25, 95, 53)).unwrap();
        assert_eq!(json, r#""25 95% 53%""#);
        let back: Hsl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Hsl::new(25, 95, 53));
    }
}
