use figtok_protocol::Hsl;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected #rrggbb or #rrggbbaa, got {0:?}")]
    Length(String),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// Parse `#rrggbb`, `rrggbb` or `#rrggbbaa` into RGB channels. Alpha is ignored.
pub fn parse_hex(hex: &str) -> Result<[u8; 3], ColorError> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 && digits.len() != 8 {
        return Err(ColorError::Length(hex.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::Digits(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::Digits(hex.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Lower-case `#rrggbb` spelling of an RGB triple.
pub fn format_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Convert a hex color to its quantized HSL triple.
///
/// Step for step the classic RGB→HSL derivation, with the max channel checked
/// in `r`, `g`, `b` order.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    parse_hex(hex).map(rgb_to_hsl)
}

pub fn rgb_to_hsl([r, g, b]: [u8; 3]) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    // A hue just below a full turn rounds up to 360, which is 0.
    let hue = (h * 360.0).round() as u16 % 360;
    Hsl::new(hue, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
}

/// Inverse of [`rgb_to_hsl`], rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> [u8; 3] {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if s == 0.0 {
        let v = to_channel(l);
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let hue_to_channel = |t: f64| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        to_channel(v)
    };

    [
        hue_to_channel(h + 1.0 / 3.0),
        hue_to_channel(h),
        hue_to_channel(h - 1.0 / 3.0),
    ]
}

fn to_channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
