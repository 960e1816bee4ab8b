use crate::export::RawPalette;

const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";

/// Resolve a color reference such as `{neutral.950}` or `{white}` against the
/// raw palette.
///
/// Returns `None` for malformed references, unknown families and unknown
/// shades. `white` and `black` always resolve, falling back to the literal
/// colors when the palette does not define them.
pub fn resolve_color_reference<'a>(reference: &str, palette: &'a RawPalette) -> Option<&'a str> {
    let name = strip_braces(reference);

    match name {
        "white" => return Some(palette.simple("white").unwrap_or(WHITE)),
        "black" => return Some(palette.simple("black").unwrap_or(BLACK)),
        _ => {}
    }

    let (family, shade) = name.split_once('.')?;
    if family.is_empty() || shade.is_empty() {
        return None;
    }
    palette.shade(family, shade)
}

fn strip_braces(reference: &str) -> &str {
    let trimmed = reference.trim();
    trimmed
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(trimmed)
        .trim()
}
