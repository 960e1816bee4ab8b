//! TypeScript token module: `semanticColors` and `rawColors` constant tables.

use chrono::SecondsFormat;
use figtok_protocol::{ColorValue, RawEntry, TokenTables};

use super::ModuleHeader;

/// Render the tables as a TypeScript module.
///
/// Semantic tokens are keyed by their normalized names and rendered as HSL
/// strings with the hex value (and description, if any) in a trailing comment.
pub fn render(tables: &TokenTables, header: &ModuleHeader) -> String {
    let mut ts = String::with_capacity(tables.raw_color_count() * 80 + 4096);
    ts.push_str(&format!(
        "/**\n\
         \x20* Design Tokens - Generated from Figma Variables\n\
         \x20*\n\
         \x20* This file is auto-generated from Figma variables export.\n\
         \x20* DO NOT EDIT MANUALLY - regenerate using: {}\n\
         \x20*\n\
         \x20* Source: {}\n\
         \x20* Generated: {}\n\
         \x20*/\n\n",
        comment_text(&header.regenerate_with),
        comment_text(&header.source),
        header
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    ));

    ts.push_str("// Semantic color tokens from Figma\n");
    ts.push_str("export const semanticColors = {\n");
    let normalized = tables.with_normalized_keys();
    for (mode, sections) in &normalized.semantic {
        ts.push_str(&format!("  {}: {{\n", object_key(mode)));
        for (section, tokens) in sections {
            ts.push_str(&format!("    {}: {{\n", object_key(section)));
            for (name, token) in tokens {
                let description = token
                    .description
                    .as_deref()
                    .map(|d| format!(" - {}", comment_text(d)))
                    .unwrap_or_default();
                ts.push_str(&format!(
                    "      {}: {}, // {}{description}\n",
                    object_key(name),
                    string_literal(&token.hsl.to_string()),
                    comment_text(&token.hex),
                ));
            }
            ts.push_str("    },\n");
        }
        ts.push_str("  },\n");
    }
    ts.push_str("} as const;\n\n");

    ts.push_str("// Raw colors from Figma\n");
    ts.push_str("export const rawColors = {\n");
    for (name, entry) in &tables.raw {
        ts.push_str(&format!("  {}: {{\n", object_key(name)));
        match entry {
            RawEntry::Simple(value) => push_color_fields(&mut ts, value, "    "),
            RawEntry::Family(shades) => {
                for (shade, value) in shades {
                    ts.push_str(&format!("    {}: {{\n", object_key(shade)));
                    push_color_fields(&mut ts, value, "      ");
                    ts.push_str("    },\n");
                }
            }
        }
        ts.push_str("  },\n");
    }
    ts.push_str("} as const;\n\n");

    ts.push_str("export default {\n");
    ts.push_str("  semantic: semanticColors,\n");
    ts.push_str("  raw: rawColors,\n");
    ts.push_str("};\n");
    ts
}

fn push_color_fields(ts: &mut String, value: &ColorValue, indent: &str) {
    ts.push_str(&format!("{indent}hex: {},\n", string_literal(&value.hex)));
    ts.push_str(&format!(
        "{indent}hsl: {},\n",
        string_literal(&value.hsl.to_string())
    ));
}

/// Bare identifiers and plain integers stay unquoted, anything else becomes
/// a single-quoted string key.
fn object_key(key: &str) -> String {
    if is_identifier(key) || is_integer_key(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_integer_key(key: &str) -> bool {
    !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'))
}

fn string_literal(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("'{escaped}'")
}

/// Text placed inside a comment: single line, no comment terminator.
fn comment_text(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "* /")
}
