use std::fmt::Write as _;

use figtok_core::codegen::OutputFormat;
use figtok_protocol::ThemeMode;
use figtok_theme::AppliedTheme;

use crate::commands::GenerateOutcome;

/// Success summary of a generate run.
pub fn generate_summary(outcome: &GenerateOutcome) -> String {
    let report = &outcome.report;
    let format = match outcome.format {
        OutputFormat::TypeScript => "TypeScript",
        OutputFormat::Json => "JSON",
    };

    let mut out = String::new();
    let _ = writeln!(out, "Generated {format} tokens: {}", outcome.output.display());
    let _ = writeln!(out, "  modes: {}", report.modes.join(", "));
    let _ = writeln!(
        out,
        "  semantic tokens: {}  raw colors: {} (from {:?})",
        report.semantic_tokens, report.raw_colors, report.raw_mode
    );
    if report.warning_count() > 0 {
        let _ = writeln!(out, "  warnings: {}", report.warning_count());
        for unresolved in &report.unresolved {
            let _ = writeln!(
                out,
                "    unresolved {} in {}.{}.{}",
                unresolved.reference, unresolved.mode, unresolved.section, unresolved.token
            );
        }
        for invalid in &report.invalid_colors {
            let _ = writeln!(out, "    {}: {} ({})", invalid.path, invalid.value, invalid.error);
        }
        for malformed in &report.malformed {
            let _ = writeln!(
                out,
                "    malformed {}.{}.{} ({})",
                malformed.mode, malformed.section, malformed.token, malformed.error
            );
        }
        for collision in &report.collisions {
            let _ = writeln!(
                out,
                "    dropped {}.{}.{}: key {} already used by {:?}",
                collision.mode, collision.section, collision.token, collision.key, collision.kept
            );
        }
    }
    out
}

/// Mode line printed by the `mode` command.
pub fn mode_summary(mode: ThemeMode) -> String {
    match mode.root_class() {
        Some(class) => format!("{mode} (root class: {class})\n"),
        None => format!("{mode}\n"),
    }
}

/// `css` command output, with the root class noted for the styling layer.
pub fn css_output(applied: &AppliedTheme) -> String {
    let mut out = String::new();
    let resolution = &applied.palette.resolution;
    if resolution.concrete != applied.mode {
        let _ = writeln!(out, "/* {} -> {} */", applied.mode, resolution.concrete);
    }
    if let Some(class) = applied.root_class {
        let _ = writeln!(out, "/* root class: {class} */");
    }
    out.push_str(&applied.css());
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use figtok_core::GenerationReport;
    use figtok_core::builder::{KeyCollision, UnresolvedReference};

    use super::*;

    #[test]
    fn summary_lists_counts_and_warnings() {
        let outcome = GenerateOutcome {
            output: PathBuf::from("src/theme/figma-tokens.ts"),
            format: OutputFormat::TypeScript,
            report: GenerationReport {
                raw_mode: "Mode 1".into(),
                modes: vec!["web".into(), "docket".into()],
                semantic_tokens: 40,
                raw_colors: 33,
                unresolved: vec![UnresolvedReference {
                    mode: "web".into(),
                    section: "chart".into(),
                    token: "chart 1".into(),
                    reference: "{orange.450}".into(),
                }],
                collisions: vec![KeyCollision {
                    mode: "web".into(),
                    section: "general".into(),
                    token: "primary".into(),
                    kept: "Primary".into(),
                    key: "primary".into(),
                }],
                ..GenerationReport::default()
            },
        };
        assert_eq!(
            generate_summary(&outcome),
            "Generated TypeScript tokens: src/theme/figma-tokens.ts\n\
             \x20 modes: web, docket\n\
             \x20 semantic tokens: 40  raw colors: 33 (from \"Mode 1\")\n\
             \x20 warnings: 2\n\
             \x20   unresolved {orange.450} in web.chart.chart 1\n\
             \x20   dropped web.general.primary: key primary already used by \"Primary\"\n"
        );
    }

    #[test]
    fn mode_summary_shows_root_class() {
        assert_eq!(mode_summary(ThemeMode::Web), "web (root class: mode-web)\n");
        assert_eq!(mode_summary(ThemeMode::Docket), "docket\n");
    }
}
