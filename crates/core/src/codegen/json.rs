use figtok_protocol::TokenTables;

/// Pretty-printed JSON of the tables with normalized semantic keys.
pub fn render(tables: &TokenTables) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(&tables.with_normalized_keys())?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use figtok_protocol::{Hsl, SemanticToken};

    use super::*;

    #[test]
    fn output_loads_back_with_normalized_keys() {
        let mut tables = TokenTables::default();
        tables
            .semantic
            .entry("docket".into())
            .or_default()
            .entry("card".into())
            .or_default()
            .insert(
                "card foreground".into(),
                SemanticToken {
                    hex: "#0a0a0a".into(),
                    hsl: Hsl::new(0, 0, 4),
                    description: Some("text on cards".into()),
                    scopes: vec!["TEXT_FILL".into()],
                },
            );

        let json = render(&tables).unwrap();
        assert!(json.ends_with('\n'));
        assert!(json.contains("\"cardforeground\""));
        assert!(json.contains("\"0 0% 4%\""));

        let back = TokenTables::from_json(&json).unwrap();
        let token = back
            .semantic_token("docket", "card", "card foreground")
            .unwrap();
        assert_eq!(token.description.as_deref(), Some("text on cards"));
        assert_eq!(token.scopes, ["TEXT_FILL"]);
    }
}
