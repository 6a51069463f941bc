use regex::Regex;
use serde::{Deserialize, Serialize};

/// Ruleset a `NameConverter` is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Body of a character class; a literal `-` must come last.
    #[serde(default = "default_valid_chars")]
    pub valid_chars: String,

    /// Applied in order, before invalid characters are removed.
    #[serde(default = "default_substitutions")]
    pub substitutions: Vec<Substitution>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            valid_chars: default_valid_chars(),
            substitutions: default_substitutions(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

impl Substitution {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

fn default_valid_chars() -> String {
    "A-Za-z0-9._-".to_string()
}

fn default_substitutions() -> Vec<Substitution> {
    [
        (" ", "_"),
        ("ä", "ae"),
        ("ö", "oe"),
        ("ü", "ue"),
        ("Ä", "Ae"),
        ("Ö", "Oe"),
        ("Ü", "Ue"),
        ("ß", "ss"),
    ]
    .into_iter()
    .map(|(from, to)| Substitution::new(from, to))
    .collect()
}

impl ConverterConfig {
    /// Valid characters as ranges and single characters, e.g. `A-Z a-z 0-9 . _ -`.
    pub fn valid_chars_to_string(&self) -> String {
        let token = Regex::new(r"(?s).-.|.").expect("Invalid regex pattern");
        token
            .find_iter(&self.valid_chars)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One `from => to` line per substitution, in table order.
    pub fn substitutions_to_string(&self) -> String {
        self.substitutions
            .iter()
            .map(|s| format!("{} => {}\n", s.from, s.to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_valid_chars_render_as_ranges() {
        assert_eq!(
            ConverterConfig::default().valid_chars_to_string(),
            "A-Z a-z 0-9 . _ -"
        );
    }

    #[test]
    fn default_substitutions_start_with_space() {
        let listing = ConverterConfig::default().substitutions_to_string();
        assert_eq!(listing.split('\n').next(), Some("  => _"));
        assert_eq!(listing.lines().count(), 8);
        assert!(listing.ends_with("ß => ss\n"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ConverterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn partial_config_keeps_default_substitutions() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"valid_chars": "a-z"}"#).unwrap();
        assert_eq!(config.valid_chars, "a-z");
        assert_eq!(config.substitutions.len(), 8);
    }
}
