//! Filename sanitizing.
//!
//! Only the base name of a path is ever changed. The directory part is kept
//! verbatim, whatever characters it contains.

use regex::Regex;
use std::path::is_separator;

use crate::defaults::{ConverterConfig, Substitution};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct NameConverter {
    substitutions: Vec<Substitution>,
    invalid_characters: Regex,
}

impl NameConverter {
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        if let Some(empty) = config.substitutions.iter().find(|s| s.from.is_empty()) {
            return Err(Error::config_invalid_value(
                "substitutions",
                Some(format!(" => {}", empty.to)),
                "Substitution source cannot be empty",
            ));
        }

        let pattern = format!("[^{}]", config.valid_chars);
        let invalid_characters = Regex::new(&pattern).map_err(|e| {
            Error::config_invalid_value(
                "valid_chars",
                Some(config.valid_chars.clone()),
                format!("Invalid character class: {}", e),
            )
        })?;

        Ok(Self {
            substitutions: config.substitutions.clone(),
            invalid_characters,
        })
    }

    /// True when the base name of `path` has a character outside the valid set.
    pub fn is_invalid(&self, path: &str) -> bool {
        let (_, base_name) = split_path(path);
        self.invalid_characters.is_match(base_name)
    }

    /// Sanitize the base name of `path`, keeping its directory untouched.
    ///
    /// A path without any separator comes back as the bare new name.
    pub fn convert(&self, path: &str) -> String {
        let (dir, base_name) = split_path(path);
        let converted = self.sanitize_base_name(base_name);

        match dir {
            Some(dir) => format!("{}{}", dir, converted),
            None => converted,
        }
    }

    /// Substitute, then drop whatever is still invalid.
    pub fn sanitize_base_name(&self, name: &str) -> String {
        let mut out = name.to_string();
        for substitution in &self.substitutions {
            if out.contains(substitution.from.as_str()) {
                out = out.replace(substitution.from.as_str(), &substitution.to);
            }
        }

        self.invalid_characters.replace_all(&out, "").into_owned()
    }
}

impl Default for NameConverter {
    fn default() -> Self {
        Self::new(&ConverterConfig::default()).expect("Invalid default converter config")
    }
}

/// Split at the last separator; the directory part keeps its trailing separator.
///
/// Trailing separators are ignored, so `my dir/` names `my dir`. A path made
/// only of separators is all directory.
fn split_path(path: &str) -> (Option<&str>, &str) {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() && !path.is_empty() {
        return (Some(path), "");
    }

    match trimmed.rfind(is_separator) {
        Some(idx) => (Some(&trimmed[..=idx]), &trimmed[idx + 1..]),
        None => (None, trimmed),
    }
}
