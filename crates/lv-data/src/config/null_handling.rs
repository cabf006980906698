//! Missing-value handling for data loading

use serde::{Serialize, Deserialize};

/// Which raw cell values count as missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullConfig {
    /// Patterns to treat as missing
    pub patterns: Vec<String>,

    /// Whether to trim whitespace before checking
    pub trim_whitespace: bool,

    /// Case sensitive matching
    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                String::new(),      // Empty string
                "NA".to_string(),
                "N/A".to_string(),
                "-".to_string(),
                "?".to_string(),
                "null".to_string(),
                "None".to_string(),
            ],
            trim_whitespace: true,
            case_sensitive: false,
        }
    }
}

impl NullConfig {
    /// Check if a value should be treated as missing
    pub fn is_null(&self, value: &str) -> bool {
        let test_value = if self.trim_whitespace {
            value.trim()
        } else {
            value
        };

        self.patterns.iter().any(|pattern| {
            if self.case_sensitive {
                test_value == pattern
            } else {
                test_value.eq_ignore_ascii_case(pattern)
            }
        })
    }

    /// The usable part of a cell, or `None` if it counts as missing
    pub fn present<'a>(&self, value: &'a str) -> Option<&'a str> {
        if self.is_null(value) {
            None
        } else if self.trim_whitespace {
            Some(value.trim())
        } else {
            Some(value)
        }
    }

    /// Add a missing-value pattern
    pub fn add_pattern(&mut self, pattern: String) {
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns() {
        let config = NullConfig::default();

        assert!(config.is_null(""));
        assert!(config.is_null("  NA "));
        assert!(config.is_null("na"));
        assert!(!config.is_null("130"));
        assert_eq!(config.present(" 130 "), Some("130"));
        assert_eq!(config.present("n/a"), None);
    }

    #[test]
    fn test_case_sensitive_patterns() {
        let mut config = NullConfig {
            patterns: Vec::new(),
            trim_whitespace: false,
            case_sensitive: true,
        };
        config.add_pattern("NA".to_string());
        config.add_pattern("NA".to_string());

        assert_eq!(config.patterns.len(), 1);
        assert!(config.is_null("NA"));
        assert!(!config.is_null("na"));
        assert!(!config.is_null(" NA"));
    }
}
