//! INI file configuration adapter.
//!
//! Backs [`ConfigPort`] with an INI file so scoring constants can be tuned
//! without touching code.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCORING_INI: &str = r#"
[scoring]
elite_rating_threshold = 88
captain_bonus = 15.5
max_term_years = 7

[fairness]
fair_pct = 4.0
balance_tolerance_points = 25
"#;

    #[test]
    fn from_string_parses_scoring_sections() {
        let adapter = FileConfigAdapter::from_string(SCORING_INI).unwrap();
        assert_eq!(
            adapter.get_double("scoring", "elite_rating_threshold", 0.0),
            88.0
        );
        assert_eq!(adapter.get_double("scoring", "captain_bonus", 0.0), 15.5);
        assert_eq!(adapter.get_int("scoring", "max_term_years", 0), 7);
        assert_eq!(adapter.get_int("fairness", "balance_tolerance_points", 0), 25);
    }

    #[test]
    fn missing_keys_return_defaults() {
        let adapter = FileConfigAdapter::from_string(SCORING_INI).unwrap();
        assert_eq!(adapter.get_string("scoring", "missing"), None);
        assert_eq!(adapter.get_double("scoring", "missing", 0.35), 0.35);
        assert_eq!(adapter.get_int("missing_section", "key", 42), 42);
    }

    #[test]
    fn non_numeric_values_return_defaults() {
        let adapter =
            FileConfigAdapter::from_string("[scoring]\ncaptain_bonus = a_lot\n").unwrap();
        assert_eq!(adapter.get_double("scoring", "captain_bonus", 12.0), 12.0);
        assert_eq!(adapter.get_int("scoring", "captain_bonus", 12), 12);
    }

    #[test]
    fn bool_values_parse_common_spellings() {
        let adapter =
            FileConfigAdapter::from_string("[report]\na = true\nb = no\nc = 1\n").unwrap();
        assert!(adapter.get_bool("report", "a", false));
        assert!(!adapter.get_bool("report", "b", true));
        assert!(adapter.get_bool("report", "c", false));
        assert!(adapter.get_bool("report", "missing", true));
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SCORING_INI).unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(adapter.get_double("fairness", "fair_pct", 0.0), 4.0);
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        assert!(FileConfigAdapter::from_file("/nonexistent/puckval.ini").is_err());
    }
}
