// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::provider::DEFAULT_CATALOG_LIMIT;
use crate::suggest::{DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_TERM_LEN};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Which backend answers lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Graphql,
    Catalog,
}

/// Search input configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_min_term_len")]
    pub min_term_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_term_len: DEFAULT_MIN_TERM_LEN,
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_min_term_len() -> usize {
    DEFAULT_MIN_TERM_LEN
}

/// Provider configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub latency_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            kind: ProviderKind::default(),
            endpoint: default_endpoint(),
            token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            catalog_path: None,
            limit: DEFAULT_CATALOG_LIMIT,
            latency_ms: 0,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_limit() -> usize {
    DEFAULT_CATALOG_LIMIT
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search.debounce_ms, 50);
        assert_eq!(config.search.min_term_len, 3);
        assert_eq!(config.provider.kind, ProviderKind::Graphql);
        assert_eq!(config.provider.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_catalog_section() {
        let config: Config = toml::from_str(
            r#"
[provider]
kind = "catalog"
catalog_path = "/tmp/foods.toml"
limit = 5
latency_ms = 120
"#,
        )
        .unwrap();
        assert_eq!(config.provider.kind, ProviderKind::Catalog);
        assert_eq!(
            config.provider.catalog_path,
            Some(PathBuf::from("/tmp/foods.toml"))
        );
        assert_eq!(config.provider.limit, 5);
        assert_eq!(config.provider.latency_ms, 120);
        assert_eq!(config.provider.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_unknown_provider_kind_rejected() {
        let result: Result<Config, _> = toml::from_str("[provider]\nkind = \"rest\"\n");
        assert!(result.is_err());
    }

    // For any valid provider kind in a TOML config file, parsing extracts that kind.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_kind_parsing(kind in prop::sample::select(vec!["graphql", "catalog"])) {
            let toml_content = format!("[provider]\nkind = \"{}\"\n", kind);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid kind: {}", kind);

            let expected = match kind {
                "graphql" => ProviderKind::Graphql,
                "catalog" => ProviderKind::Catalog,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().provider.kind, expected);
        }
    }

    // Missing optional fields in the search section fall back to defaults,
    // while present fields are kept.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_search_fields_use_defaults(
            debounce in prop::option::of(0u64..1_000),
            min_len in prop::option::of(0usize..10),
        ) {
            let mut toml_content = String::from("[search]\n");
            if let Some(d) = debounce {
                toml_content.push_str(&format!("debounce_ms = {}\n", d));
            }
            if let Some(m) = min_len {
                toml_content.push_str(&format!("min_term_len = {}\n", m));
            }

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.search.debounce_ms, debounce.unwrap_or(DEFAULT_DEBOUNCE_MS));
            prop_assert_eq!(config.search.min_term_len, min_len.unwrap_or(DEFAULT_MIN_TERM_LEN));
        }
    }
}
