//! Offline food catalog
//!
//! Serves lookups from a TOML file of `[[foods]]` entries. Names containing the term
//! rank ahead of fuzzy-only matches.

use std::fs;
use std::path::Path;
use std::time::Duration;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Deserialize;

use super::ProviderError;
use crate::food::{FoodDetail, Suggestion};

/// Default number of suggestions returned per lookup
pub const DEFAULT_LIMIT: usize = 10;

/// One food in the catalog file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_serving_qty")]
    pub serving_qty: f64,
    #[serde(default = "default_serving_unit")]
    pub serving_unit: String,
    pub calories: f64,
}

fn default_serving_qty() -> f64 {
    1.0
}

fn default_serving_unit() -> String {
    "serving".to_string()
}

impl CatalogEntry {
    fn to_suggestion(&self) -> Suggestion {
        Suggestion::new(self.name.clone(), self.image_url.clone())
    }

    fn to_detail(&self) -> FoodDetail {
        FoodDetail {
            food_name: self.name.clone(),
            serving_quantity: self.serving_qty,
            serving_unit: self.serving_unit.clone(),
            calories: self.calories,
            image_url: Some(self.image_url.clone()).filter(|u| !u.is_empty()),
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    foods: Vec<CatalogEntry>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    limit: usize,
    latency: Duration,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            limit: DEFAULT_LIMIT,
            latency: Duration::ZERO,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Delay every answer, to mimic a remote endpoint
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn from_toml(content: &str) -> Result<Self, ProviderError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| ProviderError::Parse(e.to_string()))?;
        Ok(Self::new(file.foods))
    }

    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ProviderError::NotConfigured(format!("cannot read catalog {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank catalog entries against `term`
    pub fn matches(&self, term: &str) -> Vec<Suggestion> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let needle = term.to_lowercase();

        let mut scored: Vec<(bool, i64, &CatalogEntry)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let contains = entry.name.to_lowercase().contains(&needle);
                let score = matcher.fuzzy_match(&entry.name, term);
                match (contains, score) {
                    (false, None) => None,
                    (contains, score) => Some((contains, score.unwrap_or(0), entry)),
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then(b.1.cmp(&a.1))
                .then_with(|| a.2.name.cmp(&b.2.name))
        });

        scored
            .into_iter()
            .take(self.limit)
            .map(|(_, _, entry)| entry.to_suggestion())
            .collect()
    }

    /// Find the entry whose name equals `name`, ignoring case
    pub fn detail(&self, name: &str) -> Result<FoodDetail, ProviderError> {
        let wanted = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase() == wanted)
            .map(CatalogEntry::to_detail)
            .ok_or_else(|| ProviderError::NotFound(name.to_string()))
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Suggestion>, ProviderError> {
        self.simulate_latency().await;
        Ok(self.matches(term))
    }

    pub async fn fetch_detail(&self, name: &str) -> Result<FoodDetail, ProviderError> {
        self.simulate_latency().await;
        self.detail(name)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
