// src/config/record.rs

use ahash::AHashSet;
use log::{trace, warn};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use super::{ConfigBuilder, TokenizationStrategy, TokenizerConfig};

/// Applies one key of a generic key-value record. Returns `None` for keys the
/// implementor does not own.
pub trait FromRecord {
    fn from_record_entry(&mut self, key: &str, value: &Value) -> Option<Result<()>>;
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        Error::config(format!("Invalid {} value (must be true/false): {}", key, value))
    })
}

fn expect_usize(key: &str, value: &Value) -> Result<usize> {
    value
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| {
            Error::config(format!("Invalid {} value (must be a non-negative integer): {}", key, value))
        })
}

fn expect_f64(key: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        Error::config(format!("Invalid {} value (must be a number): {}", key, value))
    })
}

impl FromRecord for ConfigBuilder {
    fn from_record_entry(&mut self, key: &str, value: &Value) -> Option<Result<()>> {
        let result = match key {
            "strategy" => value
                .as_str()
                .and_then(TokenizationStrategy::from_str)
                .map(|strategy| self.strategy = strategy)
                .ok_or_else(|| Error::config(format!("Invalid strategy value: {}", value))),
            "lowercase" => expect_bool(key, value).map(|flag| self.lowercase = flag),
            "remove_punctuation" => expect_bool(key, value).map(|flag| self.remove_punctuation = flag),
            "remove_stopwords" => expect_bool(key, value).map(|flag| self.remove_stopwords = flag),
            "normalize_arabic" => expect_bool(key, value).map(|flag| self.normalize_arabic = flag),
            "fuzzy_matching" => expect_bool(key, value).map(|flag| self.fuzzy_matching = flag),
            "phonetic_matching" => expect_bool(key, value).map(|flag| self.phonetic_matching = flag),
            "stemming" => expect_bool(key, value).map(|flag| self.stemming = flag),
            "caching" => expect_bool(key, value).map(|flag| self.caching = flag),
            "ngram_size" => expect_usize(key, value).map(|n| self.ngram_size = n),
            "fuzzy_threshold" => expect_f64(key, value).map(|t| self.fuzzy_threshold = t),
            "cache_capacity" => expect_usize(key, value).map(|n| self.cache_capacity = n),
            "custom_pattern" => match value {
                Value::Null => {
                    self.custom_pattern = None;
                    Ok(())
                }
                Value::String(pattern) => {
                    self.custom_pattern = Some(pattern.clone());
                    Ok(())
                }
                other => Err(Error::config(format!("Invalid custom_pattern value: {}", other))),
            },
            "stopwords" => match value.as_array() {
                Some(items) => items
                    .iter()
                    .map(|item| {
                        item.as_str()
                            .map(str::to_string)
                            .ok_or_else(|| Error::config(format!("Invalid stopword entry: {}", item)))
                    })
                    .collect::<Result<AHashSet<String>>>()
                    .map(|words| self.stopwords = words),
                None => Err(Error::config(format!("Invalid stopwords value (must be an array): {}", value))),
            },
            _ => return None,
        };
        Some(result)
    }
}

impl TokenizerConfig {
    /// Exports every setting as a flat key-value record.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("strategy".into(), Value::from(self.strategy.as_str()));
        record.insert("lowercase".into(), Value::from(self.lowercase));
        record.insert("remove_punctuation".into(), Value::from(self.remove_punctuation));
        record.insert("remove_stopwords".into(), Value::from(self.remove_stopwords));
        record.insert("normalize_arabic".into(), Value::from(self.normalize_arabic));
        record.insert("fuzzy_matching".into(), Value::from(self.fuzzy_matching));
        record.insert("phonetic_matching".into(), Value::from(self.phonetic_matching));
        record.insert("stemming".into(), Value::from(self.stemming));
        record.insert("caching".into(), Value::from(self.caching));
        record.insert("ngram_size".into(), Value::from(self.ngram_size as u64));
        record.insert("fuzzy_threshold".into(), Value::from(self.fuzzy_threshold));
        record.insert("cache_capacity".into(), Value::from(self.cache_capacity as u64));
        record.insert(
            "custom_pattern".into(),
            self.custom_pattern
                .as_ref()
                .map(|re| Value::from(re.as_str()))
                .unwrap_or(Value::Null),
        );
        let mut stopwords: Vec<&String> = self.stopwords.iter().collect();
        stopwords.sort();
        record.insert(
            "stopwords".into(),
            Value::Array(stopwords.into_iter().map(|w| Value::from(w.as_str())).collect()),
        );
        record
    }

    /// Rebuilds a configuration from a record. Missing keys keep their defaults.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self> {
        let mut builder = ConfigBuilder::default();
        for (key, value) in record {
            trace!("Applying config record entry {}={}", key, value);
            match builder.from_record_entry(key, value) {
                Some(result) => result?,
                None => warn!("Unrecognized config key: {}={}", key, value),
            }
        }
        builder.build()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&Value::Object(self.to_record()))?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(record) => Self::from_record(&record),
            other => Err(Error::config(format!("Config record must be a JSON object, got {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    #[test]
    fn test_record_round_trip_keeps_pattern_string() {
        let config = TokenizerConfig::builder()
            .strategy(TokenizationStrategy::Custom)
            .custom_pattern(r"\d+")
            .ngram_size(3)
            .stopwords(["the", "a"])
            .build()
            .unwrap();

        let record = config.to_record();
        assert_eq!(record["custom_pattern"], Value::from(r"\d+"));
        assert_eq!(record["strategy"], Value::from("custom"));
        assert_eq!(record["stopwords"], serde_json::json!(["a", "the"]));

        let restored = TokenizerConfig::from_record(&record).unwrap();
        assert_eq!(restored.strategy(), TokenizationStrategy::Custom);
        assert_eq!(restored.custom_pattern().map(|re| re.as_str()), Some(r"\d+"));
        assert_eq!(restored.ngram_size(), 3);
        assert_eq!(restored.stopwords().len(), 2);
    }

    #[test]
    fn test_record_validation_still_applies() {
        let json = r#"{"fuzzy_threshold": 2.0}"#;
        assert!(matches!(TokenizerConfig::from_json(json), Err(Error::Config(_))));

        let json = r#"{"lowercase": "yes"}"#;
        assert!(TokenizerConfig::from_json(json).is_err());

        let json = r#"{"custom_pattern": "("}"#;
        assert!(matches!(TokenizerConfig::from_json(json), Err(Error::Pattern(_))));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"lowercase": true, "colour": "blue"}"#;
        let config = TokenizerConfig::from_json(json).unwrap();
        assert!(config.lowercase());
    }

    #[test]
    fn test_json_round_trip_of_preset() {
        let config = TokenizerConfig::preset(Preset::EnglishOptimized);
        let restored = TokenizerConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(restored.to_record(), config.to_record());
    }
}
