//! Localized display strings
//!
//! Bundles are nested YAML maps flattened to dotted keys
//! (`guide.steps.1.title`). Lookups fall back to English and finally to the
//! key itself, so a missing translation never breaks rendering.

use std::collections::HashMap;
use std::path::Path;

use serde_yaml_ng::Value;
use tracing::{debug, trace};

use crate::{GuideError, Result};

pub const DEFAULT_LOCALE: &str = "en";

const BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../../assets/locales/en.yaml")),
    ("de", include_str!("../../assets/locales/de.yaml")),
];

/// Locales with an embedded bundle
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    BUNDLES.iter().map(|(locale, _)| *locale)
}

pub fn is_supported(locale: &str) -> bool {
    supported_locales().any(|l| l == locale)
}

/// Key to string lookup for one locale
#[derive(Debug, Clone)]
pub struct Localizer {
    locale: String,
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Localizer {
    /// Build a localizer from the embedded bundles
    pub fn new(locale: &str) -> Result<Self> {
        let source = BUNDLES
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, source)| *source)
            .ok_or_else(|| GuideError::UnknownLocale(locale.to_string()))?;

        let messages = parse_bundle(source)?;
        let fallback = if locale == DEFAULT_LOCALE {
            HashMap::new()
        } else {
            parse_bundle(BUNDLES[0].1)?
        };

        Ok(Self {
            locale: locale.to_string(),
            messages,
            fallback,
        })
    }

    /// Layer `<dir>/<locale>.yaml` over the embedded strings, if present
    pub fn with_overrides(mut self, dir: &Path) -> Result<Self> {
        let path = dir.join(format!("{}.yaml", self.locale));
        if !path.exists() {
            debug!("No locale overrides at {}", path.display());
            return Ok(self);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            GuideError::Config(format!(
                "Failed to read locale file {}: {}",
                path.display(),
                e
            ))
        })?;
        let overrides = parse_bundle(&content)?;
        debug!(
            "Loaded {} locale overrides from {}",
            overrides.len(),
            path.display()
        );
        self.messages.extend(overrides);
        Ok(self)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a display string
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(message) = self.messages.get(key).or_else(|| self.fallback.get(key)) {
            return message;
        }
        trace!(locale = %self.locale, key, "Missing translation");
        key
    }

    /// Look up a display string and substitute `{name}` placeholders
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut message = self.t(key).to_string();
        for (name, value) in args {
            message = message.replace(&format!("{{{name}}}"), value);
        }
        message
    }
}

fn parse_bundle(source: &str) -> Result<HashMap<String, String>> {
    let root: Value = serde_yaml_ng::from_str(source)?;
    let mut messages = HashMap::new();
    flatten(String::new(), &root, &mut messages);
    Ok(messages)
}

fn flatten(prefix: String, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = scalar_to_string(key) else {
                    continue;
                };
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(path, child, out);
            }
        }
        other => {
            if let Some(text) = scalar_to_string(other) {
                out.insert(prefix, text);
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
