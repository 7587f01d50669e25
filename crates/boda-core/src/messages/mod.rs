//! Message catalogs: translated copy for every supported locale.
//!
//! Each locale owns one nested JSON document terminating in string leaves.
//! Keys are addressed with dotted paths (`navigation.home`). Lookups never
//! fail: a key missing from the requested locale is retried against the
//! default locale, and a key missing from both comes back verbatim so the
//! gap is visible on the page.


use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::BodaError;
use crate::locale::Locale;

const EMBEDDED_ES: &str = include_str!("../../messages/es.json");
const EMBEDDED_EUS: &str = include_str!("../../messages/eus.json");

/// Translated message trees, one per locale. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    es: Value,
    eus: Value,
}

/// Title and description of a page, taken from its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

/// Keys a locale is missing relative to the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub locale: Locale,
    /// Number of string leaves in the default locale.
    pub total: usize,
    /// Keys served from the default locale instead.
    pub missing: Vec<String>,
}

impl CoverageReport {
    /// Share of default-locale keys the locale translates itself, in `[0, 100]`.
    pub fn coverage_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        let covered = self.total.saturating_sub(self.missing.len());
        covered as f64 * 100.0 / self.total as f64
    }
}

impl Catalog {
    /// Build a catalog from already-parsed trees.
    pub fn from_trees(es: Value, eus: Value) -> Self {
        Self { es, eus }
    }

    /// The catalogs bundled with the binary.
    pub fn embedded() -> Result<Self, BodaError> {
        Ok(Self {
            es: parse_tree(Locale::Es, EMBEDDED_ES)?,
            eus: parse_tree(Locale::Eus, EMBEDDED_EUS)?,
        })
    }

    /// Load `<tag>.json` for every locale from `dir`.
    ///
    /// A locale whose file is absent keeps its bundled tree. A file that is
    /// present but unreadable or malformed is an error.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, BodaError> {
        let dir = dir.as_ref();
        let mut catalog = Self::embedded()?;
        for locale in Locale::ALL {
            let path = dir.join(format!("{locale}.json"));
            if !path.exists() {
                info!(
                    "no {} catalog at {}, using bundled messages",
                    locale,
                    path.display()
                );
                continue;
            }
            let content = std::fs::read_to_string(&path).map_err(|e| {
                BodaError::Messages(format!("failed to read {}: {e}", path.display()))
            })?;
            *catalog.tree_mut(locale) = parse_tree(locale, &content)?;
            info!("loaded {} catalog from {}", locale, path.display());
        }
        Ok(catalog)
    }

    /// The message tree of `locale`.
    pub fn tree(&self, locale: Locale) -> &Value {
        match locale {
            Locale::Es => &self.es,
            Locale::Eus => &self.eus,
        }
    }

    fn tree_mut(&mut self, locale: Locale) -> &mut Value {
        match locale {
            Locale::Es => &mut self.es,
            Locale::Eus => &mut self.eus,
        }
    }

    /// Resolve a dotted `key` for `locale`.
    pub fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        let value = match walk(self.tree(locale), key) {
            Some(v) => Some(v),
            None => {
                debug!("'{key}' missing in {locale}, falling back to {}", Locale::DEFAULT);
                walk(self.tree(Locale::DEFAULT), key)
            }
        };
        match value.and_then(Value::as_str) {
            Some(s) => s,
            None => {
                warn!("untranslated key '{key}' for {locale}");
                key
            }
        }
    }

    /// A translator bound to `locale`.
    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            catalog: self,
            locale,
        }
    }

    /// `<namespace>.title` and `<namespace>.description` for `locale`.
    pub fn page_metadata(&self, locale: Locale, namespace: &str) -> PageMetadata {
        self.translator(locale).page_metadata(namespace)
    }

    /// Fallback coverage of every non-default locale.
    pub fn coverage(&self) -> Vec<CoverageReport> {
        let keys = leaf_keys(self.tree(Locale::DEFAULT));
        Locale::ALL
            .into_iter()
            .filter(|l| *l != Locale::DEFAULT)
            .map(|locale| {
                let tree = self.tree(locale);
                let missing = keys
                    .iter()
                    .filter(|k| walk(tree, k).and_then(Value::as_str).is_none())
                    .cloned()
                    .collect();
                CoverageReport {
                    locale,
                    total: keys.len(),
                    missing,
                }
            })
            .collect()
    }
}

/// Translation handle for a single locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    locale: Locale,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate `key`; see [`Catalog::translate`].
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.catalog.translate(self.locale, key)
    }

    pub fn page_metadata(&self, namespace: &str) -> PageMetadata {
        PageMetadata {
            title: self.t(&format!("{namespace}.title")).to_string(),
            description: self.t(&format!("{namespace}.description")).to_string(),
        }
    }
}

fn parse_tree(locale: Locale, content: &str) -> Result<Value, BodaError> {
    let tree: Value = serde_json::from_str(content)
        .map_err(|e| BodaError::Messages(format!("failed to parse {locale} catalog: {e}")))?;
    if !tree.is_object() {
        return Err(BodaError::Messages(format!(
            "{locale} catalog must be a JSON object"
        )));
    }
    Ok(tree)
}

/// Follow `key` segment by segment. `None` as soon as a segment is missing.
fn walk<'v>(tree: &'v Value, key: &str) -> Option<&'v Value> {
    key.split('.').try_fold(tree, |node, segment| node.get(segment))
}

/// Dotted paths of every string leaf, sorted.
fn leaf_keys(tree: &Value) -> Vec<String> {
    fn collect(node: &Value, prefix: &str, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    collect(v, &path, out);
                }
            }
            Value::String(_) => out.push(prefix.to_string()),
            _ => {}
        }
    }

    let mut out = Vec::new();
    collect(tree, "", &mut out);
    out.sort();
    out
}
