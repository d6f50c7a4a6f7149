//! Rule table loader
//!
//! Reads a JSON rule file of the shape
//! `{ "CBSE": { "promoteMonth": 4 }, ... }` and validates every entry.
//! A malformed rule file is a startup failure; nothing is loaded partially.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::errors::{RuleError, RuleResult};
use super::types::{PromotionRuleTable, RawRule};

/// Top-level rule object in document order.
///
/// Collected as a list rather than a map so that a key written twice reaches
/// `from_entries` twice and is reported instead of overwritten.
struct RawEntries(Vec<(String, RawRule)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of board rules")
            }

            fn visit_map<A>(self, mut map: A) -> Result<RawEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, RawRule>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Loads promotion rule tables from disk or from JSON text.
pub struct RuleLoader;

impl RuleLoader {
    /// Loads and validates a rule file.
    pub fn load_file(path: &Path) -> RuleResult<PromotionRuleTable> {
        let content = fs::read_to_string(path).map_err(|e| RuleError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse_named(&content, &path.display().to_string())
    }

    /// Parses and validates rule JSON held in memory.
    pub fn parse(json: &str) -> RuleResult<PromotionRuleTable> {
        Self::parse_named(json, "<in-memory>")
    }

    fn parse_named(json: &str, origin: &str) -> RuleResult<PromotionRuleTable> {
        let RawEntries(raw) =
            serde_json::from_str(json).map_err(|e| RuleError::Parse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        PromotionRuleTable::from_entries(
            raw.into_iter().map(|(board, rule)| (board, rule.promote_month)),
        )
    }
}
