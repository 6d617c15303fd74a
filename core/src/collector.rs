//! Flattens token documents into generated custom properties.
//!
//! A document looks like
//!
//! ```json
//! { "collections": [
//!     { "name": "Core",
//!       "variables": {
//!         "Spacing": { "baseUnit": { "type": "number", "values": { "light": 8 } } } } } ] }
//! ```
//!
//! Anything that does not have this shape is skipped with a warning and the
//! walk carries on with the next sibling.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::format::{format_value, TokenType};
use crate::naming::variable_name;
use crate::source::TokenDocument;

/// Result of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectedTokens {
    /// Generated name to formatted value, in first-insertion order.
    pub variables: IndexMap<String, String>,
    /// How many variables declared each mode, whether or not it was used.
    pub mode_counts: IndexMap<String, usize>,
}

impl CollectedTokens {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Accumulates variables across documents. Later definitions of the same
/// generated name replace earlier ones in place.
#[derive(Debug)]
pub struct TokenCollector {
    prefix: String,
    tokens: CollectedTokens,
}

impl TokenCollector {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            tokens: CollectedTokens::default(),
        }
    }

    /// Adds every variable of one parsed document. `source` only labels
    /// log lines.
    pub fn add_document(&mut self, source: &str, document: &Value) {
        let Some(collections) = document.get("collections").and_then(Value::as_array) else {
            warn!(%source, "document has no collections array, skipping");
            return;
        };
        for collection in collections {
            self.add_collection(collection);
        }
    }

    fn add_collection(&mut self, collection: &Value) {
        let name = collection.get("name").and_then(Value::as_str);
        let Some(categories) = collection.get("variables").and_then(Value::as_object) else {
            warn!(collection = name.unwrap_or("?"), "collection has no variables object, skipping");
            return;
        };
        let Some(name) = name else {
            warn!("collection has no name, skipping");
            return;
        };
        for (category, variables) in categories {
            match variables.as_object() {
                Some(variables) => self.add_category(name, category, variables),
                None => warn!(%category, "category variables are not an object, skipping"),
            }
        }
    }

    fn add_category(&mut self, collection: &str, category: &str, variables: &Map<String, Value>) {
        for (name, definition) in variables {
            self.add_variable(collection, category, name, definition);
        }
    }

    fn add_variable(&mut self, collection: &str, category: &str, name: &str, definition: &Value) {
        let Some(values) = definition.get("values").and_then(Value::as_object) else {
            warn!(variable = %name, "variable has no values object, skipping");
            return;
        };
        let Some((default_mode, raw)) = values.iter().next() else {
            warn!(variable = %name, "variable defines no modes, skipping");
            return;
        };

        for mode in values.keys() {
            *self.tokens.mode_counts.entry(mode.clone()).or_insert(0) += 1;
        }

        if raw.is_null() {
            warn!(variable = %name, mode = %default_mode, "variable has no value for its default mode, skipping");
            return;
        }

        let type_ = match definition.get("type") {
            None | Some(Value::Null) => None,
            Some(Value::String(tag)) => TokenType::from_tag(tag),
            Some(other) => {
                warn!(variable = %name, tag = %other, "type tag is not a string, treating as untyped");
                None
            }
        };
        let value = format_value(raw, type_);
        if type_ == Some(TokenType::Color) && csscolorparser::parse(&value).is_err() {
            debug!(variable = %name, %value, "color token is not a valid CSS color");
        }

        let var_name = variable_name(&self.prefix, collection, category, name);
        self.tokens.variables.insert(var_name, value);
    }

    pub fn finish(self) -> CollectedTokens {
        self.tokens
    }
}

/// Collects all documents in order with the given name prefix.
pub fn collect(prefix: &str, documents: &[TokenDocument]) -> CollectedTokens {
    let mut collector = TokenCollector::new(prefix);
    for document in documents {
        collector.add_document(&document.path.display().to_string(), &document.root);
    }
    collector.finish()
}
