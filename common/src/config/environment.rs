//! The environment layer of a provider's configuration.
//!
//! Variable names are kept exactly as they are set, so `SEARCH_ES_HOST`
//! overrides a base key spelled `SEARCH_ES_HOST` and `db__host` overrides
//! `db.host`. The [`ENV_KEY_SEPARATOR`] splits a name into nested keys.
//!
//! Only names made of ASCII letters, digits and `_` are used. Anything else
//! (`A.B`, `X[0]`, `Q[`) would be read by `config` as a path expression, so
//! such variables are skipped.

use config::{ConfigError, Map, Source, Value, ValueKind};
use std::collections::BTreeMap;

/// Separator that maps `DB__HOST` onto the nested key `DB.HOST`.
pub const ENV_KEY_SEPARATOR: &str = "__";

const ORIGIN: &str = "the environment";

/// Case-preserving [`Source`] over a fixed set of environment variables.
///
/// Variables are applied in name order. When a flat variable and a nested
/// one share a prefix (`DB` and `DB__PORT`), the nested table wins.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentLayer {
    vars: BTreeMap<String, String>,
}

impl EnvironmentLayer {
    pub fn new<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = vars
            .into_iter()
            .filter(|(name, _)| {
                let usable = is_usable_name(name);
                if !usable {
                    log::debug!("Skipping environment variable '{name}': not a plain identifier");
                }
                usable
            })
            .collect();
        Self { vars }
    }

    /// Variables that made it into the layer, in the order they are applied.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// `true` for names like `APP_PORT` or `db__host`: ASCII alphanumerics and
/// `_` only, with no empty segment around a separator.
pub fn is_usable_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
        && name.split(ENV_KEY_SEPARATOR).all(|segment| !segment.is_empty())
}

impl Source for EnvironmentLayer {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let origin = ORIGIN.to_string();
        let mut root = Map::new();
        for (name, value) in &self.vars {
            let path: Vec<&str> = name.split(ENV_KEY_SEPARATOR).collect();
            insert_path(
                &mut root,
                &path,
                Value::new(Some(&origin), value.as_str()),
                Some(&origin),
            );
        }
        Ok(root)
    }
}

fn insert_path(
    table: &mut Map<String, Value>,
    path: &[&str],
    value: Value,
    origin: Option<&String>,
) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };
    if rest.is_empty() {
        table.insert((*head).to_string(), value);
        return;
    }

    let child = table
        .entry((*head).to_string())
        .or_insert_with(|| Value::new(origin, Map::<String, Value>::new()));
    if !matches!(child.kind, ValueKind::Table(_)) {
        *child = Value::new(origin, Map::<String, Value>::new());
    }
    if let ValueKind::Table(ref mut nested) = child.kind {
        insert_path(nested, rest, value, origin);
    }
}
