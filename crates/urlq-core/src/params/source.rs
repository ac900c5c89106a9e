//! Parameter sources and their normalization into ordered pairs.

use indexmap::IndexMap;

use super::{ParamValue, QueryParams};

/// One input supplying key/value updates to a merge.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamSource {
    /// Key → value mapping, applied in insertion order.
    Mapping(IndexMap<String, ParamValue>),
    /// Ordered (key, value) pairs, applied as-is.
    Pairs(Vec<(String, ParamValue)>),
    /// Pre-encoded query string, optionally starting with `?`.
    Query(String),
    /// An existing parameter collection.
    Params(QueryParams),
}

impl ParamSource {
    /// Builds a `Mapping`. A repeated key keeps its first position and last value.
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = IndexMap::new();
        for (k, v) in entries {
            map.insert(k.into(), v.into());
        }
        ParamSource::Mapping(map)
    }

    pub fn pairs<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        ParamSource::Pairs(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn query(text: impl Into<String>) -> Self {
        ParamSource::Query(text.into())
    }

    /// Normalizes any variant into the ordered pair sequence applied by a merge.
    /// Query text is parsed left to right; it never yields removal markers.
    pub fn into_pairs(self) -> Vec<(String, ParamValue)> {
        match self {
            ParamSource::Mapping(map) => map.into_iter().collect(),
            ParamSource::Pairs(pairs) => pairs,
            ParamSource::Query(text) => {
                let text = text.strip_prefix('?').unwrap_or(&text);
                url::form_urlencoded::parse(text.as_bytes())
                    .map(|(k, v)| (k.into_owned(), ParamValue::Text(v.into_owned())))
                    .collect()
            }
            ParamSource::Params(params) => params
                .into_iter()
                .map(|(k, v)| (k, ParamValue::Text(v)))
                .collect(),
        }
    }
}

impl From<&str> for ParamSource {
    fn from(text: &str) -> Self {
        ParamSource::Query(text.to_string())
    }
}

impl From<String> for ParamSource {
    fn from(text: String) -> Self {
        ParamSource::Query(text)
    }
}

impl From<QueryParams> for ParamSource {
    fn from(params: QueryParams) -> Self {
        ParamSource::Params(params)
    }
}

impl From<IndexMap<String, ParamValue>> for ParamSource {
    fn from(map: IndexMap<String, ParamValue>) -> Self {
        ParamSource::Mapping(map)
    }
}

impl From<Vec<(String, ParamValue)>> for ParamSource {
    fn from(pairs: Vec<(String, ParamValue)>) -> Self {
        ParamSource::Pairs(pairs)
    }
}
