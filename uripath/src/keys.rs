//! Key-literal codec.
//!
//! This module converts between the textual key representation used in path
//! literals (`id=1` or `k1=v1,k2=v2`, plus the positional form `1`) and an
//! ordered mapping from key-property name to literal value.
//!
//! [`encode`] always emits the named form, so [`decode`] reproduces the
//! original mapping exactly. The positional form carries no names and is only
//! decodable against the declared key names of an entity type via
//! [`decode_with`].

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// An ordered mapping from key-property name to literal value.
///
/// Insertion order is preserved; equality ignores order, matching the
/// round-trip contract of the codec.
///
/// # Examples
///
/// ```
/// use uripath::KeyValues;
///
/// let values: KeyValues = [("id".to_string(), "1".to_string())]
///     .into_iter()
///     .collect();
/// assert_eq!(values.get("id"), Some("1"));
/// assert_eq!(values.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValues(IndexMap<String, String>);

impl KeyValues {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key/value pair, returning the previous value for the name if
    /// any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the value for the given key-property name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the mapping holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for KeyValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for KeyValues {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl fmt::Display for KeyValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode(self))
    }
}

/// Encodes a key mapping into its canonical named textual form.
///
/// # Examples
///
/// ```
/// use uripath::KeyValues;
/// use uripath::keys::encode;
///
/// let values: KeyValues = [("k1", "v1"), ("k2", "v2")].into_iter().collect();
/// assert_eq!(encode(&values), "k1=v1,k2=v2");
/// ```
#[must_use]
pub fn encode(values: &KeyValues) -> String {
    values
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Decodes a named key literal (`k1=v1,k2=v2`) into an ordered mapping.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyLiteral`] for empty text, pairs without a name,
/// pairs without an `=`, empty values, or duplicate names. Positional
/// literals (`1`) carry no names and are rejected here; use [`decode_with`]
/// to resolve them against declared key names.
///
/// # Examples
///
/// ```
/// use uripath::keys::decode;
///
/// let values = decode("k1=v1,k2=v2").unwrap();
/// assert_eq!(values.get("k1"), Some("v1"));
/// assert_eq!(values.get("k2"), Some("v2"));
///
/// assert!(decode("1").is_err());
/// ```
pub fn decode(literal: &str) -> Result<KeyValues> {
    if literal.is_empty() {
        return Err(Error::InvalidKeyLiteral {
            literal: literal.to_string(),
            reason: "literal is empty".to_string(),
        });
    }

    let mut values = KeyValues::new();
    for part in literal.split(',') {
        let Some((name, value)) = part.split_once('=') else {
            return Err(Error::InvalidKeyLiteral {
                literal: literal.to_string(),
                reason: format!("segment '{part}' has no key name"),
            });
        };
        if name.is_empty() {
            return Err(Error::InvalidKeyLiteral {
                literal: literal.to_string(),
                reason: format!("segment '{part}' has an empty key name"),
            });
        }
        if value.is_empty() {
            return Err(Error::InvalidKeyLiteral {
                literal: literal.to_string(),
                reason: format!("segment '{part}' has an empty value"),
            });
        }
        if values.insert(name, value).is_some() {
            return Err(Error::InvalidKeyLiteral {
                literal: literal.to_string(),
                reason: format!("duplicate key name '{name}'"),
            });
        }
    }

    Ok(values)
}

/// Decodes a key literal, resolving the positional form against declared key
/// names.
///
/// Named literals behave as in [`decode`]. A fully positional literal
/// (`1` or `1,2`) is assigned to `declared` names in declaration order.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyLiteral`] for everything [`decode`] rejects,
/// for positional literals with an empty value or an arity differing from
/// `declared`, and for literals mixing positional and named parts.
///
/// # Examples
///
/// ```
/// use uripath::keys::decode_with;
///
/// let values = decode_with("1", &["id"]).unwrap();
/// assert_eq!(values.get("id"), Some("1"));
///
/// let values = decode_with("7,3", &["orderId", "lineNo"]).unwrap();
/// assert_eq!(values.get("lineNo"), Some("3"));
///
/// assert!(decode_with("1,k=2", &["a", "b"]).is_err());
/// ```
pub fn decode_with(literal: &str, declared: &[&str]) -> Result<KeyValues> {
    if literal.is_empty() {
        return Err(Error::InvalidKeyLiteral {
            literal: literal.to_string(),
            reason: "literal is empty".to_string(),
        });
    }

    let parts: Vec<&str> = literal.split(',').collect();
    let named = parts.iter().filter(|p| p.contains('=')).count();

    if named == parts.len() {
        return decode(literal);
    }
    if named != 0 {
        return Err(Error::InvalidKeyLiteral {
            literal: literal.to_string(),
            reason: "mixes positional and named key values".to_string(),
        });
    }

    if parts.len() != declared.len() {
        return Err(Error::InvalidKeyLiteral {
            literal: literal.to_string(),
            reason: format!(
                "positional literal has {} value(s) but the type declares {} key(s)",
                parts.len(),
                declared.len()
            ),
        });
    }
    if parts.iter().any(|part| part.is_empty()) {
        return Err(Error::InvalidKeyLiteral {
            literal: literal.to_string(),
            reason: "positional literal has an empty value".to_string(),
        });
    }

    log::debug!("resolving positional key literal '{literal}' against {declared:?}");
    Ok(declared
        .iter()
        .zip(parts)
        .map(|(name, value)| (*name, value))
        .collect())
}


#[cfg(all(test, feature = "property-tests"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn key_name_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_]{0,15}"
    }

    fn key_value_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.-]{1,20}"
    }

    fn key_values_strategy() -> impl Strategy<Value = KeyValues> {
        prop::collection::btree_map(key_name_strategy(), key_value_strategy(), 1..6)
            .prop_map(|map| map.into_iter().collect())
    }

    proptest! {
        // Encode then decode reproduces the original mapping.
        #[test]
        fn codec_round_trip(values in key_values_strategy()) {
            let decoded = decode(&encode(&values)).unwrap();
            prop_assert_eq!(decoded, values);
        }

        // Encoding is deterministic.
        #[test]
        fn encode_deterministic(values in key_values_strategy()) {
            prop_assert_eq!(encode(&values), encode(&values));
        }

        // Decoding never panics on arbitrary input.
        #[test]
        fn decode_total(literal in ".{0,40}") {
            let _ = decode(&literal);
        }
    }
}
