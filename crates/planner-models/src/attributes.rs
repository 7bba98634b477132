//! Named attribute values entered as text.
//!
//! The front end collects every attribute as free-form text. `Attributes`
//! holds those values for one entity kind, rejects names the kind does not
//! declare, and converts values to the record's field types.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::kind::EntityKind;

/// Attribute name/value text for one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    kind: EntityKind,
    values: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute set for `kind`.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            values: BTreeMap::new(),
        }
    }

    /// Builds an attribute set from name/value pairs.
    ///
    /// # Errors
    /// Returns `UnknownAttribute` for any name the kind does not declare.
    pub fn from_pairs<I, K, V>(kind: EntityKind, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut attrs = Self::new(kind);
        for (name, value) in pairs {
            attrs.insert(name, value)?;
        }
        Ok(attrs)
    }

    /// Sets one attribute, replacing any earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !self.kind.has_attribute(&name) {
            return Err(ModelError::UnknownAttribute {
                kind: self.kind,
                name,
            });
        }
        self.values.insert(name, value.into());
        Ok(())
    }

    /// Returns the kind these attributes belong to.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Fails if the identifier attribute is present.
    ///
    /// Patches never change a record's key.
    pub fn reject_identifier(&self) -> Result<()> {
        let id = self.kind.id_attribute();
        if self.values.contains_key(id) {
            return Err(ModelError::ImmutableAttribute {
                kind: self.kind,
                name: id.to_string(),
            });
        }
        Ok(())
    }

    /// Text value that must be present.
    pub fn required_text(&self, name: &str) -> Result<String> {
        self.get(name)
            .map(str::to_string)
            .ok_or_else(|| self.missing(name))
    }

    /// Text value, if present.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    /// Numeric value that must be present and parse.
    pub fn required_number<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional_number(name)?
            .ok_or_else(|| self.missing(name))
    }

    /// Numeric value, if present; present values must parse.
    pub fn optional_number<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| ModelError::InvalidValue {
                    name: name.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Decimal amount that must be present, parse and be finite.
    pub fn required_amount(&self, name: &str) -> Result<f64> {
        self.optional_amount(name)?
            .ok_or_else(|| self.missing(name))
    }

    /// Decimal amount, if present. `inf` and `NaN` are rejected.
    pub fn optional_amount(&self, name: &str) -> Result<Option<f64>> {
        match self.optional_number::<f64>(name)? {
            Some(amount) if !amount.is_finite() => Err(ModelError::InvalidValue {
                name: name.to_string(),
                value: self.get(name).unwrap_or_default().to_string(),
                reason: "not a finite number".to_string(),
            }),
            amount => Ok(amount),
        }
    }

    /// Comma-separated list that must be present.
    pub fn required_list(&self, name: &str) -> Result<Vec<String>> {
        self.optional_list(name).ok_or_else(|| self.missing(name))
    }

    /// Comma-separated list, if present. Blank entries are dropped.
    pub fn optional_list(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).map(split_list)
    }

    fn missing(&self, name: &str) -> ModelError {
        ModelError::MissingAttribute {
            kind: self.kind,
            name: name.to_string(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
