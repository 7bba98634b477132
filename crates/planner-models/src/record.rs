//! The `Record` trait shared by all six entity kinds.

use std::borrow::Borrow;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::kind::EntityKind;

/// A persisted entity with a caller-supplied primary identifier.
///
/// `Display` renders the record on one line for operators.
pub trait Record: Clone + fmt::Debug + fmt::Display + Serialize + DeserializeOwned {
    /// Primary identifier type.
    type Id: Clone
        + Ord
        + fmt::Debug
        + fmt::Display
        + Serialize
        + DeserializeOwned
        + From<String>
        + Borrow<str>;

    /// Partial update with one optional field per non-identifier attribute.
    type Patch: Default + fmt::Debug;

    /// Which kind of record this is.
    const KIND: EntityKind;

    /// Returns the primary identifier.
    fn id(&self) -> &Self::Id;

    /// Overwrites exactly the fields set in `patch`.
    fn apply(&mut self, patch: Self::Patch);

    /// Builds a record from text attributes; every attribute is required.
    fn from_attributes(attrs: &Attributes) -> Result<Self>;

    /// Builds a patch from text attributes; the identifier may not appear.
    fn patch_from_attributes(attrs: &Attributes) -> Result<Self::Patch>;
}
