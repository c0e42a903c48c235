// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use uuid::Uuid;

/// A stable identifier for one entity of the document.
///
/// Ids are opaque strings (UUIDs in practice, but documents written by older builds may
/// carry anything). The only structural rule is that an id is never empty, since the
/// empty string is how older documents encode "no id yet".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_id(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Draws a fresh id from `source`.
    pub fn fresh(source: &mut dyn IdSource) -> Result<Self, IdError> {
        Self::new(source.next_id())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
    #[error("id must not contain control characters")]
    ControlCharacter,
}

/// Whether `value` would be accepted by [`Id::new`].
pub fn is_valid_id(value: &str) -> bool {
    validate_id(value).is_ok()
}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(char::is_control) {
        return Err(IdError::ControlCharacter);
    }
    Ok(())
}

/// Produces raw id strings for newly created entities.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs; the production id source.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids (`<prefix>-1`, `<prefix>-2`, ...) for tests, benches and fixtures.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapIdTag {}
pub type MapId = Id<MapIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyIdTag {}
pub type StrategyId = Id<StrategyIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UtilityIdTag {}
pub type UtilityId = Id<UtilityIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaIdTag {}
pub type MediaId = Id<MediaIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BindIdTag {}
pub type BindId = Id<BindIdTag>;

#[cfg(test)]
mod tests {
    use super::{Id, IdError, IdSource, MapId, SequentialIds, UuidSource};

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_control_characters() {
        let result: Result<Id<()>, _> = Id::new("a\nb");
        assert_eq!(result, Err(IdError::ControlCharacter));
    }

    #[test]
    fn sequential_ids_count_up_from_one() {
        let mut ids = SequentialIds::new("map");
        assert_eq!(ids.next_id(), "map-1");
        assert_eq!(ids.next_id(), "map-2");
    }

    #[test]
    fn uuid_source_yields_distinct_valid_ids() {
        let mut source = UuidSource;
        let a = MapId::fresh(&mut source).expect("uuid id");
        let b = MapId::fresh(&mut source).expect("uuid id");
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }
}
