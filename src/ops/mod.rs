// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations over the document.
//!
//! Operations are applied to a copy of the document and hand back the new value together with
//! a minimal delta, so callers can persist the result before making it current.
//!
//! An operation that names a map, strategy or utility that does not exist is a no-op. It is
//! reported in [`Delta::missed`] rather than failing the batch.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{AppDocument, GameMap, MapId, Strategy, StrategyId, Utility, UtilityId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocOp {
    AddMap {
        map: GameMap,
    },
    SetMapImage {
        map_id: MapId,
        image: String,
    },
    AddStrategy {
        map_id: MapId,
        strategy: Strategy,
    },
    RemoveStrategy {
        map_id: MapId,
        strategy_id: StrategyId,
    },
    AddUtility {
        map_id: MapId,
        utility: Utility,
    },
    RemoveUtility {
        map_id: MapId,
        utility_id: UtilityId,
    },
    SetCurrentMap {
        map_id: Option<MapId>,
    },
}

/// Points at one entity of the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityRef {
    Map(MapId),
    Strategy {
        map_id: MapId,
        strategy_id: StrategyId,
    },
    Utility {
        map_id: MapId,
        utility_id: UtilityId,
    },
    CurrentMap,
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(map_id) => write!(f, "map {map_id}"),
            Self::Strategy {
                map_id,
                strategy_id,
            } => write!(f, "strategy {strategy_id} on map {map_id}"),
            Self::Utility { map_id, utility_id } => {
                write!(f, "utility {utility_id} on map {map_id}")
            }
            Self::CurrentMap => f.write_str("current map"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub applied: usize,
    pub delta: Delta,
}

/// Which entities an op batch touched.
///
/// `missed` lists references that matched nothing; those ops left the document untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<EntityRef>,
    pub removed: Vec<EntityRef>,
    pub updated: Vec<EntityRef>,
    pub missed: Vec<EntityRef>,
}

impl Delta {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<EntityRef>,
    removed: BTreeSet<EntityRef>,
    updated: BTreeSet<EntityRef>,
    missed: BTreeSet<EntityRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, entity: EntityRef) {
        self.removed.remove(&entity);
        self.updated.remove(&entity);
        self.added.insert(entity);
    }

    fn record_removed(&mut self, entity: EntityRef) {
        if self.added.remove(&entity) {
            return;
        }
        self.updated.remove(&entity);
        self.removed.insert(entity);
    }

    fn record_updated(&mut self, entity: EntityRef) {
        if self.added.contains(&entity) || self.removed.contains(&entity) {
            return;
        }
        self.updated.insert(entity);
    }

    fn record_missed(&mut self, entity: EntityRef) {
        self.missed.insert(entity);
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
            missed: self.missed.into_iter().collect(),
        }
    }
}

/// The document after a successful op batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub document: AppDocument,
    pub result: ApplyResult,
}

/// Applies `ops` in order to a copy of `document`.
///
/// Either every op applies and the new document is returned, or the first failing op aborts
/// the batch and `document` is the only state there is.
pub fn apply_ops(document: &AppDocument, ops: &[DocOp]) -> Result<Applied, ApplyError> {
    let mut next = document.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        apply_op(&mut next, op, &mut delta)?;
    }

    Ok(Applied {
        document: next,
        result: ApplyResult {
            applied: ops.len(),
            delta: delta.finish(),
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Map,
    Strategy,
    Utility,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("{kind:?} already exists (id={id})")]
    AlreadyExists { kind: EntityKind, id: String },
}

// Extracted op-application implementation for map/strategy/utility mutations.
include!("ops_impl.rs");
