// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Normalization of stored documents written by older builds.
//!
//! Migration runs on the lenient wire shape before anything is converted into the model. Each
//! step checks for the old shape it repairs and is a no-op on a normalized document, so the
//! whole pass is idempotent and safe to run on every load.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::{
    conventional_image_path, is_valid_id, IdSource, MapCategory, REQUIRED_PREMIERE_MAPS,
};

use super::json::{DocumentJson, MapJson, CURRENT_SCHEMA_VERSION};

/// Knobs for the category backfill and the required-map pool.
///
/// The category backfill hands out categories by position: the first `premiere_slots` maps
/// become premiere, the next `competitive_slots` competitive, and the rest wingman.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    pub premiere_slots: usize,
    pub competitive_slots: usize,
    pub required_premiere_maps: Vec<String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            premiere_slots: 3,
            competitive_slots: 3,
            required_premiere_maps: REQUIRED_PREMIERE_MAPS
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
        }
    }
}

impl MigrationConfig {
    pub fn category_for_index(&self, index: usize) -> MapCategory {
        if index < self.premiere_slots {
            MapCategory::Premiere
        } else if index < self.premiere_slots.saturating_add(self.competitive_slots) {
            MapCategory::Competitive
        } else {
            MapCategory::Wingman
        }
    }

    fn is_required(&self, name: &str) -> bool {
        self.required_premiere_maps.iter().any(|n| n == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStep {
    /// Entities stored without a usable id get a fresh one.
    EntityIds,
    /// Maps stored without a recognised category get one by position.
    MapCategories,
    /// The required pool is appended if missing and forced into premiere.
    RequiredPremiereMaps,
    /// The document is stamped with the current schema version.
    SchemaVersion,
}

impl MigrationStep {
    pub fn name(self) -> &'static str {
        match self {
            Self::EntityIds => "entity_ids",
            Self::MapCategories => "map_categories",
            Self::RequiredPremiereMaps => "required_premiere_maps",
            Self::SchemaVersion => "schema_version",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub step: MigrationStep,
    pub changes: usize,
}

/// What a migration pass changed; empty `steps` means the document was already current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub from_version: Option<u32>,
    pub steps: Vec<StepReport>,
}

impl MigrationReport {
    pub fn changed(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn changes_for(&self, step: MigrationStep) -> usize {
        self.steps
            .iter()
            .filter(|s| s.step == step)
            .map(|s| s.changes)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migrated {
    pub document: DocumentJson,
    pub report: MigrationReport,
}

/// Brings `document` up to the current shape.
///
/// Steps run in a fixed order: ids, then categories, then the required pool. The required-pool
/// step relies on every map already having a category to compare against.
pub fn migrate(
    mut document: DocumentJson,
    config: &MigrationConfig,
    ids: &mut dyn IdSource,
) -> Migrated {
    let from_version = document.schema_version;
    let mut steps = Vec::new();

    let mut run = |step: MigrationStep, changes: usize| {
        if changes > 0 {
            info!(step = step.name(), changes, "applied document migration step");
            steps.push(StepReport { step, changes });
        }
    };

    run(
        MigrationStep::EntityIds,
        backfill_entity_ids(&mut document, ids),
    );
    run(
        MigrationStep::MapCategories,
        backfill_map_categories(&mut document, config),
    );
    run(
        MigrationStep::RequiredPremiereMaps,
        backfill_required_maps(&mut document, config, ids),
    );

    match document.schema_version {
        Some(version) if version > CURRENT_SCHEMA_VERSION => {
            warn!(
                version,
                current = CURRENT_SCHEMA_VERSION,
                "document was written by a newer build; keeping its schema version"
            );
        }
        Some(CURRENT_SCHEMA_VERSION) => {}
        _ => {
            document.schema_version = Some(CURRENT_SCHEMA_VERSION);
            run(MigrationStep::SchemaVersion, 1);
        }
    }

    Migrated {
        document,
        report: MigrationReport {
            from_version,
            steps,
        },
    }
}

fn ensure_id(id: &mut String, ids: &mut dyn IdSource) -> usize {
    if is_valid_id(id) {
        return 0;
    }
    *id = ids.next_id();
    1
}

fn backfill_entity_ids(document: &mut DocumentJson, ids: &mut dyn IdSource) -> usize {
    let mut changes = 0;

    for map in &mut document.maps {
        changes += ensure_id(&mut map.id, ids);
        for strategy in &mut map.strategies {
            changes += ensure_id(&mut strategy.id, ids);
            for media in &mut strategy.media {
                changes += ensure_id(&mut media.id, ids);
            }
        }
        for utility in &mut map.utilities {
            changes += ensure_id(&mut utility.id, ids);
            for media in &mut utility.media {
                changes += ensure_id(&mut media.id, ids);
            }
        }
    }

    for bind in &mut document.binds {
        changes += ensure_id(&mut bind.id, ids);
    }

    if document
        .current_map
        .as_deref()
        .is_some_and(|id| !is_valid_id(id))
    {
        document.current_map = None;
        changes += 1;
    }

    changes
}

fn has_valid_category(map: &MapJson) -> bool {
    map.category
        .as_deref()
        .is_some_and(|c| c.parse::<MapCategory>().is_ok())
}

fn backfill_map_categories(document: &mut DocumentJson, config: &MigrationConfig) -> usize {
    let mut changes = 0;
    for (index, map) in document.maps.iter_mut().enumerate() {
        if has_valid_category(map) {
            continue;
        }
        map.category = Some(config.category_for_index(index).as_str().to_owned());
        changes += 1;
    }
    changes
}

fn backfill_required_maps(
    document: &mut DocumentJson,
    config: &MigrationConfig,
    ids: &mut dyn IdSource,
) -> usize {
    let premiere = MapCategory::Premiere.as_str();
    let mut changes = 0;

    for map in &mut document.maps {
        if config.is_required(&map.name) && map.category.as_deref() != Some(premiere) {
            map.category = Some(premiere.to_owned());
            changes += 1;
        }
    }

    for name in &config.required_premiere_maps {
        if document.maps.iter().any(|m| &m.name == name) {
            continue;
        }
        document.maps.push(MapJson {
            id: ids.next_id(),
            name: name.clone(),
            image: conventional_image_path(name),
            category: Some(premiere.to_owned()),
            strategies: Vec::new(),
            utilities: Vec::new(),
        });
        changes += 1;
    }

    changes
}
