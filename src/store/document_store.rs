// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The persisted application document and its mutation surface.
//!
//! A [`DocumentStore`] owns the in-memory [`AppDocument`] for a session. Every mutation is applied
//! to a copy, the copy is written to storage as one value, and only then does it replace the
//! in-memory document. A failed write therefore leaves memory equal to what storage holds.

use std::fmt;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::model::{
    default_document, AppDocument, GameMap, IdError, IdSource, MapId, MediaId, MediaItem, NewMap,
    NewMedia, NewStrategy, NewUtility, Strategy, StrategyId, Utility, UtilityId, UuidSource,
};
use crate::ops::{apply_ops, Applied, ApplyError, ApplyResult, DocOp};

use super::backend::{KeyValueStore, StorageError};
use super::json::{document_from_json, encode_document, parse_document, CURRENT_SCHEMA_VERSION};
use super::migrate::{migrate, MigrationConfig, MigrationReport};

/// Storage key the document lives under.
pub const DOCUMENT_KEY: &str = "cs2-strategy-app-data";

/// Where an unreadable document is copied before defaults replace it.
pub const CORRUPT_BACKUP_KEY: &str = "cs2-strategy-app-data.corrupt";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored value under {key:?} is not valid document json: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid id in {field} ({value:?}): {source}")]
    InvalidId {
        field: &'static str,
        value: String,
        #[source]
        source: IdError,
    },
    #[error("map {map_id} has no valid category (found {value:?})")]
    InvalidCategory {
        map_id: MapId,
        value: Option<String>,
    },
    #[error("id source produced an unusable id: {0}")]
    FreshId(#[from] IdError),
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// Collaborators injected into a [`DocumentStore`].
pub struct StoreOptions {
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    migration: MigrationConfig,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            ids: Box::new(UuidSource),
            clock: Box::new(SystemClock),
            migration: MigrationConfig::default(),
        }
    }
}

impl fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreOptions")
            .field("migration", &self.migration)
            .finish_non_exhaustive()
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_migration(mut self, migration: MigrationConfig) -> Self {
        self.migration = migration;
        self
    }

    pub fn migration(&self) -> &MigrationConfig {
        &self.migration
    }
}

/// How [`DocumentStore::load`] arrived at the current document.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing was stored; the default document was written.
    Seeded,
    /// The stored document was already current and was not rewritten.
    Loaded,
    /// The stored document was normalized and written back once.
    Migrated(MigrationReport),
    /// The stored value could not be read. It was copied to [`CORRUPT_BACKUP_KEY`] and the
    /// default document was written in its place.
    Recovered { error: StoreError },
}

pub struct DocumentStore<S> {
    storage: S,
    options: StoreOptions,
    document: AppDocument,
}

impl<S: fmt::Debug> fmt::Debug for DocumentStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("storage", &self.storage)
            .field("options", &self.options)
            .field("document", &self.document)
            .finish()
    }
}

impl<S: KeyValueStore> DocumentStore<S> {
    /// Opens the document stored in `storage`, seeding or migrating it as needed.
    ///
    /// Only storage failures are returned as errors. An unreadable stored value is reported
    /// through [`LoadOutcome::Recovered`] so the caller still gets a usable store.
    pub fn load(storage: S, options: StoreOptions) -> Result<(Self, LoadOutcome), StoreError> {
        let mut store = Self {
            storage,
            options,
            document: AppDocument::default(),
        };
        let outcome = store.reload()?;
        Ok((store, outcome))
    }

    /// Re-reads the document from storage, replacing the in-memory copy.
    pub fn reload(&mut self) -> Result<LoadOutcome, StoreError> {
        let Some(raw) = self.storage.get(DOCUMENT_KEY)? else {
            self.seed()?;
            info!(maps = self.document.maps().len(), "seeded default document");
            return Ok(LoadOutcome::Seeded);
        };

        match self.decode(&raw) {
            Ok((document, report)) if report.from_version > Some(CURRENT_SCHEMA_VERSION) => {
                self.document = document;
                debug!(
                    from_version = ?report.from_version,
                    steps = report.steps.len(),
                    "loaded newer document without rewriting it"
                );
                Ok(LoadOutcome::Loaded)
            }
            Ok((document, report)) if report.changed() => {
                self.write(&document)?;
                self.document = document;
                info!(
                    from_version = ?report.from_version,
                    steps = report.steps.len(),
                    "migrated stored document"
                );
                Ok(LoadOutcome::Migrated(report))
            }
            Ok((document, _)) => {
                self.document = document;
                debug!(maps = self.document.maps().len(), "loaded stored document");
                Ok(LoadOutcome::Loaded)
            }
            Err(error) => {
                let backup = self.free_backup_key()?;
                warn!(%error, %backup, "stored document is unreadable, reseeding");
                self.storage.set(&backup, &raw)?;
                self.seed()?;
                Ok(LoadOutcome::Recovered { error })
            }
        }
    }

    /// First unused backup key: the bare key, then `.1`, `.2` and so on.
    fn free_backup_key(&self) -> Result<String, StoreError> {
        if self.storage.get(CORRUPT_BACKUP_KEY)?.is_none() {
            return Ok(CORRUPT_BACKUP_KEY.to_owned());
        }
        let mut n = 1u32;
        loop {
            let key = format!("{CORRUPT_BACKUP_KEY}.{n}");
            if self.storage.get(&key)?.is_none() {
                return Ok(key);
            }
            n += 1;
        }
    }

    fn decode(&mut self, raw: &str) -> Result<(AppDocument, MigrationReport), StoreError> {
        let parsed = parse_document(raw).map_err(|source| StoreError::Corrupt {
            key: DOCUMENT_KEY,
            source,
        })?;
        let migrated = migrate(parsed, &self.options.migration, self.options.ids.as_mut());
        let document = document_from_json(migrated.document)?;
        Ok((document, migrated.report))
    }

    fn seed(&mut self) -> Result<(), StoreError> {
        let document = default_document(self.options.ids.as_mut())?;
        self.write(&document)?;
        self.document = document;
        Ok(())
    }

    fn write(&mut self, document: &AppDocument) -> Result<(), StoreError> {
        let raw = encode_document(document)?;
        self.storage.set(DOCUMENT_KEY, &raw)?;
        Ok(())
    }

    /// Applies `ops` as one batch and persists the result.
    ///
    /// Ops that reference a missing entity change nothing; the document is still rewritten and
    /// the misses are listed in the returned delta.
    pub fn apply(&mut self, ops: &[DocOp]) -> Result<ApplyResult, StoreError> {
        let Applied { document, result } = apply_ops(&self.document, ops)?;
        for entity in &result.delta.missed {
            debug!(%entity, "operation matched nothing; document unchanged");
        }
        self.write(&document)?;
        self.document = document;
        Ok(result)
    }

    pub fn document(&self) -> &AppDocument {
        &self.document
    }

    /// The selected map, or `None` when nothing is selected or the selection is dangling.
    pub fn current_map(&self) -> Option<&GameMap> {
        self.document.current_map()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn add_map(&mut self, map: NewMap) -> Result<GameMap, StoreError> {
        let map = GameMap::new(
            MapId::fresh(self.options.ids.as_mut())?,
            map.name,
            map.image,
            map.category,
        );
        self.apply(&[DocOp::AddMap { map: map.clone() }])?;
        Ok(map)
    }

    pub fn update_map_image(
        &mut self,
        map_id: &MapId,
        image: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.apply(&[DocOp::SetMapImage {
            map_id: map_id.clone(),
            image: image.into(),
        }])?;
        Ok(())
    }

    /// Creates a strategy on `map_id`.
    ///
    /// The constructed strategy is returned even when `map_id` matches no map, in which case it
    /// was not inserted.
    pub fn add_strategy(
        &mut self,
        map_id: &MapId,
        strategy: NewStrategy,
    ) -> Result<Strategy, StoreError> {
        let timestamp = self.options.clock.now_millis();
        let mut created = Strategy::new(
            StrategyId::fresh(self.options.ids.as_mut())?,
            strategy.title,
            strategy.description,
            strategy.side,
            timestamp,
        );
        *created.media_mut() = self.materialize_media(strategy.media, timestamp)?;

        self.apply(&[DocOp::AddStrategy {
            map_id: map_id.clone(),
            strategy: created.clone(),
        }])?;
        Ok(created)
    }

    /// Creates a utility lineup on `map_id`; same miss behavior as [`Self::add_strategy`].
    pub fn add_utility(
        &mut self,
        map_id: &MapId,
        utility: NewUtility,
    ) -> Result<Utility, StoreError> {
        let timestamp = self.options.clock.now_millis();
        let mut created = Utility::new(
            UtilityId::fresh(self.options.ids.as_mut())?,
            utility.kind,
            utility.title,
            utility.description,
            utility.side,
            timestamp,
        );
        *created.media_mut() = self.materialize_media(utility.media, timestamp)?;

        self.apply(&[DocOp::AddUtility {
            map_id: map_id.clone(),
            utility: created.clone(),
        }])?;
        Ok(created)
    }

    pub fn delete_strategy(
        &mut self,
        map_id: &MapId,
        strategy_id: &StrategyId,
    ) -> Result<(), StoreError> {
        self.apply(&[DocOp::RemoveStrategy {
            map_id: map_id.clone(),
            strategy_id: strategy_id.clone(),
        }])?;
        Ok(())
    }

    pub fn delete_utility(
        &mut self,
        map_id: &MapId,
        utility_id: &UtilityId,
    ) -> Result<(), StoreError> {
        self.apply(&[DocOp::RemoveUtility {
            map_id: map_id.clone(),
            utility_id: utility_id.clone(),
        }])?;
        Ok(())
    }

    pub fn set_current_map(&mut self, map_id: Option<MapId>) -> Result<(), StoreError> {
        self.apply(&[DocOp::SetCurrentMap { map_id }])?;
        Ok(())
    }

    fn materialize_media(
        &mut self,
        media: Vec<NewMedia>,
        timestamp: u64,
    ) -> Result<Vec<MediaItem>, StoreError> {
        media
            .into_iter()
            .map(|item| {
                let media_id = MediaId::fresh(self.options.ids.as_mut())?;
                Ok(item.into_item(media_id, timestamp))
            })
            .collect()
    }
}
