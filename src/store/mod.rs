// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the application document.
//!
//! The store module owns the key-value backends, the JSON wire shape of the document, the
//! migration pass applied on load, and the [`DocumentStore`] that ties them together.

pub mod backend;
pub mod document_store;
pub mod json;
pub mod migrate;

pub use backend::{DirStorage, KeyValueStore, MemoryStorage, StorageError, WriteDurability};
pub use document_store::{
    DocumentStore, LoadOutcome, StoreError, StoreOptions, CORRUPT_BACKUP_KEY, DOCUMENT_KEY,
};
pub use json::{DocumentJson, CURRENT_SCHEMA_VERSION};
pub use migrate::{migrate, MigrationConfig, MigrationReport, MigrationStep, Migrated, StepReport};
