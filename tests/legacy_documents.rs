// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use rstest::rstest;
use stratbook::clock::FixedClock;
use stratbook::model::{MapCategory, MediaKind, SequentialIds, Side, REQUIRED_PREMIERE_MAPS};
use stratbook::store::json::parse_document;
use stratbook::store::{
    DirStorage, DocumentStore, KeyValueStore, LoadOutcome, MigrationStep, StoreOptions,
    CORRUPT_BACKUP_KEY, CURRENT_SCHEMA_VERSION, DOCUMENT_KEY,
};

const V0_NO_CATEGORIES: &str = include_str!("fixtures/v0_no_categories.json");
const V1_MISSING_REQUIRED: &str = include_str!("fixtures/v1_missing_required.json");
const V2_CURRENT: &str = include_str!("fixtures/v2_current.json");
const V3_NEWER: &str = include_str!("fixtures/v3_newer.json");
const V3_NEWER_MISSING_REQUIRED: &str = include_str!("fixtures/v3_newer_missing_required.json");

fn options() -> StoreOptions {
    StoreOptions::new()
        .with_ids(SequentialIds::new("fresh"))
        .with_clock(FixedClock(1_720_000_000_000))
}

fn seed_dir(dir: &Path, raw: &str) -> DirStorage {
    let mut storage = DirStorage::new(dir);
    storage.set(DOCUMENT_KEY, raw).expect("seed document");
    storage
}

fn read_document_file(dir: &Path) -> String {
    fs::read_to_string(DirStorage::new(dir).value_path(DOCUMENT_KEY)).expect("document file")
}

#[rstest]
#[case::no_categories(V0_NO_CATEGORIES)]
#[case::missing_required(V1_MISSING_REQUIRED)]
fn legacy_documents_migrate_once_then_load_clean(#[case] raw: &str) {
    let dir = tempfile::tempdir().expect("tempdir");

    let (store, outcome) =
        DocumentStore::load(seed_dir(dir.path(), raw), options()).expect("first load");
    assert!(matches!(outcome, LoadOutcome::Migrated(_)), "{outcome:?}");
    let migrated = store.document().clone();
    drop(store);

    let doc = &migrated;
    for name in REQUIRED_PREMIERE_MAPS {
        let map = doc.map_by_name(name).unwrap_or_else(|| panic!("{name} present"));
        assert_eq!(map.category(), MapCategory::Premiere, "{name}");
    }
    let persisted = parse_document(&read_document_file(dir.path())).expect("json");
    assert_eq!(persisted.schema_version, Some(CURRENT_SCHEMA_VERSION));
    assert!(persisted.maps.iter().all(|m| m.category.is_some()));

    let before_second = read_document_file(dir.path());
    let (reopened, outcome) =
        DocumentStore::load(DirStorage::new(dir.path()), options()).expect("second load");
    assert!(matches!(outcome, LoadOutcome::Loaded), "{outcome:?}");
    assert_eq!(reopened.document(), &migrated);
    assert_eq!(read_document_file(dir.path()), before_second);
}

#[test]
fn earliest_shape_keeps_every_note() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (store, outcome) =
        DocumentStore::load(seed_dir(dir.path(), V0_NO_CATEGORIES), options()).expect("load");

    let LoadOutcome::Migrated(report) = outcome else {
        panic!("expected migration, got {outcome:?}");
    };
    assert_eq!(report.changes_for(MigrationStep::EntityIds), 1);
    assert_eq!(report.changes_for(MigrationStep::MapCategories), 11);

    let doc = store.document();
    let categories: Vec<_> = doc.maps().iter().map(|m| m.category()).collect();
    use MapCategory::{Competitive as C, Premiere as P, Wingman as W};
    assert_eq!(categories, [P, P, P, C, C, C, W, P, P, P, P, P]);
    assert_eq!(doc.maps()[11].name(), "Anubis");

    let dust2 = doc.map_by_name("Dust 2").expect("Dust 2");
    let strategy = &dust2.strategies()[0];
    assert_eq!(strategy.side(), Side::T);
    assert_eq!(strategy.media()[0].kind(), MediaKind::Youtube);
    assert_eq!(strategy.media()[0].youtube_id(), Some("dQw4w9WgXcQ"));

    let utilities = dust2.utilities();
    assert_eq!(utilities.len(), 2);
    assert!(utilities.iter().all(|u| u.side().is_none()));
    assert_eq!(utilities[0].utility_id().as_str(), "e3a4");
    assert!(!utilities[1].utility_id().as_str().is_empty());
    assert_eq!(utilities[1].timestamp(), 1_690_000_000_600);

    assert_eq!(store.current_map().map(|m| m.name()), Some("Dust 2"));
}

#[test]
fn required_map_with_other_category_is_promoted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (store, _) =
        DocumentStore::load(seed_dir(dir.path(), V1_MISSING_REQUIRED), options()).expect("load");
    let doc = store.document();

    assert_eq!(doc.map_by_name("Nuke").expect("Nuke").category(), MapCategory::Premiere);
    let shortdust = doc.map_by_name("Shortdust").expect("Shortdust");
    assert_eq!(shortdust.category(), MapCategory::Wingman);
    assert_eq!(shortdust.utilities()[0].side(), Some(Side::Ct));
    assert_eq!(doc.binds().len(), 1);

    let appended: Vec<_> = doc.maps()[5..].iter().map(|m| m.name()).collect();
    assert_eq!(appended, ["Vertigo", "Ancient", "Anubis", "Train"]);
    assert!(doc.maps()[5..]
        .iter()
        .all(|m| m.strategies().is_empty() && m.image().starts_with("/maps/")));
}

#[test]
fn current_document_is_not_rewritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (store, outcome) =
        DocumentStore::load(seed_dir(dir.path(), V2_CURRENT), options()).expect("load");
    assert!(matches!(outcome, LoadOutcome::Loaded), "{outcome:?}");
    assert_eq!(store.document().maps().len(), 9);
    assert_eq!(read_document_file(dir.path()), V2_CURRENT);
}

#[rstest]
#[case::complete(V3_NEWER)]
#[case::missing_required(V3_NEWER_MISSING_REQUIRED)]
fn newer_document_loads_without_downgrade(#[case] raw: &str) {
    let dir = tempfile::tempdir().expect("tempdir");
    let (store, outcome) =
        DocumentStore::load(seed_dir(dir.path(), raw), options()).expect("load");
    assert!(matches!(outcome, LoadOutcome::Loaded), "{outcome:?}");
    assert_eq!(store.current_map().map(|m| m.name()), Some("Train"));
    for name in REQUIRED_PREMIERE_MAPS {
        assert!(store.document().map_by_name(name).is_some(), "{name} present");
    }

    let on_disk = read_document_file(dir.path());
    assert_eq!(on_disk, raw);
    let persisted = parse_document(&on_disk).expect("json");
    assert_eq!(persisted.schema_version, Some(CURRENT_SCHEMA_VERSION + 1));
}

#[test]
fn corrupt_file_is_backed_up_and_reseeded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (store, outcome) =
        DocumentStore::load(seed_dir(dir.path(), "{\"maps\": ["), options()).expect("load");
    assert!(matches!(outcome, LoadOutcome::Recovered { .. }), "{outcome:?}");
    assert_eq!(store.document().maps().len(), 9);
    assert_eq!(
        store.storage().get(CORRUPT_BACKUP_KEY).expect("get").as_deref(),
        Some("{\"maps\": [")
    );

    let (_, outcome) =
        DocumentStore::load(DirStorage::new(dir.path()), options()).expect("reload");
    assert!(matches!(outcome, LoadOutcome::Loaded), "{outcome:?}");
}
