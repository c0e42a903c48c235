// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A document holds maps; each map owns its strategies and utility lineups, which in turn own
//! their media. Binds are a flat reference list next to the maps.

pub mod bind;
pub mod document;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod map;
pub mod media;
pub mod seed;
pub mod strategy;
pub mod utility;

pub use bind::{default_binds, Bind, BindCategory, ParseBindCategoryError};
pub use document::AppDocument;
pub use ids::{
    is_valid_id, BindId, Id, IdError, IdSource, MapId, MediaId, SequentialIds, StrategyId,
    UtilityId, UuidSource,
};
pub use map::{GameMap, MapCategory, NewMap, ParseMapCategoryError};
pub use media::{
    youtube_embed_url, youtube_video_id, MediaItem, MediaKind, NewMedia, ParseMediaKindError,
};
pub use seed::{
    conventional_image_path, default_document, SeedMap, DEFAULT_SEED, REQUIRED_PREMIERE_MAPS,
};
pub use strategy::{NewStrategy, ParseSideError, Side, Strategy};
pub use utility::{NewUtility, ParseUtilityKindError, Utility, UtilityKind};
