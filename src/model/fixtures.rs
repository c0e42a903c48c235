// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::document::AppDocument;
use super::ids::{MapId, MediaId, StrategyId, UtilityId};
use super::map::{GameMap, MapCategory};
use super::media::{MediaItem, MediaKind};
use super::strategy::{Side, Strategy};
use super::utility::{Utility, UtilityKind};

pub(crate) fn map_id(value: &str) -> MapId {
    MapId::new(value).expect("map id")
}

pub(crate) fn strategy_id(value: &str) -> StrategyId {
    StrategyId::new(value).expect("strategy id")
}

pub(crate) fn utility_id(value: &str) -> UtilityId {
    UtilityId::new(value).expect("utility id")
}

/// Two premiere maps and a wingman map; Mirage carries one strategy and two lineups.
pub(crate) fn small_document() -> AppDocument {
    let mut mirage = GameMap::new(
        map_id("m:mirage"),
        "Mirage",
        "/maps/mirage.jpg",
        MapCategory::Premiere,
    );

    let mut a_exec = Strategy::new(
        strategy_id("s:a-exec"),
        "A execute",
        "Smoke CT, jungle and stairs, then flash over.",
        Side::T,
        1_700_000_000_000,
    );
    a_exec.media_mut().push(MediaItem::new(
        MediaId::new("md:a-exec").expect("media id"),
        MediaKind::Youtube,
        "https://youtu.be/dQw4w9WgXcQ",
        "Full execute",
        "",
        1_700_000_000_000,
    ));
    mirage.strategies_mut().push(a_exec);

    mirage.utilities_mut().push(Utility::new(
        utility_id("u:window"),
        UtilityKind::Smoke,
        "Window smoke",
        "From T spawn, aim at the antenna.",
        Some(Side::T),
        1_700_000_000_100,
    ));
    mirage.utilities_mut().push(Utility::new(
        utility_id("u:legacy-flash"),
        UtilityKind::Flash,
        "Connector pop flash",
        "Saved before lineups had a side.",
        None,
        1_600_000_000_000,
    ));

    let inferno = GameMap::new(
        map_id("m:inferno"),
        "Inferno",
        "/maps/inferno.jpg",
        MapCategory::Premiere,
    );
    let shortdust = GameMap::new(
        map_id("m:shortdust"),
        "Shortdust",
        "/maps/shortdust.jpg",
        MapCategory::Wingman,
    );

    AppDocument::new(vec![mirage, inferno, shortdust], None, Vec::new())
}
