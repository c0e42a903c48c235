// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The built-in starting content of a fresh document.

use super::document::AppDocument;
use super::ids::{IdError, IdSource, MapId};
use super::map::{GameMap, MapCategory};

/// One entry of the default map list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedMap {
    pub name: &'static str,
    pub image: &'static str,
    pub category: MapCategory,
}

const fn seed(name: &'static str, image: &'static str, category: MapCategory) -> SeedMap {
    SeedMap {
        name,
        image,
        category,
    }
}

/// Maps a first launch starts with, in display order.
pub const DEFAULT_SEED: [SeedMap; 9] = [
    seed("Dust 2", "/lovable-uploads/d262f5fe-74d7-42ca-b3a7-a07061679a9a.png", MapCategory::Premiere),
    seed("Inferno", "/lovable-uploads/29cd029e-a586-403b-9e50-61422d488396.png", MapCategory::Premiere),
    seed("Mirage", "/lovable-uploads/513e70ad-7ebf-4281-ba31-37c102bcd501.png", MapCategory::Premiere),
    seed("Nuke", "/lovable-uploads/e5756cf7-b358-4037-8348-f536f05f3c22.png", MapCategory::Premiere),
    seed("Vertigo", "/lovable-uploads/c5c84b99-c95f-4fe4-aef2-01c45a6303e3.png", MapCategory::Premiere),
    seed("Ancient", "/lovable-uploads/9dd16682-ea66-4428-ad83-b9b861a8d03a.png", MapCategory::Premiere),
    seed("Anubis", "/lovable-uploads/334913be-b293-4e17-b31f-4af9d214ceb1.png", MapCategory::Premiere),
    seed("Train", "/lovable-uploads/f605a2dd-dee5-4015-95db-9bb28ce22dd2.png", MapCategory::Premiere),
    seed("Overpass", "/maps/overpass.jpg", MapCategory::Competitive),
];

/// Core pool that every document must contain, always in the premiere category.
pub const REQUIRED_PREMIERE_MAPS: [&str; 8] = [
    "Dust 2", "Inferno", "Mirage", "Nuke", "Vertigo", "Ancient", "Anubis", "Train",
];

/// Conventional bundled image path for a map name: `Dust 2` -> `/maps/dust2.jpg`.
pub fn conventional_image_path(name: &str) -> String {
    let stem: String = name
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect();
    format!("/maps/{stem}.jpg")
}

/// Builds the default document: the seed maps, no selection, no binds.
pub fn default_document(ids: &mut dyn IdSource) -> Result<AppDocument, IdError> {
    let maps = DEFAULT_SEED
        .iter()
        .map(|entry| {
            Ok(GameMap::new(
                MapId::fresh(ids)?,
                entry.name,
                entry.image,
                entry.category,
            ))
        })
        .collect::<Result<Vec<_>, IdError>>()?;

    Ok(AppDocument::new(maps, None, Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::{conventional_image_path, default_document, DEFAULT_SEED};
    use crate::model::{MapCategory, SequentialIds};

    #[test]
    fn conventional_image_path_strips_spaces_and_lowercases() {
        assert_eq!(conventional_image_path("Dust 2"), "/maps/dust2.jpg");
        assert_eq!(conventional_image_path("Anubis"), "/maps/anubis.jpg");
    }

    #[test]
    fn default_document_follows_seed_order() {
        let doc = default_document(&mut SequentialIds::new("map")).expect("seed");
        let names: Vec<_> = doc.maps().iter().map(|m| m.name()).collect();
        let expected: Vec<_> = DEFAULT_SEED.iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
        assert_eq!(doc.maps()[8].category(), MapCategory::Competitive);
        assert!(doc.current_map_id().is_none());
        assert!(doc.binds().is_empty());
        assert!(doc
            .maps()
            .iter()
            .all(|m| m.strategies().is_empty() && m.utilities().is_empty()));
    }
}
