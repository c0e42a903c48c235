// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::bind::Bind;
use super::ids::MapId;
use super::map::GameMap;

/// The single persisted root: every map, the selected-map pointer and the bind list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppDocument {
    maps: Vec<GameMap>,
    current_map_id: Option<MapId>,
    binds: Vec<Bind>,
}

impl AppDocument {
    pub fn new(maps: Vec<GameMap>, current_map_id: Option<MapId>, binds: Vec<Bind>) -> Self {
        Self {
            maps,
            current_map_id,
            binds,
        }
    }

    /// Maps in display order.
    pub fn maps(&self) -> &[GameMap] {
        &self.maps
    }

    pub fn maps_mut(&mut self) -> &mut Vec<GameMap> {
        &mut self.maps
    }

    pub fn map(&self, map_id: &MapId) -> Option<&GameMap> {
        self.maps.iter().find(|m| m.map_id() == map_id)
    }

    pub fn map_mut(&mut self, map_id: &MapId) -> Option<&mut GameMap> {
        self.maps.iter_mut().find(|m| m.map_id() == map_id)
    }

    pub fn map_by_name(&self, name: &str) -> Option<&GameMap> {
        self.maps.iter().find(|m| m.name() == name)
    }

    pub fn current_map_id(&self) -> Option<&MapId> {
        self.current_map_id.as_ref()
    }

    pub fn set_current_map_id(&mut self, map_id: Option<MapId>) {
        self.current_map_id = map_id;
    }

    /// Resolves the selected map; a pointer to a map that no longer exists yields `None`.
    pub fn current_map(&self) -> Option<&GameMap> {
        self.current_map_id.as_ref().and_then(|id| self.map(id))
    }

    pub fn binds(&self) -> &[Bind] {
        &self.binds
    }

    pub fn binds_mut(&mut self) -> &mut Vec<Bind> {
        &mut self.binds
    }
}

#[cfg(test)]
mod tests {
    use super::AppDocument;
    use crate::model::{GameMap, MapCategory, MapId};

    #[test]
    fn dangling_current_map_resolves_to_none() {
        let map_id = MapId::new("m1").unwrap();
        let mut doc = AppDocument::new(
            vec![GameMap::new(map_id.clone(), "Nuke", "/maps/nuke.jpg", MapCategory::Premiere)],
            None,
            Vec::new(),
        );

        doc.set_current_map_id(Some(map_id));
        assert_eq!(doc.current_map().map(GameMap::name), Some("Nuke"));

        doc.set_current_map_id(Some(MapId::new("gone").unwrap()));
        assert!(doc.current_map().is_none());
        assert_eq!(doc.current_map_id().map(MapId::as_str), Some("gone"));
    }
}
