// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{AppDocument, GameMap, MapCategory, Side, Strategy, Utility, UtilityKind};

pub fn maps_in_category(
    document: &AppDocument,
    category: MapCategory,
) -> impl Iterator<Item = &GameMap> + '_ {
    document
        .maps()
        .iter()
        .filter(move |map| map.category() == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: MapCategory,
    pub maps: usize,
}

/// Totals for the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub maps: usize,
    pub strategies: usize,
    pub utilities: usize,
    pub by_category: Vec<CategoryCount>,
}

pub fn overview(document: &AppDocument) -> Overview {
    let maps = document.maps();
    Overview {
        maps: maps.len(),
        strategies: maps.iter().map(|m| m.strategies().len()).sum(),
        utilities: maps.iter().map(|m| m.utilities().len()).sum(),
        by_category: MapCategory::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                maps: maps.iter().filter(|m| m.category() == category).count(),
            })
            .collect(),
    }
}

pub fn strategies_for_side(map: &GameMap, side: Side) -> impl Iterator<Item = &Strategy> + '_ {
    map.strategies()
        .iter()
        .filter(move |strategy| strategy.side() == side)
}

/// Lineups of `kind` on `map`.
///
/// With a side filter, lineups saved without a side are left out.
pub fn utilities_for(
    map: &GameMap,
    kind: UtilityKind,
    side: Option<Side>,
) -> impl Iterator<Item = &Utility> + '_ {
    map.utilities().iter().filter(move |utility| {
        utility.kind() == kind && side.map_or(true, |side| utility.side() == Some(side))
    })
}

#[cfg(test)]
mod tests {
    use super::{maps_in_category, overview, strategies_for_side, utilities_for};
    use crate::model::fixtures::{map_id, small_document};
    use crate::model::{MapCategory, Side, UtilityKind};

    #[test]
    fn maps_are_listed_per_category_in_document_order() {
        let doc = small_document();
        let premiere: Vec<_> = maps_in_category(&doc, MapCategory::Premiere)
            .map(|m| m.name())
            .collect();
        assert_eq!(premiere, ["Mirage", "Inferno"]);
        assert_eq!(maps_in_category(&doc, MapCategory::Competitive).count(), 0);
    }

    #[test]
    fn overview_counts_everything() {
        let totals = overview(&small_document());
        assert_eq!(totals.maps, 3);
        assert_eq!(totals.strategies, 1);
        assert_eq!(totals.utilities, 2);
        let counts: Vec<_> = totals.by_category.iter().map(|c| c.maps).collect();
        assert_eq!(counts, [2, 0, 1]);
    }

    #[test]
    fn strategies_filter_by_side() {
        let doc = small_document();
        let mirage = doc.map(&map_id("m:mirage")).unwrap();
        assert_eq!(strategies_for_side(mirage, Side::T).count(), 1);
        assert_eq!(strategies_for_side(mirage, Side::Ct).count(), 0);
    }

    #[test]
    fn side_filter_excludes_lineups_without_side() {
        let doc = small_document();
        let mirage = doc.map(&map_id("m:mirage")).unwrap();

        assert_eq!(utilities_for(mirage, UtilityKind::Flash, None).count(), 1);
        assert_eq!(
            utilities_for(mirage, UtilityKind::Flash, Some(Side::T)).count(),
            0
        );
        let smokes: Vec<_> = utilities_for(mirage, UtilityKind::Smoke, Some(Side::T))
            .map(|u| u.title())
            .collect();
        assert_eq!(smokes, ["Window smoke"]);
    }
}
