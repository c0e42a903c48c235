// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::{MapId, StrategyId, UtilityId};
use super::strategy::Strategy;
use super::utility::Utility;

/// Matchmaking pool a map belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapCategory {
    Premiere,
    Competitive,
    Wingman,
}

impl MapCategory {
    pub const ALL: [Self; 3] = [Self::Premiere, Self::Competitive, Self::Wingman];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Premiere => "premiere",
            Self::Competitive => "competitive",
            Self::Wingman => "wingman",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Premiere => "Premier",
            Self::Competitive => "Competitive",
            Self::Wingman => "Wingman",
        }
    }
}

impl fmt::Display for MapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid map category (expected premiere, competitive or wingman)")]
pub struct ParseMapCategoryError;

impl FromStr for MapCategory {
    type Err = ParseMapCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "premiere" => Ok(Self::Premiere),
            "competitive" => Ok(Self::Competitive),
            "wingman" => Ok(Self::Wingman),
            _ => Err(ParseMapCategoryError),
        }
    }
}

/// A game level and everything written down for it.
///
/// The map exclusively owns its strategies and utility lineups, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    map_id: MapId,
    name: String,
    image: String,
    category: MapCategory,
    strategies: Vec<Strategy>,
    utilities: Vec<Utility>,
}

impl GameMap {
    pub fn new(
        map_id: MapId,
        name: impl Into<String>,
        image: impl Into<String>,
        category: MapCategory,
    ) -> Self {
        Self {
            map_id,
            name: name.into(),
            image: image.into(),
            category,
            strategies: Vec::new(),
            utilities: Vec::new(),
        }
    }

    pub fn map_id(&self) -> &MapId {
        &self.map_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL or bundled asset path; opaque to the store.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    pub fn category(&self) -> MapCategory {
        self.category
    }

    pub fn set_category(&mut self, category: MapCategory) {
        self.category = category;
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn strategies_mut(&mut self) -> &mut Vec<Strategy> {
        &mut self.strategies
    }

    pub fn strategy(&self, strategy_id: &StrategyId) -> Option<&Strategy> {
        self.strategies
            .iter()
            .find(|s| s.strategy_id() == strategy_id)
    }

    pub fn utilities(&self) -> &[Utility] {
        &self.utilities
    }

    pub fn utilities_mut(&mut self) -> &mut Vec<Utility> {
        &mut self.utilities
    }

    pub fn utility(&self, utility_id: &UtilityId) -> Option<&Utility> {
        self.utilities.iter().find(|u| u.utility_id() == utility_id)
    }
}

/// Caller-supplied part of a new map; the store assigns the id and starts it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMap {
    pub name: String,
    pub image: String,
    pub category: MapCategory,
}

impl NewMap {
    pub fn new(name: impl Into<String>, image: impl Into<String>, category: MapCategory) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapCategory;

    #[test]
    fn map_category_roundtrips_via_str() {
        for category in MapCategory::ALL {
            let parsed: MapCategory = category.as_str().parse().expect("parse");
            assert_eq!(parsed, category);
            assert_eq!(parsed.to_string(), category.as_str());
        }
        assert!("Premiere".parse::<MapCategory>().is_err());
    }
}
