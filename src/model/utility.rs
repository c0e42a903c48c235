// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::UtilityId;
use super::media::{MediaItem, NewMedia};
use super::strategy::Side;

/// Grenade type of a utility lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityKind {
    Smoke,
    Flash,
    Grenade,
    Molotov,
}

impl UtilityKind {
    pub const ALL: [Self; 4] = [Self::Smoke, Self::Flash, Self::Grenade, Self::Molotov];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smoke => "smoke",
            Self::Flash => "flash",
            Self::Grenade => "grenade",
            Self::Molotov => "molotov",
        }
    }
}

impl fmt::Display for UtilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid utility type (expected smoke, flash, grenade or molotov)")]
pub struct ParseUtilityKindError;

impl FromStr for UtilityKind {
    type Err = ParseUtilityKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smoke" => Ok(Self::Smoke),
            "flash" => Ok(Self::Flash),
            "grenade" => Ok(Self::Grenade),
            "molotov" => Ok(Self::Molotov),
            _ => Err(ParseUtilityKindError),
        }
    }
}

/// A grenade throw or lineup on a map.
///
/// `side` is `None` for lineups saved before utilities carried a side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility {
    utility_id: UtilityId,
    kind: UtilityKind,
    title: String,
    description: String,
    side: Option<Side>,
    media: Vec<MediaItem>,
    timestamp: u64,
}

impl Utility {
    pub fn new(
        utility_id: UtilityId,
        kind: UtilityKind,
        title: impl Into<String>,
        description: impl Into<String>,
        side: Option<Side>,
        timestamp: u64,
    ) -> Self {
        Self {
            utility_id,
            kind,
            title: title.into(),
            description: description.into(),
            side,
            media: Vec::new(),
            timestamp,
        }
    }

    pub fn utility_id(&self) -> &UtilityId {
        &self.utility_id
    }

    pub fn kind(&self) -> UtilityKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut Vec<MediaItem> {
        &mut self.media
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Caller-supplied part of a utility lineup; the store assigns the id and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUtility {
    pub kind: UtilityKind,
    pub title: String,
    pub description: String,
    pub side: Option<Side>,
    pub media: Vec<NewMedia>,
}

impl NewUtility {
    pub fn new(
        kind: UtilityKind,
        title: impl Into<String>,
        description: impl Into<String>,
        side: Option<Side>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            side,
            media: Vec::new(),
        }
    }

    pub fn with_media(mut self, media: NewMedia) -> Self {
        self.media.push(media);
        self
    }
}
