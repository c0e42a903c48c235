// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::StrategyId;
use super::media::{MediaItem, NewMedia};

/// Team side a play or lineup is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Terrorists (attackers).
    T,
    /// Counter-Terrorists (defenders).
    Ct,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::T => "T",
            Self::Ct => "CT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::T => "Terrorist (T)",
            Self::Ct => "Counter-Terrorist (CT)",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid side (expected `T` or `CT`)")]
pub struct ParseSideError;

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T" | "t" => Ok(Self::T),
            "CT" | "ct" => Ok(Self::Ct),
            _ => Err(ParseSideError),
        }
    }
}

/// A described team play for one side on a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    strategy_id: StrategyId,
    title: String,
    description: String,
    side: Side,
    media: Vec<MediaItem>,
    timestamp: u64,
}

impl Strategy {
    pub fn new(
        strategy_id: StrategyId,
        title: impl Into<String>,
        description: impl Into<String>,
        side: Side,
        timestamp: u64,
    ) -> Self {
        Self {
            strategy_id,
            title: title.into(),
            description: description.into(),
            side,
            media: Vec::new(),
            timestamp,
        }
    }

    pub fn strategy_id(&self) -> &StrategyId {
        &self.strategy_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut Vec<MediaItem> {
        &mut self.media
    }

    /// Creation instant in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Caller-supplied part of a strategy; the store assigns the id and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStrategy {
    pub title: String,
    pub description: String,
    pub side: Side,
    pub media: Vec<NewMedia>,
}

impl NewStrategy {
    pub fn new(title: impl Into<String>, description: impl Into<String>, side: Side) -> Self {
        Self {
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

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn side_roundtrips_via_str() {
        for side in [Side::T, Side::Ct] {
            let parsed: Side = side.as_str().parse().expect("parse");
            assert_eq!(parsed, side);
        }
        assert!("X".parse::<Side>().is_err());
        assert_eq!("ct".parse::<Side>(), Ok(Side::Ct));
    }
}
