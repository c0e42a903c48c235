// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::BindId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindCategory {
    Communication,
    Movement,
    Combat,
    Utility,
    Other,
}

impl BindCategory {
    pub const ALL: [Self; 5] = [
        Self::Communication,
        Self::Movement,
        Self::Combat,
        Self::Utility,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::Movement => "movement",
            Self::Combat => "combat",
            Self::Utility => "utility",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for BindCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bind category")]
pub struct ParseBindCategoryError;

impl FromStr for BindCategory {
    type Err = ParseBindCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "communication" => Ok(Self::Communication),
            "movement" => Ok(Self::Movement),
            "combat" => Ok(Self::Combat),
            "utility" => Ok(Self::Utility),
            "other" => Ok(Self::Other),
            _ => Err(ParseBindCategoryError),
        }
    }
}

/// A keyboard key mapped to a game console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bind {
    bind_id: BindId,
    key: String,
    command: String,
    description: String,
    category: BindCategory,
}

impl Bind {
    pub fn new(
        bind_id: BindId,
        key: impl Into<String>,
        command: impl Into<String>,
        description: impl Into<String>,
        category: BindCategory,
    ) -> Self {
        Self {
            bind_id,
            key: key.into(),
            command: command.into(),
            description: description.into(),
            category,
        }
    }

    pub fn bind_id(&self) -> &BindId {
        &self.bind_id
    }

    /// Human key label, e.g. `SPACE` or `Mouse1`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> BindCategory {
        self.category
    }

    /// The line to paste into the game console, e.g. `bind space "+jump"`.
    pub fn console_line(&self) -> String {
        format!("bind {} \"{}\"", self.key.to_lowercase(), self.command)
    }
}

const DEFAULT_BINDS: [(&str, &str, &str, BindCategory); 20] = [
    ("W", "+forward", "Move forward", BindCategory::Movement),
    ("S", "+back", "Move back", BindCategory::Movement),
    ("A", "+moveleft", "Strafe left", BindCategory::Movement),
    ("D", "+moveright", "Strafe right", BindCategory::Movement),
    ("SPACE", "+jump", "Jump", BindCategory::Movement),
    ("CTRL", "+duck", "Crouch", BindCategory::Movement),
    ("SHIFT", "+speed", "Walk", BindCategory::Movement),
    ("Mouse1", "+attack", "Fire", BindCategory::Combat),
    ("Mouse2", "+attack2", "Aim / secondary fire", BindCategory::Combat),
    ("R", "+reload", "Reload", BindCategory::Combat),
    ("G", "drop", "Drop weapon", BindCategory::Combat),
    ("1-0", "slot1-10", "Weapon slots", BindCategory::Combat),
    ("Q", "lastinv", "Last weapon", BindCategory::Combat),
    ("E", "+use", "Use", BindCategory::Utility),
    ("F", "+lookatweapon", "Inspect weapon", BindCategory::Other),
    ("T", "+spray_menu", "Spray menu", BindCategory::Communication),
    ("U", "messagemode2", "Team chat", BindCategory::Communication),
    ("Y", "messagemode", "All chat", BindCategory::Communication),
    ("V", "+voicerecord", "Voice chat", BindCategory::Communication),
    ("TAB", "+showscores", "Scoreboard", BindCategory::Other),
];

/// The standard key reference shown on the binds screen, ids `"1"` through `"20"`.
pub fn default_binds() -> Vec<Bind> {
    DEFAULT_BINDS
        .iter()
        .zip(1u32..)
        .filter_map(|(&(key, command, description, category), n)| {
            let bind_id = BindId::new(n.to_string()).ok()?;
            Some(Bind::new(bind_id, key, command, description, category))
        })
        .collect()
}
