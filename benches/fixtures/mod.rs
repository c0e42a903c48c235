// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use serde_json::{json, Value};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// A handful of maps with a few notes each.
    Small,
    /// A long-lived notebook: many maps, dozens of notes per map, media on most of them.
    Large,
}

impl Case {
    fn shape(self) -> (usize, usize, usize) {
        match self {
            Self::Small => (6, 3, 4),
            Self::Large => (24, 40, 60),
        }
    }
}

const NAMES: [&str; 12] = [
    "Dust 2",
    "Inferno",
    "Mirage",
    "Overpass",
    "Cache",
    "Cobblestone",
    "Lake",
    "Nuke",
    "Vertigo",
    "Ancient",
    "Train",
    "Office",
];

fn map_name(index: usize) -> String {
    match NAMES.get(index) {
        Some(name) => (*name).to_owned(),
        None => format!("Workshop {index}"),
    }
}

fn media(prefix: &str, n: usize) -> Value {
    if n % 3 == 0 {
        return json!([]);
    }
    json!([{
        "id": format!("{prefix}-media"),
        "type": "image",
        "url": format!("/lineups/{prefix}.png"),
        "title": "",
        "description": "",
        "timestamp": 1_600_000_000_000u64 + n as u64,
    }])
}

/// A document as written before categories, required maps or the schema stamp existed.
pub fn legacy_document(case: Case) -> String {
    let (maps, strategies, utilities) = case.shape();
    let sides = ["T", "CT"];
    let kinds = ["smoke", "flash", "grenade", "molotov"];

    let maps: Vec<Value> = (0..maps)
        .map(|m| {
            let strategies: Vec<Value> = (0..strategies)
                .map(|s| {
                    let id = format!("s-{m}-{s}");
                    json!({
                        "id": id,
                        "title": format!("Strategy {s}"),
                        "description": "Default, then late A.",
                        "side": sides[s % 2],
                        "media": media(&id, s),
                        "timestamp": 1_600_000_000_000u64 + s as u64,
                    })
                })
                .collect();
            let utilities: Vec<Value> = (0..utilities)
                .map(|u| {
                    let id = format!("u-{m}-{u}");
                    json!({
                        "id": id,
                        "type": kinds[u % 4],
                        "title": format!("Lineup {u}"),
                        "description": "Jump throw from the corner.",
                        "media": media(&id, u),
                        "timestamp": 1_600_000_000_000u64 + u as u64,
                    })
                })
                .collect();
            json!({
                "id": format!("m-{m}"),
                "name": map_name(m),
                "image": format!("/img/{m}.png"),
                "strategies": strategies,
                "utilities": utilities,
            })
        })
        .collect();

    json!({ "maps": maps, "currentMap": "m-0", "binds": [] }).to_string()
}
