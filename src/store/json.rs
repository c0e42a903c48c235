// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persisted JSON shape of the document and its conversion to and from the model.
//!
//! The DTOs are deliberately lenient (everything a past build may have omitted defaults) so
//! that any historical document deserializes; [`migrate`](super::migrate) then normalizes it
//! and only a normalized document is converted into the model.

use serde::{Deserialize, Serialize};

use crate::model::{
    AppDocument, Bind, BindCategory, BindId, GameMap, IdError, MapCategory, MapId, MediaId,
    MediaItem, MediaKind, Side, Strategy, StrategyId, Utility, UtilityId, UtilityKind,
};

use super::document_store::StoreError;

/// Schema version written by this build.
///
/// - absent: documents written before versioning (categories and required maps may be missing)
/// - 1: every map carries a category
/// - 2: the required premiere pool is present
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
    #[serde(default)]
    pub maps: Vec<MapJson>,
    #[serde(default)]
    pub current_map: Option<String>,
    #[serde(default)]
    pub binds: Vec<BindJson>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapJson {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub strategies: Vec<StrategyJson>,
    #[serde(default)]
    pub utilities: Vec<UtilityJson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyJson {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub side: SideJson,
    #[serde(default)]
    pub media: Vec<MediaJson>,
    #[serde(default)]
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityJson {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: UtilityKindJson,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<SideJson>,
    #[serde(default)]
    pub media: Vec<MediaJson>,
    #[serde(default)]
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaJson {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKindJson,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindJson {
    #[serde(default)]
    pub id: String,
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub description: String,
    pub category: BindCategoryJson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideJson {
    T,
    #[serde(rename = "CT")]
    Ct,
}

impl From<Side> for SideJson {
    fn from(side: Side) -> Self {
        match side {
            Side::T => Self::T,
            Side::Ct => Self::Ct,
        }
    }
}

impl From<SideJson> for Side {
    fn from(side: SideJson) -> Self {
        match side {
            SideJson::T => Self::T,
            SideJson::Ct => Self::Ct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilityKindJson {
    Smoke,
    Flash,
    Grenade,
    Molotov,
}

impl From<UtilityKind> for UtilityKindJson {
    fn from(kind: UtilityKind) -> Self {
        match kind {
            UtilityKind::Smoke => Self::Smoke,
            UtilityKind::Flash => Self::Flash,
            UtilityKind::Grenade => Self::Grenade,
            UtilityKind::Molotov => Self::Molotov,
        }
    }
}

impl From<UtilityKindJson> for UtilityKind {
    fn from(kind: UtilityKindJson) -> Self {
        match kind {
            UtilityKindJson::Smoke => Self::Smoke,
            UtilityKindJson::Flash => Self::Flash,
            UtilityKindJson::Grenade => Self::Grenade,
            UtilityKindJson::Molotov => Self::Molotov,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKindJson {
    Image,
    Gif,
    Video,
    Youtube,
}

impl From<MediaKind> for MediaKindJson {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => Self::Image,
            MediaKind::Gif => Self::Gif,
            MediaKind::Video => Self::Video,
            MediaKind::Youtube => Self::Youtube,
        }
    }
}

impl From<MediaKindJson> for MediaKind {
    fn from(kind: MediaKindJson) -> Self {
        match kind {
            MediaKindJson::Image => Self::Image,
            MediaKindJson::Gif => Self::Gif,
            MediaKindJson::Video => Self::Video,
            MediaKindJson::Youtube => Self::Youtube,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindCategoryJson {
    Communication,
    Movement,
    Combat,
    Utility,
    Other,
}

impl From<BindCategory> for BindCategoryJson {
    fn from(category: BindCategory) -> Self {
        match category {
            BindCategory::Communication => Self::Communication,
            BindCategory::Movement => Self::Movement,
            BindCategory::Combat => Self::Combat,
            BindCategory::Utility => Self::Utility,
            BindCategory::Other => Self::Other,
        }
    }
}

impl From<BindCategoryJson> for BindCategory {
    fn from(category: BindCategoryJson) -> Self {
        match category {
            BindCategoryJson::Communication => Self::Communication,
            BindCategoryJson::Movement => Self::Movement,
            BindCategoryJson::Combat => Self::Combat,
            BindCategoryJson::Utility => Self::Utility,
            BindCategoryJson::Other => Self::Other,
        }
    }
}

pub fn parse_document(raw: &str) -> Result<DocumentJson, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn encode_document(document: &AppDocument) -> Result<String, StoreError> {
    serde_json::to_string(&document_to_json(document)).map_err(StoreError::Encode)
}

pub fn document_to_json(document: &AppDocument) -> DocumentJson {
    DocumentJson {
        schema_version: Some(CURRENT_SCHEMA_VERSION),
        maps: document.maps().iter().map(map_to_json).collect(),
        current_map: document.current_map_id().map(ToString::to_string),
        binds: document
            .binds()
            .iter()
            .map(|bind| BindJson {
                id: bind.bind_id().to_string(),
                key: bind.key().to_owned(),
                command: bind.command().to_owned(),
                description: bind.description().to_owned(),
                category: bind.category().into(),
            })
            .collect(),
    }
}

fn map_to_json(map: &GameMap) -> MapJson {
    MapJson {
        id: map.map_id().to_string(),
        name: map.name().to_owned(),
        image: map.image().to_owned(),
        category: Some(map.category().as_str().to_owned()),
        strategies: map
            .strategies()
            .iter()
            .map(|strategy| StrategyJson {
                id: strategy.strategy_id().to_string(),
                title: strategy.title().to_owned(),
                description: strategy.description().to_owned(),
                side: strategy.side().into(),
                media: strategy.media().iter().map(media_to_json).collect(),
                timestamp: strategy.timestamp(),
            })
            .collect(),
        utilities: map
            .utilities()
            .iter()
            .map(|utility| UtilityJson {
                id: utility.utility_id().to_string(),
                kind: utility.kind().into(),
                title: utility.title().to_owned(),
                description: utility.description().to_owned(),
                side: utility.side().map(Into::into),
                media: utility.media().iter().map(media_to_json).collect(),
                timestamp: utility.timestamp(),
            })
            .collect(),
    }
}

fn media_to_json(item: &MediaItem) -> MediaJson {
    MediaJson {
        id: item.media_id().to_string(),
        kind: item.kind().into(),
        url: item.url().to_owned(),
        title: item.title().to_owned(),
        description: item.description().to_owned(),
        timestamp: item.timestamp(),
        youtube_id: item.youtube_id().map(ToOwned::to_owned),
    }
}

fn invalid_id(field: &'static str, value: String) -> impl FnOnce(IdError) -> StoreError {
    move |source| StoreError::InvalidId {
        field,
        value,
        source,
    }
}

/// Converts a normalized document into the model.
///
/// Fails on anything migration is supposed to have fixed (empty ids, unknown categories), so a
/// failure here means the stored value is not a document this crate can interpret.
pub fn document_from_json(document_json: DocumentJson) -> Result<AppDocument, StoreError> {
    let maps = document_json
        .maps
        .into_iter()
        .map(map_from_json)
        .collect::<Result<Vec<_>, StoreError>>()?;

    let current_map_id = document_json
        .current_map
        .map(|value| MapId::new(value.clone()).map_err(invalid_id("currentMap", value)))
        .transpose()?;

    let binds = document_json
        .binds
        .into_iter()
        .map(|bind_json| {
            let bind_id =
                BindId::new(bind_json.id.clone()).map_err(invalid_id("binds[].id", bind_json.id))?;
            Ok(Bind::new(
                bind_id,
                bind_json.key,
                bind_json.command,
                bind_json.description,
                bind_json.category.into(),
            ))
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    Ok(AppDocument::new(maps, current_map_id, binds))
}

fn map_from_json(map_json: MapJson) -> Result<GameMap, StoreError> {
    let map_id = MapId::new(map_json.id.clone()).map_err(invalid_id("maps[].id", map_json.id))?;

    let parsed = map_json
        .category
        .as_deref()
        .and_then(|value| value.parse::<MapCategory>().ok());
    let Some(category) = parsed else {
        return Err(StoreError::InvalidCategory {
            map_id,
            value: map_json.category,
        });
    };

    let mut map = GameMap::new(map_id, map_json.name, map_json.image, category);

    for strategy_json in map_json.strategies {
        let strategy_id = StrategyId::new(strategy_json.id.clone())
            .map_err(invalid_id("maps[].strategies[].id", strategy_json.id))?;
        let mut strategy = Strategy::new(
            strategy_id,
            strategy_json.title,
            strategy_json.description,
            strategy_json.side.into(),
            strategy_json.timestamp,
        );
        for media_json in strategy_json.media {
            strategy.media_mut().push(media_from_json(media_json)?);
        }
        map.strategies_mut().push(strategy);
    }

    for utility_json in map_json.utilities {
        let utility_id = UtilityId::new(utility_json.id.clone())
            .map_err(invalid_id("maps[].utilities[].id", utility_json.id))?;
        let mut utility = Utility::new(
            utility_id,
            utility_json.kind.into(),
            utility_json.title,
            utility_json.description,
            utility_json.side.map(Into::into),
            utility_json.timestamp,
        );
        for media_json in utility_json.media {
            utility.media_mut().push(media_from_json(media_json)?);
        }
        map.utilities_mut().push(utility);
    }

    Ok(map)
}

fn media_from_json(media_json: MediaJson) -> Result<MediaItem, StoreError> {
    let media_id =
        MediaId::new(media_json.id.clone()).map_err(invalid_id("media[].id", media_json.id))?;
    Ok(MediaItem::from_parts(
        media_id,
        media_json.kind.into(),
        media_json.url,
        media_json.title,
        media_json.description,
        media_json.timestamp,
        media_json.youtube_id,
    ))
}

#[cfg(test)]
mod tests {
    use super::{document_from_json, document_to_json, parse_document, CURRENT_SCHEMA_VERSION};
    use crate::model::fixtures::small_document;

    #[test]
    fn model_survives_a_trip_through_json_text() {
        let doc = small_document();
        let raw = serde_json::to_string(&document_to_json(&doc)).unwrap();
        let back = document_from_json(parse_document(&raw).unwrap()).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn wire_names_match_the_persisted_layout() {
        let mut doc = small_document();
        let first = doc.maps()[0].map_id().clone();
        doc.set_current_map_id(Some(first));
        let value = serde_json::to_value(document_to_json(&doc)).unwrap();

        assert_eq!(value["schemaVersion"], CURRENT_SCHEMA_VERSION);
        assert_eq!(value["currentMap"], "m:mirage");
        let mirage = &value["maps"][0];
        assert_eq!(mirage["category"], "premiere");
        assert_eq!(mirage["strategies"][0]["side"], "T");
        assert_eq!(mirage["strategies"][0]["media"][0]["type"], "youtube");
        assert_eq!(mirage["strategies"][0]["media"][0]["youtubeId"], "dQw4w9WgXcQ");
        assert_eq!(mirage["utilities"][0]["type"], "smoke");
        assert!(mirage["utilities"][1].get("side").is_none());
    }

    #[test]
    fn lenient_parse_accepts_legacy_shapes() {
        let raw = r#"{
            "maps": [
                { "id": "a", "name": "Dust 2", "image": "/maps/dust2.jpg",
                  "strategies": [], "utilities": [
                    { "id": "u1", "type": "smoke", "title": "Xbox", "description": "",
                      "media": [], "timestamp": 1 }
                  ] }
            ],
            "currentMap": null
        }"#;
        let doc = parse_document(raw).expect("legacy document parses");
        assert_eq!(doc.schema_version, None);
        assert_eq!(doc.maps[0].category, None);
        assert_eq!(doc.maps[0].utilities[0].side, None);
        assert!(doc.binds.is_empty());
    }

    #[test]
    fn unnormalized_documents_are_rejected_by_the_model_conversion() {
        let doc = parse_document(r#"{"maps":[{"id":"a","name":"Nuke","image":""}]}"#).unwrap();
        assert!(document_from_json(doc).is_err());

        let doc =
            parse_document(r#"{"maps":[{"name":"Nuke","image":"","category":"premiere"}]}"#)
                .unwrap();
        assert!(document_from_json(doc).is_err());
    }
}
