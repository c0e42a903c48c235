// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::ids::MediaId;

const YOUTUBE_EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Gif,
    Video,
    Youtube,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Gif => "gif",
            Self::Video => "video",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid media kind")]
pub struct ParseMediaKindError;

impl FromStr for MediaKind {
    type Err = ParseMediaKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "gif" => Ok(Self::Gif),
            "video" => Ok(Self::Video),
            "youtube" => Ok(Self::Youtube),
            _ => Err(ParseMediaKindError),
        }
    }
}

/// A picture, clip or video attached to a strategy or utility lineup.
///
/// Media is referenced by URL only; the store never holds binary content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    media_id: MediaId,
    kind: MediaKind,
    url: String,
    title: String,
    description: String,
    timestamp: u64,
    youtube_id: Option<String>,
}

impl MediaItem {
    /// Builds a media item, normalizing YouTube links to their embeddable form.
    ///
    /// When `url` is recognised as a YouTube video the stored URL becomes the embed URL,
    /// `youtube_id` is set and the kind is forced to [`MediaKind::Youtube`].
    pub fn new(
        media_id: MediaId,
        kind: MediaKind,
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        let url = url.into();
        let (kind, url, youtube_id) = match youtube_video_id(&url) {
            Some(video_id) => (
                MediaKind::Youtube,
                youtube_embed_url(&video_id),
                Some(video_id),
            ),
            None => (kind, url, None),
        };

        Self {
            media_id,
            kind,
            url,
            title: title.into(),
            description: description.into(),
            timestamp,
            youtube_id,
        }
    }

    /// Rebuilds an item exactly as persisted, without URL normalization.
    pub(crate) fn from_parts(
        media_id: MediaId,
        kind: MediaKind,
        url: String,
        title: String,
        description: String,
        timestamp: u64,
        youtube_id: Option<String>,
    ) -> Self {
        Self {
            media_id,
            kind,
            url,
            title,
            description,
            timestamp,
            youtube_id,
        }
    }

    pub fn media_id(&self) -> &MediaId {
        &self.media_id
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn youtube_id(&self) -> Option<&str> {
        self.youtube_id.as_deref()
    }
}

/// Media attached to a new strategy or utility; ids and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedia {
    pub kind: MediaKind,
    pub url: String,
    pub title: String,
    pub description: String,
}

impl NewMedia {
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            title: String::new(),
            description: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn into_item(self, media_id: MediaId, timestamp: u64) -> MediaItem {
        MediaItem::new(
            media_id,
            self.kind,
            self.url,
            self.title,
            self.description,
            timestamp,
        )
    }
}

fn youtube_url_regex() -> &'static Regex {
    static YOUTUBE_URL: OnceLock<Regex> = OnceLock::new();
    YOUTUBE_URL.get_or_init(|| {
        Regex::new(
            r"^(?:https?://)?(?:(?:www|m)\.)?(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#/].*)?$",
        )
        .expect("hard-coded youtube url regex is valid")
    })
}

/// Extracts the 11-character video id from a YouTube watch, short, embed or `youtu.be` URL.
pub fn youtube_video_id(url: &str) -> Option<String> {
    youtube_url_regex()
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("{YOUTUBE_EMBED_PREFIX}{video_id}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{youtube_video_id, MediaItem, MediaKind, NewMedia};
    use crate::model::MediaId;

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42")]
    #[case("https://youtu.be/dQw4w9WgXcQ")]
    #[case("https://youtu.be/dQw4w9WgXcQ?t=10")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ")]
    #[case("https://m.youtube.com/shorts/dQw4w9WgXcQ")]
    #[case("youtube.com/v/dQw4w9WgXcQ")]
    fn recognises_youtube_urls(#[case] url: &str) {
        assert_eq!(youtube_video_id(url).as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[rstest]
    #[case("https://example.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/channel/UC123")]
    #[case("/media/smoke-ct.gif")]
    #[case("")]
    fn ignores_other_urls(#[case] url: &str) {
        assert_eq!(youtube_video_id(url), None);
    }

    #[test]
    fn new_media_normalizes_youtube_links_to_embed_form() {
        let item = NewMedia::new(MediaKind::Video, "https://youtu.be/dQw4w9WgXcQ")
            .with_title("Window smoke")
            .into_item(MediaId::new("m1").unwrap(), 1_700_000_000_000);

        assert_eq!(item.kind(), MediaKind::Youtube);
        assert_eq!(item.url(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(item.youtube_id(), Some("dQw4w9WgXcQ"));
        assert_eq!(item.title(), "Window smoke");
        assert_eq!(item.timestamp(), 1_700_000_000_000);
    }

    #[test]
    fn non_youtube_media_is_kept_verbatim() {
        let item = MediaItem::new(
            MediaId::new("m2").unwrap(),
            MediaKind::Gif,
            "/media/jungle.gif",
            "",
            "",
            5,
        );
        assert_eq!(item.kind(), MediaKind::Gif);
        assert_eq!(item.url(), "/media/jungle.gif");
        assert_eq!(item.youtube_id(), None);
    }
}
