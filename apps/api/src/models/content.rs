//! Canonical content record shared by the OSMU converter, the humanize pass,
//! the generator and the record store.
//!
//! Every field is optional on input. String-typed fields that arrive with the
//! wrong JSON type decode to the empty string instead of failing the request,
//! so the converter's fallback chain sees the same "absent" shape either way.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Target or source platform of a content record.
///
/// Serialized as its display name ("YouTube Shorts", ...). Unmapped names are
/// kept verbatim in `Other` so an unknown target round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    YouTubeShorts,
    InstagramReels,
    NaverBlog,
    Threads,
    Other(String),
}

impl Platform {
    /// Platforms the converter has a shape for, in derivation order.
    pub const DERIVABLE: [Platform; 4] = [
        Platform::YouTubeShorts,
        Platform::InstagramReels,
        Platform::Threads,
        Platform::NaverBlog,
    ];

    pub fn display_name(&self) -> &str {
        match self {
            Platform::YouTubeShorts => "YouTube Shorts",
            Platform::InstagramReels => "Instagram Reels",
            Platform::NaverBlog => "Naver Blog",
            Platform::Threads => "Threads",
            Platform::Other(name) => name,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Other(String::new())
    }
}

impl From<String> for Platform {
    fn from(name: String) -> Self {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "youtubeshorts" | "shorts" => Platform::YouTubeShorts,
            "instagramreels" | "reels" => Platform::InstagramReels,
            "naverblog" | "blog" => Platform::NaverBlog,
            "threads" => Platform::Threads,
            _ => Platform::Other(name),
        }
    }
}

impl From<&str> for Platform {
    fn from(name: &str) -> Self {
        Platform::from(name.to_string())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(name) => name,
            known => known.display_name().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A titled block of long-form text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
}

/// One scene or line of a platform-agnostic script breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptLine {
    #[serde(deserialize_with = "lenient_string")]
    pub time: String,
    /// Slot label, e.g. `HOOK` or `CTA`.
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub visual: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadPost {
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
}

/// The canonical unit of content. Transforms return new records; nothing
/// mutates a record in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub topic: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub sections: Vec<Section>,
    #[serde(deserialize_with = "lenient_vec")]
    pub script: Vec<ScriptLine>,
    #[serde(deserialize_with = "lenient_vec")]
    pub thread_posts: Vec<ThreadPost>,
    #[serde(deserialize_with = "lenient_string")]
    pub hashtags: String,
    #[serde(deserialize_with = "lenient_platform")]
    pub platform: Platform,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accepts an array and silently drops elements that fail to decode.
/// Anything other than an array decodes as empty.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_platform<'de, D>(deserializer: D) -> Result<Platform, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(Platform::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_platform_parses_display_names_and_aliases() {
        assert_eq!(Platform::from("YouTube Shorts"), Platform::YouTubeShorts);
        assert_eq!(Platform::from("youtube_shorts"), Platform::YouTubeShorts);
        assert_eq!(Platform::from("Reels"), Platform::InstagramReels);
        assert_eq!(Platform::from("naver-blog"), Platform::NaverBlog);
        assert_eq!(Platform::from("THREADS"), Platform::Threads);
    }

    #[test]
    fn test_unknown_platform_kept_verbatim() {
        let platform = Platform::from("TikTok Live");
        assert_eq!(platform, Platform::Other("TikTok Live".to_string()));
        assert_eq!(platform.to_string(), "TikTok Live");
        assert!(!Platform::DERIVABLE.contains(&platform));
    }

    #[test]
    fn test_platform_serializes_as_display_name() {
        let json = serde_json::to_value(Platform::InstagramReels).unwrap();
        assert_eq!(json, json!("Instagram Reels"));
    }

    #[test]
    fn test_record_missing_fields_use_defaults() {
        let record: ContentRecord = serde_json::from_value(json!({ "topic": "다이어트" })).unwrap();
        assert_eq!(record.topic, "다이어트");
        assert_eq!(record.content, None);
        assert!(record.sections.is_empty());
        assert!(record.script.is_empty());
        assert_eq!(record.hashtags, "");
        assert_eq!(record.platform, Platform::default());
    }

    #[test]
    fn test_record_malformed_fields_coerce_to_empty() {
        let record: ContentRecord = serde_json::from_value(json!({
            "topic": 42,
            "title": null,
            "content": ["not", "a", "string"],
            "sections": "oops",
            "script": [{ "time": "0-3초", "type": "HOOK", "text": 7, "visual": "클로즈업" }, 5],
            "hashtags": { "tag": true },
            "platform": "Threads"
        }))
        .unwrap();

        assert_eq!(record.topic, "");
        assert_eq!(record.title, "");
        assert_eq!(record.content, None);
        assert!(record.sections.is_empty());
        assert_eq!(record.script.len(), 1);
        assert_eq!(record.script[0].kind, "HOOK");
        assert_eq!(record.script[0].text, "");
        assert_eq!(record.hashtags, "");
        assert_eq!(record.platform, Platform::Threads);
    }

    #[test]
    fn test_record_uses_camel_case_field_names() {
        let record = ContentRecord {
            thread_posts: vec![ThreadPost {
                text: "🧵 첫 글".to_string(),
            }],
            platform: Platform::Threads,
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["threadPosts"][0]["text"], "🧵 첫 글");
        assert_eq!(json["platform"], "Threads");
    }
}
