//! The artist record as exchanged with the catalog API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One artist, as sent to `POST /artist` and returned by the API.
///
/// Only `author` is required. Every other field is omitted from the JSON body
/// when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plurk_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baha_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitch_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub myacg_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixiv_link: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_tags"
    )]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_uuid"
    )]
    pub uuid: Option<i64>,
}

/// Text-valued API fields an artist record carries besides `uuid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistField {
    Author,
    Introduction,
    TwitterLink,
    FacebookLink,
    InstagramLink,
    PlurkLink,
    BahaLink,
    YoutubeLink,
    TwitchLink,
    OfficialLink,
    StoreLink,
    MyacgLink,
    PixivLink,
    Tags,
    Photo,
}

impl ArtistField {
    /// JSON field name used by the API.
    pub fn api_name(self) -> &'static str {
        match self {
            ArtistField::Author => "author",
            ArtistField::Introduction => "introduction",
            ArtistField::TwitterLink => "twitterLink",
            ArtistField::FacebookLink => "facebookLink",
            ArtistField::InstagramLink => "instagramLink",
            ArtistField::PlurkLink => "plurkLink",
            ArtistField::BahaLink => "bahaLink",
            ArtistField::YoutubeLink => "youtubeLink",
            ArtistField::TwitchLink => "twitchLink",
            ArtistField::OfficialLink => "officialLink",
            ArtistField::StoreLink => "storeLink",
            ArtistField::MyacgLink => "myacgLink",
            ArtistField::PixivLink => "pixivLink",
            ArtistField::Tags => "tags",
            ArtistField::Photo => "photo",
        }
    }
}

impl ArtistRecord {
    /// Set a text field, storing `value` as given.
    pub fn set(&mut self, field: ArtistField, value: String) {
        let slot = match field {
            ArtistField::Author => {
                self.author = value;
                return;
            }
            ArtistField::Introduction => &mut self.introduction,
            ArtistField::TwitterLink => &mut self.twitter_link,
            ArtistField::FacebookLink => &mut self.facebook_link,
            ArtistField::InstagramLink => &mut self.instagram_link,
            ArtistField::PlurkLink => &mut self.plurk_link,
            ArtistField::BahaLink => &mut self.baha_link,
            ArtistField::YoutubeLink => &mut self.youtube_link,
            ArtistField::TwitchLink => &mut self.twitch_link,
            ArtistField::OfficialLink => &mut self.official_link,
            ArtistField::StoreLink => &mut self.store_link,
            ArtistField::MyacgLink => &mut self.myacg_link,
            ArtistField::PixivLink => &mut self.pixiv_link,
            ArtistField::Tags => &mut self.tags,
            ArtistField::Photo => &mut self.photo,
        };
        *slot = Some(value);
    }

    /// An empty author counts as "not set".
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

/// Response body of `GET /artist`.
#[derive(Debug, Default, Deserialize)]
pub struct ArtistPage {
    #[serde(default)]
    pub data: Option<Vec<ArtistRecord>>,
}

impl ArtistPage {
    pub fn into_records(self) -> Vec<ArtistRecord> {
        self.data.unwrap_or_default()
    }
}

// The API hands uuids back as numbers or as numeric strings depending on the route.
fn deserialize_uuid<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("uuid {n} is not an integer"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("uuid {s:?}: {e}"))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "uuid must be a number or string, got {other}"
        ))),
    }
}

// Sent as the sheet's comma-separated text; listed back as a jsonb array of
// `{tagName, tagCount}` objects, with a single null-name entry when untagged.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let names: Vec<String> = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => vec![s],
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Object(mut tag) => match tag.remove("tagName") {
                    Some(Value::String(s)) => Some(s),
                    _ => None,
                },
                _ => None,
            })
            .collect(),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "tags must be a string or an array, got {other}"
            )))
        }
    };

    let joined = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    Ok((!joined.is_empty()).then_some(joined))
}
