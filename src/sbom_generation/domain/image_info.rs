use super::{Architecture, Digest};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Operating system the image was built from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OsInfo {
    /// Distribution id, used as the APK purl namespace (`wolfi`, `alpine`)
    pub id: String,
    pub name: String,
    pub version: String,
}

impl Default for OsInfo {
    fn default() -> Self {
        Self {
            id: "unknown".to_string(),
            name: "apko-generated image".to_string(),
            version: "unknown".to_string(),
        }
    }
}

/// Metadata of the built image, its layer and (optionally) its index
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageInfo {
    #[serde(deserialize_with = "blank_as_none")]
    pub arch: Option<Architecture>,
    /// Repository URL the image is published to
    pub repository: String,
    /// Image reference, e.g. `cgr.dev/chainguard/static:latest`
    pub name: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub layer_digest: Option<Digest>,
    #[serde(deserialize_with = "blank_as_none")]
    pub image_digest: Option<Digest>,
    #[serde(deserialize_with = "blank_as_none")]
    pub index_digest: Option<Digest>,
    #[serde(deserialize_with = "blank_as_none")]
    pub index_media_type: Option<String>,
    /// Per-architecture images of a multi-arch index, in index order
    pub images: Vec<ArchImageInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArchImageInfo {
    pub arch: Architecture,
    pub digest: Digest,
}

/// Treats a missing, null or blank string as `None`
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
