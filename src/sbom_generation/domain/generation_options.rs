use super::{ImageInfo, OsInfo, Package};
use serde::Deserialize;

/// Snapshot of everything a generator needs: the OS, the image and its packages
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub os: OsInfo,
    pub image: ImageInfo,
    pub packages: Vec<Package>,
}

impl GenerationOptions {
    pub fn new(os: OsInfo, image: ImageInfo, packages: Vec<Package>) -> Self {
        Self {
            os,
            image,
            packages,
        }
    }
}
