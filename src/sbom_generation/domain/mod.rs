pub mod architecture;
pub mod bom;
pub mod digest;
pub mod generation_options;
pub mod image_info;
pub mod package;
pub mod purl;

pub use architecture::{Architecture, OciPlatform};
pub use bom::{
    Component, ComponentType, Dependency, Document, ExternalReference, Hash, HashAlgorithm,
    License,
};
pub use digest::Digest;
pub use generation_options::GenerationOptions;
pub use image_info::{ArchImageInfo, ImageInfo, OsInfo};
pub use package::Package;
pub use purl::{build_identifier, PackageUrl, Qualifiers, PURL_TYPE_APK, PURL_TYPE_OCI};
