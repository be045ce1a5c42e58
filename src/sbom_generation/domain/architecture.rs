use crate::shared::error::SbomError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// OCI platform description of an architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OciPlatform {
    pub os: &'static str,
    pub architecture: &'static str,
    pub variant: Option<&'static str>,
}

/// CPU architecture of an image.
///
/// Accepts both APK (`x86_64`, `aarch64`, ...) and OCI (`amd64`, `arm64`, ...)
/// spellings and renders either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Architecture {
    Amd64,
    Arm64,
    Arm32V6,
    Arm32V7,
    I386,
    Ppc64le,
    S390x,
    Riscv64,
    Loong64,
}

impl Architecture {
    /// Architecture name as used by APK packages
    pub fn to_apk(self) -> &'static str {
        match self {
            Architecture::Amd64 => "x86_64",
            Architecture::Arm64 => "aarch64",
            Architecture::Arm32V6 => "armhf",
            Architecture::Arm32V7 => "armv7",
            Architecture::I386 => "x86",
            Architecture::Ppc64le => "ppc64le",
            Architecture::S390x => "s390x",
            Architecture::Riscv64 => "riscv64",
            Architecture::Loong64 => "loongarch64",
        }
    }

    pub fn to_oci_platform(self) -> OciPlatform {
        let (architecture, variant) = match self {
            Architecture::Amd64 => ("amd64", None),
            Architecture::Arm64 => ("arm64", None),
            Architecture::Arm32V6 => ("arm", Some("v6")),
            Architecture::Arm32V7 => ("arm", Some("v7")),
            Architecture::I386 => ("386", None),
            Architecture::Ppc64le => ("ppc64le", None),
            Architecture::S390x => ("s390x", None),
            Architecture::Riscv64 => ("riscv64", None),
            Architecture::Loong64 => ("loong64", None),
        };
        OciPlatform {
            os: "linux",
            architecture,
            variant,
        }
    }
}

impl FromStr for Architecture {
    type Err = SbomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amd64" | "x86_64" => Ok(Architecture::Amd64),
            "arm64" | "aarch64" | "arm64/v8" => Ok(Architecture::Arm64),
            "arm/v6" | "armhf" => Ok(Architecture::Arm32V6),
            "arm/v7" | "armv7" => Ok(Architecture::Arm32V7),
            "386" | "x86" | "i386" => Ok(Architecture::I386),
            "ppc64le" => Ok(Architecture::Ppc64le),
            "s390x" => Ok(Architecture::S390x),
            "riscv64" => Ok(Architecture::Riscv64),
            "loong64" | "loongarch64" => Ok(Architecture::Loong64),
            _ => Err(SbomError::InvalidArchitecture {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Architecture {
    type Error = SbomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Displays the OCI spelling, including the variant (`arm/v7`)
impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let platform = self.to_oci_platform();
        match platform.variant {
            Some(variant) => write!(f, "{}/{}", platform.architecture, variant),
            None => f.write_str(platform.architecture),
        }
    }
}
