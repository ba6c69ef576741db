//! Pack read/write options, loadable from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PackError, Result};
use crate::meta::PACK_FORMAT;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackOptions {
    /// Format number written to `pack.mcmeta` and expected on read.
    #[serde(default = "default_pack_format")]
    pub pack_format: u32,
    /// Reject packs whose `pack_format` differs from `pack_format`.
    #[serde(default = "default_check_format")]
    pub check_format: bool,
}

fn default_pack_format() -> u32 {
    PACK_FORMAT
}

fn default_check_format() -> bool {
    true
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            pack_format: default_pack_format(),
            check_format: default_check_format(),
        }
    }
}

impl PackOptions {
    /// Options that accept any integer `pack_format` on read.
    pub fn lenient() -> Self {
        Self {
            check_format: false,
            ..Self::default()
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| PackError::io(path, e))?;
        let options: Self = toml::from_str(&contents)?;
        Ok(options)
    }
}
