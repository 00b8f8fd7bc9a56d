//! Deployment overrides for block discovery.
//!
//! Overrides are read from TOML, keyed by block type name:
//!
//! ```toml
//! [blocks.legacy_banner]
//! toggle_off = false
//!
//! [blocks.group_finder]
//! initial_height = 400
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use blockreg_registry::RegistryEntry;

use crate::{BlockTypeDef, InitialHeight};

/// Errors that can occur while loading discovery configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
	/// The config file could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	/// The config text is not valid TOML for this schema.
	#[error("invalid discovery config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Per-block override of declared values. Unset fields keep the declaration.
///
/// The table key may be a block type's name, id or any of its aliases.
/// When several keys resolve to the same block type, the name wins, then
/// the id, then aliases in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockOverride {
	/// Replaces the toggle-off marker.
	pub toggle_off: Option<bool>,
	/// Replaces the initial height. Negative values mean a natural height.
	pub initial_height: Option<InitialHeight>,
}

/// Configuration consulted by [`discover`](crate::discover).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
	#[serde(default)]
	pub blocks: BTreeMap<String, BlockOverride>,
}

impl DiscoveryConfig {
	/// Parses config from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a config file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&text)
	}

	/// Returns the override stored under exactly `key`.
	pub fn override_for(&self, key: &str) -> Option<&BlockOverride> {
		self.blocks.get(key)
	}

	/// Returns the override that applies to `def`, looked up by name, then
	/// id, then aliases.
	pub fn override_for_def(&self, def: &BlockTypeDef) -> Option<&BlockOverride> {
		def_keys(def).find_map(|key| self.blocks.get(key))
	}
}

/// Every key a block type answers to, in override precedence order.
pub(crate) fn def_keys(def: &BlockTypeDef) -> impl Iterator<Item = &'static str> {
	[def.name(), def.id()].into_iter().chain(def.aliases().iter().copied())
}
