//! Startup discovery of block types.
//!
//! Discovery collects every declared [`BlockTypeDef`], applies deployment
//! overrides from [`DiscoveryConfig`], drops the block types whose
//! toggle-off marker is set, and indexes the rest in a [`BlockCatalog`].

use std::collections::HashMap;

use blockreg_registry::{RegistryBuilder, RegistryEntry, RegistryIndex};

use crate::config::def_keys;
use crate::{BlockTypeDef, BlockTypeReg, DiscoveryConfig, InitialHeight};

/// Block types registered by a discovery pass.
pub struct BlockCatalog {
	index: RegistryIndex<BlockTypeDef>,
	skipped: Vec<&'static BlockTypeDef>,
	heights: HashMap<&'static str, InitialHeight>,
	unmatched: Vec<String>,
}

impl BlockCatalog {
	/// Looks up a registered block type by name, id or alias.
	pub fn get(&self, key: &str) -> Option<&'static BlockTypeDef> {
		self.index.get(key)
	}

	/// Returns true if `key` names, ids or aliases a registered block type.
	pub fn is_registered(&self, key: &str) -> bool {
		self.index.contains(key)
	}

	/// Registered block types in priority order.
	pub fn iter(&self) -> impl Iterator<Item = &'static BlockTypeDef> + '_ {
		self.index.iter()
	}

	/// Returns the number of registered block types.
	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// Returns true if no block type was registered.
	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	/// Block types left out because they are toggled off.
	pub fn skipped(&self) -> &[&'static BlockTypeDef] {
		&self.skipped
	}

	/// Override keys that matched no declared block type.
	pub fn unmatched_overrides(&self) -> &[String] {
		&self.unmatched
	}

	/// Effective initial height of a registered block type.
	///
	/// Returns `None` if `key` is not registered.
	pub fn initial_height(&self, key: &str) -> Option<InitialHeight> {
		let def = self.index.get(key)?;
		Some(self.heights.get(def.id()).copied().unwrap_or(def.initial_height))
	}
}

/// Runs discovery over every block type submitted with [`block_type!`](crate::block_type).
pub fn discover(config: &DiscoveryConfig) -> BlockCatalog {
	let builder = RegistryBuilder::new("discovered block types").extend_inventory::<BlockTypeReg>();
	build_catalog(builder, config)
}

/// Runs discovery over an explicit list of block types.
pub fn discover_from<I>(defs: I, config: &DiscoveryConfig) -> BlockCatalog
where
	I: IntoIterator<Item = &'static BlockTypeDef>,
{
	build_catalog(RegistryBuilder::new("discovered block types").extend(defs), config)
}

fn build_catalog(builder: RegistryBuilder<BlockTypeDef>, config: &DiscoveryConfig) -> BlockCatalog {
	let mut matched = Vec::new();
	let (builder, skipped) = builder.partition(|def| {
		matched.extend(def_keys(def).filter(|key| config.blocks.contains_key(*key)));
		let toggled_off = config
			.override_for_def(def)
			.and_then(|o| o.toggle_off)
			.unwrap_or_else(|| def.is_toggled_off());
		if toggled_off {
			tracing::debug!(block = def.name(), id = def.id(), "skipping toggled-off block type");
		}
		toggled_off
	});
	let index = builder.sort_default().build();

	let unmatched: Vec<String> = config
		.blocks
		.keys()
		.filter(|key| !matched.contains(&key.as_str()))
		.cloned()
		.collect();
	for key in &unmatched {
		tracing::warn!(block = %key, "override names an undeclared block type");
	}

	let heights = index
		.iter()
		.filter_map(|def| Some((def.id(), config.override_for_def(def)?.initial_height?)))
		.collect();

	tracing::info!(registered = index.len(), skipped = skipped.len(), "block discovery complete");

	BlockCatalog {
		index,
		skipped,
		heights,
		unmatched,
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::block_type;

	block_type!(disc_visible, {
		description: "Visible block",
		priority: 10,
		initial_height: 50,
	});

	block_type!(disc_hidden, {
		description: "Hidden block",
		toggle_off: true,
	});

	block_type!(disc_natural, {
		description: "Block with a negative height hint",
		initial_height: -1,
	});

	fn sample() -> [&'static BlockTypeDef; 3] {
		[&BLOCK_TYPE_DISC_VISIBLE, &BLOCK_TYPE_DISC_HIDDEN, &BLOCK_TYPE_DISC_NATURAL]
	}

	fn names(catalog: &BlockCatalog) -> Vec<&'static str> {
		catalog.iter().map(|d| d.name()).collect()
	}

	#[test]
	fn toggled_off_is_skipped() {
		let catalog = discover_from(sample(), &DiscoveryConfig::default());

		assert_eq!(names(&catalog), vec!["disc_visible", "disc_natural"]);
		assert!(!catalog.is_registered("disc_hidden"));
		assert_eq!(catalog.skipped().len(), 1);
		assert!(std::ptr::eq(catalog.skipped()[0], &BLOCK_TYPE_DISC_HIDDEN));
	}

	#[test]
	fn declared_heights_pass_through() {
		let catalog = discover_from(sample(), &DiscoveryConfig::default());

		assert_eq!(catalog.initial_height("disc_visible"), Some(InitialHeight::Pixels(50)));
		assert_eq!(catalog.initial_height("disc_natural"), Some(InitialHeight::Natural));
		assert_eq!(catalog.initial_height("disc_hidden"), None);
	}

	#[test]
	fn overrides_apply() {
		let config = DiscoveryConfig::from_toml_str(
			r#"
			[blocks.disc_hidden]
			toggle_off = false
			initial_height = 0

			[blocks.disc_visible]
			toggle_off = true

			[blocks.disc_natural]
			initial_height = 80

			[blocks.disc_missing]
			toggle_off = true
			"#,
		)
		.unwrap();
		let catalog = discover_from(sample(), &config);

		assert_eq!(names(&catalog), vec!["disc_hidden", "disc_natural"]);
		assert_eq!(catalog.initial_height("disc_hidden"), Some(InitialHeight::Pixels(0)));
		assert_eq!(catalog.initial_height("disc_natural"), Some(InitialHeight::Pixels(80)));
		assert!(std::ptr::eq(catalog.skipped()[0], &BLOCK_TYPE_DISC_VISIBLE));
		assert_eq!(catalog.unmatched_overrides(), ["disc_missing".to_string()]);
	}

	#[test]
	fn repeated_defs_are_skipped_once() {
		let defs = [
			&BLOCK_TYPE_DISC_HIDDEN,
			&BLOCK_TYPE_DISC_HIDDEN,
			&BLOCK_TYPE_DISC_VISIBLE,
			&BLOCK_TYPE_DISC_VISIBLE,
		];
		let catalog = discover_from(defs, &DiscoveryConfig::default());

		assert_eq!(catalog.len(), 1);
		assert_eq!(catalog.skipped().len(), 1);
		assert!(std::ptr::eq(catalog.skipped()[0], &BLOCK_TYPE_DISC_HIDDEN));
	}

	#[test]
	fn override_keys_resolve_through_id() {
		let config = DiscoveryConfig::from_toml_str(
			r#"
			[blocks."blockreg-blocks::disc_hidden"]
			toggle_off = false
			"#,
		)
		.unwrap();
		let catalog = discover_from(sample(), &config);

		assert!(catalog.is_registered("disc_hidden"));
		assert!(catalog.skipped().is_empty());
		assert!(catalog.unmatched_overrides().is_empty());
	}

	#[test]
	fn inventory_scan_sees_declarations() {
		let catalog = discover(&DiscoveryConfig::default());

		assert!(catalog.is_registered("disc_visible"));
		assert!(!catalog.is_registered("disc_hidden"));
		assert!(catalog.skipped().iter().any(|d| d.name() == "disc_hidden"));
		assert!(!catalog.is_empty());
	}
}
