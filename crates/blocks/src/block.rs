//! Block type declarations.

use std::sync::LazyLock;

use bitflags::bitflags;
use blockreg_registry::{RegistryBuilder, RegistryIndex, RegistryMeta, RegistryReg, impl_registry_entry};

use crate::InitialHeight;

bitflags! {
	/// Declaration-time markers on a block type.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct BlockFlags: u32 {
		/// Leave this block type out of startup discovery.
		const TOGGLE_OFF = 1 << 0;
	}
}

/// Definition of a UI block type.
pub struct BlockTypeDef {
	/// Common registry metadata.
	pub meta: RegistryMeta,
	/// Declaration markers.
	pub flags: BlockFlags,
	/// Height reserved before the block's content loads.
	pub initial_height: InitialHeight,
}

impl BlockTypeDef {
	/// Returns true if the block type carries `flag`.
	#[inline]
	pub const fn has_flag(&self, flag: BlockFlags) -> bool {
		self.flags.contains(flag)
	}

	/// Returns true if the block type is excluded from startup discovery.
	#[inline]
	pub const fn is_toggled_off(&self) -> bool {
		self.has_flag(BlockFlags::TOGGLE_OFF)
	}

	/// Returns the declared initial height.
	#[inline]
	pub const fn initial_height(&self) -> InitialHeight {
		self.initial_height
	}
}

impl core::fmt::Debug for BlockTypeDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("BlockTypeDef")
			.field("name", &self.meta.name)
			.field("priority", &self.meta.priority)
			.field("flags", &self.flags)
			.field("initial_height", &self.initial_height)
			.finish()
	}
}

impl_registry_entry!(BlockTypeDef);

/// Registry wrapper for block type definitions.
pub struct BlockTypeReg(pub &'static BlockTypeDef);
inventory::collect!(BlockTypeReg);

impl RegistryReg<BlockTypeDef> for BlockTypeReg {
	fn def(&self) -> &'static BlockTypeDef {
		self.0
	}
}

/// Every declared block type, toggled off or not.
pub static BLOCK_TYPES: LazyLock<RegistryIndex<BlockTypeDef>> = LazyLock::new(|| {
	RegistryBuilder::new("block types")
		.extend_inventory::<BlockTypeReg>()
		.sort_default()
		.build()
});

/// Finds a declared block type by name, id or alias.
pub fn find(name: &str) -> Option<&'static BlockTypeDef> {
	BLOCK_TYPES.get(name)
}

/// Returns all declared block types in priority order.
pub fn all() -> impl Iterator<Item = &'static BlockTypeDef> {
	BLOCK_TYPES.iter()
}

/// Reports whether a declared block type carries the toggle-off marker.
///
/// Returns `None` if no block type is declared under `name`.
pub fn is_toggled_off(name: &str) -> Option<bool> {
	find(name).map(BlockTypeDef::is_toggled_off)
}
