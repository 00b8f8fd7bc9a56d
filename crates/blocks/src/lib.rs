//! UI block type registry.
//!
//! Block types are declared statically with [`block_type!`] and collected
//! through `inventory`. Each declaration carries two pieces of metadata:
//!
//! - the toggle-off marker ([`BlockFlags::TOGGLE_OFF`]), which keeps a block
//!   type out of startup discovery while leaving it declared;
//! - an [`InitialHeight`], the space a block reserves on the page before
//!   its content loads.
//!
//! At startup the host calls [`discover`] with its [`DiscoveryConfig`] and
//! receives a [`BlockCatalog`] of the block types to register.

mod block;
mod config;
mod discovery;
mod height;
mod macros;

pub use block::{BLOCK_TYPES, BlockFlags, BlockTypeDef, BlockTypeReg, all, find, is_toggled_off};
pub use blockreg_registry::{RegistryEntry, RegistryMeta, RegistrySource};
pub use config::{BlockOverride, ConfigError, DiscoveryConfig};
pub use discovery::{BlockCatalog, discover, discover_from};
pub use height::{HeightError, InitialHeight};

#[doc(hidden)]
pub mod __private {
	pub use {inventory, paste};
}
