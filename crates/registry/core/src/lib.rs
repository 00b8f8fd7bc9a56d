//! Shared registry infrastructure.
//!
//! This crate provides the foundational types every declaration registry
//! builds on:
//! - [`RegistrySource`]: Where a registry item was declared
//! - [`RegistryMeta`]: Common metadata struct for registry items
//! - [`RegistryEntry`]: Trait for accessing registry metadata
//! - [`RegistryBuilder`] / [`RegistryIndex`]: Inventory collection and lookup

mod index;

pub use index::{DuplicatePolicy, RegistryBuilder, RegistryIndex, RegistryReg};

/// Represents where a registry item was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Declared by the host application itself.
	Builtin,
	/// Declared in a library crate.
	Crate(&'static str),
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
		}
	}
}

/// Common metadata for all registry item types.
///
/// All registry items have these properties:
/// - `id`: Unique identifier (typically `"crate::name"`)
/// - `name`: Human-readable display name
/// - `aliases`: Alternative names for lookup
/// - `description`: Help text description
/// - `priority`: Ordering and collision resolution (higher first)
/// - `source`: Origin (builtin or crate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryMeta {
	/// Unique identifier (e.g., "blockreg-blocks::group_finder").
	pub id: &'static str,
	/// Human-readable name for UI display.
	pub name: &'static str,
	/// Alternative names for lookup.
	pub aliases: &'static [&'static str],
	/// Description for help text.
	pub description: &'static str,
	/// Priority for ordering and conflict resolution (higher wins).
	pub priority: i16,
	/// Where this item was declared.
	pub source: RegistrySource,
}

/// Trait for accessing registry metadata from definition types.
///
/// Implement this trait (usually via [`impl_registry_entry!`]) to enable
/// generic registry operations like indexing and collision detection.
pub trait RegistryEntry {
	/// Returns the metadata struct for this registry item.
	fn meta(&self) -> &RegistryMeta;

	/// Returns the unique identifier.
	fn id(&self) -> &'static str {
		self.meta().id
	}

	/// Returns the human-readable name.
	fn name(&self) -> &'static str {
		self.meta().name
	}

	/// Returns alternative names for lookup.
	fn aliases(&self) -> &'static [&'static str] {
		self.meta().aliases
	}

	/// Returns the description.
	fn description(&self) -> &'static str {
		self.meta().description
	}

	/// Returns the priority.
	fn priority(&self) -> i16 {
		self.meta().priority
	}

	/// Returns where this item was declared.
	fn source(&self) -> RegistrySource {
		self.meta().source
	}
}

/// Implements [`RegistryEntry`] for a type with a `meta: RegistryMeta` field.
#[macro_export]
macro_rules! impl_registry_entry {
	($type:ty) => {
		impl $crate::RegistryEntry for $type {
			fn meta(&self) -> &$crate::RegistryMeta {
				&self.meta
			}
		}
	};
}
