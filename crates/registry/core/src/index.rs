//! Registry index construction and lookup.
//!
//! Every registry follows the same pattern:
//!
//! ```rust,ignore
//! static BLOCK_TYPES: LazyLock<RegistryIndex<BlockTypeDef>> = LazyLock::new(|| {
//!     RegistryBuilder::new("block types")
//!         .extend_inventory::<BlockTypeReg>()
//!         .sort_default()
//!         .build()
//! });
//! ```

use std::collections::{HashMap, HashSet};

use crate::RegistryEntry;

/// Trait for inventory wrapper types to expose their definition.
///
/// ```rust,ignore
/// pub struct BlockTypeReg(pub &'static BlockTypeDef);
/// inventory::collect!(BlockTypeReg);
///
/// impl RegistryReg<BlockTypeDef> for BlockTypeReg {
///     fn def(&self) -> &'static BlockTypeDef { self.0 }
/// }
/// ```
pub trait RegistryReg<T: RegistryEntry + 'static>: 'static {
	/// Returns the static definition reference from this wrapper.
	fn def(&self) -> &'static T;
}

/// Policy for handling duplicate keys during index construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Panic with detailed error message.
	#[default]
	Panic,
	/// Keep the first definition seen for a key.
	FirstWins,
	/// Overwrite with the last definition seen.
	LastWins,
}

impl DuplicatePolicy {
	/// Panics in debug builds, keeps the first definition in release builds.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::FirstWins
		}
	}
}

/// Indexed collection of registry definitions with O(1) lookup by name, id
/// or alias.
pub struct RegistryIndex<T: RegistryEntry + 'static> {
	items: Vec<&'static T>,
	by_key: HashMap<&'static str, &'static T>,
}

impl<T: RegistryEntry + 'static> RegistryIndex<T> {
	/// Looks up a definition by name, id, or alias.
	#[inline]
	pub fn get(&self, key: &str) -> Option<&'static T> {
		self.by_key.get(key).copied()
	}

	/// Returns true if `key` resolves to a definition.
	#[inline]
	pub fn contains(&self, key: &str) -> bool {
		self.by_key.contains_key(key)
	}

	/// Returns the number of unique definitions (not keys).
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the index contains no definitions.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns an iterator over all definitions in sorted order.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &'static T> + '_ {
		self.items.iter().copied()
	}
}

/// Builder for constructing a [`RegistryIndex`].
///
/// Collects definitions, applies sorting and exclusion, validates for
/// duplicates, and produces the final index.
pub struct RegistryBuilder<T: RegistryEntry + 'static> {
	label: &'static str,
	defs: Vec<&'static T>,
	policy: DuplicatePolicy,
}

impl<T: RegistryEntry + 'static> RegistryBuilder<T> {
	/// Creates a new builder with the given label for error messages.
	///
	/// The policy defaults to [`DuplicatePolicy::for_build()`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			policy: DuplicatePolicy::for_build(),
		}
	}

	/// Sets the duplicate key handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a single definition to the builder.
	pub fn push(mut self, def: &'static T) -> Self {
		self.defs.push(def);
		self
	}

	/// Adds multiple definitions to the builder.
	pub fn extend<I: IntoIterator<Item = &'static T>>(mut self, defs: I) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Collects all definitions submitted to inventory via the wrapper type.
	///
	/// The wrapper must be collected via `inventory::collect!(R)`.
	pub fn extend_inventory<R>(mut self) -> Self
	where
		R: RegistryReg<T>,
		inventory::iter<R>: IntoIterator<Item = &'static R>,
	{
		for reg in inventory::iter::<R> {
			self.defs.push(reg.def());
		}
		self
	}

	/// Removes every definition matching `pred` and returns them, in
	/// collection order, alongside the remaining builder.
	///
	/// Duplicate pointers are dropped first, so `pred` sees each static
	/// definition once and the removed list holds no repeats.
	pub fn partition<F: FnMut(&'static T) -> bool>(mut self, mut pred: F) -> (Self, Vec<&'static T>) {
		self.dedup();
		let (removed, kept) = self.defs.into_iter().partition(|&def| pred(def));
		self.defs = kept;
		(self, removed)
	}

	/// Sorts definitions by priority (descending), then name, then id.
	pub fn sort_default(mut self) -> Self {
		self.defs.sort_by(|a, b| {
			b.priority()
				.cmp(&a.priority())
				.then_with(|| a.name().cmp(b.name()))
				.then_with(|| a.id().cmp(b.id()))
		});
		self
	}

	/// Builds the index, validating for duplicates according to policy.
	///
	/// The same static definition pushed twice is kept once.
	///
	/// # Panics
	///
	/// Panics if duplicate keys are found and policy is [`DuplicatePolicy::Panic`].
	pub fn build(mut self) -> RegistryIndex<T> {
		self.dedup();

		let mut by_key = HashMap::with_capacity(self.defs.len() * 2);

		for &def in &self.defs {
			let meta = def.meta();
			self.insert_key(&mut by_key, meta.name, def);
			self.insert_key(&mut by_key, meta.id, def);
			for &alias in meta.aliases {
				self.insert_key(&mut by_key, alias, def);
			}
		}

		RegistryIndex {
			items: self.defs,
			by_key,
		}
	}

	/// Keeps the first occurrence of each static definition.
	fn dedup(&mut self) {
		let mut seen = HashSet::with_capacity(self.defs.len());
		self.defs.retain(|d| seen.insert(*d as *const T as usize));
	}

	fn insert_key(
		&self,
		map: &mut HashMap<&'static str, &'static T>,
		key: &'static str,
		def: &'static T,
	) {
		if let Some(&existing) = map.get(key) {
			if std::ptr::eq(existing, def) {
				return;
			}
			match self.policy {
				DuplicatePolicy::Panic => panic!(
					"duplicate registry key in {}: key={:?} existing_id={} new_id={}",
					self.label,
					key,
					existing.id(),
					def.id()
				),
				DuplicatePolicy::FirstWins => {}
				DuplicatePolicy::LastWins => {
					map.insert(key, def);
				}
			}
		} else {
			map.insert(key, def);
		}
	}
}
