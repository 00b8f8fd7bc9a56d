//! Registration macros for block types.

/// Selects a supplied value or falls back to a default.
#[doc(hidden)]
#[macro_export]
macro_rules! __block_opt {
	(; $default:expr) => {
		$default
	};
	($val:expr; $default:expr) => {
		$val
	};
}

/// Declares a block type and registers it for startup discovery.
///
/// Expands to a `pub static BLOCK_TYPE_<NAME>` and its inventory
/// submission. `toggle_off` defaults to `false`; `initial_height` takes a
/// signed pixel count and defaults to a natural height. Negative heights
/// are read as "no hint".
///
/// # Examples
///
/// ```ignore
/// block_type!(group_finder, {
///     description: "Searchable list of groups",
///     initial_height: 400,
/// });
///
/// // Kept in the binary but never registered at startup.
/// block_type!(legacy_banner, {
///     description: "Old welcome banner",
///     toggle_off: true,
/// });
/// ```
#[macro_export]
macro_rules! block_type {
	($name:ident, {
		description: $desc:expr
		$(, priority: $priority:expr)?
		$(, aliases: [$($alias:expr),* $(,)?])?
		$(, toggle_off: $toggle_off:expr)?
		$(, initial_height: $height:expr)?
		$(,)?
	}) => {
		$crate::__private::paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<BLOCK_TYPE_ $name:upper>]: $crate::BlockTypeDef = $crate::BlockTypeDef {
				meta: $crate::RegistryMeta {
					id: concat!(env!("CARGO_PKG_NAME"), "::", stringify!($name)),
					name: stringify!($name),
					aliases: &[$($($alias),*)?],
					description: $desc,
					priority: $crate::__block_opt!($($priority)?; 0),
					source: $crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
				},
				flags: if $crate::__block_opt!($($toggle_off)?; false) {
					$crate::BlockFlags::TOGGLE_OFF
				} else {
					$crate::BlockFlags::empty()
				},
				initial_height: $crate::InitialHeight::from_px($crate::__block_opt!($($height)?; -1)),
			};

			$crate::__private::inventory::submit!($crate::BlockTypeReg(&[<BLOCK_TYPE_ $name:upper>]));
		}
	};
}
