//! Initial block height hint.
//!
//! A block whose content is filled in on the client reserves
//! [`InitialHeight`] pixels while it waits, so the page does not jump once
//! the content arrives.
//!
//! - `Pixels(0)` reserves zero pixels.
//! - `Pixels(n)` reserves `n` pixels.
//! - `Natural` reserves nothing; the block takes its rendered height.
//!
//! Declarations go through [`InitialHeight::from_px`], which maps any
//! negative value to `Natural` instead of failing.

use core::fmt;

use serde::de::{Deserialize, Deserializer, Error as _};
use thiserror::Error;

/// Errors from the strict height constructor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightError {
	/// A negative pixel count was supplied.
	#[error("initial height must not be negative: {0}")]
	Negative(i64),
	/// The pixel count does not fit the declarable range.
	#[error("initial height out of range: {0} (max {max})", max = i32::MAX)]
	OutOfRange(i64),
}

/// Height a block reserves before its dynamic content loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InitialHeight {
	/// No reservation; the block renders at its natural height.
	#[default]
	Natural,
	/// Reserve exactly this many pixels.
	Pixels(u32),
}

impl InitialHeight {
	/// Builds a hint from a declared pixel count.
	///
	/// Non-negative values are kept exactly. Negative values mean "no hint"
	/// and become [`InitialHeight::Natural`].
	pub const fn from_px(height: i32) -> Self {
		if height >= 0 {
			Self::Pixels(height as u32)
		} else {
			Self::Natural
		}
	}

	/// Strict variant of [`from_px`](Self::from_px) that rejects negative
	/// and out-of-range input instead of clamping it.
	pub fn try_from_px(height: i64) -> Result<Self, HeightError> {
		if height < 0 {
			return Err(HeightError::Negative(height));
		}
		let px = i32::try_from(height).map_err(|_| HeightError::OutOfRange(height))?;
		Ok(Self::from_px(px))
	}

	/// Returns the reserved pixel count, or `None` for a natural height.
	pub const fn pixels(self) -> Option<u32> {
		match self {
			Self::Natural => None,
			Self::Pixels(px) => Some(px),
		}
	}

	/// Returns true if no height is reserved.
	pub const fn is_natural(self) -> bool {
		matches!(self, Self::Natural)
	}

	/// CSS declaration reserving the height on the placeholder element.
	pub fn placeholder_style(self) -> Option<String> {
		self.pixels().map(|px| format!("height: {px}px"))
	}
}

impl fmt::Display for InitialHeight {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Natural => f.write_str("natural"),
			Self::Pixels(px) => write!(f, "{px}px"),
		}
	}
}

/// Reads a plain integer with the same clamp as [`InitialHeight::from_px`].
impl<'de> Deserialize<'de> for InitialHeight {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = i64::deserialize(deserializer)?;
		if raw < 0 {
			return Ok(Self::Natural);
		}
		i32::try_from(raw)
			.map(Self::from_px)
			.map_err(|_| D::Error::custom(HeightError::OutOfRange(raw)))
	}
}
