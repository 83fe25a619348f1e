/*!
# Disc ID: Features
*/

use std::{
	fmt,
	ops::{
		BitAnd,
		BitOr,
		BitOrAssign,
	},
	str::FromStr,
};



/// # Helper: Feature Fields.
macro_rules! fields {
	( $( $k:ident $v:literal $vstr:literal ),+ $(,)? ) => (
		#[repr(u8)]
		#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
		/// # Feature.
		///
		/// A single drive-reading capability. Reading the basic table of
		/// contents is always implied; the others are optional extras.
		pub enum Feature {
			$(
				#[doc = concat!("# ", stringify!($k), ".")]
				$k = $v,
			)+
		}

		impl Feature {
			/// # All Features.
			pub const ALL: [Self; 3] = [ $( Self::$k, )+ ];

			#[must_use]
			/// # As Str.
			///
			/// Return the lowercase name of the feature, as used by
			/// `libdiscid`.
			pub const fn as_str(self) -> &'static str {
				match self {
					$( Self::$k => $vstr, )+
				}
			}
		}

		impl FromStr for Feature {
			type Err = ();

			fn from_str(src: &str) -> Result<Self, Self::Err> {
				let src = src.trim();
				$(
					if src.eq_ignore_ascii_case($vstr) { return Ok(Self::$k); }
				)+
				Err(())
			}
		}
	);
}

fields! {
	Read 0b001 "read",
	Mcn  0b010 "mcn",
	Isrc 0b100 "isrc",
}

impl AsRef<str> for Feature {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Feature {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		<str as fmt::Display>::fmt(self.as_str(), f)
	}
}



/// # Implemented Features.
///
/// Everything this crate knows how to ask a drive reader for. What a given
/// platform can actually deliver is reported by
/// [`DriveReader::supported_features`](crate::DriveReader::supported_features).
pub const FEATURES_IMPLEMENTED: Features = Features::ALL;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Feature Set.
///
/// This is a simple bitmask of [`Feature`]s, used both to request optional
/// data from a drive and to describe what a drive supports.
///
/// ```
/// use discid_core::{Feature, Features};
///
/// let set = Features::READ | Feature::Isrc;
/// assert!(set.contains(Feature::Read));
/// assert!(set.contains(Feature::Isrc));
/// assert!(! set.contains(Feature::Mcn));
/// assert_eq!(set.to_string(), "read, isrc");
/// ```
pub struct Features(u8);

impl BitAnd for Features {
	type Output = Self;

	#[inline]
	fn bitand(self, rhs: Self) -> Self { Self(self.0 & rhs.0) }
}

impl BitOr for Features {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}

impl BitOr<Feature> for Features {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Feature) -> Self { Self(self.0 | rhs as u8) }
}

impl BitOrAssign<Feature> for Features {
	#[inline]
	fn bitor_assign(&mut self, rhs: Feature) { self.0 |= rhs as u8; }
}

impl fmt::Display for Features {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for feature in self.iter() {
			if first { first = false; }
			else { f.write_str(", ")?; }
			f.write_str(feature.as_str())?;
		}
		Ok(())
	}
}

impl From<Feature> for Features {
	#[inline]
	fn from(src: Feature) -> Self { Self(src as u8) }
}

impl FromIterator<Feature> for Features {
	fn from_iter<I: IntoIterator<Item=Feature>>(iter: I) -> Self {
		let mut out = Self::NONE;
		for feature in iter { out |= feature; }
		out
	}
}

impl Features {
	/// # No Features.
	pub const NONE: Self = Self(0);

	/// # Read.
	pub const READ: Self = Self(Feature::Read as u8);

	/// # Media Catalogue Number.
	pub const MCN: Self = Self(Feature::Mcn as u8);

	/// # ISRC.
	pub const ISRC: Self = Self(Feature::Isrc as u8);

	/// # Everything.
	pub const ALL: Self = Self(Feature::Read as u8 | Feature::Mcn as u8 | Feature::Isrc as u8);

	#[must_use]
	/// # From Bits.
	///
	/// Unknown bits are silently dropped.
	pub const fn from_bits(bits: u8) -> Self { Self(bits & Self::ALL.0) }

	#[must_use]
	/// # As Bits.
	pub const fn bits(self) -> u8 { self.0 }

	#[must_use]
	/// # Contains?
	pub const fn contains(self, feature: Feature) -> bool {
		feature as u8 == self.0 & feature as u8
	}

	#[must_use]
	/// # Is Empty?
	pub const fn is_empty(self) -> bool { self.0 == 0 }

	#[must_use]
	/// # With Feature.
	pub const fn with(self, feature: Feature) -> Self { Self(self.0 | feature as u8) }

	#[must_use]
	/// # Intersection.
	pub const fn intersect(self, other: Self) -> Self { Self(self.0 & other.0) }

	/// # Iterate.
	///
	/// Return the individual features in the set, in bit order.
	pub fn iter(self) -> impl Iterator<Item=Feature> {
		Feature::ALL.into_iter().filter(move |f| self.contains(*f))
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_feature_bits() {
		// Make sure our bits are unique.
		let mut all = Feature::ALL.map(|f| f as u8).to_vec();
		all.sort_unstable();
		all.dedup();
		assert_eq!(all.len(), Feature::ALL.len(), "Feature bits are not unique.");

		assert_eq!(Features::ALL.bits(), 0b111);
		assert_eq!(Features::from_bits(0b1111_1011), Features::READ | Feature::Mcn);
		assert_eq!(Features::from_bits(0b1111_1101), Features::READ | Feature::Isrc);
		assert_eq!(Features::from_bits(0b1111_1000), Features::NONE);
	}

	#[test]
	fn t_feature_str() {
		for f in Feature::ALL {
			assert_eq!(f.as_str().parse::<Feature>(), Ok(f), "Feature round trip failed.");
			assert_eq!(f.as_str().to_ascii_uppercase().parse::<Feature>(), Ok(f));
		}
		assert!("cdtext".parse::<Feature>().is_err(), "Unknown features should not parse.");
	}

	#[test]
	fn t_features_set() {
		let mut set = Features::NONE;
		assert!(set.is_empty());
		assert_eq!(set.to_string(), "");

		set |= Feature::Mcn;
		assert!(set.contains(Feature::Mcn));
		assert!(! set.contains(Feature::Read));
		assert_eq!(set.to_string(), "mcn");

		let set: Features = [Feature::Isrc, Feature::Read].into_iter().collect();
		assert_eq!(set.iter().collect::<Vec<_>>(), [Feature::Read, Feature::Isrc]);
		assert_eq!(set & Features::ISRC, Features::ISRC);
		assert_eq!(set.intersect(Features::MCN), Features::NONE);
		assert_eq!(FEATURES_IMPLEMENTED.to_string(), "read, mcn, isrc");
	}
}
