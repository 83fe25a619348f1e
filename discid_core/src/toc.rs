/*!
# Disc ID: Table of Contents
*/

use crate::{
	CD_LEADIN,
	MAX_TRACK_NUM,
	SECTORS_PER_SECOND,
};
use serde::{
	Deserialize,
	Serialize,
};
use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Table of Contents Errors.
pub enum TocError {
	/// # Invalid track range.
	///
	/// Track numbers must be `1..=99`, with the first no greater than the
	/// last.
	InvalidTrackRange,

	/// # Wrong number of offsets.
	InvalidOffsetCount,

	/// # Offsets out of order.
	InvalidOffsetOrdering,

	/// # Invalid sector total.
	///
	/// The lead-out must be non-zero and come after every track offset.
	InvalidTotalSectors,
}

impl Error for TocError {}

impl fmt::Display for TocError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::InvalidTrackRange => "Illegal track limits.",
			Self::InvalidOffsetCount => "The number of offsets does not match the track count.",
			Self::InvalidOffsetOrdering => "Track offsets are out of order.",
			Self::InvalidTotalSectors => "Illegal disc length.",
		})
	}
}



#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParts")]
/// # Table of Contents.
///
/// A validated audio CD table of contents: the first and last audio track
/// numbers, the lead-out sector, and the starting sector of each track.
///
/// All sector values are absolute, i.e. they include the 150-sector lead-in.
///
/// The only ways to get one are through [`Toc::new`], [`Toc::from_parts`],
/// or deserialization, all of which enforce the same invariants, so a `Toc`
/// is always safe to hash.
pub struct Toc {
	/// # First Track Number.
	first_track: u8,

	/// # Last Track Number.
	last_track: u8,

	/// # Lead-out Sector.
	total_sectors: u32,

	/// # Track Offsets.
	offsets: Vec<u32>,
}

impl fmt::Display for Toc {
	/// # MusicBrainz TOC String.
	///
	/// This prints the space-separated first track, last track, lead-out, and
	/// track offsets.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.first_track, self.last_track, self.total_sectors)?;
		for v in &self.offsets { write!(f, " {v}")?; }
		Ok(())
	}
}

/// # Raw (Unvalidated) Parts.
///
/// This is the serialized shape of a `Toc`; deserialization passes through
/// here so the usual validation applies.
#[derive(Deserialize)]
struct RawParts {
	/// # First Track Number.
	first_track: u8,

	/// # Last Track Number.
	last_track: u8,

	/// # Lead-out Sector.
	total_sectors: u32,

	/// # Track Offsets.
	offsets: Vec<u32>,
}

impl TryFrom<RawParts> for Toc {
	type Error = TocError;

	#[inline]
	fn try_from(src: RawParts) -> Result<Self, Self::Error> {
		Self::new(src.first_track, src.last_track, src.total_sectors, src.offsets)
	}
}

impl Toc {
	/// # New.
	///
	/// Validate and build a table of contents from the first and last track
	/// numbers, the lead-out sector, and one offset for each track.
	///
	/// ## Examples
	///
	/// ```
	/// use discid_core::{Toc, TocError};
	///
	/// let toc = Toc::new(1, 2, 30_000, vec![150, 15_000]).unwrap();
	/// assert_eq!(toc.track_count(), 2);
	///
	/// // Backwards!
	/// assert_eq!(
	///     Toc::new(2, 1, 30_000, vec![150, 15_000]),
	///     Err(TocError::InvalidTrackRange),
	/// );
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if the track range is invalid, the number of offsets
	/// doesn't match the number of tracks, the offsets are out of order, or
	/// the lead-out doesn't come after the last offset.
	pub fn new(first: u8, last: u8, total_sectors: u32, offsets: Vec<u32>)
	-> Result<Self, TocError> {
		// Track numbers.
		if first == 0 || last < first || MAX_TRACK_NUM < last {
			return Err(TocError::InvalidTrackRange);
		}

		// One offset per track.
		if offsets.len() != usize::from(last - first) + 1 {
			return Err(TocError::InvalidOffsetCount);
		}

		// Ascending order.
		if offsets.windows(2).any(|pair| pair[1] < pair[0]) {
			return Err(TocError::InvalidOffsetOrdering);
		}

		// The lead-out has to come after everything else. Since the offsets
		// are sorted, checking the last one covers them all.
		if offsets.last().map_or(true, |&v| total_sectors <= v) {
			return Err(TocError::InvalidTotalSectors);
		}

		Ok(Self {
			first_track: first,
			last_track: last,
			total_sectors,
			offsets,
		})
	}

	/// # From Parts (libdiscid Layout).
	///
	/// This accepts offsets in the layout used by `libdiscid`, which is
	/// indexed by track number: the lead-out goes in slot zero, and slot `n`
	/// holds the offset of track `n`. Slots for track numbers below `first`
	/// are padding and ignored, so the slice must hold exactly `last + 1`
	/// entries.
	///
	/// ## Examples
	///
	/// ```
	/// use discid_core::Toc;
	///
	/// assert_eq!(
	///     Toc::from_parts(1, 2, &[30_000, 150, 15_000]),
	///     Toc::new(1, 2, 30_000, vec![150, 15_000]),
	/// );
	///
	/// // A disc starting at track three.
	/// assert_eq!(
	///     Toc::from_parts(3, 4, &[1000, 0, 0, 150, 500]),
	///     Toc::new(3, 4, 1000, vec![150, 500]),
	/// );
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if the slice length doesn't match the track range or
	/// anything fails validation.
	pub fn from_parts(first: u8, last: u8, offsets: &[u32]) -> Result<Self, TocError> {
		if first == 0 || last < first || MAX_TRACK_NUM < last {
			return Err(TocError::InvalidTrackRange);
		}
		if offsets.len() != usize::from(last) + 1 {
			return Err(TocError::InvalidOffsetCount);
		}

		Self::new(
			first,
			last,
			offsets[0],
			offsets[usize::from(first)..].to_vec(),
		)
	}
}

impl Toc {
	#[must_use]
	/// # First Track Number.
	pub const fn first_track(&self) -> u8 { self.first_track }

	#[must_use]
	/// # Last Track Number.
	pub const fn last_track(&self) -> u8 { self.last_track }

	#[must_use]
	/// # Total Sectors (Lead-out).
	pub const fn total_sectors(&self) -> u32 { self.total_sectors }

	#[must_use]
	/// # Track Offsets.
	///
	/// One entry per track, from first to last.
	pub fn offsets(&self) -> &[u32] { &self.offsets }

	#[must_use]
	/// # Track Count.
	pub const fn track_count(&self) -> u8 { self.last_track - self.first_track + 1 }

	#[must_use]
	/// # Audio Sectors.
	///
	/// The number of sectors between the start of the first track and the
	/// lead-out.
	pub fn audio_sectors(&self) -> u32 { self.total_sectors - self.offsets[0] }

	#[must_use]
	/// # Pregap.
	///
	/// The number of sectors between the end of the lead-in and the start of
	/// the first track. This is usually zero, but some discs hide audio
	/// there.
	pub fn pregap(&self) -> u32 { self.offsets[0].saturating_sub(CD_LEADIN) }

	#[must_use]
	/// # Length in Seconds.
	///
	/// The full length of the disc, lead-in included, rounded to the nearest
	/// second.
	pub const fn seconds(&self) -> u32 { sectors_to_seconds(self.total_sectors) }

	#[must_use]
	/// # Track Offset.
	///
	/// Return the starting sector for the given track number, if it is on
	/// the disc.
	pub fn offset(&self, track: u8) -> Option<u32> {
		self.idx(track).map(|idx| self.offsets[idx])
	}

	#[must_use]
	/// # Track Length.
	///
	/// Return the length of the given track in sectors, if it is on the
	/// disc. The last track runs to the lead-out.
	pub fn track_length(&self, track: u8) -> Option<u32> {
		let idx = self.idx(track)?;
		let end = self.offsets.get(idx + 1).copied().unwrap_or(self.total_sectors);
		Some(end - self.offsets[idx])
	}

	/// # Track Index.
	///
	/// Convert a track number to an index into `offsets`.
	fn idx(&self, track: u8) -> Option<usize> {
		if (self.first_track..=self.last_track).contains(&track) {
			Some(usize::from(track - self.first_track))
		}
		else { None }
	}
}



#[must_use]
/// # Sectors to Seconds.
///
/// Convert a sector count to whole seconds, rounding half up.
pub(crate) const fn sectors_to_seconds(sectors: u32) -> u32 {
	sectors.saturating_add(SECTORS_PER_SECOND / 2).wrapping_div(SECTORS_PER_SECOND)
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Test Offsets.
	const OFFSETS: [u32; 15] = [
		150, 17_510, 33_275, 45_910, 57_805, 78_310, 94_650, 109_580,
		132_010, 149_160, 165_115, 177_710, 203_325, 215_555, 235_590,
	];

	#[test]
	fn t_toc_new() {
		let toc = Toc::new(1, 15, 258_725, OFFSETS.to_vec())
			.expect("Valid TOC failed.");
		assert_eq!(toc.first_track(), 1);
		assert_eq!(toc.last_track(), 15);
		assert_eq!(toc.total_sectors(), 258_725);
		assert_eq!(toc.offsets(), OFFSETS.as_slice());
		assert_eq!(toc.track_count(), 15);
		assert_eq!(toc.audio_sectors(), 258_725 - 150);
		assert_eq!(toc.seconds(), 3450);

		assert_eq!(toc.offset(0), None);
		assert_eq!(toc.offset(1), Some(150));
		assert_eq!(toc.offset(15), Some(235_590));
		assert_eq!(toc.offset(16), None);

		assert_eq!(toc.track_length(1), Some(17_360));
		assert_eq!(toc.track_length(15), Some(258_725 - 235_590));
		assert_eq!(toc.track_length(16), None);

		// A disc may start numbering later than one.
		let toc = Toc::new(3, 4, 1000, vec![150, 500]).expect("Valid TOC failed.");
		assert_eq!(toc.offset(3), Some(150));
		assert_eq!(toc.offset(1), None);
		assert_eq!(toc.track_length(4), Some(500));
	}

	#[test]
	fn t_toc_invalid() {
		// Backwards range.
		assert_eq!(
			Toc::new(15, 1, 258_725, OFFSETS.to_vec()),
			Err(TocError::InvalidTrackRange),
		);

		// Zero and 100 are out of bounds.
		assert_eq!(Toc::new(0, 1, 1000, vec![150, 500]), Err(TocError::InvalidTrackRange));
		assert_eq!(Toc::new(99, 100, 1000, vec![150, 500]), Err(TocError::InvalidTrackRange));

		// Not enough offsets.
		assert_eq!(Toc::new(1, 2, 150, vec![150]), Err(TocError::InvalidOffsetCount));

		// Too many offsets.
		assert_eq!(Toc::new(1, 2, 1000, vec![150, 500, 750]), Err(TocError::InvalidOffsetCount));

		// Descending offsets.
		assert_eq!(Toc::new(1, 2, 1000, vec![500, 150]), Err(TocError::InvalidOffsetOrdering));

		// Lead-out too small.
		assert_eq!(Toc::new(1, 2, 150, vec![150, 500]), Err(TocError::InvalidTotalSectors));
		assert_eq!(Toc::new(1, 2, 500, vec![150, 500]), Err(TocError::InvalidTotalSectors));
		assert_eq!(Toc::new(1, 1, 0, vec![0]), Err(TocError::InvalidTotalSectors));

		// Equal offsets are weird but allowed.
		assert!(Toc::new(1, 2, 1000, vec![150, 150]).is_ok(), "Equal offsets should be allowed.");
	}

	#[test]
	fn t_toc_from_parts() {
		let mut parts = vec![258_725];
		parts.extend_from_slice(OFFSETS.as_slice());
		assert_eq!(
			Toc::from_parts(1, 15, &parts),
			Toc::new(1, 15, 258_725, OFFSETS.to_vec()),
		);
		assert_eq!(Toc::from_parts(1, 15, &[]), Err(TocError::InvalidOffsetCount));
		assert_eq!(Toc::from_parts(1, 15, &parts[..15]), Err(TocError::InvalidOffsetCount));

		// Slots are indexed by track number, so a disc starting at three has
		// two padding slots after the lead-out.
		assert_eq!(
			Toc::from_parts(3, 4, &[1000, 0, 0, 150, 500]),
			Toc::new(3, 4, 1000, vec![150, 500]),
		);
		assert_eq!(
			Toc::from_parts(3, 4, &[1000, 7, 7, 150, 500]),
			Toc::new(3, 4, 1000, vec![150, 500]),
			"Padding slots should be ignored.",
		);

		// The packed form is the wrong length once first is not one.
		assert_eq!(Toc::from_parts(3, 4, &[1000, 150, 500]), Err(TocError::InvalidOffsetCount));
		assert_eq!(Toc::from_parts(4, 3, &[1000, 0, 0, 150]), Err(TocError::InvalidTrackRange));
	}

	#[test]
	fn t_pregap() {
		let toc = Toc::new(1, 15, 258_725, OFFSETS.to_vec()).expect("Valid TOC failed.");
		assert_eq!(toc.pregap(), 0);

		let toc = Toc::new(1, 2, 30_000, vec![182, 15_000]).expect("Valid TOC failed.");
		assert_eq!(toc.pregap(), 32);

		// Offsets inside the lead-in shouldn't underflow.
		let toc = Toc::new(1, 2, 30_000, vec![0, 15_000]).expect("Valid TOC failed.");
		assert_eq!(toc.pregap(), 0);
	}

	#[test]
	fn t_toc_display() {
		let toc = Toc::new(1, 3, 40_000, vec![150, 10_000, 20_000]).expect("Valid TOC failed.");
		assert_eq!(toc.to_string(), "1 3 40000 150 10000 20000");
	}

	#[test]
	fn t_toc_serde() {
		let toc = Toc::new(1, 15, 258_725, OFFSETS.to_vec()).expect("Valid TOC failed.");
		let json = serde_json::to_string(&toc).expect("Serialization failed.");
		let toc2: Toc = serde_json::from_str(&json).expect("Deserialization failed.");
		assert_eq!(toc, toc2, "Serde changed the TOC.");

		// Bad data should not make it through.
		let bad = r#"{"first_track":2,"last_track":1,"total_sectors":1000,"offsets":[150,500]}"#;
		assert!(serde_json::from_str::<Toc>(bad).is_err(), "Invalid TOC deserialized.");
	}

	#[test]
	fn t_sectors_to_seconds() {
		assert_eq!(sectors_to_seconds(0), 0);
		assert_eq!(sectors_to_seconds(37), 0);
		assert_eq!(sectors_to_seconds(38), 1);
		assert_eq!(sectors_to_seconds(75), 1);
		assert_eq!(sectors_to_seconds(112), 1);
		assert_eq!(sectors_to_seconds(113), 2);
		assert_eq!(sectors_to_seconds(17_360), 231);
	}
}
