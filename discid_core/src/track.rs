/*!
# Disc ID: Tracks
*/

use crate::{
	Disc,
	toc::sectors_to_seconds,
};
use std::{
	fmt,
	iter::FusedIterator,
	ops::Range,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Track.
///
/// A read-only view of a single audio track on a populated [`Disc`].
pub struct Track<'a> {
	/// # Track Number.
	number: u8,

	/// # Starting Sector.
	offset: u32,

	/// # Length in Sectors.
	sectors: u32,

	/// # ISRC.
	isrc: Option<&'a str>,
}

impl fmt::Display for Track<'_> {
	/// # Track Summary.
	///
	/// The track number, offset, length as `M:SS (sectors)`, and ISRC if
	/// any.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let seconds = self.seconds();
		write!(
			f,
			"{:02}  {:>6}  {:>2}:{:02} ({:>6})",
			self.number,
			self.offset,
			seconds.wrapping_div(60),
			seconds % 60,
			self.sectors,
		)?;
		if let Some(isrc) = self.isrc { write!(f, "  {isrc}")?; }
		Ok(())
	}
}

impl<'a> Track<'a> {
	#[must_use]
	/// # Number.
	pub const fn number(&self) -> u8 { self.number }

	#[must_use]
	/// # Offset.
	///
	/// The absolute starting sector of the track.
	pub const fn offset(&self) -> u32 { self.offset }

	#[must_use]
	/// # Length in Sectors.
	///
	/// The distance to the next track, or to the lead-out for the last one.
	pub const fn sectors(&self) -> u32 { self.sectors }

	#[must_use]
	#[inline]
	/// # Length in Sectors.
	///
	/// Alias of [`Track::sectors`].
	pub const fn length_sectors(&self) -> u32 { self.sectors }

	#[must_use]
	/// # Length in Seconds.
	///
	/// Rounded to the nearest whole second, half up.
	pub const fn seconds(&self) -> u32 { sectors_to_seconds(self.sectors) }

	#[must_use]
	#[inline]
	/// # Length in Seconds.
	///
	/// Alias of [`Track::seconds`].
	pub const fn length_seconds(&self) -> u32 { self.seconds() }

	#[must_use]
	/// # ISRC.
	///
	/// This is only ever set if ISRCs were requested during a drive read, the
	/// drive supported them, and the disc actually had one for this track.
	pub const fn isrc(&self) -> Option<&'a str> { self.isrc }
}



#[derive(Debug, Clone)]
/// # Track Iterator.
///
/// This yields a [`Track`] for each audio track on a [`Disc`], in order.
/// It is empty if the disc has no table of contents.
///
/// Call [`Disc::tracks`] again to start over.
pub struct Tracks<'a> {
	/// # Source.
	disc: &'a Disc,

	/// # Remaining Indices.
	rng: Range<usize>,
}

impl<'a> Tracks<'a> {
	/// # New.
	pub(crate) fn new(disc: &'a Disc) -> Self {
		let len = disc.toc().map_or(0, |toc| toc.offsets().len());
		Self { disc, rng: 0..len }
	}

	/// # Build Track.
	///
	/// Return the track at the given offset index.
	fn track(&self, idx: usize) -> Option<Track<'a>> {
		let disc: &'a Disc = self.disc;
		let toc = disc.toc()?;
		let offset = toc.offsets().get(idx).copied()?;
		let number = toc.first_track() + u8::try_from(idx).ok()?;
		let end = toc.offsets().get(idx + 1).copied().unwrap_or_else(|| toc.total_sectors());

		Some(Track {
			number,
			offset,
			sectors: end - offset,
			isrc: disc.isrc(number),
		})
	}
}

impl<'a> Iterator for Tracks<'a> {
	type Item = Track<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let idx = self.rng.next()?;
		self.track(idx)
	}

	fn size_hint(&self) -> (usize, Option<usize>) { self.rng.size_hint() }
}

impl DoubleEndedIterator for Tracks<'_> {
	fn next_back(&mut self) -> Option<Self::Item> {
		let idx = self.rng.next_back()?;
		self.track(idx)
	}
}

impl ExactSizeIterator for Tracks<'_> {
	#[inline]
	fn len(&self) -> usize { self.rng.len() }
}

impl FusedIterator for Tracks<'_> {}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_tracks_empty() {
		let disc = Disc::default();
		let mut tracks = disc.tracks();
		assert_eq!(tracks.len(), 0);
		assert!(tracks.next().is_none(), "An empty disc has no tracks.");
		assert!(tracks.next_back().is_none(), "An empty disc has no tracks.");
	}

	#[test]
	fn t_tracks() {
		let mut disc = Disc::default();
		disc.put(1, 3, 40_000, &[150, 10_000, 20_000]).expect("Put failed.");

		let tracks = disc.tracks().collect::<Vec<_>>();
		assert_eq!(tracks.len(), 3);
		assert_eq!(
			tracks.iter().map(Track::number).collect::<Vec<_>>(),
			[1, 2, 3],
		);
		assert_eq!(
			tracks.iter().map(Track::sectors).collect::<Vec<_>>(),
			[9850, 10_000, 20_000],
		);
		assert_eq!(
			tracks.iter().map(Track::seconds).collect::<Vec<_>>(),
			[131, 133, 267],
		);
		assert!(tracks.iter().all(|t| t.isrc().is_none()), "ISRCs were never requested.");

		// Backwards works too.
		assert_eq!(
			disc.tracks().rev().map(|t| t.number()).collect::<Vec<_>>(),
			[3, 2, 1],
		);

		// And it is restartable.
		assert_eq!(disc.tracks().count(), 3);
		assert_eq!(disc.tracks().count(), 3);

		// Display.
		assert_eq!(tracks[0].to_string(), "01     150   2:11 (  9850)");
	}
}
