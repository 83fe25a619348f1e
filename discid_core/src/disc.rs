/*!
# Disc ID: Disc
*/

use crate::{
	DiscIdError,
	DiscIdHasher,
	Drive,
	DriveReader,
	Feature,
	Features,
	FreedbHasher,
	Toc,
	Track,
	Tracks,
	drive::normalize_code,
};
use dactyl::NoHash;
use std::{
	collections::HashMap,
	fmt,
};



#[derive(Debug, Clone, Default)]
/// # Disc.
///
/// A compact disc's table of contents, its derived identifiers, and any MCN
/// or ISRC data read alongside it.
///
/// A new `Disc` is empty; every accessor returns `None` (or nothing) until
/// it is populated with [`Disc::put`] or [`Disc::read`]. Each successful
/// call replaces the previous state wholesale; a failed call leaves it
/// alone.
pub struct Disc {
	/// # Table of Contents.
	toc: Option<Toc>,

	/// # Identifiers (MusicBrainz, FreeDB).
	ids: Option<(String, String)>,

	/// # Media Catalogue Number.
	mcn: Option<String>,

	/// # Track ISRCs.
	isrcs: HashMap<u8, String, NoHash>,
}

impl fmt::Display for Disc {
	/// # MusicBrainz ID.
	///
	/// This prints the disc ID, or nothing if the disc is empty.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id().unwrap_or_default())
	}
}

impl From<Toc> for Disc {
	#[inline]
	fn from(toc: Toc) -> Self { Self::from_toc(toc) }
}

impl Disc {
	#[must_use]
	#[inline]
	/// # New (Empty).
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # From Table of Contents.
	pub fn from_toc(toc: Toc) -> Self {
		let mut out = Self::default();
		out.put_toc(toc);
		out
	}
}

impl Disc {
	/// # Put.
	///
	/// Populate the disc from a table of contents: the first and last audio
	/// track numbers, the lead-out sector, and the starting sector for each
	/// track. Any MCN/ISRC data from a previous read is cleared.
	///
	/// ## Examples
	///
	/// ```
	/// use discid_core::Disc;
	///
	/// let mut disc = Disc::default();
	/// assert!(disc.put(2, 1, 30_000, &[150, 15_000]).is_err());
	/// assert!(disc.id().is_none());
	///
	/// disc.put(1, 2, 30_000, &[150, 15_000]).unwrap();
	/// assert_eq!(disc.tracks().count(), 2);
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if the table of contents fails validation, in which
	/// case the disc is left as it was.
	pub fn put(&mut self, first: u8, last: u8, total_sectors: u32, offsets: &[u32])
	-> Result<(), DiscIdError> {
		let toc = Toc::new(first, last, total_sectors, offsets.to_vec())?;
		self.put_toc(toc);
		Ok(())
	}

	/// # Put (Pre-Validated).
	///
	/// Same as [`Disc::put`], but for a table of contents you already have.
	pub fn put_toc(&mut self, toc: Toc) {
		self.replace(toc, None, HashMap::with_hasher(NoHash::default()));
	}

	/// # Read.
	///
	/// Read the table of contents from `device` (or the drive's default
	/// device) and populate the disc with it.
	///
	/// Basic reading is always performed; the MCN and ISRCs are only
	/// collected if requested in `features` _and_ supported by the drive.
	///
	/// ## Errors
	///
	/// Returns [`DiscIdError::NotImplemented`] if the drive does not support
	/// reading at all, [`DiscIdError::DeviceRead`] if the read fails, or a
	/// table of contents error if the drive returns nonsense. In all cases
	/// the disc is left as it was.
	pub fn read<R: DriveReader>(
		&mut self,
		drive: &Drive<R>,
		device: Option<&str>,
		features: Features,
	) -> Result<(), DiscIdError> {
		let (raw, features) = drive.read_raw(device, features)?;
		let toc = Toc::new(raw.first, raw.last, raw.total_sectors, raw.offsets)?;

		// Only keep what was asked for.
		let mcn =
			if features.contains(Feature::Mcn) { raw.mcn.as_deref().and_then(normalize_code) }
			else { None };

		let mut isrcs = HashMap::with_hasher(NoHash::default());
		if features.contains(Feature::Isrc) {
			for (idx, isrc) in raw.isrcs {
				if toc.offset(idx).is_some() {
					if let Some(isrc) = normalize_code(&isrc) {
						isrcs.insert(idx, isrc);
					}
				}
			}
		}

		self.replace(toc, mcn, isrcs);
		Ok(())
	}

	/// # Replace State.
	///
	/// Swap in a new table of contents and side data, recomputing the
	/// identifiers.
	fn replace(
		&mut self,
		toc: Toc,
		mcn: Option<String>,
		isrcs: HashMap<u8, String, NoHash>,
	) {
		let ids = (DiscIdHasher::compute(&toc), FreedbHasher::compute(&toc));
		self.toc = Some(toc);
		self.ids = Some(ids);
		self.mcn = mcn;
		self.isrcs = isrcs;
	}
}

impl Disc {
	#[must_use]
	/// # Is Empty?
	///
	/// Returns `true` if no table of contents has been loaded yet.
	pub const fn is_empty(&self) -> bool { self.toc.is_none() }

	#[must_use]
	/// # Table of Contents.
	pub const fn toc(&self) -> Option<&Toc> { self.toc.as_ref() }

	#[must_use]
	/// # MusicBrainz Disc ID.
	pub fn id(&self) -> Option<&str> {
		self.ids.as_ref().map(|(id, _)| id.as_str())
	}

	#[must_use]
	/// # FreeDB Disc ID.
	pub fn freedb_id(&self) -> Option<&str> {
		self.ids.as_ref().map(|(_, id)| id.as_str())
	}

	#[must_use]
	/// # MusicBrainz Submission URL.
	pub fn submission_url(&self) -> Option<String> {
		let toc = self.toc.as_ref()?;
		let id = self.id()?;
		Some(DiscIdHasher::submission_url(id, toc))
	}

	#[must_use]
	/// # MusicBrainz Webservice URL.
	pub fn webservice_url(&self) -> Option<String> {
		self.id().map(DiscIdHasher::webservice_url)
	}

	#[must_use]
	/// # MusicBrainz TOC String.
	pub fn toc_string(&self) -> Option<String> {
		self.toc.as_ref().map(DiscIdHasher::toc_string)
	}

	#[must_use]
	/// # First Track Number.
	pub fn first_track_num(&self) -> Option<u8> {
		self.toc.as_ref().map(Toc::first_track)
	}

	#[must_use]
	/// # Last Track Number.
	pub fn last_track_num(&self) -> Option<u8> {
		self.toc.as_ref().map(Toc::last_track)
	}

	#[must_use]
	/// # Total Sectors.
	///
	/// The lead-out sector, i.e. the length of the disc in sectors.
	pub fn sectors(&self) -> Option<u32> {
		self.toc.as_ref().map(Toc::total_sectors)
	}

	#[must_use]
	/// # Length in Seconds.
	pub fn seconds(&self) -> Option<u32> {
		self.toc.as_ref().map(Toc::seconds)
	}

	#[must_use]
	/// # Track Offsets (libdiscid Layout).
	///
	/// The lead-out in slot zero, then the offset of track `n` in slot `n`,
	/// with zeroes for any track numbers below the first. This is the same
	/// layout [`Toc::from_parts`] accepts.
	pub fn track_offsets(&self) -> Option<Vec<u32>> {
		let toc = self.toc.as_ref()?;
		let pad = usize::from(toc.first_track()) - 1;
		let mut out = Vec::with_capacity(toc.offsets().len() + pad + 1);
		out.push(toc.total_sectors());
		out.resize(pad + 1, 0);
		out.extend_from_slice(toc.offsets());
		Some(out)
	}

	#[must_use]
	/// # Pregap.
	///
	/// See [`Toc::pregap`].
	pub fn pregap(&self) -> Option<u32> {
		self.toc.as_ref().map(Toc::pregap)
	}

	#[must_use]
	/// # Media Catalogue Number.
	pub fn mcn(&self) -> Option<&str> { self.mcn.as_deref() }

	#[must_use]
	/// # ISRC.
	pub fn isrc(&self, track: u8) -> Option<&str> {
		self.isrcs.get(&track).map(String::as_str)
	}

	#[must_use]
	/// # Track.
	pub fn track(&self, track: u8) -> Option<Track<'_>> {
		let first = self.first_track_num()?;
		let idx = track.checked_sub(first)?;
		self.tracks().nth(usize::from(idx))
	}

	#[must_use]
	/// # Tracks.
	///
	/// Return an iterator over the audio tracks. This is empty if the disc
	/// has no table of contents.
	pub fn tracks(&self) -> Tracks<'_> { Tracks::new(self) }
}
