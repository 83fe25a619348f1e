/*!
# Disc ID: Drive Readers
*/

use crate::{
	CD_EXTRA_GAP,
	Disc,
	DiscIdError,
	Feature,
	Features,
};
use trimothy::TrimSliceMatches;



/// # Drive Reader.
///
/// This is the boundary between the identifier math and the platform. An
/// implementation knows how to pull a raw table of contents (and maybe an
/// MCN and ISRCs) off a physical disc, which device to use by default, and
/// which of those capabilities it actually has.
///
/// Implementations should not validate the table of contents themselves;
/// [`Disc::read`] takes care of that.
pub trait DriveReader {
	/// # Read the Table of Contents.
	///
	/// Read from `device`, or the platform default if `None`. `features`
	/// always includes [`Feature::Read`], and will only include the optional
	/// features the reader claims to support.
	///
	/// ## Errors
	///
	/// Implementations should return [`DiscIdError::DeviceRead`] with a
	/// human-readable diagnostic if the drive cannot be opened, there is no
	/// disc, etc.
	fn read_toc(&self, device: Option<&str>, features: Features) -> Result<RawToc, DiscIdError>;

	/// # Default Device.
	fn default_device(&self) -> Option<String>;

	/// # Supported Features.
	fn supported_features(&self) -> Features;
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Raw Table of Contents.
///
/// The unvalidated data returned by a [`DriveReader`].
pub struct RawToc {
	/// # First Track Number.
	pub first: u8,

	/// # Last Track Number.
	pub last: u8,

	/// # Lead-out Sector.
	pub total_sectors: u32,

	/// # Track Offsets.
	pub offsets: Vec<u32>,

	/// # Media Catalogue Number.
	pub mcn: Option<String>,

	/// # Track ISRCs.
	pub isrcs: Vec<(u8, String)>,
}



#[derive(Debug, Clone, Copy, Default)]
/// # No Drive.
///
/// A reader for platforms without drive support. It has no default device
/// and supports nothing, so any attempt to read fails with
/// [`DiscIdError::NotImplemented`].
pub struct NoDrive;

impl DriveReader for NoDrive {
	fn read_toc(&self, _device: Option<&str>, _features: Features) -> Result<RawToc, DiscIdError> {
		Err(DiscIdError::NotImplemented(Feature::Read))
	}

	#[inline]
	fn default_device(&self) -> Option<String> { None }

	#[inline]
	fn supported_features(&self) -> Features { Features::NONE }
}



#[derive(Debug, Clone)]
/// # Drive.
///
/// This pairs a [`DriveReader`] with its default device and supported
/// features, both queried once at construction.
///
/// ```
/// use discid_core::{Drive, Features, NoDrive};
///
/// let drive = Drive::new(NoDrive);
/// assert_eq!(drive.default_device(), None);
/// assert_eq!(drive.features(), Features::NONE);
/// assert!(drive.read(None, Features::ALL).is_err());
/// ```
pub struct Drive<R: DriveReader> {
	/// # Reader.
	reader: R,

	/// # Default Device.
	default_device: Option<String>,

	/// # Supported Features.
	features: Features,
}

impl<R: DriveReader> From<R> for Drive<R> {
	#[inline]
	fn from(reader: R) -> Self { Self::new(reader) }
}

impl<R: DriveReader> Drive<R> {
	#[must_use]
	/// # New.
	pub fn new(reader: R) -> Self {
		let default_device = reader.default_device()
			.filter(|d| ! d.trim().is_empty());
		let features = reader.supported_features();
		Self { reader, default_device, features }
	}

	#[must_use]
	/// # Default Device.
	pub fn default_device(&self) -> Option<&str> { self.default_device.as_deref() }

	#[must_use]
	/// # Supported Features.
	pub const fn features(&self) -> Features { self.features }

	#[must_use]
	/// # Reader.
	pub const fn reader(&self) -> &R { &self.reader }

	/// # Read a Disc.
	///
	/// Shorthand for creating a new [`Disc`] and calling [`Disc::read`] on
	/// it.
	///
	/// ## Errors
	///
	/// See [`Disc::read`].
	pub fn read(&self, device: Option<&str>, features: Features) -> Result<Disc, DiscIdError> {
		let mut disc = Disc::default();
		disc.read(self, device, features)?;
		Ok(disc)
	}

	/// # Raw Read.
	///
	/// Negotiate the features, resolve the device, and ask the reader for
	/// the table of contents, returning it along with the features that were
	/// actually in play.
	pub(crate) fn read_raw(&self, device: Option<&str>, features: Features)
	-> Result<(RawToc, Features), DiscIdError> {
		if ! self.features.contains(Feature::Read) {
			return Err(DiscIdError::NotImplemented(Feature::Read));
		}

		let features = features.intersect(self.features).with(Feature::Read);
		let device = device
			.filter(|d| ! d.trim().is_empty())
			.or(self.default_device.as_deref());

		let raw = self.reader.read_toc(device, features)?;
		Ok((raw, features))
	}
}



#[cfg_attr(
	all(not(feature = "cdio"), not(test)),
	expect(dead_code, reason = "Only drive readers need this."),
)]
#[must_use]
/// # Audio Session.
///
/// Enhanced CDs end with a data track in a separate session. When the last
/// track isn't audio (and isn't the only track), it is dropped, and the
/// lead-out moves back to the start of that track, less the gap between
/// sessions.
///
/// Returns the last audio track number and the audio lead-out.
pub(crate) const fn audio_session(
	first: u8,
	last: u8,
	last_is_audio: bool,
	last_start: u32,
	leadout: u32,
) -> (u8, u32) {
	if first < last && ! last_is_audio {
		(last - 1, last_start.saturating_sub(CD_EXTRA_GAP))
	}
	else { (last, leadout) }
}

#[must_use]
/// # Normalize Code.
///
/// Trim whitespace and trailing NULs from a drive-supplied MCN or ISRC,
/// returning `None` if nothing meaningful is left. (Drives without an MCN
/// often report a string of zeroes.)
pub(crate) fn normalize_code(src: &str) -> Option<String> {
	let src = src.as_bytes()
		.trim_start_matches(|b: u8| b.is_ascii_whitespace())
		.trim_end_matches(|b: u8| b.is_ascii_whitespace() || b == 0);

	if src.is_empty() || src.iter().all(|&b| b == b'0') { None }
	else { std::str::from_utf8(src).ok().map(str::to_owned) }
}
