/*!
# Disc ID: TOC Encoding
*/

use crate::Toc;
use std::fmt::Write;



/// # Number of Slots.
///
/// The lead-out plus 99 possible tracks. This is fixed by the MusicBrainz
/// Disc ID scheme; changing it would change every ID.
const SLOTS: usize = 100;

/// # Encoded Length.
///
/// Two hex digits each for the first and last track numbers, then eight for
/// each slot.
pub(crate) const ENCODED_LEN: usize = 2 + 2 + SLOTS * 8;



#[derive(Debug, Clone, Copy)]
/// # TOC Encoder.
///
/// This serializes a [`Toc`] into the exact byte sequence hashed by the
/// MusicBrainz Disc ID algorithm: the first and last track numbers as two
/// uppercase hex digits each, followed by 100 slots of eight uppercase hex
/// digits: the lead-out, then the offset for tracks 1 through 99, with
/// zeroes for any track not on the disc.
pub struct TocEncoder;

impl TocEncoder {
	#[must_use]
	/// # Encode.
	///
	/// ## Examples
	///
	/// ```
	/// use discid_core::{Toc, TocEncoder};
	///
	/// let toc = Toc::new(1, 1, 1000, vec![150]).unwrap();
	/// let enc = TocEncoder::encode(&toc);
	/// assert_eq!(enc.len(), 804);
	/// assert!(enc.starts_with(b"0101000003E800000096000000"));
	/// ```
	pub fn encode(toc: &Toc) -> Vec<u8> {
		let mut out = String::with_capacity(ENCODED_LEN);

		// Writing to a String cannot fail.
		let _res = write!(
			&mut out,
			"{:02X}{:02X}{:08X}",
			toc.first_track(),
			toc.last_track(),
			toc.total_sectors(),
		);

		// Slots 1..=99 hold the tracks by number.
		let first = usize::from(toc.first_track());
		let offsets = toc.offsets();
		for slot in 1..SLOTS {
			let v = slot.checked_sub(first)
				.and_then(|idx| offsets.get(idx))
				.copied()
				.unwrap_or(0);
			let _res = write!(&mut out, "{v:08X}");
		}

		out.into_bytes()
	}
}
