/*!
# Disc ID: MusicBrainz
*/

use base64::{
	alphabet::Alphabet,
	Engine,
	engine::{
		general_purpose::PAD,
		GeneralPurpose,
	},
};
use crate::{
	MB_SUBMISSION_URL,
	MB_WEBSERVICE_URL,
	Toc,
	TocEncoder,
};
use sha1::{
	Digest,
	Sha1,
};
use std::fmt::Write;



/// # MusicBrainz Base64 Alphabet.
///
/// This is the standard alphabet with `+` and `/` swapped for `.` and `_`.
const MB_ALPHABET: Alphabet = match Alphabet::new(
	"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789._"
) {
	Ok(a) => a,
	Err(_) => panic!("Invalid MusicBrainz alphabet."),
};

/// # MusicBrainz Base64 Engine.
///
/// Padding is kept; it gets swapped for `-` afterwards.
const MB_BASE64: GeneralPurpose = GeneralPurpose::new(&MB_ALPHABET, PAD);



#[derive(Debug, Clone, Copy)]
/// # MusicBrainz Disc ID Hasher.
///
/// This calculates the MusicBrainz Disc ID for a table of contents, and
/// builds the related URLs.
pub struct DiscIdHasher;

impl DiscIdHasher {
	#[must_use]
	/// # Compute Disc ID.
	///
	/// SHA-1 the [`TocEncoder`] output and base64 the digest using the
	/// MusicBrainz alphabet, which substitutes `.` for `+`, `_` for `/`,
	/// and `-` for the `=` padding. The result is always 28 characters.
	///
	/// ## Examples
	///
	/// ```
	/// use discid_core::{DiscIdHasher, Toc};
	///
	/// let toc = Toc::new(1, 1, 1000, vec![150]).unwrap();
	/// let id = DiscIdHasher::compute(&toc);
	/// assert_eq!(id.len(), 28);
	/// assert!(id.ends_with('-'));
	/// ```
	pub fn compute(toc: &Toc) -> String {
		let digest = Sha1::digest(TocEncoder::encode(toc));
		let mut out = MB_BASE64.encode(digest);
		if out.ends_with('=') {
			out = out.replace('=', "-");
		}
		out
	}

	#[must_use]
	/// # Submission URL.
	///
	/// Return a URL that can be used to attach an unknown disc ID to a
	/// release in the MusicBrainz database. The full table of contents is
	/// embedded so the server can verify it.
	pub fn submission_url(disc_id: &str, toc: &Toc) -> String {
		format!(
			"{MB_SUBMISSION_URL}?id={disc_id}&tracks={}&toc={}",
			toc.last_track(),
			Self::toc_param(toc),
		)
	}

	#[must_use]
	/// # Webservice URL.
	///
	/// Return the MusicBrainz webservice URL for looking up the releases
	/// associated with a disc ID.
	pub fn webservice_url(disc_id: &str) -> String {
		format!("{MB_WEBSERVICE_URL}/{disc_id}")
	}

	#[must_use]
	/// # TOC String.
	///
	/// Return the space-separated TOC string used by MusicBrainz for fuzzy
	/// lookups: first track, last track, lead-out, then each track offset.
	pub fn toc_string(toc: &Toc) -> String { toc.to_string() }

	/// # TOC Query Parameter.
	///
	/// Same as the TOC string, but joined with `+`.
	fn toc_param(toc: &Toc) -> String {
		let mut out = format!(
			"{}+{}+{}",
			toc.first_track(),
			toc.last_track(),
			toc.total_sectors(),
		);
		for v in toc.offsets() {
			let _res = write!(&mut out, "+{v}");
		}
		out
	}
}
