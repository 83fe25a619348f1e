/*!
# Disc ID: Library

This crate calculates the [MusicBrainz](https://musicbrainz.org/doc/Disc_ID) and
FreeDB/CDDB identifiers for an audio CD from its table of contents, and
exposes a small data model for the disc and its tracks.

The table of contents can be supplied directly:

```
use discid_core::Disc;

let mut disc = Disc::default();
disc.put(
	1,
	15,
	258_725,
	&[
		150, 17_510, 33_275, 45_910, 57_805, 78_310, 94_650, 109_580,
		132_010, 149_160, 165_115, 177_710, 203_325, 215_555, 235_590,
	],
).unwrap();

assert_eq!(disc.id(), Some("TqvKjMu7dMliSfmVEBtrL7sBSno-"));
assert_eq!(disc.freedb_id(), Some("b60d770f"));
```

Or read from a physical drive via any [`DriveReader`] implementation. A
`libcdio`-backed reader is available with the `cdio` crate feature.
*/

#![deny(unsafe_code)]

#![warn(
	clippy::filetype_is_file,
	clippy::integer_division,
	clippy::needless_borrow,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::suboptimal_flops,
	clippy::unneeded_field_pattern,
	macro_use_extern_crate,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![allow(
	clippy::doc_markdown,
	clippy::module_name_repetitions,
	clippy::redundant_pub_crate,
)]

#[cfg(feature = "cdio")] mod cdio;
mod disc;
mod drive;
mod encode;
mod error;
mod feature;
mod freedb;
mod musicbrainz;
mod toc;
mod track;

#[cfg(feature = "cdio")] pub use cdio::LibcdioDrive;
pub use disc::Disc;
pub use drive::{
	Drive,
	DriveReader,
	NoDrive,
	RawToc,
};
pub use encode::TocEncoder;
pub use error::DiscIdError;
pub use feature::{
	Feature,
	Features,
	FEATURES_IMPLEMENTED,
};
pub use freedb::FreedbHasher;
pub use musicbrainz::DiscIdHasher;
pub use toc::{
	Toc,
	TocError,
};
pub use track::{
	Track,
	Tracks,
};



/// # Number of lead-in sectors.
///
/// All discs have a 2-second region at the start before any data. Track
/// offsets handled by this crate include it, so a typical first track starts
/// at sector 150.
pub const CD_LEADIN: u32 = 150;

/// # Enhanced CD Gap.
///
/// When the last track of a disc is data rather than audio, the audio
/// session's lead-out sits this many sectors before the data track.
pub const CD_EXTRA_GAP: u32 = 11_400;

/// # Sectors Per Second.
///
/// Red Book audio runs at 75 sectors per second.
pub const SECTORS_PER_SECOND: u32 = 75;

/// # Maximum Track Number.
pub const MAX_TRACK_NUM: u8 = 99;

/// # MusicBrainz Submission URL.
pub const MB_SUBMISSION_URL: &str = "https://musicbrainz.org/cdtoc/attach";

/// # MusicBrainz Webservice URL.
pub const MB_WEBSERVICE_URL: &str = "https://musicbrainz.org/ws/2/discid";
