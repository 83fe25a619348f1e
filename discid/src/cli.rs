/*!
# Disc ID: CLI
*/

use argyle::Argument;
use dactyl::traits::BytesToUnsigned;
use discid_core::{
	DiscIdError,
	Feature,
	Features,
	Toc,
};



/// # What To Do.
pub(super) enum Parsed {
	/// # Print the Platform Features.
	Features,

	/// # Read a Disc.
	Read(Option<String>, Features),

	/// # Use a Supplied TOC.
	Toc(Toc),
}



/// # Parse Options.
pub(super) fn parse() -> Result<Parsed, DiscIdError> {
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));

	let mut dev = None;
	let mut features = Features::READ;
	let mut show_features = false;
	let mut toc = None;
	for arg in args {
		match arg {
			Argument::Key("--features") => { show_features = true; },
			Argument::Key("-h" | "--help") => return Err(DiscIdError::PrintHelp),
			Argument::Key("--isrc") => { features |= Feature::Isrc; },
			Argument::Key("--mcn") => { features |= Feature::Mcn; },
			Argument::Key("-V" | "--version") => return Err(DiscIdError::PrintVersion),

			Argument::KeyWithValue("-d" | "--dev", s) => { dev.replace(s); },
			Argument::KeyWithValue("--toc", s) => {
				toc.replace(parse_toc(s.as_bytes())?);
			},

			_ => {},
		}
	}

	resolve(show_features, dev, features, toc)
}

/// # Resolve Options.
///
/// A supplied TOC replaces the drive, so drive-only options are errors
/// when combined with it.
fn resolve(
	show_features: bool,
	dev: Option<String>,
	features: Features,
	toc: Option<Toc>,
) -> Result<Parsed, DiscIdError> {
	if show_features { Ok(Parsed::Features) }
	else if let Some(toc) = toc {
		if dev.is_some() {
			Err(DiscIdError::CliArg(String::from("-d/--dev cannot be combined with --toc")))
		}
		else if features.contains(Feature::Mcn) {
			Err(DiscIdError::CliArg(String::from("--mcn cannot be combined with --toc")))
		}
		else if features.contains(Feature::Isrc) {
			Err(DiscIdError::CliArg(String::from("--isrc cannot be combined with --toc")))
		}
		else { Ok(Parsed::Toc(toc)) }
	}
	else { Ok(Parsed::Read(dev, features)) }
}



/// # Parse TOC.
///
/// The values are the first track, last track, lead-out, then each track
/// offset, separated by whitespace and/or plus signs, the same as the `toc`
/// parameter in MusicBrainz URLs.
fn parse_toc(raw: &[u8]) -> Result<Toc, DiscIdError> {
	let mut parts = raw.split(|b| b.is_ascii_whitespace() || b'+'.eq(b))
		.filter(|v| ! v.is_empty());

	let first = parts.next()
		.and_then(u8::btou)
		.ok_or(DiscIdError::CliParse("--toc (first track)"))?;
	let last = parts.next()
		.and_then(u8::btou)
		.ok_or(DiscIdError::CliParse("--toc (last track)"))?;
	let total = parts.next()
		.and_then(u32::btou)
		.ok_or(DiscIdError::CliParse("--toc (sectors)"))?;
	let offsets = parts.map(u32::btou)
		.collect::<Option<Vec<u32>>>()
		.ok_or(DiscIdError::CliParse("--toc (offsets)"))?;

	Ok(Toc::new(first, last, total, offsets)?)
}



#[cfg(test)]
mod tests {
	use super::*;
	use discid_core::TocError;

	#[test]
	fn t_parse_toc() {
		let toc = parse_toc(b"1 3 40000 150 10000 20000").expect("TOC failed to parse.");
		assert_eq!(toc.first_track(), 1);
		assert_eq!(toc.last_track(), 3);
		assert_eq!(toc.total_sectors(), 40_000);
		assert_eq!(toc.offsets(), &[150, 10_000, 20_000]);

		// Plus signs are fine too.
		assert_eq!(parse_toc(b" 1+3+40000+150+10000+20000\n").ok(), Some(toc));

		// Garbage.
		assert_eq!(parse_toc(b""), Err(DiscIdError::CliParse("--toc (first track)")));
		assert_eq!(parse_toc(b"1 3 40000 150 abc"), Err(DiscIdError::CliParse("--toc (offsets)")));

		// Parsed but invalid.
		assert_eq!(
			parse_toc(b"3 1 40000 150 10000 20000"),
			Err(DiscIdError::Toc(TocError::InvalidTrackRange)),
		);
	}

	#[test]
	fn t_resolve() {
		let toc = || parse_toc(b"1 2 30000 150 15000").ok();

		// The features listing wins over everything else.
		assert!(matches!(
			resolve(true, Some(String::from("/dev/sr0")), Features::ALL, toc()),
			Ok(Parsed::Features),
		));

		// A plain TOC.
		assert!(matches!(
			resolve(false, None, Features::READ, toc()),
			Ok(Parsed::Toc(t)) if t.last_track() == 2,
		));

		// Drive-only options cannot ride along with a TOC.
		assert!(matches!(
			resolve(false, Some(String::from("/dev/sr0")), Features::READ, toc()),
			Err(DiscIdError::CliArg(_)),
		));
		assert!(matches!(
			resolve(false, None, Features::READ | Feature::Mcn, toc()),
			Err(DiscIdError::CliArg(e)) if e.contains("--mcn"),
		));
		assert!(matches!(
			resolve(false, None, Features::READ | Feature::Isrc, toc()),
			Err(DiscIdError::CliArg(e)) if e.contains("--isrc"),
		));

		// Without a TOC, everything goes to the drive.
		assert!(matches!(
			resolve(false, Some(String::from("/dev/sr0")), Features::ALL, None),
			Ok(Parsed::Read(Some(d), f)) if d == "/dev/sr0" && f == Features::ALL,
		));
	}
}
