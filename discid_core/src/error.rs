/*!
# Disc ID: Errors
*/

use crate::{
	Feature,
	TocError,
};
#[cfg(feature = "bin")] use fyi_msg::Msg;
use std::{
	error::Error,
	fmt,
};



#[cfg(feature = "bin")]
/// # Help Text.
const HELP: &str = concat!(r"
Disc ID v", env!("CARGO_PKG_VERSION"), r#"
Calculate MusicBrainz and FreeDB disc IDs for audio CDs.

USAGE:
    discid [OPTIONS]

DISC SETTINGS:
    -d, --dev <PATH>  The device path for the optical drive containing the CD
                      of interest, like /dev/cdrom. [default: auto]
        --isrc        Also read the ISRC of each track, if supported.
        --mcn         Also read the disc's Media Catalogue Number, if
                      supported.
        --toc <TOC>   Skip the drive and calculate the IDs for this table of
                      contents instead, formatted as
                      "FIRST LAST SECTORS OFFSET1 OFFSET2…", separated by
                      spaces or plus signs.

MISCELLANEOUS:
        --features    Print the default device and the features supported on
                      this platform, then exit.
    -h, --help        Print help information to STDOUT and exit.
    -V, --version     Print version information to STDOUT and exit.
"#);



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Errors.
pub enum DiscIdError {
	/// # Table of contents validation.
	Toc(TocError),

	/// # Drive read failure.
	///
	/// This carries the diagnostic reported by the drive reader.
	DeviceRead(String),

	/// # Unsupported feature.
	NotImplemented(Feature),

	#[cfg(feature = "bin")]
	/// # Invalid CLI arg.
	CliArg(String),

	#[cfg(feature = "bin")]
	/// # CLI Parsing failure.
	CliParse(&'static str),

	#[cfg(feature = "bin")]
	/// # Print Help (Not an Error).
	PrintHelp,

	#[cfg(feature = "bin")]
	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for DiscIdError {}

impl From<TocError> for DiscIdError {
	#[inline]
	fn from(err: TocError) -> Self { Self::Toc(err) }
}

#[cfg(feature = "bin")]
impl From<DiscIdError> for Msg {
	#[inline]
	fn from(src: DiscIdError) -> Self { Self::error(src.to_string()) }
}

impl fmt::Display for DiscIdError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Toc(e) => write!(f, "{e}"),
			Self::DeviceRead(s) =>
				if s.is_empty() { f.write_str("Unable to read the disc.") }
				else { write!(f, "Unable to read the disc: {s}") },
			Self::NotImplemented(feature) => write!(
				f,
				"The {feature} feature is not supported on this platform.",
			),

			#[cfg(feature = "bin")]
			Self::CliArg(s) => write!(f, "Invalid CLI option: {s}"),

			#[cfg(feature = "bin")]
			Self::CliParse(s) => write!(f, "Unable to parse {s}."),

			#[cfg(feature = "bin")]
			Self::PrintHelp => f.write_str(HELP),

			#[cfg(feature = "bin")]
			Self::PrintVersion => f.write_str(concat!("Disc ID v", env!("CARGO_PKG_VERSION"))),
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			DiscIdError::from(TocError::InvalidTrackRange).to_string(),
			TocError::InvalidTrackRange.to_string(),
			"TOC errors should pass through unchanged.",
		);
		assert_eq!(
			DiscIdError::DeviceRead(String::from("No medium found.")).to_string(),
			"Unable to read the disc: No medium found.",
		);
		assert_eq!(
			DiscIdError::DeviceRead(String::new()).to_string(),
			"Unable to read the disc.",
		);
		assert_eq!(
			DiscIdError::NotImplemented(Feature::Read).to_string(),
			"The read feature is not supported on this platform.",
		);
	}
}
