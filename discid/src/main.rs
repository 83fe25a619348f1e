/*!
# Disc ID
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::panic_in_result_fn,
	clippy::str_to_string,
	clippy::todo,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![expect(clippy::redundant_pub_crate, reason = "Unresolvable.")]



mod cli;

use cli::Parsed;
use dactyl::NiceU32;
use discid_core::{
	Disc,
	DiscIdError,
	Drive,
	Feature,
};
use fyi_msg::Msg;
use oxford_join::OxfordJoin;
use std::process::ExitCode;



#[cfg(feature = "cdio")]
/// # Platform Drive Reader.
type Reader = discid_core::LibcdioDrive;

#[cfg(not(feature = "cdio"))]
/// # Platform Drive Reader.
type Reader = discid_core::NoDrive;

/// # A Divider Line.
const DIVIDER: &str = "----------------------------------------";



/// # Main.
///
/// This lets us bubble up startup errors so they can be pretty-printed.
fn main() -> ExitCode {
	match main__() {
		Ok(()) => ExitCode::SUCCESS,
		Err(e @ (DiscIdError::PrintHelp | DiscIdError::PrintVersion)) => {
			println!("{e}");
			ExitCode::SUCCESS
		},
		Err(e) => {
			Msg::from(e).eprint();
			ExitCode::FAILURE
		},
	}
}

#[inline]
/// # Actual Main.
///
/// This does all the stuff.
fn main__() -> Result<(), DiscIdError> {
	let drive = Drive::new(Reader::default());

	let disc = match cli::parse()? {
		Parsed::Features => {
			print_features(&drive);
			return Ok(());
		},
		Parsed::Read(dev, features) => {
			// Let the user know if they asked for something we can't do.
			let missing = features.iter()
				.filter(|f| ! drive.features().contains(*f))
				.map(Feature::as_str)
				.collect::<Vec<_>>();
			if ! missing.is_empty() && drive.features().contains(Feature::Read) {
				Msg::warning(format!(
					"This platform does not support reading the {}.",
					missing.oxford_and(),
				)).eprint();
			}

			drive.read(dev.as_deref(), features)?
		},
		Parsed::Toc(toc) => Disc::from_toc(toc),
	};

	print_disc(&disc);
	Ok(())
}

/// # Print Features.
fn print_features(drive: &Drive<Reader>) {
	println!("Device:   {}", drive.default_device().unwrap_or("(none)"));
	let features = drive.features();
	if features.is_empty() { println!("Features: (none)"); }
	else { println!("Features: {features}"); }
}

/// # Print Disc.
///
/// Print the identifiers, URLs, and track listing.
fn print_disc(disc: &Disc) {
	use std::io::Write;

	let writer = std::io::stdout();
	let mut handle = writer.lock();

	let sectors = disc.sectors().unwrap_or_default();
	let seconds = disc.seconds().unwrap_or_default();

	// A few key/value pairs.
	let mut kv: Vec<(&str, String)> = vec![
		("Disc ID:", disc.id().unwrap_or_default().to_owned()),
		("FreeDB ID:", disc.freedb_id().unwrap_or_default().to_owned()),
		("Length:", format!(
			"{}:{:02} ({} sectors)",
			seconds.wrapping_div(60),
			seconds % 60,
			NiceU32::from(sectors).as_str(),
		)),
		("TOC:", disc.toc_string().unwrap_or_default()),
		("Submit:", disc.submission_url().unwrap_or_default()),
		("Lookup:", disc.webservice_url().unwrap_or_default()),
	];
	if let Some(mcn) = disc.mcn() { kv.push(("MCN:", mcn.to_owned())); }

	let col_max: usize = kv.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
	for (k, v) in kv {
		let _res = writeln!(&mut handle, "{k:col_max$} {v}");
	}

	// The track table.
	let isrc = disc.tracks().any(|t| t.isrc().is_some());
	let _res = writeln!(
		&mut handle,
		"\n##  OFFSET   LENGTH           {}\n{DIVIDER}",
		if isrc { "ISRC" } else { "" },
	);
	for t in disc.tracks() {
		let _res = writeln!(&mut handle, "{t}");
	}
	let _res = writeln!(&mut handle, "{DIVIDER}").and_then(|()| handle.flush());
}
