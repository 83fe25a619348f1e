/*!
# Disc ID: `libcdio` Drive Reader
*/

use crate::{
	CD_LEADIN,
	drive::audio_session,
	DiscIdError,
	DriveReader,
	Feature,
	Features,
	RawToc,
};
use libcdio_sys::{
	cdio_track_enums_CDIO_CDROM_LEADOUT_TRACK,
	discmode_t_CDIO_DISC_MODE_CD_DA,
	discmode_t_CDIO_DISC_MODE_CD_MIXED,
	driver_id_t_DRIVER_DEVICE, // The equivalent of "use whatever's best".
	track_format_t_TRACK_FORMAT_AUDIO,
	track_format_t_TRACK_FORMAT_ERROR,
};
use std::{
	ffi::{
		CStr,
		CString,
	},
	os::raw::c_char,
	sync::Once,
};



static LIBCDIO_INIT: Once = Once::new();



#[derive(Debug, Clone, Copy, Default)]
/// # `libcdio` Drive.
///
/// A [`DriveReader`] backed by the system `libcdio` library. It supports
/// reading the table of contents, the MCN, and track ISRCs.
pub struct LibcdioDrive;

impl DriveReader for LibcdioDrive {
	fn read_toc(&self, device: Option<&str>, features: Features) -> Result<RawToc, DiscIdError> {
		let cdio = LibcdioInstance::new(device)?;

		// The inclusive range of tracks.
		let first = cdio.first_track_num()?;
		let last = cdio.last_track_num()?;
		if last < first {
			return Err(DiscIdError::DeviceRead(String::from("Invalid track count.")));
		}

		// Trim off any trailing data session.
		let (last, total_sectors) = audio_session(
			first,
			last,
			cdio.track_is_audio(last)?,
			cdio.track_lba_start(last)?,
			cdio.leadout_lba()?,
		);

		let mut offsets = Vec::with_capacity(usize::from(last - first) + 1);
		for idx in first..=last {
			offsets.push(cdio.track_lba_start(idx)?);
		}

		let mcn =
			if features.contains(Feature::Mcn) { cdio.mcn() }
			else { None };

		let mut isrcs = Vec::new();
		if features.contains(Feature::Isrc) {
			for idx in first..=last {
				if let Some(isrc) = cdio.track_isrc(idx) { isrcs.push((idx, isrc)); }
			}
		}

		Ok(RawToc {
			first,
			last,
			total_sectors,
			offsets,
			mcn,
			isrcs,
		})
	}

	#[allow(unsafe_code)]
	fn default_device(&self) -> Option<String> {
		init();
		let raw = unsafe { libcdio_sys::cdio_get_default_device(std::ptr::null()) };
		let out = c_char_to_string(raw);
		if ! raw.is_null() {
			unsafe { libcdio_sys::cdio_free(raw.cast()); }
		}
		out
	}

	#[inline]
	fn supported_features(&self) -> Features { Features::ALL }
}



#[derive(Debug)]
#[allow(dead_code)] // We just want to make sure dev lives as long as the ptr.
/// # CDIO Instance.
struct LibcdioInstance {
	dev: Option<CString>,
	ptr: *mut libcdio_sys::CdIo_t,
}

impl Drop for LibcdioInstance {
	#[allow(unsafe_code)]
	fn drop(&mut self) {
		// Release the C memory!
		if ! self.ptr.is_null() {
			unsafe { libcdio_sys::cdio_destroy(self.ptr); }
		}
	}
}

impl LibcdioInstance {
	#[allow(unsafe_code)]
	/// # New!
	///
	/// Initialize a new instance, optionally connecting to a specific device.
	///
	/// ## Errors
	///
	/// This will return an error if the device cannot be opened, or doesn't
	/// contain an audio CD.
	fn new(dev: Option<&str>) -> Result<Self, DiscIdError> {
		// Make sure the library has been initialized.
		init();

		let dev = match dev {
			Some(d) => Some(
				CString::new(d)
					.map_err(|_| DiscIdError::DeviceRead(format!("Invalid device path {d}.")))?
			),
			None => None,
		};

		// Connect to it.
		let ptr = unsafe {
			libcdio_sys::cdio_open(
				dev.as_ref().map_or_else(std::ptr::null, |v| v.as_ptr()),
				driver_id_t_DRIVER_DEVICE,
			)
		};

		// NULL is bad.
		if ptr.is_null() {
			Err(DiscIdError::DeviceRead(dev.map_or_else(
				|| String::from("Unable to open connection with default optical drive."),
				|v| format!("Unable to open connection with {}.", v.to_string_lossy()),
			)))
		}
		else {
			let out = Self { dev, ptr };
			out.check_disc_mode()?;
			Ok(out)
		}
	}

	#[allow(unsafe_code)]
	#[allow(non_upper_case_globals)] // These aren't our globals.
	/// # Check Disc Mode.
	///
	/// This makes sure an audio CD is actually present in the drive.
	fn check_disc_mode(&self) -> Result<(), DiscIdError> {
		let discmode = unsafe { libcdio_sys::cdio_get_discmode(self.ptr) };
		if matches!(
			discmode,
			discmode_t_CDIO_DISC_MODE_CD_DA | discmode_t_CDIO_DISC_MODE_CD_MIXED
		) {
			Ok(())
		}
		else {
			Err(DiscIdError::DeviceRead(String::from("Missing or unsupported disc type.")))
		}
	}
}

impl LibcdioInstance {
	#[allow(unsafe_code)]
	/// # First Track Number.
	fn first_track_num(&self) -> Result<u8, DiscIdError> {
		let raw = unsafe { libcdio_sys::cdio_get_first_track_num(self.ptr) };
		if raw == 0 || raw == u8::MAX {
			Err(DiscIdError::DeviceRead(String::from("Unable to obtain the first track number.")))
		}
		else { Ok(raw) }
	}

	#[allow(unsafe_code)]
	/// # Last Track Number.
	fn last_track_num(&self) -> Result<u8, DiscIdError> {
		let raw = unsafe { libcdio_sys::cdio_get_last_track_num(self.ptr) };
		if raw == 0 || raw == u8::MAX {
			Err(DiscIdError::DeviceRead(String::from("Unable to obtain the last track number.")))
		}
		else { Ok(raw) }
	}

	/// # Leadout.
	fn leadout_lba(&self) -> Result<u32, DiscIdError> {
		let idx = u8::try_from(cdio_track_enums_CDIO_CDROM_LEADOUT_TRACK)
			.unwrap_or(170);
		self.track_lba_start(idx)
	}

	#[allow(unsafe_code)]
	#[allow(non_upper_case_globals)] // Not our globals.
	/// # Track Is Audio?
	fn track_is_audio(&self, idx: u8) -> Result<bool, DiscIdError> {
		let kind = unsafe { libcdio_sys::cdio_get_track_format(self.ptr, idx) };
		match kind {
			track_format_t_TRACK_FORMAT_AUDIO => Ok(true),
			track_format_t_TRACK_FORMAT_ERROR => Err(DiscIdError::DeviceRead(
				format!("Unable to obtain the format of track #{idx}.")
			)),
			_ => Ok(false),
		}
	}

	#[allow(unsafe_code)]
	/// # Track LBA Start.
	///
	/// This includes the lead-in.
	fn track_lba_start(&self, idx: u8) -> Result<u32, DiscIdError> {
		let raw = unsafe { libcdio_sys::cdio_get_track_lsn(self.ptr, idx) };
		if raw < 0 {
			Err(DiscIdError::DeviceRead(format!("Unable to obtain the LBA of track #{idx}.")))
		}
		else { Ok(raw.unsigned_abs() + CD_LEADIN) }
	}

	#[allow(unsafe_code)]
	/// # MCN.
	fn mcn(&self) -> Option<String> {
		let raw = unsafe { libcdio_sys::cdio_get_mcn(self.ptr) };
		let out = c_char_to_string(raw);
		if ! raw.is_null() {
			unsafe { libcdio_sys::cdio_free(raw.cast()); }
		}
		out
	}

	#[allow(unsafe_code)]
	/// # Track ISRC.
	fn track_isrc(&self, idx: u8) -> Option<String> {
		let raw = unsafe { libcdio_sys::cdio_get_track_isrc(self.ptr, idx) };
		let out = c_char_to_string(raw);
		if ! raw.is_null() {
			unsafe { libcdio_sys::cdio_free(raw.cast()); }
		}
		out
	}
}



#[allow(unsafe_code)]
/// # Initialize `libcdio`.
fn init() {
	LIBCDIO_INIT.call_once(|| unsafe { libcdio_sys::cdio_init(); });
}

#[allow(unsafe_code)]
/// # Pointer to String.
///
/// Convert C-string pointers to a string, unless they're null.
fn c_char_to_string(ptr: *const c_char) -> Option<String> {
	if ptr.is_null() { None }
	else {
		unsafe { CStr::from_ptr(ptr) }
			.to_str()
			.ok()
			.map(|s| s.trim().to_owned())
			.filter(|s| ! s.is_empty())
	}
}
