/*!
# Disc ID: FreeDB
*/

use crate::{
	SECTORS_PER_SECOND,
	Toc,
};



#[derive(Debug, Clone, Copy)]
/// # FreeDB Disc ID Hasher.
///
/// This calculates the legacy FreeDB/CDDB disc ID, an eight-digit hex value
/// packing a checksum of the track start times, the disc length in seconds,
/// and the track count.
pub struct FreedbHasher;

impl FreedbHasher {
	#[must_use]
	/// # Compute FreeDB ID.
	///
	/// The layout is:
	/// * bits 24-31: the sum of the decimal digits of each track's start time in seconds, mod 255;
	/// * bits 8-23: the number of seconds between the first track and the lead-out;
	/// * bits 0-7: the number of tracks.
	///
	/// All second values are whole-second floors, computed separately for
	/// each sector value before subtracting.
	///
	/// ## Examples
	///
	/// ```
	/// use discid_core::{FreedbHasher, Toc};
	///
	/// let toc = Toc::new(1, 2, 30_000, vec![150, 15_000]).unwrap();
	/// assert_eq!(FreedbHasher::compute(&toc), "04018e02");
	/// ```
	pub fn compute(toc: &Toc) -> String { format!("{:08x}", Self::compute_u32(toc)) }

	#[must_use]
	/// # Compute FreeDB ID (Raw).
	///
	/// Same as [`FreedbHasher::compute`], but returns the number itself.
	pub fn compute_u32(toc: &Toc) -> u32 {
		let offsets = toc.offsets();
		let checksum = offsets.iter()
			.map(|&v| digit_sum(v.wrapping_div(SECTORS_PER_SECOND)))
			.sum::<u32>() % 255;

		let length =
			toc.total_sectors().wrapping_div(SECTORS_PER_SECOND) -
			offsets[0].wrapping_div(SECTORS_PER_SECOND);

		checksum << 24 | (length & 0xFFFF) << 8 | u32::from(toc.track_count())
	}
}



/// # Digit Sum.
///
/// Add up the decimal digits of a number.
const fn digit_sum(mut num: u32) -> u32 {
	let mut out = 0;
	while 0 < num {
		out += num % 10;
		num = num.wrapping_div(10);
	}
	out
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_digit_sum() {
		assert_eq!(digit_sum(0), 0);
		assert_eq!(digit_sum(7), 7);
		assert_eq!(digit_sum(123), 6);
		assert_eq!(digit_sum(999), 27);
		assert_eq!(digit_sum(3141), 9);
	}

	#[test]
	fn t_freedb() {
		let toc = Toc::new(
			1,
			15,
			258_725,
			vec![
				150, 17_510, 33_275, 45_910, 57_805, 78_310, 94_650, 109_580,
				132_010, 149_160, 165_115, 177_710, 203_325, 215_555, 235_590,
			],
		).expect("Valid TOC failed.");
		assert_eq!(FreedbHasher::compute(&toc), "b60d770f");
		assert_eq!(FreedbHasher::compute_u32(&toc), 0xb60d_770f);

		// The low byte is always the track count.
		let toc = Toc::new(3, 4, 1000, vec![150, 500]).expect("Valid TOC failed.");
		assert_eq!(FreedbHasher::compute_u32(&toc) & 0xFF, 2);
	}
}
