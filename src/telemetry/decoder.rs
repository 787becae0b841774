/// Fixed-width frame decoding for the meter telemetry stream
use time::OffsetDateTime;

use crate::error::FrameError;
use crate::models::{AbsUnit, Sample};
use crate::telemetry::frame::FRAME_LEN;

/// Decode one fixed-width meter frame into a structured sample
///
/// A frame is exactly 10 ASCII bytes with the following layout:
/// - Byte 0: relative level sign (`+` or `-`, doubles as the stream delimiter)
/// - Bytes 1-3: relative level magnitude in tenths of a dBm
/// - Bytes 4-8: absolute level magnitude in hundredths
/// - Byte 9: absolute level unit tag (`u`, `m` or `w`)
///
/// The numeric fields must be pure decimal digits; a corrupted field is
/// rejected as [`FrameError::InvalidDigits`]. Unknown unit tags are carried
/// through verbatim rather than rejected, since the meter firmware grows new
/// range tags over time.
///
/// # Arguments
/// * `token` - Raw frame bytes as carved out by the frame scanner
///
/// # Returns
/// The decoded sample, stamped with the current time
pub fn decode_sample(token: &[u8]) -> Result<Sample, FrameError> {
    if token.len() != FRAME_LEN {
        return Err(FrameError::InvalidLength(token.len()));
    }

    let dbm_magnitude = parse_digits(&token[1..4])?;
    let abs_magnitude = parse_digits(&token[4..9])?;

    // anything other than an explicit minus reads as positive
    let sign = if token[0] == b'-' { -1.0 } else { 1.0 };

    Ok(Sample {
        dbm: sign * dbm_magnitude as f32 / 10.0,
        abs_level: abs_magnitude as f32 / 100.0,
        abs_unit: AbsUnit::from_tag(token[9] as char),
        time: OffsetDateTime::now_utc(),
    })
}

fn parse_digits(field: &[u8]) -> Result<u32, FrameError> {
    field.iter().try_fold(0u32, |acc, &byte| {
        if byte.is_ascii_digit() {
            Ok(acc * 10 + (byte - b'0') as u32)
        } else {
            Err(FrameError::InvalidDigits)
        }
    })
}
