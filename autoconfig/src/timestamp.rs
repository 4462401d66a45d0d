//! Conversion of fractional Unix timestamps, as reported by browser
//! automation tools for cookie expiry, into UTC times.

use chrono::{DateTime, Utc};

/// Converts seconds since the Unix epoch, fractional part included, into a
/// UTC time.
///
/// The fraction is truncated to whole nanoseconds. Returns `None` for NaN,
/// infinities, and values outside the range `chrono` can represent.
///
/// # Examples
///
/// ```
/// use autoconfig::timestamp_from_f64;
///
/// let expiry = timestamp_from_f64(1_700_000_000.25).expect("in range");
/// assert_eq!(expiry.timestamp(), 1_700_000_000);
/// assert_eq!(expiry.timestamp_subsec_millis(), 250);
/// assert!(timestamp_from_f64(f64::NAN).is_none());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "range is checked before the casts and the fraction lies in [0, 1)"
)]
pub fn timestamp_from_f64(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return None;
    }
    let nanos = ((seconds - whole) * 1e9) as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
}
