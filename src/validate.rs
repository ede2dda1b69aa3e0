//! Numeric parsing and plausibility checks for resolution tokens.
//!
//! Two notations are understood:
//!
//! - Explicit `WxH` (`1920x1080`, `4.096×2.160`)
//! - Shorthand `Np` (`1080p`), where width is derived from a 16:9 ratio
//!
//! Anything else is rejected rather than reported as an error.

use crate::error::Rejection;
use crate::patterns::THOUSANDS_SEPARATOR;
use crate::record::{MIN_AREA, MIN_DIMENSION};

/// Aspect ratio assumed for shorthand tokens, as `(width, height)`.
pub const SHORTHAND_ASPECT: (u64, u64) = (16, 9);

/// Parses a token into `(width, height)` without checking bounds.
///
/// # Errors
///
/// Returns [`Rejection::Unparseable`] if the token is neither an explicit
/// pair of integers nor an integer followed by `p`.
pub fn parse_dimensions(token: &str) -> Result<(u64, u64), Rejection> {
    let clean = THOUSANDS_SEPARATOR.replace_all(token, "");
    let unparseable = || Rejection::Unparseable(token.to_string());

    if clean.contains(['x', 'X', '×']) {
        let mut parts = clean.split(['x', 'X', '×']);
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(unparseable());
        };
        let width = width.parse::<u64>().map_err(|_| unparseable())?;
        let height = height.parse::<u64>().map_err(|_| unparseable())?;
        return Ok((width, height));
    }

    if let Some(height) = clean.strip_suffix(['p', 'P']) {
        let height = height.parse::<u64>().map_err(|_| unparseable())?;
        let width = shorthand_width(height).ok_or_else(unparseable)?;
        return Ok((width, height));
    }

    Err(unparseable())
}

/// Width implied by a shorthand height, rounded to the nearest pixel.
///
/// With an odd ratio height, `n / 9` never lands exactly on a half, so the
/// integer form `(n + 4) / 9` matches `round(n / 9)`.
#[must_use]
pub fn shorthand_width(height: u64) -> Option<u64> {
    let (ratio_w, ratio_h) = SHORTHAND_ASPECT;
    let scaled = height.checked_mul(ratio_w)?.checked_add(ratio_h / 2)?;
    Some(scaled / ratio_h)
}

/// Returns the pixel area if the dimensions are plausible.
///
/// # Errors
///
/// Returns [`Rejection::OutOfBounds`] when either side is at most
/// [`MIN_DIMENSION`], the area is at most [`MIN_AREA`], or the area
/// overflows.
pub fn check_bounds(width: u64, height: u64) -> Result<u64, Rejection> {
    match width.checked_mul(height) {
        Some(area) if width > MIN_DIMENSION && height > MIN_DIMENSION && area > MIN_AREA => {
            Ok(area)
        }
        _ => Err(Rejection::OutOfBounds { width, height }),
    }
}
