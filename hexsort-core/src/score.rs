//! Dominance scoring.
//!
//! Channels selected by the mask form the "pure" hue and the remaining ones
//! its "negative". Three policies apply:
//!
//! - single-channel masks (`100`, `010`, `001`): the pure value minus the
//!   negative average, divided by how balanced the negative channels are
//! - two-channel masks (`110`, `101`, `011`): the pure average minus the
//!   negative value, multiplied by how balanced the pure channels are
//! - anything else (`111`, `000`, out of range): plain pure minus negative
//!
//! Averages are integer halves taken before the conversion to `f64`.

use crate::mask::{Channel, Mask, MaskKind};
use crate::rgb::Rgb;

/// Balance between two channel values, in `[0, 1]`.
///
/// The smaller value divided by the larger one; 0 when the first value is
/// zero, 1 when both are equal and non-zero.
pub fn channel_ratio(a: u32, b: u32) -> f64 {
    if a > b {
        f64::from(b) / f64::from(a)
    } else if a > 0 {
        f64::from(a) / f64::from(b)
    } else {
        0.0
    }
}

/// Ratio of the channel pair that `mask` compares.
///
/// Red and its complement cyan compare green against blue, green and
/// magenta compare red against blue, blue and yellow compare red against
/// green. Other masks have no pair and return 0.
pub fn mask_ratio(components: [u32; 3], mask: Mask) -> f64 {
    let [r, g, b] = components;
    match mask.value() {
        4 | 3 => channel_ratio(g, b),
        2 | 5 => channel_ratio(r, b),
        1 | 6 => channel_ratio(r, g),
        _ => 0.0,
    }
}

/// Split `rgb` into its pure and negative components under `mask`.
fn split(rgb: Rgb, mask: Mask) -> ([u32; 3], [u32; 3]) {
    let mut pure = [0u32; 3];
    let mut negative = [0u32; 3];
    for channel in Channel::ALL {
        let i = channel as usize;
        if mask.selects(channel) {
            pure[i] = u32::from(rgb[i]);
        } else {
            negative[i] = u32::from(rgb[i]);
        }
    }
    (pure, negative)
}

/// Score how strongly `rgb` expresses the hue selected by `mask`.
///
/// Higher is more dominant. Deterministic and side-effect free.
pub fn dominance(rgb: Rgb, mask: Mask) -> f64 {
    let (pure, negative) = split(rgb, mask);
    let pure_sum: u32 = pure.iter().sum();
    let negative_sum: u32 = negative.iter().sum();

    match mask.kind() {
        MaskKind::Single => {
            let pure = f64::from(pure_sum);
            let negative_avg = f64::from(negative_sum / 2);
            let ratio = 1.0 + negative_avg * mask_ratio(negative, mask);
            (pure - negative_avg) / ratio
        }
        MaskKind::Pair => {
            let pure_avg = f64::from(pure_sum / 2);
            let negative = f64::from(negative_sum);
            let ratio = 1.0 + pure_avg * mask_ratio(pure, mask);
            (pure_avg - negative) * ratio
        }
        MaskKind::Extreme => f64::from(pure_sum) - f64::from(negative_sum),
    }
}
