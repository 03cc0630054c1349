//! sRGB transfer curve and sample quantization
//!
//! The curve is evaluated in `f64` regardless of the component type so `f32`
//! tensors get the same knees as `f64` ones.

use colorize_core::consts::{RGB_MAX, RGB_MIN};
use colorize_core::Component;
use num_traits::clamp;

/// Encoded values at or below this lie on the linear segment
const ENCODED_KNEE: f64 = 0.04045;

/// Linear values at or below this lie on the linear segment
const LINEAR_KNEE: f64 = 0.0031308;

const LINEAR_SLOPE: f64 = 12.92;
const GAMMA: f64 = 2.4;
const OFFSET: f64 = 0.055;

/// Largest 8-bit sample
const U8_MAX: f64 = 255.0;

/// Decode a gamma-encoded sRGB component to linear light
pub fn srgb_to_linear<F: Component>(encoded: F) -> F {
    let v = encoded.into_f64();
    let linear = if v > ENCODED_KNEE {
        ((v + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    } else {
        v / LINEAR_SLOPE
    };
    F::cast(linear)
}

/// Encode a linear-light component with the sRGB curve
pub fn linear_to_srgb<F: Component>(linear: F) -> F {
    let v = linear.into_f64();
    let encoded = if v > LINEAR_KNEE {
        (1.0 + OFFSET) * v.powf(GAMMA.recip()) - OFFSET
    } else {
        v * LINEAR_SLOPE
    };
    F::cast(encoded)
}

/// Clamp a component to the displayable `[0, 1]` range
pub fn clamp_unit<F: Component>(value: F) -> F {
    clamp(value, F::cast(RGB_MIN), F::cast(RGB_MAX))
}

/// Map an 8-bit sample onto `[0, 1]`
pub fn srgb_from_u8<F: Component>(sample: u8) -> F {
    F::cast(sample as f64 / U8_MAX)
}

/// Quantize a `[0, 1]` component to 8 bits; out-of-range input saturates
pub fn srgb_to_u8<F: Component>(value: F) -> u8 {
    clamp((value.into_f64() * U8_MAX).round(), 0.0, U8_MAX) as u8
}
