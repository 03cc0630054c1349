//! Normalization configuration

use crate::consts::{AB_SCALE, L_SCALE};
use crate::{Channel, ColorError, ColorResult};

/// Per-channel divisors applied when normalizing a LAB tensor
///
/// Normalizing divides each channel by its divisor, denormalizing multiplies
/// by it. The defaults map L from `[0, 100]` to `[0, 1]` and a/b from
/// `[-128, 127]` to `[-1, 127/128]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabRanges {
    /// Divisor for the L channel
    pub l: f64,
    /// Divisor for the a channel
    pub a: f64,
    /// Divisor for the b channel
    pub b: f64,
}

impl Default for LabRanges {
    fn default() -> Self {
        Self {
            l: L_SCALE,
            a: AB_SCALE,
            b: AB_SCALE,
        }
    }
}

impl LabRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn l(mut self, scale: f64) -> Self {
        self.l = scale;
        self
    }

    pub fn a(mut self, scale: f64) -> Self {
        self.a = scale;
        self
    }

    pub fn b(mut self, scale: f64) -> Self {
        self.b = scale;
        self
    }

    /// Divisors in channel order
    pub fn scales(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    pub fn scale(&self, channel: Channel) -> f64 {
        self.scales()[channel.index()]
    }

    /// Reject divisors that would make the transform non-invertible
    pub fn validate(&self) -> ColorResult<()> {
        for channel in Channel::ALL {
            let scale = self.scale(channel);
            if !scale.is_finite() || scale == 0.0 {
                return Err(ColorError::InvalidParameter(format!(
                    "{} divisor must be finite and non-zero, got {}",
                    channel, scale
                )));
            }
        }
        Ok(())
    }
}
