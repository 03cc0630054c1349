//! Constants describing the nominal LAB and RGB channel ranges

/// Number of color channels in every image tensor
pub const CHANNEL_COUNT: usize = 3;

/// Nominal lightness range
pub const L_MIN: f64 = 0.0;
pub const L_MAX: f64 = 100.0;

/// Nominal chrominance range (a and b channels)
pub const AB_MIN: f64 = -128.0;
pub const AB_MAX: f64 = 127.0;

/// Default divisor for the L channel
pub const L_SCALE: f64 = 100.0;

/// Default divisor for the a and b channels
pub const AB_SCALE: f64 = 128.0;

/// Nominal RGB range
pub const RGB_MIN: f64 = 0.0;
pub const RGB_MAX: f64 = 1.0;
