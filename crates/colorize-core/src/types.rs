//! Core types for LAB colorization helpers

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::ColorError;

/// Floating-point element type of an image tensor
pub trait Component: Float + fmt::Debug + Send + Sync + 'static {
    /// Convert an `f64` constant into this component type
    fn cast(value: f64) -> Self;

    /// Widen this component to `f64`
    fn into_f64(self) -> f64;
}

impl Component for f32 {
    fn cast(value: f64) -> Self {
        value as f32
    }

    fn into_f64(self) -> f64 {
        self as f64
    }
}

impl Component for f64 {
    fn cast(value: f64) -> Self {
        value
    }

    fn into_f64(self) -> f64 {
        self
    }
}

/// LAB channel, indexed by its position on the trailing axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Lightness
    L = 0,
    /// Green-red chrominance
    #[cfg_attr(feature = "serde", serde(rename = "a"))]
    A = 1,
    /// Blue-yellow chrominance
    #[cfg_attr(feature = "serde", serde(rename = "b"))]
    B = 2,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::L, Channel::A, Channel::B];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::L => "L",
            Channel::A => "a",
            Channel::B => "b",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference white used to scale XYZ before the LAB nonlinearity
///
/// White points are given for the CIE 1931 2° standard observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Illuminant {
    /// Incandescent / tungsten
    A,
    /// Horizon light
    D50,
    /// Mid-morning / mid-afternoon daylight
    D55,
    /// Noon daylight
    #[default]
    D65,
    /// North sky daylight
    D75,
    /// Equal energy
    E,
}

impl Illuminant {
    pub const ALL: [Illuminant; 6] = [
        Illuminant::A,
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D65,
        Illuminant::D75,
        Illuminant::E,
    ];

    /// XYZ tristimulus of the reference white, normalized to Y = 1
    pub fn white_point(&self) -> [f64; 3] {
        match self {
            Illuminant::A => [1.098466069456375, 1.0, 0.3558228003436005],
            Illuminant::D50 => [0.9642119944211994, 1.0, 0.8251882845188288],
            Illuminant::D55 => [0.956797052643698, 1.0, 0.9214805860173273],
            Illuminant::D65 => [0.95047, 1.0, 1.08883],
            Illuminant::D75 => [0.9497220898840717, 1.0, 1.226393520724154],
            Illuminant::E => [1.0, 1.0, 1.0],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Illuminant::A => "A",
            Illuminant::D50 => "D50",
            Illuminant::D55 => "D55",
            Illuminant::D65 => "D65",
            Illuminant::D75 => "D75",
            Illuminant::E => "E",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Illuminant::ALL
            .into_iter()
            .find(|illuminant| illuminant.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownIlluminant(s.to_string()))
    }
}
