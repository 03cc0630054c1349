//! CIE L*a*b* color space implementation
//!
//! Pixels travel sRGB -> linear RGB -> XYZ -> L*a*b* and back. XYZ is scaled
//! by the white point of the selected illuminant before the LAB nonlinearity.

use colorize_core::Illuminant;

use crate::srgb::{clamp_unit, linear_to_srgb, srgb_from_u8, srgb_to_linear, srgb_to_u8};

/// Linear sRGB to XYZ matrix
const XYZ_FROM_RGB: [[f64; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// Inverse of `XYZ_FROM_RGB`
const RGB_FROM_XYZ: [[f64; 3]; 3] = [
    [3.24048134, -1.53715152, -0.49853633],
    [-0.96925495, 1.87599, 0.04155593],
    [0.05564664, -0.20404134, 1.05731107],
];

/// Below this ratio the LAB curve switches to its linear segment
const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment
const LAB_KAPPA: f64 = 7.787;

const LAB_OFFSET: f64 = 16.0 / 116.0;

/// `LAB_EPSILON` mapped through the forward curve
const LAB_F_EPSILON: f64 = 0.2068966;

fn mat_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA * t + LAB_OFFSET
    }
}

fn lab_f_inv(f: f64) -> f64 {
    if f > LAB_F_EPSILON {
        f * f * f
    } else {
        (f - LAB_OFFSET) / LAB_KAPPA
    }
}

/// Convert sRGB (`[0, 1]` per channel) to XYZ
pub fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let linear = rgb.map(srgb_to_linear);
    mat_mul(&XYZ_FROM_RGB, linear)
}

/// Convert XYZ to sRGB without clamping
pub fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    mat_mul(&RGB_FROM_XYZ, xyz).map(linear_to_srgb)
}

/// Convert XYZ to L*a*b* relative to `illuminant`
pub fn xyz_to_lab(xyz: [f64; 3], illuminant: Illuminant) -> [f64; 3] {
    let white = illuminant.white_point();
    let fx = lab_f(xyz[0] / white[0]);
    let fy = lab_f(xyz[1] / white[1]);
    let fz = lab_f(xyz[2] / white[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert L*a*b* to XYZ relative to `illuminant`
///
/// Returns the XYZ triple and whether Z had to be clipped at zero, which
/// happens for LAB values far outside the visible gamut.
pub fn lab_to_xyz(lab: [f64; 3], illuminant: Illuminant) -> ([f64; 3], bool) {
    let [l, a, b] = lab;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let mut fz = fy - b / 200.0;

    let clipped = fz < 0.0;
    if clipped {
        fz = 0.0;
    }

    let white = illuminant.white_point();
    let xyz = [
        lab_f_inv(fx) * white[0],
        lab_f_inv(fy) * white[1],
        lab_f_inv(fz) * white[2],
    ];
    (xyz, clipped)
}

/// Convert one sRGB pixel to L*a*b*
pub fn rgb_pixel_to_lab(rgb: [f64; 3], illuminant: Illuminant) -> [f64; 3] {
    xyz_to_lab(rgb_to_xyz(rgb), illuminant)
}

/// Convert one L*a*b* pixel to sRGB, clamped to `[0, 1]`
pub fn lab_pixel_to_rgb(lab: [f64; 3], illuminant: Illuminant) -> [f64; 3] {
    lab_pixel_to_rgb_clipped(lab, illuminant).0
}

/// Same as [`lab_pixel_to_rgb`], also reporting whether Z was clipped
pub fn lab_pixel_to_rgb_clipped(lab: [f64; 3], illuminant: Illuminant) -> ([f64; 3], bool) {
    let (xyz, clipped) = lab_to_xyz(lab, illuminant);
    let rgb = xyz_to_rgb(xyz).map(clamp_unit);
    (rgb, clipped)
}

/// Convert an 8-bit sRGB pixel to L*a*b*
pub fn rgb8_to_lab(rgb: [u8; 3], illuminant: Illuminant) -> [f64; 3] {
    rgb_pixel_to_lab(rgb.map(srgb_from_u8), illuminant)
}

/// Convert an L*a*b* pixel to 8-bit sRGB
pub fn lab_to_rgb8(lab: [f64; 3], illuminant: Illuminant) -> [u8; 3] {
    lab_pixel_to_rgb(lab, illuminant).map(srgb_to_u8)
}
