//! Array-level RGB <-> LAB conversion
//!
//! Converters operate on channel-last tensors of any rank (`(H, W, 3)`
//! images, `(N, 3)` pixel lists, `(B, H, W, 3)` batches). Large tensors are
//! split across the rayon thread pool; the result does not depend on which
//! path was taken.

use std::sync::atomic::{AtomicUsize, Ordering};

use colorize_core::{check_channels_last, pixel_count, ColorResult, Component, Illuminant};
use ndarray::{Array, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, Dimension, Zip};
use tracing::{debug, warn};

use crate::lab::{lab_pixel_to_rgb_clipped, rgb_pixel_to_lab};

/// Tensors with at least this many pixels are converted in parallel
pub const PARALLEL_THRESHOLD: usize = 64 * 64;

/// RGB <-> LAB conversion over channel-last tensors
pub trait ColorSpaceConverter {
    /// Convert an RGB tensor with values in `[0, 1]` to LAB
    fn to_lab<F, S, D>(&self, rgb: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
    where
        F: Component,
        S: Data<Elem = F>,
        D: Dimension;

    /// Convert a LAB tensor to RGB, clipped to `[0, 1]`
    fn to_rgb<F, S, D>(&self, lab: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
    where
        F: Component,
        S: Data<Elem = F>,
        D: Dimension;
}

/// Standard sRGB <-> CIE L*a*b* converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CieLabConverter {
    illuminant: Illuminant,
    parallel_threshold: Option<usize>,
}

impl CieLabConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_illuminant(illuminant: Illuminant) -> Self {
        Self {
            illuminant,
            ..Self::default()
        }
    }

    pub fn illuminant(&self) -> Illuminant {
        self.illuminant
    }

    /// Override the pixel count at which conversion switches to rayon
    pub fn parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = Some(pixels);
        self
    }

    fn threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(PARALLEL_THRESHOLD)
    }
}

impl ColorSpaceConverter for CieLabConverter {
    fn to_lab<F, S, D>(&self, rgb: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
    where
        F: Component,
        S: Data<Elem = F>,
        D: Dimension,
    {
        let illuminant = self.illuminant;
        let (lab, _) = map_pixels(rgb, self.threshold(), |px| {
            (rgb_pixel_to_lab(px, illuminant), false)
        })?;
        debug!(pixels = pixel_count(rgb.shape()), %illuminant, "converted RGB to LAB");
        Ok(lab)
    }

    fn to_rgb<F, S, D>(&self, lab: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
    where
        F: Component,
        S: Data<Elem = F>,
        D: Dimension,
    {
        let illuminant = self.illuminant;
        let (rgb, clipped) = map_pixels(lab, self.threshold(), |px| {
            lab_pixel_to_rgb_clipped(px, illuminant)
        })?;
        if clipped > 0 {
            warn!(clipped, "Color data out of range: Z < 0 in {} pixels", clipped);
        }
        debug!(pixels = pixel_count(lab.shape()), %illuminant, "converted LAB to RGB");
        Ok(rgb)
    }
}

/// Apply `convert` to every pixel, counting the pixels it flags
fn map_pixels<F, S, D, M>(
    input: &ArrayBase<S, D>,
    threshold: usize,
    convert: M,
) -> ColorResult<(Array<F, D>, usize)>
where
    F: Component,
    S: Data<Elem = F>,
    D: Dimension,
    M: Fn([f64; 3]) -> ([f64; 3], bool) + Sync + Send,
{
    check_channels_last(input.shape())?;

    let axis = Axis(input.ndim() - 1);
    let mut output = Array::<F, D>::zeros(input.raw_dim());
    let flagged = AtomicUsize::new(0);

    let body = |mut out: ArrayViewMut1<F>, px: ArrayView1<F>| {
        let (converted, flag) = convert([px[0].into_f64(), px[1].into_f64(), px[2].into_f64()]);
        out[0] = F::cast(converted[0]);
        out[1] = F::cast(converted[1]);
        out[2] = F::cast(converted[2]);
        if flag {
            flagged.fetch_add(1, Ordering::Relaxed);
        }
    };

    let zip = Zip::from(output.lanes_mut(axis)).and(input.lanes(axis));
    if pixel_count(input.shape()) >= threshold {
        zip.par_for_each(body);
    } else {
        zip.for_each(body);
    }

    Ok((output, flagged.into_inner()))
}

/// Convert an RGB tensor to LAB under the D65 illuminant
pub fn rgb_to_lab<F, S, D>(rgb: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
where
    F: Component,
    S: Data<Elem = F>,
    D: Dimension,
{
    CieLabConverter::default().to_lab(rgb)
}

/// Convert a LAB tensor to RGB under the D65 illuminant
pub fn lab_to_rgb<F, S, D>(lab: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
where
    F: Component,
    S: Data<Elem = F>,
    D: Dimension,
{
    CieLabConverter::default().to_rgb(lab)
}
