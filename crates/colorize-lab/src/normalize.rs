//! LAB channel normalization
//!
//! Maps LAB tensors to network-friendly ranges and back by dividing (or
//! multiplying) each channel by a fixed divisor. With the default divisors:
//!
//! | channel | nominal range  | normalized range |
//! |---------|----------------|------------------|
//! | L       | `[0, 100]`     | `[0, 1]`         |
//! | a, b    | `[-128, 127]`  | `[-1, 127/128]`  |
//!
//! No clamping is performed: values outside the nominal ranges are rescaled
//! by the same formula.

use colorize_core::consts::{AB_MAX, AB_MIN, L_MAX, L_MIN};
use colorize_core::{check_channels_last, Channel, ColorResult, Component, LabRanges};
use ndarray::{Array, ArrayBase, Axis, Data, DataMut, Dimension, RemoveAxis};

/// Per-channel affine rescaling of LAB tensors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabNormalizer {
    ranges: LabRanges,
}

impl Default for LabNormalizer {
    fn default() -> Self {
        Self {
            ranges: LabRanges::default(),
        }
    }
}

impl LabNormalizer {
    /// Create a normalizer with custom divisors
    pub fn new(ranges: LabRanges) -> ColorResult<Self> {
        ranges.validate()?;
        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> LabRanges {
        self.ranges
    }

    /// Nominal normalized interval `(min, max)` of each channel
    pub fn channel_bounds(&self) -> [(f64, f64); 3] {
        let nominal = [(L_MIN, L_MAX), (AB_MIN, AB_MAX), (AB_MIN, AB_MAX)];
        Channel::ALL.map(|channel| {
            let scale = self.ranges.scale(channel);
            let (lo, hi) = nominal[channel.index()];
            let (lo, hi) = (lo / scale, hi / scale);
            (lo.min(hi), lo.max(hi))
        })
    }

    /// Return a normalized copy of `lab`; the input is left untouched
    pub fn normalize<F, S, D>(&self, lab: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
    where
        F: Component,
        S: Data<Elem = F>,
        D: Dimension + RemoveAxis,
    {
        check_channels_last(lab.shape())?;
        let mut out = lab.to_owned();
        self.normalize_in_place(&mut out)?;
        Ok(out)
    }

    /// Return a denormalized copy of `lab_norm`; the input is left untouched
    pub fn denormalize<F, S, D>(&self, lab_norm: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
    where
        F: Component,
        S: Data<Elem = F>,
        D: Dimension + RemoveAxis,
    {
        check_channels_last(lab_norm.shape())?;
        let mut out = lab_norm.to_owned();
        self.denormalize_in_place(&mut out)?;
        Ok(out)
    }

    /// Normalize `lab` in place
    pub fn normalize_in_place<F, S, D>(&self, lab: &mut ArrayBase<S, D>) -> ColorResult<()>
    where
        F: Component,
        S: DataMut<Elem = F>,
        D: Dimension + RemoveAxis,
    {
        self.rescale(lab, |v, scale| v / scale)
    }

    /// Denormalize `lab_norm` in place
    pub fn denormalize_in_place<F, S, D>(&self, lab_norm: &mut ArrayBase<S, D>) -> ColorResult<()>
    where
        F: Component,
        S: DataMut<Elem = F>,
        D: Dimension + RemoveAxis,
    {
        self.rescale(lab_norm, |v, scale| v * scale)
    }

    fn rescale<F, S, D>(&self, tensor: &mut ArrayBase<S, D>, op: impl Fn(F, F) -> F) -> ColorResult<()>
    where
        F: Component,
        S: DataMut<Elem = F>,
        D: Dimension + RemoveAxis,
    {
        check_channels_last(tensor.shape())?;
        let axis = Axis(tensor.ndim() - 1);
        let scales = self.ranges.scales();
        for (mut values, scale) in tensor.axis_iter_mut(axis).zip(scales) {
            let scale = F::cast(scale);
            values.mapv_inplace(|v| op(v, scale));
        }
        Ok(())
    }
}

/// Normalize a LAB tensor with the default divisors
pub fn normalize_lab<F, S, D>(lab: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
where
    F: Component,
    S: Data<Elem = F>,
    D: Dimension + RemoveAxis,
{
    LabNormalizer::default().normalize(lab)
}

/// Undo [`normalize_lab`]
pub fn denormalize_lab<F, S, D>(lab_norm: &ArrayBase<S, D>) -> ColorResult<Array<F, D>>
where
    F: Component,
    S: Data<Elem = F>,
    D: Dimension + RemoveAxis,
{
    LabNormalizer::default().denormalize(lab_norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorize_core::ColorError;
    use ndarray::{array, Array1, Array3};

    #[test]
    fn test_normalize_boundaries() {
        let lab = array![[[0.0, 0.0, 0.0], [100.0, 127.0, -128.0]]];
        let norm = normalize_lab(&lab).unwrap();
        assert_eq!(norm, array![[[0.0, 0.0, 0.0], [1.0, 0.9921875, -1.0]]]);
    }

    #[test]
    fn test_denormalize_boundaries() {
        let norm = array![[[1.0, 0.9921875, -1.0]]];
        let lab = denormalize_lab(&norm).unwrap();
        assert_eq!(lab, array![[[100.0, 127.0, -128.0]]]);
    }

    #[test]
    fn test_no_clamping() {
        let lab = array![[[200.0, -300.0, 256.0]]];
        let norm = normalize_lab(&lab).unwrap();
        assert_eq!(norm, array![[[2.0, -2.34375, 2.0]]]);
    }

    #[test]
    fn test_in_place_matches_copy() {
        let lab = Array3::from_shape_fn((3, 4, 3), |(y, x, c)| (y * 12 + x * 3 + c) as f32 - 10.0);
        let copied = normalize_lab(&lab).unwrap();
        let mut in_place = lab.clone();
        LabNormalizer::default().normalize_in_place(&mut in_place).unwrap();
        assert_eq!(copied, in_place);

        LabNormalizer::default().denormalize_in_place(&mut in_place).unwrap();
        for (a, b) in lab.iter().zip(in_place.iter()) {
            assert!((a - b).abs() <= 1e-5 * a.abs().max(1.0));
        }
    }

    #[test]
    fn test_in_place_on_view() {
        let mut lab = array![[[50.0, 64.0, -64.0], [10.0, 0.0, 32.0]]];
        {
            let mut first_row = lab.slice_mut(ndarray::s![.., 0..1, ..]);
            LabNormalizer::default().normalize_in_place(&mut first_row).unwrap();
        }
        assert_eq!(lab, array![[[0.5, 0.5, -0.5], [10.0, 0.0, 32.0]]]);
    }

    #[test]
    fn test_any_rank_and_layout() {
        let batch = Array::from_elem(ndarray::IxDyn(&[2, 2, 3]), 128.0f64);
        let norm = normalize_lab(&batch).unwrap();
        assert_eq!(norm.shape(), &[2, 2, 3]);
        assert_eq!(norm[ndarray::IxDyn(&[1, 1, 0])], 1.28);
        assert_eq!(norm[ndarray::IxDyn(&[1, 1, 2])], 1.0);

        let empty = Array3::<f64>::zeros((0, 0, 3));
        assert_eq!(normalize_lab(&empty).unwrap().shape(), &[0, 0, 3]);

        // Transposed view: channels still run along the last axis
        let base = array![[100.0f64, 50.0, 0.0], [128.0, 64.0, 32.0], [-128.0, 256.0, 0.0]];
        let norm = normalize_lab(&base.t()).unwrap();
        assert_eq!(norm.row(0).to_vec(), vec![1.0, 1.0, -1.0]);
        assert_eq!(norm.row(1).to_vec(), vec![0.5, 0.5, 2.0]);
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        let lab = array![[[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]]];
        let norm = normalize_lab(&lab).unwrap();
        assert!(norm[[0, 0, 0]].is_nan());
        assert_eq!(norm[[0, 0, 1]], f64::INFINITY);
        assert_eq!(norm[[0, 0, 2]], f64::NEG_INFINITY);
    }

    #[test]
    fn test_custom_ranges() {
        let normalizer = LabNormalizer::new(LabRanges::new().l(50.0).a(100.0).b(200.0)).unwrap();
        let norm = normalizer.normalize(&array![[50.0, 50.0, 50.0]]).unwrap();
        assert_eq!(norm, array![[1.0, 0.5, 0.25]]);
    }

    #[test]
    fn test_invalid_ranges() {
        let err = LabNormalizer::new(LabRanges::new().a(0.0)).unwrap_err();
        assert!(matches!(err, ColorError::InvalidParameter(_)));
    }

    #[test]
    fn test_channel_bounds() {
        let bounds = LabNormalizer::default().channel_bounds();
        assert_eq!(bounds[0], (0.0, 1.0));
        assert_eq!(bounds[1], (-1.0, 0.9921875));
        assert_eq!(bounds[2], (-1.0, 0.9921875));
    }

    #[test]
    fn test_shape_errors() {
        let wrong_channels = Array3::<f64>::zeros((2, 2, 2));
        assert_eq!(
            normalize_lab(&wrong_channels).unwrap_err(),
            ColorError::Shape {
                shape: vec![2, 2, 2],
                expected: 3
            }
        );

        let flat = Array1::<f64>::zeros(3);
        assert!(denormalize_lab(&flat).is_err());

        let mut flat = flat;
        assert!(LabNormalizer::default().normalize_in_place(&mut flat).is_err());
    }
}
