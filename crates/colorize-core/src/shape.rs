//! Shape validation for channel-last image tensors

use crate::consts::CHANNEL_COUNT;
use crate::{ColorError, ColorResult};

/// Check that `shape` describes a channel-last tensor with 3 channels.
///
/// Any tensor with at least two axes whose trailing axis has length 3 is
/// accepted: `(H, W, 3)` images, `(N, 3)` pixel lists and `(B, H, W, 3)`
/// batches all pass.
pub fn check_channels_last(shape: &[usize]) -> ColorResult<()> {
    match shape.last() {
        Some(&channels) if shape.len() >= 2 && channels == CHANNEL_COUNT => Ok(()),
        _ => Err(ColorError::Shape {
            shape: shape.to_vec(),
            expected: CHANNEL_COUNT,
        }),
    }
}

/// Number of pixels in a channel-last tensor (product of all leading axes)
pub fn pixel_count(shape: &[usize]) -> usize {
    shape.split_last().map_or(0, |(_, lead)| lead.iter().product())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_channel_last() {
        assert!(check_channels_last(&[4, 5, 3]).is_ok());
        assert!(check_channels_last(&[7, 3]).is_ok());
        assert!(check_channels_last(&[2, 4, 5, 3]).is_ok());
        assert!(check_channels_last(&[0, 0, 3]).is_ok());
    }

    #[test]
    fn test_rejects_wrong_channel_count() {
        let err = check_channels_last(&[4, 5, 4]).unwrap_err();
        assert_eq!(
            err,
            ColorError::Shape {
                shape: vec![4, 5, 4],
                expected: 3
            }
        );
        assert!(check_channels_last(&[3, 5]).is_err());
    }

    #[test]
    fn test_rejects_too_few_axes() {
        assert!(check_channels_last(&[3]).is_err());
        assert!(check_channels_last(&[]).is_err());
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(pixel_count(&[4, 5, 3]), 20);
        assert_eq!(pixel_count(&[7, 3]), 7);
        assert_eq!(pixel_count(&[]), 0);
    }
}
