//! # LAB Pipeline Example
//!
//! Walks a small synthetic image through the helpers a colorization model
//! uses: RGB -> LAB -> normalized LAB (model input/output) -> LAB -> RGB.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run -p colorize --example lab_pipeline
//! ```

use colorize::{
    denormalize_lab, lab_to_rgb, normalize_lab, rgb_to_lab, Channel, ColorError, LabNormalizer,
};
use ndarray::{Array3, Axis};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("LAB Colorization Pipeline");
    println!("=========================\n");

    let rgb = Array3::from_shape_fn((4, 6, 3), |(y, x, c)| match c {
        0 => x as f64 / 5.0,
        1 => y as f64 / 3.0,
        _ => 0.25,
    });
    println!("1. RGB image: {:?}", rgb.shape());

    let lab = rgb_to_lab(&rgb)?;
    let lab_norm = normalize_lab(&lab)?;
    println!("2. Normalized LAB channel ranges:");
    for channel in Channel::ALL {
        let values = lab_norm.index_axis(Axis(2), channel.index());
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        println!("   - {}: [{:.4}, {:.4}]", channel, min, max);
    }

    let bounds = LabNormalizer::default().channel_bounds();
    println!("   - nominal bounds: {:?}\n", bounds);

    let rgb_back = lab_to_rgb(&denormalize_lab(&lab_norm)?)?;
    let max_error = rgb
        .iter()
        .zip(rgb_back.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("3. Round-trip max RGB error: {:.2e}\n", max_error);

    println!("4. Passing an RGBA tensor...");
    match normalize_lab(&Array3::<f64>::zeros((2, 2, 4))) {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(ColorError::Shape { shape, expected }) => {
            println!("   ✓ Caught Shape error");
            println!("   - Shape: {:?}, expected {} channels", shape, expected);
        }
        Err(e) => println!("   ✗ Unexpected error: {:?}", e),
    }

    Ok(())
}
