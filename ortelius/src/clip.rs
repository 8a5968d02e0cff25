//! Rectangle clipping over integer-quantized coordinates.
//!
//! Feature rings are snapped to a 1/100 unit grid before the boolean
//! intersection so the operation runs on exact integer coordinates instead
//! of raw floats. Coordinates whose magnitude overflows the scaled 64-bit
//! range are outside the contract.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use ortelius_types::{PlanePoint, Rect};

use crate::feature::FeatureRecord;

/// Quantization factor: two decimal digits of sub-unit precision.
const SCALE: f64 = 100.0;

fn quantize(value: f64) -> i64 {
    (value * SCALE).round() as i64
}

fn dequantize(value: i64) -> f64 {
    value as f64 / SCALE
}

/// Builds the quantized clip rectangle as a closed ring, top-left corner
/// first, clockwise.
pub(crate) fn quantize_rect(rect: &Rect) -> Vec<[f64; 2]> {
    let left = quantize(rect.x_min) as f64;
    let top = quantize(rect.y_max) as f64;
    let right = quantize(rect.x_max) as f64;
    let bottom = quantize(rect.y_min) as f64;
    vec![
        [left, top],
        [right, top],
        [right, bottom],
        [left, bottom],
    ]
}

/// Intersects one feature's point ring with the quantized rectangle.
///
/// The ring is treated as a closed polygon whatever the source geometry
/// was. The intersection may produce zero, one or several output polygons;
/// each one is emitted as its own record carrying a copy of the input
/// record's fields. Records with fewer than three points have an empty
/// intersection.
pub(crate) fn clip_record(record: &FeatureRecord, clip_ring: &[[f64; 2]]) -> Vec<FeatureRecord> {
    if record.points().len() < 3 {
        return Vec::new();
    }

    let subject: Vec<[f64; 2]> = record
        .points()
        .iter()
        .map(|point| [quantize(point.x()) as f64, quantize(point.y()) as f64])
        .collect();

    let shapes = [subject].overlay(
        &[clip_ring.to_vec()],
        OverlayRule::Intersect,
        FillRule::EvenOdd,
    );

    let mut result = Vec::new();
    for shape in shapes {
        for contour in shape {
            let mut output = record.clone_without_points();
            for vertex in contour {
                output.add_point(PlanePoint::new(
                    dequantize(vertex[0].round() as i64),
                    dequantize(vertex[1].round() as i64),
                ));
            }
            result.push(output);
        }
    }

    result
}
