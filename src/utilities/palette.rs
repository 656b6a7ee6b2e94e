// src/utilities/palette.rs
//
// Maps a segment's angle from horizontal onto a fixed gradient:
// teal (horizontal) -> green -> yellow -> orange -> red (vertical)

use nannou::prelude::*;
use std::f32::consts::FRAC_PI_2;

pub fn pure_teal() -> Rgb8 {
    rgb8(0, 255, 255)
}

pub fn pure_red() -> Rgb8 {
    rgb8(255, 0, 0)
}

/// Color for the segment from `start` to `end`, by its absolute angle from
/// the horizontal axis.
///
/// Axis-aligned segments are special-cased so the gradient endpoints are
/// exact; a zero-length segment counts as horizontal.
pub fn color_for_angle(start: Point2, end: Point2) -> Rgb8 {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();

    if dy == 0.0 {
        return pure_teal();
    }
    if dx == 0.0 {
        return pure_red();
    }

    // 0 = horizontal, 1 = vertical
    let t = dy.atan2(dx) / FRAC_PI_2;
    gradient_at(t)
}

/// The gradient itself, over `t` in [0, 1]. Four linear bands of width 0.25.
/// Half the green channel survives the yellow -> orange band; the remaining
/// 128 fades out through orange -> red.
pub fn gradient_at(t: f32) -> Rgb8 {
    let t = t.clamp(0.0, 1.0);

    if t < 0.25 {
        // Teal to green
        let local = t / 0.25;
        rgb8(0, 255, channel(255.0 * (1.0 - local)))
    } else if t < 0.5 {
        // Green to yellow
        let local = (t - 0.25) / 0.25;
        rgb8(channel(255.0 * local), 255, 0)
    } else if t < 0.75 {
        // Yellow to orange
        let local = (t - 0.5) / 0.25;
        rgb8(255, channel(255.0 * (1.0 - local * 0.5)), 0)
    } else {
        // Orange to red
        let local = (t - 0.75) / 0.25;
        rgb8(255, channel(128.0 * (1.0 - local)), 0)
    }
}

// Round to nearest so adjacent bands agree at their shared boundary
fn channel(value: f32) -> u8 {
    value.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    mod axis_tests {
        use super::*;

        #[test]
        fn test_horizontal_is_pure_teal() {
            let color = color_for_angle(pt2(0.0, 0.0), pt2(200.0, 0.0));
            assert_eq!(color, rgb8(0, 255, 255));

            let color = color_for_angle(pt2(0.0, 0.0), pt2(-200.0, 0.0));
            assert_eq!(color, rgb8(0, 255, 255));
        }

        #[test]
        fn test_vertical_is_pure_red() {
            let color = color_for_angle(pt2(0.0, 0.0), pt2(0.0, 200.0));
            assert_eq!(color, rgb8(255, 0, 0));

            let color = color_for_angle(pt2(0.0, 0.0), pt2(0.0, -200.0));
            assert_eq!(color, rgb8(255, 0, 0));
        }

        #[test]
        fn test_zero_length_segment_counts_as_horizontal() {
            let color = color_for_angle(pt2(5.0, 5.0), pt2(5.0, 5.0));
            assert_eq!(color, rgb8(0, 255, 255));
        }
    }

    mod gradient_tests {
        use super::*;

        #[test]
        fn test_gradient_endpoints() {
            assert_eq!(gradient_at(0.0), rgb8(0, 255, 255));
            assert_eq!(gradient_at(1.0), rgb8(255, 0, 0));
        }

        #[test]
        fn test_continuity_at_band_boundaries() {
            let eps = 1e-6;
            for boundary in [0.25, 0.5, 0.75] {
                let below = gradient_at(boundary - eps);
                let at = gradient_at(boundary);
                assert_eq!(below, at, "discontinuity at t = {}", boundary);
            }
        }

        #[test]
        fn test_band_midpoints() {
            // Teal to green: blue halfway out
            assert_eq!(gradient_at(0.125), rgb8(0, 255, 128));
            // Green to yellow: red halfway in
            assert_eq!(gradient_at(0.375), rgb8(128, 255, 0));
            // Yellow to orange: a quarter of green gone
            assert_eq!(gradient_at(0.625), rgb8(255, 191, 0));
            // Orange to red: half the remaining green gone
            assert_eq!(gradient_at(0.875), rgb8(255, 64, 0));
        }

        #[test]
        fn test_steep_segment_is_near_red() {
            let color = color_for_angle(pt2(0.0, 200.0), pt2(10.0, 0.0));
            assert_eq!(color.red, 255);
            assert_eq!(color.blue, 0);
            assert!(color.green < 32);
        }

        #[test]
        fn test_shallow_segment_is_near_teal() {
            let color = color_for_angle(pt2(0.0, 10.0), pt2(200.0, 0.0));
            assert_eq!(color.red, 0);
            assert_eq!(color.green, 255);
            assert!(color.blue >= 220);
        }
    }
}
