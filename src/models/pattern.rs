// src/models/pattern.rs
// The fixed star geometry: four quadrants of radiating chords plus the axes

use nannou::prelude::*;

use crate::utilities::palette;

/// One drawn line in pattern space, with its color resolved.
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    pub color: Rgb8,
}

/// The ordered segment sequence the animation reveals front to back.
///
/// Reveal order: quadrant I chords, +Y axis, +X axis, quadrant II chords,
/// -X axis, quadrant III chords, -Y axis, quadrant IV chords.
#[derive(Debug, Clone)]
pub struct StarPattern {
    pub segments: Vec<Segment>,
}

impl StarPattern {
    pub fn build(arms_per_quadrant: usize, radius: f32) -> Self {
        let mut segments = Vec::with_capacity(arms_per_quadrant * 4 + 4);
        let step = radius / arms_per_quadrant as f32;

        // Quadrant I: top-right, chords from the +Y axis down to the +X axis
        push_quadrant(&mut segments, arms_per_quadrant, step, radius, 1.0, 1.0);
        segments.push(axis_segment(pt2(0.0, radius), palette::pure_red()));
        segments.push(axis_segment(pt2(radius, 0.0), palette::pure_teal()));

        // Quadrant II: top-left
        push_quadrant(&mut segments, arms_per_quadrant, step, radius, -1.0, 1.0);
        segments.push(axis_segment(pt2(-radius, 0.0), palette::pure_teal()));

        // Quadrant III: bottom-left
        push_quadrant(&mut segments, arms_per_quadrant, step, radius, -1.0, -1.0);
        segments.push(axis_segment(pt2(0.0, -radius), palette::pure_red()));

        // Quadrant IV: bottom-right
        push_quadrant(&mut segments, arms_per_quadrant, step, radius, 1.0, -1.0);

        Self { segments }
    }

    pub fn total_segments(&self) -> usize {
        self.segments.len()
    }
}

// Chord i runs from (0, radius - i*step) on the vertical axis out to
// ((i+1)*step, 0) on the horizontal one, mirrored by the sign pair.
fn push_quadrant(
    segments: &mut Vec<Segment>,
    arms: usize,
    step: f32,
    radius: f32,
    x_sign: f32,
    y_sign: f32,
) {
    for i in 0..arms {
        let start = pt2(0.0, y_sign * (radius - i as f32 * step));
        let end = pt2(x_sign * (i as f32 + 1.0) * step, 0.0);
        segments.push(Segment {
            start,
            end,
            color: palette::color_for_angle(start, end),
        });
    }
}

fn axis_segment(end: Point2, color: Rgb8) -> Segment {
    Segment {
        start: pt2(0.0, 0.0),
        end,
        color,
    }
}
