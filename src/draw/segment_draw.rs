// src/draw/segment_draw.rs
// Maps segment endpoints through the screen transform and issues line draws

use nannou::prelude::*;

use crate::draw::DrawStyle;
use crate::models::{ScreenTransform, Segment};

/// Draws the first `count` segments of the sequence.
pub fn draw_segments(
    draw: &Draw,
    transform: &ScreenTransform,
    segments: &[Segment],
    count: usize,
    style: &DrawStyle,
) {
    let visible = count.min(segments.len());
    for segment in &segments[..visible] {
        let start = frame_point(transform, segment.start);
        let end = frame_point(transform, segment.end);
        draw.line()
            .points(start, end)
            .color(segment.color)
            .stroke_weight(style.stroke_weight);
    }
}

// World -> screen pixels through the transform, then into nannou's frame
// space (origin mid-window, Y up).
fn frame_point(transform: &ScreenTransform, world: Point2) -> Point2 {
    let screen = transform.to_screen(world);
    pt2(
        screen.x - transform.center_x,
        transform.center_y - screen.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_point_undoes_the_screen_offset() {
        let transform = ScreenTransform::for_window(800, 800, 1.0);
        // A point on the +Y axis stays on the +Y axis in frame space
        let framed = frame_point(&transform, pt2(0.0, 100.0));
        assert_eq!(framed, pt2(0.0, 100.0));

        let framed = frame_point(&transform, pt2(-100.0, -50.0));
        assert_eq!(framed, pt2(-100.0, -50.0));
    }

    #[test]
    fn test_frame_point_applies_the_scale() {
        let transform = ScreenTransform::for_window(800, 800, 1.8);
        let framed = frame_point(&transform, pt2(100.0, 0.0));
        assert_eq!(framed, pt2(180.0, 0.0));
    }
}
