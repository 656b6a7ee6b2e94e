// src/draw/mod.rs
// Immediate-mode drawing of the segment sequence

pub mod segment_draw;

pub use segment_draw::draw_segments;

#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub stroke_weight: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self { stroke_weight: 1.0 }
    }
}
