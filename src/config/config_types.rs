// src/config/config_types.rs
//
// Config types for the app. Every field has a default so the program
// runs with no config.toml present at all.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub target_fps: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            target_fps: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub scale: f32,
    pub radius: f32,
    pub arms_per_quadrant: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            scale: 1.8,
            radius: 200.0,
            arms_per_quadrant: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    // Seconds between each newly revealed segment
    pub reveal_interval: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_interval: 0.03,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_weight: f32,
    pub background: [u8; 3],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_weight: 1.0,
            background: [255, 255, 255],
        }
    }
}
