// src/main.rs
use nannou::prelude::*;

use starvis::{
    animation::RevealAnimation,
    config::Config,
    draw::{draw_segments, DrawStyle},
    models::{ScreenTransform, StarPattern},
};

struct Model {
    pattern: StarPattern,
    transform: ScreenTransform,
    reveal: RevealAnimation,
    background: Rgb8,
    style: DrawStyle,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config; missing file means defaults, broken file is fatal
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config file: {}", e);
            std::process::exit(1);
        }
    };

    // Create window
    if let Err(e) = app
        .new_window()
        .title("starvis 0.1.0")
        .size(config.window.width, config.window.height)
        .resizable(false)
        .view(view)
        .build()
    {
        eprintln!("Failed to create window: {}", e);
        std::process::exit(1);
    }

    app.set_loop_mode(LoopMode::rate_fps(config.window.target_fps));

    let pattern = StarPattern::build(config.pattern.arms_per_quadrant, config.pattern.radius);
    let reveal = RevealAnimation::new(
        pattern.total_segments(),
        config.animation.reveal_interval,
    );
    let transform = ScreenTransform::for_window(
        config.window.width,
        config.window.height,
        config.pattern.scale,
    );

    let [r, g, b] = config.style.background;

    Model {
        pattern,
        transform,
        reveal,
        background: rgb8(r, g, b),
        style: DrawStyle {
            stroke_weight: config.style.stroke_weight,
        },
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.reveal.tick(app.time);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    draw_segments(
        &draw,
        &model.transform,
        &model.pattern.segments,
        model.reveal.visible(),
        &model.style,
    );

    draw.to_frame(app, &frame).unwrap();
}
