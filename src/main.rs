use std::time::Instant;

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

use theme_carousel::constants::FPS;
use theme_carousel::debounce::Debouncer;
use theme_carousel::gesture::{Point, SwipeDetector};
use theme_carousel::images::{load_sorted_image_paths, stem_of};
use theme_carousel::theme::assign_themes;
use theme_carousel::utils::{KeyBinding, shuffle};
use theme_carousel::{Carousel, Command, Transition};

mod cli;
mod slide;
mod stage;
mod texture_loader;

use crate::slide::Slide;
use crate::stage::{Backdrop, Controls};
use crate::texture_loader::load_texture_with_exif_rotation;

const DEFAULT_LOG_DIRECTIVE: &str = "theme_carousel=info";

fn init_logging(directive: Option<&str>) {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?} ({e}), using info");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Key name and legacy key code of a raylib key, as far as bindings care.
fn key_identity(key: KeyboardKey) -> (Option<&'static str>, Option<u32>) {
    match key {
        KeyboardKey::KEY_ENTER => (Some("Enter"), Some(13)),
        KeyboardKey::KEY_KP_ENTER => (Some("Enter"), None),
        KeyboardKey::KEY_ESCAPE => (Some("Escape"), Some(27)),
        KeyboardKey::KEY_LEFT => (Some("ArrowLeft"), Some(37)),
        KeyboardKey::KEY_RIGHT => (Some("ArrowRight"), Some(39)),
        _ => (None, None),
    }
}

fn main() -> Result<()> {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    let config = args.to_config().context("invalid options")?;
    info!("theme-carousel v{} starting", env!("CARGO_PKG_VERSION"));

    let mut image_paths = load_sorted_image_paths(&args.directory)
        .with_context(|| format!("loading slides from {}", args.directory.display()))?;
    if config.shuffle {
        shuffle(&mut rand::rng(), &mut image_paths, false);
        debug!("slide order shuffled");
    }

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Theme Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape goes through the key bindings instead
    rl.set_exit_key(None);

    // --- Load Slides ---
    let mut slides: Vec<Slide> = Vec::new();
    let mut stems: Vec<String> = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => {
                slides.push(Slide::new(texture));
                stems.push(stem_of(path));
            }
            Err(e) => warn!("skipping slide: {e}"),
        }
    }

    let themes = assign_themes(&stems, &args.themes);
    let mut carousel = Carousel::new(themes, config.mode, Backdrop::default())
        .context("none of the images could be loaded")?;
    info!(slides = carousel.len(), mode = ?config.mode, "carousel ready");

    let mut debouncer: Debouncer<Command> = Debouncer::new(config.debounce);
    let mut swipe = SwipeDetector::new(config.swipe);
    let mut in_flight: Option<Transition> = None;
    let transition_secs = config.transition.as_secs_f32();
    let mut autoplay_timer = 0.0;
    let mut autoplay_paused = false;

    // --- Main Loop ---
    'frames: while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let now = Instant::now();
        let controls = Controls::layout(rl.get_screen_width(), rl.get_screen_height());
        let mut commands: Vec<Command> = Vec::new();

        // 1. Keyboard
        while let Some(key) = rl.get_key_pressed() {
            let (name, code) = key_identity(key);
            if KeyBinding::ESCAPE.matches(name, code) {
                info!("escape pressed, closing");
                break 'frames;
            } else if KeyBinding::ENTER.matches(name, code) {
                autoplay_paused = !autoplay_paused;
                debug!(autoplay_paused, "autoplay toggled");
            } else if KeyBinding::ARROW_LEFT.matches(name, code) {
                debouncer.schedule(Command::Previous, now);
            } else if KeyBinding::ARROW_RIGHT.matches(name, code) {
                debouncer.schedule(Command::Next, now);
            }
        }

        // 2. Pointer: buttons are debounced, drags may be swipes
        let mouse = rl.get_mouse_position();
        let pointer = Point::new(mouse.x, mouse.y);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match controls.hit(mouse) {
                Some(command) => {
                    debouncer.schedule(command, now);
                }
                None => swipe.begin(pointer, now),
            }
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(gesture) = swipe.end(pointer, now) {
                debug!(?gesture, "swipe");
                commands.push(gesture.command());
            }
        }
        if let Some(command) = debouncer.poll(now) {
            commands.push(command);
        }

        // 3. Autoplay
        if let Some(interval) = config.autoplay {
            if !autoplay_paused && carousel.is_idle() {
                autoplay_timer += dt;
                if autoplay_timer >= interval.as_secs_f32() {
                    commands.push(Command::Next);
                }
            }
        }

        // 4. Navigate
        for command in commands {
            autoplay_timer = 0.0;
            if let Some(transition) = carousel.apply(command) {
                for index in [transition.from, transition.to] {
                    slides[index].start_animation(carousel.marker(index), transition_secs);
                }
                in_flight = Some(transition);
            }
        }

        // 5. Animate, and settle once both slides have arrived
        for slide in slides.iter_mut() {
            slide.update(dt);
        }
        if let Some(transition) =
            in_flight.take_if(|t| !slides[t.from].is_animating && !slides[t.to].is_animating)
        {
            carousel.complete(transition);
        }

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(carousel.indicator().color);

        let area = stage::slide_area(d.get_screen_width(), d.get_screen_height());
        for (slide, marker) in slides.iter().zip(carousel.markers()) {
            slide.draw(&mut d, marker, area);
        }
        controls.draw(&mut d);
        stage::draw_caption(
            &mut d,
            &carousel,
            autoplay_paused && config.autoplay.is_some(),
        );
    }

    info!("shutting down");
    Ok(())
}
