//! Everything drawn around the slides: backdrop, controls and caption.

use raylib::prelude::*;
use tracing::debug;

use theme_carousel::{Carousel, Command, Theme, ThemeIndicator};

const BUTTON_SIZE: f32 = 56.0;
const MARGIN: f32 = 24.0;
const CAPTION_SIZE: i32 = 20;

/// Window background tinted by the active slide's theme.
#[derive(Debug)]
pub struct Backdrop {
    pub class: String,
    pub color: Color,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            class: String::new(),
            color: Color::BLACK,
        }
    }
}

impl ThemeIndicator for Backdrop {
    fn apply(&mut self, theme: &Theme) {
        let [r, g, b] = theme.rgb();
        self.class = theme.class_name();
        self.color = Color::new(r, g, b, 255);
        debug!(class = %self.class, "backdrop themed");
    }
}

/// On-screen previous/next buttons.
pub struct Controls {
    prev: Rectangle,
    next: Rectangle,
}

impl Controls {
    pub fn layout(screen_width: i32, screen_height: i32) -> Self {
        let y = (screen_height as f32 - BUTTON_SIZE) * 0.5;
        Self {
            prev: Rectangle::new(MARGIN, y, BUTTON_SIZE, BUTTON_SIZE),
            next: Rectangle::new(
                screen_width as f32 - MARGIN - BUTTON_SIZE,
                y,
                BUTTON_SIZE,
                BUTTON_SIZE,
            ),
        }
    }

    pub fn hit(&self, point: Vector2) -> Option<Command> {
        if contains(&self.prev, point) {
            Some(Command::Previous)
        } else if contains(&self.next, point) {
            Some(Command::Next)
        } else {
            None
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let fill = Color::new(0, 0, 0, 120);
        for (rect, label) in [(self.prev, "<"), (self.next, ">")] {
            d.draw_rectangle_rec(rect, fill);
            d.draw_text(
                label,
                (rect.x + rect.width * 0.5 - 8.0) as i32,
                (rect.y + rect.height * 0.5 - 16.0) as i32,
                32,
                Color::WHITE,
            );
        }
    }
}

fn contains(rect: &Rectangle, p: Vector2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.width && p.y >= rect.y && p.y <= rect.y + rect.height
}

/// Area the slides are fitted into, leaving room for the controls.
pub fn slide_area(screen_width: i32, screen_height: i32) -> Rectangle {
    let inset = MARGIN * 2.0 + BUTTON_SIZE;
    Rectangle::new(
        inset,
        MARGIN,
        (screen_width as f32 - inset * 2.0).max(1.0),
        (screen_height as f32 - MARGIN * 3.0 - CAPTION_SIZE as f32).max(1.0),
    )
}

pub fn draw_caption(d: &mut RaylibDrawHandle, carousel: &Carousel<Backdrop>, autoplay_paused: bool) {
    let mut caption = format!(
        "{} / {}   {}",
        carousel.current_index() + 1,
        carousel.len(),
        carousel.indicator().class
    );
    if autoplay_paused {
        caption.push_str("   [autoplay paused]");
    }
    let y = d.get_screen_height() - MARGIN as i32 - CAPTION_SIZE;
    d.draw_text(&caption, MARGIN as i32, y, CAPTION_SIZE, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_sit_on_either_side() {
        let controls = Controls::layout(800, 600);
        assert_eq!(controls.hit(Vector2::new(40.0, 300.0)), Some(Command::Previous));
        assert_eq!(controls.hit(Vector2::new(760.0, 300.0)), Some(Command::Next));
        assert_eq!(controls.hit(Vector2::new(400.0, 300.0)), None);
        assert_eq!(controls.hit(Vector2::new(40.0, 20.0)), None);
    }

    #[test]
    fn backdrop_follows_theme() {
        let mut backdrop = Backdrop::default();
        backdrop.apply(&Theme::new("ocean").unwrap());
        assert_eq!(backdrop.class, "theme-ocean");
        let Color { r, g, b, a } = backdrop.color;
        assert_eq!((r, g, b, a), (0x1b, 0x6c, 0xa8, 255));
    }

    #[test]
    fn slide_area_stays_inside_window() {
        let area = slide_area(800, 600);
        assert!(area.x > 0.0 && area.x + area.width < 800.0);
        assert!(area.y > 0.0 && area.y + area.height < 600.0);
        assert!(slide_area(10, 10).width >= 1.0);
    }
}
