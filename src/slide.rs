use raylib::prelude::*;

use theme_carousel::SlideMarker;

/// A slide texture and its horizontal slide-in/slide-out animation.
pub struct Slide {
    image: Texture2D,

    // Horizontal offset in slide widths; 0 is centred
    offset: f32,
    end_offset: f32,

    tween: Option<ease::Tween>,
    animation_timer: f32,
    animation_duration: f32,
    pub is_animating: bool,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            offset: 0.0,
            end_offset: 0.0,
            tween: None,
            animation_timer: 0.0,
            animation_duration: 0.0,
            is_animating: false,
        }
    }

    /// Start the animation a marker asks for. Settled markers just reset.
    pub fn start_animation(&mut self, marker: SlideMarker, duration: f32) {
        let (start, end) = match marker {
            SlideMarker::Entering(edge) => (edge.sign(), 0.0),
            SlideMarker::Leaving(edge) => (0.0, edge.sign()),
            SlideMarker::Active | SlideMarker::Hidden => {
                self.settle();
                return;
            }
        };

        self.offset = start;
        self.end_offset = end;
        self.tween = Some(ease::Tween::new(ease::cubic_out, start, end, duration));
        self.animation_timer = 0.0;
        self.animation_duration = duration;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        if let Some(tween) = self.tween.as_mut() {
            self.offset = tween.apply(dt);
        }

        self.animation_timer += dt;
        if self.animation_timer >= self.animation_duration {
            self.offset = self.end_offset;
            self.tween = None;
            self.is_animating = false;
        }
    }

    pub fn settle(&mut self) {
        self.offset = 0.0;
        self.end_offset = 0.0;
        self.tween = None;
        self.is_animating = false;
    }

    /// Draw the slide fitted into `area`, shifted by its current offset.
    pub fn draw(&self, d: &mut RaylibDrawHandle, marker: SlideMarker, area: Rectangle) {
        if !marker.is_visible() {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = (area.width / tex_width).min(area.height / tex_height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let center = Vector2::new(
            area.x + area.width * (0.5 + self.offset),
            area.y + area.height * 0.5,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                center.x - scaled_width * 0.5,
                center.y - scaled_height * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
