/// Controller state for one transition cycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselState {
    Idle,          // Settled, navigation accepted
    Transitioning, // Slides are animating, navigation dropped in animated mode
}

/// How navigation is presented.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum TransitionMode {
    /// Slides animate in and out; input is locked until the animation completes.
    #[default]
    Animated,
    /// Slides swap immediately; every command is accepted.
    Instant,
}

/// Which way the carousel moved.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Edge the outgoing slide leaves towards.
    pub fn leaving_edge(self) -> Edge {
        match self {
            Direction::Forward => Edge::Left,
            Direction::Backward => Edge::Right,
        }
    }

    /// Edge the incoming slide enters from.
    pub fn entering_edge(self) -> Edge {
        match self {
            Direction::Forward => Edge::Right,
            Direction::Backward => Edge::Left,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    /// Horizontal sign of the edge, in slide widths.
    pub fn sign(self) -> f32 {
        match self {
            Edge::Left => -1.0,
            Edge::Right => 1.0,
        }
    }
}

/// Presentation marker of a single slide.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlideMarker {
    Hidden,
    Active,
    Entering(Edge),
    Leaving(Edge),
}

impl SlideMarker {
    pub fn class_name(self) -> &'static str {
        match self {
            SlideMarker::Hidden => "hidden",
            SlideMarker::Active => "active",
            SlideMarker::Entering(Edge::Left) => "from-left",
            SlideMarker::Entering(Edge::Right) => "from-right",
            SlideMarker::Leaving(Edge::Left) => "to-left",
            SlideMarker::Leaving(Edge::Right) => "to-right",
        }
    }

    pub fn is_visible(self) -> bool {
        self != SlideMarker::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_moves_slides_right_to_left() {
        assert_eq!(Direction::Forward.leaving_edge(), Edge::Left);
        assert_eq!(Direction::Forward.entering_edge(), Edge::Right);
        assert_eq!(Direction::Backward.leaving_edge(), Edge::Right);
        assert_eq!(Direction::Backward.entering_edge(), Edge::Left);
    }

    #[test]
    fn marker_class_names() {
        assert_eq!(SlideMarker::Active.class_name(), "active");
        assert_eq!(SlideMarker::Hidden.class_name(), "hidden");
        assert_eq!(SlideMarker::Entering(Edge::Right).class_name(), "from-right");
        assert_eq!(SlideMarker::Leaving(Edge::Left).class_name(), "to-left");
        assert!(!SlideMarker::Hidden.is_visible());
        assert!(SlideMarker::Leaving(Edge::Right).is_visible());
    }
}
