use serde::{Deserialize, Serialize};

/// Drag distance, in px, past which a swipe counts as navigation.
pub const SWIPE_OFFSET_THRESHOLD: f64 = 50.0;
/// Flick speed, in px/s, past which a swipe counts as navigation.
pub const SWIPE_VELOCITY_THRESHOLD: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    Next,
    Prev,
    GoTo(usize),
}

/// Net horizontal movement of a finished drag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeGesture {
    pub offset: f64,
    pub velocity: f64,
}

impl SwipeGesture {
    pub fn new(offset: f64, velocity: f64) -> Self {
        Self { offset, velocity }
    }

    /// Dragging right goes back, dragging left goes forward.
    ///
    /// The backward branch is checked first and accepts any fast flick, so a quick
    /// leftward flick with little travel also goes back.
    // TODO: confirm with the site owner whether fast left flicks should go forward
    pub fn navigation(&self) -> Option<Navigation> {
        let fast = self.velocity.abs() > SWIPE_VELOCITY_THRESHOLD;

        if self.offset > SWIPE_OFFSET_THRESHOLD || fast {
            Some(Navigation::Prev)
        } else if self.offset < -SWIPE_OFFSET_THRESHOLD {
            Some(Navigation::Next)
        } else {
            None
        }
    }
}

/// Map a `KeyboardEvent.key` name to a navigation. Only the horizontal arrows do anything.
pub fn key_navigation(key: &str) -> Option<Navigation> {
    match key {
        "ArrowRight" => Some(Navigation::Next),
        "ArrowLeft" => Some(Navigation::Prev),
        _ => None,
    }
}

/// Any UI event the timeline reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CarouselInput {
    Next,
    Prev,
    GoTo { index: usize },
    Swipe(SwipeGesture),
    Key { key: String },
}

impl CarouselInput {
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            CarouselInput::Next => Some(Navigation::Next),
            CarouselInput::Prev => Some(Navigation::Prev),
            CarouselInput::GoTo { index } => Some(Navigation::GoTo(*index)),
            CarouselInput::Swipe(gesture) => gesture.navigation(),
            CarouselInput::Key { key } => key_navigation(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Carousel, SlideDeck};

    #[test]
    fn drag_right_goes_back() {
        assert_eq!(SwipeGesture::new(80.0, 0.0).navigation(), Some(Navigation::Prev));
    }

    #[test]
    fn drag_left_goes_forward() {
        assert_eq!(SwipeGesture::new(-80.0, -100.0).navigation(), Some(Navigation::Next));
    }

    #[test]
    fn short_slow_drag_is_ignored() {
        assert_eq!(SwipeGesture::new(50.0, 500.0).navigation(), None);
        assert_eq!(SwipeGesture::new(-20.0, -300.0).navigation(), None);
    }

    #[test]
    fn fast_flick_right_goes_back() {
        assert_eq!(SwipeGesture::new(5.0, 900.0).navigation(), Some(Navigation::Prev));
    }

    #[test]
    fn fast_flick_left_hits_backward_branch_first() {
        assert_eq!(SwipeGesture::new(-5.0, -900.0).navigation(), Some(Navigation::Prev));
        assert_eq!(SwipeGesture::new(-120.0, -900.0).navigation(), Some(Navigation::Prev));
    }

    #[test]
    fn arrow_keys() {
        assert_eq!(key_navigation("ArrowRight"), Some(Navigation::Next));
        assert_eq!(key_navigation("ArrowLeft"), Some(Navigation::Prev));
        assert_eq!(key_navigation("ArrowUp"), None);
        assert_eq!(key_navigation("Enter"), None);
    }

    #[test]
    fn inputs_drive_the_carousel() {
        let mut carousel = Carousel::new(SlideDeck::new(vec!["2017", "2018", "2020"]).unwrap());

        carousel.apply(&CarouselInput::Key { key: "ArrowRight".into() });
        assert_eq!(*carousel.active_slide(), "2018");

        carousel.apply(&CarouselInput::Swipe(SwipeGesture::new(-90.0, -50.0)));
        assert_eq!(*carousel.active_slide(), "2020");

        carousel.apply(&CarouselInput::Key { key: "Tab".into() });
        assert_eq!(*carousel.active_slide(), "2020");

        carousel.apply(&CarouselInput::GoTo { index: 0 });
        assert_eq!(*carousel.active_slide(), "2017");
    }

    #[test]
    fn input_json_shape() {
        let input: CarouselInput =
            serde_json::from_str(r#"{ "type": "swipe", "offset": 60.0, "velocity": 0.0 }"#)
                .unwrap();
        assert_eq!(input, CarouselInput::Swipe(SwipeGesture::new(60.0, 0.0)));

        let input: CarouselInput =
            serde_json::from_str(r#"{ "type": "go-to", "index": 3 }"#).unwrap();
        assert_eq!(input, CarouselInput::GoTo { index: 3 });
    }
}
