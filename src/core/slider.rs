//! Hero slider state machine
//!
//! The slider keeps a cyclic index over a fixed number of slides and a
//! playback state. Timers live in the controller that drives it
//! (`ui::chrome`); this type only knows how the index moves.
//!
//! # States
//!
//! ```text
//!            pointer enters
//!   Playing ───────────────▶ Paused
//!      ▲                       │
//!      └───────────────────────┘
//!            pointer leaves
//! ```

/// Autoplay state
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Playback {
    /// Autoplay timer armed
    #[default]
    Playing,
    /// Pointer is over the hero, autoplay suspended
    Paused,
}

/// Cyclic slide index
///
/// A slider always has at least one slide. A hero section without slides
/// has no `Slider` at all, which makes it inert.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slider {
    len: usize,
    index: usize,
    playback: Playback,
}

impl Slider {
    /// Creates a slider showing the first slide
    ///
    /// Returns `None` for zero slides.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }

        Some(Self {
            len,
            index: 0,
            playback: Playback::Playing,
        })
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a slider has at least one slide
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the active slide
    pub fn current(&self) -> usize {
        self.index
    }

    /// Current playback state
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Advances to the next slide, wrapping to the first
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Moves back to the previous slide, wrapping to the last
    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Suspends autoplay
    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    /// Resumes autoplay
    pub fn resume(&mut self) {
        self.playback = Playback::Playing;
    }

    /// Returns true if the slide at `index` is the active one
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }
}
