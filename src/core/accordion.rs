//! Open/closed disclosure state and the FAQ accordion
//!
//! Every collapsible widget (FAQ item, dropdown, mobile menu) carries an
//! explicit `Disclosure` instead of a CSS class. The accordion adds the
//! "only one open at a time" rule on top.

/// Open/closed flag for one collapsible widget
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Disclosure {
    /// Content shown
    Open,
    /// Content hidden
    #[default]
    Closed,
}

impl Disclosure {
    /// Returns the opposite state
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Open => Disclosure::Closed,
            Disclosure::Closed => Disclosure::Open,
        }
    }

    /// Flips the state in place
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Returns true when open
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }
}

/// A question and its answer
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FaqItem {
    /// Question text (the clickable header)
    pub question: String,
    /// Answer text (the collapsible body)
    pub answer: String,
}

/// Returns the built-in frequently asked questions
pub fn default_faq() -> Vec<FaqItem> {
    [
        (
            "How do I track my application status?",
            "Use the reference number from your acknowledgement on the service's tracking page.",
        ),
        (
            "What documents are required for most services?",
            "Proof of identity and proof of address are needed for most services.",
        ),
        (
            "How long does it take to get a response?",
            "We respond to messages sent through the contact form within 24 hours.",
        ),
        (
            "Is there a fee for using the portal?",
            "Using the portal is free. Individual services may charge their own fees.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqItem {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

/// FAQ accordion: at most one item open
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Accordion {
    items: Vec<Disclosure>,
}

impl Accordion {
    /// Creates an accordion with `len` closed items
    pub fn new(len: usize) -> Self {
        Self {
            items: vec![Disclosure::Closed; len],
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Handles a click on question `index`
    ///
    /// Closes every other item and toggles the clicked one. Returns the
    /// clicked item's new state, or `None` if the index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<Disclosure> {
        if index >= self.items.len() {
            return None;
        }

        for (i, item) in self.items.iter_mut().enumerate() {
            if i != index {
                *item = Disclosure::Closed;
            }
        }

        self.items[index].toggle();
        Some(self.items[index])
    }

    /// State of item `index` (closed when out of range)
    pub fn state(&self, index: usize) -> Disclosure {
        self.items.get(index).copied().unwrap_or_default()
    }

    /// Index of the open item, if any
    pub fn open_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_open())
    }

    /// Max-height of the answer body for the height transition
    ///
    /// `content_height` is the measured height of the answer.
    pub fn max_height(&self, index: usize, content_height: u32) -> u32 {
        if self.state(index).is_open() {
            content_height
        } else {
            0
        }
    }

    /// Rotation of the chevron icon in degrees
    pub fn icon_rotation(&self, index: usize) -> u16 {
        if self.state(index).is_open() {
            180
        } else {
            0
        }
    }
}
