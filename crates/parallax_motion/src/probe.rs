//! Host capabilities the scheduler reads from and writes to.
//!
//! The scheduler never looks at a real viewport. A [`ViewportProbe`]
//! answers "where is this element right now", and a [`StyleSink`] receives
//! computed styles. [`StaticLayout`] is an in-memory probe for headless
//! hosts and tests.

use std::collections::HashMap;
use std::fmt;

use crate::style::ElementStyle;

/// Identifies an element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Vertical extent of an element, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    /// Top edge.
    pub top: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl ElementBounds {
    /// Creates bounds from a top edge and a height.
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// Shifts both edges up by `dy`.
    #[must_use]
    pub fn scrolled_by(self, dy: f32) -> Self {
        Self {
            top: self.top - dy,
            bottom: self.bottom - dy,
        }
    }
}

/// Answers viewport-relative layout queries.
pub trait ViewportProbe {
    /// Viewport height.
    fn viewport_height(&self) -> f32;

    /// Current bounds of an element, or `None` if it does not exist.
    fn bounds(&self, element: ElementId) -> Option<ElementBounds>;
}

/// Receives computed element styles.
pub trait StyleSink {
    /// Applies a style to an element.
    fn apply(&mut self, element: ElementId, style: ElementStyle);
}

impl StyleSink for HashMap<ElementId, ElementStyle> {
    fn apply(&mut self, element: ElementId, style: ElementStyle) {
        self.insert(element, style);
    }
}

impl<T: StyleSink + ?Sized> StyleSink for &mut T {
    fn apply(&mut self, element: ElementId, style: ElementStyle) {
        (**self).apply(element, style);
    }
}

/// In-memory page layout with a scroll offset.
///
/// Element bounds are stored in document space; queries subtract the
/// current scroll position.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    viewport_height: f32,
    scroll_y: f32,
    elements: HashMap<ElementId, ElementBounds>,
}

impl StaticLayout {
    /// Creates an empty layout for a viewport of the given height.
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            scroll_y: 0.0,
            elements: HashMap::new(),
        }
    }

    /// Places an element at a document-space position.
    pub fn insert(&mut self, element: ElementId, top: f32, height: f32) {
        self.elements.insert(element, ElementBounds::new(top, height));
    }

    /// Removes an element.
    pub fn remove(&mut self, element: ElementId) {
        self.elements.remove(&element);
    }

    /// Sets the scroll offset.
    pub fn scroll_to(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    /// Adjusts the scroll offset.
    pub fn scroll_by(&mut self, dy: f32) {
        self.scroll_y += dy;
    }

    /// Changes the viewport height.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }
}

impl ViewportProbe for StaticLayout {
    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn bounds(&self, element: ElementId) -> Option<ElementBounds> {
        self.elements
            .get(&element)
            .map(|b| b.scrolled_by(self.scroll_y))
    }
}
