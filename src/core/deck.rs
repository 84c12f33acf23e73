//! Slide records and the deck cursor.
//!
//! A [`Deck`] is a fixed, non-empty sequence of [`Slide`]s plus a cursor that
//! only ever moves one step at a time and never leaves `0..len`.

use thiserror::Error;

// ───────────────────────────────────────── slide ─────────────

/// Body text of a regular slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Bullets(Vec<String>),
    Paragraph(String),
}

/// Components a slide can embed instead of static text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    ScoringDemo,
}

/// Layout template and content of a slide.  One variant per slide type, so a
/// slide can never claim to be interactive while carrying plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideLayout {
    Title(Content),
    Body(Content),
    End(String),
    Interactive(Component),
}

/// Slide type tag, derived from the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    Body,
    End,
    Interactive,
}

/// Borrowed view of what a slide shows under its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideContent<'a> {
    Bullets(&'a [String]),
    Paragraph(&'a str),
    Embedded(Component),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub layout: SlideLayout,
}

impl Slide {
    pub fn title_slide(title: impl Into<String>, content: Content) -> Self {
        Self {
            title: title.into(),
            layout: SlideLayout::Title(content),
        }
    }

    pub fn body(title: impl Into<String>, content: Content) -> Self {
        Self {
            title: title.into(),
            layout: SlideLayout::Body(content),
        }
    }

    pub fn end(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout: SlideLayout::End(text.into()),
        }
    }

    pub fn interactive(title: impl Into<String>, component: Component) -> Self {
        Self {
            title: title.into(),
            layout: SlideLayout::Interactive(component),
        }
    }

    pub fn kind(&self) -> SlideKind {
        match self.layout {
            SlideLayout::Title(_) => SlideKind::Title,
            SlideLayout::Body(_) => SlideKind::Body,
            SlideLayout::End(_) => SlideKind::End,
            SlideLayout::Interactive(_) => SlideKind::Interactive,
        }
    }

    pub fn content(&self) -> SlideContent<'_> {
        match &self.layout {
            SlideLayout::Title(c) | SlideLayout::Body(c) => match c {
                Content::Bullets(items) => SlideContent::Bullets(items),
                Content::Paragraph(text) => SlideContent::Paragraph(text),
            },
            SlideLayout::End(text) => SlideContent::Paragraph(text),
            SlideLayout::Interactive(component) => SlideContent::Embedded(*component),
        }
    }
}

/// Shorthand for a bullet list built from string literals.
pub fn bullets(items: &[&str]) -> Content {
    Content::Bullets(items.iter().map(|s| (*s).to_string()).collect())
}

// ───────────────────────────────────────── deck ──────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("a deck needs at least one slide")]
    Empty,
}

/// Fixed slide sequence with a clamped cursor.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    cursor: usize,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides, cursor: 0 })
    }

    /// Move to the next slide.  Returns `false` (and does nothing) on the
    /// last slide.
    pub fn advance(&mut self) -> bool {
        if self.can_advance() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous slide.  Returns `false` (and does nothing) on the
    /// first slide.
    pub fn retreat(&mut self) -> bool {
        if self.can_retreat() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn can_advance(&self) -> bool {
        self.cursor + 1 < self.slides.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor > 0
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.cursor]
    }

    /// Zero-based cursor.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
