//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    deck::{Deck, SlideKind},
    scoring::{Field, ScoringDemo},
};

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Slides,
    Help,
}

/// Focusable controls of the scoring form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Input(Field),
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Input(Field::WaterTemperature),
        FormFocus::Input(Field::Salinity),
        FormFocus::Input(Field::Turbulence),
        FormFocus::Input(Field::MoonPhase),
        FormFocus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Input(field) => Some(field),
            FormFocus::Submit => None,
        }
    }
}

/// Text typed into a form field, not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub field: Field,
    pub text: String,
}

/// Top-level application state.
pub struct AppState {
    /// Slides and the cursor.
    pub deck: Deck,
    /// State of the embedded scoring demo.  Lives for the whole session so
    /// leaving and re-entering the slide keeps the chart.
    pub demo: ScoringDemo,
    /// Focused control on the scoring slide.
    pub focus: FormFocus,
    pub edit: Option<EditBuffer>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    pub active_view: ActiveView,
    pub config: AppConfig,
    /// Last drawn terminal size, used to hit-test mouse clicks.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(deck: Deck, config: AppConfig) -> Self {
        Self {
            deck,
            demo: ScoringDemo::new(config.clamp_inputs),
            focus: FormFocus::Input(Field::WaterTemperature),
            edit: None,
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
            terminal_area: Rect::default(),
        }
    }

    /// Whether the slide on screen hosts the scoring form.
    pub fn on_interactive_slide(&self) -> bool {
        self.deck.current_slide().kind() == SlideKind::Interactive
    }
}
