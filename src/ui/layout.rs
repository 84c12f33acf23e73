//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the slide card and navigation row grow to.
const MAX_CARD_WIDTH: u16 = 96;
/// Width of the Previous / Next buttons, borders included.
pub const NAV_BUTTON_WIDTH: u16 = 14;

/// Primary screen layout: slide card, navigation row and a bottom status bar.
pub struct AppLayout {
    pub slide_area: Rect,
    pub nav_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // slide card
                Constraint::Length(3), // prev / counter / next
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            slide_area: centered_column(rows[0], MAX_CARD_WIDTH),
            nav_area: centered_column(rows[1], MAX_CARD_WIDTH),
            status_area: rows[2],
        }
    }
}

/// Hit zones of the navigation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLayout {
    pub prev: Rect,
    pub counter: Rect,
    pub next: Rect,
}

impl NavLayout {
    pub fn from_area(area: Rect) -> Self {
        let button = NAV_BUTTON_WIDTH.min(area.width / 2);
        let prev = Rect::new(area.x, area.y, button, area.height);
        let next = Rect::new(
            area.x + area.width.saturating_sub(button),
            area.y,
            button,
            area.height,
        );
        let counter = Rect::new(
            prev.right(),
            area.y,
            next.x.saturating_sub(prev.right()),
            area.height,
        );
        Self { prev, counter, next }
    }
}

/// Horizontally centre a column of at most `max_width` inside `area`.
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let w = max_width.min(area.width);
    let x = area.x + (area.width - w) / 2;
    Rect::new(x, area.y, w, area.height)
}

pub fn point_in_rect(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}
