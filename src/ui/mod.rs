//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No state is mutated here.

pub mod demo_widget;
pub mod layout;
pub mod nav_bar;
pub mod popup;
pub mod slide_widget;
pub mod theme;

use ratatui::{widgets::Paragraph, Frame};

use crate::app::state::{ActiveView, AppState};
use crate::core::view::render_slide;

use self::{
    demo_widget::DemoWidget, layout::AppLayout, nav_bar::NavBar, popup::HelpPopup,
    slide_widget::SlideWidget, theme::Theme,
};

/// Draw one full frame.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area());

    let nodes = render_slide(state.deck.current_slide());
    let slide = SlideWidget::new(&nodes).demo(DemoWidget::new(
        &state.demo,
        state.focus,
        state.edit.as_ref(),
    ));
    frame.render_widget(slide, layout.slide_area);
    frame.render_widget(NavBar { deck: &state.deck }, layout.nav_area);

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if state.active_view == ActiveView::Help {
        frame.render_widget(HelpPopup { config: &state.config }, frame.area());
    }
}

/// Buffer contents as text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::AppConfig;
    use crate::core::content::pitch_deck;

    fn frame_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn first_frame_shows_title_slide_and_counter() {
        let state = AppState::new(pitch_deck(true).unwrap(), AppConfig::default());
        let text = frame_text(&state);
        assert!(text.contains("Data Scientist: Joseph Dunivan"));
        assert!(text.contains("1 / 15"));
        assert!(text.contains("◀ Previous"));
    }

    #[test]
    fn help_overlay_draws_on_top() {
        let mut state = AppState::new(pitch_deck(false).unwrap(), AppConfig::default());
        state.active_view = ActiveView::Help;
        let text = frame_text(&state);
        assert!(text.contains("Controls"));
        assert!(text.contains("Show Controls"));
    }
}
