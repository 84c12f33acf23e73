//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::scoring::parse_input;
use crate::ui::layout::{point_in_rect, AppLayout, NavLayout};

use super::state::{ActiveView, AppState, EditBuffer};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Slides => handle_slide_key(state, key),
        ActiveView::Help => handle_help_key(state, key),
    }
}

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    let closes = key.code == KeyCode::Esc
        || matches!(
            state.config.match_key(key),
            Some(Action::ToggleHelp | Action::Quit)
        );
    if closes {
        state.active_view = ActiveView::Slides;
    }
}

fn handle_slide_key(state: &mut AppState, key: KeyEvent) {
    if state.on_interactive_slide() && handle_edit_key(state, key) {
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;

    match action {
        Action::Quit => state.should_quit = true,
        Action::ToggleHelp => state.active_view = ActiveView::Help,
        Action::NextSlide => next_slide(state),
        Action::PrevSlide => prev_slide(state),
        // Form actions only apply while the form is on screen.
        _ if !state.on_interactive_slide() => {}
        Action::FocusNext => state.focus = state.focus.next(),
        Action::FocusPrev => state.focus = state.focus.prev(),
        Action::Increment => nudge_focused(state, 1),
        Action::Decrement => nudge_focused(state, -1),
        Action::Submit => submit(state),
    }
}

pub fn next_slide(state: &mut AppState) {
    state.edit = None;
    if state.deck.advance() {
        tracing::debug!(slide = state.deck.position(), "advance");
    }
}

pub fn prev_slide(state: &mut AppState) {
    state.edit = None;
    if state.deck.retreat() {
        tracing::debug!(slide = state.deck.position(), "retreat");
    }
}

fn nudge_focused(state: &mut AppState, steps: i32) {
    if let Some(field) = state.focus.field() {
        state.demo.nudge(field, steps);
    }
}

fn submit(state: &mut AppState) {
    let record = state.demo.submit();
    state.status_message = Some(format!("Logged score {} for {}", record.value, record.label));
}

/// Typed-value editing on a focused field.  Returns `true` when the key was
/// consumed.
fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }
    let Some(field) = state.focus.field() else {
        return false;
    };

    let Some(edit) = state.edit.as_mut() else {
        return match key.code {
            KeyCode::Char(c) if is_number_char(c) || c == '-' => {
                state.edit = Some(EditBuffer {
                    field,
                    text: c.to_string(),
                });
                true
            }
            _ => false,
        };
    };

    match key.code {
        KeyCode::Char(c) if is_number_char(c) => {
            edit.text.push(c);
            true
        }
        // Minus is only meaningful as the first character.
        KeyCode::Char('-') if edit.text.is_empty() => {
            edit.text.push('-');
            true
        }
        KeyCode::Backspace => {
            edit.text.pop();
            true
        }
        KeyCode::Esc => {
            state.edit = None;
            true
        }
        KeyCode::Enter => {
            commit_edit(state);
            true
        }
        // Any other key drops the pending text and is handled normally.
        _ => {
            state.edit = None;
            false
        }
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn commit_edit(state: &mut AppState) {
    let Some(edit) = state.edit.take() else {
        return;
    };
    match parse_input(edit.field, &edit.text) {
        Ok(value) => {
            state.demo.set_input(edit.field, value);
            state.status_message = None;
        }
        Err(err) => {
            tracing::warn!(%err, "rejected input");
            state.status_message = Some(err.to_string());
        }
    }
}

/// Process a mouse event.  Left clicks on the navigation buttons move the
/// deck; clicks on an inert button do nothing.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Slides {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let layout = AppLayout::from_area(state.terminal_area);
    let nav = NavLayout::from_area(layout.nav_area);

    if point_in_rect(nav.prev, mouse.column, mouse.row) {
        prev_slide(state);
    } else if point_in_rect(nav.next, mouse.column, mouse.row) {
        next_slide(state);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    use super::*;
    use crate::app::state::FormFocus;
    use crate::config::AppConfig;
    use crate::core::deck::{bullets, Component, Deck, Slide};
    use crate::core::scoring::Field;

    fn state() -> AppState {
        let deck = Deck::new(vec![
            Slide::title_slide("Intro", bullets(&["hello"])),
            Slide::body("Body", bullets(&["point"])),
            Slide::interactive("Demo", Component::ScoringDemo),
            Slide::end("Q&A", "bye"),
        ])
        .unwrap();
        let mut state = AppState::new(deck, AppConfig::default());
        state.terminal_area = Rect::new(0, 0, 100, 40);
        state
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn click(state: &mut AppState, column: u16, row: u16) {
        handle_mouse(
            state,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn arrow_keys_walk_the_deck_and_clamp() {
        let mut s = state();
        press(&mut s, KeyCode::Left);
        assert_eq!(s.deck.position(), 0);
        for _ in 0..5 {
            press(&mut s, KeyCode::Right);
        }
        assert_eq!(s.deck.position(), 3);
    }

    #[test]
    fn form_keys_are_ignored_off_the_demo_slide() {
        let mut s = state();
        press(&mut s, KeyCode::Enter);
        type_str(&mut s, "+");
        assert_eq!(s.demo.series().len(), 4);
        assert_eq!(s.demo.inputs().water_temperature, 20.0);
        assert!(s.edit.is_none());
    }

    #[test]
    fn typed_values_feed_the_score() {
        let mut s = state();
        press(&mut s, KeyCode::Right);
        press(&mut s, KeyCode::Right);
        assert!(s.on_interactive_slide());

        // temp 20 (default), salinity 35, turbulence 2, moon 0
        press(&mut s, KeyCode::Tab);
        type_str(&mut s, "35");
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Tab);
        type_str(&mut s, "2");
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Tab);
        type_str(&mut s, "0");
        press(&mut s, KeyCode::Enter);
        press(&mut s, KeyCode::Tab);
        assert_eq!(s.focus, FormFocus::Submit);
        press(&mut s, KeyCode::Enter);

        assert_eq!(s.demo.current_score(), 16);
        assert_eq!(s.demo.series().len(), 5);
        assert!(s.status_message.as_deref().unwrap().starts_with("Logged score 16"));
    }

    #[test]
    fn step_keys_nudge_the_focused_field() {
        let mut s = state();
        s.deck.advance();
        s.deck.advance();
        s.focus = FormFocus::Input(Field::MoonPhase);
        type_str(&mut s, "+++++++");
        assert_eq!(s.demo.inputs().moon_phase, 10.0);
        type_str(&mut s, "[");
        assert_eq!(s.demo.inputs().moon_phase, 9.0);
        assert!(s.edit.is_none());
    }

    #[test]
    fn negative_value_can_be_typed() {
        let mut s = state();
        s.deck.advance();
        s.deck.advance();
        type_str(&mut s, "-5");
        assert_eq!(s.edit.as_ref().map(|e| e.text.as_str()), Some("-5"));
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.demo.inputs().water_temperature, -5.0);
        assert!(s.edit.is_none());
    }

    #[test]
    fn minus_after_digits_is_not_appended() {
        let mut s = state();
        s.deck.advance();
        s.deck.advance();
        type_str(&mut s, "5-");
        // The stray minus drops the pending text instead of stepping or editing.
        assert!(s.edit.is_none());
        assert_eq!(s.demo.inputs().water_temperature, 20.0);
    }

    #[test]
    fn bad_typed_value_keeps_input_and_reports() {
        let mut s = state();
        s.deck.advance();
        s.deck.advance();
        type_str(&mut s, "1.2.3");
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.demo.inputs().water_temperature, 20.0);
        assert!(s.status_message.as_deref().unwrap().contains("not a number"));
        assert_eq!(s.demo.series().len(), 4);
    }

    #[test]
    fn leaving_the_slide_discards_pending_text() {
        let mut s = state();
        s.deck.advance();
        s.deck.advance();
        type_str(&mut s, "33");
        press(&mut s, KeyCode::Right);
        assert!(s.edit.is_none());
        assert_eq!(s.deck.position(), 3);
        assert_eq!(s.demo.inputs().water_temperature, 20.0);
    }

    #[test]
    fn help_toggles_and_escape_closes() {
        let mut s = state();
        handle_key(
            &mut s,
            KeyEvent {
                code: KeyCode::Char('?'),
                modifiers: KeyModifiers::SHIFT,
                kind: crossterm::event::KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        );
        assert_eq!(s.active_view, ActiveView::Help);
        press(&mut s, KeyCode::Right);
        assert_eq!(s.deck.position(), 0);
        press(&mut s, KeyCode::Esc);
        assert_eq!(s.active_view, ActiveView::Slides);
        assert!(!s.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut s = state();
        s.active_view = ActiveView::Help;
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }

    #[test]
    fn clicking_nav_buttons_moves_the_deck() {
        let mut s = state();
        // 100x40 terminal: nav row is y 36..39, card column x 2..98.
        click(&mut s, 5, 37);
        assert_eq!(s.deck.position(), 0);
        click(&mut s, 95, 37);
        assert_eq!(s.deck.position(), 1);
        click(&mut s, 5, 37);
        assert_eq!(s.deck.position(), 0);
        click(&mut s, 50, 37);
        assert_eq!(s.deck.position(), 0);
    }
}
