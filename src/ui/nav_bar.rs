//! Previous / Next buttons with the slide counter between them.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::deck::Deck;

use super::{layout::NavLayout, theme::Theme};

pub struct NavBar<'a> {
    pub deck: &'a Deck,
}

fn button(label: &'static str, enabled: bool, area: Rect, buf: &mut Buffer) {
    let style = if enabled {
        Theme::button_style()
    } else {
        Theme::inert_button_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    Paragraph::new(Line::from(label))
        .style(style)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}

impl<'a> Widget for NavBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let nav = NavLayout::from_area(area);

        button("◀ Previous", self.deck.can_retreat(), nav.prev, buf);
        button("Next ▶", self.deck.can_advance(), nav.next, buf);

        // Vertically centre the counter in the three-row strip.
        let counter_row = Rect::new(
            nav.counter.x,
            nav.counter.y + nav.counter.height / 2,
            nav.counter.width,
            nav.counter.height.min(1),
        );
        Paragraph::new(format!("{} / {}", self.deck.position() + 1, self.deck.len()))
            .alignment(Alignment::Center)
            .render(counter_row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::Slide;
    use crate::ui::buffer_text;

    fn deck() -> Deck {
        Deck::new(vec![
            Slide::end("one", "a"),
            Slide::end("two", "b"),
            Slide::end("three", "c"),
        ])
        .unwrap()
    }

    fn paint(deck: &Deck) -> Buffer {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        NavBar { deck }.render(area, &mut buf);
        buf
    }

    #[test]
    fn counter_is_one_based() {
        let mut deck = deck();
        deck.advance();
        assert!(buffer_text(&paint(&deck)).contains("2 / 3"));
    }

    #[test]
    fn boundary_buttons_are_drawn_inert() {
        let mut deck = deck();
        let buf = paint(&deck);
        // Middle row, first label cell inside each button.
        let prev_cell = &buf[(3, 1)];
        let next_cell = &buf[(51, 1)];
        assert_eq!(prev_cell.fg, Theme::inert_button_style().fg.unwrap());
        assert_eq!(next_cell.bg, Theme::button_style().bg.unwrap());

        deck.advance();
        deck.advance();
        let buf = paint(&deck);
        assert_eq!(buf[(3, 1)].bg, Theme::button_style().bg.unwrap());
        assert_eq!(buf[(51, 1)].fg, Theme::inert_button_style().fg.unwrap());
    }
}
