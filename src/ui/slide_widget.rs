//! Paints a slide's display tree onto the slide card.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::core::{
    deck::Component,
    view::{DisplayNode, HeadingLevel},
};

use super::{demo_widget::DemoWidget, theme::Theme};

/// Slide card, created fresh each frame.
pub struct SlideWidget<'a> {
    nodes: &'a [DisplayNode],
    demo: Option<DemoWidget<'a>>,
}

impl<'a> SlideWidget<'a> {
    pub fn new(nodes: &'a [DisplayNode]) -> Self {
        Self { nodes, demo: None }
    }

    /// Widget drawn wherever the tree embeds the scoring demo.
    pub fn demo(mut self, demo: DemoWidget<'a>) -> Self {
        self.demo = Some(demo);
        self
    }
}

fn heading_lines(text: &str, level: HeadingLevel) -> Vec<Line<'static>> {
    match level {
        HeadingLevel::Large => vec![
            Line::from(Span::styled(text.to_string(), Theme::large_heading_style())),
            Line::from(Span::styled(
                "═".repeat(text.chars().count().min(60)),
                Theme::large_heading_style(),
            )),
            Line::raw(""),
        ],
        HeadingLevel::Medium => vec![
            Line::from(Span::styled(
                text.to_string(),
                Theme::heading_style().add_modifier(Modifier::UNDERLINED),
            )),
            Line::raw(""),
        ],
    }
}

/// Flatten text nodes into lines.  `Embed` nodes produce nothing here; the
/// caller reserves space for them.
fn node_lines(node: &DisplayNode, centered: bool, out: &mut Vec<Line<'static>>) {
    let align = |line: Line<'static>| {
        if centered {
            line.alignment(Alignment::Center)
        } else {
            line
        }
    };
    match node {
        DisplayNode::Heading { text, level } => {
            out.extend(heading_lines(text, *level).into_iter().map(align));
        }
        DisplayNode::Paragraph(text) => {
            out.push(align(Line::from(Span::styled(text.clone(), Theme::body_style()))));
            out.push(Line::raw(""));
        }
        DisplayNode::BulletList(items) => {
            for item in items {
                let line = if centered {
                    Line::from(Span::styled(item.clone(), Theme::body_style()))
                } else {
                    Line::from(vec![
                        Span::styled("  • ", Theme::bullet_style()),
                        Span::styled(item.clone(), Theme::body_style()),
                    ])
                };
                out.push(align(line));
                out.push(Line::raw(""));
            }
        }
        DisplayNode::Centered(children) => {
            for child in children {
                node_lines(child, true, out);
            }
        }
        DisplayNode::Embed(_) => {}
    }
}

fn is_centered(nodes: &[DisplayNode]) -> bool {
    matches!(nodes, [DisplayNode::Centered(_)])
}

impl<'a> Widget for SlideWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let inner = inner.inner(Margin::new(2, 1));

        let mut lines = Vec::new();
        for node in self.nodes {
            node_lines(node, false, &mut lines);
        }

        let embedded = self
            .nodes
            .iter()
            .any(|n| matches!(n, DisplayNode::Embed(Component::ScoringDemo)));

        if embedded {
            let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(text_height), Constraint::Min(0)])
                .split(inner);
            Paragraph::new(lines).render(chunks[0], buf);
            if let Some(demo) = self.demo {
                demo.render(chunks[1], buf);
            }
            return;
        }

        // Title and end slides sit in the vertical middle of the card.
        let text_area = if is_centered(self.nodes) {
            let h = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(inner.height);
            let pad = (inner.height - h) / 2;
            Rect::new(inner.x, inner.y + pad, inner.width, inner.height - pad)
        } else {
            inner
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::FormFocus;
    use crate::core::deck::{bullets, Slide};
    use crate::core::scoring::{Field, ScoringDemo};
    use crate::core::view::render_slide;
    use crate::ui::buffer_text;

    fn paint(slide: &Slide, demo: Option<&ScoringDemo>) -> String {
        let nodes = render_slide(slide);
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        let mut widget = SlideWidget::new(&nodes);
        if let Some(demo) = demo {
            widget = widget.demo(DemoWidget::new(
                demo,
                FormFocus::Input(Field::WaterTemperature),
                None,
            ));
        }
        widget.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn body_slide_shows_heading_and_bullets() {
        let text = paint(
            &Slide::body("Next Steps", bullets(&["Pick tools", "Train guides"])),
            None,
        );
        assert!(text.contains("Next Steps"));
        assert!(text.contains("• Pick tools"));
        assert!(text.contains("• Train guides"));
    }

    #[test]
    fn end_slide_is_centred() {
        let text = paint(&Slide::end("Q&A", "Open floor"), None);
        let row = text.lines().find(|l| l.contains("Q&A")).unwrap();
        let col = row.find("Q&A").unwrap();
        assert!(col > 30, "heading should be centred, found at column {col}");
    }

    #[test]
    fn oversized_title_slide_starts_at_the_top() {
        // Enough bullets that the line count no longer fits in a u16.
        let items: Vec<String> = (0..32_768).map(|i| format!("point {i}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let text = paint(&Slide::title_slide("Packed", bullets(&refs)), None);
        let row = text.lines().position(|l| l.contains("Packed"));
        assert_eq!(row, Some(2));
    }

    #[test]
    fn interactive_slide_draws_the_form() {
        let demo = ScoringDemo::default();
        let text = paint(
            &Slide::interactive("Try It", Component::ScoringDemo),
            Some(&demo),
        );
        assert!(text.contains("Try It"));
        assert!(text.contains("Salinity"));
        assert!(text.contains("Log score"));
    }
}
