//! The scoring demo: input form, submit control, badge and score chart.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::app::state::{EditBuffer, FormFocus};
use crate::core::scoring::{Field, ScoringDemo};

use super::theme::Theme;

/// Width of the label column in the form.
const LABEL_WIDTH: usize = 34;

pub struct DemoWidget<'a> {
    demo: &'a ScoringDemo,
    focus: FormFocus,
    edit: Option<&'a EditBuffer>,
}

impl<'a> DemoWidget<'a> {
    pub fn new(demo: &'a ScoringDemo, focus: FormFocus, edit: Option<&'a EditBuffer>) -> Self {
        Self { demo, focus, edit }
    }

    fn form_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for field in Field::ALL {
            let focused = self.focus == FormFocus::Input(field);
            let value = match self.edit {
                Some(edit) if edit.field == field => Span::styled(
                    format!("[ {}▏ ]", edit.text),
                    Theme::edit_style(),
                ),
                _ => Span::raw(format!("[ {} ]", format_value(self.demo.inputs().get(field)))),
            };
            let prefix = if focused { " ▸ " } else { "   " };
            let label = Span::raw(format!("{prefix}{:<LABEL_WIDTH$}", field.label()));
            let style = if focused {
                Theme::focused_style()
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![label, value]).style(style));
        }

        lines.push(Line::raw(""));
        let submit_style = if self.focus == FormFocus::Submit {
            Theme::button_style()
        } else {
            Theme::border_style()
        };
        lines.push(Line::from(Span::styled("   [ Log score ]", submit_style)));

        if self.demo.badge_visible() {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    format!(
                        " ✦ Score {}: Great conditions logged! ",
                        self.demo.current_score()
                    ),
                    Theme::badge_style(),
                ),
            ]));
        }
        lines
    }

    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let series = self.demo.series();
        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.value as f64))
            .collect();

        let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
        let y_min = points.iter().map(|p| p.1).fold(0.0, f64::min);
        let y_max = points.iter().map(|p| p.1).fold(y_min + 1.0, f64::max) + 2.0;

        let first = series.first().map(|r| r.label.clone()).unwrap_or_default();
        let last = series.last().map(|r| r.label.clone()).unwrap_or_default();

        let dataset = Dataset::default()
            .name("score")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::series_style())
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border_style())
                    .title(format!(" Bloom score history ({} points) ", series.len())),
            )
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(vec![Line::from(first), Line::from(last)]),
            )
            .y_axis(
                Axis::default()
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Line::from(format!("{y_min:.0}")),
                        Line::from(format!("{y_max:.0}")),
                    ]),
            );

        chart.render(area, buf);
    }
}

/// Whole numbers without a trailing `.0`.
fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

impl<'a> Widget for DemoWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = self.form_lines();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(form.len() as u16 + 1),
                Constraint::Min(6),
            ])
            .split(area);

        Paragraph::new(form).render(chunks[0], buf);
        self.render_chart(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::ui::buffer_text;

    fn paint(demo: &ScoringDemo, focus: FormFocus, edit: Option<&EditBuffer>) -> String {
        let area = Rect::new(0, 0, 90, 30);
        let mut buf = Buffer::empty(area);
        DemoWidget::new(demo, focus, edit).render(area, &mut buf);
        buffer_text(&buf)
    }

    fn submitted(temp: f64, salinity: f64, turbulence: f64, moon: f64) -> ScoringDemo {
        let mut demo = ScoringDemo::default();
        demo.set_input(Field::WaterTemperature, temp);
        demo.set_input(Field::Salinity, salinity);
        demo.set_input(Field::Turbulence, turbulence);
        demo.set_input(Field::MoonPhase, moon);
        demo.submit_on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        demo
    }

    #[test]
    fn form_shows_all_inputs_with_values() {
        let text = paint(&ScoringDemo::default(), FormFocus::Submit, None);
        for field in Field::ALL {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
        assert!(text.contains("[ 20 ]"));
        assert!(text.contains("[ 30 ]"));
        assert!(!text.contains("Great conditions"));
    }

    #[test]
    fn positive_score_shows_badge_and_new_point() {
        let demo = submitted(20.0, 35.0, 2.0, 0.0);
        let text = paint(&demo, FormFocus::Submit, None);
        assert!(text.contains("Score 16: Great conditions logged!"));
        assert!(text.contains("(5 points)"));
        assert!(text.contains("2026-10-19"));
    }

    #[test]
    fn zero_score_has_no_badge() {
        let demo = submitted(0.0, 0.0, 0.0, 10.0);
        let text = paint(&demo, FormFocus::Submit, None);
        assert!(!text.contains("Great conditions"));
    }

    #[test]
    fn edit_buffer_replaces_the_value() {
        let edit = EditBuffer {
            field: Field::Salinity,
            text: "3".into(),
        };
        let text = paint(
            &ScoringDemo::default(),
            FormFocus::Input(Field::Salinity),
            Some(&edit),
        );
        assert!(text.contains("[ 3▏ ]"));
        assert!(!text.contains("[ 30 ]"));
    }

    #[test]
    fn fractional_values_keep_their_decimals() {
        assert_eq!(format_value(20.0), "20");
        assert_eq!(format_value(34.5), "34.5");
        assert_eq!(format_value(-2.0), "-2");
    }
}
