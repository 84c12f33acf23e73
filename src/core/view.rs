//! Slide → display tree.
//!
//! The tree is renderer-agnostic: `ui::slide_widget` paints it onto a
//! terminal buffer, tests inspect it directly.

use super::deck::{Component, Content, Slide, SlideLayout};

/// Heading size, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Large,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode {
    Heading { text: String, level: HeadingLevel },
    Paragraph(String),
    BulletList(Vec<String>),
    /// Horizontally centred children.
    Centered(Vec<DisplayNode>),
    /// Rendering is handed to the embedded component.
    Embed(Component),
}

fn heading(text: &str, level: HeadingLevel) -> DisplayNode {
    DisplayNode::Heading {
        text: text.to_string(),
        level,
    }
}

fn content_block(content: &Content) -> DisplayNode {
    match content {
        Content::Bullets(items) => DisplayNode::BulletList(items.clone()),
        Content::Paragraph(text) => DisplayNode::Paragraph(text.clone()),
    }
}

/// Map a slide to its display tree.  Dispatch is on the layout variant only.
pub fn render_slide(slide: &Slide) -> Vec<DisplayNode> {
    match &slide.layout {
        SlideLayout::Title(content) => vec![DisplayNode::Centered(vec![
            heading(&slide.title, HeadingLevel::Large),
            content_block(content),
        ])],
        SlideLayout::End(text) => vec![DisplayNode::Centered(vec![
            heading(&slide.title, HeadingLevel::Medium),
            DisplayNode::Paragraph(text.clone()),
        ])],
        SlideLayout::Interactive(component) => vec![
            heading(&slide.title, HeadingLevel::Medium),
            DisplayNode::Embed(*component),
        ],
        SlideLayout::Body(content) => vec![
            heading(&slide.title, HeadingLevel::Medium),
            content_block(content),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::bullets;

    #[test]
    fn title_slide_is_centred_with_large_heading() {
        let slide = Slide::title_slide("Deck", bullets(&["one", "two"]));
        assert_eq!(
            render_slide(&slide),
            vec![DisplayNode::Centered(vec![
                heading("Deck", HeadingLevel::Large),
                DisplayNode::BulletList(vec!["one".into(), "two".into()]),
            ])]
        );
    }

    #[test]
    fn end_slide_is_centred_paragraph() {
        let slide = Slide::end("Q&A", "Open floor");
        assert_eq!(
            render_slide(&slide),
            vec![DisplayNode::Centered(vec![
                heading("Q&A", HeadingLevel::Medium),
                DisplayNode::Paragraph("Open floor".into()),
            ])]
        );
    }

    #[test]
    fn body_slide_picks_list_or_paragraph_from_content() {
        let listed = Slide::body("Plan", bullets(&["a"]));
        assert_eq!(
            render_slide(&listed)[1],
            DisplayNode::BulletList(vec!["a".into()])
        );

        let prose = Slide::body("Note", Content::Paragraph("just text".into()));
        assert_eq!(
            render_slide(&prose)[1],
            DisplayNode::Paragraph("just text".into())
        );
    }

    #[test]
    fn interactive_slide_delegates_to_component() {
        let slide = Slide::interactive("Demo", Component::ScoringDemo);
        let nodes = render_slide(&slide);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1], DisplayNode::Embed(Component::ScoringDemo));
    }
}
