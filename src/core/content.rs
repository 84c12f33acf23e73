//! The bioluminescence pitch deck.

use super::deck::{bullets, Component, Deck, DeckError, Slide, SlideContent};

/// Index the scoring demo is inserted at: right after the implementation
/// plan that introduces the scoring system.
const DEMO_INDEX: usize = 10;

/// Build the pitch deck, with or without the interactive scoring slide.
pub fn pitch_deck(include_demo: bool) -> Result<Deck, DeckError> {
    let mut slides = static_slides();
    if include_demo {
        slides.insert(
            DEMO_INDEX,
            Slide::interactive("Try the Scoring System", Component::ScoringDemo),
        );
    }
    Deck::new(slides)
}

fn static_slides() -> Vec<Slide> {
    vec![
        Slide::title_slide(
            "Illuminating Our Waters: Predicting Bioluminescent Dinoflagellates",
            bullets(&[
                "A Data-Driven Approach for Enhancing Kayaking Experiences",
                "Data Scientist: Joseph Dunivan",
            ]),
        ),
        Slide::body(
            "Why This Matters",
            bullets(&[
                "Improve tour planning and customer satisfaction",
                "Increase the likelihood of spectacular bioluminescent displays",
                "Contribute to scientific understanding of local marine ecosystems",
                "Scientific experiences can be a potential revenue add",
            ]),
        ),
        Slide::body(
            "Current Challenges",
            bullets(&[
                "Unpredictable nature of bioluminescent events",
                "Reliance on general indicators (e.g., chlorophyll levels)",
                "Missed opportunities for amazing customer experiences",
            ]),
        ),
        Slide::body(
            "The Power of Data",
            bullets(&[
                "Moving beyond guesswork",
                "Leveraging multiple data points for accurate predictions",
                "Turning our tours into valuable scientific contributions",
            ]),
        ),
        Slide::body(
            "Key Predictors to Explore",
            bullets(&[
                "Water temperature",
                "Salinity",
                "Nutrient levels (nitrogen, phosphorus)",
                "Water turbulence",
                "Moon phase and light conditions",
            ]),
        ),
        Slide::body(
            "Additional Factors",
            bullets(&[
                "Seasonal patterns",
                "Historical bloom data",
                "pH levels",
                "Dissolved oxygen",
                "Presence of predators/competitors",
            ]),
        ),
        Slide::body(
            "Data Collection Methods",
            bullets(&[
                "Simple: Manual recordings (temperature, salinity)",
                "Moderate: Portable test kits (nutrients, pH)",
                "Advanced: Partnerships with research institutions for complex analysis",
            ]),
        ),
        Slide::body(
            "Citizen Science Opportunity",
            bullets(&[
                "Engage customers in data collection",
                "Create unique, educational experiences",
                "Contribute to larger scientific projects",
            ]),
        ),
        Slide::body(
            "Potential Benefits",
            bullets(&[
                "Improved tour scheduling",
                "Enhanced marketing ('data-driven bioluminescence predictions')",
                "Differentiation from competitors",
                "Contribution to local marine conservation efforts",
            ]),
        ),
        Slide::body(
            "Implementation Plan",
            bullets(&[
                "Start with basic measurements (temperature, salinity)",
                "Gradually introduce more complex data collection",
                "Develop a simple scoring system for prediction",
                "Refine and expand over time",
            ]),
        ),
        Slide::body(
            "Challenges and Considerations",
            bullets(&[
                "Initial investment in equipment",
                "Training staff in data collection methods",
                "Ensuring data accuracy and consistency",
                "Managing customer expectations",
            ]),
        ),
        Slide::body(
            "Next Steps",
            bullets(&[
                "Identify key team members to lead the initiative",
                "Research and select initial data collection tools",
                "Develop a data recording system",
                "Create a training program for guides",
                "Plan a pilot phase for the upcoming season",
            ]),
        ),
        Slide::body(
            "Conclusion",
            bullets(&[
                "Embrace the power of data to enhance our tours",
                "Position our company as leaders in eco-tourism",
                "Create unforgettable experiences for our customers",
            ]),
        ),
        Slide::end("Q&A", "Open floor for questions and discussion"),
    ]
}

/// Plain-text outline of a deck, one block per slide.
pub fn outline(deck: &Deck) -> String {
    let mut out = String::new();
    for (i, slide) in deck.slides().iter().enumerate() {
        out.push_str(&format!("{:>2}. {}\n", i + 1, slide.title));
        match slide.content() {
            SlideContent::Bullets(items) => {
                for item in items {
                    out.push_str(&format!("    - {item}\n"));
                }
            }
            SlideContent::Paragraph(text) => {
                out.push_str(&format!("    {text}\n"));
            }
            SlideContent::Embedded(Component::ScoringDemo) => {
                out.push_str("    [interactive scoring demo]\n");
            }
        }
        out.push('\n');
    }
    out
}
