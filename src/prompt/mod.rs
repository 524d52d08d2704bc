//! Prompt assembly for the generative endpoints.
//!
//! Everything here is deterministic string building: same inputs, same
//! output. Theme and style are restated literally so the image model can
//! key off them.

/// Prompt for a single mind-map image.
pub fn mindmap_prompt(topic: &str, theme: &str, style: &str, complexity: &str) -> String {
    format!(
        "Create a detailed mind map about: {topic}\n\
         \n\
         Theme: {theme}\n\
         Style: {style}\n\
         Complexity: {complexity}\n\
         \n\
         Requirements:\n\
         - Central concept in the middle\n\
         - Main branches radiating outward with clear hierarchy\n\
         - Sub-branches with related concepts\n\
         - Use colors to differentiate categories\n\
         - Include icons or small illustrations where relevant\n\
         - Clean, organized layout with readable text\n\
         - Professional and visually appealing design\n\
         - Follow the {theme} color scheme\n\
         - {style} visual style"
    )
}

/// Prompt for one presentation slide.
///
/// Framing varies by position: slide 1 is a title slide (checked first, so
/// a one-slide deck gets title framing), the final slide of a longer deck
/// is a conclusion slide, everything in between is a content slide.
pub fn slide_prompt(
    topic: &str,
    slide_number: usize,
    total_slides: usize,
    slide_content: &str,
    theme: &str,
    style: &str,
) -> String {
    let framing = if slide_number == 1 {
        "make it an engaging title slide"
    } else if slide_number < total_slides {
        "make it a content slide with key points"
    } else {
        "make it a conclusion/summary slide"
    };

    format!(
        "Create a professional presentation slide.\n\
         \n\
         Topic: {topic}\n\
         Slide {slide_number} of {total_slides}\n\
         Slide Content: {slide_content}\n\
         \n\
         Theme: {theme}\n\
         Style: {style}\n\
         \n\
         Requirements:\n\
         - Create a single, clean presentation slide\n\
         - Include a clear title at the top\n\
         - Use bullet points or key information in a readable layout\n\
         - Professional typography and spacing\n\
         - Follow the {theme} color scheme\n\
         - {style} visual design\n\
         - Include relevant icons or simple graphics if appropriate\n\
         - Make text large and readable\n\
         - This is slide {slide_number}, so {framing}\n\
         - DO NOT include any watermarks or attribution text"
    )
}

/// Prompt for the text model producing the deck outline.
///
/// The format instructions below are the only contract the outline parser
/// has with the model output; the parser is written to tolerate deviations.
pub fn outline_prompt(topic: &str, slide_count: usize) -> String {
    format!(
        "Create a brief outline for a {slide_count}-slide presentation about: {topic}\n\
         \n\
         For each slide, provide:\n\
         - A short title (max 5 words)\n\
         - 2-3 key bullet points (max 8 words each)\n\
         \n\
         Format your response exactly like this:\n\
         SLIDE 1:\n\
         Title: [title here]\n\
         Points: [point 1] | [point 2] | [point 3]\n\
         \n\
         SLIDE 2:\n\
         Title: [title here]\n\
         Points: [point 1] | [point 2] | [point 3]\n\
         \n\
         (continue for all {slide_count} slides)\n\
         \n\
         Keep it concise and impactful."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mindmap_prompt_embeds_theme_and_style() {
        let prompt = mindmap_prompt(
            "Rust ownership",
            "Ocean Blues",
            "Minimalist",
            "Detailed",
        );

        assert!(prompt.contains("Create a detailed mind map about: Rust ownership"));
        assert!(prompt.contains("Theme: Ocean Blues"));
        assert!(prompt.contains("Style: Minimalist"));
        assert!(prompt.contains("Complexity: Detailed"));
        assert!(prompt.contains("Follow the Ocean Blues color scheme"));
        assert!(prompt.contains("Minimalist visual style"));
    }

    #[test]
    fn test_mindmap_prompt_is_deterministic() {
        let a = mindmap_prompt("Topic", "Theme", "Style", "Simple");
        let b = mindmap_prompt("Topic", "Theme", "Style", "Simple");
        assert_eq!(a, b);
    }

    #[test]
    fn test_slide_prompt_first_slide_gets_title_framing() {
        let prompt = slide_prompt("Remote work", 1, 5, "intro", "Ocean Blues", "Minimalist");
        assert!(prompt.contains("make it an engaging title slide"));
        assert!(!prompt.contains("conclusion/summary"));
    }

    #[test]
    fn test_slide_prompt_last_slide_gets_conclusion_framing() {
        let prompt = slide_prompt("Remote work", 5, 5, "wrap up", "Ocean Blues", "Minimalist");
        assert!(prompt.contains("make it a conclusion/summary slide"));
        assert!(!prompt.contains("engaging title slide"));
    }

    #[test]
    fn test_slide_prompt_middle_slide_gets_content_framing() {
        let prompt = slide_prompt("Remote work", 3, 5, "details", "Ocean Blues", "Minimalist");
        assert!(prompt.contains("make it a content slide with key points"));
        assert!(!prompt.contains("engaging title slide"));
        assert!(!prompt.contains("conclusion/summary"));
    }

    #[test]
    fn test_slide_prompt_single_slide_deck_is_a_title_slide() {
        // Slide 1 of 1 is simultaneously first and last; the title-slide
        // check wins.
        let prompt = slide_prompt("Remote work", 1, 1, "all of it", "Ocean Blues", "Minimalist");
        assert!(prompt.contains("make it an engaging title slide"));
        assert!(!prompt.contains("conclusion/summary"));
    }

    #[test]
    fn test_slide_prompt_embeds_position_and_content() {
        let prompt = slide_prompt("Remote work", 2, 4, "async habits", "Pastel Dream", "Corporate / Professional");
        assert!(prompt.contains("Slide 2 of 4"));
        assert!(prompt.contains("Slide Content: async habits"));
        assert!(prompt.contains("Theme: Pastel Dream"));
        assert!(prompt.contains("Style: Corporate / Professional"));
    }

    #[test]
    fn test_outline_prompt_states_format_contract() {
        let prompt = outline_prompt("Climate change", 4);
        assert!(prompt.contains("a 4-slide presentation about: Climate change"));
        assert!(prompt.contains("SLIDE 1:"));
        assert!(prompt.contains("Title: [title here]"));
        assert!(prompt.contains("Points: [point 1] | [point 2] | [point 3]"));
        assert!(prompt.contains("(continue for all 4 slides)"));
    }
}
