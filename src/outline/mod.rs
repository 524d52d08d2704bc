//! Parser for the semi-structured outline text returned by the text model.
//!
//! The expected shape is the one requested by
//! [`crate::prompt::outline_prompt`]: repeated `SLIDE N:` blocks, each with
//! a `Title:` line and a `Points:` line whose bullets are separated by `|`.
//! The model is under no obligation to honor that shape, so the parser is
//! total: any input, including empty or free-form text, yields exactly
//! `expected_count` entries. Blocks are keyed on the slide number in the
//! marker, not positional order; missing or malformed blocks leave an empty
//! entry in that slot. Duplicate slide numbers: the last block wins.

/// Per-slide outline record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutlineEntry {
    pub slide_index: usize,
    pub title: String,
    pub bullets: Vec<String>,
}

impl OutlineEntry {
    fn empty(slide_index: usize) -> Self {
        Self {
            slide_index,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.bullets.is_empty()
    }

    /// Render the entry as the content string handed to the slide prompt.
    /// Empty entries render to an empty string; the pipeline substitutes a
    /// topic-based fallback for those.
    pub fn render_content(&self) -> String {
        match (self.title.is_empty(), self.bullets.is_empty()) {
            (false, false) => format!("{}. Key points: {}", self.title, self.bullets.join("; ")),
            (false, true) => self.title.clone(),
            (true, false) => format!("Key points: {}", self.bullets.join("; ")),
            (true, true) => String::new(),
        }
    }
}

/// Parse outline text into exactly `expected_count` entries, indices
/// 1..=expected_count, gaps filled with empty entries.
pub fn parse_outline(raw: &str, expected_count: usize) -> Vec<OutlineEntry> {
    let mut entries: Vec<OutlineEntry> = (1..=expected_count).map(OutlineEntry::empty).collect();

    let mut current: Option<usize> = None;
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(index) = parse_slide_marker(line) {
            // Out-of-range numbers are ignored entirely; their title and
            // points lines must not bleed into a real slot.
            if (1..=expected_count).contains(&index) {
                entries[index - 1] = OutlineEntry::empty(index);
                current = Some(index);
            } else {
                current = None;
            }
            continue;
        }

        let Some(index) = current else {
            continue;
        };
        let entry = &mut entries[index - 1];

        if let Some(title) = strip_prefix_ci(line, "title:") {
            entry.title = title.trim().to_string();
        } else if let Some(points) = strip_prefix_ci(line, "points:") {
            entry.bullets = points
                .split('|')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    entries
}

/// Recognize a `SLIDE N:` block marker and extract N. Tolerates casing and
/// a missing trailing colon.
fn parse_slide_marker(line: &str) -> Option<usize> {
    let rest = strip_prefix_ci(line, "slide")?;
    let rest = rest.trim_start();
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let after = rest[digits.len()..].trim_start();
    if !(after.is_empty() || after.starts_with(':')) {
        // Lines like "Slide pacing matters" are outline content, not markers.
        return None;
    }
    digits.parse().ok()
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    // `get` keeps this total on multi-byte text; a non-boundary slice could
    // not have matched an ASCII prefix anyway.
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}
