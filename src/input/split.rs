use crate::input::TextUnit;

/// Page separator written by `pdftotext`.
pub const FORM_FEED: char = '\x0c';

/// Split extracted text into pages on form feeds.
///
/// A whitespace-only segment after the last form feed is the extractor's
/// terminator, not a page, and is dropped. A document that is blank overall
/// yields no pages.
pub fn split_pages(text: &str) -> Vec<TextUnit> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let mut segments: Vec<&str> = text.split(FORM_FEED).collect();
    if segments.len() > 1 && segments.last().is_some_and(|s| s.trim().is_empty()) {
        segments.pop();
    }
    segments
        .into_iter()
        .enumerate()
        .map(|(idx, page)| TextUnit {
            id: format!("page-{}", idx + 1),
            text: page.to_string(),
        })
        .collect()
}

/// Split every unit on blank lines. Whitespace-only paragraphs are dropped;
/// ids become `<unit id>.<n>`.
pub fn split_paragraphs(units: Vec<TextUnit>) -> Vec<TextUnit> {
    let mut out = Vec::new();
    for unit in units {
        let mut n = 0usize;
        let mut current: Vec<&str> = Vec::new();
        for line in unit.text.lines().chain(std::iter::once("")) {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    n += 1;
                    out.push(TextUnit {
                        id: format!("{}.{}", unit.id, n),
                        text: current.join("\n"),
                    });
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
    }
    out
}
