//! Splitting impression text into candidate finding units.
//!
//! Strategies are tried in a fixed order and the first that yields at least one unit wins:
//! numbered list, bulleted list, sentences, lines, whole text. Numbered impressions are the
//! most common and least ambiguous format; sentence and line splitting come last because
//! they can fracture multi-clause findings.

use crate::constants::MIN_SPLIT_UNIT_CHARS;
use crate::patterns::{compile, compile_exact};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> =
    Lazy::new(|| compile(r"\A\s*(?:impressions?|findings|conclusions?)\s*:\s*"));

// "...condyle. 2. Moderate effusion" written on one line
static INLINE_NUMBER: Lazy<Regex> =
    Lazy::new(|| compile_exact(r"([.;])[ \t]+(\d{1,2}[.)])[ \t]+([A-Z])"));

// A digit straight after the marker is a decimal ("1.5 cm cyst"), not item 1.
static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*\d{1,3}[.)](?:\s+(\S.*)|([^\d\s].*))$"));

static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| compile(r"^\s*[-•–]\s*(.+)$"));

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| compile_exact(r"\.\s+[A-Z]"));

/// Which strategy produced the units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentStrategy {
    Numbered,
    Bulleted,
    Sentences,
    Lines,
    WholeText,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segmentation {
    pub strategy: SegmentStrategy,
    pub units: Vec<String>,
}

/// Remove a leading `IMPRESSION:` / `FINDINGS:` / `CONCLUSION:` header.
pub fn strip_header(text: &str) -> &str {
    match HEADER.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

fn normalise(text: &str) -> String {
    let text = strip_header(text).replace("\r\n", "\n").replace('\r', "\n");
    INLINE_NUMBER
        .replace_all(&text, "${1}\n${2} ${3}")
        .into_owned()
}

fn tidy(unit: &str) -> String {
    unit.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn list_items(text: &str, item: &Regex) -> Vec<String> {
    text.lines()
        .filter_map(|line| item.captures(line))
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| tidy(m.as_str()))
        .filter(|unit| !unit.is_empty())
        .collect()
}

fn long_enough(unit: &str) -> bool {
    unit.chars().count() > MIN_SPLIT_UNIT_CHARS
}

/// Keep every non-empty piece, but only split when more than one piece is substantial.
fn split_if_substantial(pieces: Vec<String>) -> Vec<String> {
    let pieces: Vec<String> = pieces.into_iter().filter(|p| !p.is_empty()).collect();
    if pieces.iter().filter(|p| long_enough(p)).count() > 1 {
        pieces
    } else {
        Vec::new()
    }
}

fn sentences(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        pieces.push(tidy(&text[start..m.start()]));
        // resume at the capital letter that opened the next sentence
        start = m.end() - 1;
    }
    pieces.push(tidy(&text[start..]));
    split_if_substantial(pieces)
}

fn lines(text: &str) -> Vec<String> {
    split_if_substantial(text.lines().map(tidy).collect())
}

/// Segment `text`, reporting which strategy was used.
pub fn segment_with_strategy(text: &str) -> Segmentation {
    let cleaned = normalise(text);

    let numbered = list_items(&cleaned, &NUMBERED_ITEM);
    if !numbered.is_empty() {
        return Segmentation {
            strategy: SegmentStrategy::Numbered,
            units: numbered,
        };
    }

    let bulleted = list_items(&cleaned, &BULLET_ITEM);
    if !bulleted.is_empty() {
        return Segmentation {
            strategy: SegmentStrategy::Bulleted,
            units: bulleted,
        };
    }

    let by_sentence = sentences(&cleaned);
    if !by_sentence.is_empty() {
        return Segmentation {
            strategy: SegmentStrategy::Sentences,
            units: by_sentence,
        };
    }

    let by_line = lines(&cleaned);
    if !by_line.is_empty() {
        return Segmentation {
            strategy: SegmentStrategy::Lines,
            units: by_line,
        };
    }

    let whole = tidy(&cleaned);
    Segmentation {
        strategy: SegmentStrategy::WholeText,
        units: if whole.is_empty() { vec![] } else { vec![whole] },
    }
}

/// Ordered, trimmed, non-empty finding units.
pub fn segment(text: &str) -> Vec<String> {
    segment_with_strategy(text).units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_header_is_anchored_and_case_insensitive() {
        assert_eq!(strip_header("Impression: ACL tear"), "ACL tear");
        assert_eq!(strip_header("  FINDINGS:\n1. tear"), "1. tear");
        assert_eq!(
            strip_header("ACL tear. Impression: none"),
            "ACL tear. Impression: none"
        );
    }

    #[test]
    fn test_numbered_list_wins() {
        let text = "IMPRESSION:\n1. Complete ACL tear.\n2) Small joint effusion.\n- not a bullet unit";
        let seg = segment_with_strategy(text);
        assert_eq!(seg.strategy, SegmentStrategy::Numbered);
        assert_eq!(seg.units, vec!["Complete ACL tear.", "Small joint effusion."]);
    }

    #[test]
    fn test_inline_numbering_is_split() {
        let text = "1. Complete tear of the ACL with associated bone bruising of the lateral femoral condyle. 2. Moderate joint effusion.";
        let seg = segment_with_strategy(text);
        assert_eq!(seg.strategy, SegmentStrategy::Numbered);
        assert_eq!(
            seg.units,
            vec![
                "Complete tear of the ACL with associated bone bruising of the lateral femoral condyle.",
                "Moderate joint effusion."
            ]
        );
    }

    #[test]
    fn test_decimal_measurement_is_not_a_numbered_item() {
        let seg = segment_with_strategy("1.5 cm Baker's cyst.\nSmall effusion present today.");
        assert_eq!(seg.strategy, SegmentStrategy::Sentences);
        assert_eq!(seg.units[0], "1.5 cm Baker's cyst");
    }

    #[test]
    fn test_numbered_item_may_start_with_a_measurement() {
        let seg = segment_with_strategy(
            "IMPRESSION:\n1. Complete ACL tear.\n2. 3 cm Baker's cyst.\n3) 2.5 cm loose body.",
        );
        assert_eq!(seg.strategy, SegmentStrategy::Numbered);
        assert_eq!(
            seg.units,
            vec!["Complete ACL tear.", "3 cm Baker's cyst.", "2.5 cm loose body."]
        );
    }

    #[test]
    fn test_bullets_are_stripped() {
        let seg = segment_with_strategy("• Supraspinatus tendinosis\n– AC joint arthrosis\n- Small effusion");
        assert_eq!(seg.strategy, SegmentStrategy::Bulleted);
        assert_eq!(
            seg.units,
            vec!["Supraspinatus tendinosis", "AC joint arthrosis", "Small effusion"]
        );
    }

    #[test]
    fn test_sentence_split_requires_capital_and_length() {
        let seg = segment_with_strategy("ACL is intact. Small joint effusion is present.");
        assert_eq!(seg.strategy, SegmentStrategy::Sentences);
        assert_eq!(seg.units, vec!["ACL is intact", "Small joint effusion is present."]);
    }

    #[test]
    fn test_short_sentences_are_kept_once_splitting_applies() {
        let seg = segment_with_strategy("ACL tear. Moderate joint effusion. Small Baker's cyst.");
        assert_eq!(seg.strategy, SegmentStrategy::Sentences);
        assert_eq!(
            seg.units,
            vec!["ACL tear", "Moderate joint effusion", "Small Baker's cyst."]
        );

        let seg = segment_with_strategy("ACL tear\nmoderate joint effusion\nsmall Baker's cyst");
        assert_eq!(seg.strategy, SegmentStrategy::Lines);
        assert_eq!(seg.units[0], "ACL tear");
    }

    #[test]
    fn test_short_sentences_fall_through_to_whole_text() {
        let seg = segment_with_strategy("ACL tear. No more.");
        assert_eq!(seg.strategy, SegmentStrategy::WholeText);
        assert_eq!(seg.units, vec!["ACL tear. No more."]);
    }

    #[test]
    fn test_line_split() {
        let seg = segment_with_strategy("medial meniscus tear\nsmall joint effusion");
        assert_eq!(seg.strategy, SegmentStrategy::Lines);
        assert_eq!(seg.units.len(), 2);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(segment("").is_empty());
        assert!(segment("IMPRESSION:   ").is_empty());
    }

    #[test]
    fn test_crlf_is_normalised() {
        let units = segment("1. ACL tear\r\n2. MCL sprain\r\n");
        assert_eq!(units, vec!["ACL tear", "MCL sprain"]);
    }
}
