use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::format_distance;

/// visible price text. always four symbols, only the highlighted span
/// reflects the business's real price tier.
pub const PRICE_PLACEHOLDER: &str = "$$$$";

const SEPARATOR: &str = " • ";

/// text with one highlighted span starting at the first character.
/// the highlight range is in characters, the rest of the text is unstyled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    pub highlight: Range<usize>,
}

impl StyledText {
    pub fn highlighted(&self) -> String {
        self.text
            .chars()
            .skip(self.highlight.start)
            .take(self.highlight.len())
            .collect()
    }

    pub fn unstyled(&self) -> String {
        self.text.chars().skip(self.highlight.end).collect()
    }
}

/// builds the list row info label "$$$$ • 0.5 miles".
///
/// the number of highlighted symbols is the character count of `price`,
/// or 1 when the business has no price, capped at the placeholder length.
pub fn format_price_label(price: Option<&str>, meters: f64) -> StyledText {
    let tier = price.map(|p| p.chars().count()).unwrap_or(1);
    let highlight_len = tier.min(PRICE_PLACEHOLDER.chars().count());
    StyledText {
        text: format!("{PRICE_PLACEHOLDER}{SEPARATOR}{}", format_distance(meters)),
        highlight: 0..highlight_len,
    }
}

#[cfg(test)]
mod test {
    use super::format_price_label;

    #[test]
    fn test_price_label_text_is_constant() {
        for price in [None, Some("$"), Some("$$"), Some("$$$$")] {
            let label = format_price_label(price, 804.67);
            assert_eq!(label.text, "$$$$ • 0.5 miles");
        }
    }

    #[test]
    fn test_price_label_highlight_length() {
        assert_eq!(format_price_label(Some("$$"), 0.0).highlight, 0..2);
        assert_eq!(format_price_label(Some("$$$"), 0.0).highlight, 0..3);
        assert_eq!(format_price_label(None, 0.0).highlight, 0..1);
        assert_eq!(format_price_label(Some(""), 0.0).highlight, 0..0);
        assert_eq!(format_price_label(Some("$$$$$"), 0.0).highlight, 0..4);
        // multi-byte currency symbols count as one character each
        assert_eq!(format_price_label(Some("€€"), 0.0).highlight, 0..2);
    }

    #[test]
    fn test_price_label_segments() {
        let label = format_price_label(Some("$$"), 1609.34);
        assert_eq!(label.highlighted(), "$$");
        assert_eq!(label.unstyled(), "$$ • 1.0 miles");
    }
}
