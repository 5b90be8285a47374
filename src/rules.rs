//! The ordered rewrite rules that convert machine-translated segment markers
//! to interactive status.
//!
//! The rewrite is deliberately text-level: SDLXLIFF producers vary in
//! attribute order and in whether a confidence attribute is present, and a
//! full XML round-trip would reformat indentation, attribute order, and
//! encoding declarations. Two ordered patterns cover both shapes while
//! leaving every byte outside the matched spans untouched.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Confidence attribute followed by the machine-translation origin pair.
    static ref MT_WITH_CONFIDENCE: Regex =
        Regex::new(r#"conf="[^"]*"\s+origin="mt"\s+origin-system="[^"]*""#).unwrap();
    /// The origin pair alone, for producers that emit no confidence attribute.
    static ref MT_BARE: Regex =
        Regex::new(r#"origin="mt"\s+origin-system="[^"]*""#).unwrap();
}

const REPLACEMENT_WITH_CONFIDENCE: &str = r#"conf="ApprovedTranslation" origin="interactive""#;
const REPLACEMENT_BARE: &str = r#"origin="interactive""#;

/// Rewrites every machine-translation origin marker in `xml` to interactive
/// status. Pure and total: text without markers is returned byte-identical.
///
/// The confidence-carrying rule runs first; its replacement contains no
/// `origin="mt"`, so the bare rule cannot re-match a resolved span and the
/// whole transform is idempotent.
///
/// # Example
/// ```rust
/// let input = r#"<target conf="Draft" origin="mt" origin-system="GoogleMT">x</target>"#;
/// let output = sdlfix::rules::transform(input);
/// assert_eq!(
///     output,
///     r#"<target conf="ApprovedTranslation" origin="interactive">x</target>"#
/// );
/// ```
pub fn transform(xml: &str) -> String {
    let pass_one = MT_WITH_CONFIDENCE.replace_all(xml, REPLACEMENT_WITH_CONFIDENCE);
    MT_BARE.replace_all(&pass_one, REPLACEMENT_BARE).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_rewrites_marker_with_confidence() {
        let input = r#"<sdl:seg conf="Draft" origin="mt" origin-system="GoogleMT"/>"#;
        let output = transform(input);
        assert_eq!(
            output,
            r#"<sdl:seg conf="ApprovedTranslation" origin="interactive"/>"#
        );
        assert!(!output.contains(r#"origin="mt""#));
    }

    #[test]
    fn test_rewrites_bare_marker() {
        let input = r#"<sdl:seg origin="mt" origin-system="DeepL"/>"#;
        assert_eq!(transform(input), r#"<sdl:seg origin="interactive"/>"#);
    }

    #[test]
    fn test_any_confidence_value_matches() {
        for conf in ["MTPE", "Draft", "Translated", ""] {
            let input = format!(r#"conf="{conf}" origin="mt" origin-system="NMT""#);
            assert_eq!(
                transform(&input),
                r#"conf="ApprovedTranslation" origin="interactive""#
            );
        }
    }

    #[test]
    fn test_whitespace_between_attributes_may_span_lines() {
        let input = "conf=\"MTPE\"\n    origin=\"mt\"\t origin-system=\"Engine 2\"";
        assert_eq!(
            transform(input),
            r#"conf="ApprovedTranslation" origin="interactive""#
        );
    }

    #[test]
    fn test_rewrites_every_occurrence() {
        let input = indoc! {r#"
            <sdl:seg id="1" conf="Draft" origin="mt" origin-system="GoogleMT"/>
            <sdl:seg id="2" origin="mt" origin-system="DeepL"/>
            <sdl:seg id="3" conf="MTPE" origin="mt" origin-system="ModernMT"/>
        "#};
        let output = transform(input);
        assert_eq!(output.matches(r#"origin="interactive""#).count(), 3);
        assert_eq!(output.matches(r#"conf="ApprovedTranslation""#).count(), 2);
        assert!(!output.contains(r#"origin="mt""#));
    }

    #[test]
    fn test_untouched_text_is_byte_identical() {
        let inputs = [
            "",
            "<xliff></xliff>",
            r#"<sdl:seg conf="Draft" origin="interactive"/>"#,
            // origin="mt" with no origin-system attribute after it is left alone
            r#"<sdl:seg origin="mt" percent="100"/>"#,
            "plain text, no markup at all",
        ];
        for input in inputs {
            assert_eq!(transform(input), input);
        }
    }

    #[test]
    fn test_surrounding_bytes_are_preserved() {
        let input = indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <xliff xmlns:sdl="http://sdl.com/FileTypes/SdlXliff/1.0">
              <target>  weird   spacing &amp; entities </target>
              <sdl:seg id="7" conf="Draft" origin="mt" origin-system="GoogleMT"/>
            </xliff>
        "#};
        let output = transform(input);
        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(output.contains("  weird   spacing &amp; entities "));
        assert!(output.contains(r#"<sdl:seg id="7" conf="ApprovedTranslation" origin="interactive"/>"#));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let input = indoc! {r#"
            <sdl:seg conf="Draft" origin="mt" origin-system="GoogleMT"/>
            <sdl:seg origin="mt" origin-system="DeepL"/>
        "#};
        let once = transform(input);
        assert_eq!(transform(&once), once);
    }

    #[test]
    fn test_origin_system_value_stops_at_quote() {
        // The quote ends the attribute value; trailing attributes survive.
        let input = r#"origin="mt" origin-system="X" lockTM="true""#;
        assert_eq!(transform(input), r#"origin="interactive" lockTM="true""#);
    }
}
