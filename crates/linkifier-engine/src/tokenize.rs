use crate::matcher::find_links;
use crate::segment::Segment;
use crate::span::Span;
use crate::split::split_spans;

/// Splits `text` into link and plain segments.
///
/// Each fragment from the splitter is searched for links independently.
/// Text around and between links becomes plain segments, and adjacent plain
/// pieces are merged so the output alternates cleanly. Concatenating the
/// segment texts always reproduces `text`.
pub fn tokenize(text: &str) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();

    for fragment in split_spans(text) {
        let s = fragment.slice(text);
        let links = find_links(s);
        log::trace!("fragment {s:?}: {} link(s)", links.len());

        let mut cursor = fragment.start;
        for m in links {
            let link = m.span.offset(fragment.start);
            push_plain(&mut out, text, Span::new(cursor, link.start));
            out.push(Segment::link(text, link));
            cursor = link.end;
        }
        push_plain(&mut out, text, Span::new(cursor, fragment.end));
    }

    log::debug!("tokenized {} bytes into {} segments", text.len(), out.len());
    out
}

/// Appends plain text, extending the previous segment when it is also plain.
fn push_plain(out: &mut Vec<Segment>, text: &str, span: Span) {
    if span.is_empty() {
        return;
    }
    if let Some(last) = out.last_mut()
        && !last.is_link
        && last.span.end == span.start
    {
        last.text.push_str(span.slice(text));
        last.span.end = span.end;
        return;
    }
    out.push(Segment::plain(text, span));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants;
    use crate::scheme::Scheme;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// (text, is_link) pairs, for compact expectations.
    fn parts(text: &str) -> Vec<(String, bool)> {
        let segments = tokenize(text);
        invariants::check(text, &segments);
        segments.into_iter().map(|s| (s.text, s.is_link)).collect()
    }

    fn link(s: &str) -> (String, bool) {
        (s.to_string(), true)
    }

    fn plain(s: &str) -> (String, bool) {
        (s.to_string(), false)
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn plain_sentence_is_one_segment() {
        assert_eq!(parts("just some words"), vec![plain("just some words")]);
    }

    #[test]
    fn bracketed_link() {
        assert_eq!(
            parts("<([https://example.org])>"),
            vec![plain("<(["), link("https://example.org"), plain("])>")]
        );
    }

    #[test]
    fn links_separated_by_punctuation() {
        assert_eq!(
            parts("https://example.org, https://example.org."),
            vec![
                link("https://example.org"),
                plain(", "),
                link("https://example.org"),
                plain("."),
            ]
        );
    }

    #[test]
    fn email_and_mailto() {
        assert_eq!(
            parts("user@example.org mailto:user@example.org"),
            vec![
                link("user@example.org"),
                plain(" "),
                link("mailto:user@example.org"),
            ]
        );
    }

    #[test]
    fn scheme_without_slash_is_plain() {
        assert_eq!(
            parts("http:www.example.org"),
            vec![plain("http:www.example.org")]
        );
    }

    #[test]
    fn leading_text_is_merged() {
        assert_eq!(
            parts("check this: www.example.org"),
            vec![plain("check this: "), link("www.example.org")]
        );
    }

    #[test]
    fn unpeeled_wrapper_is_carved() {
        // `.` breaks the pair, so the matcher carves the link out
        assert_eq!(
            parts("(https://x.org)."),
            vec![plain("("), link("https://x.org"), plain(").")]
        );
    }

    #[rstest]
    #[case("https://example.org?url=https://example.org")]
    #[case("ftp://123.234.1.99/path?var=val")]
    #[case("http:///www.example.org")]
    #[case("https://example.org/")]
    fn single_link(#[case] input: &str) {
        assert_eq!(parts(input), vec![link(input)]);
    }

    #[test]
    fn spans_point_into_input() {
        let input = "go to «example.org» now";
        let segments = tokenize(input);
        let link = segments.iter().find(|s| s.is_link).unwrap();
        assert_eq!(link.span.slice(input), "example.org");
        assert_eq!(link.span.start, "go to «".len());
    }

    #[test]
    fn hrefs_follow_scheme_rules() {
        let hrefs: Vec<String> = tokenize("example.org a@b.org ftp://c.org")
            .iter()
            .filter_map(|s| s.href(&Scheme::default()))
            .collect();
        assert_eq!(
            hrefs,
            vec!["http://example.org", "mailto:a@b.org", "ftp://c.org"]
        );
    }

    #[rstest]
    #[case("multi\nline\ttext with a.org and\r\nmore")]
    #[case("¡hola! «¿x.org?» (y@z.org), [*_~a.org~_*]")]
    #[case("    ")]
    #[case("ünïcödé.org ünïcödé")]
    fn round_trip(#[case] input: &str) {
        let segments = tokenize(input);
        invariants::check(input, &segments);
        let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn reclassification_is_stable() {
        let input = "see (https://a.org/x), then b.org.";
        for segment in tokenize(input) {
            let again = tokenize(&segment.text);
            if segment.is_link {
                assert_eq!(again.len(), 1, "link re-split: {:?}", segment.text);
                assert!(again[0].is_link);
            } else {
                assert!(again.iter().all(|s| !s.is_link), "{:?}", segment.text);
            }
        }
    }
}
