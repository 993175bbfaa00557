//! Call-site locator — find complete `.Add(...)` call expressions in a buffer.
//!
//! Pure text scanning: a regex finds each `<identifier>.Add(` marker, then a
//! paren depth counter walks forward to the matching close. No C++ parser is
//! involved, so the locator works on multi-line calls and calls nested inside
//! other expressions.

use regex::Regex;

/// One complete call expression found in a buffer.
///
/// `start..end` is a half-open byte range into the buffer; `raw_text` is
/// always exactly `buffer[start..end]`. The range covers the whole call plus
/// a trailing `;` when one follows (after optional whitespace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSpan {
    pub start: usize,
    pub end: usize,
    /// The identifier the call was invoked on (e.g. `theCommands`).
    pub receiver: String,
    pub raw_text: String,
}

/// Find all non-overlapping `<identifier>.<method>(` call spans in
/// `buffer`, in order of their start offset. `method` is the marker's
/// method-like token (`"Add"` for this migration).
///
/// From the char after the opening paren a signed depth counter scans
/// forward (`(` increments, `)` decrements) until it returns to zero. If the
/// input ends first the call is unterminated: the candidate is dropped
/// silently and scanning resumes one byte past the match start, so a marker
/// beginning inside the failed region is not missed.
///
/// The depth counter is not quote-aware — a paren inside a quoted argument
/// still affects it. Accepted approximation, kept for parity with the
/// original migration behavior.
pub fn locate_calls(buffer: &str, method: &str) -> Vec<CallSpan> {
    let marker = Regex::new(&format!(r"(\w+)\.{}\s*\(", regex::escape(method))).unwrap();
    let bytes = buffer.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < buffer.len() {
        let Some(caps) = marker.captures(&buffer[pos..]) else {
            break;
        };
        let whole = match caps.get(0) {
            Some(m) => m,
            None => break,
        };
        let match_start = pos + whole.start();
        // The marker always ends on its opening paren
        let open_paren = pos + whole.end() - 1;

        let mut depth: i32 = 1;
        let mut i = open_paren + 1;
        while i < bytes.len() && depth > 0 {
            match bytes[i] {
                b'(' => depth += 1,
                b')' => depth -= 1,
                _ => {}
            }
            i += 1;
        }

        if depth != 0 {
            // Unterminated call: drop the candidate, resume just past the
            // match start rather than past the whole failed region
            let step = buffer[match_start..]
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
            pos = match_start + step;
            continue;
        }

        // Consume a trailing statement terminator if one follows
        let mut end = i;
        let mut k = i;
        while k < bytes.len() && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        if k < bytes.len() && bytes[k] == b';' {
            end = k + 1;
        }

        spans.push(CallSpan {
            start: match_start,
            end,
            receiver: caps[1].to_string(),
            raw_text: buffer[match_start..end].to_string(),
        });
        pos = end;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_call_with_terminator() {
        let buf = "obj.Add(\"foo\", \"help\", FooFunc);";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].receiver, "obj");
        assert_eq!(spans[0].raw_text, buf);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, buf.len());
    }

    #[test]
    fn raw_text_matches_buffer_slice() {
        let buf = "  theCommands.Add(\"a\", \"b\", F);  ";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 1);
        let span = &spans[0];
        assert_eq!(span.raw_text, &buf[span.start..span.end]);
    }

    #[test]
    fn finds_multiple_calls_in_order() {
        let buf = "a.Add(\"x\", \"h\", F);\nb.Add(\"y\", \"h\", G);\n";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].receiver, "a");
        assert_eq!(spans[1].receiver, "b");
        assert!(spans[0].end <= spans[1].start, "spans must not overlap");
    }

    #[test]
    fn handles_nested_parens_in_arguments() {
        let buf = "obj.Add(\"foo\", \"help\", wrap(FooFunc), \"group\");";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].raw_text, buf);
    }

    #[test]
    fn spans_multiline_calls() {
        let buf = "obj.Add(\"foo\",\n        \"a long help\",\n        FooFunc);\n";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 1);
        assert!(spans[0].raw_text.ends_with(';'));
    }

    #[test]
    fn terminator_after_whitespace_is_consumed() {
        let buf = "obj.Add(\"foo\", \"h\", F)\n  ;";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 1);
        assert!(spans[0].raw_text.ends_with(';'));
    }

    #[test]
    fn missing_terminator_ends_at_close_paren() {
        let buf = "obj.Add(\"foo\", \"h\", F) more text";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].raw_text, "obj.Add(\"foo\", \"h\", F)");
    }

    #[test]
    fn unterminated_call_is_dropped() {
        let buf = "obj.Add(\"foo\", \"help\", FooFunc";
        let spans = locate_calls(buf, "Add");
        assert!(spans.is_empty());
    }

    #[test]
    fn unterminated_call_does_not_hide_later_marker() {
        // The first .Add( never closes; the second one inside what looked
        // like its argument region must still be found
        let buf = "broken.Add(\"x\", other.Add(\"y\", \"h\", G);";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].receiver, "other");
    }

    #[test]
    fn marker_with_space_before_paren() {
        let buf = "obj.Add (\"foo\", \"h\", F);";
        let spans = locate_calls(buf, "Add");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn no_match_in_plain_text() {
        assert!(locate_calls("int main() { return 0; }", "Add").is_empty());
    }
}
