// Report rendering for terminals and browsers
//
// Both renderers reproduce the checked text in full and mark the spans of
// unrecognized words. Spans are character offsets, so the text is walked by
// character rather than sliced by byte.

use std::fmt::Write as _;

use crate::checker::CheckReport;

/// Opens a highlighted span on an ANSI terminal (green background).
pub const ANSI_HIGHLIGHT: &str = "\x1b[42m";

/// Resets terminal attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// CSS class given to unrecognized words in HTML output.
pub const HTML_CLASS: &str = "unknownword";

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8"/>
    <style type="text/css">
      pre {
        margin: auto;
        width: 80em;
        padding: 10px;
        border: thin solid black;
      }
      #stat {
        margin-top: 10px;
        margin-bottom: 10px;
        text-align: center;
      }
      #doc {
        white-space: pre-wrap;
        overflow: hidden;
        resize: both;
      }
      .unknownword {
        background: #ffff00;
      }
    </style>
  </head>
  <body>
"#;

const HTML_TAIL: &str = "  </body>\n</html>\n";

/// The one-line statistics summary of a report.
pub fn summary(report: &CheckReport) -> String {
    format!(
        "Unrecognized unique words / unique Words ({}/{}): Percent {:.6}",
        report.unique_unknown(),
        report.unique_words(),
        report.percent_unknown()
    )
}

/// Copy `text` into `out`, wrapping every character span in `open`/`close`.
/// `escape` is applied to each piece of text. Spans must be in text order and
/// must not overlap; spans past the end of the text are cut short.
fn highlight<F>(
    out: &mut String,
    text: &str,
    spans: impl IntoIterator<Item = (usize, usize)>,
    open: &str,
    close: &str,
    escape: F,
) where
    F: Fn(&mut String, &str),
{
    let mut spans = spans.into_iter().peekable();
    let mut chars = text.char_indices().enumerate().peekable();
    let mut piece_start = 0;
    let mut in_span: Option<usize> = None;

    while let Some(&(pos, (byte, _))) = chars.peek() {
        match in_span {
            Some(end) if pos == end => {
                escape(out, &text[piece_start..byte]);
                out.push_str(close);
                piece_start = byte;
                in_span = None;
                continue;
            }
            None => {
                if let Some(&(start, end)) = spans.peek() {
                    if pos == start && end > start {
                        escape(out, &text[piece_start..byte]);
                        out.push_str(open);
                        piece_start = byte;
                        in_span = Some(end);
                        spans.next();
                    } else if start < pos || end <= start {
                        spans.next();
                        continue;
                    }
                }
            }
            Some(_) => {}
        }
        chars.next();
    }

    escape(out, &text[piece_start..]);
    if in_span.is_some() {
        out.push_str(close);
    }
}

/// Append `s` with the HTML special characters escaped.
pub fn escape_html_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// `s` with the HTML special characters escaped.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_html_into(&mut out, s);
    out
}

/// Render for an ANSI terminal: the text with unrecognized words on a green
/// background, a newline, then the summary line.
pub fn render_console(text: &str, report: &CheckReport) -> String {
    let mut out = String::with_capacity(text.len() + 64);
    highlight(
        &mut out,
        text,
        report.unknown_spans(),
        ANSI_HIGHLIGHT,
        ANSI_RESET,
        |out, s| out.push_str(s),
    );
    out.push('\n');
    out.push_str(&summary(report));
    out
}

/// Render a standalone HTML page with the summary and the highlighted text.
pub fn render_html(text: &str, report: &CheckReport) -> String {
    let mut out = String::with_capacity(HTML_HEAD.len() + text.len() * 2 + 256);
    out.push_str(HTML_HEAD);
    let _ = writeln!(out, "    <pre id=\"stat\">{}</pre>", escape_html(&summary(report)));
    out.push_str("    <pre id=\"doc\">");
    let open = format!("<span class=\"{HTML_CLASS}\">");
    highlight(
        &mut out,
        text,
        report.unknown_spans(),
        &open,
        "</span>",
        escape_html_into,
    );
    out.push_str("</pre>\n");
    out.push_str(HTML_TAIL);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::TextChecker;
    use crate::dictionary::Dictionary;

    fn report(words: &[&str], text: &str) -> CheckReport {
        TextChecker::new(Dictionary::from_words(words.iter().copied())).check(text)
    }

    fn mark(text: &str, spans: &[(usize, usize)]) -> String {
        let mut out = String::new();
        highlight(&mut out, text, spans.iter().copied(), "[", "]", |o, s| o.push_str(s));
        out
    }

    // -- highlight --

    #[test]
    fn highlight_spans() {
        assert_eq!(mark("once upon a tyme", &[(12, 16)]), "once upon a [tyme]");
        assert_eq!(mark("tyme was", &[(0, 4)]), "[tyme] was");
        assert_eq!(mark("a b c", &[(0, 1), (2, 3), (4, 5)]), "[a] [b] [c]");
    }

    #[test]
    fn highlight_uses_char_offsets() {
        assert_eq!(mark("café olé", &[(5, 8)]), "café [olé]");
        assert_eq!(mark("日本語 text", &[(0, 3)]), "[日本語] text");
    }

    #[test]
    fn highlight_without_spans() {
        assert_eq!(mark("plain text", &[]), "plain text");
        assert_eq!(mark("", &[]), "");
    }

    #[test]
    fn highlight_skips_bad_spans() {
        assert_eq!(mark("abc def", &[(2, 2), (4, 7)]), "abc [def]");
        assert_eq!(mark("abc", &[(1, 9)]), "a[bc]");
    }

    // -- summary --

    #[test]
    fn summary_format() {
        let report = report(&["a"], "a tyme");
        assert_eq!(
            summary(&report),
            "Unrecognized unique words / unique Words (1/2): Percent 50.000000"
        );
    }

    #[test]
    fn summary_of_empty_text() {
        assert_eq!(
            summary(&report(&[], "")),
            "Unrecognized unique words / unique Words (0/0): Percent 0.000000"
        );
    }

    // -- console --

    #[test]
    fn console_output() {
        let report = report(&["once", "upon", "a"], "Once upon a tyme");
        assert_eq!(
            render_console("Once upon a tyme", &report),
            "Once upon a \x1b[42mtyme\x1b[0m\n\
             Unrecognized unique words / unique Words (1/4): Percent 25.000000"
        );
    }

    // -- html --

    #[test]
    fn html_output() {
        let text = "<b>Once</b> & tyme";
        let report = report(&["once", "b"], text);
        let html = render_html(text, &report);
        assert!(html.contains("<pre id=\"stat\">Unrecognized unique words"));
        assert!(html.contains(
            "<pre id=\"doc\">&lt;b&gt;Once&lt;/b&gt; &amp; <span class=\"unknownword\">tyme</span></pre>"
        ));
        assert!(html.contains(".unknownword"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn escape() {
        assert_eq!(escape_html(r#"a<b>"c"&'d'"#), "a&lt;b&gt;&quot;c&quot;&amp;&#39;d&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
