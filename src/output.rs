//! Deduplicated URL output.
//!
//! The query already asks for distinct URLs, but this printer is the
//! authoritative dedup layer: it tracks every URL it has written and
//! silently drops repeats, independent of whatever the SQL produced.
//! Results go to an arbitrary [`std::io::Write`] destination (stdout in the
//! binary); diagnostics never pass through here, keeping stdout pipeable.

use std::collections::HashSet;
use std::io::Write;

/// Streams URLs to a writer, one per line, each distinct URL at most once.
///
/// Lines are flushed as they are written; a URL that has been printed is
/// never retracted, even if iteration fails afterwards.
pub struct UrlPrinter<W: Write> {
    out: W,
    seen: HashSet<String>,
    printed: usize,
}

impl<W: Write> UrlPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seen: HashSet::new(),
            printed: 0,
        }
    }

    /// Print `url` followed by a newline if it has not been printed before.
    /// Returns `true` when a line was written.
    pub fn emit(&mut self, url: &str) -> std::io::Result<bool> {
        if self.seen.contains(url) {
            return Ok(false);
        }
        writeln!(self.out, "{url}")?;
        self.out.flush()?;
        self.seen.insert(url.to_string());
        self.printed += 1;
        Ok(true)
    }

    /// Number of distinct URLs printed so far.
    pub fn printed(&self) -> usize {
        self.printed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_all(urls: &[&str]) -> (Vec<u8>, usize) {
        let mut buf = Vec::new();
        let mut printer = UrlPrinter::new(&mut buf);
        for url in urls {
            printer.emit(url).unwrap();
        }
        let printed = printer.printed();
        (buf, printed)
    }

    #[test]
    fn prints_one_url_per_line() {
        let (buf, printed) = emit_all(&["https://a.example/", "https://b.example/"]);
        assert_eq!(buf, b"https://a.example/\nhttps://b.example/\n");
        assert_eq!(printed, 2);
    }

    #[test]
    fn duplicate_urls_are_printed_once() {
        let (buf, printed) = emit_all(&[
            "https://a.example/",
            "https://b.example/",
            "https://a.example/",
            "https://a.example/",
        ]);
        assert_eq!(buf, b"https://a.example/\nhttps://b.example/\n");
        assert_eq!(printed, 2);
    }

    #[test]
    fn order_of_first_occurrence_is_preserved() {
        let (buf, _) = emit_all(&["z", "a", "m", "a", "z"]);
        assert_eq!(buf, b"z\na\nm\n");
    }

    #[test]
    fn emit_reports_whether_a_line_was_written() {
        let mut buf = Vec::new();
        let mut printer = UrlPrinter::new(&mut buf);
        assert!(printer.emit("https://a.example/").unwrap());
        assert!(!printer.emit("https://a.example/").unwrap());
    }

    #[test]
    fn no_output_for_no_urls() {
        let (buf, printed) = emit_all(&[]);
        assert!(buf.is_empty());
        assert_eq!(printed, 0);
    }
}
