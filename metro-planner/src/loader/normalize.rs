//! Raw line listings to canonical records.
//!
//! The raw format groups segments under line headings:
//!
//! ```text
//! 2号线 (天河机场 - 佛祖岭)
//! 汉口火车站---范湖 1.2
//! 范湖---王家墩东 0.9
//! ```
//!
//! Each data line becomes `"<line> <from> <to> <distance>km"` under the most
//! recent heading. Everything else is dropped.

use std::fs::{self, File};
use std::path::Path;

use tracing::info;

use super::{LoadError, for_each_utf8_line};

/// Suffix closing a line-name token in a heading.
const LINE_SUFFIX: &str = "号线";

/// Separator between the two stations of a data line.
const STATION_SEPARATOR: &str = "---";

/// Characters allowed before [`LINE_SUFFIX`] in a heading.
fn is_line_number_char(c: char) -> bool {
    c.is_ascii_digit() || "一二三四五六七八九十阳".contains(c)
}

/// Returns the line name if `line` is a heading.
fn parse_heading(line: &str) -> Option<&str> {
    let idx = line.find(LINE_SUFFIX)?;
    let number = &line[..idx];
    if number.is_empty() || !number.chars().all(is_line_number_char) {
        return None;
    }
    Some(&line[..idx + LINE_SUFFIX.len()])
}

/// Length of the leading `digits[.digits]` run of `s`, or 0.
fn number_prefix_len(s: &str) -> usize {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return 0;
    }
    let rest = &s[int_len..];
    match rest.strip_prefix('.') {
        Some(frac) => {
            let frac_len = frac.bytes().take_while(u8::is_ascii_digit).count();
            if frac_len == 0 {
                int_len
            } else {
                int_len + 1 + frac_len
            }
        }
        None => int_len,
    }
}

/// Returns `(from, to, distance)` if `line` is a data line.
///
/// The destination is the shortest run after the separator that is followed by
/// whitespace and a number.
fn parse_segment(line: &str) -> Option<(&str, &str, &str)> {
    let (from, rest) = line.split_once(STATION_SEPARATOR)?;
    let from = from.trim();
    if from.is_empty() {
        return None;
    }

    for (idx, c) in rest.char_indices() {
        if idx == 0 || !c.is_whitespace() {
            continue;
        }
        let tail = rest[idx..].trim_start();
        let len = number_prefix_len(tail);
        if len > 0 {
            let to = rest[..idx].trim();
            if to.is_empty() {
                return None;
            }
            return Some((from, to, &tail[..len]));
        }
    }
    None
}

/// Convert a raw listing to canonical record lines.
pub fn normalize(raw: &str) -> Vec<String> {
    let mut current_line: Option<&str> = None;
    let mut records = Vec::new();

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(name) = parse_heading(line) {
            current_line = Some(name);
        } else if let Some((from, to, distance)) = parse_segment(line) {
            if let Some(name) = current_line {
                records.push(format!("{name} {from} {to} {distance}km"));
            }
        }
    }

    records
}

/// Normalize `input` and write one record per line to `output`.
///
/// Returns the number of records written. Input lines that aren't valid
/// UTF-8 are skipped.
pub fn normalize_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize, LoadError> {
    let mut raw = String::new();
    for_each_utf8_line(File::open(input.as_ref())?, |_, line| {
        raw.push_str(line);
        raw.push('\n');
    })?;
    let records = normalize(&raw);

    let mut text = records.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    fs::write(output.as_ref(), text)?;

    info!(
        records = records.len(),
        output = %output.as_ref().display(),
        "Normalized raw line listing"
    );
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_record;

    #[test]
    fn heading_detection() {
        assert_eq!(parse_heading("2号线 (天河机场 - 佛祖岭)"), Some("2号线"));
        assert_eq!(parse_heading("阳逻线"), None);
        assert_eq!(parse_heading("十一号线"), Some("十一号线"));
        assert_eq!(parse_heading("号线"), None);
        assert_eq!(parse_heading("Line 2"), None);
    }

    #[test]
    fn segment_detection() {
        assert_eq!(
            parse_segment("汉口火车站---范湖 1.2"),
            Some(("汉口火车站", "范湖", "1.2"))
        );
        assert_eq!(parse_segment("A---B   3 km"), Some(("A", "B", "3")));
        assert_eq!(parse_segment("A---B 4."), Some(("A", "B", "4")));
        assert_eq!(parse_segment("A---B"), None);
        assert_eq!(parse_segment("---B 1"), None);
        assert_eq!(parse_segment("A B 1"), None);
    }

    #[test]
    fn normalize_listing() {
        let raw = "\
orphan---segment 1.0
2号线 (天河机场 - 佛祖岭)
汉口火车站---范湖 1.2
  范湖---王家墩东 0.9

some commentary
4号线
武昌火车站---阅马场 2
";
        let records = normalize(raw);
        assert_eq!(
            records,
            vec![
                "2号线 汉口火车站 范湖 1.2km",
                "2号线 范湖 王家墩东 0.9km",
                "4号线 武昌火车站 阅马场 2km",
            ]
        );

        // Output feeds straight into the record parser
        for line in &records {
            assert!(parse_record(line).is_ok(), "{line}");
        }
    }

    #[test]
    fn normalize_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.txt");
        let output = dir.path().join("formatted.txt");
        fs::write(&input, "1号线\nA---B 3\nB---C 5\n").unwrap();

        let count = normalize_file(&input, &output).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "1号线 A B 3km\n1号线 B C 5km\n"
        );
    }

    #[test]
    fn normalize_file_skips_undecodable_lines() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.txt");
        let output = dir.path().join("formatted.txt");
        fs::write(&input, b"1\xe5\x8f\xb7\xe7\xba\xbf\nA---B 3\n\xff---\xfe 1\nB---C 5\n").unwrap();

        let count = normalize_file(&input, &output).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "1号线 A B 3km\n1号线 B C 5km\n"
        );
    }
}
