// src/csv.rs
use std::collections::HashMap;

/* ---------------- Line splitting ---------------- */

/// Split one line into fields on commas outside double quotes.
///
/// Each field is trimmed. A trimmed field wrapped in a pair of quotes loses
/// the wrapping and has `""` collapsed to `"`. Unbalanced quotes are not
/// rejected: quoted mode simply runs to the end of the line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut start = 0usize;
    let mut in_quotes = false;

    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(unquote(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(unquote(&line[start..]));
    fields
}

fn unquote(raw: &str) -> String {
    let field = raw.trim();
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field[1..field.len() - 1].replace("\"\"", "\"")
    } else {
        s!(field)
    }
}

/// Split a whole document, one entry per non-blank line (`\n` or `\r\n`).
pub fn split_lines(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
        .map(split_line)
        .collect()
}

/* ---------------- Tabular rows ---------------- */

/// Header whose values are read as integers.
pub const PROGRESS_HEADER: &str = "progress";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Int(i64),
}

/// One data row: (header, value) pairs in header order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, Cell)>,
}

impl Row {
    pub fn new(cells: Vec<(String, Cell)>) -> Self { Self { cells } }

    /// Last column with this header wins, like overwriting a map entry.
    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.cells.iter().rev().find(|(h, _)| h == header).map(|(_, c)| c)
    }

    /// Text value of `header`; missing columns read as "".
    pub fn text(&self, header: &str) -> String {
        match self.get(header) {
            Some(Cell::Text(s)) => s.clone(),
            Some(Cell::Int(n))  => n.to_string(),
            None => s!(),
        }
    }

    /// Integer value of `header`; missing or non-integer columns read as 0.
    pub fn int(&self, header: &str) -> i64 {
        match self.get(header) {
            Some(Cell::Int(n))  => *n,
            Some(Cell::Text(s)) => parse_leading_int(s),
            None => 0,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(h, _)| h.as_str())
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

/// Parse a headed CSV document.
///
/// - first non-blank line holds the headers (trimmed)
/// - rows with fewer fields than headers are dropped
/// - extra trailing fields are ignored
/// - the `progress` column becomes `Cell::Int`, 0 when unparseable
pub fn parse_table(text: &str) -> Vec<Row> {
    let mut lines = split_lines(text).into_iter();
    let Some(headers) = lines.next() else { return Vec::new() };
    let headers: Vec<String> = headers.iter().map(|h| s!(h.trim())).collect();

    let mut rows = Vec::new();
    for (n, fields) in lines.enumerate() {
        if fields.len() < headers.len() {
            logd!("dropping row {}: {} fields for {} headers", n + 2, fields.len(), headers.len());
            continue;
        }

        let cells = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let raw = fields.get(i).cloned().unwrap_or_default();
                let cell = if h == PROGRESS_HEADER {
                    Cell::Int(parse_leading_int(&raw))
                } else {
                    Cell::Text(raw)
                };
                (h.clone(), cell)
            })
            .collect();
        rows.push(Row::new(cells));
    }
    rows
}

/// Leading integer of a trimmed string: optional sign, then digits.
/// "45" → 45, "45%" → 45, "12.7" → 12, "" / "abc" → 0.
pub fn parse_leading_int(s: &str) -> i64 {
    let t = s.trim();
    let (neg, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 { return 0; }

    // Saturate rather than fail on absurdly long digit runs
    let n = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    if neg { -n } else { n }
}

/* ---------------- Key/value ---------------- */

pub type ContentMap = HashMap<String, String>;

/// Two-column reading: `field[0] → field[1]` for every line where both are
/// non-empty. No header row; later lines overwrite earlier ones.
pub fn parse_key_values(text: &str) -> ContentMap {
    let mut out = ContentMap::new();
    for fields in split_lines(text) {
        match (fields.first(), fields.get(1)) {
            (Some(k), Some(v)) if !k.is_empty() && !v.is_empty() => {
                out.insert(k.clone(), v.clone());
            }
            _ => {}
        }
    }
    out
}
