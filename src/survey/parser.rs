use log::debug;

use crate::Station;

/// Best-effort parse of pasted survey text.
///
/// Each non-empty line is split on runs of whitespace, commas or semicolons.
/// A line becomes a [`Station`] only when it has at least three tokens and
/// every token is a finite number; the first three are read as MD, Inc, Azi.
/// Anything else is dropped. Order follows the input lines.
pub fn parse_survey(text: &str) -> Vec<Station> {
    let mut stations = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(station) => stations.push(station),
            None => debug!("dropping survey line {}: {:?}", line_no + 1, line),
        }
    }
    stations
}

fn parse_row(line: &str) -> Option<Station> {
    let values = line
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .map(parse_number)
        .collect::<Option<Vec<f64>>>()?;

    match values.as_slice() {
        [md, inc, azi, ..] => Some(Station::new(*md, *inc, *azi)),
        _ => None,
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Serializes stations as tab-separated `MD\tInc\tAzi` rows, one per line.
/// `parse_survey` reads this form back to the same stations.
pub fn format_survey(stations: &[Station]) -> String {
    stations
        .iter()
        .map(|s| format!("{}\t{}\t{}", s.md, s.inc, s.azi))
        .collect::<Vec<_>>()
        .join("\n")
}
