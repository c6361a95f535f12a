//! Text-record parsing for range swarms.
//!
//! One record per line, shaped `pos=<x,y,z>, r=R`. Coordinates and radius
//! are decimal `i64`; a negative radius parses fine here and is rejected by
//! range-set validation, so the two error layers stay distinct.

use glam::I64Vec3;

use crate::error::ParseError;
use crate::range::Range;

/// Parses newline-separated `pos=<x,y,z>, r=R` records.
///
/// Blank lines are skipped; surrounding whitespace (including a trailing
/// `\r`) is tolerated. Reported line numbers are one-based positions in the
/// source text, blank lines included.
pub fn parse_ranges(input: &str) -> Result<Vec<Range>, ParseError> {
  let mut ranges = Vec::new();
  for (index, raw) in input.lines().enumerate() {
    let line = raw.trim();
    if line.is_empty() {
      continue;
    }
    let range = parse_record(line).ok_or_else(|| ParseError::Line {
      line_no: index + 1,
      record: line.to_string(),
    })?;
    ranges.push(range);
  }
  Ok(ranges)
}

/// One record, or `None` when the shape does not match.
fn parse_record(line: &str) -> Option<Range> {
  let rest = line.strip_prefix("pos=<")?;
  let (coords, radius) = rest.split_once(">, r=")?;
  let mut axes = coords.splitn(3, ',');
  let x = axes.next()?.trim().parse().ok()?;
  let y = axes.next()?.trim().parse().ok()?;
  let z = axes.next()?.trim().parse().ok()?;
  let radius = radius.trim().parse().ok()?;
  Some(Range::new(I64Vec3::new(x, y, z), radius))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;
