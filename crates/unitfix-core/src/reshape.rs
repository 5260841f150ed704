//! The single-pass merge that turns 4-line record groups into single rows

use crate::error::{Error, Result};
use crate::rows::{classify, first_field, RowKind};
use serde::{Deserialize, Serialize};

/// Configuration for a reshape pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReshapeOptions {
    /// Field separator used for classification, extraction and re-joining
    pub separator: char,
    /// Number of property continuation lines following each unit row
    pub property_rows: usize,
}

impl Default for ReshapeOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            property_rows: 3,
        }
    }
}

/// Counters describing what a reshape pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReshapeStats {
    /// Combined records produced from unit rows
    pub units: usize,
    /// Marker lines passed through verbatim
    pub markers: usize,
    /// Blank, placeholder and filler lines dropped
    pub dropped: usize,
    /// Unit rows near end-of-input that lacked some property lines
    pub short_groups: usize,
}

/// Output of a reshape pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReshapeResult {
    /// Finalized output lines, header first
    pub lines: Vec<String>,
    /// What happened along the way
    pub stats: ReshapeStats,
}

/// Merge each unit row with its property continuation lines.
///
/// Input line 1 becomes the output header; line 0 is the export preamble and
/// is discarded. From line 2 on, each line is classified: blanks and filler
/// are dropped, markers pass through trimmed, and a unit row consumes up to
/// `property_rows` following lines, appending the first field of each to the
/// unit row (trailing separators stripped first).
///
/// A unit row close to end-of-input still yields a combined record; missing
/// property values become empty fields and the consumed lines are never
/// revisited.
pub fn reshape<S: AsRef<str>>(lines: &[S], opts: &ReshapeOptions) -> Result<ReshapeResult> {
    let header = lines.get(1).ok_or(Error::MissingHeader)?;
    let mut out = vec![header.as_ref().trim().to_string()];
    let mut stats = ReshapeStats::default();

    let mut i = 2;
    while i < lines.len() {
        let line = lines[i].as_ref().trim();
        match classify(line, opts.separator) {
            RowKind::Blank | RowKind::Filler => {
                stats.dropped += 1;
                i += 1;
            }
            RowKind::Unit => {
                let available = lines.len() - i - 1;
                if available < opts.property_rows {
                    stats.short_groups += 1;
                }

                let mut combined = line.trim_end_matches(opts.separator).to_string();
                for k in 1..=opts.property_rows {
                    combined.push(opts.separator);
                    if let Some(prop) = lines.get(i + k) {
                        combined.push_str(first_field(prop.as_ref(), opts.separator));
                    }
                }
                out.push(combined);
                stats.units += 1;

                // Consume the unit row plus every property line that exists
                i += 1 + opts.property_rows.min(available);
            }
            RowKind::Marker => {
                out.push(line.to_string());
                stats.markers += 1;
                i += 1;
            }
        }
    }

    Ok(ReshapeResult { lines: out, stats })
}
