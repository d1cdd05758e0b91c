//! `.mld` line files, one per image.
//!
//! Each non-blank row is `px py qx qy`: a directed segment from `(px, py)` to `(qx, qy)` in
//! pixel coordinates. Row order defines the correspondence index between the two images'
//! files. Text after `#` is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{MorphError, MorphResult};
use crate::geom::line::LineSegment;

/// Parse line records from a reader.
pub fn parse_mld<R: BufRead>(r: R) -> MorphResult<Vec<LineSegment>> {
    let mut out = Vec::new();
    for (row, text) in r.lines().enumerate() {
        let text = text.context("read line file")?;
        let line_no = row + 1;
        let body = match text.split_once('#') {
            Some((before, _)) => before,
            None => text.as_str(),
        };
        let fields: Vec<&str> = body.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 4 {
            return Err(MorphError::parse(
                line_no,
                format!("expected 4 numbers 'px py qx qy', found {}", fields.len()),
            ));
        }
        let mut v = [0.0f64; 4];
        for (slot, field) in v.iter_mut().zip(&fields) {
            *slot = field
                .parse::<f64>()
                .map_err(|e| MorphError::parse(line_no, format!("invalid number '{field}': {e}")))?;
        }
        out.push(LineSegment::from_coords(v[0], v[1], v[2], v[3], out.len())?);
    }
    Ok(out)
}

/// Parse line records from a string.
pub fn parse_mld_str(s: &str) -> MorphResult<Vec<LineSegment>> {
    parse_mld(s.as_bytes())
}

/// Read and parse a `.mld` file from disk.
pub fn read_mld(path: impl AsRef<Path>) -> MorphResult<Vec<LineSegment>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open line file '{}'", path.display()))?;
    parse_mld(BufReader::new(f))
}

/// Write line records, one `px py qx qy` row per line.
pub fn write_mld<W: Write>(mut w: W, lines: &[LineSegment]) -> MorphResult<()> {
    for l in lines {
        let (p, q) = (l.p(), l.q());
        writeln!(w, "{} {} {} {}", p.x, p.y, q.x, q.y).context("write line record")?;
    }
    w.flush().context("flush line file")?;
    Ok(())
}

/// Write a `.mld` file to disk, creating parent directories as needed.
pub fn save_mld(path: impl AsRef<Path>, lines: &[LineSegment]) -> MorphResult<()> {
    let path = path.as_ref();
    crate::encode::ffmpeg::ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create line file '{}'", path.display()))?;
    write_mld(std::io::BufWriter::new(f), lines)
}

#[cfg(test)]
#[path = "../../tests/unit/lines/mld.rs"]
mod tests;
