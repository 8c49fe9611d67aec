//! Plain-text initial configuration and the observation channel
//!
//! Source format: whitespace-separated tokens. The first token is the atom
//! count `n`, followed by exactly `n` records of six fields each:
//!
//! ```text
//! color radius x y vx vy
//! ```
//!
//! `color` is an integer (0xRRGGBB), the rest are reals. Records are checked
//! for shape only; overlap and containment are not re-validated. Anything
//! after the n-th record is ignored.

use std::io::{self, Read, Write};
use std::str::{FromStr, SplitWhitespace};

use crate::error::{Error, Result};
use crate::simulation::states::{Atom, NVec2, Rgb};

/// Read and parse a whole configuration source.
pub fn read_atoms<R: Read>(mut reader: R) -> Result<Vec<Atom>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_atoms(&text)
}

/// Parse a configuration source held in memory.
pub fn parse_atoms(text: &str) -> Result<Vec<Atom>> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(Error::MissingCount)?;
    let n = match count_token.parse::<i64>() {
        Ok(n) if n > 0 => n as usize,
        _ => return Err(Error::InvalidCount(count_token.to_string())),
    };

    let mut records = Records { tokens };
    (0..n).map(|index| records.next_atom(index)).collect()
}

struct Records<'a> {
    tokens: SplitWhitespace<'a>,
}

impl Records<'_> {
    fn next_atom(&mut self, index: usize) -> Result<Atom> {
        let color: u32 = self.field(index, "color")?;
        let radius: f64 = self.field(index, "radius")?;
        let x: f64 = self.field(index, "x")?;
        let y: f64 = self.field(index, "y")?;
        let vx: f64 = self.field(index, "vx")?;
        let vy: f64 = self.field(index, "vy")?;

        Ok(Atom::new(Rgb(color), radius, NVec2::new(x, y), NVec2::new(vx, vy)))
    }

    fn field<T: FromStr>(&mut self, index: usize, field: &'static str) -> Result<T> {
        let token = self
            .tokens
            .next()
            .ok_or(Error::ShortRecord { index, field })?;
        token.parse().map_err(|_| Error::BadField {
            index,
            field,
            token: token.to_string(),
        })
    }
}

/// Write the atom count, then one `color radius x y vx vy` line per atom.
pub fn write_atoms<W: Write>(mut out: W, atoms: &[Atom]) -> io::Result<()> {
    writeln!(out, "{}", atoms.len())?;
    for a in atoms {
        writeln!(
            out,
            "{} {} {} {} {} {}",
            a.color.0, a.radius, a.x.x, a.x.y, a.v.x, a.v.y
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_records_across_line_breaks() -> Result<()> {
        let atoms = parse_atoms("2\n16711680 10 50 60 1.5 -2\n65280\n12 200 100 0 3\n")?;
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0].color, Rgb(0xFF0000));
        assert_eq!(atoms[0].v, NVec2::new(1.5, -2.0));
        assert_eq!(atoms[1].radius, 12.0);
        assert_eq!(atoms[1].x, NVec2::new(200.0, 100.0));
        Ok(())
    }

    #[test]
    fn trailing_tokens_are_ignored() -> Result<()> {
        let atoms = parse_atoms("1 255 20 100 100 1 0 extra tokens 7")?;
        assert_eq!(atoms.len(), 1);
        Ok(())
    }

    #[test]
    fn empty_source_is_missing_count() {
        assert!(matches!(parse_atoms("  \n"), Err(Error::MissingCount)));
    }

    #[test]
    fn zero_negative_and_garbage_counts_are_rejected() {
        for src in ["0", "-3 1 2 3 4 5 6", "ten"] {
            assert!(
                matches!(parse_atoms(src), Err(Error::InvalidCount(_))),
                "accepted count in {src:?}"
            );
        }
    }

    #[test]
    fn short_source_reports_missing_field() {
        let err = parse_atoms("2\n255 20 100 100 1 0\n255 20 100").unwrap_err();
        match err {
            Error::ShortRecord { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "y");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mistyped_color_is_bad_field() {
        let err = parse_atoms("1\n1.5 20 100 100 1 0").unwrap_err();
        assert!(matches!(err, Error::BadField { index: 0, field: "color", .. }));
    }

    #[test]
    fn observation_lines_match_source_fields() -> io::Result<()> {
        let atoms = vec![Atom::new(
            Rgb(255),
            20.0,
            NVec2::new(100.0, 100.0),
            NVec2::new(1.0, 0.0),
        )];
        let mut out = Vec::new();
        write_atoms(&mut out, &atoms)?;
        assert_eq!(String::from_utf8_lossy(&out), "1\n255 20 100 100 1 0\n");
        Ok(())
    }
}
