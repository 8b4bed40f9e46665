//! Reading and writing delimited integer files.
//!
//! Input records are lines of comma-separated integers; output is one integer per line.
//! The sorting routines know nothing about this module.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("line {line}: {value:?} is not an integer")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses every comma-separated field of every non-blank line as an `i64`.
///
/// ```
/// use introsort::io::read_integers;
///
/// let input = "5,3\n3\n\n-1, 0\n";
/// assert_eq!(read_integers(input.as_bytes()).unwrap(), vec![5, 3, 3, -1, 0]);
/// ```
pub fn read_integers<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut numbers = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        for field in line.split(',') {
            let field = field.trim();
            let number = field.parse::<i64>().map_err(|source| Error::Parse {
                line: index + 1,
                value: field.to_string(),
                source,
            })?;
            numbers.push(number);
        }
    }
    Ok(numbers)
}

/// Writes `numbers` one per line.
pub fn write_integers<W: Write>(mut writer: W, numbers: &[i64]) -> Result<()> {
    for number in numbers {
        writeln!(writer, "{}", number)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let file = File::open(path)?;
    read_integers(BufReader::new(file))
}

pub fn write_file<P: AsRef<Path>>(path: P, numbers: &[i64]) -> Result<()> {
    let file = File::create(path)?;
    write_integers(BufWriter::new(file), numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_reports_line() {
        let err = read_integers("1\n2\nabc\n".as_bytes()).unwrap_err();
        match err {
            Error::Parse { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_rejects_empty_field() {
        assert!(matches!(
            read_integers("1,,2\n".as_bytes()),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_read_extremes() {
        let input = format!("{}\n{}\n", i64::MIN, i64::MAX);
        assert_eq!(
            read_integers(input.as_bytes()).unwrap(),
            vec![i64::MIN, i64::MAX]
        );
    }

    #[test]
    fn test_write_one_per_line() {
        let mut out = Vec::new();
        write_integers(&mut out, &[-1, 0, 3]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-1\n0\n3\n");
    }
}
