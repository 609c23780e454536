//! The two-space delimited dump format shared by both containers.
//!
//! `element[0]`, then for every later element the separator followed by the
//! element. No trailing separator, and nothing at all for an empty slice.

use std::fmt::{self, Display};
use std::io;

/// Separator written between consecutive elements.
pub(crate) const SEPARATOR: &str = "  ";

pub(crate) fn write_delimited<W, T>(out: &mut W, items: &[T]) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: Display,
{
    let mut items = items.iter();
    if let Some(first) = items.next() {
        write!(out, "{first}")?;
        for item in items {
            write!(out, "{SEPARATOR}{item}")?;
        }
    }
    Ok(())
}

pub(crate) fn write_delimited_io<W, T>(out: &mut W, items: &[T]) -> io::Result<()>
where
    W: io::Write + ?Sized,
    T: Display,
{
    let mut items = items.iter();
    if let Some(first) = items.next() {
        write!(out, "{first}")?;
        for item in items {
            write!(out, "{SEPARATOR}{item}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[], "")]
    #[case::single(&[42], "42")]
    #[case::several(&[3, 1, 2], "3  1  2")]
    #[case::negative(&[-1, 0, 1], "-1  0  1")]
    fn write_delimited_formats_elements(#[case] items: &[i32], #[case] expected: &str) {
        let mut out = String::new();
        write_delimited(&mut out, items).unwrap();
        assert_eq!(out, expected);
    }

    #[rstest]
    fn write_delimited_io_matches_fmt_output() {
        let items = [10, 20, 30];
        let mut text = String::new();
        write_delimited(&mut text, &items).unwrap();

        let mut bytes = Vec::new();
        write_delimited_io(&mut bytes, &items).unwrap();
        assert_eq!(bytes, text.into_bytes());
    }

    #[rstest]
    fn write_delimited_io_writes_nothing_when_empty() {
        let mut bytes = Vec::new();
        write_delimited_io::<_, i32>(&mut bytes, &[]).unwrap();
        assert!(bytes.is_empty());
    }
}
