//! Prints verdicts in the judge's format.

use std::io::{self, Write};

/// Writes the verdicts for one instance, followed by a blank line:
///
/// ```text
/// Instancia 1
/// ab e uma palavra valida
/// ba nao e uma palavra valida
/// ```
///
/// Instances are numbered from one. Words without a verdict are skipped.
pub fn write_report<W, S>(
    out: &mut W,
    instance: usize,
    words: &[S],
    verdicts: &[bool],
) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    writeln!(out, "Instancia {}", instance)?;
    for (word, &verdict) in words.iter().zip(verdicts) {
        let negation = if verdict { "" } else { " nao" };
        writeln!(out, "{}{} e uma palavra valida", word.as_ref(), negation)?;
    }
    writeln!(out)
}
