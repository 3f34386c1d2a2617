use std::fmt::Display;

/// Write a list of elements separated with commas, as used by diagnostic
/// dumps of matchers.
pub(crate) fn write_selector(
    f: &mut std::fmt::Formatter<'_>,
    seq: &[impl Display],
) -> std::fmt::Result {
    let Some(first) = seq.first() else {
        return Ok(());
    };

    write!(f, "{first}")?;

    for elem in &seq[1..] {
        write!(f, ", {elem}")?;
    }

    Ok(())
}
