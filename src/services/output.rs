use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

/// Prints every row, either as one JSON envelope or one text line per row.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        for d in data {
            writeln!(out, "{}", row(d))?;
        }
    }
    out.flush()?;
    Ok(())
}
