//! Interactive name entry.

use std::io::{self, BufRead, Write};

/// Prompt shown when no `--name` is given.
pub const NAME_PROMPT: &str = "Type name: ";

/// Print the prompt to `writer` and read one line from `reader`.
///
/// The returned line has its trailing newline removed but is otherwise raw.
pub fn prompt_name<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<String> {
    write!(writer, "{}", NAME_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
