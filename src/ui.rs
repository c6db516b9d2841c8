use console::style;
use std::io::{self, Write};

/// Format and print an error message with a red prefix.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("error:").red().bold(), message);
}

/// Write the bumped version with no trailing newline.
pub fn write_version<W: Write>(out: &mut W, version: &str) -> io::Result<()> {
    out.write_all(version.as_bytes())?;
    out.flush()
}
