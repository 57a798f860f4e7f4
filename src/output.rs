use std::io::{self, Write};

/// Write one version per line, prefixed as the mode requires
pub fn write_version<W: Write>(out: &mut W, prefix: &str, version: &str) -> io::Result<()> {
    writeln!(out, "{prefix}{version}")
}
