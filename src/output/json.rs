use crate::batch::RegionCenter;
use std::io::{self, Write};

/// Write centers as a pretty-printed JSON array
pub fn write_json<W: Write>(writer: &mut W, centers: &[RegionCenter]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, centers)?;
    writeln!(writer)
}
