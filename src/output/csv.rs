use crate::batch::RegionCenter;
use std::io::{self, Write};

/// Row layout for CSV output
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Emit an `id,x,y` header row
    pub header: bool,
    /// Fixed number of decimals; `None` writes the shortest exact form
    pub precision: Option<usize>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            header: true,
            precision: None,
        }
    }
}

/// Write one `id,x,y` row per center
pub fn write_csv<W: Write>(
    writer: &mut W,
    centers: &[RegionCenter],
    options: &CsvOptions,
) -> io::Result<()> {
    if options.header {
        writeln!(writer, "id,x,y")?;
    }

    for center in centers {
        let id = quote_field(&center.id);
        let (x, y) = (center.centroid.x, center.centroid.y);
        match options.precision {
            Some(p) => writeln!(writer, "{},{:.*},{:.*}", id, p, x, p, y)?,
            None => writeln!(writer, "{},{},{}", id, x, y)?,
        }
    }

    Ok(())
}

/// Quote a field only when it contains a delimiter, quote or line break
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
