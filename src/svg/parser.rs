use crate::domain::Region;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

fn default_id_attribute() -> String {
    "id".to_string()
}

/// Which `<path>` attributes identify a region
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Attribute holding the region identifier (defaults to `id`)
    pub id_attribute: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            id_attribute: default_id_attribute(),
        }
    }
}

impl ExtractOptions {
    pub fn with_id_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.id_attribute = attribute.into();
        self
    }
}

/// Extract one region per `<path>` element of an SVG document
///
/// # Algorithm
/// 1. Parse the document as XML
/// 2. Visit every element named `path` in document order (any namespace)
/// 3. Pair the identifier attribute with the `d` attribute
///
/// Paths lacking either attribute are skipped. Boundary strings are passed
/// through untouched; tokenizing happens later, per region.
pub fn extract_regions(svg: &str, options: &ExtractOptions) -> Result<Vec<Region>> {
    let doc = roxmltree::Document::parse(svg).context("Failed to parse SVG document")?;

    let mut regions = Vec::new();
    let mut skipped = 0usize;

    for node in doc.descendants().filter(|n| n.has_tag_name("path")) {
        let boundary = match node.attribute("d") {
            Some(d) => d,
            None => {
                skipped += 1;
                debug!(pos = node.range().start, "skipping <path> without d attribute");
                continue;
            }
        };

        let id = match node.attribute(options.id_attribute.as_str()) {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                skipped += 1;
                warn!(
                    attribute = %options.id_attribute,
                    pos = node.range().start,
                    "skipping <path> without identifier"
                );
                continue;
            }
        };

        regions.push(Region::new(id, boundary));
    }

    debug!(regions = regions.len(), skipped, "extracted SVG regions");
    Ok(regions)
}

/// Read an SVG file and extract its regions
pub fn read_regions(path: &Path, options: &ExtractOptions) -> Result<Vec<Region>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read SVG file: {}", path.display()))?;
    extract_regions(&contents, options)
        .with_context(|| format!("Failed to extract regions from {}", path.display()))
}
