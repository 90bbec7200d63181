/// A named region and its raw boundary path string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Region identifier (e.g. a county FIPS code)
    pub id: String,
    /// Boundary in path token grammar (`M x,y L x,y ... z`)
    pub boundary: String,
}

impl Region {
    pub fn new(id: impl Into<String>, boundary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            boundary: boundary.into(),
        }
    }
}
