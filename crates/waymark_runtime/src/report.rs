//! Summary of a parse run.

use std::fmt;

use waymark_parser::ParseOutput;

/// Counts printed after a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of areas found.
    pub areas: usize,
    /// Number of locations found.
    pub locations: usize,
    /// Number of warnings raised.
    pub warnings: usize,
}

impl Report {
    /// Builds the report of a parse.
    #[must_use]
    pub fn from_output(output: &ParseOutput) -> Self {
        Self {
            areas: output.world.areas().len(),
            locations: output.world.locations().len(),
            warnings: output.diagnostics.len(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "found areas: {}", self.areas)?;
        write!(f, "found locations: {}", self.locations)
    }
}
