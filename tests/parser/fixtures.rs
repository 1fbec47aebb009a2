//! Map tree fixtures built in temporary directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use waymark_foundation::Result;
use waymark_parser::{ParseConfig, ParseOutput, parse_tree};

/// A map tree under a temporary root.
pub struct Tree {
    dir: TempDir,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an area directory, with its parents.
    pub fn area(self, relative: &str) -> Self {
        fs::create_dir_all(self.root().join(relative)).expect("failed to create area");
        self
    }

    /// Writes `map.ht.md` into an area directory.
    pub fn map(self, area: &str, content: impl AsRef<[u8]>) -> Self {
        let dir = self.root().join(area);
        fs::create_dir_all(&dir).expect("failed to create area");
        fs::write(dir.join("map.ht.md"), content).expect("failed to write map");
        self
    }

    pub fn parse(&self) -> Result<ParseOutput> {
        self.parse_with(ParseConfig::new())
    }

    pub fn parse_with(&self, config: ParseConfig) -> Result<ParseOutput> {
        parse_tree(self.root(), config)
    }
}

pub const WORLD: &str = "# World\nThe whole world.\n";

pub const TOWN: &str = "# Town
The old town.

### Square - square
A quiet square.
* north - gate

### Gate - gate
The town gate.
* back - square
";

/// The two-area tree used throughout: `World - world/Town - town`.
pub fn town_tree() -> Tree {
    Tree::new()
        .map("World - world", WORLD)
        .map("World - world/Town - town", TOWN)
}
