//! Configuration for a parse run.

/// Map file name looked up inside every area directory.
pub const DEFAULT_MAP_FILE: &str = "map.ht.md";

/// What to do when two labels derive the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Say nothing.
    Ignore,
    /// Record a warning and keep going.
    #[default]
    Warn,
    /// Abort the run.
    Fail,
}

/// Configuration for the directory walker and map parser.
#[derive(Clone, Debug)]
pub struct ParseConfig {
    /// File name of the map inside each area directory.
    pub map_file: String,

    /// Directories whose name starts with this are skipped with their subtree.
    pub hidden_prefix: String,

    /// Visit directory entries in file-name order instead of file system order.
    pub sort_entries: bool,

    /// Follow symbolic links to directories.
    pub follow_links: bool,

    /// Handling of id collisions between areas or between locations.
    pub collisions: CollisionPolicy,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            map_file: DEFAULT_MAP_FILE.to_owned(),
            hidden_prefix: ".".to_owned(),
            sort_entries: true,
            follow_links: true,
            collisions: CollisionPolicy::Warn,
        }
    }
}

impl ParseConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the map file name.
    #[must_use]
    pub fn with_map_file(mut self, name: impl Into<String>) -> Self {
        self.map_file = name.into();
        self
    }

    /// Builder method to set the hidden directory prefix.
    #[must_use]
    pub fn with_hidden_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.hidden_prefix = prefix.into();
        self
    }

    /// Builder method to enable/disable sorted traversal.
    #[must_use]
    pub fn with_sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Builder method to enable/disable following symbolic links.
    #[must_use]
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Builder method to set the collision policy.
    #[must_use]
    pub fn with_collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }

    /// Whether a directory name is hidden.
    #[must_use]
    pub fn is_hidden(&self, name: &str) -> bool {
        !self.hidden_prefix.is_empty() && name.starts_with(&self.hidden_prefix)
    }
}
