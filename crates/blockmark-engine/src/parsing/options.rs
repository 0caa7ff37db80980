use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Default bound on block and inline recursion.
pub const DEFAULT_MAX_NESTING: usize = 16;

bitflags! {
    /// Optional grammar toggles. Serialized in the bitflags text form,
    /// e.g. `"TABLES | AUTOLINK"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Extensions: u32 {
        /// Ignore emphasis markers inside words.
        const NO_INTRA_EMPHASIS = 1 << 0;
        /// Pipe tables.
        const TABLES = 1 << 1;
        /// Bare URLs become links.
        const AUTOLINK = 1 << 2;
        /// `~~text~~`.
        const STRIKETHROUGH = 1 << 3;
        /// Every newline inside a paragraph is a hard break.
        const HARD_LINE_BREAK = 1 << 4;
        /// Lists and quotes may interrupt a paragraph without a blank line.
        const NO_EMPTY_LINE_BEFORE_BLOCK = 1 << 5;
        /// A trailing backslash is a hard break.
        const BACKSLASH_LINE_BREAK = 1 << 6;
        /// `Term` / `: definition` lists.
        const DEFINITION_LISTS = 1 << 7;

        const STANDARD = Self::NO_INTRA_EMPHASIS.bits()
            | Self::TABLES.bits()
            | Self::STRIKETHROUGH.bits()
            | Self::AUTOLINK.bits()
            | Self::NO_EMPTY_LINE_BEFORE_BLOCK.bits()
            | Self::BACKSLASH_LINE_BREAK.bits();
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions::STANDARD
    }
}

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub extensions: Extensions,
    pub max_nesting: usize,
}

impl Options {
    /// No extensions, default nesting bound.
    pub fn none() -> Self {
        Self {
            extensions: Extensions::empty(),
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            extensions: Extensions::STANDARD,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}
