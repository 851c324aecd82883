//! Front-end configuration for minipas
//!
//! Everything that changes how a run *renders* (not what it accepts): the language of diagnostics
//! and tree labels, and the indentation of the tree dump.

use minipas_core::lang::messages::Locale;
use minipas_syntax::ast::DumpOptions;

/// Front-end configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Language of diagnostics, tree labels and the verdict line
    pub locale: Locale,
    /// Number of spaces per depth level in the tree dump
    pub indent_width: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            indent_width: DumpOptions::default().indent_width,
        }
    }
}

impl FrontendConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Dump options derived from this config.
    pub fn dump_options(&self) -> DumpOptions {
        DumpOptions {
            indent_width: self.indent_width,
        }
    }
}
