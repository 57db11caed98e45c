//! Reset CSS generator.
//!
//! Classifies the tags found in an HTML document against a fixed rule table
//! and assembles a reset stylesheet that neutralizes browser-default styling
//! for exactly those tags.
//!
//! ```text
//! TagSet → ResetCssBuilder::build() → CSS string
//! ```
//!
//! # Example
//!
//! ```
//! use resetcss_scan::TagSet;
//!
//! let css = resetcss_gen::generate(&TagSet::new());
//! assert_eq!(css, resetcss_gen::HEADER);
//! ```

pub mod builder;
pub mod rules;

pub use builder::{ResetCssBuilder, HEADER};
pub use rules::{Category, Rule, RuleTable, RuleTableError, Selector};

use resetcss_scan::TagSet;

/// Generate a reset stylesheet for a tag set using the standard rule table.
pub fn generate(tags: &TagSet) -> String {
    let table = RuleTable::standard();
    ResetCssBuilder::new(&table).build(tags)
}
