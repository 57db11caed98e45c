//! The reset rule table.
//!
//! Six fixed classification rules, each pairing an ordered list of recognized
//! tag names with a CSS declaration block. The table is data: adding a reset
//! concern means adding a `Rule`, not a branch. Tag lists follow the Meyer
//! reset v2.0 template and are disjoint, so every tag maps to exactly one
//! category; `RuleTable::new` rejects a table that breaks this.

use std::collections::HashMap;
use std::fmt;

/// The six reset categories, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Baseline,
    DisplayLegacy,
    LineHeight,
    ListStyle,
    Quote,
    TableBorder,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Baseline,
        Category::DisplayLegacy,
        Category::LineHeight,
        Category::ListStyle,
        Category::Quote,
        Category::TableBorder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Baseline => "baseline",
            Category::DisplayLegacy => "display-legacy",
            Category::LineHeight => "line-height",
            Category::ListStyle => "list-style",
            Category::Quote => "quote",
            Category::TableBorder => "table-border",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a rule's selector is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Selector list built from the matched tags, in recognized-list order.
    MatchedTags,
    /// A fixed selector, used by the single-tag rules (`body`, `table`).
    Constant(&'static str),
}

/// One classification rule: which tags it recognizes and what CSS it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub category: Category,
    /// Recognized tags, in the order they appear in the output selector list.
    pub tags: &'static [&'static str],
    pub selector: Selector,
    /// Declarations of the main block, one per line in the output.
    pub declarations: &'static [&'static str],
    /// Declarations of the extra `:before`/`:after` block emitted per matched
    /// tag. Only the quote rule carries one.
    pub pseudo: Option<&'static [&'static str]>,
}

/// Broad reset for ordinary elements. The Meyer v2.0 element list, minus the
/// tags claimed by the other five categories.
pub const BASELINE_TAGS: &[&str] = &[
    "html", "div", "span", "applet", "object", "iframe", "h1", "h2", "h3", "h4",
    "h5", "h6", "p", "pre", "a", "abbr", "acronym", "address", "big", "cite",
    "code", "del", "dfn", "em", "img", "ins", "kbd", "s", "samp", "small",
    "strike", "strong", "sub", "sup", "tt", "var", "b", "u", "i", "center",
    "dl", "dt", "dd", "li", "fieldset", "form", "label", "legend", "caption",
    "tbody", "tfoot", "thead", "tr", "th", "td", "canvas", "embed", "output",
    "ruby", "summary", "time", "mark", "audio", "video",
];

/// HTML5 semantic elements that older browsers render inline by default.
pub const DISPLAY_LEGACY_TAGS: &[&str] = &[
    "article", "aside", "details", "figcaption", "figure", "footer", "header",
    "hgroup", "menu", "nav", "section",
];

pub const LINE_HEIGHT_TAGS: &[&str] = &["body"];
pub const LIST_STYLE_TAGS: &[&str] = &["ol", "ul"];
pub const QUOTE_TAGS: &[&str] = &["blockquote", "q"];
pub const TABLE_BORDER_TAGS: &[&str] = &["table"];

const BASELINE_CSS: &[&str] = &[
    "margin: 0;",
    "padding: 0;",
    "border: 0;",
    "font-size: 100%;",
    "font: inherit;",
    "vertical-align: baseline;",
];
const DISPLAY_LEGACY_CSS: &[&str] = &["display: block;"];
const LINE_HEIGHT_CSS: &[&str] = &["line-height: 1;"];
const LIST_STYLE_CSS: &[&str] = &["list-style: none;"];
const QUOTE_CSS: &[&str] = &["quotes: none;"];
const QUOTE_PSEUDO_CSS: &[&str] = &["content: \"\";", "content: none;"];
const TABLE_BORDER_CSS: &[&str] = &["border-collapse: collapse;", "border-spacing: 0;"];

/// A tag name appears under two categories.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Rule table error: tag `{tag}` is listed under both {first} and {second}")]
pub struct RuleTableError {
    pub tag: String,
    pub first: Category,
    pub second: Category,
}

/// The immutable classification table the builder runs against.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    index: HashMap<&'static str, Category>,
}

impl RuleTable {
    /// Build a table, verifying that no tag is recognized by two rules.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleTableError> {
        let mut index = HashMap::new();
        for rule in &rules {
            for &tag in rule.tags {
                if let Some(&first) = index.get(tag) {
                    return Err(RuleTableError {
                        tag: tag.to_string(),
                        first,
                        second: rule.category,
                    });
                }
                index.insert(tag, rule.category);
            }
        }
        Ok(Self { rules, index })
    }

    /// The standard six-rule Meyer reset table.
    pub fn standard() -> Self {
        let rules = vec![
            Rule {
                category: Category::Baseline,
                tags: BASELINE_TAGS,
                selector: Selector::MatchedTags,
                declarations: BASELINE_CSS,
                pseudo: None,
            },
            Rule {
                category: Category::DisplayLegacy,
                tags: DISPLAY_LEGACY_TAGS,
                selector: Selector::MatchedTags,
                declarations: DISPLAY_LEGACY_CSS,
                pseudo: None,
            },
            Rule {
                category: Category::LineHeight,
                tags: LINE_HEIGHT_TAGS,
                selector: Selector::Constant("body"),
                declarations: LINE_HEIGHT_CSS,
                pseudo: None,
            },
            Rule {
                category: Category::ListStyle,
                tags: LIST_STYLE_TAGS,
                selector: Selector::MatchedTags,
                declarations: LIST_STYLE_CSS,
                pseudo: None,
            },
            Rule {
                category: Category::Quote,
                tags: QUOTE_TAGS,
                selector: Selector::MatchedTags,
                declarations: QUOTE_CSS,
                pseudo: Some(QUOTE_PSEUDO_CSS),
            },
            Rule {
                category: Category::TableBorder,
                tags: TABLE_BORDER_TAGS,
                selector: Selector::Constant("table"),
                declarations: TABLE_BORDER_CSS,
                pseudo: None,
            },
        ];
        Self::new(rules).expect("standard tag lists are disjoint")
    }

    /// Rules in emission order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The category a tag belongs to, if any rule recognizes it.
    pub fn category_of(&self, tag: &str) -> Option<Category> {
        self.index.get(tag).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_disjoint() {
        // Constructing the standard table runs the duplicate check.
        let table = RuleTable::standard();
        assert_eq!(table.rules().len(), 6);
    }

    #[test]
    fn test_standard_emission_order() {
        let table = RuleTable::standard();
        let order: Vec<Category> = table.rules().iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL);
    }

    #[test]
    fn test_category_lookup() {
        let table = RuleTable::standard();
        assert_eq!(table.category_of("div"), Some(Category::Baseline));
        assert_eq!(table.category_of("nav"), Some(Category::DisplayLegacy));
        assert_eq!(table.category_of("body"), Some(Category::LineHeight));
        assert_eq!(table.category_of("ol"), Some(Category::ListStyle));
        assert_eq!(table.category_of("q"), Some(Category::Quote));
        assert_eq!(table.category_of("table"), Some(Category::TableBorder));
        assert_eq!(table.category_of("script"), None);
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let rules = vec![
            Rule {
                category: Category::Baseline,
                tags: &["div", "span"],
                selector: Selector::MatchedTags,
                declarations: BASELINE_CSS,
                pseudo: None,
            },
            Rule {
                category: Category::ListStyle,
                tags: &["span"],
                selector: Selector::MatchedTags,
                declarations: LIST_STYLE_CSS,
                pseudo: None,
            },
        ];
        let err = RuleTable::new(rules).unwrap_err();
        assert_eq!(err.tag, "span");
        assert_eq!(err.first, Category::Baseline);
        assert_eq!(err.second, Category::ListStyle);
    }

    #[test]
    fn test_baseline_excludes_claimed_tags() {
        // Tags owned by the other five categories must not be in baseline.
        for tag in ["body", "ol", "ul", "blockquote", "q", "table", "nav"] {
            assert!(!BASELINE_TAGS.contains(&tag), "{tag} leaked into baseline");
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Baseline.to_string(), "baseline");
        assert_eq!(Category::DisplayLegacy.to_string(), "display-legacy");
        assert_eq!(Category::TableBorder.to_string(), "table-border");
    }
}
