//! Reset stylesheet assembly.
//!
//! Classifies a document's tag set against the rule table and renders the
//! reset stylesheet text. The transform is pure: same table, same tag set,
//! byte-identical output.

use crate::rules::{Rule, RuleTable, Selector};
use resetcss_scan::TagSet;

/// Fixed comment block at the top of every generated stylesheet. Static text
/// only, so output stays deterministic; the writer puts the timestamp in the
/// filename instead.
pub const HEADER: &str = "/*\n * reset.css\n * Generated by resetcss from the tags present in a source document.\n *\n * Template: http://meyerweb.com/eric/tools/css/reset/\n * v2.0 | 20110126\n * License: none (public domain)\n */\n";

/// Builds a reset stylesheet from a tag set.
///
/// Holds a reference to the rule table it classifies against; pass
/// [`RuleTable::standard`] for the Meyer reset behavior.
pub struct ResetCssBuilder<'a> {
    table: &'a RuleTable,
}

impl<'a> ResetCssBuilder<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Render the reset stylesheet for the given tag set.
    ///
    /// Each rule is checked independently. A rule with no matched tags emits
    /// nothing; an empty or all-unrecognized tag set yields the header alone.
    /// Matched-tag order always follows the rule's own recognized-tag list,
    /// never the input set's iteration order.
    pub fn build(&self, tags: &TagSet) -> String {
        let mut blocks = Vec::new();

        for rule in self.table.rules() {
            let matched: Vec<&str> = rule
                .tags
                .iter()
                .copied()
                .filter(|tag| tags.contains(tag))
                .collect();
            if matched.is_empty() {
                continue;
            }
            blocks.push(render_rule(rule, &matched));
        }

        let mut out = String::from(HEADER);
        if !blocks.is_empty() {
            out.push('\n');
            out.push_str(&blocks.join("\n\n"));
            out.push('\n');
        }
        out
    }
}

fn render_rule(rule: &Rule, matched: &[&str]) -> String {
    let selector = match rule.selector {
        Selector::Constant(fixed) => fixed.to_string(),
        Selector::MatchedTags => matched.join(",\n"),
    };

    let mut block = render_block(&selector, rule.declarations);

    // Pseudo-element companion block: one :before/:after pair per matched
    // tag, however many matched.
    if let Some(pseudo) = rule.pseudo {
        let pseudo_selector = matched
            .iter()
            .map(|tag| format!("{tag}:before,\n{tag}:after"))
            .collect::<Vec<_>>()
            .join(",\n");
        block.push_str("\n\n");
        block.push_str(&render_block(&pseudo_selector, pseudo));
    }

    block
}

fn render_block(selector: &str, declarations: &[&str]) -> String {
    let mut out = String::new();
    out.push_str(selector);
    out.push_str(" {\n");
    for declaration in declarations {
        out.push_str("    ");
        out.push_str(declaration);
        out.push('\n');
    }
    out.push('}');
    out
}
