use crate::enums::change_kind::ChangeKind;
use crate::structs::analysis::Analysis;
use crate::structs::parsed_note::ParsedNote;

/// Renders a parsed note plus its analysis into the canonical markdown
/// report. Pure function of its inputs: the same note and analysis
/// always produce the identical string, byte for byte.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format(&self, note: &ParsedNote, analysis: &Analysis) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", note.title));
        out.push_str(&format!(
            "> Patch type: **{}** (score: {}, {} changes)\n\n",
            analysis.impact_level.name(),
            analysis.impact_score,
            analysis.total_changes
        ));

        out.push_str("## Summary\n\n");
        out.push_str(&format!("- Total changes: {}\n", analysis.total_changes));
        for kind in ChangeKind::ALL {
            out.push_str(&format!(
                "- {}: {}\n",
                kind.summary_name(),
                analysis.kind_count(kind)
            ));
        }

        for category in Self::category_order(note) {
            out.push_str(&format!("\n## {}\n\n", category));
            for change in note.changes.iter().filter(|c| c.category == category) {
                out.push_str(&format!(
                    "- **[{}]** {}\n",
                    change.kind.label(),
                    change.description
                ));
            }
        }

        out
    }

    /// Categories in order of first occurrence in the change list.
    fn category_order(note: &ParsedNote) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        for change in &note.changes {
            if !order.contains(&change.category.as_str()) {
                order.push(change.category.as_str());
            }
        }
        order
    }
}
