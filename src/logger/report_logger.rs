use crate::enums::change_kind::ChangeKind;
use crate::structs::analysis::Analysis;
use crate::structs::detection_report::DetectionReport;

pub struct ReportLogger;

impl ReportLogger {
    pub fn print_detection(report: &DetectionReport) {
        println!("\n🔎 Detection Breakdown");
        println!("═══════════════════════════════════════");

        if report.signals.is_empty() {
            println!("   No signals fired");
        }
        for (signal, weight) in &report.signals {
            println!("   +{} {}", weight, signal);
        }

        println!("───────────────────────────────────────");
        println!("   Score: {} (threshold: {})", report.score, report.threshold);

        if report.is_patch_note() {
            println!("✅ Looks like a patch note");
        } else {
            println!("❌ Does not look like a patch note");
        }
    }

    pub fn print_analysis(analysis: &Analysis) {
        println!("\n📊 Patch Analysis Summary");
        println!("═══════════════════════════════════════");

        println!("📈 Overview:");
        println!("   Total Changes: {}", analysis.total_changes);
        println!(
            "   Impact: {} {} (score: {})",
            analysis.impact_level.emoji(),
            analysis.impact_level.name(),
            analysis.impact_score
        );

        println!("\n📝 By Kind:");
        for kind in ChangeKind::ALL {
            println!("   {}: {}", kind.summary_name(), analysis.kind_count(kind));
        }

        if !analysis.changes_by_category.is_empty() {
            println!("\n🗂️  By Category:");
            for (category, count) in &analysis.changes_by_category {
                println!("   {}: {}", category, count);
            }
        }
    }
}
