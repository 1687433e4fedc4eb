use proptest::prelude::*;

use patchlyzer_cli::enums::change_kind::ChangeKind;
use patchlyzer_cli::enums::impact_level::ImpactLevel;
use patchlyzer_cli::errors::PatchlyzerError;
use patchlyzer_cli::services::markdown_formatter::MarkdownFormatter;
use patchlyzer_cli::services::patch_note_analyzer::PatchNoteAnalyzer;
use patchlyzer_cli::services::patch_note_transformer::PatchNoteTransformer;
use patchlyzer_cli::structs::change::Change;
use patchlyzer_cli::structs::config::config::Config;
use patchlyzer_cli::structs::parsed_note::ParsedNote;

const REALISTIC_DRAFT: &str = "\
Patch Notes v2.1

Thanks for all the feedback on the last update!

## New Champions
- Introduced Kaelis, the Void Singer
- Added two new skins for Riva

## Balance
- Damage increased from 10 to 15
- Cooldown increased from 8 to 10
- Mana cost 50 -> 45
- Shield strength 120 → 100

## Bug Fixes
- Fixed a crash when opening the shop
- Fixed minimap flicker

General
- Updated splash art
";

fn transformer() -> PatchNoteTransformer {
    PatchNoteTransformer::new(&Config::default())
}

#[test]
fn transforms_a_realistic_draft_to_the_canonical_report() {
    let markdown = transformer().transform(REALISTIC_DRAFT).unwrap();

    let expected = "\
# Patch Notes v2.1

> Patch type: **MEDIUM** (score: 21, 9 changes)

## Summary

- Total changes: 9
- Buffs: 2
- Debuffs: 2
- Reworks: 0
- Fixes: 2
- Other: 3

## New Content

- **[OTHER]** Introduced Kaelis, the Void Singer
- **[OTHER]** Added two new skins for Riva

## Balance

- **[BUFF]** Damage increased from 10 to 15
- **[DEBUFF]** Cooldown increased from 8 to 10
- **[BUFF]** Mana cost 50 -> 45
- **[DEBUFF]** Shield strength 120 → 100

## Bug Fixes

- **[FIX]** Fixed a crash when opening the shop
- **[FIX]** Fixed minimap flicker

## Other

- **[OTHER]** Updated splash art
";
    assert_eq!(markdown, expected);
}

#[test]
fn transform_output_is_byte_stable() {
    let t = transformer();
    assert_eq!(
        t.transform(REALISTIC_DRAFT).unwrap(),
        t.transform(REALISTIC_DRAFT).unwrap()
    );
}

#[test]
fn rejects_text_that_is_not_a_patch_note() {
    let err = transformer()
        .transform("Dear team,\n\nThe cafeteria menu changes next week.\n")
        .unwrap_err();

    match &err {
        PatchlyzerError::NotPatchNote { score, threshold } => assert!(score < threshold),
        other => panic!("expected NotPatchNote, got {:?}", other),
    }
    assert!(err.user_message().starts_with("text does not look like a patch note"));
}

#[test]
fn category_headings_render_once_in_first_seen_order() {
    let markdown = transformer().transform(REALISTIC_DRAFT).unwrap();

    let headings: Vec<&str> = markdown
        .lines()
        .filter(|l| l.starts_with("## ") && *l != "## Summary")
        .collect();

    assert_eq!(
        headings,
        ["## New Content", "## Balance", "## Bug Fixes", "## Other"]
    );
}

#[test]
fn configured_invert_keywords_flow_into_classification() {
    let mut config = Config::default();
    config.guesser.extra_invert_keywords = vec!["recoil".to_string(), "spread".to_string()];

    let draft = "\
Patch Notes v0.9

## Balance
- Recoil 2 -> 4
- Spread 4 -> 2
";
    let (note, _) = PatchNoteTransformer::new(&config)
        .transform_to_parts(draft)
        .unwrap();

    assert_eq!(note.changes[0].kind, ChangeKind::Debuff);
    assert_eq!(note.changes[1].kind, ChangeKind::Buff);
}

#[test]
fn config_round_trips_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.detection.score_threshold = 6;
    config.limits.max_input_bytes = 32 * 1024;
    config.guesser.extra_invert_keywords = vec!["recoil".to_string()];

    std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();
    let loaded: Config = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(loaded.detection.score_threshold, 6);
    assert_eq!(loaded.limits.max_input_bytes, 32 * 1024);
    assert_eq!(loaded.guesser.extra_invert_keywords, vec!["recoil".to_string()]);
}

fn change_strategy() -> impl Strategy<Value = Change> {
    let kinds = prop::sample::select(vec![
        ChangeKind::Buff,
        ChangeKind::Debuff,
        ChangeKind::Rework,
        ChangeKind::Fix,
        ChangeKind::Other,
    ]);
    let categories =
        prop::sample::select(vec!["Balance", "Bug Fixes", "New Content", "Other"]);

    (kinds, categories, "[a-z ]{1,30}")
        .prop_map(|(kind, category, description)| Change::new(&description, category, kind))
}

proptest! {
    #[test]
    fn kind_counts_always_sum_to_total(
        changes in prop::collection::vec(change_strategy(), 0..60)
    ) {
        let analysis = PatchNoteAnalyzer.analyze(&changes);
        let kind_sum: usize = analysis.changes_by_kind.values().sum();
        let category_sum: usize = analysis.changes_by_category.iter().map(|(_, n)| n).sum();

        prop_assert_eq!(kind_sum, analysis.total_changes);
        prop_assert_eq!(category_sum, analysis.total_changes);
        prop_assert_eq!(analysis.total_changes, changes.len());
    }

    #[test]
    fn formatting_any_note_is_idempotent(
        changes in prop::collection::vec(change_strategy(), 0..40)
    ) {
        let note = ParsedNote { title: "Patch 1.0".to_string(), changes };
        let analysis = PatchNoteAnalyzer.analyze(&note.changes);

        let first = MarkdownFormatter.format(&note, &analysis);
        let second = MarkdownFormatter.format(&note, &analysis);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn impact_level_is_monotonic_in_score(a in 0u32..200, b in 0u32..200) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ImpactLevel::from_score(lo) <= ImpactLevel::from_score(hi));
    }
}
