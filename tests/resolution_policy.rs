//! Target resolution policy: locale preference, id-first lookup, sentinel
//! fallback, and the card/export asymmetry.

mod common;

use avoimuus_lib::locale::LocalizedInfo;
use avoimuus_lib::resolver::{
    resolve_target, resolved_names, ResolvedVia, TargetLookup, UNKNOWN_TARGET_NAME,
};
use common::*;

#[test]
fn locale_selection_prefers_fi_then_sv_then_en() {
    let all = LocalizedInfo {
        fi: Some(target_info("Suomi", "Org", None)),
        sv: Some(target_info("Svenska", "Org", None)),
        en: Some(target_info("English", "Org", None)),
    };
    assert_eq!(all.select().map(|i| i.name.as_str()), Some("Suomi"));

    let sv_en = LocalizedInfo {
        fi: None,
        sv: Some(target_info("Svenska", "Org", None)),
        en: Some(target_info("English", "Org", None)),
    };
    assert_eq!(sv_en.select().map(|i| i.name.as_str()), Some("Svenska"));

    let en_only = LocalizedInfo {
        fi: None,
        sv: None,
        en: Some(target_info("English", "Org", None)),
    };
    assert_eq!(en_only.select().map(|i| i.name.as_str()), Some("English"));

    assert!(LocalizedInfo::default().select().is_none());
}

#[test]
fn lookup_skips_items_with_no_populated_locale() {
    let items = vec![
        registry_item(1, fi_only(target_info("Resolved", "Org", None))),
        registry_item(2, LocalizedInfo::default()),
    ];
    let lookup = TargetLookup::build(&items);
    assert_eq!(lookup.len(), 1);
    assert!(lookup.get(1).is_some());
    assert!(lookup.get(2).is_none());
}

#[test]
fn registry_entry_wins_over_contradictory_embedded_snapshot() {
    let lookup = TargetLookup::build(&[registry_item(
        7,
        fi_only(target_info("Registry Name", "Current Org", Some("Director"))),
    )]);

    let mut reference = target_by_id(7);
    reference.contacted_target = target_embedded(fi_only(target_info(
        "Stale Snapshot Name",
        "Old Org",
        None,
    )))
    .contacted_target;

    let resolved = resolve_target(&reference, &lookup);
    assert_eq!(resolved.via, ResolvedVia::Registry);
    assert_eq!(resolved.name, "Registry Name");
    assert_eq!(resolved.title, "Director");
    assert_eq!(resolved.organization, "Current Org");
}

#[test]
fn dangling_id_falls_back_to_embedded_snapshot() {
    let lookup = TargetLookup::default();
    let mut reference = target_by_id(999);
    reference.contacted_target = target_embedded(fi_only(target_info(
        "Snapshot Name",
        "Snapshot Org",
        None,
    )))
    .contacted_target;

    let resolved = resolve_target(&reference, &lookup);
    assert_eq!(resolved.via, ResolvedVia::Embedded);
    assert_eq!(resolved.name, "Snapshot Name");
}

#[test]
fn no_id_and_no_snapshot_yields_unknown_sentinel() {
    let lookup = TargetLookup::default();
    let resolved = resolve_target(&target_by_id(42), &lookup);
    assert_eq!(resolved.name, UNKNOWN_TARGET_NAME);
    assert_eq!(resolved.title, "");
    assert_eq!(resolved.organization, "");
    assert!(resolved.is_unknown());
}

#[test]
fn embedded_snapshot_uses_locale_preference_not_just_fi() {
    let lookup = TargetLookup::default();
    let reference = target_embedded(LocalizedInfo {
        fi: None,
        sv: Some(target_info("Svensk Kontakt", "Org", None)),
        en: None,
    });
    let resolved = resolve_target(&reference, &lookup);
    assert_eq!(resolved.via, ResolvedVia::Embedded);
    assert_eq!(resolved.name, "Svensk Kontakt");
}

#[test]
fn card_names_dedupe_by_string_and_skip_unknowns() {
    // Two distinct registry ids resolve to the same display name.
    let lookup = TargetLookup::build(&[
        registry_item(1, fi_only(target_info("Matti Meikäläinen", "VM", None))),
        registry_item(2, fi_only(target_info("Matti Meikäläinen", "TEM", None))),
        registry_item(3, fi_only(target_info("Liisa Virtanen", "VNK", None))),
    ]);
    let record = activity(
        10,
        "Yritys Oy",
        vec![
            topic(Some("Aihe 1"), None, vec![target_by_id(1), target_by_id(2)]),
            topic(
                Some("Aihe 2"),
                None,
                vec![target_by_id(3), target_by_id(404)],
            ),
        ],
    );

    let names = resolved_names(&record, &lookup);
    assert_eq!(names, vec!["Matti Meikäläinen", "Liisa Virtanen"]);
}

#[test]
fn end_to_end_chip_label_for_registry_hit() {
    let lookup = TargetLookup::build(&[registry_item(
        7,
        fi_only(target_info("Matti Meikäläinen", "VM", None)),
    )]);
    let resolved = resolve_target(&target_by_id(7), &lookup);

    // Empty title segment is dropped by the join.
    assert_eq!(resolved.chip_label(), "Matti Meikäläinen, VM");
    assert_eq!(
        resolved.export_cell().as_deref(),
        Some("Matti Meikäläinen (VM)")
    );
}
