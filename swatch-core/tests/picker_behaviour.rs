use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use swatch_core::{
    EventRecorder, KeyValueStore, MemoryStore, NoopEvents, PickerOptions,
    SavedSwatchStore, SwatchError, SwatchEvent, SwatchPicker,
};
use swatch_core::store::JsonFileStore;
use swatch_model::{
    DEFAULT_MAX_LIGHTNESS, DEFAULT_MIN_LIGHTNESS, HueLinkPolicy,
    SAVED_SWATCHES_KEY, Swatch, SwatchMode,
};

fn picker_with(
    options: PickerOptions,
    store: SavedSwatchStore,
) -> (SwatchPicker, EventRecorder) {
    let recorder = EventRecorder::new();
    let picker =
        SwatchPicker::new(options, store, Box::new(recorder.clone()))
            .expect("valid picker options");
    (picker, recorder)
}

fn uncontrolled(swatch: Swatch) -> (SwatchPicker, EventRecorder) {
    picker_with(
        PickerOptions::default().with_default_swatch(swatch),
        SavedSwatchStore::unavailable(),
    )
}

#[test]
fn controlled_picker_clamps_but_keeps_external_baseline() {
    let (picker, recorder) = picker_with(
        PickerOptions::controlled(Swatch::solid("#3366CC")),
        SavedSwatchStore::unavailable(),
    );

    assert!(picker.is_controlled());
    assert_eq!(picker.mode(), SwatchMode::Solid);
    assert_eq!(picker.swatch(), &Swatch::solid("#3366CC"));
    assert_eq!(picker.internal_swatch().to_external(), Swatch::solid("#0055ff"));
    assert!(recorder.snapshot().is_empty());
}

#[test]
fn solid_to_gradient_rotates_hue_by_offset() {
    let (mut picker, recorder) = uncontrolled(Swatch::solid("#0055ff"));

    assert!(picker.set_mode(SwatchMode::Gradient));
    assert_eq!(
        picker.internal_swatch().to_external(),
        Swatch::gradient("#0055ff", "#ff0055")
    );
    assert_eq!(
        recorder.take(),
        vec![SwatchEvent::Changed(Swatch::gradient("#0055ff", "#ff0055"))]
    );

    // unchanged mode is a no-op
    assert!(!picker.set_mode(SwatchMode::Gradient));
    assert!(recorder.take().is_empty());
}

#[test]
fn gradient_to_solid_keeps_primary() {
    let (mut picker, _) = uncontrolled(Swatch::gradient("#ff0055", "#0055ff"));
    picker.set_mode(SwatchMode::Solid);
    assert_eq!(picker.swatch(), &Swatch::solid("#ff0055"));
}

#[test]
fn uncontrolled_changes_move_baseline_controlled_do_not() {
    let (mut free, _) = uncontrolled(Swatch::solid("#0055ff"));
    free.set_mode(SwatchMode::Gradient);
    assert_eq!(free.swatch().mode(), SwatchMode::Gradient);

    let (mut bound, recorder) = picker_with(
        PickerOptions::controlled(Swatch::solid("#0055ff")),
        SavedSwatchStore::unavailable(),
    );
    bound.set_mode(SwatchMode::Gradient);
    assert_eq!(bound.swatch(), &Swatch::solid("#0055ff"));
    assert_eq!(bound.mode(), SwatchMode::Gradient);
    assert_eq!(recorder.take().len(), 1);
}

#[test]
fn identical_external_value_is_skipped() {
    let (mut picker, recorder) = picker_with(
        PickerOptions::controlled(Swatch::solid("#0055ff")),
        SavedSwatchStore::unavailable(),
    );

    // same color in another spelling
    assert!(!picker.apply_external_change(&Swatch::solid("#0055FF")).unwrap());
    assert!(recorder.take().is_empty());

    assert!(picker.apply_external_change(&Swatch::solid("#ff0055")).unwrap());
    assert_eq!(picker.swatch(), &Swatch::solid("#ff0055"));
    assert_eq!(
        recorder.take(),
        vec![SwatchEvent::Changed(Swatch::solid("#ff0055"))]
    );
}

#[test]
fn invalid_colors_fail_construction_and_external_updates() {
    let err = SwatchPicker::new(
        PickerOptions::controlled(Swatch::solid("not-a-color")),
        SavedSwatchStore::unavailable(),
        Box::new(NoopEvents),
    )
    .unwrap_err();
    assert!(matches!(err, SwatchError::InvalidColorFormat(_)));

    let (mut picker, _) = uncontrolled(Swatch::solid("#0055ff"));
    let before = *picker.internal_swatch();
    assert!(picker
        .apply_external_change(&Swatch::gradient("#0055ff", "#12345"))
        .is_err());
    assert_eq!(*picker.internal_swatch(), before);
}

#[test]
fn saving_first_entry_again_keeps_a_single_copy() {
    let (mut picker, recorder) = uncontrolled(Swatch::solid("#0055ff"));
    picker.save_current();
    picker.save_current();

    assert_eq!(picker.saved_swatches().len(), 1);
    assert_eq!(
        picker.saved_swatches().to_external(),
        vec![Swatch::solid("#0055ff")]
    );
    assert_eq!(
        recorder.take(),
        vec![
            SwatchEvent::Saved(Swatch::solid("#0055ff")),
            SwatchEvent::Saved(Swatch::solid("#0055ff")),
        ]
    );
}

#[test]
fn saved_list_respects_limit() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut picker = SwatchPicker::with_rng(
        PickerOptions::default().with_saved_swatches_limit(4),
        SavedSwatchStore::unavailable(),
        Box::new(NoopEvents),
        &mut rng,
    )
    .unwrap();

    for hue in (0..360).step_by(15) {
        let hex = swatch_model::HslColor::new(hue as f32, 100.0, 60.0).to_hex();
        picker.apply_external_change(&Swatch::solid(hex)).unwrap();
        picker.save_current();
        assert!(picker.saved_swatches().len() <= 4);
    }
    assert_eq!(picker.saved_swatches().len(), 4);
}

#[test]
fn saves_are_persisted_in_wire_format() {
    let backend = Arc::new(MemoryStore::new());
    let (mut picker, _) = picker_with(
        PickerOptions::default()
            .with_default_swatch(Swatch::gradient("#0055ff", "#ff0055")),
        SavedSwatchStore::new(backend.clone()),
    );
    picker.save_current();

    let raw = backend.get(SAVED_SWATCHES_KEY).unwrap().unwrap();
    assert_eq!(
        raw,
        r##"[{"mode":"gradient","colors":["#0055ff","#ff0055"]}]"##
    );
}

#[test]
fn malformed_saved_entries_are_dropped_individually() {
    let backend = Arc::new(MemoryStore::with_entry(
        SAVED_SWATCHES_KEY,
        r##"[
            {"mode":"solid","color":"#ff0000"},
            {"mode":"solid","color":"nope"},
            {"mode":"bogus"},
            42,
            {"mode":"gradient","colors":["#00ff00","#0000ff"]}
        ]"##,
    ));
    let (picker, _) = picker_with(
        PickerOptions::default(),
        SavedSwatchStore::new(backend),
    );

    assert_eq!(
        picker.saved_swatches().to_external(),
        vec![
            Swatch::solid("#ff0000"),
            Swatch::gradient("#00ff00", "#0000ff"),
        ]
    );
    // initial mode follows the most recently saved entry
    assert_eq!(picker.mode(), SwatchMode::Solid);
}

#[test]
fn missing_backend_starts_empty_in_gradient_mode() {
    let mut rng = StdRng::seed_from_u64(42);
    let picker = SwatchPicker::with_rng(
        PickerOptions::default(),
        SavedSwatchStore::unavailable(),
        Box::new(NoopEvents),
        &mut rng,
    )
    .unwrap();

    assert!(picker.saved_swatches().is_empty());
    assert_eq!(picker.mode(), SwatchMode::Gradient);
    let primary = picker.internal_swatch().primary();
    assert_eq!(primary.saturation(), 100.0);
    assert!(primary.lightness() >= DEFAULT_MIN_LIGHTNESS);
    assert!(primary.lightness() <= DEFAULT_MAX_LIGHTNESS);
}

#[test]
fn saved_list_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("swatches.json");

    let (mut first, _) = picker_with(
        PickerOptions::default().with_default_swatch(Swatch::solid("#ff0055")),
        SavedSwatchStore::new(Arc::new(JsonFileStore::new(&path))),
    );
    first.save_current();
    first.set_mode(SwatchMode::Gradient);
    first.save_current();

    let (second, _) = picker_with(
        PickerOptions::default(),
        SavedSwatchStore::new(Arc::new(JsonFileStore::new(&path))),
    );
    assert_eq!(second.saved_swatches().len(), 2);
    assert_eq!(second.mode(), SwatchMode::Gradient);
}

#[test]
fn select_saved_commits_entry_and_notifies() {
    let backend = Arc::new(MemoryStore::with_entry(
        SAVED_SWATCHES_KEY,
        r##"[{"mode":"solid","color":"#ff0000"},{"mode":"gradient","colors":["#00ff00","#0000ff"]}]"##,
    ));
    let (mut picker, recorder) = picker_with(
        PickerOptions::default().with_default_swatch(Swatch::solid("#0055ff")),
        SavedSwatchStore::new(backend),
    );

    let selected = picker.select_saved(1);
    assert_eq!(selected, Some(Swatch::gradient("#00ff00", "#0000ff")));
    assert_eq!(picker.swatch(), &Swatch::gradient("#00ff00", "#0000ff"));
    assert_eq!(
        recorder.take(),
        vec![
            SwatchEvent::Changed(Swatch::gradient("#00ff00", "#0000ff")),
            SwatchEvent::Selected(Swatch::gradient("#00ff00", "#0000ff")),
        ]
    );

    assert_eq!(picker.select_saved(5), None);
    assert!(recorder.take().is_empty());
}

#[test]
fn selecting_swapped_gradient_keeps_stop_order() {
    let backend = Arc::new(MemoryStore::with_entry(
        SAVED_SWATCHES_KEY,
        r##"[{"mode":"gradient","colors":["#ff0055","#0055ff"]}]"##,
    ));
    let (mut picker, recorder) = picker_with(
        PickerOptions::default()
            .with_default_swatch(Swatch::solid("#0055ff"))
            .with_hue_link(HueLinkPolicy::Reset),
        SavedSwatchStore::new(backend),
    );

    let swapped = Swatch::gradient("#ff0055", "#0055ff");
    assert_eq!(picker.select_saved(0), Some(swapped.clone()));
    assert_eq!(picker.swatch(), &swapped);
    assert_eq!(
        recorder.take(),
        vec![
            SwatchEvent::Changed(swapped.clone()),
            SwatchEvent::Selected(swapped),
        ]
    );
}

#[test]
fn reset_returns_to_construction_snapshot() {
    let (mut picker, _) = uncontrolled(Swatch::solid("#0055ff"));
    let snapshot = *picker.default_internal_swatch();

    picker.set_mode(SwatchMode::Gradient);
    picker.apply_external_change(&Swatch::solid("#ff0000")).unwrap();
    assert!(picker.reset_to_default());

    assert_eq!(*picker.internal_swatch(), snapshot);
    assert_eq!(*picker.default_internal_swatch(), snapshot);
}

#[test]
fn disabled_picker_ignores_interaction_but_follows_external_value() {
    let backend = Arc::new(MemoryStore::with_entry(
        SAVED_SWATCHES_KEY,
        r##"[{"mode":"solid","color":"#ff0000"}]"##,
    ));
    let (mut picker, recorder) = picker_with(
        PickerOptions::default()
            .with_default_swatch(Swatch::solid("#0055ff"))
            .with_disabled(true),
        SavedSwatchStore::new(backend),
    );

    assert!(!picker.set_mode(SwatchMode::Gradient));
    assert_eq!(picker.select_saved(0), None);
    assert!(!picker.reset_to_default());
    assert!(!picker.save_current());
    assert_eq!(picker.saved_swatches().len(), 1);
    assert!(recorder.take().is_empty());

    assert!(picker.apply_external_change(&Swatch::solid("#ff0055")).unwrap());
    assert_eq!(picker.swatch(), &Swatch::solid("#ff0055"));
}

#[test]
fn hue_link_policy_controls_swapped_gradients() {
    let swapped = Swatch::gradient("#ff0055", "#0055ff");

    let (preserve, _) = picker_with(
        PickerOptions::controlled(swapped.clone()),
        SavedSwatchStore::unavailable(),
    );
    assert_eq!(preserve.internal_swatch().to_external(), swapped);

    let (reset, _) = picker_with(
        PickerOptions::controlled(swapped)
            .with_hue_link(HueLinkPolicy::Reset),
        SavedSwatchStore::unavailable(),
    );
    assert_eq!(
        reset.internal_swatch().to_external(),
        Swatch::gradient("#ff0055", "#55ff00")
    );
}

#[test]
fn pickers_get_distinct_ids() {
    let a = SwatchPicker::ephemeral().unwrap();
    let b = SwatchPicker::ephemeral().unwrap();
    assert_ne!(a.id(), b.id());
}
