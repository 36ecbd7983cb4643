//! Wire format checks for persisted swatches.
#![cfg(feature = "serde")]

use swatch_model::{Swatch, SwatchMode, to_external, to_internal};

#[test]
fn solid_serializes_with_mode_tag() {
    let json = serde_json::to_string(&Swatch::solid("#3366cc")).unwrap();
    assert_eq!(json, r##"{"mode":"solid","color":"#3366cc"}"##);
}

#[test]
fn gradient_serializes_with_color_pair() {
    let json =
        serde_json::to_string(&Swatch::gradient("#3366cc", "#cc3366")).unwrap();
    assert_eq!(
        json,
        r##"{"mode":"gradient","colors":["#3366cc","#cc3366"]}"##
    );
}

#[test]
fn stored_list_parses_and_normalizes_case() {
    let raw = r##"[
        {"mode":"gradient","colors":["#BDC3C7","#2C3E50"]},
        {"mode":"solid","color":"#FF8800"}
    ]"##;
    let parsed: Vec<Swatch> = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed[0].mode(), SwatchMode::Gradient);
    assert_eq!(parsed[1].mode(), SwatchMode::Solid);

    let normalized: Vec<Swatch> = parsed
        .iter()
        .map(|swatch| to_external(&to_internal(swatch).unwrap()))
        .collect();
    assert_eq!(normalized[0], Swatch::gradient("#bdc3c7", "#2c3e50"));
    assert_eq!(normalized[1], Swatch::solid("#ff8800"));
}

#[test]
fn unknown_mode_is_rejected() {
    let raw = r##"{"mode":"radial","color":"#ffffff"}"##;
    assert!(serde_json::from_str::<Swatch>(raw).is_err());
}

#[test]
fn mode_uses_lowercase_names() {
    assert_eq!(
        serde_json::to_string(&SwatchMode::Gradient).unwrap(),
        r#""gradient""#
    );
}
