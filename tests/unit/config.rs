use super::*;

#[test]
fn defaults_validate() {
    SceneConfig::default().validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: SceneConfig = serde_json::from_str(
        r##"{ "title": null, "layout": { "slot_height": 1.0 }, "palette": { "alert": "#ff00ff" } }"##,
    )
    .unwrap();
    assert_eq!(cfg.title, None);
    assert_eq!(cfg.layout.slot_height, 1.0);
    assert_eq!(cfg.layout.slot_width, 2.5);
    assert_eq!(cfg.palette.alert, Rgba8::rgb(0xff, 0x00, 0xff));
    assert_eq!(cfg.timing, TimingConfig::default());
}

#[test]
fn rejects_non_positive_slot_height() {
    let mut cfg = SceneConfig::default();
    cfg.layout.slot_height = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_negative_duration() {
    let mut cfg = SceneConfig::default();
    cfg.timing.settle_secs = -0.1;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("settle_secs"));
}

#[test]
fn rejects_nan_font() {
    let mut cfg = SceneConfig::default();
    cfg.layout.fonts.status = f64::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn palette_holds_only_drawn_colors() {
    let json = serde_json::to_value(Palette::default()).unwrap();
    let mut keys: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["alert", "block", "container", "pointer", "status", "text"]
    );
}
