use super::*;

#[test]
fn frame_range_length() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
    assert!(FrameRange::new(FrameIndex(4), FrameIndex(4)).unwrap().is_empty());
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_range_progress_clamps() {
    let r = FrameRange::new(FrameIndex(10), FrameIndex(20)).unwrap();
    assert_eq!(r.progress(FrameIndex(0)), 0.0);
    assert_eq!(r.progress(FrameIndex(15)), 0.5);
    assert_eq!(r.progress(FrameIndex(20)), 1.0);

    let empty = FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap();
    assert_eq!(empty.progress(FrameIndex(0)), 1.0);
}

#[test]
fn fps_rounds_step_durations() {
    let fps = Fps::default();
    assert_eq!(fps.secs_to_frames_round(0.5), 15);
    assert_eq!(fps.secs_to_frames_round(0.3), 9);
    assert_eq!(fps.secs_to_frames_round(0.0), 0);
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());
}

#[test]
fn hex_colors_parse() {
    assert_eq!(Rgba8::from_hex("#ff0000").unwrap(), Rgba8::rgb(255, 0, 0));
    let c = Rgba8::from_hex("#00ff0080").unwrap();
    assert_eq!((c.g, c.a), (255, 0x80));
    assert!(Rgba8::from_hex("ff0000").is_err());
    assert!(Rgba8::from_hex("#ff00").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
}

#[test]
fn colors_serialize_as_hex_strings() {
    let json = serde_json::to_string(&Rgba8::rgb(0x12, 0xab, 0x00)).unwrap();
    assert_eq!(json, "\"#12ab00\"");
    let back: Rgba8 = serde_json::from_str("\"#12ab0080\"").unwrap();
    assert_eq!(back.a, 0x80);
    assert!(serde_json::from_str::<Rgba8>("\"blue\"").is_err());
}
