use super::*;

fn raw(style: &str) -> RawConfig {
    RawConfig {
        text: "Hi there".to_string(),
        reveal_unit: Some("word".to_string()),
        direction: Some("backwards".to_string()),
        style: style.to_string(),
        total_duration_ms: 900.0,
        color: Some(serde_json::Value::from("#00FF00")),
    }
}

#[test]
fn style_names_parse_leniently() {
    for s in ["fade-in", "fade_in", "FadeIn", " FADE IN "] {
        assert_eq!(s.parse::<AnimationStyle>().unwrap(), AnimationStyle::FadeIn);
    }
    assert_eq!(
        "slide-down".parse::<AnimationStyle>().unwrap(),
        AnimationStyle::SlideDown
    );
    for style in AnimationStyle::ALL {
        assert_eq!(style.as_str().parse::<AnimationStyle>().unwrap(), style);
    }
}

#[test]
fn unknown_enum_values_are_invalid_config() {
    assert!(matches!(
        "wobble".parse::<AnimationStyle>(),
        Err(TextMotionError::InvalidConfig(_))
    ));
    assert!(matches!(
        "".parse::<AnimationStyle>(),
        Err(TextMotionError::InvalidConfig(_))
    ));
    assert!(matches!(
        "sentence".parse::<RevealUnit>(),
        Err(TextMotionError::InvalidConfig(_))
    ));
    assert!(matches!(
        "sideways".parse::<Direction>(),
        Err(TextMotionError::InvalidConfig(_))
    ));
}

#[test]
fn from_raw_converts_every_field() {
    let cfg = AnimationConfig::from_raw(&raw("typing")).unwrap();
    assert_eq!(cfg.style, AnimationStyle::Typing);
    assert_eq!(cfg.reveal_unit, RevealUnit::Word);
    assert_eq!(cfg.direction, Direction::Backwards);
    assert_eq!(cfg.total_duration_ms, 900.0);
    assert_eq!(cfg.color, Rgb8::new(0, 255, 0));
}

#[test]
fn missing_optional_fields_use_defaults() {
    let cfg = AnimationConfig::from_json(
        r#"{"text":"abc","style":"rotate","totalDurationMs":1000}"#,
    )
    .unwrap();
    assert_eq!(cfg.reveal_unit, RevealUnit::Letter);
    assert_eq!(cfg.direction, Direction::Forward);
    assert_eq!(cfg.color, Rgb8::WHITE);
}

#[test]
fn malformed_color_falls_back_to_white() {
    let mut r = raw("scale");
    r.color = Some(serde_json::Value::from("not-a-color"));
    assert_eq!(AnimationConfig::from_raw(&r).unwrap().color, Rgb8::WHITE);
}

#[test]
fn non_string_color_falls_back_to_white() {
    for color in ["16777215", "true", "null", "[255,0,0]", "{\"r\":255}"] {
        let json = format!(
            r#"{{"text":"Hi","style":"typing","totalDurationMs":900,"color":{color}}}"#
        );
        let cfg = AnimationConfig::from_json(&json).unwrap();
        assert_eq!(cfg.color, Rgb8::WHITE, "color {color}");
    }
}

#[test]
fn empty_or_blank_text_is_rejected() {
    for text in ["", "   "] {
        let mut r = raw("typing");
        r.text = text.to_string();
        let err = AnimationConfig::from_raw(&r).unwrap_err();
        assert!(err.to_string().contains("text must not be empty"));
    }
}

#[test]
fn non_positive_or_non_finite_duration_is_rejected() {
    for ms in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let mut r = raw("typing");
        r.total_duration_ms = ms;
        assert!(matches!(
            AnimationConfig::from_raw(&r),
            Err(TextMotionError::InvalidConfig(_))
        ));
    }
}

#[test]
fn bad_json_is_a_serde_error() {
    assert!(matches!(
        AnimationConfig::from_json("{\"text\": 3}"),
        Err(TextMotionError::Serde(_))
    ));
}

#[test]
fn style_metadata_matches_policy() {
    assert_eq!(AnimationStyle::Scale.timing_family(), TimingFamily::Scale);
    assert_eq!(AnimationStyle::Typing.timing_family(), TimingFamily::Typing);
    assert_eq!(AnimationStyle::Rotate.timing_family(), TimingFamily::Tweened);
    assert!(!AnimationStyle::Scale.loops());
    assert!(AnimationStyle::FadeOut.loops());
    assert!(AnimationStyle::SlideUp.is_slide());
    assert!(!AnimationStyle::Typing.is_slide());
}
