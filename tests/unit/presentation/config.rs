use super::*;
use crate::foundation::core::DEFAULT_MEDIA_SRC;

#[test]
fn empty_object_uses_fallback_source() {
    let cfg = PresentationConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg.media_source().unwrap().as_str(), DEFAULT_MEDIA_SRC);
}

#[test]
fn explicit_source_is_kept() {
    let cfg = PresentationConfig::from_json_str(r#"{"media_src":"https://cdn.test/a.mp4"}"#)
        .unwrap();
    let src = cfg.media_source().unwrap();
    assert!(src.is_remote());
}

#[test]
fn blank_source_is_rejected() {
    let err = PresentationConfig::from_json_str(r#"{"media_src":"  "}"#).unwrap_err();
    assert!(matches!(err, UnveilError::Validation(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = PresentationConfig::from_json_str(r#"{"autoplay":true}"#).unwrap_err();
    assert!(matches!(err, UnveilError::Serde(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = PresentationConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(format!("{err:#}").contains("does/not/exist.json"));
}
