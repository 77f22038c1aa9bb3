use super::*;

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(500).after(Millis(1000)), Millis(1500));
    assert_eq!(Millis(u64::MAX).after(Millis(1)), Millis(u64::MAX));
    assert_eq!(Millis(100).since(Millis(400)), Millis::ZERO);
    assert_eq!(Millis(400).since(Millis(100)), Millis(300));
}

#[test]
fn millis_from_duration() {
    let m = Millis::from(std::time::Duration::from_secs(3));
    assert_eq!(m, Millis(3000));
    assert_eq!(m.as_duration(), std::time::Duration::from_secs(3));
}

#[test]
fn media_source_rejects_blank() {
    assert!(MediaSource::new("").is_err());
    assert!(MediaSource::new("   ").is_err());
    assert_eq!(MediaSource::new("clip.mp4").unwrap().as_str(), "clip.mp4");
}

#[test]
fn media_source_defaults_to_local_asset() {
    let s = MediaSource::default();
    assert_eq!(s.as_str(), DEFAULT_MEDIA_SRC);
    assert!(!s.is_remote());
    assert!(
        MediaSource::new("https://example.com/a.mp4")
            .unwrap()
            .is_remote()
    );
}
