use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        UnveilError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(UnveilError::state("x").to_string().contains("state error:"));
    assert!(
        UnveilError::capability("x")
            .to_string()
            .contains("capability unavailable:")
    );
    assert!(
        UnveilError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = UnveilError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = UnveilError::from(e);
    assert!(matches!(err, UnveilError::Serde(_)));
}
