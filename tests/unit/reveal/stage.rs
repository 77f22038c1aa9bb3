use super::*;

#[test]
fn stage_indices_and_successors() {
    for (i, s) in RevealStage::ALL.iter().enumerate() {
        assert_eq!(usize::from(s.index()), i);
        assert_eq!(RevealStage::from_index(s.index()), Some(*s));
    }
    assert_eq!(RevealStage::Folded.next(), Some(RevealStage::Unfolded));
    assert_eq!(RevealStage::Open.next(), None);
    assert_eq!(RevealStage::from_index(5), None);
}

#[test]
fn crease_glow_only_at_peak() {
    let lit: Vec<_> = RevealStage::ALL
        .iter()
        .filter(|s| s.look().crease_glow)
        .copied()
        .collect();
    assert_eq!(lit, vec![RevealStage::Glowing]);
}

#[test]
fn look_switches_at_expected_boundaries() {
    let folded = RevealStage::Folded.look();
    assert_eq!(folded.half_rotation_deg, 90.0);
    assert_eq!(folded.fill_opacity, 0.7);
    assert!(!folded.curtains_open);

    let unfolded = RevealStage::Unfolded.look();
    assert_eq!(unfolded.half_rotation_deg, 0.0);
    assert_eq!(unfolded.fold_line_opacity, 0.0);

    let filled = RevealStage::Filled.look();
    assert_eq!(filled.fill_opacity, 1.0);
    assert_eq!(filled.fold_line_opacity, 0.3);
    assert_eq!(filled.glow_scale, 1.0);

    let open = RevealStage::Open.look();
    assert_eq!(open.glow_scale, 1.5);
    assert!(open.curtains_open);
    assert_eq!(open.particles_opacity, 0.0);
}

#[test]
fn serializes_as_snake_case() {
    let s = serde_json::to_string(&RevealStage::Glowing).unwrap();
    assert_eq!(s, "\"glowing\"");
}
