use super::*;

fn entry_at(trace: &[TraceEntry], at_ms: u64) -> &TraceEntry {
    trace
        .iter()
        .rev()
        .find(|e| e.at_ms <= at_ms)
        .expect("trace starts at 0")
}

#[test]
fn parses_tagged_steps() {
    let s = Script::from_json_str(
        r#"{
            "media_duration": 90,
            "fullscreen": "deny",
            "steps": [
                {"at_ms": 100, "action": {"input": {"kind": "key", "code": "Space"}}},
                {"at_ms": 200, "action": {"engine": {"kind": "waiting"}}},
                {"at_ms": 300, "action": "escape_fullscreen"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(s.media_duration, Some(90.0));
    assert_eq!(s.fullscreen, FullscreenPolicy::Deny);
    assert_eq!(s.steps[0].action, ScriptAction::Input(UserInput::key("Space")));
    assert_eq!(s.steps[1].action, ScriptAction::Engine(EngineEvent::Waiting));
    assert_eq!(s.steps[2].action, ScriptAction::EscapeFullscreen);
}

#[test]
fn defaults_and_null_duration() {
    let s = Script::from_json_str("{}").unwrap();
    assert_eq!(s.media_duration, Some(60.0));
    assert!(s.steps.is_empty());

    let s = Script::from_json_str(r#"{"media_duration": null}"#).unwrap();
    assert_eq!(s.media_duration, None);
}

#[test]
fn unsorted_steps_are_rejected() {
    let err = Script::from_json_str(
        r#"{"steps": [
            {"at_ms": 500, "action": "stall"},
            {"at_ms": 100, "action": "resume"}
        ]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, UnveilError::Validation(_)));
}

#[test]
fn zero_tick_is_rejected() {
    let opts = RunOpts {
        until: Millis(1000),
        tick: Millis::ZERO,
    };
    assert!(run_script(&PresentationConfig::default(), &Script::demo(), opts).is_err());
}

#[test]
fn idle_session_only_records_reveal_and_metadata() {
    let script = Script {
        steps: vec![],
        ..Script::demo()
    };
    let opts = RunOpts {
        until: Millis(10_000),
        tick: Millis(500),
    };
    let trace = run_script(&PresentationConfig::default(), &script, opts).unwrap();

    let stages: Vec<_> = trace.iter().map(|e| (e.at_ms, e.overlay)).collect();
    assert_eq!(
        stages,
        vec![
            (0, Some(RevealStage::Folded)),
            (500, Some(RevealStage::Unfolded)),
            (1500, Some(RevealStage::Filled)),
            (2500, Some(RevealStage::Glowing)),
            (3500, Some(RevealStage::Open)),
            (4500, None),
        ]
    );
    assert_eq!(trace[0].snapshot.duration, Some(20.0));
    assert_eq!(trace[0].time_label, "0:00 / 0:20");
    assert!(trace.iter().all(|e| e.snapshot.show_controls));
}

#[test]
fn demo_session_exercises_controls() {
    let trace = run_script(
        &PresentationConfig::default(),
        &Script::demo(),
        RunOpts::default(),
    )
    .unwrap();

    assert!(entry_at(&trace, 5_000).snapshot.is_playing);
    assert!(entry_at(&trace, 5_000).overlay.is_none());

    let after_seek = entry_at(&trace, 6_000);
    assert!(after_seek.snapshot.current_time >= 3.0);
    assert!(after_seek.snapshot.current_time < 3.2);

    assert!(entry_at(&trace, 7_000).snapshot.is_muted);
    let unmuted = entry_at(&trace, 8_000).snapshot;
    assert!(!unmuted.is_muted);
    assert_eq!(unmuted.volume, 0.7);
    assert!(!unmuted.show_controls);

    assert!(entry_at(&trace, 9_000).snapshot.is_fullscreen);
    assert!(!entry_at(&trace, 10_000).snapshot.is_fullscreen);

    assert!(entry_at(&trace, 11_000).snapshot.is_buffering);
    assert!(!entry_at(&trace, 12_000).snapshot.is_buffering);

    assert!(entry_at(&trace, 16_000).snapshot.show_controls);
    assert!(!entry_at(&trace, 19_000).snapshot.show_controls);
}

#[test]
fn rejected_play_and_denied_fullscreen_degrade_quietly() {
    let script = Script {
        fullscreen: FullscreenPolicy::Deny,
        reject_play: true,
        steps: vec![
            ScriptStep {
                at_ms: 100,
                action: ScriptAction::Input(UserInput::PlayButton),
            },
            ScriptStep {
                at_ms: 200,
                action: ScriptAction::Input(UserInput::FullscreenButton),
            },
        ],
        ..Script::demo()
    };
    let opts = RunOpts {
        until: Millis(1000),
        tick: Millis(100),
    };
    let trace = run_script(&PresentationConfig::default(), &script, opts).unwrap();
    let last = trace.last().unwrap().snapshot;
    // Play flips optimistically even though the engine refused; fullscreen stays off.
    assert!(last.is_playing);
    assert_eq!(last.current_time, 0.0);
    assert!(!last.is_fullscreen);
}

#[test]
fn playback_to_end_resets_play_state() {
    let script = Script {
        media_duration: Some(1.0),
        steps: vec![ScriptStep {
            at_ms: 5_000,
            action: ScriptAction::Input(UserInput::VideoClick),
        }],
        ..Script::demo()
    };
    let opts = RunOpts {
        until: Millis(7_000),
        tick: Millis(100),
    };
    let trace = run_script(&PresentationConfig::default(), &script, opts).unwrap();
    assert!(entry_at(&trace, 5_500).snapshot.is_playing);
    let end = entry_at(&trace, 7_000).snapshot;
    assert!(!end.is_playing);
    assert_eq!(end.current_time, 1.0);
    assert!(end.show_controls);
}

#[test]
fn trace_line_is_readable() {
    let trace = run_script(
        &PresentationConfig::default(),
        &Script::demo(),
        RunOpts {
            until: Millis(0),
            tick: Millis(100),
        },
    )
    .unwrap();
    assert_eq!(trace.len(), 1);
    let line = trace[0].to_string();
    assert!(line.contains("overlay=folded"));
    assert!(line.contains("0:00 / 0:20"));
}
