use super::*;
use crate::foundation::core::{MediaSource, Millis};
use crate::playback::engine::EngineEvent;
use crate::playback::sim::{SimMedia, SimWindow};

fn controller() -> PlaybackController<SimMedia, SimWindow> {
    let mut c =
        PlaybackController::new(MediaSource::fallback(), SimMedia::new(120.0), SimWindow::default());
    c.handle_engine_event(EngineEvent::LoadedMetadata { duration: 120.0 });
    c
}

#[test]
fn paused_view_shows_overlay_and_play_label() {
    let c = controller();
    let v = PlayerView::of(&c);
    assert!(v.play_overlay);
    assert!(v.controls);
    assert_eq!(v.play_label, "Play");
    assert_eq!(v.mute_label, "Mute");
    assert_eq!(v.fullscreen_label, "Enter fullscreen");
    assert_eq!(v.time_label, "0:00 / 2:00");
    assert_eq!(v.position.max, 120.0);
}

#[test]
fn playing_idle_view_hides_everything() {
    let mut c = controller();
    c.toggle_play();
    c.advance(Millis(3000));
    let v = PlayerView::of(&c);
    assert!(!v.play_overlay);
    assert!(!v.controls);
    assert_eq!(v.play_label, "Pause");
}

#[test]
fn muted_view_zeroes_volume_slider() {
    let mut c = controller();
    c.set_volume(0.6);
    c.toggle_mute();
    let v = PlayerView::of(&c);
    assert_eq!(v.mute_label, "Unmute");
    assert_eq!(v.volume.value, 0.0);
}
