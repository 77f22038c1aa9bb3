use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn started(at: u64) -> (RevealSequencer, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let f = Rc::clone(&fired);
    let mut seq = RevealSequencer::new();
    seq.start(Millis(at), move || f.set(f.get() + 1)).unwrap();
    (seq, fired)
}

#[test]
fn starts_folded_and_idle() {
    let seq = RevealSequencer::new();
    assert_eq!(seq.stage(), RevealStage::Folded);
    assert!(!seq.is_running());
    assert!(!seq.is_completed());
    assert_eq!(seq.next_deadline(), None);
}

#[test]
fn stages_change_exactly_at_offsets() {
    let t = 10_000;
    let (mut seq, fired) = started(t);
    assert!(seq.is_running());
    assert_eq!(seq.started_at(), Some(Millis(t)));

    assert!(seq.advance(Millis(t + 499)).is_empty());
    assert_eq!(seq.stage(), RevealStage::Folded);

    let checkpoints = [
        (500, RevealStage::Unfolded),
        (1500, RevealStage::Filled),
        (2500, RevealStage::Glowing),
        (3500, RevealStage::Open),
    ];
    for (offset, stage) in checkpoints {
        assert!(seq.advance(Millis(t + offset - 1)).is_empty());
        assert_eq!(
            seq.advance(Millis(t + offset)),
            vec![RevealEvent::Stage(stage)]
        );
        assert_eq!(seq.stage(), stage);
        assert_eq!(fired.get(), 0);
    }

    assert!(seq.advance(Millis(t + 4499)).is_empty());
    assert_eq!(seq.advance(Millis(t + 4500)), vec![RevealEvent::Completed]);
    assert!(seq.is_completed());
    assert_eq!(fired.get(), 1);

    assert!(seq.advance(Millis(t + 100_000)).is_empty());
    assert_eq!(fired.get(), 1);
    assert!(!seq.is_running());
}

#[test]
fn late_advance_fires_everything_in_order() {
    let (mut seq, fired) = started(0);
    let events = seq.advance(Millis(60_000));
    assert_eq!(
        events,
        vec![
            RevealEvent::Stage(RevealStage::Unfolded),
            RevealEvent::Stage(RevealStage::Filled),
            RevealEvent::Stage(RevealStage::Glowing),
            RevealEvent::Stage(RevealStage::Open),
            RevealEvent::Completed,
        ]
    );
    assert_eq!(fired.get(), 1);
}

#[test]
fn cancel_before_completion_suppresses_callback() {
    let (mut seq, fired) = started(0);
    seq.advance(Millis(2000));
    assert_eq!(seq.stage(), RevealStage::Filled);

    assert_eq!(seq.cancel(), 3);
    assert!(seq.advance(Millis(10_000)).is_empty());
    assert_eq!(seq.stage(), RevealStage::Filled);
    assert_eq!(fired.get(), 0);
    assert!(!seq.is_completed());
}

#[test]
fn drop_releases_callback_without_firing() {
    let (mut seq, fired) = started(0);
    seq.advance(Millis(1000));
    drop(seq);
    assert_eq!(fired.get(), 0);
    // The only other owner of the counter is the test.
    assert_eq!(Rc::strong_count(&fired), 1);
}

#[test]
fn second_start_is_rejected() {
    let (mut seq, _fired) = started(0);
    let err = seq.start(Millis(5), || {}).unwrap_err();
    assert!(matches!(err, UnveilError::State(_)));
}

#[test]
fn observers_see_every_event_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (mut seq, _fired) = started(0);
    let l = Rc::clone(&log);
    seq.subscribe(move |e| l.borrow_mut().push(*e));

    seq.advance(Millis(1500));
    seq.advance(Millis(1500));
    seq.advance(Millis(4500));

    assert_eq!(log.borrow().len(), 5);
    assert_eq!(log.borrow()[0], RevealEvent::Stage(RevealStage::Unfolded));
    assert_eq!(log.borrow()[4], RevealEvent::Completed);
}
