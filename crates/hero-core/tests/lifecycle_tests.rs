// Host-side tests for the start/stop contract using a recording host.

mod common;

use common::{HostCall, MockHost, RecordingSurface};
use hero_core::{AnimationHandle, FieldConfig, Hero, HostError, HostEvent};

#[test]
fn start_attaches_every_listener_then_starts_frames() {
    let host = MockHost::default();
    let journal = host.journal.clone();
    let handle = AnimationHandle::start(host).expect("start");
    assert!(handle.is_running());

    let j = journal.borrow();
    assert_eq!(j.listening.len(), HostEvent::ALL.len());
    assert_eq!(j.calls.last(), Some(&HostCall::RequestFrames));
    assert!(j.looping);
}

#[test]
fn stop_removes_listeners_and_no_frame_fires_afterwards() {
    let host = MockHost::default();
    let journal = host.journal.clone();
    let mut handle = AnimationHandle::start(host).expect("start");

    let mut ticks = 0;
    journal.borrow_mut().pump(3, || ticks += 1);
    assert_eq!(ticks, 3);

    handle.stop();
    assert!(!handle.is_running());
    journal.borrow_mut().pump(5, || ticks += 1);
    assert_eq!(ticks, 3, "frame fired after stop");

    let j = journal.borrow();
    assert!(j.listening.is_empty());
    let removed = j
        .calls
        .iter()
        .filter(|c| matches!(c, HostCall::Remove(_)))
        .count();
    assert_eq!(removed, HostEvent::ALL.len());
    assert_eq!(j.frames_fired, 3);
}

#[test]
fn stop_is_idempotent_and_drop_does_not_detach_twice() {
    let host = MockHost::default();
    let journal = host.journal.clone();
    let mut handle = AnimationHandle::start(host).expect("start");
    handle.stop();
    handle.stop();
    drop(handle);

    let j = journal.borrow();
    let cancels = j
        .calls
        .iter()
        .filter(|c| **c == HostCall::CancelFrames)
        .count();
    let removes = j
        .calls
        .iter()
        .filter(|c| matches!(c, HostCall::Remove(_)))
        .count();
    assert_eq!(cancels, 1);
    assert_eq!(removes, HostEvent::ALL.len());
}

#[test]
fn dropping_the_handle_tears_down() {
    let host = MockHost::default();
    let journal = host.journal.clone();
    {
        let _handle = AnimationHandle::start(host).expect("start");
        assert!(journal.borrow().looping);
    }
    let j = journal.borrow();
    assert!(!j.looping);
    assert!(j.listening.is_empty());
}

#[test]
fn failed_listener_rolls_back_earlier_ones() {
    let host = MockHost::default();
    host.journal.borrow_mut().fail_add = Some(HostEvent::Scroll);
    let journal = host.journal.clone();

    let err = AnimationHandle::start(host).err().expect("start should fail");
    assert!(matches!(err, HostError::Listen { event: HostEvent::Scroll, .. }));

    let j = journal.borrow();
    assert!(j.listening.is_empty());
    assert!(!j.looping);
    assert_eq!(
        j.calls,
        vec![
            HostCall::Add(HostEvent::PointerMove),
            HostCall::Add(HostEvent::PointerLeave),
            HostCall::Remove(HostEvent::PointerLeave),
            HostCall::Remove(HostEvent::PointerMove),
        ]
    );
}

#[test]
fn failed_frame_request_detaches_listeners() {
    let host = MockHost::default();
    host.journal.borrow_mut().fail_frames = true;
    let journal = host.journal.clone();

    let err = AnimationHandle::start(host).err().expect("start should fail");
    assert!(matches!(err, HostError::Schedule(_)));
    assert!(journal.borrow().listening.is_empty());
}

#[test]
fn frames_drive_the_hero_until_stop() {
    let host = MockHost::default();
    let journal = host.journal.clone();
    let cfg = FieldConfig {
        num_points: 40,
        ..FieldConfig::default()
    };
    let mut rng = cfg.clone().with_seed(11).rng();
    let mut hero =
        Hero::mount(cfg, 500.0, RecordingSurface::default(), &mut rng).expect("mount");
    let mut handle = AnimationHandle::start(host).expect("start");

    let mut now = 0.0;
    journal.borrow_mut().pump(4, || {
        now += 16.0;
        hero.frame(now);
    });
    assert_eq!(hero.frames(), 4);

    handle.stop();
    journal.borrow_mut().pump(4, || {
        now += 16.0;
        hero.frame(now);
    });
    assert_eq!(hero.frames(), 4);
    assert_eq!(hero.surface().clears, 4);
}
