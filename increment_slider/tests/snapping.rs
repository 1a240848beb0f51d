// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests of dragging, settling and programmatic jumps.

use std::cell::Cell;
use std::rc::Rc;

use assert_matches::assert_matches;
use increment_slider::animation::Easing;
use increment_slider::controller::State;
use increment_slider::host::{HostSlider, PointerEvent};
use increment_slider::testing::{Harness, TestHost};
use increment_slider::{ConfigError, IncrementOutOfRange, IncrementSlider, SliderConfig};

fn quarters() -> Harness {
    Harness::new(SliderConfig::new(0, 100).with_sections(4))
}

#[test]
fn increments_follow_config() {
    let harness = quarters();
    assert_eq!(
        harness.slider().increments().as_slice(),
        &[0, 25, 50, 75, 100]
    );
}

#[test]
fn release_settles_on_nearest_increment() {
    let mut harness = quarters();

    harness.pointer_down_at(30);
    harness.pointer_move_to(60);
    assert_eq!(harness.progress(), 60, "thumb follows the pointer freely");
    assert!(harness.settled().is_empty());

    harness.pointer_up_at(60);
    assert_matches!(harness.slider().state(), State::Settling { .. });
    assert!(harness.settled().is_empty(), "nothing is reported mid-flight");

    harness.animate_until_idle();
    assert_eq!(harness.progress(), 50);
    assert_eq!(harness.settled(), [2]);
    assert_eq!(harness.slider().state(), &State::Idle);
    assert_eq!(harness.slider().current_increment(), Some(2));
}

#[test]
fn settle_takes_the_settle_duration() {
    let mut harness = Harness::new(
        SliderConfig::new(0, 100)
            .with_sections(4)
            .with_easing(Easing::Linear),
    );
    harness.drag(0, 40);

    harness.animate_ms(48);
    let midway = harness.progress();
    assert!(
        (45..50).contains(&midway),
        "expected to be on the way from 40 to 50, got {midway}"
    );
    assert!(harness.settled().is_empty());

    harness.animate_ms(64);
    assert_eq!(harness.progress(), 50);
    assert_eq!(harness.settled(), [2]);
}

#[test]
fn intermediate_frames_write_progress() {
    let mut harness = Harness::new(
        SliderConfig::new(0, 100)
            .with_sections(2)
            .with_easing(Easing::Linear),
    );
    harness.drag(0, 30);
    harness.animate_until_idle();

    let writes = harness.slider().host().writes();
    assert!(writes.len() > 1, "expected several frames, got {writes:?}");
    assert!(writes.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(writes.last(), Some(&50));
    assert_eq!(harness.settled(), [1]);
}

#[test]
fn tap_does_not_move_the_thumb() {
    let mut harness = Harness::with_host(
        TestHost::new().with_progress(25),
        SliderConfig::new(0, 100).with_sections(4),
    );

    // The host jumps to the pressed position, which is reverted.
    harness.pointer_down_at(90);
    assert_eq!(harness.progress(), 25);
    assert_eq!(harness.slider().host().writes(), &[25]);

    harness.pointer_up_at(90);
    assert_eq!(harness.progress(), 25);
    harness.animate_until_idle();
    assert_eq!(harness.progress(), 25);
    assert_eq!(harness.settled(), [1]);
}

#[test]
fn suppressed_changes_revert_to_captured_progress() {
    let mut harness = Harness::with_host(
        TestHost::new().with_progress(40),
        SliderConfig::new(0, 100).with_sections(4),
    );
    harness.pointer_down_at(40);

    for (value, from_user) in [(70, false), (10, true), (99, false)] {
        harness.slider_mut().host_mut().set_progress(value);
        harness.slider_mut().on_progress_changed(value, from_user);
        assert_eq!(harness.progress(), 40);
    }

    // Once the pointer moves, changes go through.
    harness.pointer_move_to(70);
    harness.slider_mut().on_progress_changed(70, true);
    assert_eq!(harness.progress(), 70);
}

#[test]
fn set_increment_from_any_progress() {
    for start in [0, 13, 50, 99, 100] {
        let mut harness = Harness::with_host(
            TestHost::new().with_progress(start),
            SliderConfig::new(0, 100).with_sections(4),
        );
        harness.slider_mut().set_increment(0).unwrap();
        harness.animate_until_idle();
        assert_eq!(harness.progress(), 0);
        assert_eq!(harness.settled(), [0], "starting from {start}");
    }
}

#[test]
fn set_increment_takes_the_jump_duration() {
    let mut harness = Harness::new(
        SliderConfig::new(0, 100)
            .with_sections(4)
            .with_easing(Easing::Linear),
    );
    harness.slider_mut().set_increment(4).unwrap();

    harness.animate_ms(112);
    assert!(harness.progress() < 100);
    assert!(harness.settled().is_empty());

    harness.animate_ms(96);
    assert_eq!(harness.progress(), 100);
    assert_eq!(harness.settled(), [4]);
}

#[test]
fn set_increment_out_of_range_is_an_error() {
    let mut harness = quarters();
    assert_eq!(
        harness.slider_mut().set_increment(5),
        Err(IncrementOutOfRange { index: 5, len: 5 })
    );
    assert_eq!(harness.slider().state(), &State::Idle);
    assert_eq!(harness.animate_until_idle(), 0);
}

#[test]
fn later_animation_supersedes_earlier_one() {
    let mut harness = quarters();
    harness.slider_mut().set_increment(4).unwrap();
    harness.animate_ms(32);
    assert!(harness.progress() > 0);

    // The frame already requested by the first animation is still delivered,
    // and must be ignored.
    harness.slider_mut().set_increment(1).unwrap();
    harness.animate_until_idle();

    assert_eq!(harness.progress(), 25);
    assert_eq!(harness.settled(), [1]);
}

#[test]
fn press_during_animation_takes_over() {
    let mut harness = quarters();
    harness.slider_mut().set_increment(4).unwrap();
    harness.animate_ms(32);

    let progress = harness.progress();
    harness.pointer_down_at(progress);
    harness.pointer_move_to(10);
    harness.pointer_up_at(10);
    harness.animate_until_idle();

    assert_eq!(harness.progress(), 0);
    assert_eq!(harness.settled(), [0]);
}

#[test]
fn cancel_settles_like_release() {
    let mut harness = quarters();
    harness.pointer_down_at(0);
    harness.pointer_move_to(80);
    harness.pointer_event(PointerEvent::Cancel);
    harness.animate_until_idle();

    assert_eq!(harness.progress(), 75);
    assert_eq!(harness.settled(), [3]);
}

#[test]
fn each_settle_is_reported_once() {
    let mut harness = quarters();
    harness.drag(0, 60);
    harness.animate_until_idle();
    harness.drag(50, 90);
    harness.animate_until_idle();
    harness.slider_mut().set_increment(1).unwrap();
    harness.animate_until_idle();

    assert_eq!(harness.settled(), [2, 4, 1]);
}

#[test]
fn no_listener_is_fine() {
    let counter = Rc::new(Cell::new(0));
    let count = Rc::clone(&counter);
    let mut slider = IncrementSlider::new(TestHost::new(), SliderConfig::default())
        .unwrap()
        .with_listener(move |_| count.set(count.get() + 1));
    slider.clear_listener();

    slider.set_increment(2).unwrap();
    let id = slider.host_mut().take_anim_frames()[0];
    for _ in 0..20 {
        slider.on_anim_frame(id, 16_000_000);
    }
    assert_eq!(slider.host().progress(), 50);
    assert_eq!(counter.get(), 0);
}

#[test]
fn invalid_configs_are_rejected() {
    assert_matches!(
        IncrementSlider::new(TestHost::new(), SliderConfig::new(10, 10)),
        Err(ConfigError::EmptyRange { .. })
    );
    assert_matches!(
        IncrementSlider::new(TestHost::new(), SliderConfig::new(0, 100).with_sections(0)),
        Err(ConfigError::NoSections)
    );
    assert_matches!(
        IncrementSlider::new(TestHost::new(), SliderConfig::new(0, 2).with_sections(3)),
        Err(ConfigError::TooManySections { .. })
    );
}

#[test]
fn config_is_applied_to_host() {
    let tint = increment_slider::peniko::Color::from_rgb8(10, 20, 30);
    let harness = Harness::new(
        SliderConfig::new(200, 400)
            .with_sections(8)
            .with_thumb_tint(tint),
    );
    let host = harness.slider().host();
    assert_eq!((host.min(), host.max()), (200, 400));
    assert_eq!(host.progress(), 200, "progress is clamped into the new range");
    assert_eq!(host.thumb_tint(), Some(tint));
    assert_eq!(harness.slider().increments().len(), 9);
}

#[test]
fn range_change_mid_gesture_keeps_the_drag() {
    let mut harness = quarters();
    harness.pointer_down_at(0);
    harness.pointer_move_to(60);

    harness.slider_mut().set_range(0, 10).unwrap();
    assert_matches!(harness.slider().state(), State::Dragging { .. });
    assert_eq!(harness.slider().increments().as_slice(), &[0, 2, 5, 7, 10]);
    assert_eq!(harness.progress(), 10);

    // The release settles on the new increments.
    harness.pointer_move_to(6);
    harness.pointer_up_at(6);
    harness.animate_until_idle();
    assert_eq!(harness.progress(), 5);
    assert_eq!(harness.settled(), [2]);
}

#[test]
fn release_after_jump_mid_drag_still_snaps() {
    let mut harness = quarters();
    harness.pointer_down_at(0);
    harness.pointer_move_to(30);
    harness.slider_mut().set_increment(4).unwrap();
    harness.animate_until_idle();
    assert_eq!(harness.progress(), 100);
    assert_eq!(harness.settled(), [4]);

    harness.pointer_move_to(60);
    assert_eq!(harness.progress(), 60, "the pointer is still dragging");
    harness.pointer_up_at(60);
    harness.animate_until_idle();

    let progress = harness.progress();
    assert!(
        harness.slider().increments().as_slice().contains(&progress),
        "thumb left off-increment at {progress}"
    );
    assert_eq!(progress, 50);
    assert_eq!(harness.settled(), [4, 2]);
    assert_eq!(harness.slider().state(), &State::Idle);
}

#[test]
fn release_during_jump_mid_drag_lets_it_finish() {
    let mut harness = quarters();
    harness.pointer_down_at(0);
    harness.pointer_move_to(30);
    harness.slider_mut().set_increment(4).unwrap();
    harness.animate_ms(32);

    harness.pointer_up_at(30);
    harness.animate_until_idle();
    assert_eq!(harness.progress(), 100);
    assert_eq!(harness.settled(), [4]);
    assert_eq!(harness.slider().state(), &State::Idle);
}

#[test]
fn section_change_during_animation_cancels_it() {
    let mut harness = quarters();
    harness.slider_mut().set_increment(4).unwrap();
    harness.animate_ms(16);

    harness.slider_mut().set_sections(2).unwrap();
    assert_eq!(harness.slider().sections(), 2);
    assert_eq!(harness.slider().increments().as_slice(), &[0, 50, 100]);

    // The pending frame belongs to the cancelled animation.
    assert_eq!(harness.animate_until_idle(), 1);
    assert!(harness.settled().is_empty());
}

#[test]
fn rejected_reconfiguration_keeps_previous_state() {
    let mut harness = quarters();
    assert_matches!(
        harness.slider_mut().set_sections(0),
        Err(ConfigError::NoSections)
    );
    assert_matches!(
        harness.slider_mut().set_range(5, 1),
        Err(ConfigError::EmptyRange { min: 5, max: 1 })
    );
    assert_eq!(harness.slider().sections(), 4);
    assert_eq!(harness.slider().increments().len(), 5);
    let host = harness.slider().host();
    assert_eq!((host.min(), host.max()), (0, 100));
}
