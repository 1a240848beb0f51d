// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Drives an increment slider through a few gestures and logs what happens.
//!
//! Run with `RUST_LOG=trace` to see every animation frame.

use increment_slider::SliderConfig;
use increment_slider::animation::Easing;
use increment_slider::testing::Harness;
use increment_slider::tracing_backend::try_init_tracing;
use tracing::info;

fn main() {
    let _ = try_init_tracing();

    let config = SliderConfig::new(0, 100)
        .with_sections(4)
        .with_easing(Easing::AccelerateDecelerate);
    let mut harness = Harness::new(config);
    info!("Increments: {:?}", harness.slider().increments().as_slice());

    harness.drag(10, 60);
    let frames = harness.animate_until_idle();
    info!(
        "Released at 60, settled on {} after {frames} frames",
        harness.progress()
    );

    harness.pointer_down_at(50);
    harness.pointer_up_at(95);
    harness.animate_until_idle();
    info!("Tapped at 95 without dragging, still on {}", harness.progress());

    if let Err(err) = harness.slider_mut().set_increment(9) {
        info!("Rejected: {err}");
    }
    harness.slider_mut().set_increment(4).unwrap();
    harness.animate_until_idle();
    info!("Jumped to {}", harness.progress());

    for (circle, color) in harness.paint().circles {
        info!("Tick at x = {:.1}, color {:?}", circle.center.x, color);
    }
    info!("Listener saw increments {:?}", harness.settled());
}
