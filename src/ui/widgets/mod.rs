// SPDX-License-Identifier: MPL-2.0
//! Canvas widgets drawn by the viewer.

pub mod animated_spinner;
pub mod progress_ring;

pub use animated_spinner::AnimatedSpinner;
pub use progress_ring::ProgressRing;

use iced::widget::canvas::{self, Path};
use iced::Point;

/// Segments used to approximate a full turn.
const SEGMENTS_PER_TURN: u16 = 60;

/// Builds an open arc of `sweep` radians starting at `start` (0 = 3 o'clock,
/// clockwise).
pub(crate) fn arc_path(center: Point, radius: f32, start: f32, sweep: f32) -> Path {
    let mut builder = canvas::path::Builder::new();
    builder.move_to(point_on_circle(center, radius, start));

    let turns = (sweep.abs() / std::f32::consts::TAU).min(1.0);
    let segments = (f32::from(SEGMENTS_PER_TURN) * turns).ceil().max(1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = segments as u16;

    for i in 1..=steps {
        let t = f32::from(i) / segments;
        builder.line_to(point_on_circle(center, radius, start + sweep * t));
    }
    builder.build()
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
