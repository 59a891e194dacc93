// SPDX-License-Identifier: MPL-2.0
//! Rotating half-arc shown while an item is loading.

use super::arc_path;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Spinner rotation speed in radians per tick.
pub const SPINNER_SPEED: f32 = 0.1;

const STROKE_WIDTH: f32 = 3.0;

pub struct AnimatedSpinner {
    cache: Cache,
    /// Rotation angle in radians.
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Advances a spinner angle by one tick, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    let next = rotation + SPINNER_SPEED;
    if next > std::f32::consts::TAU {
        next - std::f32::consts::TAU
    } else {
        next
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Half turn, starting at 12 o'clock
                let arc = arc_path(center, radius, self.rotation - PI / 2.0, PI);
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_after_full_turn() {
        let near_end = std::f32::consts::TAU - 0.05;
        let next = advance(near_end);
        assert!(next < SPINNER_SPEED);
        assert!(next >= 0.0);
    }
}
