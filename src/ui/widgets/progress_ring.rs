// SPDX-License-Identifier: MPL-2.0
//! Circular upload progress indicator with a centered percentage.

use super::arc_path;
use crate::domain::upload::UploadProgress;
use crate::ui::design_tokens::{sizing, typography};
use iced::alignment;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{mouse, Color, Length, Pixels, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Ring filled clockwise from 12 o'clock.
pub struct ProgressRing {
    progress: UploadProgress,
    color: Color,
    track_color: Color,
    size: f32,
}

impl ProgressRing {
    #[must_use]
    pub fn new(progress: UploadProgress, color: Color) -> Self {
        Self {
            progress,
            color,
            track_color: Color { a: 0.25, ..color },
            size: sizing::PROGRESS_RING,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Label drawn in the middle of the ring.
    #[must_use]
    pub fn label(progress: UploadProgress) -> String {
        format!("{}%", progress.percent())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sweep(&self) -> f32 {
        (self.progress.value() as f32) * TAU
    }
}

impl<Message> canvas::Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let stroke = sizing::PROGRESS_RING_STROKE;
        let radius = frame.width().min(frame.height()) / 2.0 - stroke / 2.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(stroke)
                .with_color(self.track_color),
        );

        let sweep = self.sweep();
        if sweep > 0.0 {
            frame.stroke(
                &arc_path(center, radius, -FRAC_PI_2, sweep),
                Stroke::default()
                    .with_width(stroke)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        frame.fill_text(Text {
            content: Self::label(self.progress),
            position: center,
            color: self.color,
            size: Pixels(typography::TITLE_SM),
            align_x: alignment::Horizontal::Center.into(),
            align_y: alignment::Vertical::Center,
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_rounded_percentage() {
        assert_eq!(ProgressRing::label(UploadProgress::new(0.0)), "0%");
        assert_eq!(ProgressRing::label(UploadProgress::new(0.426)), "43%");
        assert_eq!(ProgressRing::label(UploadProgress::COMPLETE), "100%");
    }

    #[test]
    fn sweep_is_proportional() {
        let half = ProgressRing::new(UploadProgress::new(0.5), Color::WHITE);
        assert!((half.sweep() - std::f32::consts::PI).abs() < 1e-5);
        let none = ProgressRing::new(UploadProgress::new(0.0), Color::WHITE);
        assert_eq!(none.sweep(), 0.0);
    }
}
