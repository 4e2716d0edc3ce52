//! The display side: an eframe app painting the sweep history.
//!
//! Every repaint redraws the whole history from scratch as one open
//! polyline per sweep, oldest first so the newest strokes land on top.
//! Recency is conveyed by opacity: for a snapshot of `k` sweeps, the sweep
//! at position `idx` is stroked at alpha `(idx + 1) / k`, so the newest is
//! fully opaque and older sweeps fade out.

use crate::backend::ShutdownHandle;
use crate::history::SweepHistory;
use crate::types::Frame;
use egui::{Color32, Pos2, Rect, Stroke};
use std::thread::JoinHandle;

/// Trace color of the original viewer (#65bcd4), before alpha.
const TRACE_RGB: (u8, u8, u8) = (0x65, 0xbc, 0xd4);
const BACKGROUND: Color32 = Color32::from_gray(20);

/// Opacity for the sweep at `idx` (0 = oldest) of a `total`-sweep snapshot.
pub fn frame_opacity(idx: usize, total: usize) -> f32 {
    (idx + 1) as f32 / total as f32
}

fn trace_color(opacity: f32) -> Color32 {
    let alpha = (opacity * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(TRACE_RGB.0, TRACE_RGB.1, TRACE_RGB.2, alpha)
}

/// Map one sweep onto the canvas: sample `i` of `m` draws at
/// `x = i * width / m`, and a magnitude `v` (nominally 0..1) draws at
/// `y = height - height * v`, so stronger signals rise toward the top.
fn trace_points(samples: &[f64], rect: Rect) -> Vec<Pos2> {
    let step = rect.width() / samples.len() as f32;
    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Pos2::new(
                rect.left() + i as f32 * step,
                rect.bottom() - rect.height() * v as f32,
            )
        })
        .collect()
}

fn paint_history(painter: &egui::Painter, rect: Rect, snapshot: &[Frame]) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let total = snapshot.len();
    for (idx, frame) in snapshot.iter().enumerate() {
        if frame.is_empty() {
            continue;
        }
        let stroke = Stroke::new(1.0, trace_color(frame_opacity(idx, total)));
        painter.add(egui::Shape::line(trace_points(frame.samples(), rect), stroke));
    }
}

/// The eframe application. Reader of the shared history.
pub struct SpectrumApp {
    history: SweepHistory,
    shutdown: ShutdownHandle,
    worker: Option<JoinHandle<()>>,
}

impl SpectrumApp {
    pub fn new(history: SweepHistory, shutdown: ShutdownHandle, worker: JoinHandle<()>) -> Self {
        Self {
            history,
            shutdown,
            worker: Some(worker),
        }
    }
}

impl eframe::App for SpectrumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                paint_history(&painter, response.rect, &self.history.snapshot());
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Closing the window is a shutdown request: stop the scanner and
        // let the worker drain (its read loop unblocks once the scanner
        // stdout closes).
        self.shutdown.request();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_law() {
        let opacities: Vec<f32> = (0..4).map(|idx| frame_opacity(idx, 4)).collect();
        assert_eq!(opacities, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_newest_is_fully_opaque() {
        for total in 1..10 {
            assert_eq!(frame_opacity(total - 1, total), 1.0);
        }
    }

    #[test]
    fn test_trace_color_alpha() {
        assert_eq!(trace_color(1.0).a(), 255);
        assert_eq!(trace_color(0.5).a(), 128);
    }

    #[test]
    fn test_trace_points_geometry() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::Vec2::new(600.0, 400.0));
        let points = trace_points(&[0.0, 1.0, 0.5, 0.25], rect);
        assert_eq!(points.len(), 4);

        // Horizontal spacing is width / sample count.
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[1].x, 150.0);
        assert_eq!(points[3].x, 450.0);

        // Magnitude 0 sits at the bottom, 1 at the top.
        assert_eq!(points[0].y, 400.0);
        assert_eq!(points[1].y, 0.0);
        assert_eq!(points[2].y, 200.0);
    }

    #[test]
    fn test_trace_points_respect_canvas_origin() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::Vec2::new(100.0, 100.0));
        let points = trace_points(&[0.0], rect);
        assert_eq!(points[0], Pos2::new(10.0, 120.0));
    }
}
