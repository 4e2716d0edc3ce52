//! The worker-to-UI notification seam.

/// Fire-and-forget signals from the stream worker to the display thread.
///
/// A trait rather than a concrete `egui::Context` so the worker can be
/// driven in tests without a UI. Repaint requests may coalesce: several
/// pushes before the display thread services one only need one repaint.
pub trait RepaintHandle: Send + 'static {
    /// New data is available; repaint when convenient.
    fn request_repaint(&self);

    /// The stream is done; close the application window.
    fn request_close(&self);
}

impl RepaintHandle for egui::Context {
    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }

    fn request_close(&self) {
        self.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}
