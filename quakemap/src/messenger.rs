/// Channel a front end provides to be notified that the map needs to be drawn again.
pub trait Messenger: Send + Sync {
    /// Requests a redraw of the map.
    fn request_redraw(&self);
}

/// Messenger that ignores all requests.
#[derive(Debug, Default, Copy, Clone)]
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn request_redraw(&self) {}
}
