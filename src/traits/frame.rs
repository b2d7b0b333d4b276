/// Source of per-iteration frame times
pub trait FrameSource {
    /// Milliseconds since the previous call
    fn next_frame_ms(&mut self) -> f64;
}
