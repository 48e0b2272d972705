use crate::core::io::xyz::XyzError;
use crate::core::models::frame::Frame;

/// A sequential stream of trajectory frames.
pub type FrameStream<'a> = Box<dyn Iterator<Item = Frame> + 'a>;

/// A trajectory that can be streamed from its first frame, any number of times.
///
/// Every call to [`open`](TrajectorySource::open) starts a fresh stream; sources are never
/// rewound or randomly accessed. Sources that hit malformed data end their stream early
/// instead of yielding an error item.
pub trait TrajectorySource {
    /// Opens a new stream positioned at the first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be opened.
    fn open(&self) -> Result<FrameStream<'_>, XyzError>;

    /// A short human-readable description used in logs and error messages.
    fn describe(&self) -> String;
}

impl TrajectorySource for [Frame] {
    fn open(&self) -> Result<FrameStream<'_>, XyzError> {
        Ok(Box::new(self.iter().cloned()))
    }

    fn describe(&self) -> String {
        format!("in-memory trajectory ({} frames)", self.len())
    }
}

impl TrajectorySource for Vec<Frame> {
    fn open(&self) -> Result<FrameStream<'_>, XyzError> {
        self.as_slice().open()
    }

    fn describe(&self) -> String {
        self.as_slice().describe()
    }
}
