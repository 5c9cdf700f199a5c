pub mod controller;
pub mod feedback;
pub mod session;

pub use controller::{Controller, Direction, Navigation};
pub use feedback::{Feedback, FeedbackKind, FeedbackSink};
