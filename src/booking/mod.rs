mod estimate;
mod recorder;
mod time;

pub use estimate::{estimate, Estimate};
pub use recorder::{BookingReceipt, BookingRecorder};
pub use time::{parse_clock_time, session_hours};
