pub mod clock;
pub mod format;
pub mod ids;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{format_order_date, format_price};
pub use ids::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
