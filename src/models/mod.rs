pub mod record;
pub mod summary;

pub use record::{Line, Record};
pub use summary::Summary;
