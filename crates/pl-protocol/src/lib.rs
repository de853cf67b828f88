pub mod intent;
pub mod report;

pub use intent::*;
pub use report::*;
