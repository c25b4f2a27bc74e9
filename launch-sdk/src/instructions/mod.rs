pub mod builder;
pub mod pool;

pub use builder::*;
pub use pool::*;
