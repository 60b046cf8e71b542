pub mod prelude;
pub mod task;
