pub mod cli;
pub mod paste;
pub mod pool;
pub mod registry;
pub mod runlog;
