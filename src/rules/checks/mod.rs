//! Rule checks
//!
//! Each check is an independent, pure function of the scanned record set,
//! registered in [`crate::rules::engine::registry`]. Checks never see each
//! other's output and never mutate a record.

pub mod entry_point;
pub mod health;
pub mod helpdoc;
pub mod keymaps;

pub use entry_point::EntryPointMinimality;
pub use health::MissingHealthCheck;
pub use helpdoc::HelpTagWellFormedness;
pub use keymaps::DirectLeaderKeymap;
