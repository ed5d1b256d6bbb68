//! CLI command handlers. Each command is in its own file for clarity.

mod clear;
mod decide;
mod observe;
mod seasons;
mod set;
mod status;

pub use clear::run_clear;
pub use decide::run_decide;
pub use observe::run_observe;
pub use seasons::run_seasons;
pub use set::run_set;
pub use status::run_status;
