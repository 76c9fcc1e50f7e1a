//! Command implementations

mod check;
mod list;
mod log;
mod show;
mod status;

pub use check::check;
pub use list::list;
pub use log::log_failure;
pub use show::show;
pub use status::set_status;
