pub mod check;
pub mod init;
pub mod package_dirs;
pub mod retrieve;

pub use check::check_command;
pub use init::init_command;
pub use package_dirs::package_dirs_command;
pub use retrieve::retrieve_command;
