pub mod file;
pub mod naming;
pub mod logging;

pub use file::{ensure_directory_exists, sha256_hex, write_file};
pub use naming::{package_name, nix_string, shell_quote, store_file_name};
pub use logging::init_logging;
