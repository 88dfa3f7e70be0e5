//! CLI command implementations.
//!
//! Each submodule handles one command with its configuration resolution,
//! validation and execution:
//!
//! - **compare**: run the vendor comparison under a configuration
//! - **vendors**: list the vendor catalog
//! - **init**: create a default `.tcomap.toml`

pub mod compare;
pub mod init;
pub mod vendors;

pub use compare::{compare, CompareConfig};
pub use init::init_config;
pub use vendors::list_vendors;
