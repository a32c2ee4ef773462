use super::*;

pub mod detail;
pub mod init;
pub mod list;

pub use detail::*;
pub use init::*;
pub use list::*;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write the client configuration and greet the backend
  Init(InitOptions),

  /// List the papers the backend has for the day
  List(ListOptions),

  /// Show the details of a single paper
  Detail(DetailOptions),
}
