//! Interactive menu programs (rofi, dmenu, ...) used to pick a profile.

pub mod chooser;
pub mod process;
pub mod resolver;

pub use chooser::{choose, invocation_args};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use resolver::{PathLookup, SystemPathLookup, resolve};
