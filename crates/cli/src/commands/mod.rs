pub mod atm;
pub mod guess;
pub mod init;

pub use atm::{atm_command, run_session};
pub use guess::{guess_command, play};
pub use init::init_command;
