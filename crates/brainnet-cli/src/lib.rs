//! Command-line front end for the Brain_Net services.
//!
//! The binary in `main.rs` is the composition root; this library holds the
//! parser and the pieces of startup that can be tested without a socket.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing as _;

pub mod logging;
pub mod parser;

pub use logging::init_tracing;
pub use parser::{Cli, Commands, ServeArgs};
