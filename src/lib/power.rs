//! Calculator of the dynamic power of on-chip systems.

#[cfg(test)]
extern crate assert;

#[macro_use]
extern crate log;

extern crate sql;
extern crate sqlite;

#[macro_use]
mod macros;

mod result;

pub mod application;
pub mod dynamic;
pub mod platform;
pub mod profile;
pub mod schedule;

pub use result::{Error, Result};

pub use application::{Application, Task};
pub use dynamic::{Power, Progress};
pub use platform::{Element, Platform};
pub use profile::Profile;
pub use schedule::Schedule;
