//! Version-control adapters.

mod git_probe;

pub use git_probe::GitProbe;
