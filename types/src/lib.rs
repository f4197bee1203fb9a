//! Shared configuration types for the hunt scouter.
//!
//! Kept free of runtime dependencies so both the pipeline library and the
//! command line front end can agree on what a scouting session looks like.

pub mod config;
pub mod duration;

pub use config::{ConfigError, Expansion, ScoutConfig, ShareLink, parse_expansion_list};
pub use duration::{format_go_duration, parse_go_duration};
