#![doc = include_str!("../README.md")]

mod brackets;
mod capture;
mod config;
mod convert;
mod error;
mod escape;
mod scan;
mod tokens;

pub use crate::capture::{Any, Capture};
pub use crate::config::{Config, ConfigBuilder, Feature, Preset};
pub use crate::convert::convert;
pub use crate::error::Error;
