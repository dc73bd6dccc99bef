//! sfdgen CLI library.
//!
//! This crate provides the conversion command behind the `sfdgen` binary:
//! load a note sheet, encode it as SFD, report the result.

pub mod commands;
