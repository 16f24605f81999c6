//! Shared client core for the Mini App profile shell.
//!
//! Everything here is pure and platform independent so the web shell stays a
//! thin layer of DOM and bridge plumbing. The shell resolves URLs and reads
//! host globals; this crate decides what to do with them.

pub mod env;
pub mod identity;
pub mod link;
pub mod preview;
pub mod theme;
