//! HTTP protocol layer.
//!
//! Response builders, the static content-type table, and conditional
//! request support. Nothing in here knows about routes or the filesystem.

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    method_not_allowed, not_found, not_modified, options, redirect, status_payload,
};
