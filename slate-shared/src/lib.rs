#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Shared data transfer models for the Slate LMS platform.
//!
//! Everything in this crate crosses the wire between the web client and the
//! remote REST API. The client treats these payloads as opaque records: it
//! renders them and sends them back, but business rules (grading policy,
//! enrollment limits, authorization) live on the server.

pub mod models;
