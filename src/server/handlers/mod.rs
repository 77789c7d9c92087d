//! HTTP handlers for the server.

pub mod gauges;
