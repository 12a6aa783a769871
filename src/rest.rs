//! REST API endpoints for Solcast
//!
//! One function per (horizon, product) pair. Each returns a [`DataRequest`] builder;
//! call `.get()` to execute it.
//!
//! [`DataRequest`]: crate::request::data::DataRequest
pub mod forecast;
pub mod historic;
pub mod live;
