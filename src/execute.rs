//! The `.get()` entry point of request builders
//!
//! [`DataRequest`](crate::request::data::DataRequest) implements [`Execute`]: `.get()` checks
//! the parameters, sends the request once and hands the answer to the builder's processor.

use crate::error::Result;

/// Run a prepared request.
///
/// The output depends on the builder's processor: a
/// [`SolcastResponse`](crate::SolcastResponse) by default, or a `DataFrame` after `.table()`.
/// Invalid parameter combinations fail before anything is sent.
pub trait Execute {
    /// What the request resolves to
    type Output;

    /// Validate, send and process the request
    fn get(self) -> impl std::future::Future<Output = Result<Self::Output>>;
}
