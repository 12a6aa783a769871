//! Post-processing of API responses
//!
//! A processor decides what a request builder's `.get()` resolves to: the
//! [`SolcastResponse`] wrapper itself, or (feature `table`) the tabular view directly.
use crate::error::Result;
use crate::response::SolcastResponse;

#[cfg(feature = "table")]
pub mod table;

#[cfg(feature = "table")]
pub use table::Table;

/// Turns a [`SolcastResponse`] into the output of a request.
pub trait Processor {
    /// The output type of the processor
    type Output;

    /// Process the response
    fn process(&self, response: SolcastResponse) -> Result<Self::Output>;
}

/// Default processor: hands back the response wrapper untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wrapped;

impl Processor for Wrapped {
    type Output = SolcastResponse;

    fn process(&self, response: SolcastResponse) -> Result<SolcastResponse> {
        Ok(response)
    }
}
