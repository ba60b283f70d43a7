//! Exemplar - Core Library
//!
//! Locates one representative data file per known AI coding tool and
//! produces a row-bounded example copy of it for use as fixture data.

pub mod error;
pub mod locator;
pub mod provider;
pub mod sampler;

pub use error::*;
pub use locator::*;
pub use provider::*;
pub use sampler::*;
