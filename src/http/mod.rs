//! HTTP request execution
//!
//! Builds authenticated requests against the WarriorPlus API and runs
//! them with the rate-limit retry policy. An optional token bucket
//! throttle can be enabled to space requests out proactively.

mod executor;
mod throttle;

pub use executor::{Executor, RawResponse};
pub use throttle::{Throttle, ThrottleConfig};

#[cfg(test)]
mod tests;
