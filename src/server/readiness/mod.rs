//! Startup readiness gate.
//!
//! Before the server binds its port it verifies that the identity service, the
//! notification service and the database are usable. Each attempt probes all three
//! concurrently and is healthy only when every probe is; failed attempts are retried with
//! a fixed delay up to a bounded number of attempts. The bootstrap sequence in `main`
//! treats a final `false` as fatal.

pub mod gate;
pub mod probe;

#[cfg(test)]
mod test;

pub use gate::ReadinessGate;
