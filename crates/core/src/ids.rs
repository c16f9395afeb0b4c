//! Injected alternate-id generation.
//!
//! Cancel-only shipments must declare a merchant-supplied alternate
//! shipment id. Generation goes through an injected [`AltIdSource`] rather
//! than a process-global RNG so the controller stays deterministic under
//! test.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Source of merchant-side alternate shipment ids.
pub trait AltIdSource {
    /// Produce a fresh alternate shipment id.
    fn alt_shipment_id(&mut self) -> String;
}

/// Random alternate ids, `CNCL-` followed by ten digits.
#[derive(Debug)]
pub struct RandomAltIds<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomAltIds<ThreadRng> {
    /// A source backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomAltIds<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAltIds<R> {
    /// A source backed by a caller-supplied RNG.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> AltIdSource for RandomAltIds<R> {
    fn alt_shipment_id(&mut self) -> String {
        let n: u64 = self.rng.random_range(0..10_000_000_000);
        format!("CNCL-{n:010}")
    }
}

/// Deterministic source for tests and replayable runs: `prefix-1`,
/// `prefix-2`, ...
#[derive(Debug)]
pub struct SequentialAltIds {
    prefix: String,
    next: u64,
}

impl SequentialAltIds {
    /// A sequential source with the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl AltIdSource for SequentialAltIds {
    fn alt_shipment_id(&mut self) -> String {
        self.next += 1;
        format!("{}-{}", self.prefix, self.next)
    }
}
