//! The cancellation collaborator.
//!
//! Prime search inside [`crate::rsa::generate_key_pair`] is the one piece of
//! unbounded work in this crate (spec.md §5): the number of candidates drawn
//! before two primes pass Miller–Rabin has no fixed bound. Rather than build
//! a cancellation mechanism into the core, the search polls an injected
//! `CancellationToken` once between candidate primes — the same
//! dependency-injection shape `entropy::Entropy` uses for randomness.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled between units of long-running work to ask whether the caller has
/// asked for it to stop.
pub trait CancellationToken {
    /// Returns `true` once cancellation has been requested.
    fn is_cancelled(&self) -> bool;
}

/// Never cancels. The default for callers that have no reason to interrupt
/// key generation once it starts.
pub struct NeverCancelled;

impl CancellationToken for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A shared, thread-safe cancellation flag.
///
/// Cloning a `Flag` shares the same underlying signal: a caller hands one
/// clone to `generate_key_pair` and keeps the other to call [`Flag::cancel`]
/// from another thread (e.g. in response to a user-initiated abort).
#[derive(Clone, Default)]
pub struct Flag(Arc<AtomicBool>);

impl Flag {
    /// Creates a fresh, uncancelled flag.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Requests cancellation. Visible to every clone of this `Flag`.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl CancellationToken for Flag {
    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
