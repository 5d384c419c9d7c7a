//! Arbitrary-precision unsigned integers built from first principles:
//! values are singly linked chains of 32-bit limbs, least significant
//! first, bump-allocated from a page-granular arena that never frees.
//! Designed for growable-linear-memory hosts; no_std throughout, with
//! host heap allocation backing the arena pages in hosted builds.
//!
//! All operations run through an [`Engine`], which owns the arena and
//! the long-lived scratch chains that keep repeated multiply/divide
//! calls from churning the allocator. Anomalies are folded into defined
//! numeric results (division by zero, saturating subtraction and
//! oversized shifts all yield zero); the only failure is arena
//! exhaustion, which is fatal.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod arena;
mod arith;
mod bits;
mod chain;
mod div;
mod engine;
mod mul;
mod shift;
mod stream;

pub mod global;

pub use chain::Chain;
pub use engine::Engine;
pub use stream::LimbReader;
