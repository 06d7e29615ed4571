//! Control structures for stack-safe recursion.
//!
//! This module provides [`Trampoline`], a data structure for expressing
//! recursive computations without consuming call-stack frames. It exists
//! because the sort routine in this crate restarts its scan once per
//! adjacent inversion, so a reverse-sorted input of length `n` produces
//! on the order of `n²` nested recursive steps.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::control::Trampoline;
//!
//! fn count_down(n: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(0)
//!     } else {
//!         Trampoline::suspend(move || count_down(n - 1))
//!     }
//! }
//!
//! // This would overflow the stack with regular recursion.
//! assert_eq!(count_down(1_000_000).run(), 0);
//! ```

mod trampoline;

pub use trampoline::Trampoline;
