//! Stack-safe recursion via trampolining.
//!
//! Rust does not guarantee tail call optimization, so a deeply recursive
//! function can overflow the stack even when every call is in tail
//! position. Trampolining represents each recursive step as data and
//! interprets the steps in a loop, converting recursion into iteration
//! with constant stack usage.

/// A data structure for stack-safe tail recursion.
///
/// `Trampoline<A>` represents a potentially recursive computation that
/// produces a value of type `A`. A computation is either finished
/// (`Done`) or suspended behind a thunk that yields the next state
/// (`Suspend`). Calling [`run`](Trampoline::run) interprets the states in
/// a loop until `Done` is reached.
///
/// # Type Parameters
///
/// * `A` - The type of the final result. Must be `'static` because the
///   suspended steps are boxed closures.
///
/// # Examples
///
/// ```rust
/// use ordseq::control::Trampoline;
///
/// fn count_up(current: u64, limit: u64) -> Trampoline<u64> {
///     if current >= limit {
///         Trampoline::done(current)
///     } else {
///         Trampoline::suspend(move || count_up(current + 1, limit))
///     }
/// }
///
/// assert_eq!(count_up(0, 100_000).run(), 100_000);
/// ```
pub enum Trampoline<A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation is suspended and needs another step.
    ///
    /// The boxed function returns the next state of the trampoline.
    Suspend(Box<dyn FnOnce() -> Trampoline<A> + 'static>),
}

impl<A> Trampoline<A> {
    /// Creates a completed trampoline with the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::control::Trampoline;
    ///
    /// let trampoline = Trampoline::done(42);
    /// assert_eq!(trampoline.run(), 42);
    /// ```
    #[inline]
    pub fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a suspended trampoline that will continue with the given
    /// thunk.
    ///
    /// The thunk is not evaluated until [`run`](Trampoline::run) reaches
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(42));
    /// assert_eq!(trampoline.run(), 42);
    /// ```
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Trampoline<A> + 'static,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Runs the trampoline to completion and returns the final value.
    ///
    /// Evaluation is iterative; the stack depth stays constant no matter
    /// how many suspended steps the computation produces.
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(thunk) => {
                    current = thunk();
                }
            }
        }
    }
}
