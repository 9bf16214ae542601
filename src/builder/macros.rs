//! Macros for declaring automata inline.

/// Declare an automaton and build it.
///
/// States are identifiers; symbols may be identifiers or literals. Expands to
/// an [`AutomatonBuilder`](crate::builder::AutomatonBuilder) chain and
/// evaluates to `Result<Automaton, DefinitionError>`.
///
/// # Example
///
/// ```
/// use dfa_sim::dfa;
///
/// let parity = dfa! {
///     states: [even, odd],
///     alphabet: [0, 1],
///     start: even,
///     accepting: [even],
///     transitions: {
///         (even, 0) => even,
///         (even, 1) => odd,
///         (odd, 0) => odd,
///         (odd, 1) => even,
///     }
/// }
/// .unwrap();
///
/// assert!(parity.evaluate("0110").is_accepted());
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: [$($state:ident),* $(,)?],
        alphabet: [$($symbol:tt),* $(,)?],
        start: $start:ident,
        accepting: [$($accepting:ident),* $(,)?],
        transitions: {
            $(($origin:ident, $on:tt) => $target:ident),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.state(stringify!($state)))*
            $(.symbol(stringify!($symbol)))*
            .start(stringify!($start))
            $(.accepting_state(stringify!($accepting)))*
            $(.transition(stringify!($origin), stringify!($on), stringify!($target)))*
            .build()
    };
}
