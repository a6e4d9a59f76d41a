//! Macros for ergonomic state definitions.

/// Generate the `data`/`data_mut` accessors of [`State`](crate::core::State)
/// for a struct field holding the data pack.
///
/// Invoke it inside the `impl State<D> for ...` block.
///
/// # Example
///
/// ```
/// use handover::core::State;
/// use handover::state_data;
///
/// #[derive(Clone, Default, Debug)]
/// struct Drum {
///     water: bool,
/// }
///
/// #[derive(Default)]
/// struct Idle {
///     drum: Drum,
/// }
///
/// impl State<Drum> for Idle {
///     state_data!(drum: Drum);
///
///     fn describe(&self) -> &str {
///         "IDLE"
///     }
/// }
///
/// let mut idle = Idle::default();
/// idle.set_data(Drum { water: true });
/// assert!(idle.data().water);
/// ```
#[macro_export]
macro_rules! state_data {
    ($field:ident : $data:ty) => {
        fn data(&self) -> &$data {
            &self.$field
        }

        fn data_mut(&mut self) -> &mut $data {
            &mut self.$field
        }
    };
}
