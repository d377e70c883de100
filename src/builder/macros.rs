//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from identifiers.
///
/// States are declared in the order written. Each state lists its
/// `event => target` transitions; a state with no transitions uses `{}`.
///
/// # Example
///
/// ```
/// use retrace::machine_config;
///
/// let config = machine_config! {
///     initial: idle,
///     idle { start => running },
///     running { stop => idle, pause => paused },
///     paused { resume => running },
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        $(
            $state:ident { $($event:ident => $target:ident),* $(,)? }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::StateTable::new();
        $(
            states.insert(
                stringify!($state),
                $crate::core::StateDefinition::new()
                    $(.on(stringify!($event), stringify!($target)))*,
            );
        )*
        $crate::core::MachineConfig {
            initial: $crate::core::StateId::from(stringify!($initial)),
            states,
        }
    }};
}
