use crate::utils::error::Result;

/// A scored entity with a type-level name table.
///
/// Implementors are expected to be non-copyable: do not derive `Clone` or
/// `Copy`. Construction and teardown are left to `new` and `Drop` on the
/// concrete type.
pub trait Flipp {
    /// Advances the implementor's state.
    fn update(&mut self) -> Result<()>;

    /// Snapshot of the current scores.
    fn scores(&self) -> Vec<i32>;

    fn names() -> &'static [&'static str]
    where
        Self: Sized;
}
