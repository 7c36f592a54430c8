use std::sync::OnceLock;

/// A value computed on first access and cached afterwards.
///
/// Meant as a struct field next to the data it is derived from:
///
/// ```
/// use dialogkit_core::utils::lazy::LazyValue;
///
/// struct Featurizer {
///     states: Vec<String>,
///     num_states: LazyValue<usize>,
/// }
///
/// impl Featurizer {
///     fn state_count(&self) -> usize {
///         *self.num_states.get_or_compute(|| self.states.len())
///     }
/// }
///
/// let f = Featurizer { states: vec!["a".into()], num_states: LazyValue::new() };
/// assert_eq!(f.state_count(), 1);
/// ```
#[derive(Debug)]
pub struct LazyValue<T> {
    cell: OnceLock<T>,
}

impl<T> LazyValue<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached value, running `compute` first if there is none yet
    pub fn get_or_compute<F: FnOnce() -> T>(&self, compute: F) -> &T {
        self.cell.get_or_init(compute)
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for LazyValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LazyValue<T> {
    fn clone(&self) -> Self {
        let cell = OnceLock::new();
        if let Some(value) = self.cell.get() {
            let _ = cell.set(value.clone());
        }
        Self { cell }
    }
}
