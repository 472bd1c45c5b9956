/// A value that was produced despite some soft failures.
///
/// Batch operations collect what succeeded in `value` and what failed in
/// `errors` instead of stopping at the first failure. Callers decide whether a
/// non-empty `errors` list should change their exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial<T, E> {
    pub value: T,
    pub errors: Vec<E>,
}

impl<T, E> Partial<T, E> {
    pub fn new(value: T, errors: Vec<E>) -> Self {
        Self { value, errors }
    }

    /// A result with no soft errors.
    pub fn complete(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Partial<U, E> {
        Partial {
            value: f(self.value),
            errors: self.errors,
        }
    }

    pub fn into_parts(self) -> (T, Vec<E>) {
        (self.value, self.errors)
    }
}
