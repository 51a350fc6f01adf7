/// A `Result` alias where the `Err` case is `linked_deque::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the checked operations on a `Deque` and its
/// iterators. None of them leave the deque modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `add_first` or `add_last` was handed `None`.
    #[error("invalid argument: null item")]
    InvalidArgument,
    /// `remove_first` or `remove_last` was called on an empty deque.
    #[error("the deque is empty")]
    EmptyCollection,
    /// `try_next` was called on an iterator with nothing left.
    #[error("no more items")]
    IterationExhausted,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!("invalid argument: null item", Error::InvalidArgument.to_string());
        assert_eq!("the deque is empty", Error::EmptyCollection.to_string());
        assert_eq!("no more items", Error::IterationExhausted.to_string());
    }
}
