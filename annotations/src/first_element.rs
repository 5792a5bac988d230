//! Optional access to the first element of a sequence.

/// Return the first element of `lst`, or `None` when it is empty.
pub fn safe_first_element<T>(lst: &[T]) -> Option<&T> {
    lst.first()
}
