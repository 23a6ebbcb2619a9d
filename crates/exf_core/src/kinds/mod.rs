//! Built-in error kinds.

crate::exception_type! {
    /// A caller passed an argument that violates a precondition.
    pub struct IllegalArgument;
}

crate::exception_type! {
    /// An operation was invoked while the receiver is in the wrong state.
    pub struct IllegalState;
}

crate::exception_type! {
    /// The requested operation is not supported by the receiver.
    pub struct UnsupportedOperation;
}

#[cfg(test)]
mod tests;
