//! Error type for the safe Rust surface, mapped to C-ABI status codes at
//! the [`crate::ffi`] boundary.

/// Errors the safe API can report.
///
/// The hot path (block compression, the ARX mixer, the sponge) is total and
/// performs no allocation; the only failure this crate recognizes is a
/// caller passing a null pointer or an otherwise invalid argument across the
/// FFI boundary. There is no logging, retry, or out-of-band reporting
/// channel — callers observe failures exclusively through the returned
/// status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QvortexError {
    /// A required pointer was null, or a length/pointer pair was
    /// inconsistent (e.g. a null data pointer with a non-zero length).
    #[error("null pointer or invalid argument")]
    NullPointer,
}

/// C-ABI status codes returned by every function in [`crate::ffi`].
///
/// `NULL_POINTER` and `ALLOC_FAILURE` are negative so that `status == 0`
/// always means success, matching the convention of the legacy binary
/// interface this crate preserves.
pub mod status {
    /// Operation completed successfully.
    pub const SUCCESS: i32 = 0;
    /// A required pointer was null, or a length/pointer pair was invalid.
    pub const NULL_POINTER: i32 = -1;
    /// Reserved: the hot path never allocates, so this is never returned.
    pub const ALLOC_FAILURE: i32 = -2;
}

impl QvortexError {
    pub(crate) fn to_status(self) -> i32 {
        match self {
            QvortexError::NullPointer => status::NULL_POINTER,
        }
    }
}
