//! Error types for arbor-vdom.
//!
//! The reconciler itself does not validate its inputs — well-formed virtual
//! trees are a caller contract. Errors exist only for host misuse and for
//! contract violations caught during patch application.

use thiserror::Error;

/// Errors that can occur during mount and patch application.
#[derive(Debug, Error)]
pub enum VdomError {
    /// The host container already holds a mounted live tree.
    #[error("host container is already mounted")]
    AlreadyMounted,

    /// An operation required a mounted live tree, but none is present.
    #[error("host container has no mounted live tree")]
    NotMounted,

    /// A patch met a live node of the wrong kind, e.g. an in-place element
    /// update applied to a text node. Patches are only valid against the
    /// live tree rendered from the old virtual tree they were diffed from.
    #[error("patch expects a live {expected} node, found {found}")]
    KindMismatch {
        /// Node kind the patch was built for
        expected: &'static str,
        /// Node kind actually found
        found: &'static str,
    },
}

/// Result type alias for fallible VDOM operations.
pub type VdomResult<T> = Result<T, VdomError>;
