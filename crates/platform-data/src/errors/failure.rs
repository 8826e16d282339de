/// Classification for adapter failures.
///
/// Used to determine how the dashboard layer responds to a failed fetch.
///
/// # Behavior Summary
///
/// | Kind | Clear Stored Handle? | Keep Stale View? |
/// |------|---------------------|------------------|
/// | `InvalidIdentity` | Yes | No |
/// | `Transport` | No | Yes |
/// | `MalformedPayload` | No | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    /// The stored identity is wrong - the platform does not know the handle.
    ///
    /// The handle is removed from the user's profile and its cached data is
    /// discarded. The user is asked to enter a new handle.
    InvalidIdentity,

    /// A transient transport failure (DNS, connect, 5xx, timeout).
    ///
    /// The previously rendered data, if any, stays on screen alongside the
    /// failure notice. The stored handle is untouched.
    Transport,

    /// The source answered with a payload that could not be interpreted.
    ///
    /// Handled like a transport failure by callers. Never treated as a bad
    /// handle, so a source-side schema change cannot wipe user profiles.
    MalformedPayload,
}
