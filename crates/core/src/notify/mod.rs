//! User-facing notices.
//!
//! Services report advisory messages (slow fetches, failed writes, rejected
//! handles) through the [`Notifier`] trait. The host application decides how
//! to surface them; [`LogNotifier`] is the default sink.

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Sink for user-facing notices.
///
/// Implementations must be cheap and non-blocking; services call this from
/// async contexts.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Notifier that writes notices to the application log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => log::info!("{message}"),
            NoticeLevel::Warning => log::warn!("{message}"),
            NoticeLevel::Error => log::error!("{message}"),
        }
    }
}
