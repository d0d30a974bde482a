//! Toast model
//!
//! A toast is the page's single-slot status banner: one message, one
//! severity, overwritten by whichever call comes last. The UI crate owns
//! showing/hiding; this module owns the data and the severity → presentation
//! mapping so components never branch on severity themselves.

use std::time::Duration;

/// How long a toast stays visible before its hide timer fires
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    /// Confirmation feedback - green background, checkmark icon
    #[default]
    Success,
    /// Rejection feedback - red background, alert icon
    Error,
}

impl ToastLevel {
    /// CSS modifier class for the toast container
    pub fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast--success",
            ToastLevel::Error => "toast--error",
        }
    }

    /// Name of the Lucide icon rendered next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "check-circle",
            ToastLevel::Error => "alert-circle",
        }
    }
}

/// One banner's worth of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(Toast::success("ok").level, ToastLevel::Success);
        assert_eq!(Toast::error("no").level, ToastLevel::Error);
        assert_eq!(Toast::success("ok").message, "ok");
    }

    #[test]
    fn test_level_presentation_mapping() {
        assert_eq!(ToastLevel::Success.class(), "toast--success");
        assert_eq!(ToastLevel::Error.class(), "toast--error");
        assert_eq!(ToastLevel::Success.icon(), "check-circle");
        assert_eq!(ToastLevel::Error.icon(), "alert-circle");
    }

    #[test]
    fn test_default_level_is_success() {
        // Callers that don't pick a severity get the source's default.
        assert_eq!(ToastLevel::default(), ToastLevel::Success);
    }

    #[test]
    fn test_duration() {
        assert_eq!(TOAST_DURATION, Duration::from_millis(3000));
    }
}
