//! Toast visibility state machine
//!
//! Models the transient-notification lifecycle as an explicit state machine
//! with derived delayed transitions. The driver owns the actual timers;
//! [`ToastPhase::pending`] names the single delay that may be outstanding in
//! any phase, so cancelling and rescheduling on every phase or parameter
//! change keeps at most one timer live per toast.
use serde::{Deserialize, Serialize};

/// Grace period between hiding a toast and releasing the host, leaving room
/// for an exit animation.
pub const EXIT_GRACE_MS: u32 = 300;

/// Auto-dismiss delay used when the host does not pick one.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

/// Severity of a toast message; drives icon and color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Error => "!",
        }
    }

    /// Get i18n key for the severity announced to assistive technology
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Info => "toast.kind.info",
            Self::Success => "toast.kind.success",
            Self::Error => "toast.kind.error",
        }
    }
}

/// Lifecycle phase of a mounted toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Message is on screen.
    Visible,
    /// Message is off screen; the host has not been released yet.
    Hiding,
    /// Terminal. The host may discard the toast whenever it likes.
    Gone,
}

/// Signals that advance a [`ToastPhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSignal {
    /// The auto-dismiss countdown ran out.
    Expired,
    /// The user activated the close affordance.
    Dismissed,
    /// The exit grace window elapsed.
    GraceElapsed,
}

impl ToastPhase {
    /// Phase a toast starts in. A toast constructed hidden never enters
    /// `Visible`.
    #[must_use]
    pub const fn initial(show: bool) -> Self {
        if show { Self::Visible } else { Self::Gone }
    }

    /// Whether the toast has any DOM presence in this phase.
    #[must_use]
    pub const fn is_rendered(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Advance the machine. Signals that do not apply to the current phase
    /// come from stale timers and are ignored; `Gone` is terminal.
    #[must_use]
    pub const fn step(self, signal: ToastSignal) -> Self {
        match (self, signal) {
            (Self::Visible, ToastSignal::Expired | ToastSignal::Dismissed) => Self::Hiding,
            (Self::Hiding, ToastSignal::GraceElapsed) => Self::Gone,
            (current, _) => current,
        }
    }

    /// The one delayed transition that may be outstanding in this phase:
    /// the delay in milliseconds and the signal to feed back through
    /// [`ToastPhase::step`]. A zero `duration_ms` disables auto-dismiss, so
    /// a visible toast then only moves on [`ToastSignal::Dismissed`].
    #[must_use]
    pub const fn pending(self, duration_ms: u32) -> Option<(u32, ToastSignal)> {
        match self {
            Self::Visible => {
                if duration_ms > 0 {
                    Some((duration_ms, ToastSignal::Expired))
                } else {
                    None
                }
            }
            Self::Hiding => Some((EXIT_GRACE_MS, ToastSignal::GraceElapsed)),
            Self::Gone => None,
        }
    }
}
