// SPDX-License-Identifier: MPL-2.0
//! Timing newtypes.
//!
//! Each wrapper enforces its bounds at construction time so the rest of the
//! crate never has to re-check a configured delay.

use crate::config::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SECTION_DWELL_MS, DEFAULT_TOAST_DURATION_MS,
    DEFAULT_TOAST_FADE_MS, MAX_REQUEST_TIMEOUT_SECS, MAX_SECTION_DWELL_MS, MAX_TOAST_DURATION_MS,
    MAX_TOAST_FADE_MS, MIN_REQUEST_TIMEOUT_SECS, MIN_SECTION_DWELL_MS, MIN_TOAST_DURATION_MS,
};
use std::time::Duration;

// =============================================================================
// DwellDelay
// =============================================================================

/// How long a section must stay in view before it counts as viewed.
///
/// # Example
///
/// ```
/// use portfolio_telemetry::domain::timing::DwellDelay;
///
/// let delay = DwellDelay::from_millis(1500);
/// assert_eq!(delay.as_duration().as_millis(), 1500);
///
/// // Values outside range are clamped
/// let too_short = DwellDelay::from_millis(1);
/// assert_eq!(too_short.as_duration().as_millis(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwellDelay(u64);

impl DwellDelay {
    /// Creates a dwell delay, clamping to the valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(MIN_SECTION_DWELL_MS, MAX_SECTION_DWELL_MS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DwellDelay {
    fn default() -> Self {
        Self(DEFAULT_SECTION_DWELL_MS)
    }
}

// =============================================================================
// ToastDuration
// =============================================================================

/// Default auto-dismiss delay of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a toast duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(DEFAULT_TOAST_DURATION_MS)
    }
}

// =============================================================================
// FadeDelay
// =============================================================================

/// Time a dismissed toast spends fading out before it is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDelay(u64);

impl FadeDelay {
    /// Creates a fade delay, capping it at the maximum. Zero is allowed.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.min(MAX_TOAST_FADE_MS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FadeDelay {
    fn default() -> Self {
        Self(DEFAULT_TOAST_FADE_MS)
    }
}

// =============================================================================
// RequestTimeout
// =============================================================================

/// Upper bound on a single collaborator request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(u64);

impl RequestTimeout {
    #[must_use]
    pub fn from_secs(value: u64) -> Self {
        Self(value.clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for RequestTimeout {
    fn default() -> Self {
        Self(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dwell_delay_clamps_to_valid_range() {
        assert_eq!(
            DwellDelay::from_millis(0).as_duration(),
            Duration::from_millis(MIN_SECTION_DWELL_MS)
        );
        assert_eq!(
            DwellDelay::from_millis(u64::MAX).as_duration(),
            Duration::from_millis(MAX_SECTION_DWELL_MS)
        );
    }

    #[test]
    fn dwell_delay_default_is_one_second() {
        assert_eq!(DwellDelay::default().as_duration(), Duration::from_secs(1));
    }

    #[test]
    fn toast_duration_accepts_valid_values() {
        assert_eq!(
            ToastDuration::from_millis(2500).as_duration(),
            Duration::from_millis(2500)
        );
        assert_eq!(ToastDuration::default().as_duration(), Duration::from_secs(5));
    }

    #[test]
    fn fade_delay_allows_zero_and_caps_max() {
        assert_eq!(FadeDelay::from_millis(0).as_duration(), Duration::ZERO);
        assert_eq!(
            FadeDelay::from_millis(10_000).as_duration(),
            Duration::from_millis(MAX_TOAST_FADE_MS)
        );
        assert_eq!(FadeDelay::default().as_duration(), Duration::from_millis(300));
    }

    #[test]
    fn request_timeout_clamps() {
        assert_eq!(
            RequestTimeout::from_secs(0).as_duration(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(
            RequestTimeout::from_secs(3600).as_duration(),
            Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn equality_works() {
        assert_eq!(DwellDelay::from_millis(500), DwellDelay::from_millis(500));
        assert_ne!(DwellDelay::from_millis(500), DwellDelay::from_millis(600));
    }
}
