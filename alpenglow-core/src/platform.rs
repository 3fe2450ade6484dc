//! Device capability detection.
//!
//! The contact actions need to know one thing: is a native phone/mail
//! handler likely available? The answer currently comes from a user-agent
//! substring check, which is fragile; isolating it here keeps every call
//! site on the [`DeviceCapabilities`] type so the heuristic can be swapped
//! without touching them.

/// User-agent fragments that indicate a device with native tel/mailto
/// handlers.
const MOBILE_UA_FRAGMENTS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// What the current device can plausibly do with `tel:` and `mailto:`
/// links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// True when tapping a tel/mailto link is expected to launch a native
    /// handler rather than dead-end in the browser.
    pub native_handlers: bool,
}

impl DeviceCapabilities {
    /// Derive capabilities from a user-agent string (case-insensitive
    /// substring match).
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        Self {
            native_handlers: MOBILE_UA_FRAGMENTS.iter().any(|f| ua.contains(f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iphone_has_native_handlers() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
                  AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
        assert!(DeviceCapabilities::from_user_agent(ua).native_handlers);
    }

    #[test]
    fn android_has_native_handlers() {
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36";
        assert!(DeviceCapabilities::from_user_agent(ua).native_handlers);
    }

    #[test]
    fn desktop_chrome_does_not() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        assert!(!DeviceCapabilities::from_user_agent(ua).native_handlers);
    }

    #[test]
    fn desktop_macos_safari_does_not() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
        assert!(!DeviceCapabilities::from_user_agent(ua).native_handlers);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(DeviceCapabilities::from_user_agent("SOMETHING IPAD SOMETHING").native_handlers);
    }

    #[test]
    fn empty_user_agent_means_no_native_handlers() {
        assert!(!DeviceCapabilities::from_user_agent("").native_handlers);
    }
}
