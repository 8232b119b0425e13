//! Notification configuration value object

/// Immutable per-session notification snapshot, read once at Start.
/// The subordinate flags are meaningful only when notifications are
/// enabled; the constructor zeroes them otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationConfig {
    enabled: bool,
    always_on_top: bool,
    block_until_acknowledged: bool,
}

impl NotificationConfig {
    /// Build from the frontend toggles
    pub fn new(enabled: bool, always_on_top: bool, block_until_acknowledged: bool) -> Self {
        Self {
            enabled,
            always_on_top: enabled && always_on_top,
            block_until_acknowledged: enabled && block_until_acknowledged,
        }
    }

    /// Notifications disabled entirely
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    /// Whether phase progression waits for the notification to be dismissed
    pub fn blocks_until_acknowledged(&self) -> bool {
        self.block_until_acknowledged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_is_all_false() {
        let config = NotificationConfig::disabled();
        assert!(!config.is_enabled());
        assert!(!config.always_on_top());
        assert!(!config.blocks_until_acknowledged());
    }

    #[test]
    fn subordinate_flags_zeroed_when_disabled() {
        let config = NotificationConfig::new(false, true, true);
        assert!(!config.always_on_top());
        assert!(!config.blocks_until_acknowledged());
    }

    #[test]
    fn subordinate_flags_kept_when_enabled() {
        let config = NotificationConfig::new(true, true, false);
        assert!(config.is_enabled());
        assert!(config.always_on_top());
        assert!(!config.blocks_until_acknowledged());

        let config = NotificationConfig::new(true, false, true);
        assert!(config.blocks_until_acknowledged());
    }
}
