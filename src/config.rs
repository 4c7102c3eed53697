use alloc::vec::Vec;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default idle period after which an untouched container drops its focus.
pub const DEFAULT_IDLE_TIMEOUT_MS: u32 = 10_000;

/// Default hold time that turns a button press into its long variant.
pub const DEFAULT_LONG_PRESS_MS: u32 = 600;

/// Runtime tunables shared by containers and input decoding.
///
/// Stored as postcard bytes so firmware can keep it in flash next to other
/// settings and the simulator can load the same blob.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    pub idle_timeout_ms: u32,
    pub long_press_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
        }
    }
}

impl UiConfig {
    pub fn with_idle_timeout_ms(mut self, ms: u32) -> Self {
        self.idle_timeout_ms = ms;
        self
    }

    pub fn with_long_press_ms(mut self, ms: u32) -> Self {
        self.long_press_ms = ms;
        self
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms as u64)
    }

    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms as u64)
    }

    /// Decode a configuration blob produced by [`UiConfig::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        postcard::from_bytes(bytes).map_err(Error::Config)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        postcard::to_allocvec(self).map_err(Error::Config)
    }
}
