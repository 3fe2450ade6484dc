//! Platform-free logic for the Alpenglow marketing site.
//!
//! Everything in this crate is pure and synchronous: site configuration,
//! the loading-splash state machine, effect math, and device capability
//! detection. The `alpenglow-ui` crate wires these into the DOM.

pub mod config;
pub mod effects;
pub mod platform;
pub mod sequence;

pub use config::{AnimationSpec, ContactConfig, SiteConfig};
pub use platform::DeviceCapabilities;
pub use sequence::{LoadingPhase, LoadingSchedule, LoadingSequence, ProgressBar, SequenceEvent};
