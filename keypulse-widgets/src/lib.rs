//! # KeyPulse Widgets
//!
//! Widgets and state types for the KeyPulse demo: a decorative mock of RSA
//! key generation. Nothing here performs cryptography; the crate renders a
//! bounded visual effect.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cycle`] | Generation flag and the 5 s / 100 ms / 50-step timing |
//! | [`scramble`] | 74-symbol alphabet and the append-only readout buffer |
//! | [`pulse_view`] | Square-wave pulse renderer (`NextFrame` loop) |
//! | [`key_readout`] | Caption + scramble text card with fade-in |
//! | [`theme`] | Shared `live_design!` color constants |

pub mod cycle;
pub mod key_readout;
pub mod pulse_view;
pub mod scramble;
pub mod theme;

pub use cycle::{GenerationCycle, CYCLE_SECS, STEP_COUNT, STEP_SECS};
pub use key_readout::{KeyReadout, KeyReadoutRef, KeyReadoutWidgetExt};
pub use pulse_view::{wave_is_high, PulseView, PulseViewRef, PulseViewWidgetExt};
pub use scramble::{ScrambleBuffer, ALPHABET, SCRAMBLE_LEN};

use makepad_widgets::Cx;

/// Register all KeyPulse widget live designs with Makepad.
///
/// Call from the app's `LiveRegister::live_register`, after
/// `makepad_widgets::live_design(cx)`. Theme constants register first so the
/// widget shaders can resolve them.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
    pulse_view::live_design(cx);
    key_readout::live_design(cx);
}
