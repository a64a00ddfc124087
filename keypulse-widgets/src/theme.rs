//! Shared color constants for KeyPulse widgets and the shell layout.
//!
//! Single source of truth: widget shaders and the shell's `live_design!`
//! blocks import these via `use keypulse_widgets::theme::*;`.

use makepad_widgets::*;

live_design! {
    pub WHITE = #ffffff

    // Page + panel grays
    pub PAGE_BG = #f3f4f6
    pub CARD_BG = #ffffff
    pub GRAY_400 = #9ca3af
    pub GRAY_700 = #374151
    pub GRAY_900 = #111827

    // Station glyphs
    pub MONITOR_BODY = #374151
    pub MONITOR_SCREEN = #e5e7eb

    // Transmission link + pulse wave
    pub LINK_GREEN = #22c55e
    pub LINK_RED = #ef4444
    pub PULSE_GREEN = #4CAF50

    // Trigger button
    pub BUTTON_BLUE = #3b82f6
    pub BUTTON_BLUE_HOVER = #2563eb
}
