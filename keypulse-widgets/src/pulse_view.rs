//! # Pulse View Widget
//!
//! The "electrical pulse" surface next to the receiving station: a 105x240
//! view that strokes a left-shifting square wave while a generation cycle is
//! running and renders nothing while idle.
//!
//! ## Behavior
//!
//! - **Frame loop**: a `NextFrame` request is re-issued every frame from the
//!   first event onward, advancing `frame_count` by 1 whether or not the
//!   wave is shown. The loop dies with the widget; there is nothing else to
//!   cancel.
//! - **Active**: the wave level for column `i` at frame `t` is
//!   `floor((i + t) * 0.1) mod 2 == 0`: high at a quarter height, low at
//!   three quarters, toggling every 10 columns and shifting left one column
//!   per frame. Stroked in green, 2 px wide, starting 50 px in.
//! - **Idle**: the shader outputs transparent for every pixel, clearing the
//!   surface. The frame counter keeps running so the phase stays continuous
//!   across cycles.
//!
//! The state split follows the rest of the widget set: `#[rust]` fields hold
//! the authoritative values, pushed into shader instance uniforms with
//! `apply_over` each frame.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use keypulse_widgets::pulse_view::PulseView;
//!
//!     receiver = <View> {
//!         pulse = <PulseView> {}
//!     }
//! }
//!
//! // From the shell, on trigger / reset:
//! self.ui.pulse_view(ids!(receiver.pulse)).set_active(cx, true);
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::PULSE_GREEN;

    pub PulseView = {{PulseView}} <View> {
        width: 105, height: 240
        show_bg: true

        draw_bg: {
            instance active: 0.0
            instance wave_time: 0.0

            fn pixel(self) -> vec4 {
                let px = self.pos * self.rect_size;

                // Wave starts 50 px in; columns left of it stay clear
                let offset = 50.0;
                let col = px.x - offset;

                let high_y = self.rect_size.y * 0.25;
                let low_y = self.rect_size.y * 0.75;
                let half_stroke = 1.0;

                // floor((i + t) * 0.1) mod 2 == 0 -> high
                let phase = floor((col + self.wave_time) * 0.1);
                let is_high = 1.0 - (phase - 2.0 * floor(phase * 0.5));
                let level_y = mix(low_y, high_y, is_high);

                // Horizontal run of the current segment
                let on_level = step(abs(px.y - level_y), half_stroke);

                // Vertical connector in the first stroke-width of each
                // 10 px segment (the level flips at every boundary)
                let seg_px = (col + self.wave_time) - phase * 10.0;
                let on_edge = step(seg_px, half_stroke)
                    * step(high_y - half_stroke, px.y)
                    * step(px.y, low_y + half_stroke);

                let visible = self.active * step(0.0, col);
                return (PULSE_GREEN) * max(on_level, on_edge) * visible;
            }
        }
    }
}

/// Square-wave level for one column at one frame time.
///
/// Mirrors the pixel shader so the phase function can be checked in tests:
/// high when `floor((column + time) * 0.1) mod 2 == 0`.
pub fn wave_is_high(column: u32, time: u64) -> bool {
    ((column as u64 + time) / 10) % 2 == 0
}

#[derive(Live, LiveHook, Widget)]
pub struct PulseView {
    #[deref]
    view: View,

    /// Frames since mount. Advances every frame, never resets.
    #[rust]
    frame_count: u64,

    #[rust]
    active: bool,

    #[rust]
    loop_started: bool,
}

impl Widget for PulseView {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        // Kick off the frame loop on the first event this widget sees
        if !self.loop_started {
            self.loop_started = true;
            cx.new_next_frame();
        }

        if let Event::NextFrame(_) = event {
            self.frame_count = self.frame_count.wrapping_add(1);

            self.view.apply_over(
                cx,
                live! {
                    draw_bg: {
                        active: (if self.active { 1.0 } else { 0.0 }),
                        wave_time: (self.frame_count as f64),
                    }
                },
            );
            self.view.redraw(cx);
            cx.new_next_frame();
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl PulseView {
    /// Show or hide the wave. The frame loop keeps running either way.
    pub fn set_active(&mut self, cx: &mut Cx, active: bool) {
        self.active = active;
        self.view.apply_over(
            cx,
            live! {
                draw_bg: { active: (if active { 1.0 } else { 0.0 }) }
            },
        );
        self.view.redraw(cx);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl PulseViewRef {
    /// Show or hide the wave
    pub fn set_active(&self, cx: &mut Cx, active: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_active(cx, active);
        }
    }

    pub fn is_active(&self) -> bool {
        self.borrow().map(|inner| inner.is_active()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_float_formula() {
        // Recompute floor((i + t) * 0.1) mod 2 the way the shader does
        for t in [0u64, 1, 9, 10, 11, 57, 1000, 12345] {
            for i in 0u32..200 {
                let expected = (((i as f64 + t as f64) * 0.1).floor() as u64) % 2 == 0;
                assert_eq!(
                    wave_is_high(i, t),
                    expected,
                    "mismatch at column {} time {}",
                    i,
                    t
                );
            }
        }
    }

    #[test]
    fn test_level_toggles_every_ten_columns() {
        for i in 0..10 {
            assert!(wave_is_high(i, 0));
            assert!(!wave_is_high(i + 10, 0));
            assert!(wave_is_high(i + 20, 0));
        }
    }

    #[test]
    fn test_wave_shifts_left_one_column_per_frame() {
        for t in 0..50 {
            for i in 0..100 {
                assert_eq!(wave_is_high(i, t + 1), wave_is_high(i + 1, t));
            }
        }
    }
}
