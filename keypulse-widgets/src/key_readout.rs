//! Key readout card: a caption plus the live scramble text.
//!
//! Two of these sit under the stations. They are blank while idle; on
//! trigger the shell calls [`KeyReadoutRef::reveal`] and the caption and
//! text fade in over half a second, then track the growing scramble string
//! via [`KeyReadoutRef::set_chars`]. On reset, [`KeyReadoutRef::conceal`]
//! blanks the card immediately.
//!
//! The fade runs on `NextFrame` with a zero sentinel for the start time,
//! captured on the first frame after `reveal`.

use makepad_widgets::*;

/// Seconds for the reveal fade-in.
pub const REVEAL_SECS: f64 = 0.5;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;

    pub KeyReadout = {{KeyReadout}} <RoundedView> {
        width: Fill, height: 130
        padding: 16
        flow: Down
        spacing: 8
        align: {x: 0.5, y: 0.5}
        show_bg: true
        draw_bg: {
            color: (CARD_BG)
            border_radius: 8.0
        }

        caption = <Label> {
            draw_text: {
                instance fade: 0.0
                color: (GRAY_900)
                text_style: { font_size: 11.0 }
                fn get_color(self) -> vec4 {
                    return self.color * self.fade;
                }
            }
        }

        chars = <Label> {
            draw_text: {
                instance fade: 0.0
                color: (GRAY_900)
                text_style: { font_size: 9.0 }
                fn get_color(self) -> vec4 {
                    return self.color * self.fade;
                }
            }
        }
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct KeyReadout {
    #[deref]
    view: View,

    #[rust]
    fade_active: bool,

    /// Absolute start time; 0.0 means "capture on next frame"
    #[rust]
    fade_start: f64,
}

impl Widget for KeyReadout {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        if let Event::NextFrame(nf) = event {
            if self.fade_active {
                if self.fade_start == 0.0 {
                    self.fade_start = nf.time;
                }
                let elapsed = nf.time - self.fade_start;
                let t = (elapsed / REVEAL_SECS).min(1.0);
                // Smoothstep for ease-in-out
                let fade = t * t * (3.0 - 2.0 * t);
                self.apply_fade(cx, fade);

                if elapsed >= REVEAL_SECS {
                    self.fade_active = false;
                } else {
                    cx.new_next_frame();
                }
                self.view.redraw(cx);
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl KeyReadout {
    fn apply_fade(&mut self, cx: &mut Cx, fade: f64) {
        self.view.label(ids!(caption)).apply_over(
            cx,
            live! {
                draw_text: { fade: (fade) }
            },
        );
        self.view.label(ids!(chars)).apply_over(
            cx,
            live! {
                draw_text: { fade: (fade) }
            },
        );
    }

    /// Start the fade-in. Call on cycle trigger.
    pub fn reveal(&mut self, cx: &mut Cx) {
        self.fade_active = true;
        self.fade_start = 0.0;
        cx.new_next_frame();
    }

    /// Blank the card immediately. Call on cycle reset.
    pub fn conceal(&mut self, cx: &mut Cx) {
        self.fade_active = false;
        self.apply_fade(cx, 0.0);
        self.view.redraw(cx);
    }

    /// Republish the scramble text.
    pub fn set_chars(&mut self, cx: &mut Cx, chars: &str) {
        self.view.label(ids!(chars)).set_text(cx, chars);
    }
}

impl KeyReadoutRef {
    pub fn reveal(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.reveal(cx);
        }
    }

    pub fn conceal(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.conceal(cx);
        }
    }

    pub fn set_chars(&self, cx: &mut Cx, chars: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_chars(cx, chars);
        }
    }
}
