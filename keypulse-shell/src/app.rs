//! KeyPulse root application.
//!
//! Lays out the page (two station glyphs, the transmission link, the pulse
//! surface, the trigger button, and the readout cards) and runs the
//! generation cycle: a click starts the 100 ms scramble interval and the
//! 5 s reset timeout; the reset puts everything back to idle.

use makepad_widgets::*;

use keypulse_widgets::{
    GenerationCycle, KeyReadoutWidgetExt, PulseViewWidgetExt, ScrambleBuffer, CYCLE_SECS,
    STEP_SECS,
};
use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Args;

static CLI_ARGS: OnceCell<Args> = OnceCell::new();

/// Stash parsed CLI args before `app_main` hands control to Makepad.
pub fn set_cli_args(args: Args) {
    let _ = CLI_ARGS.set(args);
}

fn cli_args() -> Args {
    CLI_ARGS.get().cloned().unwrap_or_default()
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use keypulse_widgets::theme::*;
    use keypulse_widgets::pulse_view::PulseView;
    use keypulse_widgets::key_readout::KeyReadout;

    // Station monitor drawn as plain SDF shapes: shell, panel, stand, base
    MonitorGlyph = <View> {
        width: 260, height: 200
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let w = self.rect_size.x;
                let h = self.rect_size.y;

                sdf.box(w * 0.05, h * 0.05, w * 0.9, h * 0.62, 6.0);
                sdf.fill((MONITOR_BODY));

                sdf.box(w * 0.10, h * 0.12, w * 0.8, h * 0.48, 3.0);
                sdf.fill((MONITOR_SCREEN));

                sdf.rect(w * 0.46, h * 0.67, w * 0.08, h * 0.14);
                sdf.fill((MONITOR_BODY));

                sdf.box(w * 0.32, h * 0.81, w * 0.36, h * 0.06, 2.0);
                sdf.fill((MONITOR_BODY));

                return sdf.result;
            }
        }
    }

    // Transmission link: a green half meeting a red half, with a green
    // center divider and a short antenna tick above the midpoint
    LinkBar = <View> {
        width: Fill, height: 24
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let px = self.pos * self.rect_size;
                let w = self.rect_size.x;
                let h = self.rect_size.y;
                let bar_top = h - 4.0;
                let center = w * 0.5;

                let in_bar = step(bar_top, px.y);
                let side = step(center, px.x);
                let bar_color = mix((LINK_GREEN), (LINK_RED), side);

                let on_divider = in_bar * step(abs(px.x - center), 1.0);
                let on_antenna = (1.0 - in_bar)
                    * step(abs(px.x - center), 0.5)
                    * step(bar_top - 16.0, px.y);

                return mix(bar_color * in_bar, (LINK_GREEN), max(on_divider, on_antenna));
            }
        }
    }

    // Trigger control: blue with hover highlight, dimmed while a cycle runs
    GenerateButton = <Button> {
        width: Fit, height: 44
        padding: {left: 24, right: 24}
        text: "Generate RSA Key"
        draw_text: {
            instance disabled: 0.0
            text_style: { font_size: 13.0 }
            fn get_color(self) -> vec4 {
                return vec4(1.0, 1.0, 1.0, 1.0) * (1.0 - 0.5 * self.disabled);
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance disabled: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                let base = mix(
                    (BUTTON_BLUE),
                    (BUTTON_BLUE_HOVER),
                    self.hover * (1.0 - self.disabled)
                );
                sdf.fill(mix(base, base * 0.5, self.disabled));
                return sdf.result;
            }
        }
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
        }
    }

    App = {{App}} {
        ui: <Window> {
            window: { inner_size: vec2(1100, 720) }
            pass: { clear_color: (PAGE_BG) }

            body = <View> {
                width: Fill, height: Fill
                flow: Down
                spacing: 32
                padding: 24
                align: {x: 0.5, y: 0.5}
                show_bg: true
                draw_bg: { color: (PAGE_BG) }

                stations_row = <View> {
                    width: Fill, height: Fit
                    flow: Right
                    spacing: 24
                    align: {y: 0.5}

                    sender_monitor = <MonitorGlyph> {}

                    link_bar = <LinkBar> {}

                    receiver_group = <View> {
                        width: Fit, height: Fit
                        flow: Right
                        spacing: 4
                        align: {y: 0.5}

                        receiver_monitor = <MonitorGlyph> {}
                        pulse = <PulseView> {}
                    }
                }

                generate_btn = <GenerateButton> {}

                readout_row = <View> {
                    width: Fill, height: Fit
                    flow: Right
                    spacing: 32

                    sender_readout = <KeyReadout> {
                        caption = { text: "Generating RSA Key..." }
                    }
                    receiver_readout = <KeyReadout> {
                        caption = { text: "Getting RSA key via electrical pulses" }
                    }
                }
            }
        }
    }
}

#[derive(Live, LiveHook)]
pub struct App {
    #[live]
    ui: WidgetRef,

    #[rust]
    started: bool,

    #[rust]
    cycle: GenerationCycle,

    #[rust]
    buffer: ScrambleBuffer,

    #[rust]
    rng: Option<StdRng>,

    #[rust]
    step_timer: Timer,

    #[rust]
    reset_timer: Timer,
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        keypulse_widgets::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        self.ui.handle_event(cx, event, &mut Scope::empty());

        // One-time setup on the first event
        if !self.started {
            self.started = true;
            self.init_rng();
        }

        if self.step_timer.is_event(event).is_some() {
            self.on_scramble_step(cx);
        }

        if self.reset_timer.is_event(event).is_some() {
            self.on_cycle_end(cx);
        }

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => return,
        };

        if self.ui.button(ids!(body.generate_btn)).clicked(actions) {
            self.on_generate_clicked(cx);
        }
    }
}

impl App {
    fn init_rng(&mut self) {
        let args = cli_args();
        self.rng = Some(match args.seed {
            Some(seed) => {
                ::log::debug!("scramble rng seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        });
    }

    fn on_generate_clicked(&mut self, cx: &mut Cx) {
        if self.cycle.is_generating() {
            // The button is dimmed and inert while a cycle runs
            ::log::debug!("trigger ignored: cycle already running");
            return;
        }

        // Stop anything left over from an earlier cycle before rescheduling,
        // so a stale tick can never append to the freshly cleared buffer
        cx.stop_timer(self.step_timer);
        cx.stop_timer(self.reset_timer);

        self.cycle.trigger();
        self.buffer.clear();

        // The k = 0 character lands at trigger time; the interval covers
        // k = 1..49, filling the buffer 100 ms before the reset fires
        self.push_scramble_char(cx);
        self.step_timer = cx.start_interval(STEP_SECS);
        self.reset_timer = cx.start_timeout(CYCLE_SECS);

        self.ui
            .pulse_view(ids!(receiver_group.pulse))
            .set_active(cx, true);
        self.ui
            .key_readout(ids!(readout_row.sender_readout))
            .reveal(cx);
        self.ui
            .key_readout(ids!(readout_row.receiver_readout))
            .reveal(cx);
        self.set_button_dimmed(cx, true);

        ::log::info!("generation cycle started");
    }

    fn on_scramble_step(&mut self, cx: &mut Cx) {
        self.push_scramble_char(cx);
        if self.buffer.is_full() {
            cx.stop_timer(self.step_timer);
            ::log::debug!("scramble readout complete at {} chars", self.buffer.len());
        }
    }

    fn push_scramble_char(&mut self, cx: &mut Cx) {
        let Some(rng) = self.rng.as_mut() else {
            return;
        };
        if !self.buffer.push_random(rng) {
            return;
        }
        let text = self.buffer.as_str();
        self.ui
            .key_readout(ids!(readout_row.sender_readout))
            .set_chars(cx, text);
        self.ui
            .key_readout(ids!(readout_row.receiver_readout))
            .set_chars(cx, text);
    }

    fn on_cycle_end(&mut self, cx: &mut Cx) {
        // Normally exhausted 100 ms earlier; stop it regardless so nothing
        // can tick across into the next cycle
        cx.stop_timer(self.step_timer);

        self.cycle.finish();
        self.ui
            .pulse_view(ids!(receiver_group.pulse))
            .set_active(cx, false);
        self.ui
            .key_readout(ids!(readout_row.sender_readout))
            .conceal(cx);
        self.ui
            .key_readout(ids!(readout_row.receiver_readout))
            .conceal(cx);
        self.set_button_dimmed(cx, false);

        ::log::info!("generation cycle finished ({} chars)", self.buffer.len());
    }

    fn set_button_dimmed(&mut self, cx: &mut Cx, dimmed: bool) {
        let value = if dimmed { 1.0 } else { 0.0 };
        self.ui.button(ids!(body.generate_btn)).apply_over(
            cx,
            live! {
                draw_bg: { disabled: (value) }
                draw_text: { disabled: (value) }
            },
        );
        self.ui.redraw(cx);
    }
}

app_main!(App);
