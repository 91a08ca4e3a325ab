//! Audio cues for the browser
//!
//! The hit cue is the page's `<audio id="hitSound">` element, rewound before
//! every play so rapid hits stay distinct. Wave and level stingers are
//! generated with the Web Audio API.

use web_sys::{AudioContext, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

use crate::platform::AudioCue;
use crate::settings::Settings;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    hit: Option<HtmlAudioElement>,
    volume: f32,
}

impl AudioManager {
    pub fn new(hit: Option<HtmlAudioElement>, settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - stingers disabled");
        }
        if hit.is_none() {
            log::warn!("No hit sound element - using synthesized hit");
        }
        Self {
            ctx,
            hit,
            volume: settings.effective_volume(),
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    fn context(&self) -> Option<&AudioContext> {
        let ctx = self.ctx.as_ref()?;
        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        Some(ctx)
    }

    /// Short thump when no hit sample is on the page
    fn play_synth_hit(&self) {
        let Some(ctx) = self.context() else { return };
        let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();
        let vol = self.volume;

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.1)
            .ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(70.0, t + 0.1)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.12).ok();
    }

    /// Rising arpeggio
    fn play_arpeggio(&self, notes: &[f32], gap: f64) {
        let Some(ctx) = self.context() else { return };
        let vol = self.volume;
        for (i, freq) in notes.iter().enumerate() {
            let delay = i as f64 * gap;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.5).ok();
            }
        }
    }
}

impl AudioCue for AudioManager {
    fn play_hit(&mut self) {
        if self.volume <= 0.0 {
            return;
        }
        match &self.hit {
            Some(el) => {
                el.set_volume(self.volume as f64);
                el.set_current_time(0.0);
                if let Err(e) = el.play() {
                    log::warn!("Hit sound failed: {:?}", e);
                }
            }
            None => self.play_synth_hit(),
        }
    }

    fn play_wave_clear(&mut self) {
        if self.volume > 0.0 {
            self.play_arpeggio(&[400.0, 500.0, 600.0, 800.0], 0.1);
        }
    }

    fn play_level_up(&mut self) {
        if self.volume > 0.0 {
            self.play_arpeggio(&[523.0, 659.0, 784.0, 1047.0, 1319.0], 0.08);
        }
    }
}
