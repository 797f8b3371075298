use folio_core::constants::{ANALYSER_FFT_SIZE, TONE_GAIN, TONE_HZ};
use folio_core::VisualizerFrame;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Synthetic tone routed through an analyser so the bars have something to show.
pub struct ToneAnalyser {
    pub ctx: web::AudioContext,
    pub analyser: web::AnalyserNode,
    _oscillator: web::OscillatorNode,
    _gain: web::GainNode,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    _ = g.gain().set_value_at_time(value, audio_ctx.current_time());
    Ok(g)
}

// Create analyser with the fixed 256-sample window (128 bins)
fn create_analyser(audio_ctx: &web::AudioContext) -> anyhow::Result<web::AnalyserNode> {
    let a = web::AnalyserNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("AnalyserNode error: {:?}", e))?;
    a.set_fft_size(ANALYSER_FFT_SIZE);
    Ok(a)
}

/// oscillator (sine, 440Hz) -> gain (0.1) -> analyser -> destination
pub fn build_tone_analyser() -> anyhow::Result<ToneAnalyser> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext error: {:?}", e))?;
    let analyser = create_analyser(&ctx)?;

    let oscillator = web::OscillatorNode::new(&ctx)
        .map_err(|e| anyhow::anyhow!("OscillatorNode error: {:?}", e))?;
    oscillator.set_type(web::OscillatorType::Sine);
    _ = oscillator
        .frequency()
        .set_value_at_time(TONE_HZ, ctx.current_time());
    let gain = create_gain(&ctx, TONE_GAIN, "Tone")?;

    oscillator
        .connect_with_audio_node(&gain)
        .map_err(|e| anyhow::anyhow!("connect osc->gain: {:?}", e))?;
    gain.connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("connect gain->analyser: {:?}", e))?;
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect analyser->destination: {:?}", e))?;
    oscillator
        .start()
        .map_err(|e| anyhow::anyhow!("oscillator start: {:?}", e))?;

    log::info!(
        "[audio] tone {}Hz, analyser {} bins",
        TONE_HZ,
        analyser.frequency_bin_count()
    );
    Ok(ToneAnalyser {
        ctx,
        analyser,
        _oscillator: oscillator,
        _gain: gain,
    })
}

impl ToneAnalyser {
    pub fn frame_buffer(&self) -> VisualizerFrame {
        VisualizerFrame::with_bins(self.analyser.frequency_bin_count() as usize)
    }

    pub fn sample(&self, frame: &mut VisualizerFrame) {
        self.analyser.get_byte_frequency_data(frame.bins_mut());
    }

    /// Browsers start contexts suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() != web::AudioContextState::Suspended {
            return;
        }
        let Ok(promise) = self.ctx.resume() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] resume failed: {:?}", e);
            }
        });
    }
}
