#![cfg(target_arch = "wasm32")]
use folio_core::constants::VISUALIZER_HEIGHT_PX;
use folio_core::{Portfolio, PortfolioConfig, UiEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;

use constants::{PARTICLE_CANVAS_ID, VISUALIZER_CANVAS_ID};

fn size_canvases(particles: &web::HtmlCanvasElement, visualizer: &web::HtmlCanvasElement) {
    let (w, h) = dom::viewport_size();
    dom::size_canvas(particles, w, h);
    dom::size_canvas(visualizer, w, VISUALIZER_HEIGHT_PX as f32);
}

// Resizing resets the particle field to match the new viewport
fn wire_canvas_resize(
    particles: &web::HtmlCanvasElement,
    visualizer: &web::HtmlCanvasElement,
    w: events::EventWiring,
) {
    let Some(window) = web::window() else {
        return;
    };
    let particles = particles.clone();
    let visualizer = visualizer.clone();
    dom::add_listener(&window, "resize", move || {
        size_canvases(&particles, &visualizer);
        let (width, height) = dom::viewport_size();
        w.dispatch(UiEvent::Resized { width, height });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&format!("{:#}", e)));
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let clock = frame::Clock::start();

    let particle_canvas = dom::canvas_by_id(&document, PARTICLE_CANVAS_ID)?;
    let visualizer_canvas = dom::canvas_by_id(&document, VISUALIZER_CANVAS_ID)?;
    size_canvases(&particle_canvas, &visualizer_canvas);
    let particle_surface = canvas::CanvasSurface::new(particle_canvas.clone())?;
    let visualizer_surface = canvas::CanvasSurface::new(visualizer_canvas.clone())?;

    let mut page = overlay::PageElements::collect(&document)?;
    let config = PortfolioConfig::default().with_skill_targets(page.skill_targets());
    let (width, height) = dom::viewport_size();
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let portfolio = Portfolio::new(config, width, height, seed, clock.now_ms())?;
    // bars start empty until the skills section is opened
    page.sync_skills(&portfolio.skills.widths(clock.now_ms()));
    let portfolio = Rc::new(RefCell::new(portfolio));

    // Audio has to exist before anything is wired: no visualizer, no page
    let audio = Rc::new(audio::build_tone_analyser()?);

    let wiring = events::EventWiring {
        portfolio: portfolio.clone(),
        audio: audio.clone(),
        clock,
    };
    events::wire_click_handlers(&document, &wiring);
    events::wire_global_keydown(&document, wiring.clone());
    events::wire_chat_input(&document, wiring.clone());
    events::wire_pointer_handlers(&document, &wiring);
    events::wire_hover_effects(&document);
    wire_canvas_resize(&particle_canvas, &visualizer_canvas, wiring);

    let mut particles = frame::ParticleLoop {
        portfolio,
        surface: particle_surface,
        page,
        document,
        clock,
        skill_progress: 0.0,
    };
    frame::start_loop(move || particles.frame());

    let mut visualizer = frame::VisualizerLoop {
        frame: audio.frame_buffer(),
        audio,
        surface: visualizer_surface,
    };
    frame::start_loop(move || visualizer.frame());

    Ok(())
}
