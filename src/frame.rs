use crate::audio::ToneAnalyser;
use crate::canvas::CanvasSurface;
use crate::overlay::PageElements;
use folio_core::{Portfolio, VisualizerFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since page start; the timer wheel's time base.
#[derive(Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct ParticleLoop {
    pub portfolio: Rc<RefCell<Portfolio>>,
    pub surface: CanvasSurface,
    pub page: PageElements,
    pub document: web::Document,
    pub clock: Clock,
    pub skill_progress: f32,
}

impl ParticleLoop {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        let mut portfolio = self.portfolio.borrow_mut();
        portfolio.frame(now, &mut self.surface);

        if portfolio.take_dirty() {
            self.page.sync(&self.document, &portfolio);
        }
        let progress = portfolio.skills.progress(now);
        if progress != self.skill_progress {
            self.page.sync_skills(&portfolio.skills.widths(now));
            self.skill_progress = progress;
        }
    }
}

pub struct VisualizerLoop {
    pub audio: Rc<ToneAnalyser>,
    pub surface: CanvasSurface,
    pub frame: VisualizerFrame,
}

impl VisualizerLoop {
    pub fn frame(&mut self) {
        self.audio.sample(&mut self.frame);
        self.frame.render(&mut self.surface);
    }
}

/// Drive `tick` from requestAnimationFrame until the page goes away. Frames
/// the browser skips are simply not rendered; nothing queues up.
pub fn start_loop(mut tick: impl FnMut() + 'static) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_clone = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();
        request_frame(&slot_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&slot);
}

fn request_frame(slot: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
