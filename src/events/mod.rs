pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_chat_input, wire_global_keydown};
pub use pointer::{wire_hover_effects, wire_pointer_handlers};

use crate::audio::ToneAnalyser;
use crate::constants::*;
use crate::dom;
use crate::frame::Clock;
use folio_core::{Portfolio, UiEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub portfolio: Rc<RefCell<Portfolio>>,
    pub audio: Rc<ToneAnalyser>,
    pub clock: Clock,
}

impl EventWiring {
    /// Hand a UI event to the page state. Never called while the frame loop
    /// holds the borrow: both run to completion on the same thread.
    pub fn dispatch(&self, event: UiEvent) {
        let now = self.clock.now_ms();
        log::debug!("[event] {:?} at {:.0}ms", event, now);
        self.portfolio.borrow_mut().handle(event, now);
    }
}

pub fn wire_click_handlers(document: &web::Document, w: &EventWiring) {
    for id in [FLIP_BUTTON_ID, BACK_BUTTON_ID] {
        let w = w.clone();
        dom::add_click_listener(document, id, move || {
            w.audio.resume();
            w.dispatch(UiEvent::FlipCard);
        });
    }

    for btn in dom::query_all(document, SECTION_BUTTON_SELECTOR) {
        let Some(section) = btn
            .get_attribute(SECTION_ATTR)
            .and_then(|name| name.parse().ok())
        else {
            continue;
        };
        let w = w.clone();
        dom::add_listener(&btn, "click", move || w.dispatch(UiEvent::SelectSection(section)));
    }

    let theme = w.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        theme.dispatch(UiEvent::ToggleTheme)
    });

    for id in [CHATBOT_TOGGLE_ID, CHATBOT_CLOSE_ID] {
        let w = w.clone();
        dom::add_click_listener(document, id, move || w.dispatch(UiEvent::ToggleChat));
    }

    let send = w.clone();
    let doc = document.clone();
    dom::add_click_listener(document, CHAT_SEND_ID, move || submit_chat(&doc, &send));
}

/// Move the chat input's text into the log and clear the field.
pub(crate) fn submit_chat(document: &web::Document, w: &EventWiring) {
    let Some(input) = document
        .get_element_by_id(CHAT_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let text = input.value();
    if text.trim().is_empty() {
        return;
    }
    input.set_value("");
    w.dispatch(UiEvent::SubmitChat(text));
}
