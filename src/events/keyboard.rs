use super::EventWiring;
use crate::constants::CHAT_INPUT_ID;
use folio_core::{KeyCommand, UiEvent};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &EventWiring) {
    let key = ev.key();
    // typing into the chat box must not navigate or trigger the easter egg
    if ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some()
    {
        return;
    }
    let Some(command) = KeyCommand::from_key(&key) else {
        return;
    };
    w.audio.resume();
    if matches!(command, KeyCommand::NextSection | KeyCommand::PrevSection) {
        ev.prevent_default();
    }
    w.dispatch(UiEvent::Key(command));
}

pub fn wire_global_keydown(document: &web::Document, w: EventWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Enter in the chat input sends the message
pub fn wire_chat_input(document: &web::Document, w: EventWiring) {
    let Some(input) = document.get_element_by_id(CHAT_INPUT_ID) else {
        return;
    };
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Enter" {
            super::submit_chat(&doc, &w);
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref());
    closure.forget();
}
