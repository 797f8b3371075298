use super::EventWiring;
use crate::constants::*;
use crate::dom;
use folio_core::UiEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(document: &web::Document, w: &EventWiring) {
    wire_mousemove(document, w);
    wire_mouseleave(document, w);
}

fn wire_mousemove(document: &web::Document, w: &EventWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.dispatch(UiEvent::PointerMoved {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(document: &web::Document, w: &EventWiring) {
    let w = w.clone();
    dom::add_listener(document, "mouseleave", move || w.dispatch(UiEvent::PointerLeft));
}

/// Pure CSS hover effects; they do not touch page state.
pub fn wire_hover_effects(document: &web::Document) {
    for card in dom::query_all(document, PROJECT_CARD_SELECTOR) {
        let enter = card.clone();
        dom::add_listener(&card, "mouseenter", move || {
            dom::set_class(&enter, CLASS_GLOW, true);
            dom::set_style(&enter, "transform", PROJECT_HOVER_TRANSFORM);
        });
        let leave = card.clone();
        dom::add_listener(&card, "mouseleave", move || {
            dom::set_class(&leave, CLASS_GLOW, false);
            dom::set_style(&leave, "transform", PROJECT_REST_TRANSFORM);
        });
    }

    for icon in dom::query_all(document, SOCIAL_ICON_SELECTOR) {
        let enter = icon.clone();
        dom::add_listener(&icon, "mouseenter", move || {
            dom::set_style(&enter, "transform", SOCIAL_HOVER_TRANSFORM);
        });
        let leave = icon.clone();
        dom::add_listener(&icon, "mouseleave", move || {
            dom::set_style(&leave, "transform", SOCIAL_REST_TRANSFORM);
        });
    }
}
