//! Mirrors `Portfolio` state onto the page: card, sections, theme, chat panel,
//! notification and skill bars.

use crate::constants::*;
use crate::dom;
use folio_core::{ChatMessage, Portfolio, Section, Sender, ViewState};
use web_sys as web;

/// Elements looked up once at start-up.
pub struct PageElements {
    pub card: web::Element,
    pub section_buttons: Vec<(Section, web::Element)>,
    pub section_panels: Vec<web::Element>,
    pub skill_bars: Vec<web::Element>,
    pub theme_toggle: Option<web::Element>,
    pub easter_egg: Option<web::Element>,
    pub typing: Option<web::Element>,
    pub chatbot: Option<web::Element>,
    pub chat_messages: Option<web::Element>,
    rendered_messages: usize,
}

impl PageElements {
    pub fn collect(document: &web::Document) -> anyhow::Result<Self> {
        let card = dom::element_by_id(document, CARD_ID)?;
        let mut section_buttons = Vec::new();
        for btn in dom::query_all(document, SECTION_BUTTON_SELECTOR) {
            let Some(name) = btn.get_attribute(SECTION_ATTR) else {
                continue;
            };
            match name.parse::<Section>() {
                Ok(section) => section_buttons.push((section, btn)),
                Err(e) => log::warn!("[dom] skipping section button: {}", e),
            }
        }
        Ok(Self {
            card,
            section_buttons,
            section_panels: dom::query_all(document, SECTION_CONTENT_SELECTOR),
            skill_bars: dom::query_all(document, SKILL_BAR_SELECTOR),
            theme_toggle: document.get_element_by_id(THEME_TOGGLE_ID),
            easter_egg: document.get_element_by_id(EASTER_EGG_ID),
            typing: document.query_selector(TYPING_SELECTOR).ok().flatten(),
            chatbot: document.get_element_by_id(CHATBOT_ID),
            chat_messages: document.get_element_by_id(CHAT_MESSAGES_ID),
            rendered_messages: 0,
        })
    }

    pub fn sync(&mut self, document: &web::Document, state: &Portfolio) {
        self.sync_view(document, &state.view);
        if let Some(el) = &self.easter_egg {
            dom::set_class(el, CLASS_HIDDEN, !state.notification_visible);
        }
        if let (Some(el), Some(css)) = (&self.typing, state.typing.animation_css()) {
            dom::set_style(el, "animation", css);
        }
        self.sync_chat(document, &state.chat.messages);
    }

    fn sync_view(&self, document: &web::Document, view: &ViewState) {
        dom::set_class(&self.card, CLASS_FLIPPED, view.is_back());
        dom::set_style(&self.card, "transform", &view.card_transform.to_string());

        if let Some(visible) = view.visible_section() {
            for panel in &self.section_panels {
                let shown = panel.id() == visible.element_id();
                dom::set_class(panel, CLASS_HIDDEN, !shown);
                dom::set_class(panel, CLASS_ACTIVE, shown);
            }
            for (section, btn) in &self.section_buttons {
                dom::set_class(btn, CLASS_ACTIVE, *section == visible);
            }
        }

        if let Some(body) = document.body() {
            dom::set_class(&body, CLASS_UNIVERSE, view.universe_mode);
        }
        if let Some(el) = &self.theme_toggle {
            let icon = if view.universe_mode { "fa-sun" } else { "fa-moon" };
            el.set_inner_html(&format!(
                "<i class=\"fas {} mr-2\"></i> {}",
                icon,
                view.theme_label()
            ));
        }
        if let Some(el) = &self.chatbot {
            dom::set_class(el, CLASS_OPEN, view.chat_open);
        }
    }

    fn sync_chat(&mut self, document: &web::Document, messages: &[ChatMessage]) {
        let Some(list) = &self.chat_messages else {
            return;
        };
        for msg in messages.iter().skip(self.rendered_messages) {
            let Ok(div) = document.create_element("div") else {
                continue;
            };
            _ = div.class_list().add_4("bg-gray-700", "p-3", "rounded-lg", "max-w-xs");
            if msg.sender == Sender::User {
                _ = div.class_list().add_3("ml-auto", "bg-primary", "bg-opacity-20");
            }
            let p = document.create_element("p");
            if let Ok(p) = p {
                _ = p.class_list().add_1("text-sm");
                p.set_text_content(Some(&msg.text));
                _ = div.append_child(&p);
            }
            _ = list.append_child(&div);
        }
        if messages.len() > self.rendered_messages {
            list.set_scroll_top(list.scroll_height());
            self.rendered_messages = messages.len();
        }
    }

    /// Apply the current skill bar widths.
    pub fn sync_skills(&self, widths: &[f32]) {
        for (bar, width) in self.skill_bars.iter().zip(widths) {
            dom::set_style(bar, "width", &format!("{}%", width));
        }
    }

    /// Target widths from the bars' `data-width` attributes.
    pub fn skill_targets(&self) -> Vec<f32> {
        self.skill_bars
            .iter()
            .map(|bar| {
                let raw = bar.get_attribute(SKILL_WIDTH_ATTR).unwrap_or_default();
                folio_core::parse_skill_width(&raw).unwrap_or_else(|e| {
                    log::warn!("[skills] {}", e);
                    0.0
                })
            })
            .collect()
    }
}
