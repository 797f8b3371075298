//! Card orientation and section navigation.

use crate::error::FolioError;
use crate::pointer::CardTransform;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Front,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Navigation order, as laid out in the section button bar.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Id of the panel element that shows this section.
    pub fn element_id(self) -> String {
        format!("{}-section", self.name())
    }

    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(self) -> Section {
        let n = Section::ALL.len();
        Section::ALL[(self.index() + n - 1) % n]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|sec| sec.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FolioError::UnknownSection(s.to_string()))
    }
}

/// Keys the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    NextSection,
    PrevSection,
    Escape,
    UniverseMode,
}

impl KeyCommand {
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(KeyCommand::NextSection),
            "ArrowLeft" => Some(KeyCommand::PrevSection),
            "Escape" => Some(KeyCommand::Escape),
            "u" | "U" => Some(KeyCommand::UniverseMode),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub orientation: Orientation,
    pub active_section: Section,
    pub universe_mode: bool,
    pub chat_open: bool,
    pub card_transform: CardTransform,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            orientation: Orientation::Front,
            active_section: Section::About,
            universe_mode: false,
            chat_open: false,
            card_transform: CardTransform::Rest,
        }
    }
}

impl ViewState {
    #[inline]
    pub fn is_back(&self) -> bool {
        self.orientation == Orientation::Back
    }

    /// Section shown to the user, if any. Nothing is visible on the front face.
    pub fn visible_section(&self) -> Option<Section> {
        self.is_back().then_some(self.active_section)
    }

    /// Toggle the card. Turning to the back always lands on `About`.
    pub fn flip(&mut self) -> Orientation {
        match self.orientation {
            Orientation::Front => {
                self.orientation = Orientation::Back;
                self.active_section = Section::About;
                self.card_transform = CardTransform::Flipped;
            }
            Orientation::Back => {
                self.orientation = Orientation::Front;
                self.card_transform = CardTransform::Rest;
            }
        }
        log::debug!("[view] flipped to {:?}", self.orientation);
        self.orientation
    }

    /// Show `section`. Ignored while the card faces front.
    pub fn select_section(&mut self, section: Section) -> bool {
        if !self.is_back() {
            return false;
        }
        self.active_section = section;
        true
    }

    /// Apply a navigation key. Returns the section shown as a result of arrow
    /// navigation, if any.
    pub fn apply_key(&mut self, key: KeyCommand) -> Option<Section> {
        match key {
            KeyCommand::NextSection if self.is_back() => {
                let next = self.active_section.next();
                self.select_section(next);
                Some(next)
            }
            KeyCommand::PrevSection if self.is_back() => {
                let prev = self.active_section.prev();
                self.select_section(prev);
                Some(prev)
            }
            KeyCommand::Escape if self.is_back() => {
                self.flip();
                None
            }
            _ => None,
        }
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.universe_mode = !self.universe_mode;
        self.universe_mode
    }

    pub fn toggle_chat(&mut self) -> bool {
        self.chat_open = !self.chat_open;
        self.chat_open
    }

    /// Follow the pointer with a tilt while the card faces front.
    pub fn tilt(&mut self, x: f32, y: f32, viewport_w: f32, viewport_h: f32) {
        if !self.is_back() {
            self.card_transform = CardTransform::tilt_for(x, y, viewport_w, viewport_h);
        }
    }

    pub fn reset_tilt(&mut self) {
        if !self.is_back() {
            self.card_transform = CardTransform::Rest;
        }
    }

    /// Label of the theme toggle button.
    pub fn theme_label(&self) -> &'static str {
        if self.universe_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}
