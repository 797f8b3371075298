// Element ids, selectors and classes the page markup provides.

// Canvases
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const VISUALIZER_CANVAS_ID: &str = "visualizer";

// Card and sections
pub const CARD_ID: &str = "card-3d";
pub const FLIP_BUTTON_ID: &str = "flip-btn";
pub const BACK_BUTTON_ID: &str = "back-btn";
pub const SECTION_BUTTON_SELECTOR: &str = ".section-btn";
pub const SECTION_CONTENT_SELECTOR: &str = ".section-content";
pub const SECTION_ATTR: &str = "data-section";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const SKILL_WIDTH_ATTR: &str = "data-width";

// Theme and notification
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const EASTER_EGG_ID: &str = "easter-egg";
pub const TYPING_SELECTOR: &str = ".typing";

// Chat panel
pub const CHATBOT_ID: &str = "chatbot";
pub const CHATBOT_TOGGLE_ID: &str = "chatbot-toggle";
pub const CHATBOT_CLOSE_ID: &str = "close-chatbot";
pub const CHAT_MESSAGES_ID: &str = "chat-messages";
pub const CHAT_INPUT_ID: &str = "chat-input";
pub const CHAT_SEND_ID: &str = "send-message";

// Hover targets
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const SOCIAL_ICON_SELECTOR: &str = ".social-icon";

// Classes
pub const CLASS_FLIPPED: &str = "flipped";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_UNIVERSE: &str = "universe-mode";
pub const CLASS_GLOW: &str = "glow-accent";

// Hover transforms
pub const PROJECT_HOVER_TRANSFORM: &str = "scale(1.05)";
pub const PROJECT_REST_TRANSFORM: &str = "scale(1)";
pub const SOCIAL_HOVER_TRANSFORM: &str = "rotate(15deg) scale(1.2)";
pub const SOCIAL_REST_TRANSFORM: &str = "rotate(0) scale(1)";
