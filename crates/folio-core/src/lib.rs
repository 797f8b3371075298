pub mod chat;
pub mod color;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod particles;
pub mod pointer;
pub mod portfolio;
pub mod skills;
pub mod surface;
pub mod timer;
pub mod view;
pub mod visualizer;

pub use chat::*;
pub use color::Color;
pub use config::*;
pub use effects::*;
pub use error::FolioError;
pub use particles::*;
pub use pointer::*;
pub use portfolio::*;
pub use skills::*;
pub use surface::*;
pub use timer::*;
pub use view::*;
pub use visualizer::*;
