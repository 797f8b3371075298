//! Frequency bar layout for the audio visualizer strip.

use crate::color::Color;
use crate::constants::{ANALYSER_BINS, BAR_GAP_PX, BAR_WIDTH_FACTOR};
use crate::surface::{Fill, Surface};

pub const GRADIENT_TOP: Color = Color::rgb(0x00, 0xf3, 0xff);
pub const GRADIENT_BOTTOM: Color = Color::rgb(0x9d, 0x4e, 0xdd);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Byte magnitudes of one analyser snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerFrame {
    pub bins: Vec<u8>,
}

impl Default for VisualizerFrame {
    fn default() -> Self {
        Self::with_bins(ANALYSER_BINS)
    }
}

impl VisualizerFrame {
    pub fn with_bins(count: usize) -> Self {
        Self {
            bins: vec![0; count],
        }
    }

    /// Buffer handed to the analyser each frame.
    pub fn bins_mut(&mut self) -> &mut [u8] {
        &mut self.bins
    }

    #[inline]
    pub fn bar_width(&self, canvas_width: f32) -> f32 {
        if self.bins.is_empty() {
            return 0.0;
        }
        canvas_width / self.bins.len() as f32 * BAR_WIDTH_FACTOR
    }

    /// Bottom-aligned bars, left to right, `bar_width + 1` apart.
    pub fn bars(&self, canvas_width: f32, canvas_height: f32) -> impl Iterator<Item = Bar> + '_ {
        let width = self.bar_width(canvas_width);
        self.bins.iter().enumerate().map(move |(i, v)| {
            let height = *v as f32 / 2.0;
            Bar {
                x: i as f32 * (width + BAR_GAP_PX),
                y: canvas_height - height,
                width,
                height,
            }
        })
    }

    pub fn render(&self, surface: &mut impl Surface) {
        let (w, h) = surface.size();
        surface.clear();
        let fill = Fill::VerticalGradient {
            top: GRADIENT_TOP,
            bottom: GRADIENT_BOTTOM,
            height: h,
        };
        for bar in self.bars(w, h) {
            surface.fill_rect(bar.x, bar.y, bar.width, bar.height, fill);
        }
    }
}
