use folio_core::{Color, Fill, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas the core draws into.
pub struct CanvasSurface {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    // gradient cache keyed by its height; rebuilt when the canvas is resized
    gradient: Option<(f32, web::CanvasGradient)>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas,
            ctx,
            gradient: None,
        })
    }

    fn vertical_gradient(&mut self, top: Color, bottom: Color, height: f32) -> web::CanvasGradient {
        if let Some((h, g)) = &self.gradient {
            if *h == height {
                return g.clone();
            }
        }
        let g = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height as f64);
        _ = g.add_color_stop(0.0, &top.to_string());
        _ = g.add_color_stop(1.0, &bottom.to_string());
        self.gradient = Some((height, g.clone()));
        g
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Fill) {
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(&color.to_string()),
            Fill::VerticalGradient {
                top,
                bottom,
                height,
            } => {
                let g = self.vertical_gradient(top, bottom, height);
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
        }
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}
