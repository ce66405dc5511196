//! Miniature indicator painted into a canvas and published as the page icon.

use focus_core::{IndicatorFrame, INDICATOR_SIZE_PX};
use wasm_bindgen::JsCast;
use web_sys as web;

const RING_COLOR: &str = "#1f2937";
const FILL_COLOR: &str = "#dc2626";

pub struct Favicon {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    link: web::Element,
}

impl Favicon {
    /// Off-screen canvas feeding `<link id=link_id>`. `None` if the page has
    /// no such link or no 2D context is available.
    pub fn attach(document: &web::Document, link_id: &str) -> Option<Self> {
        let link = document.get_element_by_id(link_id)?;
        let canvas = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        canvas.set_width(INDICATOR_SIZE_PX);
        canvas.set_height(INDICATOR_SIZE_PX);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx, link })
    }

    pub fn draw(&self, indicator: &IndicatorFrame) {
        let size = INDICATOR_SIZE_PX as f64;
        let c = size / 2.0;
        let r = c - 2.0;
        let ctx = &self.ctx;

        ctx.clear_rect(0.0, 0.0, size, size);

        if !indicator.is_empty() {
            ctx.begin_path();
            ctx.move_to(c, c);
            _ = ctx.arc(
                c,
                c,
                r,
                indicator.start_angle as f64,
                indicator.end_angle as f64,
            );
            ctx.close_path();
            ctx.set_fill_style_str(FILL_COLOR);
            ctx.fill();
        }

        ctx.begin_path();
        _ = ctx.arc(c, c, r, 0.0, std::f64::consts::TAU);
        ctx.set_stroke_style_str(RING_COLOR);
        ctx.set_line_width(2.0);
        ctx.stroke();

        match self.canvas.to_data_url() {
            Ok(url) => {
                _ = self.link.set_attribute("href", &url);
            }
            Err(e) => log::warn!("[favicon] to_data_url failed: {:?}", e),
        }
    }
}
