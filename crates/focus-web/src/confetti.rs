//! Full-window canvas the celebration particles are painted on.

use focus_core::{Confetti, CONFETTI_BURST_COUNT, CONFETTI_SPRINKLE_COUNT};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "confetti-canvas";

// a tab in the background can hand us one huge frame
const MAX_FRAME_SECONDS: f32 = 0.1;

pub type SharedConfetti = Rc<RefCell<ConfettiOverlay>>;

pub struct ConfettiOverlay {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Confetti,
    rng: StdRng,
    last_instant: Instant,
    painted: bool,
}

impl ConfettiOverlay {
    pub fn attach(document: &web::Document) -> Option<Self> {
        let canvas = document
            .get_element_by_id(CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            field: Confetti::default(),
            rng: StdRng::from_entropy(),
            last_instant: Instant::now(),
            painted: false,
        })
    }

    /// Celebration for a finished session or a checked-off task.
    pub fn burst(&mut self) {
        self.sync_size();
        self.field.burst(&mut self.rng, CONFETTI_BURST_COUNT);
    }

    /// Small puff at a checkbox, in client coordinates.
    pub fn sprinkle(&mut self, at: Vec2) {
        self.sync_size();
        self.field.sprinkle(&mut self.rng, at, CONFETTI_SPRINKLE_COUNT);
    }

    fn sync_size(&mut self) {
        let Some(w) = web::window() else { return };
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let size = Vec2::new(width.max(1.0) as f32, height.max(1.0) as f32);
        if self.field.size() != size {
            self.canvas.set_width(size.x as u32);
            self.canvas.set_height(size.y as u32);
            self.field.resize(size.x, size.y);
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_SECONDS);
        self.last_instant = now;

        if self.field.is_idle() {
            if self.painted {
                self.clear();
            }
            return;
        }
        self.sync_size();
        self.field.step(dt);
        self.clear();

        let ctx = &self.ctx;
        for p in self.field.particles() {
            ctx.set_global_alpha(p.life.clamp(0.0, 1.0) as f64);
            ctx.set_fill_style_str(p.color);
            ctx.begin_path();
            _ = ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.size as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        self.painted = true;
    }

    fn clear(&mut self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.painted = false;
    }
}

/// Paint the overlay every animation frame for the lifetime of the page.
pub fn start_loop(overlay: SharedConfetti) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        overlay.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
