use crate::constants::WAVE_CANVAS_ID;
use crate::core::wave::{default_waves, Wave};
use crate::dom::{self, Listener};
use crate::frame::{self, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
    waves: Vec<Wave>,
}

impl Surface {
    fn resize(&mut self) {
        let (w, h) = dom::fit_canvas_to_window(&self.canvas);
        self.width = w;
        self.height = h;
        for wave in &mut self.waves {
            wave.resize(h as f64);
        }
    }

    fn draw(&mut self) {
        let (w, h) = (self.width as f64, self.height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for wave in &mut self.waves {
            let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, 0.0);
            _ = gradient.add_color_stop(0.0, &wave.colors[0]);
            _ = gradient.add_color_stop(1.0, &wave.colors[1]);
            self.ctx.set_fill_style_canvas_gradient(&gradient);

            self.ctx.begin_path();
            let mut points = wave.outline(self.width, h);
            if let Some((x0, y0)) = points.next() {
                self.ctx.move_to(x0, y0);
            }
            for (x, y) in points {
                self.ctx.line_to(x, y);
            }
            self.ctx.close_path();
            self.ctx.fill();

            wave.advance();
        }
    }
}

/// Layered sine-wave background drawn every frame on `#liquidCanvas`.
pub struct WaveRenderer {
    _frame: LoopHandle,
    _resize: Option<Listener>,
}

impl WaveRenderer {
    pub fn attach(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(el) = document.get_element_by_id(WAVE_CANVAS_ID) else {
            return Ok(None);
        };
        let canvas = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{WAVE_CANVAS_ID} is not a canvas: {:?}", e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let (width, height) = dom::fit_canvas_to_window(&canvas);
        let surface = Rc::new(RefCell::new(Surface {
            canvas,
            ctx,
            width,
            height,
            waves: default_waves(height as f64),
        }));
        log::info!("[waves] {}x{} waves={}", width, height, surface.borrow().waves.len());

        let resize = web::window().map(|window| {
            let s = surface.clone();
            Listener::new(&window, "resize", move |_| s.borrow_mut().resize())
        });

        let frame = frame::start_loop(move |_dt| {
            surface.borrow_mut().draw();
            true
        });

        Ok(Some(Self {
            _frame: frame,
            _resize: resize,
        }))
    }
}
