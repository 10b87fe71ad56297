use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{apply_camera_state, Camera, CameraRig, OrbitControls, ScrollTimeline, TargetMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick needs. The cells are shared with the
/// scroll/keyboard/pointer handlers; all mutation happens on the host
/// page's single callback thread.
pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub timeline: ScrollTimeline,
    pub progress: Rc<RefCell<f32>>,
    pub mode: Rc<RefCell<TargetMode>>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub camera: Rc<RefCell<Camera>>,
    pub controls: Rc<RefCell<OrbitControls>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        dom::sync_canvas_backing_size(&self.canvas);

        // interpolate the scroll timeline and push it onto the camera
        let progress = *self.progress.borrow();
        let state = self.timeline.set_progress(progress);
        {
            let mode = *self.mode.borrow();
            let mut rig = self.rig.borrow_mut();
            let mut camera = self.camera.borrow_mut();
            let mut controls = self.controls.borrow_mut();
            apply_camera_state(&state, mode, &mut rig, &mut camera, &mut controls);
            camera.aspect = self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.camera.borrow(), dt_sec) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
