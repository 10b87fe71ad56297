#![cfg(target_arch = "wasm32")]
//! Browser entry point for the scroll-driven vehicle showroom.
//!
//! Orchestration only: asset loading, DOM/event wiring and the frame loop.
//! All camera and model logic lives in `viewer-core`.

use crate::events::MouseState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{Camera, CameraRig, OrbitControls, PoseConfig, ScrollTimeline, TargetMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod render;
mod scroll;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(doc) = dom::window_document() {
                overlay::show(&doc);
                overlay::set_status(&doc, "Viewer failed to start; see console.");
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    overlay::show(&document);
    overlay::set_status(&document, "Loading vehicle…");

    // Two-pose scroll timeline; a bad config is fatal here, before the
    // first frame, rather than a silently frozen camera later.
    let (start_pose, end_pose) = constants::default_poses();
    let timeline = match ScrollTimeline::new(&PoseConfig::new(start_pose, end_pose)) {
        Ok(t) => t,
        Err(e) => {
            overlay::set_status(&document, "Camera configuration is broken; see console.");
            return Err(anyhow::anyhow!("pose config rejected: {e}"));
        }
    };

    // WebGPU first so a missing adapter surfaces before the model download
    let mut gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        overlay::set_status(&document, "WebGPU unavailable; camera demo runs without visuals.");
    }

    let vehicle = loader::load_vehicle(constants::MODEL_URL).await;
    if vehicle.is_fallback {
        overlay::set_status(&document, "Vehicle asset unavailable, showing placeholder.");
    } else {
        overlay::hide(&document);
    }
    let (_, vehicle_radius) = vehicle.model.bounds.bounding_sphere();
    if let Some(g) = &mut gpu {
        g.upload_model(&vehicle.model);
    }

    // ---------------- Shared interaction state ----------------
    let progress = Rc::new(RefCell::new(0.0_f32));
    let mode = Rc::new(RefCell::new(TargetMode::Locked));
    let rig = Rc::new(RefCell::new(CameraRig::default()));
    let camera = Rc::new(RefCell::new(Camera::default()));
    let controls = Rc::new(RefCell::new(OrbitControls::default()));
    let mouse = Rc::new(RefCell::new(MouseState::default()));

    scroll::wire_scroll(progress.clone());
    events::wire_global_keydown(events::EventWiring {
        canvas: canvas.clone(),
        mode: mode.clone(),
        rig: rig.clone(),
        camera: camera.clone(),
        controls: controls.clone(),
        vehicle_radius,
    });
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        controls: controls.clone(),
        mouse,
    });

    // Scroll-driven camera + renderer, stepped by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        gpu,
        timeline,
        progress,
        mode,
        rig,
        camera,
        controls,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
