use crate::constants::{ORBIT_DOLLY_STEP, ORBIT_ROTATE_SENSITIVITY};
use crate::dom;
use crate::overlay;
use glam::{EulerRot, Quat};
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{framing_distance, Camera, CameraRig, OrbitControls, Pose, TargetMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// Shared cells the event handlers mutate. Everything runs on the single
/// event/frame callback thread of the host page.
pub struct EventWiring {
    pub canvas: web::HtmlCanvasElement,
    pub mode: Rc<RefCell<TargetMode>>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub camera: Rc<RefCell<Camera>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    /// Bounding-sphere radius of the vehicle, for the framing shortcut.
    pub vehicle_radius: f32,
}

/// Reconstruct a full pose from the live camera state.
///
/// This is the offline authoring path: orbit to a view, press `p`, paste
/// the printed JSON into the start/end config.
pub fn capture_pose(rig: &CameraRig, camera: &Camera) -> Pose {
    let rot = Quat::from_euler(
        EulerRot::XYZ,
        rig.rotation.x,
        rig.rotation.y,
        rig.rotation.z,
    );
    Pose {
        rig_position: rig.position,
        rig_rotation: rig.rotation,
        camera_local: rot.inverse() * (camera.eye - rig.position),
        target: camera.target,
        fov_deg: camera.fov_deg(),
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, wiring: &EventWiring) {
    let key = ev.key();
    match key.as_str() {
        // toggle free-look orbiting vs the locked scroll camera
        "o" | "O" => {
            let mut mode = wiring.mode.borrow_mut();
            let mut controls = wiring.controls.borrow_mut();
            *mode = match *mode {
                TargetMode::Locked => {
                    controls.sync_from_camera(&wiring.camera.borrow());
                    controls.enabled = true;
                    log::info!("free-look enabled");
                    TargetMode::FreeLook
                }
                TargetMode::FreeLook => {
                    controls.enabled = false;
                    log::info!("free-look disabled, camera locked to scroll");
                    TargetMode::Locked
                }
            };
        }
        // print the current camera as pose JSON for the config
        "p" | "P" => {
            let pose = capture_pose(&wiring.rig.borrow(), &wiring.camera.borrow());
            match serde_json::to_string_pretty(&pose) {
                Ok(json) => log::info!("captured pose:\n{json}"),
                Err(e) => log::error!("pose capture failed: {e}"),
            }
        }
        // frame the whole vehicle (free-look only)
        "f" | "F" => {
            let mut controls = wiring.controls.borrow_mut();
            if controls.enabled {
                let fov = wiring.camera.borrow().fov_deg();
                let d = framing_distance(wiring.vehicle_radius, fov);
                controls.distance = d.clamp(controls.min_distance, controls.max_distance);
            }
        }
        "h" | "H" => {
            if let Some(doc) = dom::window_document() {
                overlay::toggle(&doc);
            }
        }
        "Enter" => {
            if let Some(doc) = dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    let _ = doc.exit_fullscreen();
                } else {
                    let _ = wiring.canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        "Escape" => {
            if let Some(doc) = dom::window_document() {
                let _ = doc.exit_fullscreen();
            }
        }
        _ => {}
    }
}

pub fn wire_global_keydown(wiring: EventWiring) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &wiring);
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    let _ = doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Drag-to-orbit and wheel-to-dolly, active only while free-look is on.
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub mouse: Rc<RefCell<MouseState>>,
}

pub fn wire_pointer_handlers(wiring: PointerWiring) {
    let PointerWiring {
        canvas,
        controls,
        mouse,
    } = wiring;

    {
        let mouse = mouse.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ms = mouse.borrow_mut();
            ms.down = true;
            ms.x = ev.client_x() as f32;
            ms.y = ev.client_y() as f32;
        }) as Box<dyn FnMut(web::PointerEvent)>);
        let _ =
            canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let mouse = mouse.clone();
        let controls = controls.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ms = mouse.borrow_mut();
            let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
            if ms.down {
                let mut c = controls.borrow_mut();
                if c.enabled {
                    let dx = x - ms.x;
                    let dy = y - ms.y;
                    c.rotate(dx * ORBIT_ROTATE_SENSITIVITY, dy * ORBIT_ROTATE_SENSITIVITY);
                }
            }
            ms.x = x;
            ms.y = y;
        }) as Box<dyn FnMut(web::PointerEvent)>);
        let _ =
            canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let mouse = mouse.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            mouse.borrow_mut().down = false;
        }) as Box<dyn FnMut(web::PointerEvent)>);
        let _ =
            canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let mut c = controls.borrow_mut();
            if c.enabled {
                c.dolly((ev.delta_y() as f32 * ORBIT_DOLLY_STEP).exp());
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(web::WheelEvent)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
