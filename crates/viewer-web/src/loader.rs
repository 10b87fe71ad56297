use viewer_core::{parse_glb, placeholder_vehicle, ViewerModel};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("array_buffer: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("array_buffer await: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Result of a model load attempt, so the UI can say which path it took.
pub struct LoadedVehicle {
    pub model: ViewerModel,
    pub is_fallback: bool,
}

/// Fetch and decode the vehicle; any failure degrades to the procedural
/// placeholder so the demo keeps working offline or with a broken asset.
pub async fn load_vehicle(url: &str) -> LoadedVehicle {
    match fetch_bytes(url).await {
        Ok(bytes) => match parse_glb(&bytes) {
            Ok(model) => {
                log::info!(
                    "loaded vehicle {url}: {} meshes, glass={}",
                    model.mesh_count(),
                    model.has_glass()
                );
                LoadedVehicle {
                    model,
                    is_fallback: false,
                }
            }
            Err(e) => {
                log::warn!("failed to decode {url}: {e}; using placeholder vehicle");
                LoadedVehicle {
                    model: placeholder_vehicle(),
                    is_fallback: true,
                }
            }
        },
        Err(e) => {
            log::warn!("failed to fetch {url}: {e:?}; using placeholder vehicle");
            LoadedVehicle {
                model: placeholder_vehicle(),
                is_fallback: true,
            }
        }
    }
}
