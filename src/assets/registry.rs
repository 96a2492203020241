//! Browser image loading and lookup
//!
//! `load_all` starts every fetch up front (the browser runs them
//! concurrently) and then awaits each image's `load` event. It resolves
//! only when all entries have loaded: an image that never fires `load`
//! stalls startup indefinitely. That is the documented limitation of the
//! loader; there is no retry and no partial registry.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use super::{AssetManifest, asset_key};

/// Loaded image handles, keyed by file stem.
pub struct ImageRegistry {
    images: HashMap<String, HtmlImageElement>,
}

impl ImageRegistry {
    /// Look up a loaded image by key. `None` means the renderer draws its
    /// placeholder shape instead.
    pub fn get(&self, key: &str) -> Option<&HtmlImageElement> {
        self.images.get(key)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Load every image in the manifest, resolving once all have loaded.
pub async fn load_all(manifest: &AssetManifest) -> ImageRegistry {
    let mut pending = Vec::with_capacity(manifest.images.len());
    for path in &manifest.images {
        let img = HtmlImageElement::new().expect("HtmlImageElement creation");
        // Setting src starts the fetch immediately
        img.set_src(path);
        pending.push((asset_key(path).to_string(), img));
    }

    let mut images = HashMap::with_capacity(pending.len());
    for (key, img) in pending {
        await_image_load(&img).await;
        log::debug!("loaded image '{}'", key);
        images.insert(key, img);
    }
    log::info!("all {} images loaded", images.len());

    ImageRegistry { images }
}

/// Wait for a single image's `load` event (resolves immediately if it
/// already finished decoding).
async fn await_image_load(img: &HtmlImageElement) {
    if img.complete() && img.natural_width() > 0 {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let cb = Closure::once_into_js(move |_event: web_sys::Event| {
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        });
        img.set_onload(Some(cb.unchecked_ref()));
    });
    let _ = JsFuture::from(promise).await;
}
