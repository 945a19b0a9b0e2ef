#![cfg(target_arch = "wasm32")]
use crate::context::FxContext;
use crate::core::FxParams;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod ambient;
mod chrome;
mod context;
mod core;
mod dom;
mod events;
mod frame;
mod loading;
mod observe;
mod overlay;
mod palette;
mod render;
mod styles;
mod timer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // attached once per page; a second start is ignored
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if dom::inject_style(&document, styles::EFFECT_CSS).is_none() {
        log::warn!("could not inject effect styles");
    }

    let ctx = FxContext::new(document.clone(), FxParams::default());

    // Effects that work before the loading screen goes away
    events::scroll::wire_navigation(&ctx);
    chrome::wire_page_chrome(&ctx);
    events::wire_input_handlers(&ctx);
    events::wire_global_keydown(&ctx);

    let ready_ctx = ctx.clone();
    loading::run(&document, move || start_animations(&ready_ctx));
    Ok(())
}

/// Post-load stage: counters, parallax, glass blur, reveal, particles.
fn start_animations(ctx: &FxContext) {
    if !ctx.state.borrow_mut().mark_loaded() {
        return;
    }
    log::info!("[loader] page ready, starting animations");
    observe::wire_counters(&ctx.document);
    events::scroll::wire_parallax(&ctx.document);
    events::scroll::wire_glass_blur(&ctx.document);
    observe::wire_reveal(&ctx.document);
    ambient::start_particles(&ctx.params);
}
