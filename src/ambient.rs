use crate::core::particles::stagger_delay_ms;
use crate::core::{FxParams, ParticleSpec};
use crate::dom;
use crate::timer::Interval;
use web_sys as web;

fn spawn_particle(container: &web::Element) {
    let spec = ParticleSpec::random(&mut rand::thread_rng());
    dom::spawn_transient(container, &spec.css_text(), spec.lifetime_ms());
}

/// Seed the background with staggered particles, then keep adding one per
/// interval for as long as the page is open.
pub fn start_particles(params: &FxParams) {
    let Some(body) = dom::body() else {
        return;
    };
    for i in 0..params.particle_initial_count {
        let container = body.clone();
        dom::after(stagger_delay_ms(i, params.particle_stagger_ms), move || {
            spawn_particle(&container);
        });
    }
    match Interval::every(params.particle_interval_ms, move || spawn_particle(&body)) {
        // runs until navigation away
        Some(interval) => std::mem::forget(interval),
        None => log::warn!("[particles] could not start spawn timer"),
    }
}
