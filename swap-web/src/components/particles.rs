//! Particle Field Background Component
//! Creates an animated field of drifting particles behind the app

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[component]
pub fn ParticleField() -> impl IntoView {
    // Create particles after the component mounts
    let create_particles_effect = move || {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        leptos::task::spawn_local(async move {
            // Wait a bit for DOM to be ready
            TimeoutFuture::new(100).await;

            if let Some(field_element) = document.get_element_by_id("particle-field") {
                if let Some(html_element) = field_element.dyn_ref::<HtmlElement>() {
                    create_particles(html_element);
                }
            }
        });
    };

    create_particles_effect();

    view! {
        <div
            class="particle-field"
            id="particle-field"
        ></div>
    }
}

fn create_particles(container: &HtmlElement) {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .expect("should have a document");

    let num_particles = 150;

    for _i in 0..num_particles {
        let particle = document
            .create_element("div")
            .expect("should create particle element");

        particle.set_class_name("particle");

        // Random position, size and animation offset
        let left = js_sys::Math::random() * 100.0;
        let top = js_sys::Math::random() * 100.0;
        let delay = js_sys::Math::random() * 4.0;
        let size = js_sys::Math::random() * 2.0 + 1.0;

        particle
            .set_attribute(
                "style",
                &format!(
                    "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px;",
                    left, top, delay, size, size
                ),
            )
            .expect("should set style");

        // A few larger, glowing particles in the accent color (20% chance)
        if js_sys::Math::random() > 0.8 {
            let large_size = js_sys::Math::random() * 3.0 + 2.0;
            particle
                .set_attribute(
                    "style",
                    &format!(
                        "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px; \
                        box-shadow: 0 0 10px rgba(111, 78, 242, 0.9), 0 0 20px rgba(111, 78, 242, 0.5); \
                        background: #6f4ef2;",
                        left, top, delay, large_size, large_size
                    ),
                )
                .expect("should set style");
        }

        container
            .append_child(&particle)
            .expect("should append particle");
    }
}
