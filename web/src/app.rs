use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

#[component]
pub fn GlyphboardApp() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let initialized = RwSignal::new(false);
    let error_msg = RwSignal::new(String::new());

    // Start Bevy once the canvas is mounted
    Effect::new(move |_| {
        if initialized.get_untracked() {
            return;
        }
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(canvas) = canvas.dyn_ref::<HtmlCanvasElement>().cloned() else {
            error_msg.set("Board canvas is not a canvas element".to_string());
            return;
        };
        let Some(window) = web_sys::window() else {
            error_msg.set("No browser window".to_string());
            return;
        };

        // Defer to the next tick so winit is not entered from inside Leptos
        let start = Closure::once_into_js(move || {
            match crate::bevy_wasm::init_bevy(canvas) {
                Ok(()) => initialized.set(true),
                Err(e) => {
                    let msg = format!("Failed to initialize Bevy: {:?}", e);
                    web_sys::console::error_1(&msg.clone().into());
                    error_msg.set(msg);
                }
            }
        });
        if let Err(e) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(start.unchecked_ref(), 50)
        {
            error_msg.set(format!("Could not schedule start-up: {:?}", e));
        }
    });

    let header_style = "height: 56px; background: #14141a; border-bottom: 1px solid #3c3c41; display: flex; align-items: center; padding: 0 24px;";
    let title_style = "color: #f0f0f5; font-family: sans-serif; font-size: 20px; font-weight: 600; letter-spacing: 0.5px; margin: 0;";
    let container_style = "width: 100vw; height: 100vh; margin: 0; padding: 0; overflow: hidden; background: #1e1e23; display: flex; flex-direction: column;";

    view! {
        <div style=container_style>
            <header style=header_style>
                <h1 style=title_style>"glyphboard"</h1>
            </header>

            <div style="flex: 1; position: relative; width: 100%; height: 100%; overflow: hidden;">
                <Show when=move || !initialized.get()>
                    <div style="position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); text-align: center; pointer-events: none; z-index: 5;">
                        <p style="color: #c8c8cd; font-family: sans-serif;">"Loading board..."</p>
                        <p style="color: #dc3232; font-size: 12px; font-family: monospace;">{move || error_msg.get()}</p>
                    </div>
                </Show>

                <canvas
                    node_ref=canvas_ref
                    style="width: 100%; height: 100%; display: block; touch-action: none; outline: none;"
                    on:contextmenu=move |e| e.prevent_default()
                ></canvas>
            </div>
        </div>
    }
}
