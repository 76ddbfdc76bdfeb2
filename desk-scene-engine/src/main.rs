//! Desk scene engine.
//!
//! Renders a 3D desk, flies the camera between fixed viewpoints and boots a
//! simulated OS shell when the camera arrives at the monitor. The shell's
//! markup lives in the hosting page; the engine owns its state and talks to
//! the page over JSON-RPC.

mod engine;
mod rpc;
mod session;
mod shell;

use crate::engine::core::app_setup::create_app;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
