//! JSON-RPC 2.0 communication layer for the hosting page.
//!
//! Implements bidirectional messaging between the Bevy engine and the page
//! that renders the OS shell, via iframe postMessage, supporting both request-response and notification patterns.
//!
//! ## Architecture
//!
//! The RPC system uses standard JSON-RPC 2.0 protocol with:
//! - **Requests**: Expect responses with matching IDs
//! - **Notifications**: One-way messages without responses
//! - **Responses**: Reply to requests with results or errors
//!
//! ## Message Flow
//!
//! ```text
//! Page (Parent Window)   <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Adding New RPC Methods
//!
//! 1. Add a variant to `FrontendCommand` (or `ShellCommand` for shell actions).
//! 2. Map the method name in `parse_command()`, validating params there so
//!    the engine only ever sees typed values.
//! 3. Handle the variant in `execute_command()`.
//!
//! ```typescript
//! iframe.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "open_app",
//!   params: { app: "github" },
//!   id: 1
//! }), "*");
//! ```
//!
//! ## Sending Notifications from Bevy
//!
//! Use `WebRpcInterface::send_notification()` to push updates to the page:
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({
//!         "data": "value",
//!         "timestamp": 123456
//!     }));
//! }
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Methods
//!
//! ### Navigation
//! - `navigate {direction}`: `up`, `down`, `left` or `right` (`ArrowUp` style accepted)
//!
//! ### Shell
//! - `open_app`, `close_app`, `minimize_app`, `toggle_maximize`,
//!   `select_icon`, `activate_icon`: all take `{app}`
//! - `toggle_start_menu`, `close_start_menu`, `click_outside_start_menu`
//! - `start_menu_key {key}`: `up`, `down`, `enter` or `escape`
//! - `click_desktop`: clears the desktop icon selection
//! - `login`, `logoff`, `shutdown`
//! - `register_surface {os_screen, login_screen, start_menu, taskbar, windows}`:
//!   declares which shell elements the page renders; omitted ones are absent
//!
//! ### Queries
//! - `get_session_state`: session and shell snapshots
//! - `get_fps`: current frame rate
//!
//! ## Notifications
//!
//! `session_state_changed`, `os_state_changed`, `loading_progress`,
//! `scene_content_loaded`, `scene_content_failed`, `fps_update`, `debug_message`.

/// Method name and parameter validation into typed commands.
pub mod commands;

/// JSON-RPC 2.0 bidirectional communication system for the hosting page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
