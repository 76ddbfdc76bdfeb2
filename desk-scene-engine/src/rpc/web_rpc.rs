use crate::engine::camera::desk_camera::DeskCamera;
use crate::engine::core::app_state::{CommandSource, FrameSet};
use crate::engine::systems::fps_tracking::smoothed_fps;
use crate::rpc::commands::{FrontendCommand, parse_command};
use crate::session::navigation::NavigationEvent;
use crate::session::orchestrator::SessionOrchestrator;
use crate::shell::os_shell::OsShell;
use crate::shell::systems::ShellCommandEvent;
use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub(crate) fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    (process_incoming_messages, handle_rpc_messages)
                        .chain()
                        .in_set(FrameSet::Input),
                    send_outgoing_messages.in_set(FrameSet::Transmit),
                ),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Cheap filter; full parsing happens in handle_rpc_messages.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    // Write events using the non-deprecated method.
    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut navigation_events: EventWriter<NavigationEvent>,
    mut shell_events: EventWriter<ShellCommandEvent>,
    session: Res<SessionOrchestrator>,
    desk_camera: Res<DeskCamera>,
    shell: Res<OsShell>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                let mut context = RpcContext {
                    diagnostics: &diagnostics,
                    session: &session,
                    desk_camera: &desk_camera,
                    shell: &shell,
                    navigation_events: &mut navigation_events,
                    shell_events: &mut shell_events,
                };

                if let Some(response) = handle_rpc_request(&request, &mut context) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {}", parse_error);
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Engine state and event channels an RPC request may touch.
struct RpcContext<'a, 'w, 'v> {
    diagnostics: &'a DiagnosticsStore,
    session: &'a SessionOrchestrator,
    desk_camera: &'a DeskCamera,
    shell: &'a OsShell,
    navigation_events: &'a mut EventWriter<'w, NavigationEvent>,
    shell_events: &'a mut EventWriter<'v, ShellCommandEvent>,
}

/// Handle individual RPC request. Commands run whether or not the request
/// carries an ID; only requests with IDs get a response.
fn handle_rpc_request(request: &RpcRequest, context: &mut RpcContext) -> Option<RpcResponse> {
    let result = validate_request(request)
        .and_then(|_| parse_command(&request.method, &request.params))
        .and_then(|command| execute_command(command, context));

    if let Err(ref error) = result {
        warn!("RPC '{}' rejected: {}", request.method, error.message);
    }

    build_response(request.id.clone(), result)
}

fn validate_request(request: &RpcRequest) -> Result<(), RpcError> {
    if request.jsonrpc != "2.0" {
        return Err(RpcError::invalid_request(&format!(
            "Unsupported jsonrpc version: {}",
            request.jsonrpc
        )));
    }
    Ok(())
}

fn execute_command(
    command: FrontendCommand,
    context: &mut RpcContext,
) -> Result<serde_json::Value, RpcError> {
    match command {
        FrontendCommand::Navigate(direction) => {
            context.navigation_events.write(NavigationEvent {
                direction,
                source: CommandSource::Rpc,
            });
            debug!("Navigation event dispatched: {:?}", direction);
            Ok(serde_json::json!({
                "success": true,
                "direction": direction
            }))
        }
        FrontendCommand::Shell(shell_command) => {
            context.shell_events.write(ShellCommandEvent {
                command: shell_command,
                source: CommandSource::Rpc,
            });
            debug!("Shell command dispatched: {:?}", shell_command);
            Ok(serde_json::json!({ "success": true }))
        }
        FrontendCommand::GetSessionState => handle_get_session_state(context),
        FrontendCommand::GetFps => handle_get_fps(context.diagnostics),
    }
}

/// Current session and shell state, as last evaluated.
fn handle_get_session_state(context: &RpcContext) -> Result<serde_json::Value, RpcError> {
    let session = serde_json::to_value(context.session.snapshot(context.desk_camera))
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;
    let shell = serde_json::to_value(context.shell.snapshot())
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;

    Ok(serde_json::json!({
        "session": session,
        "shell": shell
    }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = smoothed_fps(diagnostics).unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

/// Wrap a result for transmission. Notifications (no ID) get no response.
fn build_response(
    id: Option<serde_json::Value>,
    result: Result<serde_json::Value, RpcError>,
) -> Option<RpcResponse> {
    let id = id?;

    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

/// Send queued notifications and responses to the page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialised message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_request(message: &str) -> Self {
        Self {
            code: -32600,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
