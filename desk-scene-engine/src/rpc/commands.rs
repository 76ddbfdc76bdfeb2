use crate::rpc::web_rpc::RpcError;
use crate::session::navigation::NavigationDirection;
use crate::shell::apps::AppId;
use crate::shell::os_shell::ShellCommand;
use crate::shell::start_menu::StartMenuKey;
use crate::shell::surface::ShellSurface;
use serde::Deserialize;
use serde_json::Value;

/// Request methods understood by the engine, after parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendCommand {
    Navigate(NavigationDirection),
    Shell(ShellCommand),
    GetSessionState,
    GetFps,
}

#[derive(Deserialize)]
struct AppParams {
    app: String,
}

#[derive(Deserialize)]
struct DirectionParams {
    direction: String,
}

#[derive(Deserialize)]
struct KeyParams {
    key: String,
}

/// Elements the page renders. Anything omitted is treated as absent.
#[derive(Deserialize)]
struct SurfaceParams {
    #[serde(default)]
    os_screen: bool,
    #[serde(default)]
    login_screen: bool,
    #[serde(default)]
    start_menu: bool,
    #[serde(default)]
    taskbar: bool,
    #[serde(default)]
    windows: Vec<String>,
}

/// Map an RPC method and its params onto a command.
pub fn parse_command(method: &str, params: &Value) -> Result<FrontendCommand, RpcError> {
    let command = match method {
        "navigate" => FrontendCommand::Navigate(parse_direction(params)?),
        "open_app" => FrontendCommand::Shell(ShellCommand::OpenApp(parse_app(params)?)),
        "close_app" => FrontendCommand::Shell(ShellCommand::CloseApp(parse_app(params)?)),
        "minimize_app" => FrontendCommand::Shell(ShellCommand::MinimizeApp(parse_app(params)?)),
        "toggle_maximize" => {
            FrontendCommand::Shell(ShellCommand::ToggleMaximize(parse_app(params)?))
        }
        "select_icon" => FrontendCommand::Shell(ShellCommand::SelectIcon(parse_app(params)?)),
        "activate_icon" => FrontendCommand::Shell(ShellCommand::ActivateIcon(parse_app(params)?)),
        "toggle_start_menu" => FrontendCommand::Shell(ShellCommand::ToggleStartMenu),
        "close_start_menu" => FrontendCommand::Shell(ShellCommand::CloseStartMenu),
        "click_outside_start_menu" => FrontendCommand::Shell(ShellCommand::ClickOutsideStartMenu),
        "click_desktop" => FrontendCommand::Shell(ShellCommand::ClickDesktop),
        "start_menu_key" => FrontendCommand::Shell(ShellCommand::StartMenuKey(parse_key(params)?)),
        "login" => FrontendCommand::Shell(ShellCommand::Login),
        "logoff" => FrontendCommand::Shell(ShellCommand::Logoff),
        "shutdown" => FrontendCommand::Shell(ShellCommand::Shutdown),
        "register_surface" => {
            FrontendCommand::Shell(ShellCommand::RegisterSurface(parse_surface(params)?))
        }
        "get_session_state" => FrontendCommand::GetSessionState,
        "get_fps" => FrontendCommand::GetFps,
        _ => return Err(RpcError::method_not_found(method)),
    };
    Ok(command)
}

fn parse_app(params: &Value) -> Result<AppId, RpcError> {
    let parsed = serde_json::from_value::<AppParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'app' parameter"))?;

    AppId::from_string(&parsed.app)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown app: {}", parsed.app)))
}

fn parse_direction(params: &Value) -> Result<NavigationDirection, RpcError> {
    let parsed = serde_json::from_value::<DirectionParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'direction' parameter"))?;

    NavigationDirection::from_string(&parsed.direction).ok_or_else(|| {
        RpcError::invalid_params(&format!("Unknown direction: {}", parsed.direction))
    })
}

fn parse_key(params: &Value) -> Result<StartMenuKey, RpcError> {
    let parsed = serde_json::from_value::<KeyParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'key' parameter"))?;

    StartMenuKey::from_string(&parsed.key)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown key: {}", parsed.key)))
}

fn parse_surface(params: &Value) -> Result<ShellSurface, RpcError> {
    let parsed = serde_json::from_value::<SurfaceParams>(params.clone())
        .map_err(|e| RpcError::invalid_params(&format!("Invalid surface description: {}", e)))?;

    let mut surface = ShellSurface {
        os_screen: parsed.os_screen,
        login_screen: parsed.login_screen,
        start_menu: parsed.start_menu,
        taskbar: parsed.taskbar,
        ..ShellSurface::empty()
    };
    for window in &parsed.windows {
        let app = AppId::from_string(window)
            .ok_or_else(|| RpcError::invalid_params(&format!("Unknown app: {}", window)))?;
        surface = surface.with_window(app, true);
    }
    Ok(surface)
}
