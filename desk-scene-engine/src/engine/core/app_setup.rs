use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
// Crate engine modules
use crate::engine::assets::desk_manifest::DeskSceneManifest;
use crate::engine::camera::desk_camera::{DeskCamera, DeskViewCamera, update_desk_camera};
use crate::engine::camera::render_surface::{RenderSurface, handle_window_resize};
use crate::engine::core::app_state::{
    AppState, FpsText, FrameSet, SessionStatusText, configure_frame_sets, transition_to_running,
    update_loading_frontend,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::desk_content::check_desk_content;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_desk_manifest, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::{clear_colour, spawn_lighting};
use crate::engine::systems::fps_tracking::fps_notification_system;
// Session and shell
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::session::systems::SessionPlugin;
use crate::shell::systems::ShellPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::{
    fps_tracking::fps_text_update_system, status_overlay::session_status_text_system,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers DeskSceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<DeskSceneManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(ShellPlugin::default())
        .add_plugins(SessionPlugin::default())
        .insert_resource(clear_colour());

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<DeskCamera>()
        .init_resource::<RenderSurface>();

    configure_frame_sets(&mut app);

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_desk_manifest,
                check_desk_content,
                update_loading_frontend,
                transition_to_running,
            )
                .chain()
                .in_set(FrameSet::Publish)
                .run_if(in_state(AppState::Loading)),
        );

    // The desk stays navigable while its model streams in.
    app.add_systems(
        Update,
        (
            (handle_window_resize, update_desk_camera)
                .chain()
                .in_set(FrameSet::Camera),
            fps_notification_system.in_set(FrameSet::Publish),
        ),
    );

    // Native overlay text only exists outside the browser.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            (fps_text_update_system, session_status_text_system).in_set(FrameSet::Publish),
        );
    }

    app
}

fn spawn_desk_view_camera(commands: &mut Commands, desk_camera: &DeskCamera, aspect_ratio: f32) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            aspect_ratio,
        }),
        desk_camera.transform(),
        DeskViewCamera,
        Name::new("Desk camera"),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, desk_camera: Res<DeskCamera>, surface: Res<RenderSurface>) {
    info!("=== DESK SCENE ENGINE ===");
    spawn_lighting(&mut commands);
    spawn_desk_view_camera(&mut commands, &desk_camera, surface.aspect_ratio());

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.1, 0.1, 0.1)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                SessionStatusText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
