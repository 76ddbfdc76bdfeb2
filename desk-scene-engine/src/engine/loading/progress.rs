use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub content_spawned: bool,
    /// Desk content either finished loading or failed. Both end the loading state.
    pub content_settled: bool,
    pub failed: bool,
}
