//! Simulated desktop operating system shown on the virtual monitor.
//!
//! The shell owns state only. The web page renders it from the snapshots
//! published over RPC and reports clicks and key presses back as
//! [`os_shell::ShellCommand`]s.

/// Application catalogue and identifiers.
pub mod apps;

/// Boot/login/desktop phase machine, window lifecycle, start menu and icons.
pub mod os_shell;

/// Serialisable view of the shell for the page.
pub mod snapshot;

/// Start menu open state and keyboard focus.
pub mod start_menu;

/// Which page elements are present for the shell to drive.
pub mod surface;

/// Bevy plugin, command events and publication systems.
pub mod systems;

/// Per-app window record and geometry.
pub mod window;
