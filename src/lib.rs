pub mod app;
pub mod body;
pub mod config;
pub mod diagnostics;
pub mod init_config;
pub mod profiler;
pub mod renderer;
pub mod renderer_utils;
pub mod scenario;
pub mod simulation;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
