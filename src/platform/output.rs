//! Scene sinks

use super::SceneSink;
use crate::sim::Scene;

/// Writes each scene to the log as JSON at trace level
#[derive(Debug, Default)]
pub struct LogSink {
    last_hud: Option<String>,
}

impl SceneSink for LogSink {
    fn present(&mut self, scene: &Scene) {
        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(scene) {
                Ok(json) => log::trace!("{}", json),
                Err(e) => log::warn!("Scene serialization failed: {}", e),
            }
        }

        // HUD changes are worth seeing at debug level
        let hud = scene.hud_line();
        if self.last_hud.as_deref() != Some(hud.as_str()) {
            log::debug!("[tick {}] {}", scene.tick, hud);
            self.last_hud = Some(hud);
        }
    }
}

/// Keeps every scene it is given
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub scenes: Vec<Scene>,
}

impl SceneSink for RecordingSink {
    fn present(&mut self, scene: &Scene) {
        self.scenes.push(scene.clone());
    }
}
