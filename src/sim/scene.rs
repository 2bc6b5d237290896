//! Scene flow: intro screen, gameplay, restart
//!
//! Only decides what to load; the host does the loading.

use log::info;
use serde::{Deserialize, Serialize};

/// Scenes in the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scene {
    /// Title card, waiting for Space
    #[default]
    Intro,
    /// The chase itself
    Gameplay,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Intro => "INTRO",
            Scene::Gameplay => "GAMEPLAY",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "INTRO" => Some(Scene::Intro),
            "GAMEPLAY" => Some(Scene::Gameplay),
            _ => None,
        }
    }
}

/// Keys the scene flow listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    R,
    Other,
}

/// Request for the host's scene loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    Load(Scene),
    Reload(Scene),
}

impl SceneCommand {
    pub fn target(&self) -> Scene {
        match *self {
            SceneCommand::Load(scene) | SceneCommand::Reload(scene) => scene,
        }
    }
}

/// Tracks the active scene and maps key presses to load requests
#[derive(Debug, Clone, Default)]
pub struct SceneFlow {
    current: Scene,
}

impl SceneFlow {
    pub fn new(start: Scene) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    /// Handle a key-down event
    pub fn handle_key(&mut self, key: Key) -> Option<SceneCommand> {
        let command = match (self.current, key) {
            (Scene::Intro, Key::Space) => SceneCommand::Load(Scene::Gameplay),
            (Scene::Gameplay, Key::R) => SceneCommand::Reload(Scene::Gameplay),
            _ => return None,
        };
        info!("Scene {} -> {:?}", self.current.name(), command);
        self.current = command.target();
        Some(command)
    }
}
