//! Laser Chase entry point
//!
//! Native headless run: loads settings (a JSON path or a preset name), walks
//! the intro screen, then chases the hazard for a few simulated seconds and
//! logs what a renderer would draw.

use laser_chase::Settings;
use laser_chase::consts::SIM_DT;
use laser_chase::settings::Preset;
use laser_chase::sim::{
    Contact, Driver, Key, LinearLocomotion, PlayerInput, SceneCommand, SceneFlow, TickInput,
    WanderEvent,
};

/// Frames to simulate (10 seconds at 60 fps)
const DEMO_FRAMES: u32 = 600;
/// Frame on which the player catches the hazard
const CATCH_FRAME: u32 = 180;

fn main() {
    env_logger::init();
    log::info!("Laser Chase (native) starting...");

    let settings = match load_settings(std::env::args().nth(1).as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut scenes = SceneFlow::default();
    if let Some(SceneCommand::Load(scene)) = scenes.handle_key(Key::Space) {
        log::info!("Loading scene {}", scene.name());
    }

    let mut driver = match Driver::from_settings(&settings) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut player = match LinearLocomotion::new(settings.player) {
        Ok(player) => player,
        Err(e) => {
            log::error!("invalid player config: {}", e);
            std::process::exit(1);
        }
    };

    let mut catches = 0;
    for frame in 0..DEMO_FRAMES {
        let mut input = TickInput::default();
        if frame == CATCH_FRAME {
            input.contacts.push(Contact::tagged("Player"));
        }

        // Chase the hazard horizontally
        let heading = driver.wanderer().position().x.signum();
        if let Some(cue) = player.update(PlayerInput {
            horizontal: heading,
            jump_pressed: frame % 120 == 0,
        }) {
            log::debug!("Footsteps: {:?}", cue);
        }
        player.fixed_update();

        let out = driver.advance(&input, SIM_DT);
        for event in &out.events {
            match event {
                WanderEvent::Hidden => {
                    catches += 1;
                    log::info!("Caught it! (frame {})", frame);
                }
                WanderEvent::Respawned { position } => {
                    log::info!("Hazard reappeared at ({:.2}, {:.2})", position.x, position.y);
                }
                _ => {}
            }
        }

        if frame % 60 == 0 {
            log::info!(
                "t={:.1}s hazard=({:.2}, {:.2}) visible={} player_vx={:.1}",
                driver.elapsed(),
                out.position.x,
                out.position.y,
                out.visible,
                player.velocity().x
            );
        }
    }

    println!(
        "Simulated {:.1}s, caught the hazard {} time(s)",
        driver.elapsed(),
        catches
    );
}

/// A path to a JSON file, a preset name, or nothing for defaults
fn load_settings(arg: Option<&str>) -> Result<Settings, laser_chase::WanderError> {
    match arg {
        None => Ok(Settings::default()),
        Some(name) => match Preset::from_str(name) {
            Some(preset) => {
                log::info!("Using preset {}", preset.as_str());
                Ok(Settings::from_preset(preset))
            }
            None => Settings::load(name),
        },
    }
}
