//! Iced application adapter (thin UI layer)

use iced::{Element, Task};
use tracing::info;

use crate::config::Config;
use crate::model::{App, Message};
use crate::providers::Services;
use crate::system::BackgroundMusic;
use crate::update;
use crate::view;

/// Everything `main` resolves before the window opens.
pub struct Startup {
    pub config: Config,
    pub services: Services,
    pub play_music: bool,
}

pub fn new(startup: &Startup) -> (App, Task<Message>) {
    let config = &startup.config;

    // Music starts with the window and is best-effort.
    let music = if startup.play_music {
        BackgroundMusic::try_start(&config.music_path, config.music_volume)
    } else {
        info!("Background music disabled on the command line");
        None
    };

    let app = App::new(startup.services.clone(), music);
    info!("App created, opening window");

    (app, Task::none())
}

pub fn title(_app: &App) -> String {
    String::from("Country Search App")
}

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    update::update(app, message)
}

pub fn view(app: &App) -> Element<'_, Message> {
    view::main_view(app)
}
