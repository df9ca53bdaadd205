//! Domain model for the application state

use iced::widget::image;

use crate::format::DisplayFields;
use crate::providers::{LookupError, Services};
use crate::search::SearchResult;
use crate::system::BackgroundMusic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Warning,
    Info,
    Error,
}

/// A modal message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl Dialog {
    pub fn input_required() -> Self {
        Self {
            kind: DialogKind::Warning,
            title: "Input Required",
            message: "Please enter a country name.",
        }
    }

    pub fn not_found() -> Self {
        Self {
            kind: DialogKind::Info,
            title: "Not Found",
            message: "No country found. Please check the name and try again.",
        }
    }

    pub fn lookup_failed() -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error",
            message: "An error occurred while fetching country details.",
        }
    }
}

/// What the flag display field currently shows.
#[derive(Debug, Clone)]
pub enum FlagDisplay {
    Empty,
    Image(image::Handle),
    Placeholder(&'static str),
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Search,
    SearchFinished(Result<SearchResult, LookupError>),
    DismissDialog,
}

/// Application state.
///
/// Owns every display field, including the decoded flag image, so nothing
/// shown on screen is referenced from anywhere else.
///
/// Note: Does not derive `Clone` because `BackgroundMusic` holds the audio
/// output stream.
pub struct App {
    pub query: String,
    pub searching: bool,
    pub fields: DisplayFields,
    pub flag: FlagDisplay,
    pub dialog: Option<Dialog>,
    pub services: Services,
    /// Kept only so the loop keeps playing for the life of the window.
    pub music: Option<BackgroundMusic>,
}

impl App {
    pub fn new(services: Services, music: Option<BackgroundMusic>) -> Self {
        Self {
            query: String::new(),
            searching: false,
            fields: DisplayFields::default(),
            flag: FlagDisplay::Empty,
            dialog: None,
            services,
            music,
        }
    }
}
