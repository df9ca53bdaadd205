//! Business logic for state transitions

use iced::Task;
use tracing::{debug, error, info};

use crate::flags::{FlagOutcome, FLAG_ERROR, NO_FLAG};
use crate::model::{App, Dialog, FlagDisplay, Message};
use crate::providers::LookupError;
use crate::search::{self, SearchResult};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::QueryChanged(query) => {
            app.query = query;
            Task::none()
        }
        Message::Search => {
            if app.searching || app.dialog.is_some() {
                debug!(searching = app.searching, "Search request ignored");
                return Task::none();
            }

            let name = app.query.trim();
            if name.is_empty() {
                info!("Empty country name rejected");
                app.dialog = Some(Dialog::input_required());
                return Task::none();
            }

            let name = name.to_string();
            info!(country = %name, "Search started");
            app.searching = true;
            Task::perform(
                search::run(app.services.clone(), name),
                Message::SearchFinished,
            )
        }
        Message::SearchFinished(result) => {
            app.searching = false;
            match result {
                Ok(result) => apply_result(app, result),
                Err(LookupError::NotFound) => {
                    app.dialog = Some(Dialog::not_found());
                }
                Err(e) => {
                    error!(error = %e, "Country lookup failed");
                    app.dialog = Some(Dialog::lookup_failed());
                }
            }
            Task::none()
        }
        Message::DismissDialog => {
            app.dialog = None;
            Task::none()
        }
    }
}

/// Replace every display field with the new result in one step.
fn apply_result(app: &mut App, result: SearchResult) {
    app.fields = result.fields;
    app.flag = match result.flag {
        FlagOutcome::Loaded(bitmap) => FlagDisplay::Image(bitmap.into_handle()),
        FlagOutcome::NoFlag => FlagDisplay::Placeholder(NO_FLAG),
        FlagOutcome::Failed => FlagDisplay::Placeholder(FLAG_ERROR),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::flags::decode;
    use crate::format::DisplayFields;
    use crate::providers::Services;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn app() -> App {
        let services = Services::new(&Config::default()).unwrap();
        App::new(services, None)
    }

    fn previous_fields() -> DisplayFields {
        DisplayFields {
            country: "Country: France".into(),
            capital: "Capital: Paris".into(),
            ..DisplayFields::default()
        }
    }

    fn result(flag: FlagOutcome) -> SearchResult {
        SearchResult {
            fields: DisplayFields {
                country: "Country: Japan".into(),
                capital: "Capital: Tokyo".into(),
                exchange_rate: "Exchange Rate: 1 USD = 149.5 JPY".into(),
                ..DisplayFields::default()
            },
            flag,
        }
    }

    #[test]
    fn blank_query_shows_input_dialog_without_searching() {
        for query in ["", "   ", "\t\n"] {
            let mut app = app();
            let _ = update(&mut app, Message::QueryChanged(query.into()));
            let _ = update(&mut app, Message::Search);
            assert_eq!(app.dialog, Some(Dialog::input_required()));
            assert!(!app.searching);
        }
    }

    #[test]
    fn valid_query_starts_search() {
        let mut app = app();
        let _ = update(&mut app, Message::QueryChanged("  Japan ".into()));
        let _ = update(&mut app, Message::Search);
        assert!(app.searching);
        assert_eq!(app.dialog, None);
    }

    #[test]
    fn second_search_while_busy_is_ignored() {
        let mut app = app();
        app.searching = true;
        app.query = "".into();
        let _ = update(&mut app, Message::Search);
        // The blank query would raise a dialog if it were processed.
        assert_eq!(app.dialog, None);
        assert!(app.searching);
    }

    #[test]
    fn not_found_keeps_previous_result() {
        let mut app = app();
        app.fields = previous_fields();
        app.flag = FlagDisplay::Placeholder(NO_FLAG);
        app.searching = true;

        let _ = update(&mut app, Message::SearchFinished(Err(LookupError::NotFound)));

        assert_eq!(app.dialog, Some(Dialog::not_found()));
        assert_eq!(app.fields, previous_fields());
        assert!(matches!(app.flag, FlagDisplay::Placeholder("No flag available")));
        assert!(!app.searching);
    }

    #[test]
    fn transport_error_shows_generic_dialog() {
        let mut app = app();
        app.fields = previous_fields();
        let err = LookupError::Transport("timed out".into());

        let _ = update(&mut app, Message::SearchFinished(Err(err)));

        assert_eq!(app.dialog, Some(Dialog::lookup_failed()));
        assert_eq!(app.fields, previous_fields());
    }

    #[test]
    fn success_replaces_all_fields() {
        let mut app = app();
        app.fields = previous_fields();

        let finished = Message::SearchFinished(Ok(result(FlagOutcome::NoFlag)));
        let _ = update(&mut app, finished);

        assert_eq!(app.fields.country, "Country: Japan");
        assert_eq!(app.fields.region, "");
        assert!(matches!(app.flag, FlagDisplay::Placeholder("No flag available")));
        assert_eq!(app.dialog, None);
    }

    #[test]
    fn loaded_flag_is_owned_by_state() {
        let img = RgbaImage::from_pixel(20, 10, Rgba([0, 0, 255, 255]));
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageFormat::Png).unwrap();
        let bitmap = decode(&png.into_inner()).unwrap();

        let mut app = app();
        let loaded = Message::SearchFinished(Ok(result(FlagOutcome::Loaded(bitmap))));
        let _ = update(&mut app, loaded);
        assert!(matches!(app.flag, FlagDisplay::Image(_)));

        let _ = update(&mut app, Message::SearchFinished(Ok(result(FlagOutcome::Failed))));
        assert!(matches!(app.flag, FlagDisplay::Placeholder("Error loading flag")));
    }

    #[test]
    fn dismiss_closes_dialog() {
        let mut app = app();
        app.dialog = Some(Dialog::lookup_failed());
        let _ = update(&mut app, Message::DismissDialog);
        assert_eq!(app.dialog, None);
    }

    #[test]
    fn each_flag_outcome_maps_to_its_display() {
        let mut app = app();

        let _ = update(&mut app, Message::SearchFinished(Ok(result(FlagOutcome::NoFlag))));
        assert!(matches!(app.flag, FlagDisplay::Placeholder(NO_FLAG)));

        let _ = update(&mut app, Message::SearchFinished(Ok(result(FlagOutcome::Failed))));
        assert!(matches!(app.flag, FlagDisplay::Placeholder(FLAG_ERROR)));
    }
}
