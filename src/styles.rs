//! Colours and widget styles

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const BACKGROUND: Color = Color::from_rgb8(0xCF, 0xD6, 0xC4);
pub const BANNER: Color = Color::from_rgb8(0x13, 0x13, 0x11);
pub const PANEL: Color = Color::from_rgb8(0x29, 0x4D, 0x61);
pub const ACCENT: Color = Color::from_rgb8(0xDC, 0xAB, 0x09);
pub const INK: Color = Color::from_rgb(0.12, 0.12, 0.12);
pub const WARNING: Color = Color::from_rgb(0.85, 0.55, 0.0);
pub const INFO: Color = Color::from_rgb(0.16, 0.45, 0.80);
pub const ERROR: Color = Color::from_rgb(0.80, 0.18, 0.18);

/// Outer window background.
pub fn window_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        ..Default::default()
    }
}

/// Title banner across the top.
pub fn banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BANNER)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Framed panel holding the search field and results.
pub fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL)),
        border: Border {
            color: Color::from_rgb(0.10, 0.22, 0.29),
            width: 2.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a modal dialog.
pub fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.55,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog card.
pub fn dialog_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: Some(INK),
        border: Border {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Primary "Search" button.
pub fn search_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color::from_rgb(0.95, 0.78, 0.20),
        button::Status::Pressed => Color::from_rgb(0.78, 0.60, 0.02),
        button::Status::Disabled => Color::from_rgba(0.86, 0.67, 0.04, 0.45),
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: BANNER,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// "OK" button inside a dialog.
pub fn dialog_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb(0.20, 0.40, 0.52),
        _ => PANEL,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
