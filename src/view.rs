//! UI rendering logic

use iced::font::Weight;
use iced::widget::{
    button, center, column, container, image, opaque, row, stack, text, text_input, Space,
};
use iced::{Alignment, Color, Element, Font, Length};

use crate::flags::{FLAG_HEIGHT, FLAG_WIDTH};
use crate::model::{App, Dialog, DialogKind, FlagDisplay, Message};
use crate::styles::{
    backdrop_style, banner_style, dialog_button_style, dialog_style, panel_style,
    search_button_style, window_style, ACCENT, ERROR, INFO, INK, WARNING,
};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Helper to create white text with consistent styling.
fn white_text(content: &str, size: u32) -> text::Text<'_> {
    text(content)
        .size(size)
        .style(|_theme| iced::widget::text::Style {
            color: Some(Color::WHITE),
        })
}

/// Helper to create text in a fixed colour.
fn colored_text(content: &str, size: u32, color: Color) -> text::Text<'_> {
    text(content)
        .size(size)
        .style(move |_theme| iced::widget::text::Style { color: Some(color) })
}

/// Flag area: always 150×100 so the layout does not jump between searches.
fn flag_view(flag: &FlagDisplay) -> Element<'_, Message> {
    let width = Length::Fixed(FLAG_WIDTH as f32);
    let height = Length::Fixed(FLAG_HEIGHT as f32);

    match flag {
        FlagDisplay::Empty => Space::new().width(width).height(height).into(),
        FlagDisplay::Image(handle) => image(handle.clone()).width(width).height(height).into(),
        FlagDisplay::Placeholder(label) => container(white_text(label, 14))
            .width(width)
            .height(height)
            .center_x(width)
            .center_y(height)
            .into(),
    }
}

/// Modal dialog over a dimmed backdrop; blocks input to everything below.
fn dialog_overlay(dialog: &Dialog) -> Element<'_, Message> {
    let (icon, color) = match dialog.kind {
        DialogKind::Warning => ("⚠", WARNING),
        DialogKind::Info => ("ℹ", INFO),
        DialogKind::Error => ("✖", ERROR),
    };

    let ok_button = button(white_text("OK", 14))
        .padding([4.0, 22.0])
        .style(dialog_button_style)
        .on_press(Message::DismissDialog);

    let card = container(
        column![
            row![
                colored_text(icon, 22, color),
                colored_text(dialog.title, 18, INK).font(BOLD),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            colored_text(dialog.message, 14, INK),
            row![Space::new().width(Length::Fill), ok_button],
        ]
        .spacing(14),
    )
    .width(Length::Fixed(380.0))
    .padding(18)
    .style(dialog_style);

    opaque(center(card).style(backdrop_style))
}

/// Main window view
///
/// Layout structure (window is 600×700):
/// ┌──────────────────────────────────────────┐
/// │           🌍 Country Explorer            │
/// │ ┌──────────────────────────────────────┐ │
/// │ │ Enter Country Name: [____________]   │ │
/// │ │              [🔍 Search]             │ │
/// │ │           Country: ...  (×9)         │ │
/// │ │              [  flag  ]              │ │
/// │ └──────────────────────────────────────┘ │
/// │                 footer                   │
/// └──────────────────────────────────────────┘
pub fn main_view(app: &App) -> Element<'_, Message> {
    // 1. Title banner
    let title = container(white_text("🌍 Country Explorer", 24).font(BOLD))
        .padding([8.0, 18.0])
        .style(banner_style);

    // 2. Search row
    let entry = row![
        white_text("Enter Country Name:", 16),
        text_input("Country name", &app.query)
            .on_input(Message::QueryChanged)
            .on_submit(Message::Search)
            .size(16)
            .padding(6)
            .width(Length::Fixed(220.0)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let search_label = if app.searching { "Searching…" } else { "🔍 Search" };
    let search_button = button(text(search_label).size(16))
        .padding([6.0, 18.0])
        .style(search_button_style)
        .on_press_maybe((!app.searching).then_some(Message::Search));

    // 3. Nine result lines, country name in bold
    let results = column(
        app.fields
            .lines()
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let line = white_text(line, 16);
                if i == 0 {
                    line.font(BOLD).into()
                } else {
                    line.into()
                }
            })
            .collect::<Vec<Element<Message>>>(),
    )
    .spacing(4)
    .align_x(Alignment::Center);

    // 4. Panel with everything above plus the flag
    let panel = container(
        column![entry, search_button, results, flag_view(&app.flag)]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .padding(20)
    .style(panel_style);

    // 5. Footer
    let credits = colored_text("✨ Data from REST Countries and exchangerate.host", 13, ACCENT);
    let footer = container(credits)
        .padding([4.0, 12.0])
        .style(banner_style);

    let content = column![title, panel, footer]
        .spacing(15)
        .padding(15)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    let base = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(window_style);

    match &app.dialog {
        Some(dialog) => stack![base, dialog_overlay(dialog)].into(),
        None => base.into(),
    }
}
