use iced::widget::{button, column, container, row, scrollable, text, text_input, Row, Space};
use iced::{Border, Color, Element, Length, Padding, Shadow};

use crate::media::{
    Message, NavItem, Page, Route, ACCENT_RED, SURFACE_DARK_GRAY, TEXT_GRAY, TEXT_WHITE,
};
use crate::Cineview;

const ICON_SEARCH: char = '\u{F52A}';
const ICON_FILM: char = '\u{F3A9}';

pub fn icon(icon_char: char) -> iced::widget::Text<'static> {
    text(icon_char.to_string()).font(iced::Font {
        family: iced::font::Family::Name("bootstrap-icons"),
        ..Default::default()
    })
}

pub fn hidden_vertical_scrollbar_style(
    _theme: &iced::Theme,
    _status: scrollable::Status,
) -> scrollable::Style {
    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: iced::Background::Color(Color::TRANSPARENT),
                border: Border::default(),
            },
        },
        horizontal_rail: scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: iced::Background::Color(Color::TRANSPARENT),
                border: Border::default(),
            },
        },
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: iced::Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: Color::TRANSPARENT,
        },
    }
}

pub fn skeleton_style(radius: f32) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(iced::Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.06))),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl Cineview {
    pub fn view_navbar(&self) -> Element<'_, Message> {
        let logo = self.view_logo();
        let navigation = self.view_navigation();
        let search_bar = self.view_search_bar();

        let left_section = row![logo, navigation]
            .spacing(32)
            .align_y(iced::Alignment::Center);

        let header_content = row![left_section, Space::new().width(Length::Fill), search_bar]
            .padding(Padding::new(16.0).left(48.0).right(48.0))
            .align_y(iced::Alignment::Center);

        container(header_content)
            .width(Length::Fill)
            .height(Length::Fixed(80.0))
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.85))),
                ..Default::default()
            })
            .into()
    }

    fn view_logo(&self) -> Element<'_, Message> {
        let logo = row![
            icon(ICON_FILM).size(20).color(ACCENT_RED),
            text("Cineview").size(28).color(TEXT_WHITE).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center);

        button(logo)
            .padding(0)
            .style(|_theme, _status| button::Style {
                background: Some(iced::Background::Color(Color::TRANSPARENT)),
                text_color: TEXT_WHITE,
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            })
            .on_press(Message::Navigate(Route::Home))
            .into()
    }

    fn active_nav(&self) -> Option<NavItem> {
        match self.current_page {
            Page::Home => Some(NavItem::Home),
            Page::Movies => Some(NavItem::Movies),
            Page::Series => Some(NavItem::Series),
            Page::Search | Page::Detail | Page::Watch => None,
        }
    }

    fn view_navigation(&self) -> Element<'_, Message> {
        let nav_items = [
            (NavItem::Home, "Home", Route::Home),
            (NavItem::Movies, "Movies", Route::Movies(None)),
            (NavItem::Series, "Web Series", Route::Series(None)),
        ];

        let nav_buttons: Vec<Element<Message>> = nav_items
            .into_iter()
            .map(|(nav_item, label, route)| self.view_nav_button(nav_item, label, route))
            .collect();

        Row::with_children(nav_buttons)
            .spacing(24)
            .align_y(iced::Alignment::Center)
            .into()
    }

    fn view_nav_button(
        &self,
        nav_item: NavItem,
        label: &'static str,
        route: Route,
    ) -> Element<'_, Message> {
        let is_active = self.active_nav() == Some(nav_item);
        let text_color = if is_active { TEXT_WHITE } else { TEXT_GRAY };

        let button_content: Element<Message> = if is_active {
            let label_text = text(label).size(14).color(text_color);
            let underline = container(Space::new().width(Length::Fill).height(2)).style(|_theme| {
                container::Style {
                    background: Some(iced::Background::Color(ACCENT_RED)),
                    ..Default::default()
                }
            });
            column![label_text, underline].spacing(4).into()
        } else {
            text(label).size(14).color(text_color).into()
        };

        button(button_content)
            .padding(Padding::new(8.0).left(12.0).right(12.0))
            .style(move |_theme, status| {
                let final_color = match status {
                    button::Status::Hovered => TEXT_WHITE,
                    _ if is_active => TEXT_WHITE,
                    _ => TEXT_GRAY,
                };
                button::Style {
                    background: Some(iced::Background::Color(Color::TRANSPARENT)),
                    text_color: final_color,
                    border: Border::default(),
                    shadow: Shadow::default(),
                    snap: false,
                }
            })
            .on_press(Message::Navigate(route))
            .into()
    }

    fn view_search_bar(&self) -> Element<'_, Message> {
        let search_icon = icon(ICON_SEARCH).size(14).color(TEXT_GRAY);

        let search_input = text_input("Search movies, series...", &self.search_input)
            .on_input(Message::SearchInputChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(8)
            .width(Length::Fixed(200.0))
            .style(|_theme, _status| text_input::Style {
                background: iced::Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                icon: TEXT_GRAY,
                placeholder: TEXT_GRAY,
                value: TEXT_WHITE,
                selection: ACCENT_RED,
            });

        let search_content = row![search_icon, search_input]
            .spacing(8)
            .align_y(iced::Alignment::Center);

        container(search_content)
            .padding(Padding::new(4.0).left(12.0).right(8.0))
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
                border: Border {
                    color: TEXT_GRAY,
                    width: 1.0,
                    radius: 24.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn view_error_state<'a>(&'a self, error_message: &'a str) -> Element<'a, Message> {
        let error_text = text(error_message).size(18).color(ACCENT_RED);
        let retry_button = self.view_retry_button();

        container(
            column![error_text, retry_button]
                .spacing(16)
                .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(420.0))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    /// Shown above content kept on screen from the last successful cycle.
    pub fn view_error_banner<'a>(&'a self, error_message: &'a str) -> Element<'a, Message> {
        let error_text = text(error_message).size(14).color(TEXT_WHITE);
        let banner = row![error_text, Space::new().width(Length::Fill), self.view_retry_button()]
            .spacing(16)
            .align_y(iced::Alignment::Center);

        container(banner)
            .width(Length::Fill)
            .padding(Padding::new(12.0).left(16.0).right(16.0))
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(Color::from_rgba(
                    0.898, 0.035, 0.078, 0.25,
                ))),
                border: Border {
                    color: ACCENT_RED,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_retry_button(&self) -> Element<'_, Message> {
        button(text("Retry").size(14).color(TEXT_WHITE))
            .padding(Padding::new(8.0).left(20.0).right(20.0))
            .style(|_theme, status| {
                let bg = match status {
                    button::Status::Hovered => Color::from_rgb(0.7, 0.02, 0.06),
                    _ => ACCENT_RED,
                };
                button::Style {
                    background: Some(iced::Background::Color(bg)),
                    text_color: TEXT_WHITE,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            })
            .on_press(Message::RetryLoad)
            .into()
    }

    pub fn view_no_results<'a>(&'a self, message: String, suggestion: &'a str) -> Element<'a, Message> {
        let headline = text(message).size(24).color(TEXT_GRAY).font(iced::Font {
            weight: iced::font::Weight::Medium,
            ..Default::default()
        });
        let hint = text(suggestion).size(16).color(TEXT_GRAY);

        container(
            column![headline, hint]
                .spacing(12)
                .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(300.0))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    pub fn view_skeleton_card(&self) -> Element<'_, Message> {
        container(Space::new().width(150.0).height(225.0))
            .style(skeleton_style(8.0))
            .into()
    }

    pub fn view_skeleton_grid(&self, count: usize) -> Element<'_, Message> {
        let cards_per_row = 5;
        let mut rows: Vec<Element<Message>> = Vec::new();
        let mut remaining = count;
        while remaining > 0 {
            let in_row = remaining.min(cards_per_row);
            let cards: Vec<Element<Message>> =
                (0..in_row).map(|_| self.view_skeleton_card()).collect();
            rows.push(
                Row::with_children(cards)
                    .spacing(16)
                    .align_y(iced::Alignment::Start)
                    .into(),
            );
            remaining -= in_row;
        }
        iced::widget::Column::with_children(rows)
            .spacing(16)
            .width(Length::Fill)
            .into()
    }

    pub fn view_footer(&self) -> Element<'_, Message> {
        let line = text("Cineview — catalog data by TMDB. This product uses the TMDB API but is not endorsed or certified by TMDB.")
            .size(12)
            .color(TEXT_GRAY);
        container(line)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(Padding::new(24.0))
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(SURFACE_DARK_GRAY)),
                ..Default::default()
            })
            .into()
    }
}
