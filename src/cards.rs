use iced::widget::{button, column, container, row, scrollable, text, Column, Row, Space};
use iced::{Border, Color, Element, Length, Padding, Shadow};

use crate::components::icon;
use crate::media::{
    ContentSection, MediaItem, Message, Route, SURFACE_DARK_GRAY, TEXT_GRAY, TEXT_WHITE,
};
use crate::tmdb::ImageSize;
use crate::Cineview;

const ICON_STAR_FILL: char = '\u{F586}';
const ICON_FILM: char = '\u{F3A9}';

const CARD_WIDTH: f32 = 150.0;
const POSTER_HEIGHT: f32 = 225.0;

pub fn hidden_horizontal_scrollbar_style(
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

impl Cineview {
    /// Poster card shared by every grid and row. Clicking navigates to the
    /// detail route matching the item's own media type.
    pub fn view_media_card(&self, item: &MediaItem) -> Element<'_, Message> {
        let poster = self.view_card_poster(item);

        let title = text(item.title.clone())
            .size(14)
            .color(TEXT_WHITE)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .wrapping(text::Wrapping::Word);

        let year = item.release_year().unwrap_or("—").to_string();
        let meta = row![
            text(year).size(12).color(TEXT_GRAY),
            Space::new().width(Length::Fill),
            icon(ICON_STAR_FILL).size(10).color(TEXT_GRAY),
            text(format!("{:.1}", item.vote_average)).size(12).color(TEXT_GRAY)
        ]
        .spacing(4)
        .align_y(iced::Alignment::Center);

        let card = column![poster, title, meta]
            .spacing(6)
            .width(Length::Fixed(CARD_WIDTH));

        iced::widget::mouse_area(card)
            .on_press(Message::Navigate(Route::for_item(item)))
            .into()
    }

    fn view_card_poster(&self, item: &MediaItem) -> Element<'_, Message> {
        let handle = item.poster_path.as_ref().and_then(|path| {
            let url = self.tmdb_client.as_ref()?.image_url(path, ImageSize::Poster);
            self.image_cache.get(&url).cloned()
        });

        match handle {
            Some(poster) => container(
                iced::widget::image(poster)
                    .width(Length::Fixed(CARD_WIDTH))
                    .height(Length::Fixed(POSTER_HEIGHT))
                    .content_fit(iced::ContentFit::Cover),
            )
            .style(|_| container::Style {
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into(),
            None => container(icon(ICON_FILM).size(32).color(TEXT_GRAY))
                .width(Length::Fixed(CARD_WIDTH))
                .height(Length::Fixed(POSTER_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(|_| container::Style {
                    background: Some(iced::Background::Color(SURFACE_DARK_GRAY)),
                    border: Border {
                        radius: 8.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .into(),
        }
    }

    pub fn view_card_grid(&self, items: &[MediaItem]) -> Element<'_, Message> {
        let cards_per_row = 5;
        let mut rows: Vec<Element<Message>> = Vec::new();

        for chunk in items.chunks(cards_per_row) {
            let row_cards: Vec<Element<Message>> =
                chunk.iter().map(|item| self.view_media_card(item)).collect();
            rows.push(
                Row::with_children(row_cards)
                    .spacing(16)
                    .align_y(iced::Alignment::Start)
                    .into(),
            );
        }

        Column::with_children(rows)
            .spacing(24)
            .width(Length::Fill)
            .into()
    }

    pub fn view_section_row(&self, section: &ContentSection) -> Element<'_, Message> {
        let section_title = text(section.title)
            .size(24)
            .color(TEXT_WHITE)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            });

        let see_all = button(text("See All →").size(13).color(TEXT_GRAY))
            .padding(Padding::new(6.0).left(12.0).right(12.0))
            .style(|_theme, status| {
                let color = match status {
                    button::Status::Hovered => TEXT_WHITE,
                    _ => TEXT_GRAY,
                };
                button::Style {
                    background: Some(iced::Background::Color(Color::TRANSPARENT)),
                    text_color: color,
                    border: Border::default(),
                    shadow: Shadow::default(),
                    snap: false,
                }
            })
            .on_press(Message::Navigate(section.see_all.clone()));

        let header = row![section_title, Space::new().width(Length::Fill), see_all]
            .align_y(iced::Alignment::Center);

        let cards: Vec<Element<Message>> = section
            .items
            .iter()
            .take(20)
            .map(|item| self.view_media_card(item))
            .collect();

        let cards_row = Row::with_children(cards)
            .spacing(16)
            .align_y(iced::Alignment::Start);

        let scroll = scrollable(cards_row)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(0).scroller_width(0),
            ))
            .width(Length::Fill)
            .style(hidden_horizontal_scrollbar_style);

        column![header, scroll].spacing(16).width(Length::Fill).into()
    }
}
