use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Border, Color, Element, Length, Padding, Shadow};

use crate::components::icon;
use crate::media::{
    truncate_description, LoadingState, MediaItem, Message, Route, ACCENT_RED, SURFACE_DARK_GRAY,
    TEXT_GRAY, TEXT_WHITE,
};
use crate::tmdb::ImageSize;
use crate::Cineview;

const HERO_HEIGHT: f32 = 560.0;
const ICON_PLAY_FILL: char = '\u{F4F4}';
const ICON_FILM: char = '\u{F3A9}';

impl Cineview {
    pub fn view_home_page(&self) -> Element<'_, Message> {
        match &self.home.loading {
            LoadingState::Loading => self.view_home_skeleton(),
            LoadingState::Error(message) => self.view_error_state(message),
            LoadingState::Idle => match &self.home.content {
                Some(content) => {
                    let mut parts: Vec<Element<Message>> = Vec::new();
                    if let Some(banner) = &content.banner {
                        parts.push(self.view_hero(banner));
                    }
                    for section in &content.sections {
                        parts.push(
                            container(self.view_section_row(section))
                                .padding(Padding::new(0.0).left(48.0).right(48.0))
                                .into(),
                        );
                    }
                    Column::with_children(parts)
                        .spacing(48)
                        .width(Length::Fill)
                        .into()
                }
                None => self.view_home_skeleton(),
            },
        }
    }

    fn view_home_skeleton(&self) -> Element<'_, Message> {
        let hero = container(Space::new().width(Length::Fill).height(Length::Fixed(HERO_HEIGHT)))
            .style(crate::components::skeleton_style(0.0));

        let mut sections: Vec<Element<Message>> = vec![hero.into()];
        for _ in 0..2 {
            let cards: Vec<Element<Message>> = (0..8).map(|_| self.view_skeleton_card()).collect();
            sections.push(
                container(
                    iced::widget::Row::with_children(cards)
                        .spacing(16)
                        .align_y(iced::Alignment::Start),
                )
                .padding(Padding::new(0.0).left(48.0).right(48.0))
                .into(),
            );
        }
        Column::with_children(sections)
            .spacing(48)
            .width(Length::Fill)
            .into()
    }

    /// Banner promoted from the first trending entry that has a backdrop.
    fn view_hero(&self, banner: &MediaItem) -> Element<'_, Message> {
        let hero_title = text(banner.title.clone())
            .size(48)
            .color(TEXT_WHITE)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            });

        let truncated_overview = truncate_description(&banner.overview, 200);
        let hero_overview =
            container(text(truncated_overview).size(16).color(TEXT_GRAY)).max_width(500.0);

        let details_button = self.view_hero_details_button(banner);
        let trailer_button = self.view_hero_trailer_button(banner);
        let button_row = row![details_button, trailer_button]
            .spacing(12)
            .align_y(iced::Alignment::Center);

        let hero_text_content = column![hero_title, hero_overview, button_row]
            .spacing(20)
            .padding(Padding::new(64.0).left(64.0).right(64.0));

        let hero_left_gradient = container(hero_text_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(iced::alignment::Vertical::Center)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Gradient(iced::Gradient::Linear(
                    iced::gradient::Linear::new(0.0)
                        .add_stop(0.0, Color::from_rgba(0.0, 0.0, 0.0, 0.99))
                        .add_stop(0.3, Color::from_rgba(0.0, 0.0, 0.0, 0.9))
                        .add_stop(0.5, Color::from_rgba(0.0, 0.0, 0.0, 0.6))
                        .add_stop(0.7, Color::from_rgba(0.0, 0.0, 0.0, 0.25))
                        .add_stop(0.9, Color::TRANSPARENT),
                ))),
                ..Default::default()
            });

        let backdrop = self.view_hero_backdrop(banner);

        iced::widget::stack![backdrop, hero_left_gradient]
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .into()
    }

    fn view_hero_backdrop(&self, banner: &MediaItem) -> Element<'_, Message> {
        let handle = banner.backdrop_path.as_ref().and_then(|path| {
            let url = self
                .tmdb_client
                .as_ref()?
                .image_url(path, ImageSize::Backdrop);
            self.image_cache.get(&url).cloned()
        });

        match handle {
            Some(backdrop) => iced::widget::image(backdrop)
                .width(Length::Fill)
                .height(Length::Fixed(HERO_HEIGHT))
                .content_fit(iced::ContentFit::Cover)
                .into(),
            None => container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fixed(HERO_HEIGHT))
                .style(|_theme| container::Style {
                    background: Some(iced::Background::Color(SURFACE_DARK_GRAY)),
                    ..Default::default()
                })
                .into(),
        }
    }

    fn view_hero_details_button(&self, banner: &MediaItem) -> Element<'_, Message> {
        button(
            row![
                icon(ICON_PLAY_FILL).size(14).color(TEXT_WHITE),
                text("View Details").size(16).color(TEXT_WHITE)
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center),
        )
        .padding(Padding::new(12.0).left(24.0).right(24.0))
        .style(|_theme, status| {
            let background_color = match status {
                button::Status::Hovered => Color::from_rgb(0.698, 0.027, 0.063),
                _ => ACCENT_RED,
            };
            button::Style {
                background: Some(iced::Background::Color(background_color)),
                text_color: TEXT_WHITE,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            }
        })
        .on_press(Message::Navigate(Route::for_item(banner)))
        .into()
    }

    fn view_hero_trailer_button(&self, banner: &MediaItem) -> Element<'_, Message> {
        button(
            row![
                icon(ICON_FILM).size(14).color(TEXT_WHITE),
                text("Watch Trailer").size(16).color(TEXT_WHITE)
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center),
        )
        .padding(Padding::new(12.0).left(24.0).right(24.0))
        .style(|_theme, status| {
            let background_color = match status {
                button::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(iced::Background::Color(background_color)),
                text_color: TEXT_WHITE,
                border: Border {
                    color: TEXT_WHITE,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            }
        })
        .on_press(Message::BannerTrailerRequested(banner.id))
        .into()
    }
}
