use iced::widget::{button, column, container, row, text, Space};
use iced::{Border, Color, Element, Length, Padding, Shadow};

use crate::components::{icon, skeleton_style};
use crate::detail::WatchData;
use crate::media::{Message, ACCENT_RED, SURFACE_DARK_GRAY, TEXT_GRAY, TEXT_WHITE};
use crate::tmdb::ImageSize;
use crate::video::{find_trailer, youtube_watch_url};
use crate::Cineview;

const ICON_PLAY_FILL: char = '\u{F4F4}';
const ICON_FILM: char = '\u{F3A9}';
const ICON_STAR_FILL: char = '\u{F586}';

const BACKDROP_HEIGHT: f32 = 420.0;
const POSTER_WIDTH: f32 = 200.0;
const POSTER_HEIGHT: f32 = 300.0;

impl Cineview {
    pub fn view_watch_page(&self) -> Element<'_, Message> {
        let Some(state) = &self.watch else {
            return self.view_error_state("Nothing to show here.");
        };

        if state.loading {
            return self.view_watch_skeleton();
        }
        if let Some(error) = &state.error {
            return self.view_error_state(error);
        }
        let Some(data) = &state.data else {
            return self.view_watch_skeleton();
        };

        let backdrop = self.view_watch_backdrop(data);
        let content = self.view_watch_content(data);

        column![backdrop, content]
            .spacing(32)
            .width(Length::Fill)
            .padding(Padding::new(0.0).bottom(48.0))
            .into()
    }

    fn view_watch_skeleton(&self) -> Element<'_, Message> {
        let backdrop = container(Space::new().width(Length::Fill).height(Length::Fixed(BACKDROP_HEIGHT)))
            .style(skeleton_style(0.0));
        let poster = container(Space::new().width(POSTER_WIDTH).height(POSTER_HEIGHT))
            .style(skeleton_style(8.0));
        let lines = column![
            container(Space::new().width(300.0).height(26.0)).style(skeleton_style(4.0)),
            container(Space::new().width(200.0).height(14.0)).style(skeleton_style(4.0)),
            container(Space::new().width(Length::Fill).height(14.0)).style(skeleton_style(4.0)),
        ]
        .spacing(12)
        .width(Length::Fill);

        let content = row![poster, lines]
            .spacing(32)
            .padding(Padding::new(0.0).left(48.0).right(48.0));

        column![backdrop, content].spacing(32).width(Length::Fill).into()
    }

    fn view_watch_backdrop(&self, data: &WatchData) -> Element<'_, Message> {
        let handle = data.item.backdrop_path.as_ref().and_then(|path| {
            let url = self
                .tmdb_client
                .as_ref()?
                .image_url(path, ImageSize::Backdrop);
            self.image_cache.get(&url).cloned()
        });

        let image: Element<Message> = match handle {
            Some(backdrop) => iced::widget::image(backdrop)
                .width(Length::Fill)
                .height(Length::Fixed(BACKDROP_HEIGHT))
                .content_fit(iced::ContentFit::Cover)
                .into(),
            None => container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fixed(BACKDROP_HEIGHT))
                .style(|_theme| container::Style {
                    background: Some(iced::Background::Color(SURFACE_DARK_GRAY)),
                    ..Default::default()
                })
                .into(),
        };

        let overlay = container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Gradient(iced::Gradient::Linear(
                    iced::gradient::Linear::new(std::f32::consts::PI)
                        .add_stop(0.0, Color::from_rgba(0.0, 0.0, 0.0, 0.9))
                        .add_stop(0.5, Color::from_rgba(0.0, 0.0, 0.0, 0.4))
                        .add_stop(0.9, Color::TRANSPARENT),
                ))),
                ..Default::default()
            });

        iced::widget::stack![image, overlay]
            .width(Length::Fill)
            .height(Length::Fixed(BACKDROP_HEIGHT))
            .into()
    }

    fn view_watch_content(&self, data: &WatchData) -> Element<'_, Message> {
        let poster = self.view_watch_poster(data);

        let title = text(data.item.title.clone())
            .size(32)
            .color(TEXT_WHITE)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            });

        let mut meta: Vec<Element<Message>> = vec![
            icon(ICON_STAR_FILL).size(12).color(TEXT_GRAY).into(),
            text(format!("{:.1}", data.item.vote_average))
                .size(14)
                .color(TEXT_GRAY)
                .into(),
        ];
        if let Some(year) = data.item.release_year() {
            meta.push(text("•").size(14).color(TEXT_GRAY).into());
            meta.push(text(year.to_string()).size(14).color(TEXT_GRAY).into());
        }
        if let Some(runtime) = data.runtime {
            meta.push(text("•").size(14).color(TEXT_GRAY).into());
            meta.push(text(format!("{} min", runtime)).size(14).color(TEXT_GRAY).into());
        }
        let meta_row = row(meta).spacing(8).align_y(iced::Alignment::Center);

        let overview = text(data.item.overview.clone()).size(15).color(TEXT_WHITE);

        let mut info = column![title, meta_row, overview].spacing(16).width(Length::Fill);

        // The button only exists when an actual trailer is available; no
        // search fallback on this page.
        if let Some(trailer) = find_trailer(&data.videos) {
            let trailer_button = button(
                row![
                    icon(ICON_PLAY_FILL).size(14).color(TEXT_WHITE),
                    text("Watch Trailer").size(15).color(TEXT_WHITE)
                ]
                .spacing(8)
                .align_y(iced::Alignment::Center),
            )
            .padding(Padding::new(10.0).left(20.0).right(20.0))
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
            .on_press(Message::OpenExternal(youtube_watch_url(&trailer.key)));
            info = info.push(trailer_button);
        }

        if let Some(providers) = &data.providers {
            info = info.push(self.view_providers_section(providers));
        }

        row![poster, info]
            .spacing(32)
            .padding(Padding::new(0.0).left(48.0).right(48.0))
            .width(Length::Fill)
            .into()
    }

    fn view_watch_poster(&self, data: &WatchData) -> Element<'_, Message> {
        let handle = data.item.poster_path.as_ref().and_then(|path| {
            let url = self.tmdb_client.as_ref()?.image_url(path, ImageSize::Poster);
            self.image_cache.get(&url).cloned()
        });

        match handle {
            Some(poster) => container(
                iced::widget::image(poster)
                    .width(Length::Fixed(POSTER_WIDTH))
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
            None => container(icon(ICON_FILM).size(36).color(TEXT_GRAY))
                .width(Length::Fixed(POSTER_WIDTH))
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
}
