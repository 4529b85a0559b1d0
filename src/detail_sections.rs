use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Border, Color, Element, Length, Padding, Shadow};

use crate::components::{icon, skeleton_style};
use crate::detail::{synthesize_description, CrewGroups, DetailData};
use crate::media::{
    CastMember, MediaKind, Message, ProviderRegion, Route, SURFACE_DARK_GRAY, TEXT_GRAY,
    TEXT_WHITE,
};
use crate::tmdb::ImageSize;
use crate::video::trailer_action_url;
use crate::Cineview;

const ICON_PLAY_FILL: char = '\u{F4F4}';
const ICON_FILM: char = '\u{F3A9}';
const ICON_PERSON_FILL: char = '\u{F4DA}';
const ICON_STAR_FILL: char = '\u{F586}';

const BACKDROP_HEIGHT: f32 = 420.0;
const POSTER_WIDTH: f32 = 220.0;
const POSTER_HEIGHT: f32 = 330.0;

fn format_runtime(minutes: u32) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

impl Cineview {
    pub fn view_detail_page(&self) -> Element<'_, Message> {
        let Some(state) = &self.detail else {
            return self.view_error_state("Nothing to show here.");
        };

        if state.loading {
            return self.view_detail_skeleton();
        }
        if let Some(error) = &state.error {
            return self.view_error_state(error);
        }
        let Some(data) = &state.data else {
            return self.view_detail_skeleton();
        };

        let backdrop = self.view_detail_backdrop(data);
        let info = self.view_detail_info(data);
        let crew = self.view_crew_section(data);
        let cast = self.view_cast_section(&data.cast);
        let similar = self.view_similar_section(data);

        let mut parts: Vec<Element<Message>> = vec![backdrop, info];
        if let Some(crew_section) = crew {
            parts.push(crew_section);
        }
        if !data.cast.is_empty() {
            parts.push(cast);
        }
        if let Some(similar_section) = similar {
            parts.push(similar_section);
        }

        Column::with_children(parts)
            .spacing(40)
            .width(Length::Fill)
            .padding(Padding::new(0.0).bottom(48.0))
            .into()
    }

    fn view_detail_skeleton(&self) -> Element<'_, Message> {
        let backdrop = container(Space::new().width(Length::Fill).height(Length::Fixed(BACKDROP_HEIGHT)))
            .style(skeleton_style(0.0));
        let poster = container(Space::new().width(POSTER_WIDTH).height(POSTER_HEIGHT))
            .style(skeleton_style(8.0));
        let lines = column![
            container(Space::new().width(320.0).height(28.0)).style(skeleton_style(4.0)),
            container(Space::new().width(220.0).height(16.0)).style(skeleton_style(4.0)),
            container(Space::new().width(Length::Fill).height(16.0)).style(skeleton_style(4.0)),
            container(Space::new().width(Length::Fill).height(16.0)).style(skeleton_style(4.0)),
        ]
        .spacing(12)
        .width(Length::Fill);

        let content = row![poster, lines]
            .spacing(32)
            .padding(Padding::new(0.0).left(48.0).right(48.0));

        column![backdrop, content].spacing(32).width(Length::Fill).into()
    }

    fn view_detail_backdrop(&self, data: &DetailData) -> Element<'_, Message> {
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

        let bottom_gradient = container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Gradient(iced::Gradient::Linear(
                    iced::gradient::Linear::new(std::f32::consts::PI)
                        .add_stop(0.0, Color::from_rgba(0.0, 0.0, 0.0, 0.9))
                        .add_stop(0.4, Color::from_rgba(0.0, 0.0, 0.0, 0.3))
                        .add_stop(0.7, Color::TRANSPARENT),
                ))),
                ..Default::default()
            });

        iced::widget::stack![image, bottom_gradient]
            .width(Length::Fill)
            .height(Length::Fixed(BACKDROP_HEIGHT))
            .into()
    }

    fn view_detail_info(&self, data: &DetailData) -> Element<'_, Message> {
        let poster = self.view_detail_poster(data);

        let title = text(data.item.title.clone())
            .size(36)
            .color(TEXT_WHITE)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            });

        let meta = self.view_detail_meta(data);
        let overview = text(data.item.overview.clone()).size(15).color(TEXT_WHITE);
        let blurb = text(synthesize_description(data)).size(13).color(TEXT_GRAY);
        let genres = self.view_genre_chips(data);
        let actions = self.view_detail_actions(data);

        let mut info = column![title, meta, overview, blurb]
            .spacing(16)
            .width(Length::Fill);
        if let Some(genre_row) = genres {
            info = info.push(genre_row);
        }
        info = info.push(actions);
        if let Some(providers) = &data.providers {
            info = info.push(self.view_providers_section(providers));
        }

        row![poster, info]
            .spacing(32)
            .padding(Padding::new(0.0).left(48.0).right(48.0))
            .width(Length::Fill)
            .into()
    }

    fn view_detail_poster(&self, data: &DetailData) -> Element<'_, Message> {
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
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                    offset: iced::Vector::new(0.0, 6.0),
                    blur_radius: 12.0,
                },
                ..Default::default()
            })
            .into(),
            None => container(icon(ICON_FILM).size(40).color(TEXT_GRAY))
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

    fn view_detail_meta(&self, data: &DetailData) -> Element<'_, Message> {
        let mut items: Vec<Element<'_, Message>> = Vec::new();

        if let Some(year) = data.item.release_year() {
            items.push(text(year.to_string()).size(14).color(TEXT_GRAY).into());
        }

        if !items.is_empty() {
            items.push(text("•").size(14).color(TEXT_GRAY).into());
        }
        items.push(icon(ICON_STAR_FILL).size(12).color(TEXT_GRAY).into());
        items.push(
            text(format!("{:.1} / 10", data.item.vote_average))
                .size(14)
                .color(TEXT_GRAY)
                .into(),
        );

        match data.item.media_type {
            MediaKind::Movie => {
                if let Some(runtime) = data.runtime {
                    items.push(text("•").size(14).color(TEXT_GRAY).into());
                    items.push(
                        text(format_runtime(runtime)).size(14).color(TEXT_GRAY).into(),
                    );
                }
            }
            MediaKind::Series => {
                if let Some(seasons) = data.number_of_seasons {
                    items.push(text("•").size(14).color(TEXT_GRAY).into());
                    let label = if seasons == 1 {
                        String::from("1 Season")
                    } else {
                        format!("{} Seasons", seasons)
                    };
                    items.push(text(label).size(14).color(TEXT_GRAY).into());
                }
            }
        }

        row(items).spacing(8).align_y(iced::Alignment::Center).into()
    }

    fn view_genre_chips(&self, data: &DetailData) -> Option<Element<'_, Message>> {
        if data.genres.is_empty() {
            return None;
        }
        let chips: Vec<Element<Message>> = data
            .genres
            .iter()
            .map(|genre| {
                container(text(genre.name.clone()).size(12).color(TEXT_WHITE))
                    .padding(Padding::new(4.0).left(10.0).right(10.0))
                    .style(|_theme| container::Style {
                        background: Some(iced::Background::Color(Color::from_rgba(
                            1.0, 1.0, 1.0, 0.1,
                        ))),
                        border: Border {
                            color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
                            width: 1.0,
                            radius: 12.0.into(),
                        },
                        ..Default::default()
                    })
                    .into()
            })
            .collect();

        Some(Row::with_children(chips).spacing(8).into())
    }

    fn view_detail_actions(&self, data: &DetailData) -> Element<'_, Message> {
        let trailer_url = trailer_action_url(&data.videos, &data.item.title);
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
                _ => crate::media::ACCENT_RED,
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
        .on_press(Message::OpenExternal(trailer_url));

        let mut actions = row![trailer_button].spacing(12).align_y(iced::Alignment::Center);

        if data.item.media_type == MediaKind::Movie {
            let watch_button = button(text("Where to Watch").size(15).color(TEXT_WHITE))
                .padding(Padding::new(10.0).left(20.0).right(20.0))
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
                .on_press(Message::Navigate(Route::Watch(data.item.id)));
            actions = actions.push(watch_button);
        }

        actions.into()
    }

    pub fn view_providers_section(&self, providers: &ProviderRegion) -> Element<'_, Message> {
        let heading = text("Available On").size(18).color(TEXT_WHITE).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

        let logos: Vec<Element<Message>> = providers
            .flatrate
            .iter()
            .map(|provider| self.view_provider_logo(provider, providers.link.clone()))
            .collect();

        column![
            heading,
            Row::with_children(logos).spacing(12).align_y(iced::Alignment::Center)
        ]
        .spacing(12)
        .into()
    }

    fn view_provider_logo(
        &self,
        provider: &crate::media::WatchProvider,
        link: Option<String>,
    ) -> Element<'_, Message> {
        let handle = provider.logo_path.as_ref().and_then(|path| {
            let url = self.tmdb_client.as_ref()?.image_url(path, ImageSize::Logo);
            self.image_cache.get(&url).cloned()
        });

        let logo: Element<Message> = match handle {
            Some(image) => iced::widget::image(image)
                .width(Length::Fixed(44.0))
                .height(Length::Fixed(44.0))
                .content_fit(iced::ContentFit::Cover)
                .into(),
            None => container(
                text(provider.provider_name.clone()).size(11).color(TEXT_WHITE),
            )
            .width(Length::Fixed(44.0))
            .height(Length::Fixed(44.0))
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
        };

        match link {
            Some(url) => iced::widget::mouse_area(logo)
                .on_press(Message::OpenExternal(url))
                .into(),
            None => logo,
        }
    }

    /// Crew buckets rendered in fixed order; absent entirely when no listed
    /// crew member matches a bucket.
    fn view_crew_section(&self, data: &DetailData) -> Option<Element<'_, Message>> {
        let groups = CrewGroups::from_crew(&data.crew);
        if groups.is_empty() {
            return None;
        }

        let mut rows: Vec<Element<Message>> = Vec::new();
        let buckets = [
            ("Director", &groups.directors),
            ("Producers", &groups.producers),
            ("Writers", &groups.writers),
        ];
        for (label, members) in buckets {
            if members.is_empty() {
                continue;
            }
            let names = members
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            rows.push(
                row![
                    text(label).size(14).color(TEXT_GRAY).width(Length::Fixed(100.0)),
                    text(names).size(14).color(TEXT_WHITE)
                ]
                .spacing(16)
                .into(),
            );
        }

        Some(
            container(Column::with_children(rows).spacing(8))
                .padding(Padding::new(0.0).left(48.0).right(48.0))
                .into(),
        )
    }

    fn view_cast_section(&self, cast: &[CastMember]) -> Element<'_, Message> {
        let heading = text("Top Cast").size(24).color(TEXT_WHITE).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

        let cards: Vec<Element<Message>> = cast
            .iter()
            .take(14)
            .map(|member| self.view_cast_card(member))
            .collect();

        let cast_row = iced::widget::scrollable(
            Row::with_children(cards).spacing(16).align_y(iced::Alignment::Start),
        )
        .direction(iced::widget::scrollable::Direction::Horizontal(
            iced::widget::scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill)
        .style(crate::cards::hidden_horizontal_scrollbar_style);

        container(column![heading, cast_row].spacing(16))
            .padding(Padding::new(0.0).left(48.0).right(48.0))
            .into()
    }

    fn view_cast_card(&self, member: &CastMember) -> Element<'_, Message> {
        let handle = member.profile_path.as_ref().and_then(|path| {
            let url = self.tmdb_client.as_ref()?.image_url(path, ImageSize::Poster);
            self.image_cache.get(&url).cloned()
        });

        let portrait: Element<Message> = match handle {
            Some(image) => container(
                iced::widget::image(image)
                    .width(Length::Fixed(90.0))
                    .height(Length::Fixed(120.0))
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
            None => container(icon(ICON_PERSON_FILL).size(28).color(TEXT_GRAY))
                .width(Length::Fixed(90.0))
                .height(Length::Fixed(120.0))
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
        };

        let name = text(member.name.clone())
            .size(13)
            .color(TEXT_WHITE)
            .wrapping(text::Wrapping::Word);
        let role = text(format!("as {}", member.character))
            .size(12)
            .color(TEXT_GRAY)
            .wrapping(text::Wrapping::Word);

        column![portrait, name, role]
            .spacing(4)
            .width(Length::Fixed(90.0))
            .into()
    }

    fn view_similar_section(&self, data: &DetailData) -> Option<Element<'_, Message>> {
        if data.similar.is_empty() {
            return None;
        }

        let heading = text("More Like This").size(24).color(TEXT_WHITE).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

        let cards: Vec<Element<Message>> = data
            .similar
            .iter()
            .take(10)
            .map(|item| self.view_media_card(item))
            .collect();

        let similar_row = iced::widget::scrollable(
            Row::with_children(cards).spacing(16).align_y(iced::Alignment::Start),
        )
        .direction(iced::widget::scrollable::Direction::Horizontal(
            iced::widget::scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill)
        .style(crate::cards::hidden_horizontal_scrollbar_style);

        Some(
            container(column![heading, similar_row].spacing(16))
                .padding(Padding::new(0.0).left(48.0).right(48.0))
                .into(),
        )
    }
}
