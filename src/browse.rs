use iced::widget::{column, container, pick_list, row, text, Space};
use iced::{Border, Color, Element, Length, Padding};

use crate::listing::{LanguageFilter, ListingState, SortOption};
use crate::media::{MediaKind, Message, TEXT_GRAY, TEXT_WHITE};
use crate::pagination::view_pagination;
use crate::Cineview;

fn filter_pick_list_style(_theme: &iced::Theme, _status: pick_list::Status) -> pick_list::Style {
    pick_list::Style {
        text_color: TEXT_WHITE,
        placeholder_color: TEXT_GRAY,
        handle_color: TEXT_WHITE,
        background: iced::Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1)),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
            width: 1.0,
            radius: 4.0.into(),
        },
    }
}

impl Cineview {
    pub fn view_browse_page(&self, kind: MediaKind) -> Element<'_, Message> {
        let state = self.listing(kind);

        let title_text = match state.query.category {
            Some(category) => format!(
                "{} — {}",
                state.config.title,
                state.config.category_label(category)
            ),
            None => state.config.title.to_string(),
        };
        let title = text(title_text).size(28).color(TEXT_WHITE).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

        let filter_bar = self.view_filter_bar(state, kind);
        let body = self.view_browse_body(state, kind);

        column![title, filter_bar, body]
            .spacing(24)
            .padding(Padding::new(32.0).left(48.0).right(48.0))
            .width(Length::Fill)
            .into()
    }

    fn view_filter_bar<'a>(
        &'a self,
        state: &'a ListingState,
        kind: MediaKind,
    ) -> Element<'a, Message> {
        let language_dropdown = pick_list(
            LanguageFilter::ALL.to_vec(),
            Some(state.query.language),
            move |language| Message::LanguageSelected(kind, language),
        )
        .text_size(13)
        .padding(Padding::new(8.0).left(12.0).right(12.0))
        .style(filter_pick_list_style);

        let genre_dropdown = pick_list(
            state.config.genres.to_vec(),
            Some(state.query.genre),
            move |genre| Message::GenreSelected(kind, genre),
        )
        .text_size(13)
        .padding(Padding::new(8.0).left(12.0).right(12.0))
        .style(filter_pick_list_style);

        let sort_dropdown = pick_list(
            SortOption::ALL.to_vec(),
            Some(state.query.sort),
            move |sort| Message::SortSelected(kind, sort),
        )
        .text_size(13)
        .padding(Padding::new(8.0).left(12.0).right(12.0))
        .style(filter_pick_list_style);

        let labeled = |label: &'static str, dropdown: Element<'static, Message>| {
            row![text(label).size(13).color(TEXT_GRAY), dropdown]
                .spacing(8)
                .align_y(iced::Alignment::Center)
        };

        let filter_row = row![
            labeled("Language", language_dropdown.into()),
            labeled("Genre", genre_dropdown.into()),
            labeled("Sort By", sort_dropdown.into()),
            Space::new().width(Length::Fill),
        ]
        .spacing(24)
        .align_y(iced::Alignment::Center);

        container(filter_row)
            .width(Length::Fill)
            .padding(Padding::new(16.0))
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.05))),
                border: Border {
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_browse_body<'a>(
        &'a self,
        state: &'a ListingState,
        kind: MediaKind,
    ) -> Element<'a, Message> {
        if state.loading {
            return self.view_skeleton_grid(20);
        }

        if let Some(error) = &state.error {
            if state.items.is_empty() {
                return self.view_error_state(error);
            }
            // Keep the last successful grid on screen under the banner.
            let grid = self.view_card_grid(&state.items);
            return column![self.view_error_banner(error), grid]
                .spacing(24)
                .width(Length::Fill)
                .into();
        }

        if state.items.is_empty() {
            if state.loaded_once {
                return self.view_no_results(
                    String::from("No results found"),
                    "Try adjusting your filters",
                );
            }
            return self.view_skeleton_grid(20);
        }

        let grid = self.view_card_grid(&state.items);
        let mut body = column![grid].spacing(24).width(Length::Fill);
        if let Some(pagination) = view_pagination(kind, state.query.page, state.total_pages) {
            body = body.push(pagination);
        }
        body.into()
    }
}
