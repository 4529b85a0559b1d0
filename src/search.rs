use iced::widget::{column, text};
use iced::{Element, Length, Padding};

use crate::media::{Message, TEXT_GRAY, TEXT_WHITE};
use crate::Cineview;

impl Cineview {
    pub fn view_search_page(&self) -> Element<'_, Message> {
        let title = text(format!("Search results for \"{}\"", self.search.query))
            .size(28)
            .color(TEXT_WHITE)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            });

        let count = self.search.results.len();
        let count_text = if count == 1 {
            String::from("1 result found")
        } else {
            format!("{} results found", count)
        };
        let count_label = text(count_text).size(16).color(TEXT_GRAY);

        let body = self.view_search_body();

        column![title, count_label, body]
            .spacing(16)
            .padding(Padding::new(32.0).left(48.0).right(48.0))
            .width(Length::Fill)
            .into()
    }

    fn view_search_body(&self) -> Element<'_, Message> {
        if self.search.loading {
            return self.view_skeleton_grid(20);
        }

        if let Some(error) = &self.search.error {
            if self.search.results.is_empty() {
                return self.view_error_state(error);
            }
            let grid = self.view_card_grid(&self.search.results);
            return column![self.view_error_banner(error), grid]
                .spacing(24)
                .width(Length::Fill)
                .into();
        }

        if self.search.results.is_empty() {
            return self.view_no_results(
                format!("No results found for \"{}\"", self.search.query),
                "Try searching for a different movie or TV show title",
            );
        }

        self.view_card_grid(&self.search.results)
    }
}
