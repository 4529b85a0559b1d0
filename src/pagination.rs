use iced::widget::{button, container, text, Row};
use iced::{Border, Color, Element, Length, Padding, Shadow};

use crate::media::{MediaKind, Message, ACCENT_RED, TEXT_GRAY, TEXT_WHITE};

/// Pure projection of the pagination controls: which page numbers to render
/// and whether an ellipsis is needed on either side. Holds no state and
/// performs no fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationWindow {
    pub pages: Vec<u32>,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationWindow {
    /// Window of up to five pages centered on `current_page`, clipped to
    /// `[1, total_pages]`. With one page or fewer there is nothing to render
    /// and the whole control group is absent.
    pub fn compute(current_page: u32, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        let start = current_page.saturating_sub(2).max(1);
        let end = current_page.saturating_add(2).min(total_pages);
        Some(Self {
            pages: (start..=end).collect(),
            leading_ellipsis: start > 1,
            trailing_ellipsis: end < total_pages,
            prev_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        })
    }
}

fn page_button<'a>(label: String, target: Option<u32>, active: bool, kind: MediaKind) -> Element<'a, Message> {
    let styled = button(text(label).size(13).color(TEXT_WHITE))
        .padding(Padding::new(8.0).left(14.0).right(14.0))
        .style(move |_theme, status| {
            let background = if active {
                ACCENT_RED
            } else if matches!(status, button::Status::Hovered) {
                Color::from_rgba(1.0, 1.0, 1.0, 0.2)
            } else if target.is_none() {
                Color::from_rgba(1.0, 1.0, 1.0, 0.04)
            } else {
                Color::from_rgba(1.0, 1.0, 1.0, 0.1)
            };
            button::Style {
                background: Some(iced::Background::Color(background)),
                text_color: if target.is_none() { TEXT_GRAY } else { TEXT_WHITE },
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                shadow: Shadow::default(),
                snap: false,
            }
        });
    match target {
        Some(page) => styled.on_press(Message::PageRequested(kind, page)).into(),
        None => styled.into(),
    }
}

fn dots<'a>() -> Element<'a, Message> {
    text("...").size(13).color(TEXT_GRAY).into()
}

/// Pagination control row for a listing page. Absent entirely when there is
/// a single page or none.
pub fn view_pagination<'a>(
    kind: MediaKind,
    current_page: u32,
    total_pages: u32,
) -> Option<Element<'a, Message>> {
    let window = PaginationWindow::compute(current_page, total_pages)?;

    let mut controls: Vec<Element<Message>> = Vec::new();

    let prev_target = window.prev_enabled.then(|| current_page - 1);
    controls.push(page_button(String::from("◀ Prev"), prev_target, false, kind));

    if window.leading_ellipsis {
        controls.push(dots());
    }
    for page in &window.pages {
        let active = *page == current_page;
        let target = (!active).then_some(*page);
        controls.push(page_button(page.to_string(), target, active, kind));
    }
    if window.trailing_ellipsis {
        controls.push(dots());
    }

    let next_target = window.next_enabled.then(|| current_page + 1);
    controls.push(page_button(String::from("Next ▶"), next_target, false, kind));

    Some(
        container(
            Row::with_children(controls)
                .spacing(8)
                .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(Padding::new(24.0))
        .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_controls_without_pages() {
        assert_eq!(PaginationWindow::compute(1, 0), None);
    }

    #[test]
    fn no_controls_for_a_single_page() {
        assert_eq!(PaginationWindow::compute(1, 1), None);
    }

    #[test]
    fn interior_page_renders_a_clipped_leading_window() {
        let window = PaginationWindow::compute(3, 10).unwrap();
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.leading_ellipsis);
        assert!(window.trailing_ellipsis);
    }

    #[test]
    fn last_page_disables_next_and_shows_leading_ellipsis() {
        let window = PaginationWindow::compute(10, 10).unwrap();
        assert_eq!(window.pages, vec![8, 9, 10]);
        assert!(window.leading_ellipsis);
        assert!(!window.trailing_ellipsis);
        assert!(window.prev_enabled);
        assert!(!window.next_enabled);
    }

    #[test]
    fn first_page_of_a_deep_resultset() {
        let window = PaginationWindow::compute(1, 500).unwrap();
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(!window.prev_enabled);
        assert!(window.next_enabled);
        assert!(!window.leading_ellipsis);
        assert!(window.trailing_ellipsis);
    }

    #[test]
    fn interior_windows_hold_exactly_five_centered_pages() {
        for current in 3..=498 {
            let window = PaginationWindow::compute(current, 500).unwrap();
            assert_eq!(window.pages.len(), 5);
            assert_eq!(window.pages[2], current);
            assert_eq!(window.leading_ellipsis, window.pages[0] != 1);
            assert_eq!(
                window.trailing_ellipsis,
                *window.pages.last().unwrap() != 500
            );
        }
    }
}
