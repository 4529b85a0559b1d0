mod browse;
mod cards;
mod components;
mod detail;
mod detail_handlers;
mod detail_sections;
mod handlers;
mod hero;
mod listing;
mod media;
mod pagination;
mod search;
mod settings;
mod tmdb;
mod video;
mod watch;

use iced::widget::{column, container, scrollable};
use iced::{Element, Font, Length, Size, Task, Theme};

use components::hidden_vertical_scrollbar_style;
use detail::{DetailState, WatchState};
use listing::{HomeState, ListingState, SearchState, MOVIES_CONFIG, SERIES_CONFIG};
use media::{ImageCache, MediaKind, Message, Page, BACKGROUND_BLACK};
use settings::{AppSettings, SetupPage};
use tmdb::TmdbClient;

pub struct Cineview {
    pub setup_page: Option<SetupPage>,
    pub current_page: Page,
    pub search_input: String,
    pub home: HomeState,
    pub movies: ListingState,
    pub series: ListingState,
    pub search: SearchState,
    pub detail: Option<DetailState>,
    pub watch: Option<WatchState>,
    pub image_cache: ImageCache,
    pub tmdb_client: Option<TmdbClient>,
}

impl Default for Cineview {
    fn default() -> Self {
        Self {
            setup_page: None,
            current_page: Page::Home,
            search_input: String::new(),
            home: HomeState::new(),
            movies: ListingState::new(&MOVIES_CONFIG),
            series: ListingState::new(&SERIES_CONFIG),
            search: SearchState::new(),
            detail: None,
            watch: None,
            image_cache: ImageCache::new(),
            tmdb_client: None,
        }
    }
}

impl Cineview {
    fn new() -> (Self, Task<Message>) {
        let settings = match AppSettings::load() {
            Some(s) if s.is_valid() => s,
            _ => {
                return (
                    Self {
                        setup_page: Some(SetupPage::default()),
                        ..Default::default()
                    },
                    Task::none(),
                );
            }
        };

        let client = TmdbClient::from_settings(&settings);
        let mut app = Self {
            tmdb_client: Some(client),
            ..Default::default()
        };
        let generation = app.home.begin_fetch();
        let load_home = handlers::spawn_home(&app, generation);
        (app, load_home)
    }

    fn initialize_with_settings(&mut self, settings: AppSettings) -> Task<Message> {
        let client = TmdbClient::from_settings(&settings);
        self.tmdb_client = Some(client);
        self.setup_page = None;
        let generation = self.home.begin_fetch();
        handlers::spawn_home(self, generation)
    }

    pub fn listing(&self, kind: MediaKind) -> &ListingState {
        match kind {
            MediaKind::Movie => &self.movies,
            MediaKind::Series => &self.series,
        }
    }

    pub fn listing_mut(&mut self, kind: MediaKind) -> &mut ListingState {
        match kind {
            MediaKind::Movie => &mut self.movies,
            MediaKind::Series => &mut self.series,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Setup(setup_msg) = message {
            if let Some(ref mut setup) = self.setup_page {
                if let Some(settings) = setup.update(setup_msg) {
                    return self.initialize_with_settings(settings);
                }
            }
            return Task::none();
        }
        handlers::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        if let Some(ref setup) = self.setup_page {
            return setup.view().map(Message::Setup);
        }

        let page_body = match self.current_page {
            Page::Home => self.view_home_page(),
            Page::Movies => self.view_browse_page(MediaKind::Movie),
            Page::Series => self.view_browse_page(MediaKind::Series),
            Page::Search => self.view_search_page(),
            Page::Detail => self.view_detail_page(),
            Page::Watch => self.view_watch_page(),
        };

        let scrolled = scrollable(column![page_body, self.view_footer()].width(Length::Fill))
            .direction(scrollable::Direction::Vertical(
                scrollable::Scrollbar::new().width(0).scroller_width(0),
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(hidden_vertical_scrollbar_style);

        container(column![self.view_navbar(), scrolled].width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(BACKGROUND_BLACK)),
                ..Default::default()
            })
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cineview=info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application(Cineview::new, Cineview::update, Cineview::view)
        .title("Cineview")
        .theme(Cineview::theme)
        .window_size(Size::new(1280.0, 720.0))
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .default_font(Font::DEFAULT)
        .run()
}
