use iced::Task;
use tracing::warn;

use crate::detail_handlers;
use crate::media::{ContentSection, HomeContent, MediaItem, MediaKind, Message, Page, Route};
use crate::tmdb::{fetch_image_bytes, load_home_content, load_listing, load_search, ImageSize};
use crate::video::open_external;
use crate::Cineview;

pub fn handle_message(app: &mut Cineview, message: Message) -> Task<Message> {
    match message {
        Message::Setup(_) => Task::none(),
        Message::Navigate(route) => handle_navigate(app, route),
        Message::SearchInputChanged(input) => {
            app.search_input = input;
            Task::none()
        }
        Message::SearchSubmitted => handle_search_submitted(app),
        Message::HomeLoaded(generation, result) => handle_home_loaded(app, generation, result),
        Message::ListingLoaded(kind, generation, result) => {
            if let Err(ref error) = result {
                warn!(kind = kind.path(), "listing fetch failed: {}", error);
            }
            if !app.listing_mut(kind).apply(generation, result) {
                return Task::none();
            }
            let items: Vec<MediaItem> = app.listing(kind).items.iter().take(20).cloned().collect();
            load_poster_images(app, &items)
        }
        Message::SearchLoaded(generation, result) => {
            if let Err(ref error) = result {
                warn!("search fetch failed: {}", error);
            }
            if !app.search.apply(generation, result) {
                return Task::none();
            }
            let items: Vec<MediaItem> = app.search.results.iter().take(20).cloned().collect();
            load_poster_images(app, &items)
        }
        Message::DetailLoaded(generation, result) => {
            detail_handlers::handle_detail_loaded(app, generation, result)
        }
        Message::WatchLoaded(generation, result) => {
            detail_handlers::handle_watch_loaded(app, generation, result)
        }
        Message::PageRequested(kind, page) => match app.listing_mut(kind).set_page(page) {
            Some(generation) => spawn_listing(app, kind, generation),
            None => Task::none(),
        },
        Message::LanguageSelected(kind, language) => {
            match app.listing_mut(kind).set_language(language) {
                Some(generation) => spawn_listing(app, kind, generation),
                None => Task::none(),
            }
        }
        Message::GenreSelected(kind, genre) => match app.listing_mut(kind).set_genre(genre) {
            Some(generation) => spawn_listing(app, kind, generation),
            None => Task::none(),
        },
        Message::SortSelected(kind, sort) => match app.listing_mut(kind).set_sort(sort) {
            Some(generation) => spawn_listing(app, kind, generation),
            None => Task::none(),
        },
        Message::RetryLoad => handle_retry(app),
        Message::BannerTrailerRequested(id) => handle_banner_trailer(app, id),
        Message::LoadImage(url) => handle_load_image(app, url),
        Message::ImageLoaded(url, result) => {
            if let Ok(handle) = result {
                app.image_cache.insert(url, handle);
            }
            Task::none()
        }
        Message::OpenExternal(url) => Task::perform(open_external(url), Message::ExternalOpened),
        Message::ExternalOpened(result) => {
            if let Err(error) = result {
                warn!("failed to open external link: {}", error);
            }
            Task::none()
        }
    }
}

fn handle_navigate(app: &mut Cineview, route: Route) -> Task<Message> {
    match route {
        Route::Home => {
            app.current_page = Page::Home;
            let generation = app.home.begin_fetch();
            spawn_home(app, generation)
        }
        Route::Movies(category) => {
            app.current_page = Page::Movies;
            let generation = app.movies.reset(category);
            spawn_listing(app, MediaKind::Movie, generation)
        }
        Route::Series(category) => {
            app.current_page = Page::Series;
            let generation = app.series.reset(category);
            spawn_listing(app, MediaKind::Series, generation)
        }
        Route::Search(query) => {
            app.current_page = Page::Search;
            let generation = app.search.begin(query);
            spawn_search(app, generation)
        }
        Route::MovieDetail(id) => detail_handlers::open_detail(app, id, MediaKind::Movie),
        Route::SeriesDetail(id) => detail_handlers::open_detail(app, id, MediaKind::Series),
        Route::Watch(id) => detail_handlers::open_watch(app, id),
    }
}

fn handle_search_submitted(app: &mut Cineview) -> Task<Message> {
    let query = app.search_input.trim().to_string();
    if query.is_empty() {
        return Task::none();
    }
    app.search_input.clear();
    Task::done(Message::Navigate(Route::Search(query)))
}

fn handle_home_loaded(
    app: &mut Cineview,
    generation: u64,
    result: Result<HomeContent, crate::media::ApiError>,
) -> Task<Message> {
    if let Err(ref error) = result {
        warn!("home fetch failed: {}", error);
    }
    if !app.home.apply(generation, result) {
        return Task::none();
    }
    let Some(content) = &app.home.content else {
        return Task::none();
    };

    let mut tasks = Vec::new();
    if let Some(banner) = &content.banner {
        queue_image(app, &mut tasks, banner.backdrop_path.as_deref(), ImageSize::Backdrop);
    }
    for section in &content.sections {
        queue_section_images(app, &mut tasks, section);
    }
    Task::batch(tasks)
}

fn queue_section_images(app: &Cineview, tasks: &mut Vec<Task<Message>>, section: &ContentSection) {
    for item in section.items.iter().take(10) {
        queue_image(app, tasks, item.poster_path.as_deref(), ImageSize::Poster);
    }
}

/// The banner's trailer is not part of the home batch; it is fetched on
/// demand and the resulting deep link (or search fallback) opens externally.
fn handle_banner_trailer(app: &Cineview, id: crate::media::MediaId) -> Task<Message> {
    let Some(client) = &app.tmdb_client else {
        return Task::none();
    };
    let Some(banner) = app.home.content.as_ref().and_then(|c| c.banner.clone()) else {
        return Task::none();
    };
    let fetch_client = client.clone();
    Task::perform(
        async move {
            let videos = fetch_client
                .fetch_videos(id, MediaKind::Movie)
                .await
                .unwrap_or_default();
            crate::video::trailer_action_url(&videos, &banner.title)
        },
        Message::OpenExternal,
    )
}

fn handle_retry(app: &mut Cineview) -> Task<Message> {
    match app.current_page {
        Page::Home => {
            let generation = app.home.begin_fetch();
            spawn_home(app, generation)
        }
        Page::Movies => {
            let generation = app.movies.retry();
            spawn_listing(app, MediaKind::Movie, generation)
        }
        Page::Series => {
            let generation = app.series.retry();
            spawn_listing(app, MediaKind::Series, generation)
        }
        Page::Search => {
            let generation = app.search.retry();
            spawn_search(app, generation)
        }
        Page::Detail => detail_handlers::retry_detail(app),
        Page::Watch => detail_handlers::retry_watch(app),
    }
}

pub fn spawn_home(app: &Cineview, generation: u64) -> Task<Message> {
    let Some(client) = &app.tmdb_client else {
        return Task::none();
    };
    Task::perform(load_home_content(client.clone()), move |result| {
        Message::HomeLoaded(generation, result)
    })
}

pub fn spawn_listing(app: &Cineview, kind: MediaKind, generation: u64) -> Task<Message> {
    let Some(client) = &app.tmdb_client else {
        return Task::none();
    };
    let state = app.listing(kind);
    Task::perform(
        load_listing(client.clone(), state.config, state.query.clone()),
        move |result| Message::ListingLoaded(kind, generation, result),
    )
}

pub fn spawn_search(app: &Cineview, generation: u64) -> Task<Message> {
    let Some(client) = &app.tmdb_client else {
        return Task::none();
    };
    Task::perform(
        load_search(client.clone(), app.search.query.clone()),
        move |result| Message::SearchLoaded(generation, result),
    )
}

pub fn load_poster_images(app: &Cineview, items: &[MediaItem]) -> Task<Message> {
    let mut tasks = Vec::new();
    for item in items {
        queue_image(app, &mut tasks, item.poster_path.as_deref(), ImageSize::Poster);
    }
    Task::batch(tasks)
}

/// Absent paths never produce a URL; cached or pending URLs are skipped.
pub fn queue_image(
    app: &Cineview,
    tasks: &mut Vec<Task<Message>>,
    path: Option<&str>,
    size: ImageSize,
) {
    let Some(client) = &app.tmdb_client else {
        return;
    };
    let Some(path) = path else {
        return;
    };
    let url = client.image_url(path, size);
    if app.image_cache.get(&url).is_none() && !app.image_cache.is_pending(&url) {
        tasks.push(Task::done(Message::LoadImage(url)));
    }
}

fn handle_load_image(app: &mut Cineview, url: String) -> Task<Message> {
    if app.image_cache.get(&url).is_some() || app.image_cache.is_pending(&url) {
        return Task::none();
    }
    app.image_cache.mark_pending(url.clone());

    Task::perform(
        async move {
            let result = fetch_image_bytes(url.clone()).await;
            (url, result)
        },
        |(url, result)| match result {
            Ok(bytes) => Message::ImageLoaded(
                url,
                Ok(iced::widget::image::Handle::from_bytes(bytes)),
            ),
            Err(error) => Message::ImageLoaded(url, Err(error)),
        },
    )
}
