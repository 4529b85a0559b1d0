use iced::Task;
use tracing::warn;

use crate::detail::{DetailData, DetailState, WatchData, WatchState};
use crate::handlers::queue_image;
use crate::media::{ApiError, MediaId, MediaKind, Message, Page};
use crate::tmdb::{load_detail, load_watch, ImageSize};
use crate::Cineview;

pub fn open_detail(app: &mut Cineview, id: MediaId, kind: MediaKind) -> Task<Message> {
    app.current_page = Page::Detail;
    let mut state = DetailState::new(id, kind);
    let generation = state.begin_fetch();
    app.detail = Some(state);
    spawn_detail(app, id, kind, generation)
}

pub fn open_watch(app: &mut Cineview, id: MediaId) -> Task<Message> {
    app.current_page = Page::Watch;
    let mut state = WatchState::new(id);
    let generation = state.begin_fetch();
    app.watch = Some(state);
    spawn_watch(app, id, generation)
}

fn spawn_detail(app: &Cineview, id: MediaId, kind: MediaKind, generation: u64) -> Task<Message> {
    let Some(client) = &app.tmdb_client else {
        return Task::none();
    };
    Task::perform(load_detail(client.clone(), id, kind), move |result| {
        Message::DetailLoaded(generation, result)
    })
}

fn spawn_watch(app: &Cineview, id: MediaId, generation: u64) -> Task<Message> {
    let Some(client) = &app.tmdb_client else {
        return Task::none();
    };
    Task::perform(load_watch(client.clone(), id), move |result| {
        Message::WatchLoaded(generation, result)
    })
}

pub fn retry_detail(app: &mut Cineview) -> Task<Message> {
    let Some(detail) = &mut app.detail else {
        return Task::none();
    };
    let generation = detail.begin_fetch();
    let (id, kind) = (detail.id, detail.kind);
    spawn_detail(app, id, kind, generation)
}

pub fn retry_watch(app: &mut Cineview) -> Task<Message> {
    let Some(watch) = &mut app.watch else {
        return Task::none();
    };
    let generation = watch.begin_fetch();
    let id = watch.id;
    spawn_watch(app, id, generation)
}

pub fn handle_detail_loaded(
    app: &mut Cineview,
    generation: u64,
    result: Result<DetailData, ApiError>,
) -> Task<Message> {
    if let Err(ref error) = result {
        warn!("detail fetch failed: {}", error);
    }
    let Some(detail) = &mut app.detail else {
        return Task::none();
    };
    if !detail.apply(generation, result) {
        return Task::none();
    }
    let Some(data) = app.detail.as_ref().and_then(|d| d.data.as_ref()) else {
        return Task::none();
    };

    let mut tasks = Vec::new();
    queue_image(app, &mut tasks, data.item.backdrop_path.as_deref(), ImageSize::Backdrop);
    queue_image(app, &mut tasks, data.item.poster_path.as_deref(), ImageSize::Poster);
    for member in data.cast.iter().take(14) {
        queue_image(app, &mut tasks, member.profile_path.as_deref(), ImageSize::Poster);
    }
    if let Some(providers) = &data.providers {
        for provider in &providers.flatrate {
            queue_image(app, &mut tasks, provider.logo_path.as_deref(), ImageSize::Logo);
        }
    }
    for item in data.similar.iter().take(10) {
        queue_image(app, &mut tasks, item.poster_path.as_deref(), ImageSize::Poster);
    }
    Task::batch(tasks)
}

pub fn handle_watch_loaded(
    app: &mut Cineview,
    generation: u64,
    result: Result<WatchData, ApiError>,
) -> Task<Message> {
    if let Err(ref error) = result {
        warn!("watch page fetch failed: {}", error);
    }
    let Some(watch) = &mut app.watch else {
        return Task::none();
    };
    if !watch.apply(generation, result) {
        return Task::none();
    }
    let Some(data) = app.watch.as_ref().and_then(|w| w.data.as_ref()) else {
        return Task::none();
    };

    let mut tasks = Vec::new();
    queue_image(app, &mut tasks, data.item.backdrop_path.as_deref(), ImageSize::Backdrop);
    queue_image(app, &mut tasks, data.item.poster_path.as_deref(), ImageSize::Poster);
    if let Some(providers) = &data.providers {
        for provider in &providers.flatrate {
            queue_image(app, &mut tasks, provider.logo_path.as_deref(), ImageSize::Logo);
        }
    }
    Task::batch(tasks)
}
