use std::collections::{HashMap, HashSet};

use iced::widget::image::Handle;
use iced::Color;
use serde::Deserialize;
use thiserror::Error;

pub const BACKGROUND_BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);
pub const SURFACE_DARK_GRAY: Color = Color::from_rgb(0.078, 0.078, 0.078);
pub const ACCENT_RED: Color = Color::from_rgb(0.898, 0.035, 0.078);
pub const TEXT_WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const TEXT_GRAY: Color = Color::from_rgb(0.702, 0.702, 0.702);

pub type MediaId = u64;

/// Upstream caps discover/search result depth at 500 pages; requests past
/// that point are rejected, so `total_pages` is clamped to this value and it
/// doubles as the fallback when a response omits the field.
pub const MAX_PAGE_DEPTH: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    pub fn path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }
}

/// The in-app equivalent of the original URL surface. Every user-driven
/// navigation resolves to one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Search(String),
    Movies(Option<Category>),
    Series(Option<Category>),
    MovieDetail(MediaId),
    SeriesDetail(MediaId),
    Watch(MediaId),
}

impl Route {
    /// Detail route for a catalog item, following the item's own declared
    /// media type rather than the page it happens to be rendered on.
    pub fn for_item(item: &MediaItem) -> Self {
        match item.media_type {
            MediaKind::Movie => Route::MovieDetail(item.id),
            MediaKind::Series => Route::SeriesDetail(item.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Movies,
    Series,
    Search,
    Detail,
    Watch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Movies,
    Series,
}

#[derive(Debug, Clone)]
pub enum LoadingState {
    Idle,
    Loading,
    Error(String),
}

/// Named listing queries that substitute the listing endpoint wholesale.
/// Independent filters are still merged as query parameters on top of
/// whichever endpoint the category resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Trending,
    Bollywood,
    Hollywood,
    TopRated,
    Upcoming,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: MediaId,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub media_type: MediaKind,
    pub vote_average: f32,
    pub release_date: Option<String>,
}

impl MediaItem {
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.as_deref().and_then(|d| d.get(..4))
    }
}

#[derive(Debug, Clone)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
}

#[derive(Debug, Clone)]
pub struct WatchProvider {
    pub provider_id: u64,
    pub provider_name: String,
    pub logo_path: Option<String>,
}

/// Streaming availability for the configured region. Present only when the
/// upstream response carries a non-empty `flatrate` list for that region; a
/// missing region or missing `flatrate` key omits the "Available On" section
/// entirely rather than rendering it empty.
#[derive(Debug, Clone)]
pub struct ProviderRegion {
    pub link: Option<String>,
    pub flatrate: Vec<WatchProvider>,
}

#[derive(Debug, Clone)]
pub struct ContentSection {
    pub title: &'static str,
    pub see_all: Route,
    pub items: Vec<MediaItem>,
}

#[derive(Debug, Clone)]
pub struct HomeContent {
    pub banner: Option<MediaItem>,
    pub sections: Vec<ContentSection>,
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("rate limited by upstream")]
    RateLimit,
    #[error("invalid API credentials")]
    Unauthorized,
}

#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    cache: HashMap<String, Handle>,
    pending: HashSet<String>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<&Handle> {
        self.cache.get(url)
    }

    pub fn insert(&mut self, url: String, handle: Handle) {
        self.pending.remove(&url);
        self.cache.insert(url, handle);
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    pub fn mark_pending(&mut self, url: String) {
        self.pending.insert(url);
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Setup(crate::settings::SetupMessage),
    Navigate(Route),
    SearchInputChanged(String),
    SearchSubmitted,
    HomeLoaded(u64, Result<HomeContent, ApiError>),
    ListingLoaded(MediaKind, u64, Result<crate::listing::ListingPayload, ApiError>),
    SearchLoaded(u64, Result<Vec<MediaItem>, ApiError>),
    DetailLoaded(u64, Result<crate::detail::DetailData, ApiError>),
    WatchLoaded(u64, Result<crate::detail::WatchData, ApiError>),
    PageRequested(MediaKind, u32),
    LanguageSelected(MediaKind, crate::listing::LanguageFilter),
    GenreSelected(MediaKind, crate::listing::GenreChoice),
    SortSelected(MediaKind, crate::listing::SortOption),
    RetryLoad,
    BannerTrailerRequested(MediaId),
    LoadImage(String),
    ImageLoaded(String, Result<Handle, String>),
    OpenExternal(String),
    ExternalOpened(Result<(), String>),
}

/// Minimal result shape shared by the trending/discover/top-rated/upcoming
/// listings, multi search, and the similar-items endpoint. Movies carry
/// `title`/`release_date`, series carry `name`/`first_air_date`; listing
/// endpoints scoped to a single kind omit `media_type` altogether.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMediaResult {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub media_type: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}

impl TmdbMediaResult {
    pub fn into_item(self, fallback: MediaKind) -> MediaItem {
        let media_type = match self.media_type.as_deref() {
            Some("tv") => MediaKind::Series,
            Some("movie") => MediaKind::Movie,
            _ => fallback,
        };
        MediaItem {
            id: self.id,
            title: self.title.or(self.name).unwrap_or_default(),
            overview: self.overview,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            media_type,
            vote_average: self.vote_average,
            release_date: self.release_date.or(self.first_air_date),
        }
    }
}

fn default_total_pages() -> u32 {
    MAX_PAGE_DEPTH
}

#[derive(Debug, Deserialize)]
pub struct TmdbListResponse {
    #[serde(default)]
    pub results: Vec<TmdbMediaResult>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct TmdbDetailResult {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    pub number_of_seasons: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCreditsResponse {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbCrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Debug, Deserialize)]
pub struct TmdbProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, TmdbProviderRegion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbProviderRegion {
    pub link: Option<String>,
    pub flatrate: Option<Vec<TmdbProvider>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbProvider {
    pub provider_id: u64,
    pub provider_name: String,
    pub logo_path: Option<String>,
}

pub fn truncate_description(description: &str, max_length: usize) -> String {
    if description.len() <= max_length {
        return description.to_string();
    }
    let truncated = &description[..max_length];
    format!(
        "{}...",
        truncated.rfind(' ').map_or(truncated, |i| &truncated[..i])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u64, media_type: Option<&str>) -> TmdbMediaResult {
        TmdbMediaResult {
            id,
            title: Some(String::from("The Matrix")),
            name: None,
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            media_type: media_type.map(String::from),
            vote_average: 8.2,
            release_date: Some(String::from("1999-03-31")),
            first_air_date: None,
        }
    }

    #[test]
    fn item_takes_name_and_first_air_date_for_series() {
        let result = TmdbMediaResult {
            title: None,
            name: Some(String::from("Dark")),
            release_date: None,
            first_air_date: Some(String::from("2017-12-01")),
            ..raw(42, Some("tv"))
        };
        let item = result.into_item(MediaKind::Movie);
        assert_eq!(item.title, "Dark");
        assert_eq!(item.media_type, MediaKind::Series);
        assert_eq!(item.release_year(), Some("2017"));
    }

    #[test]
    fn item_falls_back_to_listing_kind_when_media_type_is_absent() {
        let item = raw(7, None).into_item(MediaKind::Series);
        assert_eq!(item.media_type, MediaKind::Series);
    }

    #[test]
    fn detail_route_follows_item_media_type() {
        let movie = raw(1, Some("movie")).into_item(MediaKind::Series);
        let series = raw(2, Some("tv")).into_item(MediaKind::Movie);
        assert_eq!(Route::for_item(&movie), Route::MovieDetail(1));
        assert_eq!(Route::for_item(&series), Route::SeriesDetail(2));
    }

    #[test]
    fn truncation_cuts_at_a_word_boundary() {
        let text = "An unremarkable hacker discovers the world is a simulation";
        let short = truncate_description(text, 20);
        assert!(short.ends_with("..."));
        assert!(short.len() <= 23);
    }

    #[test]
    fn list_response_defaults_total_pages_when_missing() {
        let response: TmdbListResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(response.total_pages, MAX_PAGE_DEPTH);
    }
}
