use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::detail::{provider_region, DetailData, WatchData};
use crate::listing::{ListingConfig, ListingPayload, ListingQuery};
use crate::media::{
    ApiError, CastMember, Category, ContentSection, CrewMember, HomeContent, MediaId, MediaItem,
    MediaKind, ProviderRegion, Route, TmdbCreditsResponse, TmdbDetailResult, TmdbListResponse,
    TmdbMediaResult, TmdbProvidersResponse,
};
use crate::settings::AppSettings;
use crate::video::{TrailerVideo, VideosResponse};

#[derive(Clone)]
pub enum ImageSize {
    Poster,
    Backdrop,
    Logo,
    Original,
}

/// Thin wrapper over the TMDB v3 REST API. Configured once at startup from
/// the saved settings and injected wherever fetches happen; holds no view
/// state of its own.
#[derive(Clone)]
pub struct TmdbClient {
    api_token: String,
    base_url: String,
    image_base_url: String,
    language: String,
    region: String,
    http_client: Arc<reqwest::Client>,
}

impl TmdbClient {
    pub fn new(api_token: String, language: String, region: String) -> Self {
        Self {
            api_token,
            base_url: String::from("https://api.themoviedb.org/3"),
            image_base_url: String::from("https://image.tmdb.org/t/p"),
            language,
            region,
            http_client: Arc::new(reqwest::Client::new()),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        let language = if settings.language.is_empty() {
            String::from("en-US")
        } else {
            settings.language.clone()
        };
        let region = if settings.region.is_empty() {
            String::from("IN")
        } else {
            settings.region.clone()
        };
        Self::new(settings.api_token.clone(), language, region)
    }

    pub fn image_url(&self, path: &str, size: ImageSize) -> String {
        let size_path = match size {
            ImageSize::Poster => "w500",
            ImageSize::Logo => "w92",
            ImageSize::Backdrop | ImageSize::Original => "original",
        };
        format!("{}/{}{}", self.image_base_url, size_path, path)
    }

    async fn fetch_response(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(&[("language", self.language.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status().as_u16() {
            401 => Err(ApiError::Unauthorized),
            429 => Err(ApiError::RateLimit),
            s if s >= 400 => Err(ApiError::Network(format!("HTTP error: {}", s))),
            _ => Ok(response),
        }
    }

    async fn fetch_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, ApiError> {
        self.fetch_response(path, params)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn fetch_list(
        &self,
        path: &str,
        params: Vec<(String, String)>,
        kind: MediaKind,
    ) -> Result<ListingPayload, ApiError> {
        let response: TmdbListResponse = self.fetch_json(path, &params).await?;
        Ok(ListingPayload {
            items: response
                .results
                .into_iter()
                .map(|r| r.into_item(kind))
                .collect(),
            total_pages: response.total_pages,
        })
    }

    async fn fetch_items(
        &self,
        path: &str,
        params: Vec<(String, String)>,
        kind: MediaKind,
    ) -> Result<Vec<MediaItem>, ApiError> {
        Ok(self.fetch_list(path, params, kind).await?.items)
    }

    pub async fn fetch_listing(
        &self,
        config: &ListingConfig,
        query: &ListingQuery,
    ) -> Result<ListingPayload, ApiError> {
        let (path, params) = query.request(config);
        self.fetch_list(&path, params, config.kind).await
    }

    pub async fn search_multi(&self, query: &str) -> Result<Vec<MediaItem>, ApiError> {
        let params = vec![
            (String::from("query"), query.to_string()),
            (String::from("include_adult"), String::from("false")),
        ];
        let response: TmdbListResponse = self.fetch_json("/search/multi", &params).await?;
        Ok(filter_search_results(response.results))
    }

    pub async fn fetch_detail_record(
        &self,
        id: MediaId,
        kind: MediaKind,
    ) -> Result<TmdbDetailResult, ApiError> {
        self.fetch_json(&format!("/{}/{}", kind.path(), id), &[]).await
    }

    pub async fn fetch_credits(
        &self,
        id: MediaId,
        kind: MediaKind,
    ) -> Result<(Vec<CastMember>, Vec<CrewMember>), ApiError> {
        let credits: TmdbCreditsResponse = self
            .fetch_json(&format!("/{}/{}/credits", kind.path(), id), &[])
            .await?;
        let cast = credits
            .cast
            .into_iter()
            .map(|c| CastMember {
                id: c.id,
                name: c.name,
                character: c.character,
                profile_path: c.profile_path,
            })
            .collect();
        let crew = credits
            .crew
            .into_iter()
            .map(|c| CrewMember {
                id: c.id,
                name: c.name,
                job: c.job,
            })
            .collect();
        Ok((cast, crew))
    }

    pub async fn fetch_videos(
        &self,
        id: MediaId,
        kind: MediaKind,
    ) -> Result<Vec<TrailerVideo>, ApiError> {
        let response: VideosResponse = self
            .fetch_json(&format!("/{}/{}/videos", kind.path(), id), &[])
            .await?;
        Ok(response.results)
    }

    pub async fn fetch_providers(
        &self,
        id: MediaId,
        kind: MediaKind,
    ) -> Result<Option<ProviderRegion>, ApiError> {
        let response: TmdbProvidersResponse = self
            .fetch_json(&format!("/{}/{}/watch/providers", kind.path(), id), &[])
            .await?;
        Ok(provider_region(response, &self.region))
    }

    pub async fn fetch_similar(
        &self,
        id: MediaId,
        kind: MediaKind,
    ) -> Result<Vec<MediaItem>, ApiError> {
        self.fetch_items(&format!("/{}/{}/similar", kind.path(), id), Vec::new(), kind)
            .await
    }
}

/// Multi search returns people and collections alongside movies and series;
/// only the latter two are rendered, in their upstream relative order.
pub fn filter_search_results(results: Vec<TmdbMediaResult>) -> Vec<MediaItem> {
    results
        .into_iter()
        .filter(|r| matches!(r.media_type.as_deref(), Some("movie") | Some("tv")))
        .map(|r| r.into_item(MediaKind::Movie))
        .collect()
}

fn discover_params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The home feed: five section queries fired as one parallel batch that
/// fails together. The banner is promoted from the first trending entry
/// that has a backdrop to render.
pub async fn load_home_content(client: TmdbClient) -> Result<HomeContent, ApiError> {
    debug!("loading home sections");
    let (trending, bollywood, hollywood, top_rated, upcoming) = tokio::try_join!(
        client.fetch_items("/trending/movie/week", Vec::new(), MediaKind::Movie),
        client.fetch_items(
            "/discover/movie",
            discover_params(&[
                ("with_original_language", "hi"),
                ("region", "IN"),
                ("sort_by", "popularity.desc"),
            ]),
            MediaKind::Movie,
        ),
        client.fetch_items(
            "/discover/movie",
            discover_params(&[
                ("with_original_language", "en"),
                ("sort_by", "popularity.desc"),
            ]),
            MediaKind::Movie,
        ),
        client.fetch_items("/movie/top_rated", Vec::new(), MediaKind::Movie),
        client.fetch_items("/movie/upcoming", Vec::new(), MediaKind::Movie),
    )?;

    let banner = trending
        .iter()
        .find(|item| item.backdrop_path.is_some())
        .cloned();

    Ok(HomeContent {
        banner,
        sections: vec![
            ContentSection {
                title: "Trending Now",
                see_all: Route::Movies(Some(Category::Trending)),
                items: trending,
            },
            ContentSection {
                title: "Bollywood Movies",
                see_all: Route::Movies(Some(Category::Bollywood)),
                items: bollywood,
            },
            ContentSection {
                title: "Hollywood Movies",
                see_all: Route::Movies(Some(Category::Hollywood)),
                items: hollywood,
            },
            ContentSection {
                title: "Top Rated Movies",
                see_all: Route::Movies(Some(Category::TopRated)),
                items: top_rated,
            },
            ContentSection {
                title: "Upcoming Movies",
                see_all: Route::Movies(Some(Category::Upcoming)),
                items: upcoming,
            },
        ],
    })
}

pub async fn load_listing(
    client: TmdbClient,
    config: &'static ListingConfig,
    query: ListingQuery,
) -> Result<ListingPayload, ApiError> {
    debug!(page = query.page, "loading {} listing", config.title);
    client.fetch_listing(config, &query).await
}

pub async fn load_search(client: TmdbClient, query: String) -> Result<Vec<MediaItem>, ApiError> {
    debug!(%query, "searching");
    client.search_multi(&query).await
}

/// Detail aggregate: five parallel calls combined into one view model. Any
/// member failure fails the whole aggregate; no partial data is surfaced.
pub async fn load_detail(
    client: TmdbClient,
    id: MediaId,
    kind: MediaKind,
) -> Result<DetailData, ApiError> {
    debug!(id, "loading {} detail", kind.path());
    let (record, (cast, crew), videos, providers, similar) = tokio::try_join!(
        client.fetch_detail_record(id, kind),
        client.fetch_credits(id, kind),
        client.fetch_videos(id, kind),
        client.fetch_providers(id, kind),
        client.fetch_similar(id, kind),
    )?;

    let item = MediaItem {
        id: record.id,
        title: record.title.or(record.name).unwrap_or_default(),
        overview: record.overview,
        poster_path: record.poster_path,
        backdrop_path: record.backdrop_path,
        media_type: kind,
        vote_average: record.vote_average,
        release_date: record.release_date.or(record.first_air_date),
    };

    Ok(DetailData {
        item,
        genres: record.genres,
        runtime: record.runtime,
        number_of_seasons: record.number_of_seasons,
        cast,
        crew,
        videos,
        providers,
        similar,
    })
}

/// Watch page aggregate for a movie: record, videos, and providers.
pub async fn load_watch(client: TmdbClient, id: MediaId) -> Result<WatchData, ApiError> {
    debug!(id, "loading watch page");
    let kind = MediaKind::Movie;
    let (record, videos, providers) = tokio::try_join!(
        client.fetch_detail_record(id, kind),
        client.fetch_videos(id, kind),
        client.fetch_providers(id, kind),
    )?;

    let item = MediaItem {
        id: record.id,
        title: record.title.or(record.name).unwrap_or_default(),
        overview: record.overview,
        poster_path: record.poster_path,
        backdrop_path: record.backdrop_path,
        media_type: kind,
        vote_average: record.vote_average,
        release_date: record.release_date.or(record.first_air_date),
    };

    Ok(WatchData {
        item,
        runtime: record.runtime,
        videos,
        providers,
    })
}

pub async fn fetch_image_bytes(url: String) -> Result<Vec<u8>, String> {
    reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: u64, media_type: &str) -> TmdbMediaResult {
        TmdbMediaResult {
            id,
            title: Some(format!("Result {}", id)),
            name: None,
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            media_type: Some(String::from(media_type)),
            vote_average: 0.0,
            release_date: None,
            first_air_date: None,
        }
    }

    #[test]
    fn search_keeps_only_movies_and_series_in_order() {
        let results = vec![
            result(1, "movie"),
            result(2, "person"),
            result(3, "tv"),
            result(4, "collection"),
        ];
        let filtered = filter_search_results(results);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[0].media_type, MediaKind::Movie);
        assert_eq!(filtered[1].id, 3);
        assert_eq!(filtered[1].media_type, MediaKind::Series);
    }
}
