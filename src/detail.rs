use crate::media::{
    ApiError, CastMember, CrewMember, Genre, MediaId, MediaItem, MediaKind, ProviderRegion,
    TmdbProvidersResponse, WatchProvider,
};
use crate::video::TrailerVideo;

/// Aggregate view model for the detail page: the primary record plus its
/// credits, videos, watch providers, and similar titles. The five upstream
/// calls behind it fail together; this struct never holds partial data.
#[derive(Debug, Clone)]
pub struct DetailData {
    pub item: MediaItem,
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    pub number_of_seasons: Option<u32>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub videos: Vec<TrailerVideo>,
    pub providers: Option<ProviderRegion>,
    pub similar: Vec<MediaItem>,
}

/// Slimmer aggregate for the watch page (record, videos, providers).
#[derive(Debug, Clone)]
pub struct WatchData {
    pub item: MediaItem,
    pub runtime: Option<u32>,
    pub videos: Vec<TrailerVideo>,
    pub providers: Option<ProviderRegion>,
}

pub struct DetailState {
    pub id: MediaId,
    pub kind: MediaKind,
    pub data: Option<DetailData>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl DetailState {
    pub fn new(id: MediaId, kind: MediaKind) -> Self {
        Self {
            id,
            kind,
            data: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn apply(&mut self, generation: u64, result: Result<DetailData, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(String::from("Failed to load details. Please try again."));
            }
        }
        true
    }
}

pub struct WatchState {
    pub id: MediaId,
    pub data: Option<WatchData>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl WatchState {
    pub fn new(id: MediaId) -> Self {
        Self {
            id,
            data: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn apply(&mut self, generation: u64, result: Result<WatchData, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(String::from("Failed to load details. Please try again."));
            }
        }
        true
    }
}

/// Crew partitioned by exact job title into the buckets the detail page
/// renders. Only non-empty buckets are shown, in this order.
#[derive(Debug, Clone, Default)]
pub struct CrewGroups {
    pub directors: Vec<CrewMember>,
    pub producers: Vec<CrewMember>,
    pub writers: Vec<CrewMember>,
}

impl CrewGroups {
    pub fn from_crew(crew: &[CrewMember]) -> Self {
        let mut groups = CrewGroups::default();
        for member in crew {
            match member.job.as_str() {
                "Director" => groups.directors.push(member.clone()),
                "Producer" | "Executive Producer" => groups.producers.push(member.clone()),
                "Writer" | "Screenplay" | "Story" => groups.writers.push(member.clone()),
                _ => {}
            }
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.directors.is_empty() && self.producers.is_empty() && self.writers.is_empty()
    }
}

/// Streaming availability for one region of the providers response. Missing
/// region or missing/empty `flatrate` yields None, which omits the
/// "Available On" section entirely.
pub fn provider_region(response: TmdbProvidersResponse, region: &str) -> Option<ProviderRegion> {
    let mut results = response.results;
    let entry = results.remove(region)?;
    let flatrate = entry.flatrate.filter(|providers| !providers.is_empty())?;
    Some(ProviderRegion {
        link: entry.link,
        flatrate: flatrate
            .into_iter()
            .map(|p| WatchProvider {
                provider_id: p.provider_id,
                provider_name: p.provider_name,
                logo_path: p.logo_path,
            })
            .collect(),
    })
}

/// Derived blurb shown under the overview; display-only, never part of any
/// data contract.
pub fn synthesize_description(data: &DetailData) -> String {
    let year = data.item.release_year().unwrap_or("unknown year");
    let genres = if data.genres.is_empty() {
        String::from("uncategorized")
    } else {
        data.genres
            .iter()
            .map(|g| g.name.to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{} ({}) is a {} title rated {:.1}/10 by TMDB audiences.",
        data.item.title, year, genres, data.item.vote_average
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{TmdbProvider, TmdbProviderRegion};
    use std::collections::HashMap;

    fn crew_member(name: &str, job: &str) -> CrewMember {
        CrewMember {
            id: 1,
            name: String::from(name),
            job: String::from(job),
        }
    }

    fn detail_data() -> DetailData {
        DetailData {
            item: MediaItem {
                id: 603,
                title: String::from("The Matrix"),
                overview: String::new(),
                poster_path: None,
                backdrop_path: None,
                media_type: MediaKind::Movie,
                vote_average: 8.2,
                release_date: Some(String::from("1999-03-31")),
            },
            genres: vec![
                Genre {
                    id: 28,
                    name: String::from("Action"),
                },
                Genre {
                    id: 878,
                    name: String::from("Science Fiction"),
                },
            ],
            runtime: Some(136),
            number_of_seasons: None,
            cast: Vec::new(),
            crew: Vec::new(),
            videos: Vec::new(),
            providers: None,
            similar: Vec::new(),
        }
    }

    #[test]
    fn crew_is_partitioned_by_exact_job_title() {
        let crew = vec![
            crew_member("Lana", "Director"),
            crew_member("Joel", "Producer"),
            crew_member("Lilly", "Screenplay"),
            crew_member("Zach", "Stunt Coordinator"),
            crew_member("Grant", "Executive Producer"),
        ];
        let groups = CrewGroups::from_crew(&crew);
        assert_eq!(groups.directors.len(), 1);
        assert_eq!(groups.producers.len(), 2);
        assert_eq!(groups.writers.len(), 1);
    }

    #[test]
    fn providers_without_flatrate_are_omitted_entirely() {
        let mut results = HashMap::new();
        results.insert(
            String::from("IN"),
            TmdbProviderRegion {
                link: Some(String::from("https://example.org/watch")),
                flatrate: None,
            },
        );
        assert!(provider_region(TmdbProvidersResponse { results }, "IN").is_none());
    }

    #[test]
    fn providers_for_a_missing_region_are_omitted() {
        let response = TmdbProvidersResponse {
            results: HashMap::new(),
        };
        assert!(provider_region(response, "IN").is_none());
    }

    #[test]
    fn flatrate_providers_are_exposed_for_the_region() {
        let mut results = HashMap::new();
        results.insert(
            String::from("IN"),
            TmdbProviderRegion {
                link: Some(String::from("https://example.org/watch")),
                flatrate: Some(vec![TmdbProvider {
                    provider_id: 8,
                    provider_name: String::from("Netflix"),
                    logo_path: Some(String::from("/netflix.png")),
                }]),
            },
        );
        let region = provider_region(TmdbProvidersResponse { results }, "IN").unwrap();
        assert_eq!(region.flatrate.len(), 1);
        assert_eq!(region.flatrate[0].provider_name, "Netflix");
    }

    #[test]
    fn synthesized_description_interpolates_lowercased_genres() {
        let blurb = synthesize_description(&detail_data());
        assert!(blurb.contains("The Matrix (1999)"));
        assert!(blurb.contains("action, science fiction"));
        assert!(blurb.contains("8.2/10"));
    }

    #[test]
    fn stale_detail_response_is_discarded() {
        let mut state = DetailState::new(603, MediaKind::Movie);
        let old = state.begin_fetch();
        let newer = state.begin_fetch();

        assert!(!state.apply(old, Ok(detail_data())));
        assert!(state.data.is_none());

        assert!(state.apply(newer, Err(ApiError::Network(String::from("boom")))));
        assert!(state.data.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load details. Please try again.")
        );
    }
}
