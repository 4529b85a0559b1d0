use crate::media::{
    ApiError, Category, HomeContent, LoadingState, MediaItem, MediaKind, MAX_PAGE_DEPTH,
};

/// Language filter for the Movies/Series listing pages. A concrete language
/// is sent as `with_original_language`, alongside `region=IN` as the original
/// catalog was curated for an Indian audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageFilter {
    All,
    Hindi,
    Bengali,
    Tamil,
    Telugu,
    Malayalam,
    Kannada,
    Marathi,
    Punjabi,
    Gujarati,
    Urdu,
    English,
    Korean,
    Japanese,
    Chinese,
    French,
    Spanish,
}

impl LanguageFilter {
    pub const ALL: [LanguageFilter; 17] = [
        LanguageFilter::All,
        LanguageFilter::Hindi,
        LanguageFilter::Bengali,
        LanguageFilter::Tamil,
        LanguageFilter::Telugu,
        LanguageFilter::Malayalam,
        LanguageFilter::Kannada,
        LanguageFilter::Marathi,
        LanguageFilter::Punjabi,
        LanguageFilter::Gujarati,
        LanguageFilter::Urdu,
        LanguageFilter::English,
        LanguageFilter::Korean,
        LanguageFilter::Japanese,
        LanguageFilter::Chinese,
        LanguageFilter::French,
        LanguageFilter::Spanish,
    ];

    pub fn code(&self) -> Option<&'static str> {
        match self {
            LanguageFilter::All => None,
            LanguageFilter::Hindi => Some("hi"),
            LanguageFilter::Bengali => Some("bn"),
            LanguageFilter::Tamil => Some("ta"),
            LanguageFilter::Telugu => Some("te"),
            LanguageFilter::Malayalam => Some("ml"),
            LanguageFilter::Kannada => Some("kn"),
            LanguageFilter::Marathi => Some("mr"),
            LanguageFilter::Punjabi => Some("pa"),
            LanguageFilter::Gujarati => Some("gu"),
            LanguageFilter::Urdu => Some("ur"),
            LanguageFilter::English => Some("en"),
            LanguageFilter::Korean => Some("ko"),
            LanguageFilter::Japanese => Some("ja"),
            LanguageFilter::Chinese => Some("zh"),
            LanguageFilter::French => Some("fr"),
            LanguageFilter::Spanish => Some("es"),
        }
    }
}

impl std::fmt::Display for LanguageFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LanguageFilter::All => "All Languages",
            LanguageFilter::Hindi => "Hindi (Bollywood)",
            LanguageFilter::Bengali => "Bengali",
            LanguageFilter::Tamil => "Tamil",
            LanguageFilter::Telugu => "Telugu",
            LanguageFilter::Malayalam => "Malayalam",
            LanguageFilter::Kannada => "Kannada",
            LanguageFilter::Marathi => "Marathi",
            LanguageFilter::Punjabi => "Punjabi",
            LanguageFilter::Gujarati => "Gujarati",
            LanguageFilter::Urdu => "Urdu",
            LanguageFilter::English => "English (Hollywood)",
            LanguageFilter::Korean => "Korean",
            LanguageFilter::Japanese => "Japanese",
            LanguageFilter::Chinese => "Chinese",
            LanguageFilter::French => "French",
            LanguageFilter::Spanish => "Spanish",
        };
        write!(f, "{}", label)
    }
}

/// One entry of a page's genre dropdown. The id tables differ between movies
/// and series upstream, so each listing config carries its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreChoice {
    pub label: &'static str,
    pub id: Option<u32>,
}

impl std::fmt::Display for GenreChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub const MOVIE_GENRES: [GenreChoice; 10] = [
    GenreChoice { label: "All Genres", id: None },
    GenreChoice { label: "Action", id: Some(28) },
    GenreChoice { label: "Comedy", id: Some(35) },
    GenreChoice { label: "Horror", id: Some(27) },
    GenreChoice { label: "Romance", id: Some(10749) },
    GenreChoice { label: "Thriller", id: Some(53) },
    GenreChoice { label: "Drama", id: Some(18) },
    GenreChoice { label: "Crime", id: Some(80) },
    GenreChoice { label: "Sci-Fi", id: Some(878) },
    GenreChoice { label: "Animation", id: Some(16) },
];

pub const SERIES_GENRES: [GenreChoice; 9] = [
    GenreChoice { label: "All Genres", id: None },
    GenreChoice { label: "Action & Adventure", id: Some(10759) },
    GenreChoice { label: "Drama", id: Some(18) },
    GenreChoice { label: "Comedy", id: Some(35) },
    GenreChoice { label: "Crime", id: Some(80) },
    GenreChoice { label: "Mystery", id: Some(9648) },
    GenreChoice { label: "Sci-Fi & Fantasy", id: Some(10765) },
    GenreChoice { label: "Animation", id: Some(16) },
    GenreChoice { label: "Family", id: Some(10751) },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Popularity,
    Rating,
    Latest,
    Oldest,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Popularity,
        SortOption::Rating,
        SortOption::Latest,
        SortOption::Oldest,
    ];

    /// Upstream sort key; the date field is `release_date` for movies and
    /// `first_air_date` for series.
    pub fn key(&self, date_field: &str) -> String {
        match self {
            SortOption::Popularity => String::from("popularity.desc"),
            SortOption::Rating => String::from("vote_average.desc"),
            SortOption::Latest => format!("{}.desc", date_field),
            SortOption::Oldest => format!("{}.asc", date_field),
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::Popularity => write!(f, "Most Popular"),
            SortOption::Rating => write!(f, "Top Rated"),
            SortOption::Latest => write!(f, "Latest"),
            SortOption::Oldest => write!(f, "Oldest"),
        }
    }
}

/// Static description of one listing page. The Movies and Series pages share
/// the controller below and differ only in this record.
pub struct ListingConfig {
    pub kind: MediaKind,
    pub title: &'static str,
    pub error_message: &'static str,
    pub date_field: &'static str,
    pub genres: &'static [GenreChoice],
}

pub static MOVIES_CONFIG: ListingConfig = ListingConfig {
    kind: MediaKind::Movie,
    title: "Movies",
    error_message: "Failed to load movies. Please try again.",
    date_field: "release_date",
    genres: &MOVIE_GENRES,
};

pub static SERIES_CONFIG: ListingConfig = ListingConfig {
    kind: MediaKind::Series,
    title: "Web Series",
    error_message: "Failed to load series. Please try again.",
    date_field: "first_air_date",
    genres: &SERIES_GENRES,
};

impl ListingConfig {
    pub fn category_label(&self, category: Category) -> &'static str {
        match (category, self.kind) {
            (Category::Trending, _) => "Trending Now",
            (Category::Bollywood, _) => "Bollywood",
            (Category::Hollywood, _) => "Hollywood",
            (Category::TopRated, _) => "Top Rated",
            (Category::Upcoming, MediaKind::Movie) => "Upcoming",
            (Category::Upcoming, MediaKind::Series) => "Airing Now",
        }
    }

    /// Resolves a category to the endpoint it substitutes, plus the query
    /// parameters that endpoint is inseparable from. User filters are merged
    /// on top and never override these.
    pub fn endpoint(&self, category: Option<Category>) -> (String, Vec<(&'static str, &'static str)>) {
        let kind = self.kind.path();
        match category {
            None => (format!("/discover/{}", kind), Vec::new()),
            Some(Category::Trending) => (format!("/trending/{}/week", kind), Vec::new()),
            Some(Category::Bollywood) => (
                format!("/discover/{}", kind),
                vec![("with_original_language", "hi"), ("region", "IN")],
            ),
            Some(Category::Hollywood) => (
                format!("/discover/{}", kind),
                vec![("with_original_language", "en")],
            ),
            Some(Category::TopRated) => (format!("/{}/top_rated", kind), Vec::new()),
            Some(Category::Upcoming) => match self.kind {
                MediaKind::Movie => (String::from("/movie/upcoming"), Vec::new()),
                MediaKind::Series => (String::from("/tv/on_the_air"), Vec::new()),
            },
        }
    }
}

/// The query snapshot a fetch cycle is issued for. Any field change
/// invalidates in-flight work for the previous snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub page: u32,
    pub language: LanguageFilter,
    pub genre: GenreChoice,
    pub sort: SortOption,
    pub category: Option<Category>,
}

impl ListingQuery {
    pub fn initial(config: &ListingConfig, category: Option<Category>) -> Self {
        Self {
            page: 1,
            language: LanguageFilter::All,
            genre: config.genres[0],
            sort: SortOption::default(),
            category,
        }
    }

    /// Endpoint path plus merged query parameters for this snapshot.
    pub fn request(&self, config: &ListingConfig) -> (String, Vec<(String, String)>) {
        let (path, base) = config.endpoint(self.category);
        let mut params: Vec<(String, String)> = base
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        params.push((String::from("page"), self.page.to_string()));
        params.push((String::from("sort_by"), self.sort.key(config.date_field)));
        if let Some(code) = self.language.code() {
            if !params.iter().any(|(k, _)| k == "with_original_language") {
                params.push((String::from("with_original_language"), code.to_string()));
                params.push((String::from("region"), String::from("IN")));
            }
        }
        if let Some(id) = self.genre.id {
            params.push((String::from("with_genres"), id.to_string()));
        }
        (path, params)
    }
}

#[derive(Debug, Clone)]
pub struct ListingPayload {
    pub items: Vec<MediaItem>,
    pub total_pages: u32,
}

/// Generic list-page controller state. Every fetch cycle is stamped with a
/// generation token; a response is applied only while its token is still the
/// latest one issued, so a slow stale response can never overwrite the state
/// of a newer query.
pub struct ListingState {
    pub config: &'static ListingConfig,
    pub query: ListingQuery,
    pub items: Vec<MediaItem>,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub loaded_once: bool,
    generation: u64,
}

impl ListingState {
    pub fn new(config: &'static ListingConfig) -> Self {
        Self {
            config,
            query: ListingQuery::initial(config, None),
            items: Vec::new(),
            total_pages: MAX_PAGE_DEPTH,
            loading: false,
            error: None,
            loaded_once: false,
            generation: 0,
        }
    }

    /// Fresh entry into the page (navigation), optionally preselecting a
    /// category. Filters reset and any in-flight cycle is invalidated.
    pub fn reset(&mut self, category: Option<Category>) -> u64 {
        self.query = ListingQuery::initial(self.config, category);
        self.items.clear();
        self.total_pages = MAX_PAGE_DEPTH;
        self.loaded_once = false;
        self.begin_fetch()
    }

    pub fn set_page(&mut self, page: u32) -> Option<u64> {
        if page < 1 || page == self.query.page {
            return None;
        }
        self.query.page = page;
        Some(self.begin_fetch())
    }

    pub fn set_language(&mut self, language: LanguageFilter) -> Option<u64> {
        if language == self.query.language {
            return None;
        }
        self.query.language = language;
        self.query.page = 1;
        Some(self.begin_fetch())
    }

    pub fn set_genre(&mut self, genre: GenreChoice) -> Option<u64> {
        if genre == self.query.genre {
            return None;
        }
        self.query.genre = genre;
        self.query.page = 1;
        Some(self.begin_fetch())
    }

    pub fn set_sort(&mut self, sort: SortOption) -> Option<u64> {
        if sort == self.query.sort {
            return None;
        }
        self.query.sort = sort;
        self.query.page = 1;
        Some(self.begin_fetch())
    }

    /// Repeats the identical fetch cycle for the current snapshot.
    pub fn retry(&mut self) -> u64 {
        self.begin_fetch()
    }

    fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a completed fetch cycle. Returns false when the response is
    /// stale and was discarded. A failure leaves previously displayed items
    /// untouched; an empty success replaces them (the "no results" state).
    pub fn apply(&mut self, generation: u64, result: Result<ListingPayload, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                self.items = payload.items;
                self.total_pages = payload.total_pages.min(MAX_PAGE_DEPTH);
                self.loaded_once = true;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(self.config.error_message.to_string());
            }
        }
        true
    }
}

/// Home feed controller: one parallel batch of five section queries that
/// fails together, plus the banner promoted from the trending results.
pub struct HomeState {
    pub content: Option<HomeContent>,
    pub loading: LoadingState,
    generation: u64,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            content: None,
            loading: LoadingState::Idle,
            generation: 0,
        }
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = LoadingState::Loading;
        self.generation
    }

    pub fn apply(&mut self, generation: u64, result: Result<HomeContent, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(content) => {
                self.content = Some(content);
                self.loading = LoadingState::Idle;
            }
            Err(_) => {
                self.loading =
                    LoadingState::Error(String::from("Failed to load movies. Please try again."));
            }
        }
        true
    }
}

/// Search page controller over the committed navbar query.
pub struct SearchState {
    pub query: String,
    pub results: Vec<MediaItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub loaded_once: bool,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            loading: false,
            error: None,
            loaded_once: false,
            generation: 0,
        }
    }

    pub fn begin(&mut self, query: String) -> u64 {
        self.query = query;
        self.results.clear();
        self.loaded_once = false;
        self.retry()
    }

    pub fn retry(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn apply(&mut self, generation: u64, result: Result<Vec<MediaItem>, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.results = items;
                self.loaded_once = true;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(String::from(
                    "Failed to load search results. Please try again.",
                ));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64) -> MediaItem {
        MediaItem {
            id,
            title: format!("Item {}", id),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            media_type: MediaKind::Movie,
            vote_average: 7.0,
            release_date: None,
        }
    }

    fn payload(ids: &[u64], total_pages: u32) -> ListingPayload {
        ListingPayload {
            items: ids.iter().copied().map(item).collect(),
            total_pages,
        }
    }

    fn params_of(state: &ListingState) -> Vec<(String, String)> {
        state.query.request(state.config).1
    }

    #[test]
    fn filter_change_resets_page_and_issues_one_cycle() {
        let mut state = ListingState::new(&MOVIES_CONFIG);
        let first = state.reset(None);
        state.apply(first, Ok(payload(&[1, 2], 30)));
        state.set_page(7);

        let generation = state.set_genre(MOVIE_GENRES[1]).expect("new cycle");
        assert_eq!(state.query.page, 1);
        assert!(state.loading);
        assert!(state.error.is_none());
        // A repeated selection of the same value must not start another cycle.
        assert_eq!(state.set_genre(MOVIE_GENRES[1]), None);
        assert!(state.apply(generation, Ok(payload(&[3], 10))));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = ListingState::new(&MOVIES_CONFIG);
        let old = state.reset(None);
        let newer = state.set_language(LanguageFilter::Korean).unwrap();

        assert!(!state.apply(old, Ok(payload(&[99], 5))));
        assert!(state.items.is_empty());
        assert!(state.loading);

        assert!(state.apply(newer, Ok(payload(&[1], 5))));
        assert_eq!(state.items.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn failed_fetch_keeps_previously_displayed_items() {
        let mut state = ListingState::new(&MOVIES_CONFIG);
        let first = state.reset(None);
        state.apply(first, Ok(payload(&[1, 2, 3], 30)));

        let second = state.retry();
        state.apply(second, Err(ApiError::Network(String::from("boom"))));

        assert_eq!(state.items.len(), 3);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load movies. Please try again.")
        );
    }

    #[test]
    fn empty_success_clears_to_no_results() {
        let mut state = ListingState::new(&MOVIES_CONFIG);
        let first = state.reset(None);
        state.apply(first, Ok(payload(&[1, 2], 30)));

        let second = state.set_genre(MOVIE_GENRES[3]).unwrap();
        state.apply(second, Ok(payload(&[], 1)));

        assert!(state.items.is_empty());
        assert!(state.loaded_once);
        assert!(state.error.is_none());
    }

    #[test]
    fn total_pages_is_capped_at_provider_maximum() {
        let mut state = ListingState::new(&MOVIES_CONFIG);
        let generation = state.reset(None);
        state.apply(generation, Ok(payload(&[1], 33211)));
        assert_eq!(state.total_pages, MAX_PAGE_DEPTH);
    }

    #[test]
    fn trending_category_swaps_endpoint_and_keeps_filters() {
        let mut state = ListingState::new(&MOVIES_CONFIG);
        state.reset(Some(Category::Trending));
        state.set_language(LanguageFilter::Hindi);
        state.set_genre(MOVIE_GENRES[1]);

        let (path, params) = state.query.request(state.config);
        assert_eq!(path, "/trending/movie/week");
        assert!(params.contains(&(String::from("with_original_language"), String::from("hi"))));
        assert!(params.contains(&(String::from("with_genres"), String::from("28"))));
        assert!(params.contains(&(String::from("sort_by"), String::from("popularity.desc"))));
    }

    #[test]
    fn category_base_parameters_win_over_the_language_filter() {
        let mut state = ListingState::new(&SERIES_CONFIG);
        state.reset(Some(Category::Bollywood));
        state.set_language(LanguageFilter::Korean);

        let params = params_of(&state);
        let languages: Vec<_> = params
            .iter()
            .filter(|(k, _)| k == "with_original_language")
            .collect();
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].1, "hi");
    }

    #[test]
    fn series_sort_uses_first_air_date() {
        let mut state = ListingState::new(&SERIES_CONFIG);
        state.reset(None);
        state.set_sort(SortOption::Latest);
        let params = params_of(&state);
        assert!(params.contains(&(String::from("sort_by"), String::from("first_air_date.desc"))));
    }

    #[test]
    fn search_failure_keeps_results_and_sets_error() {
        let mut state = SearchState::new();
        let first = state.begin(String::from("matrix"));
        state.apply(first, Ok(vec![item(1)]));

        let second = state.retry();
        state.apply(second, Err(ApiError::RateLimit));
        assert_eq!(state.results.len(), 1);
        assert!(state.error.is_some());

        // A stale success from an abandoned query must not resurface.
        let third = state.begin(String::from("inception"));
        assert!(!state.apply(second, Ok(vec![item(9)])));
        assert!(state.apply(third, Ok(Vec::new())));
        assert!(state.results.is_empty());
    }
}
