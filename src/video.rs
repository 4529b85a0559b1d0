use std::process::Stdio;

use serde::Deserialize;
use tokio::process::Command;

#[derive(Debug, Clone, Deserialize)]
pub struct TrailerVideo {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub results: Vec<TrailerVideo>,
}

/// A proper YouTube trailer if one exists, otherwise a YouTube teaser.
pub fn select_trailer(videos: &[TrailerVideo]) -> Option<&TrailerVideo> {
    videos
        .iter()
        .find(|v| v.site == "YouTube" && v.video_type == "Trailer")
        .or_else(|| {
            videos
                .iter()
                .find(|v| v.site == "YouTube" && v.video_type == "Teaser")
        })
}

/// Strict variant for the watch page, which only offers the button when an
/// actual trailer exists.
pub fn find_trailer(videos: &[TrailerVideo]) -> Option<&TrailerVideo> {
    videos
        .iter()
        .find(|v| v.site == "YouTube" && v.video_type == "Trailer")
}

pub fn youtube_watch_url(key: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", key)
}

pub fn youtube_search_url(title: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(&format!("{} official trailer", title))
    )
}

/// Deep link for the trailer action: the selected video when one exists,
/// otherwise an external YouTube search for the title.
pub fn trailer_action_url(videos: &[TrailerVideo], title: &str) -> String {
    match select_trailer(videos) {
        Some(video) => youtube_watch_url(&video.key),
        None => youtube_search_url(title),
    }
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Opens a URL in the system browser; fire-and-forget.
pub async fn open_external(url: String) -> Result<(), String> {
    opener_command(&url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(video_type: &str, site: &str, key: &str) -> TrailerVideo {
        TrailerVideo {
            key: String::from(key),
            site: String::from(site),
            video_type: String::from(video_type),
        }
    }

    #[test]
    fn trailer_is_preferred_over_teaser() {
        let videos = vec![
            video("Teaser", "YouTube", "teaser1"),
            video("Trailer", "YouTube", "trailer1"),
        ];
        assert_eq!(select_trailer(&videos).unwrap().key, "trailer1");
    }

    #[test]
    fn teaser_is_used_when_no_trailer_exists() {
        let videos = vec![
            video("Featurette", "YouTube", "feat1"),
            video("Teaser", "YouTube", "teaser1"),
        ];
        let url = trailer_action_url(&videos, "Heat");
        assert_eq!(url, "https://www.youtube.com/watch?v=teaser1");
    }

    #[test]
    fn non_youtube_videos_are_ignored() {
        let videos = vec![video("Trailer", "Vimeo", "vimeo1")];
        assert!(select_trailer(&videos).is_none());
    }

    #[test]
    fn missing_videos_fall_back_to_an_external_search() {
        let url = trailer_action_url(&[], "Heat");
        assert!(url.starts_with("https://www.youtube.com/results?search_query="));
        assert!(url.contains("Heat"));
    }

    #[test]
    fn watch_page_only_accepts_real_trailers() {
        let videos = vec![video("Teaser", "YouTube", "teaser1")];
        assert!(find_trailer(&videos).is_none());
    }
}
