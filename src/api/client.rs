//! REST gateway to the WaveOn backend.
//!
//! Every method is best-effort: failures come back as `Err(String)` and
//! callers decide whether to log, toast, or fall back to empty data.
//! Requests attach the bearer token when the session has one; without a
//! token the same calls run anonymously and public endpoints still work.

use crate::api::models::*;
use crate::session::AuthSession;
use once_cell::sync::Lazy;
use tracing::warn;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const DEFAULT_API_BASE: &str = "http://localhost:8081/api";

/// Build-time backend origin, e.g. `https://waveon.example.com/api`.
pub fn api_base() -> &'static str {
    option_env!("WAVEON_API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

pub fn api_url(path: &str) -> String {
    let base = api_base().trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// A prepared audio upload: field values plus raw file bytes.
#[derive(Debug, Clone)]
pub struct SongUpload {
    pub name: String,
    pub genre: String,
    pub image_name: String,
    pub image_bytes: Vec<u8>,
    pub audio_name: String,
    pub audio_bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct WaveOnClient {
    session: AuthSession,
}

impl WaveOnClient {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }

    pub fn anonymous() -> Self {
        Self::new(AuthSession::anonymous())
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.authorized(HTTP_CLIENT.get(url))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// URL the audio element streams from; not a JSON endpoint.
    pub fn stream_url(&self, song_id: i64) -> String {
        api_url(&format!("/songs/{song_id}/stream"))
    }

    // --- Songs ---

    pub async fn get_songs(&self) -> Result<Vec<Song>, String> {
        self.fetch_songs(&api_url("/songs")).await
    }

    pub async fn get_songs_by_genre(&self, genre: &str) -> Result<Vec<Song>, String> {
        let encoded = urlencoding::encode(genre);
        self.fetch_songs(&api_url(&format!("/songs/genre/{encoded}"))).await
    }

    pub async fn get_liked_songs(&self, user_id: i64) -> Result<Vec<Song>, String> {
        self.fetch_songs(&api_url(&format!("/songs/like?userId={user_id}")))
            .await
    }

    async fn fetch_songs(&self, url: &str) -> Result<Vec<Song>, String> {
        let response = self.get(url).send().await.map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("song fetch failed with {}", response.status()));
        }
        let songs: Vec<Song> = response.json().await.map_err(|e| e.to_string())?;
        // The backend occasionally serves rows without an id; drop them
        // rather than letting a zero-id song break queue identity.
        Ok(songs.into_iter().filter(|s| s.id != 0).collect())
    }

    pub async fn toggle_like(&self, song_id: i64, user_id: i64) -> Result<(), String> {
        let url = api_url(&format!("/songs/{song_id}/like?userId={user_id}"));
        let response = self
            .authorized(HTTP_CLIENT.post(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("like toggle failed with {}", response.status()))
        }
    }

    /// Publish a track as the logged-in artist. 401/403 get a distinct
    /// message so the studio can warn about the missing artist role.
    pub async fn upload_song(&self, upload: SongUpload) -> Result<(), String> {
        use reqwest::multipart::{Form, Part};

        let image = Part::bytes(upload.image_bytes).file_name(upload.image_name);
        let audio = Part::bytes(upload.audio_bytes).file_name(upload.audio_name);
        let form = Form::new()
            .text("name", upload.name)
            .text("genre", upload.genre)
            .part("image", image)
            .part("file", audio);

        let response = self
            .authorized(HTTP_CLIENT.post(api_url("/songs")))
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err("Not authorized to publish: artist role required.".to_string())
        } else {
            Err(format!("upload failed with {status}"))
        }
    }

    pub async fn delete_song(&self, song_id: i64) -> Result<(), String> {
        let url = api_url(&format!("/songs/{song_id}"));
        let response = self
            .authorized(HTTP_CLIENT.delete(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("song delete failed with {}", response.status()))
        }
    }

    // --- Playlists ---

    /// The caller's playlists. Skipped entirely without a token so the
    /// sidebar renders empty instead of collecting 403s.
    pub async fn get_playlists(&self) -> Result<Vec<Playlist>, String> {
        if self.session.token.is_none() {
            warn!("no auth token, skipping playlist fetch");
            return Ok(Vec::new());
        }
        let response = self
            .get(&api_url("/playlists"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Ok(Vec::new());
        }
        response.json().await.map_err(|e| e.to_string())
    }

    pub async fn get_playlist(&self, playlist_id: i64) -> Result<Playlist, String> {
        let response = self
            .get(&api_url(&format!("/playlists/{playlist_id}")))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("playlist fetch failed with {}", response.status()));
        }
        response.json().await.map_err(|e| e.to_string())
    }

    pub async fn create_playlist(&self, payload: &PlaylistPayload) -> Result<Playlist, String> {
        self.save_playlist(HTTP_CLIENT.post(api_url("/playlists")), payload)
            .await
    }

    pub async fn update_playlist(
        &self,
        playlist_id: i64,
        payload: &PlaylistPayload,
    ) -> Result<Playlist, String> {
        let url = api_url(&format!("/playlists/{playlist_id}"));
        self.save_playlist(HTTP_CLIENT.put(&url), payload).await
    }

    async fn save_playlist(
        &self,
        request: reqwest::RequestBuilder,
        payload: &PlaylistPayload,
    ) -> Result<Playlist, String> {
        let response = self
            .authorized(request)
            .json(payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("playlist save failed with {}", response.status()));
        }
        response.json().await.map_err(|e| e.to_string())
    }

    pub async fn delete_playlist(&self, playlist_id: i64) -> Result<(), String> {
        let url = api_url(&format!("/playlists/{playlist_id}"));
        let response = self
            .authorized(HTTP_CLIENT.delete(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("playlist delete failed with {}", response.status()))
        }
    }

    // --- Users ---

    pub async fn get_user(&self, user_id: i64) -> Result<UserAccount, String> {
        let response = self
            .get(&api_url(&format!("/users/{user_id}")))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("user fetch failed with {}", response.status()));
        }
        response.json().await.map_err(|e| e.to_string())
    }

    pub async fn get_profile(&self, user_id: i64, viewer_id: i64) -> Result<UserProfile, String> {
        let url = api_url(&format!("/users/{user_id}/profile?viewerId={viewer_id}"));
        let response = self.get(&url).send().await.map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("profile fetch failed with {}", response.status()));
        }
        response.json().await.map_err(|e| e.to_string())
    }

    pub async fn get_library(&self, user_id: i64) -> Result<UserLibrary, String> {
        let response = self
            .get(&api_url(&format!("/users/{user_id}/library")))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("library fetch failed with {}", response.status()));
        }
        response.json().await.map_err(|e| e.to_string())
    }

    pub async fn become_artist(&self, user_id: i64) -> Result<(), String> {
        let url = api_url(&format!("/users/{user_id}/become-artist"));
        let response = self
            .authorized(HTTP_CLIENT.post(&url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("become-artist failed with {}", response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_with_and_without_slash() {
        let base = api_base().trim_end_matches('/');
        assert_eq!(api_url("songs"), format!("{base}/songs"));
        assert_eq!(api_url("/songs"), format!("{base}/songs"));
    }

    #[test]
    fn stream_url_targets_the_song_stream_endpoint() {
        let client = WaveOnClient::anonymous();
        assert!(client.stream_url(12).ends_with("/songs/12/stream"));
    }

    #[test]
    fn genre_path_is_percent_encoded() {
        let encoded = urlencoding::encode("LO FI");
        assert_eq!(encoded, "LO%20FI");
    }
}
