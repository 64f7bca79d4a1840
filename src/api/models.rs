use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Artist {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Song {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: Option<Artist>,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, rename = "isLiked")]
    pub is_liked: bool,
}

impl Song {
    pub fn artist_name(&self) -> &str {
        self.artist
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("Unknown Artist")
    }

    pub fn artist_id(&self) -> Option<i64> {
        self.artist.as_ref().map(|a| a.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Reference to a user as the backend embeds it in playlist payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Playlist {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "user_id")]
    pub owner: Option<UserRef>,
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl Playlist {
    pub fn owner_id(&self) -> Option<i64> {
        self.owner.as_ref().map(|u| u.id)
    }

    /// The catalog marks "albums" as playlists whose description mentions
    /// the word album.
    pub fn looks_like_album(&self) -> bool {
        self.description.to_lowercase().contains("album")
    }
}

/// Payload for playlist create/update requests. Song membership is sent
/// as bare id references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistPayload {
    pub title: String,
    pub description: String,
    pub visibility: Visibility,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub user_id: UserRef,
    pub songs: Vec<SongRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRef {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct UserLibrary {
    #[serde(default)]
    pub playlists: Vec<Playlist>,
    #[serde(default, rename = "followedArtists")]
    pub followed_artists: Vec<Artist>,
}

/// The account record behind `GET /users/{id}`, carrying role strings.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct UserAccount {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserAccount {
    pub fn is_artist(&self) -> bool {
        self.roles.iter().any(|r| r == "ROLE_ARTIST")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub user: UserRef,
    #[serde(default, rename = "isOwner")]
    pub is_owner: bool,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_deserializes_backend_shape() {
        let raw = r#"{
            "id": 7,
            "name": "Alpha",
            "genre": "POP",
            "filepath": "songs/alpha.mp3",
            "imageUrl": "https://img/alpha.png",
            "artist": { "id": 3, "name": "X", "followers": 120, "imageUrl": null }
        }"#;
        let song: Song = serde_json::from_str(raw).unwrap();
        assert_eq!(song.id, 7);
        assert_eq!(song.artist_name(), "X");
        assert!(!song.is_liked);
        assert_eq!(song.image_url.as_deref(), Some("https://img/alpha.png"));
    }

    #[test]
    fn song_tolerates_missing_artist() {
        let song: Song = serde_json::from_str(r#"{"id": 1, "name": "Solo"}"#).unwrap();
        assert!(song.artist.is_none());
        assert_eq!(song.artist_name(), "Unknown Artist");
        assert_eq!(song.artist_id(), None);
    }

    #[test]
    fn playlist_deserializes_owner_and_visibility() {
        let raw = r#"{
            "id": 4,
            "title": "Chill",
            "description": "An album of calm",
            "visibility": "PRIVATE",
            "user_id": { "id": 9 },
            "songs": [ { "id": 1, "name": "A" } ]
        }"#;
        let playlist: Playlist = serde_json::from_str(raw).unwrap();
        assert_eq!(playlist.owner_id(), Some(9));
        assert_eq!(playlist.visibility, Visibility::Private);
        assert!(playlist.looks_like_album());
        assert_eq!(playlist.songs.len(), 1);
    }

    #[test]
    fn playlist_payload_serializes_wire_names() {
        let payload = PlaylistPayload {
            title: "Mix".into(),
            description: "Created via App".into(),
            visibility: Visibility::Public,
            image_url: "https://img/cover.png".into(),
            user_id: UserRef { id: 2, username: None },
            songs: vec![SongRef { id: 5 }, SongRef { id: 6 }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["visibility"], "PUBLIC");
        assert_eq!(json["imageUrl"], "https://img/cover.png");
        assert_eq!(json["user_id"]["id"], 2);
        assert_eq!(json["songs"][1]["id"], 6);
    }

    #[test]
    fn artist_role_is_detected() {
        let user: UserAccount = serde_json::from_str(
            r#"{"id": 1, "username": "ada", "roles": ["ROLE_USER", "ROLE_ARTIST"]}"#,
        )
        .unwrap();
        assert!(user.is_artist());

        let listener: UserAccount =
            serde_json::from_str(r#"{"id": 2, "username": "bo", "roles": ["ROLE_USER"]}"#).unwrap();
        assert!(!listener.is_artist());
    }
}
