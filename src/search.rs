//! Catalog search: case-insensitive substring match over song and artist
//! names, recomputed per keystroke. Linear over the catalog, which is
//! fine at the catalog sizes the backend serves.

use crate::api::models::{Artist, Song};

/// Songs whose name or artist name contains `query` (case-insensitive).
/// A blank query returns the whole catalog.
pub fn filter_songs(catalog: &[Song], query: &str) -> Vec<Song> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|song| {
            song.name.to_lowercase().contains(&needle)
                || song
                    .artist
                    .as_ref()
                    .map(|a| a.name.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Distinct artists of the matched songs, first occurrence order. Feeds
/// the "recommended artists" strip shown while searching.
pub fn unique_artists(songs: &[Song]) -> Vec<Artist> {
    let mut seen = std::collections::HashSet::new();
    let mut artists = Vec::new();
    for song in songs {
        if let Some(artist) = &song.artist {
            if artist.id != 0 && seen.insert(artist.id) {
                artists.push(artist.clone());
            }
        }
    }
    artists
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Song> {
        let x = Artist {
            id: 1,
            name: "X".into(),
            ..Default::default()
        };
        let y = Artist {
            id: 2,
            name: "Y".into(),
            ..Default::default()
        };
        vec![
            Song {
                id: 1,
                name: "Alpha".into(),
                artist: Some(x),
                ..Default::default()
            },
            Song {
                id: 2,
                name: "Beta".into(),
                artist: Some(y),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let matched = filter_songs(&catalog(), "alp");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Alpha");
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(filter_songs(&catalog(), "").len(), 2);
        assert_eq!(filter_songs(&catalog(), "   ").len(), 2);
    }

    #[test]
    fn artist_name_also_matches() {
        let matched = filter_songs(&catalog(), "y");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Beta");
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_songs(&catalog(), "zzz").is_empty());
    }

    #[test]
    fn unique_artists_keeps_first_occurrence_order() {
        let mut songs = catalog();
        // second song by artist X
        songs.push(Song {
            id: 3,
            name: "Alpha II".into(),
            artist: songs[0].artist.clone(),
            ..Default::default()
        });
        let artists = unique_artists(&songs);
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].name, "X");
        assert_eq!(artists[1].name, "Y");
    }

    #[test]
    fn artist_strip_follows_search_matches() {
        let matched = filter_songs(&catalog(), "alp");
        let artists = unique_artists(&matched);
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "X");

        // blank query: strip covers the whole catalog again
        let artists = unique_artists(&filter_songs(&catalog(), ""));
        assert_eq!(artists.len(), 2);
    }

    #[test]
    fn songs_without_artist_are_skipped() {
        let songs = vec![Song {
            id: 9,
            name: "Orphan".into(),
            ..Default::default()
        }];
        assert!(unique_artists(&songs).is_empty());
    }
}
