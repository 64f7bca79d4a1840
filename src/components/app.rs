use std::collections::HashSet;

use dioxus::prelude::*;
use tracing::{error, warn};

use crate::api::models::{Playlist, Song};
use crate::api::WaveOnClient;
use crate::components::audio::sleep_ms;
use crate::components::views;
use crate::components::{
    show_toast, AppView, AudioController, AudioState, Navigation, PlayerBar, Sidebar, StudyOverlay,
    ToastKind, ToastShelf, ToastState, Toolbar,
};
use crate::playback::{apply_like, LikeUpdate, RepeatMode};
use crate::search::filter_songs;
use crate::session::AuthSession;
use crate::study::{QueueMode, StudyState};

/// Genre tag the backend uses for focus-session tracks.
pub const STUDY_GENRE: &str = "STUDY";

#[derive(Clone, Copy)]
pub struct CatalogSignal(pub Signal<Vec<Song>>);

#[derive(Clone, Copy)]
pub struct QueueSignal(pub Signal<Vec<Song>>);

#[derive(Clone, Copy)]
pub struct VolumeSignal(pub Signal<f64>);

#[derive(Clone, Copy)]
pub struct ShuffleSignal(pub Signal<bool>);

#[derive(Clone, Copy)]
pub struct PlaybackPositionSignal(pub Signal<f64>);

#[derive(Clone, Copy)]
pub struct SearchQuerySignal(pub Signal<String>);

#[derive(Clone, Copy)]
pub struct PlaylistsSignal(pub Signal<Vec<Playlist>>);

/// Start playback of `song` with `songs` as the new active queue.
pub fn play_from(
    mut queue: Signal<Vec<Song>>,
    mut now_playing: Signal<Option<Song>>,
    mut is_playing: Signal<bool>,
    songs: &[Song],
    song: &Song,
) {
    queue.set(songs.to_vec());
    now_playing.set(Some(song.clone()));
    is_playing.set(true);
}

/// Optimistically flip a like across every tracked list, then reconcile
/// with the backend. A failed request restores the last confirmed value
/// instead of flipping again, so overlapping failures cannot desync.
pub fn spawn_toggle_like(
    session: Signal<AuthSession>,
    song: &Song,
    mut catalog: Signal<Vec<Song>>,
    mut queue: Signal<Vec<Song>>,
    mut now_playing: Signal<Option<Song>>,
    toasts: Signal<ToastState>,
) {
    let snapshot = session.peek().clone();
    let Some(user_id) = snapshot.user_id else {
        show_toast(toasts, "Sign in to like songs.", ToastKind::Error);
        return;
    };

    let update = LikeUpdate::begin(song.id, song.is_liked);
    let liked = update.optimistic();
    catalog.with_mut(|songs| apply_like(songs, update.song_id, liked));
    queue.with_mut(|songs| apply_like(songs, update.song_id, liked));
    now_playing.with_mut(|current| {
        if let Some(s) = current {
            if s.id == update.song_id {
                s.is_liked = liked;
            }
        }
    });

    spawn(async move {
        let client = WaveOnClient::new(snapshot);
        if let Err(err) = client.toggle_like(update.song_id, user_id).await {
            warn!("like toggle failed: {err}");
            let confirmed = update.confirmed;
            catalog.with_mut(|songs| apply_like(songs, update.song_id, confirmed));
            queue.with_mut(|songs| apply_like(songs, update.song_id, confirmed));
            now_playing.with_mut(|current| {
                if let Some(s) = current {
                    if s.id == update.song_id {
                        s.is_liked = confirmed;
                    }
                }
            });
            show_toast(toasts, "Could not update like.", ToastKind::Error);
        }
    });
}

/// Refetch the caller's playlists into the shared signal.
pub fn spawn_refresh_playlists(session: Signal<AuthSession>, mut playlists: Signal<Vec<Playlist>>) {
    let snapshot = session.peek().clone();
    spawn(async move {
        let client = WaveOnClient::new(snapshot);
        match client.get_playlists().await {
            Ok(lists) => playlists.set(lists),
            Err(err) => warn!("playlist refresh failed: {err}"),
        }
    });
}

/// Replace the queue with the STUDY-genre catalog and start playing.
pub fn spawn_study_queue(
    session: Signal<AuthSession>,
    mut queue: Signal<Vec<Song>>,
    mut now_playing: Signal<Option<Song>>,
    mut is_playing: Signal<bool>,
) {
    let snapshot = session.peek().clone();
    spawn(async move {
        let client = WaveOnClient::new(snapshot);
        match client.get_songs_by_genre(STUDY_GENRE).await {
            Ok(songs) if !songs.is_empty() => {
                let first = songs[0].clone();
                queue.set(songs);
                now_playing.set(Some(first));
                is_playing.set(true);
            }
            Ok(_) => warn!("no study songs available"),
            Err(err) => warn!("study queue fetch failed: {err}"),
        }
    });
}

#[component]
pub fn AppShell() -> Element {
    let session = use_signal(AuthSession::load);
    let current_view = use_signal(|| AppView::Home);
    let mut catalog = use_signal(Vec::<Song>::new);
    let mut queue = use_signal(Vec::<Song>::new);
    let mut now_playing = use_signal(|| None::<Song>);
    let mut is_playing = use_signal(|| false);
    let volume = use_signal(|| 0.8f64);
    let repeat_mode = use_signal(|| RepeatMode::Off);
    let shuffle_enabled = use_signal(|| false);
    let playback_position = use_signal(|| 0.0f64);
    let search_query = use_signal(String::new);
    let mut playlists = use_signal(Vec::<Playlist>::new);
    let study_state = use_signal(StudyState::default);
    let audio_state = use_signal(AudioState::default);
    let study_picker_open = use_signal(|| false);
    let toasts = use_signal(ToastState::default);
    let mut last_query = use_signal(String::new);

    let navigation = Navigation::new(current_view, catalog, queue, search_query);

    use_context_provider(|| session);
    use_context_provider(|| current_view);
    use_context_provider(|| navigation.clone());
    use_context_provider(|| CatalogSignal(catalog));
    use_context_provider(|| QueueSignal(queue));
    use_context_provider(|| now_playing);
    use_context_provider(|| is_playing);
    use_context_provider(|| VolumeSignal(volume));
    use_context_provider(|| repeat_mode);
    use_context_provider(|| ShuffleSignal(shuffle_enabled));
    use_context_provider(|| PlaybackPositionSignal(playback_position));
    use_context_provider(|| SearchQuerySignal(search_query));
    use_context_provider(|| PlaylistsSignal(playlists));
    use_context_provider(|| study_state);
    use_context_provider(|| crate::components::StudyPickerSignal(study_picker_open));
    use_context_provider(|| audio_state.clone());
    use_context_provider(|| crate::components::ToastSignal(toasts));

    // Initial load: full catalog with likes merged in, plus playlists.
    use_effect(move || {
        spawn(async move {
            let snapshot = session.peek().clone();
            let client = WaveOnClient::new(snapshot.clone());

            match client.get_songs().await {
                Ok(mut songs) => {
                    if let Some(user_id) = snapshot.user_id {
                        if let Ok(liked) = client.get_liked_songs(user_id).await {
                            let liked_ids: HashSet<i64> = liked.iter().map(|s| s.id).collect();
                            for song in songs.iter_mut() {
                                song.is_liked = liked_ids.contains(&song.id);
                            }
                        }
                    }
                    queue.set(songs.clone());
                    catalog.set(songs);
                }
                Err(err) => {
                    error!("initial song fetch failed: {err}");
                    show_toast(toasts, "Could not load songs.", ToastKind::Error);
                }
            }

            match client.get_playlists().await {
                Ok(lists) => playlists.set(lists),
                Err(err) => warn!("playlist fetch failed: {err}"),
            }
        });
    });

    // Searching narrows the queue to matching catalog songs. Guarded on
    // the query text so catalog updates alone do not clobber a playlist
    // queue.
    use_effect(move || {
        let query = search_query();
        if *last_query.peek() == query {
            return;
        }
        last_query.set(query.clone());
        let snapshot = catalog.peek().clone();
        queue.set(filter_songs(&snapshot, &query));
    });

    // Study timer: one-second ticks, queue swap on every phase flip.
    use_effect(move || {
        let mut study_state = study_state.clone();
        spawn(async move {
            loop {
                sleep_ms(1000).await;
                if !study_state.peek().is_active {
                    continue;
                }
                let flipped = study_state.write().tick();
                if let Some(phase) = flipped {
                    show_toast(toasts, phase.label(), ToastKind::Info);
                    match phase.queue_mode() {
                        QueueMode::Study => {
                            spawn_study_queue(session, queue, now_playing, is_playing);
                        }
                        QueueMode::Regular => {
                            queue.set(catalog.peek().clone());
                        }
                    }
                }
            }
        });
    });

    let view = current_view();

    rsx! {
        div { class: "flex h-screen text-white overflow-hidden bg-zinc-950",
            Sidebar {}

            div { class: "flex-1 flex flex-col overflow-hidden",
                Toolbar {}

                main { class: "flex-1 overflow-y-auto px-6 py-6 pb-32",
                    {match view {
                        AppView::Home => rsx! {
                            views::HomeView {}
                        },
                        AppView::Explore => rsx! {
                            views::ExploreView {}
                        },
                        AppView::Library => rsx! {
                            views::LibraryView {}
                        },
                        AppView::Favorites => rsx! {
                            views::FavoritesView {}
                        },
                        AppView::Galaxy => rsx! {
                            views::GalaxyView {}
                        },
                        AppView::PlaylistDetail(playlist_id) => rsx! {
                            views::PlaylistDetailView { playlist_id }
                        },
                        AppView::PlaylistCreate => rsx! {
                            views::PlaylistFormView { playlist_id: None }
                        },
                        AppView::PlaylistEdit(playlist_id) => rsx! {
                            views::PlaylistFormView { playlist_id: Some(playlist_id) }
                        },
                        AppView::ArtistDetail(artist_id) => rsx! {
                            views::ArtistDetailView { artist_id }
                        },
                        AppView::ArtistStudio => rsx! {
                            views::ArtistStudioView {}
                        },
                        AppView::Profile(user_id) => rsx! {
                            views::ProfileView { user_id }
                        },
                    }}
                }
            }

            PlayerBar {}
        }

        StudyOverlay {}

        ToastShelf {}

        // Audio controller - manages playback separately from UI
        AudioController {}
    }
}
