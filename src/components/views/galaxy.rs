//! The discovery galaxy: genres rendered as suns, artists as planets
//! orbiting the genre they appear in, laid out with a small force
//! simulation and drawn as SVG. Clicking any body loads that genre into
//! the queue.

use dioxus::prelude::*;
use tracing::error;

use crate::api::client::WaveOnClient;
use crate::api::models::{PlaylistPayload, Song, SongRef, UserRef, Visibility};
use crate::components::{
    show_toast, spawn_refresh_playlists, AppView, CatalogSignal, Icon, Navigation,
    PlaylistsSignal, QueueSignal, ToastKind, ToastSignal,
};
use crate::session::AuthSession;
use crate::util::FALLBACK_ARTIST_URL;

const VIEW_WIDTH: f64 = 1000.0;
const VIEW_HEIGHT: f64 = 700.0;
const STAR_COUNT: usize = 400;
const LAYOUT_ITERATIONS: usize = 120;

const GALAXY_COVER_URL: &str = "https://images.unsplash.com/photo-1614613535308-eb5fbd3d2c17";

const GENRE_RADIUS: f64 = 34.0;
const ARTIST_RADIUS: f64 = 16.0;
const SPRING_LENGTH: f64 = 110.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Genre,
    Artist,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub kind: NodeKind,
    pub label: String,
    /// Genre this body belongs to; for genre nodes, the genre itself.
    pub genre: String,
    pub image_url: Option<String>,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

/// Indexes into the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
}

/// One genre node per distinct genre, one artist node per distinct
/// artist, each artist linked to the genre it first appears under.
pub fn build_graph(songs: &[Song]) -> (Vec<GraphNode>, Vec<GraphLink>) {
    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut links: Vec<GraphLink> = Vec::new();

    for song in songs {
        if song.genre.is_empty() {
            continue;
        }
        if !nodes
            .iter()
            .any(|n| n.kind == NodeKind::Genre && n.genre == song.genre)
        {
            nodes.push(GraphNode {
                kind: NodeKind::Genre,
                label: song.genre.clone(),
                genre: song.genre.clone(),
                image_url: None,
                radius: GENRE_RADIUS,
                x: 0.0,
                y: 0.0,
            });
        }
    }

    for song in songs {
        let Some(artist) = &song.artist else { continue };
        if song.genre.is_empty() || artist.name.is_empty() {
            continue;
        }
        if nodes
            .iter()
            .any(|n| n.kind == NodeKind::Artist && n.label == artist.name)
        {
            continue;
        }
        let genre_index = nodes
            .iter()
            .position(|n| n.kind == NodeKind::Genre && n.genre == song.genre);
        let Some(genre_index) = genre_index else { continue };

        nodes.push(GraphNode {
            kind: NodeKind::Artist,
            label: artist.name.clone(),
            genre: song.genre.clone(),
            image_url: artist.image_url.clone().or_else(|| song.image_url.clone()),
            radius: ARTIST_RADIUS,
            x: 0.0,
            y: 0.0,
        });
        links.push(GraphLink {
            source: genre_index,
            target: nodes.len() - 1,
        });
    }

    (nodes, links)
}

/// Place nodes on concentric rings, then relax with repulsion, link
/// springs and a weak centering pull. Deterministic for a given graph.
pub fn run_layout(nodes: &mut [GraphNode], links: &[GraphLink]) {
    if nodes.is_empty() {
        return;
    }
    let cx = VIEW_WIDTH / 2.0;
    let cy = VIEW_HEIGHT / 2.0;

    let genre_count = nodes.iter().filter(|n| n.kind == NodeKind::Genre).count();
    let mut genre_seen = 0usize;
    let mut artist_seen = 0usize;
    let artist_count = nodes.len() - genre_count;
    for node in nodes.iter_mut() {
        let (ring, index, total) = match node.kind {
            NodeKind::Genre => (150.0, genre_seen, genre_count.max(1)),
            NodeKind::Artist => (280.0, artist_seen, artist_count.max(1)),
        };
        let angle = std::f64::consts::TAU * index as f64 / total as f64;
        node.x = cx + ring * angle.cos();
        node.y = cy + ring * angle.sin();
        match node.kind {
            NodeKind::Genre => genre_seen += 1,
            NodeKind::Artist => artist_seen += 1,
        }
    }

    let mut forces = vec![(0.0f64, 0.0f64); nodes.len()];
    for _ in 0..LAYOUT_ITERATIONS {
        for force in &mut forces {
            *force = (0.0, 0.0);
        }

        // Pairwise repulsion keeps bodies from stacking.
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let dx = nodes[i].x - nodes[j].x;
                let dy = nodes[i].y - nodes[j].y;
                let dist_sq = (dx * dx + dy * dy).max(25.0);
                let dist = dist_sq.sqrt();
                let push = 2600.0 / dist_sq;
                forces[i].0 += push * dx / dist;
                forces[i].1 += push * dy / dist;
                forces[j].0 -= push * dx / dist;
                forces[j].1 -= push * dy / dist;
            }
        }

        // Springs pull linked artist and genre toward the rest length.
        for link in links {
            let dx = nodes[link.target].x - nodes[link.source].x;
            let dy = nodes[link.target].y - nodes[link.source].y;
            let dist = (dx * dx + dy * dy).sqrt().max(1.0);
            let pull = 0.02 * (dist - SPRING_LENGTH);
            forces[link.source].0 += pull * dx / dist;
            forces[link.source].1 += pull * dy / dist;
            forces[link.target].0 -= pull * dx / dist;
            forces[link.target].1 -= pull * dy / dist;
        }

        for (node, force) in nodes.iter_mut().zip(&forces) {
            let to_center_x = cx - node.x;
            let to_center_y = cy - node.y;
            node.x += force.0 + 0.01 * to_center_x;
            node.y += force.1 + 0.01 * to_center_y;
            node.x = node.x.clamp(node.radius + 10.0, VIEW_WIDTH - node.radius - 10.0);
            node.y = node.y.clamp(node.radius + 10.0, VIEW_HEIGHT - node.radius - 10.0);
        }
    }
}

/// Fixed backdrop of stars as (x, y, radius). Seeded LCG so the sky does
/// not shimmer every re-render.
pub fn star_field(count: usize) -> Vec<(f64, f64, f64)> {
    let mut state = 0x2545f491_4f6c_dd1du64;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };
    (0..count)
        .map(|_| {
            let x = next() * VIEW_WIDTH;
            let y = next() * VIEW_HEIGHT;
            let r = 0.4 + next() * 1.1;
            (x, y, r)
        })
        .collect()
}

#[component]
pub fn GalaxyView() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let catalog = use_context::<CatalogSignal>().0;
    let mut queue = use_context::<QueueSignal>().0;
    let mut now_playing = use_context::<Signal<Option<Song>>>();
    let mut is_playing = use_context::<Signal<bool>>();
    let mut current_view = use_context::<Signal<AppView>>();
    let playlists = use_context::<PlaylistsSignal>().0;
    let navigation = use_context::<Navigation>();
    let toasts = use_context::<ToastSignal>().0;

    let graph = use_memo(move || {
        let songs = catalog();
        let (mut nodes, links) = build_graph(&songs);
        run_layout(&mut nodes, &links);
        (nodes, links)
    });
    let (nodes, links) = graph();
    let stars = star_field(STAR_COUNT);

    // Discovering a genre collects its songs into a "Your {genre}
    // Playlist": reuse it when it already exists, create it otherwise.
    // Anonymous visitors just get the genre queued up.
    let discover = move |genre: String| {
        let discovered: Vec<Song> = catalog
            .peek()
            .iter()
            .filter(|s| s.genre == genre)
            .cloned()
            .collect();
        if discovered.is_empty() {
            return;
        }

        let target_title = format!("Your {genre} Playlist");
        if let Some(existing) = playlists.peek().iter().find(|p| p.title == target_title) {
            show_toast(
                toasts,
                format!("Opening your existing {genre} collection."),
                ToastKind::Info,
            );
            navigation.open_playlist(existing.id);
            return;
        }

        let snapshot = session.peek().clone();
        let Some(user_id) = snapshot.user_id else {
            queue.set(discovered);
            current_view.set(AppView::Home);
            return;
        };

        spawn(async move {
            let payload = PlaylistPayload {
                title: target_title.clone(),
                description: "Discovered in the Galaxy of Music".to_string(),
                visibility: Visibility::Public,
                image_url: GALAXY_COVER_URL.to_string(),
                user_id: UserRef {
                    id: user_id,
                    username: None,
                },
                songs: discovered.iter().map(|s| SongRef { id: s.id }).collect(),
            };
            let client = WaveOnClient::new(snapshot);
            match client.create_playlist(&payload).await {
                Ok(_) => {
                    spawn_refresh_playlists(session, playlists);
                    let first = discovered.first().cloned();
                    queue.set(discovered);
                    now_playing.set(first);
                    is_playing.set(true);
                    current_view.set(AppView::Home);
                    show_toast(
                        toasts,
                        format!("Added \"{target_title}\" to your library!"),
                        ToastKind::Info,
                    );
                }
                Err(err) => error!("galaxy playlist creation failed: {err}"),
            }
        });
    };

    if nodes.is_empty() {
        return rsx! {
            div { class: "flex flex-col items-center justify-center py-20",
                Icon {
                    name: "galaxy".to_string(),
                    class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                }
                h2 { class: "text-xl font-semibold text-white mb-2", "The galaxy is dark" }
                p { class: "text-zinc-400", "No songs in the catalog to map yet" }
            }
        };
    }

    rsx! {
        div { class: "space-y-4",
            header {
                h1 { class: "text-3xl font-bold text-white", "Discovery Galaxy" }
                p { class: "text-sm text-zinc-400 mt-1",
                    "Every sun is a genre, every planet an artist. Tap one to tune in."
                }
            }
            div { class: "rounded-2xl overflow-hidden border border-zinc-800/60 bg-black",
                svg {
                    view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                    class: "w-full h-auto select-none",
                    defs {
                        for (index , node) in nodes.iter().enumerate() {
                            if node.kind == NodeKind::Artist {
                                clipPath { id: "planet-clip-{index}",
                                    circle {
                                        cx: node.x,
                                        cy: node.y,
                                        r: node.radius,
                                    }
                                }
                            }
                        }
                    }

                    for (x , y , r) in stars {
                        circle {
                            cx: x,
                            cy: y,
                            r: r,
                            fill: "#ffffff",
                            opacity: "0.35",
                        }
                    }

                    for link in links {
                        line {
                            x1: nodes[link.source].x,
                            y1: nodes[link.source].y,
                            x2: nodes[link.target].x,
                            y2: nodes[link.target].y,
                            stroke: "#7c3aed",
                            stroke_width: "1",
                            opacity: "0.3",
                        }
                    }

                    for node in nodes.iter().filter(|n| n.kind == NodeKind::Genre) {
                        g {
                            class: "cursor-pointer",
                            onclick: {
                                let mut discover = discover.clone();
                                let genre = node.genre.clone();
                                move |_| discover(genre.clone())
                            },
                            circle {
                                cx: node.x,
                                cy: node.y,
                                r: node.radius + 14.0,
                                fill: "#8b5cf6",
                                opacity: "0.18",
                            }
                            circle {
                                cx: node.x,
                                cy: node.y,
                                r: node.radius,
                                fill: "#8b5cf6",
                            }
                            text {
                                x: node.x,
                                y: node.y + 4.0,
                                text_anchor: "middle",
                                fill: "#ffffff",
                                font_size: "13",
                                font_weight: "700",
                                "{node.label}"
                            }
                        }
                    }

                    for (index , node) in nodes.iter().enumerate() {
                        if node.kind == NodeKind::Artist {
                            g {
                                class: "cursor-pointer",
                                onclick: {
                                    let mut discover = discover.clone();
                                    let genre = node.genre.clone();
                                    move |_| discover(genre.clone())
                                },
                                circle {
                                    cx: node.x,
                                    cy: node.y,
                                    r: node.radius + 2.0,
                                    fill: "none",
                                    stroke: "#d946ef",
                                    stroke_width: "1.5",
                                    opacity: "0.7",
                                }
                                image {
                                    href: node.image_url.clone().unwrap_or_else(|| FALLBACK_ARTIST_URL.to_string()),
                                    x: node.x - node.radius,
                                    y: node.y - node.radius,
                                    width: node.radius * 2.0,
                                    height: node.radius * 2.0,
                                    preserve_aspect_ratio: "xMidYMid slice",
                                    clip_path: "url(#planet-clip-{index})",
                                }
                                text {
                                    x: node.x,
                                    y: node.y + node.radius + 14.0,
                                    text_anchor: "middle",
                                    fill: "#d4d4d8",
                                    font_size: "10",
                                    "{node.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Artist;

    fn song(id: i64, genre: &str, artist_id: i64, artist_name: &str) -> Song {
        Song {
            id,
            name: format!("track-{id}"),
            genre: genre.to_string(),
            artist: Some(Artist {
                id: artist_id,
                name: artist_name.to_string(),
                followers: 0,
                image_url: None,
            }),
            ..Song::default()
        }
    }

    #[test]
    fn one_sun_per_genre_and_one_planet_per_artist() {
        let songs = vec![
            song(1, "POP", 10, "Ada"),
            song(2, "POP", 10, "Ada"),
            song(3, "POP", 11, "Bo"),
            song(4, "JAZZ", 12, "Cy"),
        ];
        let (nodes, links) = build_graph(&songs);

        let genres: Vec<_> = nodes.iter().filter(|n| n.kind == NodeKind::Genre).collect();
        let artists: Vec<_> = nodes.iter().filter(|n| n.kind == NodeKind::Artist).collect();
        assert_eq!(genres.len(), 2);
        assert_eq!(artists.len(), 3);
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn planets_link_to_their_own_sun() {
        let songs = vec![song(1, "POP", 10, "Ada"), song(2, "JAZZ", 12, "Cy")];
        let (nodes, links) = build_graph(&songs);

        for link in links {
            assert_eq!(nodes[link.source].kind, NodeKind::Genre);
            assert_eq!(nodes[link.target].kind, NodeKind::Artist);
            assert_eq!(nodes[link.source].genre, nodes[link.target].genre);
        }
    }

    #[test]
    fn planet_falls_back_to_song_cover() {
        let mut track = song(1, "POP", 10, "Ada");
        track.image_url = Some("https://img/cover.png".into());
        let (nodes, _) = build_graph(&[track]);

        let planet = nodes.iter().find(|n| n.kind == NodeKind::Artist).unwrap();
        assert_eq!(planet.image_url.as_deref(), Some("https://img/cover.png"));
    }

    #[test]
    fn songs_without_genre_are_skipped() {
        let mut track = song(1, "", 10, "Ada");
        track.genre.clear();
        let (nodes, links) = build_graph(&[track]);
        assert!(nodes.is_empty());
        assert!(links.is_empty());
    }

    #[test]
    fn layout_is_deterministic_and_in_bounds() {
        let songs = vec![
            song(1, "POP", 10, "Ada"),
            song(2, "JAZZ", 11, "Bo"),
            song(3, "LOFI", 12, "Cy"),
            song(4, "POP", 13, "Di"),
        ];
        let (mut first, links) = build_graph(&songs);
        let (mut second, _) = build_graph(&songs);
        run_layout(&mut first, &links);
        run_layout(&mut second, &links);

        assert_eq!(first, second);
        for node in &first {
            assert!(node.x.is_finite() && node.y.is_finite());
            assert!(node.x >= 0.0 && node.x <= VIEW_WIDTH);
            assert!(node.y >= 0.0 && node.y <= VIEW_HEIGHT);
        }
    }

    #[test]
    fn star_field_is_stable() {
        let a = star_field(50);
        let b = star_field(50);
        assert_eq!(a.len(), 50);
        assert_eq!(a, b);
    }
}
