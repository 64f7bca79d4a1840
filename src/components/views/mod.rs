//! Per-view components dispatched by the app shell.

mod artist_detail;
mod artist_studio;
mod explore;
mod favorites;
mod galaxy;
mod home;
mod library;
mod playlist_detail;
mod playlist_form;
mod profile;

pub use artist_detail::ArtistDetailView;
pub use artist_studio::ArtistStudioView;
pub use explore::ExploreView;
pub use favorites::FavoritesView;
pub use galaxy::GalaxyView;
pub use home::{HomeView, SongCard, SongRow};
pub use library::LibraryView;
pub use playlist_detail::PlaylistDetailView;
pub use playlist_form::PlaylistFormView;
pub use profile::ProfileView;
