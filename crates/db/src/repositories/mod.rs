//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut PgConnection` as the first argument.

pub mod artist_repo;
pub mod artwork_repo;
pub mod collection_repo;
pub mod console_repo;
pub mod dashboard_repo;
pub mod museum_repo;

pub use artist_repo::ArtistRepo;
pub use artwork_repo::ArtworkRepo;
pub use collection_repo::CollectionRepo;
pub use console_repo::ConsoleRepo;
pub use dashboard_repo::DashboardRepo;
pub use museum_repo::MuseumRepo;
