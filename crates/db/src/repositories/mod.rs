//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod gig_repo;
pub mod page_content_repo;
pub mod photo_repo;
pub mod photo_set_repo;
pub mod session_repo;
pub mod user_repo;
pub mod video_repo;

pub use gig_repo::GigRepo;
pub use page_content_repo::PageContentRepo;
pub use photo_repo::PhotoRepo;
pub use photo_set_repo::PhotoSetRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
