mod index;
mod not_found;

pub use index::IndexPage;
pub use not_found::NotFoundPage;
