pub mod directory;
pub mod embedded;
pub mod traits;

pub use directory::DirectorySource;
pub use embedded::EmbeddedSource;
pub use traits::ResourceSource;
