pub mod avatar;
pub mod poster;
pub mod storage;
pub mod validation;

pub use avatar::FilesystemAvatarHandler;
pub use poster::FilesystemPosterHandler;
pub use storage::MediaDirectory;
pub use validation::ImageValidator;
