pub mod episode;
pub mod movie;
pub mod season;
pub mod series;
pub mod video;

pub use episode::Episode;
pub use movie::Movie;
pub use season::Season;
pub use series::{Series, SeriesKind};
pub use video::{SourceType, VideoSource};
