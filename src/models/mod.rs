// Upstream API response types and sensor state

mod command;
mod disk;
mod episode;
mod sensor;
mod series;

pub use command::Command;
pub use disk::DiskSpace;
pub use episode::{
    CalendarEpisode, EpisodeRef, QueueItem, SeriesRef, WantedPage, WantedRecord, WantedTotal,
};
pub use sensor::{Attributes, SensorSnapshot, SensorState, SensorValue};
pub use series::Series;
