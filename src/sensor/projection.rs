// Per-kind projection of parsed responses into (value, attributes)

use chrono::NaiveDate;

use crate::models::{
    Attributes, CalendarEpisode, Command, DiskSpace, QueueItem, SensorValue, Series, WantedRecord,
};
use crate::units::{ByteUnit, to_unit};

pub type Projection = (SensorValue, Attributes);

/// "S01E02"
pub fn episode_code(season: u32, episode: u32) -> String {
    format!("S{:02}E{:02}", season, episode)
}

/// Keeps disks whose path is listed in `include_paths`, or all of them when the list is empty.
pub fn filter_disks<'a>(disks: &'a [DiskSpace], include_paths: &[String]) -> Vec<&'a DiskSpace> {
    disks
        .iter()
        .filter(|d| include_paths.is_empty() || include_paths.contains(&d.path))
        .collect()
}

/// Value is total free space in `unit`, two decimals. Attributes per path:
/// "<free>/<total><unit> (<percent free>%)".
pub fn diskspace(disks: &[DiskSpace], include_paths: &[String], unit: ByteUnit) -> Projection {
    let kept = filter_disks(disks, include_paths);
    let free_total: u64 = kept.iter().map(|d| d.free_space).sum();

    let attributes = kept
        .iter()
        .map(|d| {
            let free = to_unit(d.free_space, unit);
            let total = to_unit(d.total_space, unit);
            // An empty volume reports 0% free rather than NaN
            let percent = if total > 0.0 { free / total * 100.0 } else { 0.0 };
            (
                d.path.clone(),
                format!("{:.2}/{:.2}{} ({:.2}%)", free, total, unit, percent),
            )
        })
        .collect();

    (
        SensorValue::Amount(format!("{:.2}", to_unit(free_total, unit))),
        attributes,
    )
}

/// With a one-day window the calendar is narrowed to episodes airing on `start`;
/// the upstream returns nothing when start and end coincide, so the query spans two dates.
pub fn filter_upcoming(
    episodes: Vec<CalendarEpisode>,
    start: NaiveDate,
    days: u32,
) -> Vec<CalendarEpisode> {
    if days != 1 {
        return episodes;
    }
    let start = start.to_string();
    episodes.into_iter().filter(|e| e.air_date == start).collect()
}

/// Attributes: series title -> "SxxEyy".
pub fn upcoming(episodes: Vec<CalendarEpisode>, start: NaiveDate, days: u32) -> Projection {
    let episodes = filter_upcoming(episodes, start, days);
    let attributes = episodes
        .iter()
        .map(|e| {
            (
                e.series.title.clone(),
                episode_code(e.season_number, e.episode_number),
            )
        })
        .collect();
    (SensorValue::Count(episodes.len()), attributes)
}

/// `100 * (1 - sizeleft / size)` with two decimals and a trailing '%'.
pub fn percent_complete(size: f64, sizeleft: f64) -> String {
    let percent = if size > 0.0 {
        100.0 * (1.0 - sizeleft / size)
    } else {
        0.0
    };
    format!("{:.2}%", percent)
}

/// Attributes: "<title> SxxEyy" -> percent complete.
pub fn queue(items: &[QueueItem]) -> Projection {
    let attributes = items
        .iter()
        .map(|q| {
            (
                format!(
                    "{} {}",
                    q.series.title,
                    episode_code(q.episode.season_number, q.episode.episode_number)
                ),
                percent_complete(q.size, q.sizeleft),
            )
        })
        .collect();
    (SensorValue::Count(items.len()), attributes)
}

/// Attributes: "<title> SxxEyy" -> air date.
pub fn wanted(records: &[WantedRecord]) -> Projection {
    let attributes = records
        .iter()
        .map(|r| {
            (
                format!(
                    "{} {}",
                    r.series.title,
                    episode_code(r.season_number, r.episode_number)
                ),
                r.air_date.clone(),
            )
        })
        .collect();
    (SensorValue::Count(records.len()), attributes)
}

/// Attributes: title -> "<files>/<episodes> Episodes".
pub fn series(shows: &[Series]) -> Projection {
    let attributes = shows
        .iter()
        .map(|s| {
            (
                s.title.clone(),
                format!("{}/{} Episodes", s.episode_file_count, s.episode_count),
            )
        })
        .collect();
    (SensorValue::Count(shows.len()), attributes)
}

/// Attributes: command name -> state.
pub fn commands(commands: &[Command]) -> Projection {
    let attributes = commands
        .iter()
        .map(|c| (c.name.clone(), c.state.clone()))
        .collect();
    (SensorValue::Count(commands.len()), attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EpisodeRef, SeriesRef};

    const GIB: u64 = 1 << 30;

    fn disk(path: &str, free: u64, total: u64) -> DiskSpace {
        DiskSpace {
            path: path.into(),
            free_space: free,
            total_space: total,
        }
    }

    fn calendar(title: &str, air_date: &str, season: u32, episode: u32) -> CalendarEpisode {
        CalendarEpisode {
            air_date: air_date.into(),
            season_number: season,
            episode_number: episode,
            series: SeriesRef {
                title: title.into(),
            },
        }
    }

    #[test]
    fn episode_code_pads_to_two_digits() {
        assert_eq!(episode_code(1, 2), "S01E02");
        assert_eq!(episode_code(12, 103), "S12E103");
    }

    #[test]
    fn diskspace_sums_free_space_in_unit() {
        let disks = vec![disk("/a", GIB, 4 * GIB), disk("/b", 2 * GIB, 4 * GIB)];
        let (value, attrs) = diskspace(&disks, &[], ByteUnit::GB);
        assert_eq!(value, SensorValue::Amount("3.00".into()));
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["/a"], "1.00/4.00GB (25.00%)");
        assert_eq!(attrs["/b"], "2.00/4.00GB (50.00%)");
    }

    #[test]
    fn diskspace_include_list_keeps_named_paths_only() {
        let disks = vec![
            disk("/a", GIB, 2 * GIB),
            disk("/b", GIB, 2 * GIB),
            disk("/c", GIB, 2 * GIB),
        ];
        let (value, attrs) = diskspace(&disks, &["/b".to_string()], ByteUnit::MB);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["/b"], "1024.00/2048.00MB (50.00%)");
        assert_eq!(value, SensorValue::Amount("1024.00".into()));
    }

    #[test]
    fn diskspace_zero_total_reports_zero_percent() {
        let (_, attrs) = diskspace(&[disk("/empty", 0, 0)], &[], ByteUnit::GB);
        assert_eq!(attrs["/empty"], "0.00/0.00GB (0.00%)");
    }

    #[test]
    fn upcoming_one_day_keeps_only_start_date() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let episodes = vec![
            calendar("Today Show", "2024-03-01", 1, 5),
            calendar("Tomorrow Show", "2024-03-02", 3, 1),
        ];
        let (value, attrs) = upcoming(episodes, start, 1);
        assert_eq!(value, SensorValue::Count(1));
        assert_eq!(attrs["Today Show"], "S01E05");
        assert!(!attrs.contains_key("Tomorrow Show"));
    }

    #[test]
    fn upcoming_wider_window_keeps_everything() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let episodes = vec![
            calendar("Today Show", "2024-03-01", 1, 5),
            calendar("Later Show", "2024-03-03", 2, 10),
        ];
        let (value, attrs) = upcoming(episodes, start, 3);
        assert_eq!(value, SensorValue::Count(2));
        assert_eq!(attrs["Later Show"], "S02E10");
    }

    #[test]
    fn queue_reports_percent_complete() {
        assert_eq!(percent_complete(200.0, 50.0), "75.00%");
        let items = vec![QueueItem {
            series: SeriesRef {
                title: "Show".into(),
            },
            episode: EpisodeRef {
                season_number: 2,
                episode_number: 7,
            },
            size: 200.0,
            sizeleft: 50.0,
        }];
        let (value, attrs) = queue(&items);
        assert_eq!(value, SensorValue::Count(1));
        assert_eq!(attrs["Show S02E07"], "75.00%");
    }

    #[test]
    fn queue_zero_size_is_zero_percent() {
        assert_eq!(percent_complete(0.0, 0.0), "0.00%");
    }

    #[test]
    fn series_and_commands_attributes() {
        let shows = vec![Series {
            title: "Show".into(),
            episode_file_count: 8,
            episode_count: 10,
        }];
        let (value, attrs) = series(&shows);
        assert_eq!(value, SensorValue::Count(1));
        assert_eq!(attrs["Show"], "8/10 Episodes");

        let cmds = vec![
            Command {
                name: "RssSync".into(),
                state: "started".into(),
            },
            Command {
                name: "Backup".into(),
                state: "queued".into(),
            },
        ];
        let (value, attrs) = commands(&cmds);
        assert_eq!(value, SensorValue::Count(2));
        assert_eq!(attrs["RssSync"], "started");
        assert_eq!(attrs["Backup"], "queued");
    }
}
