//! Past/upcoming classification of shows.
//!
//! A show is upcoming when it starts at or after the reference instant and past
//! when it started strictly before it. The classes are disjoint, so a show that
//! starts exactly "now" is counted once, as upcoming.

use time::OffsetDateTime;

use super::model::ShowLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    Past,
    Upcoming,
}

impl Timing {
    pub fn classify(start_time: OffsetDateTime, now: OffsetDateTime) -> Self {
        if start_time >= now {
            Timing::Upcoming
        } else {
            Timing::Past
        }
    }
}

/// The shows of one venue or artist, split around a reference instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowPartition {
    pub past: Vec<ShowLink>,
    pub upcoming: Vec<ShowLink>,
}

impl ShowPartition {
    /// Keeps the input order inside each half.
    pub fn split(links: Vec<ShowLink>, now: OffsetDateTime) -> Self {
        let (upcoming, past) = links
            .into_iter()
            .partition(|l| Timing::classify(l.start_time, now) == Timing::Upcoming);
        Self { past, upcoming }
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}
