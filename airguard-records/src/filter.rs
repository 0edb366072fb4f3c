//! Tag filtering
//!
//! Records are selected by equality on any subset of their three
//! descriptive tags. Comparison ignores case and surrounding whitespace.
//! Criteria with no tags set match every record.

use std::fmt;

use crate::sample::EnvironmentalSample;

/// Descriptive tags of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Zone type
    Zone,
    /// Season
    Season,
    /// Time of day
    TimeOfDay,
}

impl Tag {
    /// Every tag, in column order
    pub const ALL: [Tag; 3] = [Tag::Zone, Tag::Season, Tag::TimeOfDay];

    /// Value of this tag on `sample`
    pub fn value<'a>(&self, sample: &'a EnvironmentalSample) -> &'a str {
        match self {
            Self::Zone => &sample.zone,
            Self::Season => &sample.season,
            Self::TimeOfDay => &sample.time_of_day,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Zone => "zone",
            Self::Season => "season",
            Self::TimeOfDay => "time of day",
        })
    }
}

/// Tag equality criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    zone: Option<String>,
    season: Option<String>,
    time_of_day: Option<String>,
}

impl Criteria {
    /// Criteria matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `tag` to equal `value`
    pub fn with(mut self, tag: Tag, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match tag {
            Tag::Zone => self.zone = value,
            Tag::Season => self.season = value,
            Tag::TimeOfDay => self.time_of_day = value,
        }
        self
    }

    /// Require the zone
    pub fn zone(self, value: impl Into<String>) -> Self {
        self.with(Tag::Zone, value)
    }

    /// Require the season
    pub fn season(self, value: impl Into<String>) -> Self {
        self.with(Tag::Season, value)
    }

    /// Require the time of day
    pub fn time_of_day(self, value: impl Into<String>) -> Self {
        self.with(Tag::TimeOfDay, value)
    }

    /// Required value of `tag`, if any
    pub fn get(&self, tag: Tag) -> Option<&str> {
        match tag {
            Tag::Zone => self.zone.as_deref(),
            Tag::Season => self.season.as_deref(),
            Tag::TimeOfDay => self.time_of_day.as_deref(),
        }
    }

    /// Whether no tag is constrained
    pub fn is_empty(&self) -> bool {
        Tag::ALL.iter().all(|tag| self.get(*tag).is_none())
    }

    /// Whether `sample` satisfies every constrained tag
    pub fn matches(&self, sample: &EnvironmentalSample) -> bool {
        Tag::ALL.iter().all(|tag| match self.get(*tag) {
            Some(wanted) => same_tag(tag.value(sample), wanted),
            None => true,
        })
    }

    /// Matching samples, in input order
    ///
    /// The yielded references borrow `samples`, not the criteria, so a
    /// temporary `Criteria` can be used inline and the results kept.
    pub fn filter<'c, 's: 'c>(
        &'c self,
        samples: &'s [EnvironmentalSample],
    ) -> impl Iterator<Item = &'s EnvironmentalSample> + 'c {
        samples.iter().filter(move |sample| self.matches(sample))
    }
}

fn same_tag(actual: &str, wanted: &str) -> bool {
    actual.trim().to_lowercase() == wanted.trim().to_lowercase()
}
