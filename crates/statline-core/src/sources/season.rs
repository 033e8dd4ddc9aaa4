//! Percent-of-season computation for the dialer stat.
//!
//! Seasons are fixed day-of-year bands (astronomical, northern reference);
//! in leap years every boundary shifts one day later. Winter spans the year
//! boundary and is treated as a single season.

use time::Date;

use crate::domain::StatValue;
use crate::ValidationError;

/// Which hemisphere's season labels to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    /// Accepts `N` or `S`, case-insensitive.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "N" | "n" => Ok(Self::Northern),
            "S" | "s" => Ok(Self::Southern),
            other => Err(ValidationError::InvalidHemisphere {
                value: other.to_owned(),
            }),
        }
    }
}

/// Season band for a northern-reference day of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

const SPRING_START: u16 = 80;
const SUMMER_START: u16 = 172;
const FALL_START: u16 = 264;
const WINTER_START: u16 = 355;

impl Season {
    pub fn for_date(date: Date) -> Self {
        let shift = leap_shift(date);
        let doy = date.ordinal();
        if doy < SPRING_START + shift {
            Self::Winter
        } else if doy < SUMMER_START + shift {
            Self::Spring
        } else if doy < FALL_START + shift {
            Self::Summer
        } else if doy < WINTER_START + shift {
            Self::Fall
        } else {
            Self::Winter
        }
    }

    /// Season name as experienced in `hemisphere`.
    pub const fn label(self, hemisphere: Hemisphere) -> &'static str {
        match (self, hemisphere) {
            (Self::Spring, Hemisphere::Northern) | (Self::Fall, Hemisphere::Southern) => "spring",
            (Self::Summer, Hemisphere::Northern) | (Self::Winter, Hemisphere::Southern) => "summer",
            (Self::Fall, Hemisphere::Northern) | (Self::Spring, Hemisphere::Southern) => "fall",
            (Self::Winter, Hemisphere::Northern) | (Self::Summer, Hemisphere::Southern) => "winter",
        }
    }
}

fn leap_shift(date: Date) -> u16 {
    u16::from(time::util::is_leap_year(date.year()))
}

/// Whole-percent progress through the season containing `date`.
pub fn percent_of_season(date: Date) -> u8 {
    let shift = leap_shift(date);
    let doy = date.ordinal();

    let (elapsed, length) = match Season::for_date(date) {
        Season::Spring => (doy - (SPRING_START + shift), SUMMER_START - SPRING_START),
        Season::Summer => (doy - (SUMMER_START + shift), FALL_START - SUMMER_START),
        Season::Fall => (doy - (FALL_START + shift), WINTER_START - FALL_START),
        Season::Winter => {
            // Winter wraps the year boundary: the December segment is 11
            // days long in every year, the tail runs through the day before
            // the (leap-shifted) start of spring.
            let december_days = 11;
            let elapsed = if doy >= WINTER_START + shift {
                doy - (WINTER_START + shift)
            } else {
                december_days + (doy - 1)
            };
            (elapsed, december_days + SPRING_START - 1 + shift)
        }
    };

    ((f64::from(elapsed) / f64::from(length)) * 100.0).round() as u8
}

/// Stat title for the dialer, following the season currently in effect.
pub fn season_title(date: Date, hemisphere: Hemisphere) -> String {
    format!("Percent of {} days", Season::for_date(date).label(hemisphere))
}

/// The progress percentage rendered as a dialer payload.
pub fn season_value(date: Date) -> StatValue {
    StatValue::dialer(percent_of_season(date).to_string())
}
