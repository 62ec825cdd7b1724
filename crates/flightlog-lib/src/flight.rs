//! Flight log entries and the step-by-step entry wizard.
//!
//! Every field of a [`FlightEntry`] is optional except the flight date. Fields
//! are grouped by the wizard step that collects them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Brake setting used on landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Brake {
    Low,
    Med,
}

/// Self-assessed landing quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingRating {
    Butter,
    Great,
    Acceptable,
    Hard,
    Wasted,
}

/// Period of the (simulated) day the flight covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "MORNING")]
    Morning,
    #[serde(rename = "MID-DAY")]
    MidDay,
    #[serde(rename = "EVENING")]
    Evening,
    #[serde(rename = "NIGHT")]
    Night,
}

impl TimeOfDay {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "MORNING",
            TimeOfDay::MidDay => "MID-DAY",
            TimeOfDay::Evening => "EVENING",
            TimeOfDay::Night => "NIGHT",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "MORNING" => Ok(TimeOfDay::Morning),
            "MID-DAY" => Ok(TimeOfDay::MidDay),
            "EVENING" => Ok(TimeOfDay::Evening),
            "NIGHT" => Ok(TimeOfDay::Night),
            other => Err(invalid("time_of_day", format!("unknown period '{other}'"))),
        }
    }
}

/// Join periods into the comma-separated form used for storage.
pub fn time_of_day_to_storage(periods: &[TimeOfDay]) -> Option<String> {
    if periods.is_empty() {
        return None;
    }
    Some(
        periods
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Split the stored comma-separated form back into periods, ignoring empty segments.
pub fn time_of_day_from_storage(stored: &str) -> Result<Vec<TimeOfDay>> {
    stored
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(TimeOfDay::from_str)
        .collect()
}

/// Hours and minutes in `HH:MM` form (hours 0-99, minutes 0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlightDuration {
    hours: u8,
    minutes: u8,
}

impl FlightDuration {
    pub const MAX_HOURS: u8 = 99;
    pub const MAX_MINUTES: u8 = 59;

    pub fn new(hours: u8, minutes: u8) -> Result<Self> {
        if hours > Self::MAX_HOURS || minutes > Self::MAX_MINUTES {
            return Err(Error::InvalidDuration {
                value: format!("{hours}:{minutes}"),
            });
        }
        Ok(Self { hours, minutes })
    }

    /// Build from separate hour and minute inputs.
    ///
    /// Both empty means no duration; one empty side counts as zero.
    pub fn from_parts(hours: &str, minutes: &str) -> Result<Option<Self>> {
        let (hours, minutes) = (hours.trim(), minutes.trim());
        if hours.is_empty() && minutes.is_empty() {
            return Ok(None);
        }
        let parse = |part: &str| -> Result<u8> {
            if part.is_empty() {
                return Ok(0);
            }
            if !part.chars().all(|c| c.is_ascii_digit()) || part.len() > 2 {
                return Err(Error::InvalidDuration {
                    value: format!("{hours}:{minutes}"),
                });
            }
            part.parse::<u8>().map_err(|_| Error::InvalidDuration {
                value: format!("{hours}:{minutes}"),
            })
        };
        Self::new(parse(hours)?, parse(minutes)?).map(Some)
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn total_minutes(&self) -> u32 {
        u32::from(self.hours) * 60 + u32::from(self.minutes)
    }
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for FlightDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(|| Error::InvalidDuration {
            value: s.to_string(),
        })?;
        if hours.is_empty() || minutes.is_empty() {
            return Err(Error::InvalidDuration {
                value: s.to_string(),
            });
        }
        Self::from_parts(hours, minutes)?.ok_or_else(|| Error::InvalidDuration {
            value: s.to_string(),
        })
    }
}

impl TryFrom<String> for FlightDuration {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FlightDuration> for String {
    fn from(value: FlightDuration) -> Self {
        value.to_string()
    }
}

/// Fields collected on the general step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralDetails {
    pub callsign: Option<String>,
    pub aircraft: Option<String>,
    pub airframe: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub cruise_altitude: Option<String>,
    pub block_fuel: Option<f64>,
    pub route: Option<String>,
}

/// Fields collected on the takeoff step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TakeoffDetails {
    pub runway: Option<String>,
    pub sid: Option<String>,
    pub v1: Option<String>,
    pub vr: Option<String>,
    pub v2: Option<String>,
    pub toga: bool,
    pub flaps: Option<String>,
}

/// Fields collected on the landing step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingDetails {
    pub runway: Option<String>,
    pub star: Option<String>,
    pub brake: Option<Brake>,
    pub vapp: Option<String>,
}

/// Fields collected on the post-flight step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFlightDetails {
    pub air_time: Option<FlightDuration>,
    pub block_time: Option<FlightDuration>,
    pub landing_rating: Option<LandingRating>,
    pub time_of_day: Vec<TimeOfDay>,
    pub passengers: Option<u32>,
    pub cargo: Option<f64>,
}

/// A single logged flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub general: GeneralDetails,
    #[serde(default)]
    pub takeoff: TakeoffDetails,
    #[serde(default)]
    pub landing: LandingDetails,
    #[serde(default)]
    pub post_flight: PostFlightDetails,
    #[serde(default)]
    pub is_public: bool,
}

impl FlightEntry {
    /// Empty entry for `date`. New entries are public unless the pilot opts out.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            general: GeneralDetails::default(),
            takeoff: TakeoffDetails::default(),
            landing: LandingDetails::default(),
            post_flight: PostFlightDetails::default(),
            is_public: true,
        }
    }

    /// Trim free text, drop blank fields, and upper-case identifiers.
    pub fn normalize(&mut self) {
        let general = &mut self.general;
        for field in [&mut general.callsign, &mut general.departure, &mut general.arrival] {
            upper_or_none(field);
        }
        for field in [
            &mut general.aircraft,
            &mut general.airframe,
            &mut general.cruise_altitude,
            &mut general.route,
        ] {
            trim_or_none(field);
        }

        let takeoff = &mut self.takeoff;
        upper_or_none(&mut takeoff.runway);
        upper_or_none(&mut takeoff.sid);
        for field in [&mut takeoff.v1, &mut takeoff.vr, &mut takeoff.v2, &mut takeoff.flaps] {
            trim_or_none(field);
        }

        let landing = &mut self.landing;
        upper_or_none(&mut landing.runway);
        upper_or_none(&mut landing.star);
        trim_or_none(&mut landing.vapp);

        let periods = &mut self.post_flight.time_of_day;
        periods.sort();
        periods.dedup();
    }

    /// Check field formats. Call after [`normalize`](Self::normalize).
    pub fn validate(&self) -> Result<()> {
        if let Some(code) = &self.general.departure {
            validate_airport_code("departure", code)?;
        }
        if let Some(code) = &self.general.arrival {
            validate_airport_code("arrival", code)?;
        }
        if let Some(fuel) = self.general.block_fuel {
            validate_non_negative("block_fuel", fuel)?;
        }
        if let Some(cargo) = self.post_flight.cargo {
            validate_non_negative("cargo", cargo)?;
        }
        Ok(())
    }

    /// Whether both route endpoints are filled in.
    pub fn has_route_endpoints(&self) -> bool {
        self.general.departure.is_some() && self.general.arrival.is_some()
    }
}

fn trim_or_none(field: &mut Option<String>) {
    *field = field
        .take()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
}

fn upper_or_none(field: &mut Option<String>) {
    trim_or_none(field);
    if let Some(value) = field.as_mut() {
        *value = value.to_uppercase();
    }
}

fn validate_airport_code(field: &str, code: &str) -> Result<()> {
    let valid_len = (3..=4).contains(&code.len());
    if !valid_len || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid(
            field,
            format!("'{code}' is not a 3-4 character airport code"),
        ));
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, "must be a non-negative number"));
    }
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> Error {
    Error::InvalidFlightEntry {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Steps of the flight entry wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryStep {
    General,
    Takeoff,
    Landing,
    PostFlight,
}

impl EntryStep {
    pub const ALL: [EntryStep; 4] = [
        EntryStep::General,
        EntryStep::Takeoff,
        EntryStep::Landing,
        EntryStep::PostFlight,
    ];

    pub fn index(self) -> usize {
        match self {
            EntryStep::General => 0,
            EntryStep::Takeoff => 1,
            EntryStep::Landing => 2,
            EntryStep::PostFlight => 3,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn title(self) -> &'static str {
        match self {
            EntryStep::General => "General",
            EntryStep::Takeoff => "Takeoff",
            EntryStep::Landing => "Landing",
            EntryStep::PostFlight => "Post Flight",
        }
    }
}

/// Linear multi-step editor for a [`FlightEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct EntryWizard {
    step: EntryStep,
    draft: FlightEntry,
}

impl EntryWizard {
    /// Start a new entry for `date` on the first step.
    pub fn new(date: NaiveDate) -> Self {
        Self::editing(FlightEntry::new(date))
    }

    /// Edit an existing entry, starting on the first step.
    pub fn editing(entry: FlightEntry) -> Self {
        Self {
            step: EntryStep::General,
            draft: entry,
        }
    }

    pub fn step(&self) -> EntryStep {
        self.step
    }

    pub fn draft(&self) -> &FlightEntry {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FlightEntry {
        &mut self.draft
    }

    pub fn is_first(&self) -> bool {
        self.step.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.step.next().is_none()
    }

    /// Move forward one step; stays put on the last step.
    pub fn advance(&mut self) -> EntryStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Move back one step; stays put on the first step.
    pub fn back(&mut self) -> EntryStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Jump directly to a step.
    pub fn go_to(&mut self, step: EntryStep) {
        self.step = step;
    }

    /// Discard the draft and return to the first step.
    pub fn reset(&mut self, date: NaiveDate) {
        *self = Self::new(date);
    }

    /// Normalize and validate the draft, handing back the finished entry.
    pub fn finish(self) -> Result<FlightEntry> {
        let mut entry = self.draft;
        entry.normalize();
        entry.validate()?;
        Ok(entry)
    }
}
