//! # Data Model
//!
//! Records and their value objects. Every constructor validates eagerly, so a
//! value that exists is a valid value. Records loaded from storage bypass the
//! constructors and are re-checked with [`Band::validate`].
//!
//! ## Ordering vs. equality
//!
//! Bands are sorted by a three-level order: name, then number of participants,
//! then establishment date ([`Band::cmp_order`]). Equality additionally compares
//! coordinates, genre and best album, so two bands can sit at the same position
//! in the order while being unequal. Since that order is not consistent with
//! `PartialEq`, `Band` deliberately does not implement `Ord`.

use crate::error::{BandzError, Result};
use crate::reader::{required, FieldValue, LineReader};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    x: i64,
    y: f64,
}

impl Coordinates {
    pub fn new(x: Option<i64>, y: f64) -> Result<Self> {
        Ok(Self {
            x: Self::check_x(x)?,
            y: Self::check_y(Some(y))?,
        })
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn read_from(reader: &mut LineReader<'_>) -> Result<Self> {
        reader.prompt("  Coordinates:\n")?;
        let x = reader.read_value("    x: ", Self::check_x)?;
        let y = reader.read_value("    y: ", Self::check_y)?;
        Ok(Self { x, y })
    }

    fn check_x(x: Option<i64>) -> Result<i64> {
        required(x, "Coordinate x cannot be empty")
    }

    fn check_y(y: Option<f64>) -> Result<f64> {
        match y {
            Some(y) if y.is_finite() => Ok(y),
            Some(y) => Err(BandzError::value(format!("Coordinate y must be finite: {}", y))),
            None => Err(BandzError::value("Coordinate y cannot be empty")),
        }
    }

    fn validate(&self) -> Result<()> {
        Self::check_y(Some(self.y)).map(|_| ())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Album {
    name: String,
    tracks: i64,
}

impl Album {
    pub fn new(name: impl Into<String>, tracks: i64) -> Result<Self> {
        Ok(Self {
            name: Self::check_name(Some(name.into()))?,
            tracks: Self::check_tracks(Some(tracks))?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> i64 {
        self.tracks
    }

    pub fn read_from(reader: &mut LineReader<'_>) -> Result<Self> {
        reader.prompt("  Best album:\n")?;
        let name = reader.read_string("    Album name: ", Self::check_name)?;
        let tracks = reader.read_value("    Number of tracks: ", Self::check_tracks)?;
        Ok(Self { name, tracks })
    }

    fn check_name(name: Option<String>) -> Result<String> {
        match name {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(BandzError::value("Album name cannot be empty")),
        }
    }

    fn check_tracks(tracks: Option<i64>) -> Result<i64> {
        match tracks {
            Some(n) if n > 0 => Ok(n),
            _ => Err(BandzError::value(
                "Number of tracks on the album must be greater than zero",
            )),
        }
    }

    fn validate(&self) -> Result<()> {
        Self::check_name(Some(self.name.clone()))?;
        Self::check_tracks(Some(self.tracks))?;
        Ok(())
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({} tracks)", self.name, self.tracks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "soul")]
    Soul,
    #[serde(rename = "punk rock")]
    PunkRock,
    #[serde(rename = "post punk")]
    PostPunk,
}

impl Genre {
    pub const ALL: [Genre; 3] = [Genre::Soul, Genre::PunkRock, Genre::PostPunk];

    pub fn value(&self) -> &'static str {
        match self {
            Genre::Soul => "soul",
            Genre::PunkRock => "punk rock",
            Genre::PostPunk => "post punk",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Genre::Soul => "SOUL",
            Genre::PunkRock => "PUNK_ROCK",
            Genre::PostPunk => "POST_PUNK",
        }
    }

    /// Hint listing every accepted genre, e.g. `['soul', 'punk rock', 'post punk']`.
    pub fn choices() -> String {
        let all: Vec<String> = Self::ALL.iter().map(|g| g.to_string()).collect();
        format!("[{}]", all.join(", "))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.value())
    }
}

/// Accepts the display value with or without quotes (`punk rock`, `'punk rock'`)
/// or the variant name (`PUNK_ROCK`, `PunkRock`), ignoring case.
impl FromStr for Genre {
    type Err = BandzError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let unquoted = text
            .strip_prefix('\'')
            .and_then(|t| t.strip_suffix('\''))
            .unwrap_or(text);
        let squashed = unquoted.replace('_', "");

        Self::ALL
            .iter()
            .copied()
            .find(|g| {
                g.value().eq_ignore_ascii_case(unquoted)
                    || g.variant_name().eq_ignore_ascii_case(unquoted)
                    || g.variant_name().replace('_', "").eq_ignore_ascii_case(&squashed)
            })
            .ok_or_else(|| BandzError::value(format!("Unknown genre: {}", s)))
    }
}

impl FieldValue for Genre {
    fn parse_field(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
    name: String,
    coordinates: Coordinates,
    creation_date: NaiveDate,
    number_of_participants: i64,
    establishment_date: NaiveDate,
    genre: Genre,
    best_album: Album,
}

impl Band {
    /// Creates a band without an id, stamped with today's creation date.
    pub fn new(
        name: impl Into<String>,
        coordinates: Coordinates,
        number_of_participants: i64,
        establishment_date: NaiveDate,
        genre: Genre,
        best_album: Album,
    ) -> Result<Self> {
        Ok(Self {
            id: None,
            name: check_name(Some(name.into()))?,
            coordinates,
            creation_date: Local::now().date_naive(),
            number_of_participants: check_participants(Some(number_of_participants))?,
            establishment_date,
            genre,
            best_album,
        })
    }

    /// Prompts for every field in turn. The first field that fails aborts the
    /// whole construction; no partially filled band is ever returned.
    pub fn read_from(reader: &mut LineReader<'_>) -> Result<Self> {
        reader.prompt("Enter the band's data:\n")?;
        let creation_date = Local::now().date_naive();
        let name = reader.read_string("  Name: ", check_name)?;
        let coordinates = Coordinates::read_from(reader)?;
        let number_of_participants =
            reader.read_value("  Number of participants: ", check_participants)?;
        let establishment_date = reader.read_value(
            "  Establishment date (YYYY-MM-DD): ",
            |d: Option<NaiveDate>| required(d, "Establishment date cannot be empty"),
        )?;
        let best_album = Album::read_from(reader)?;
        let genre_prompt = format!("  Genre {}: ", Genre::choices());
        let genre = reader.read_value(&genre_prompt, |g: Option<Genre>| {
            required(g, "Genre cannot be empty")
        })?;

        Ok(Self {
            id: None,
            name,
            coordinates,
            creation_date,
            number_of_participants,
            establishment_date,
            genre,
            best_album,
        })
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    pub fn number_of_participants(&self) -> i64 {
        self.number_of_participants
    }

    pub fn establishment_date(&self) -> NaiveDate {
        self.establishment_date
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn best_album(&self) -> &Album {
        &self.best_album
    }

    /// Ids are write-once.
    pub fn assign_id(&mut self, id: u32) -> Result<()> {
        if let Some(existing) = self.id {
            return Err(BandzError::IdAlreadyAssigned(existing));
        }
        if id == 0 {
            return Err(BandzError::value("Id must be greater than zero"));
        }
        self.id = Some(id);
        Ok(())
    }

    /// Copies every user-editable field of `other`; id and creation date stay.
    pub fn replace_fields(&mut self, other: Band) {
        self.name = other.name;
        self.coordinates = other.coordinates;
        self.number_of_participants = other.number_of_participants;
        self.establishment_date = other.establishment_date;
        self.genre = other.genre;
        self.best_album = other.best_album;
    }

    /// Name, then number of participants, then establishment date.
    pub fn cmp_order(&self, other: &Band) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.number_of_participants.cmp(&other.number_of_participants))
            .then_with(|| self.establishment_date.cmp(&other.establishment_date))
    }

    /// Re-checks every invariant, including the presence of an id.
    pub fn validate(&self) -> Result<()> {
        match self.id {
            Some(id) if id > 0 => {}
            _ => return Err(BandzError::value(format!("Band '{}' has no valid id", self.name))),
        }
        check_name(Some(self.name.clone()))?;
        check_participants(Some(self.number_of_participants))?;
        self.coordinates.validate()?;
        self.best_album.validate()?;
        Ok(())
    }
}

impl PartialEq for Band {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_order(other) == Ordering::Equal
            && self.coordinates == other.coordinates
            && self.genre == other.genre
            && self.best_album == other.best_album
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{} ", id)?,
            None => write!(f, "#- ")?,
        }
        write!(
            f,
            "\"{}\" at {}, {} participants, established {}, genre {}, best album {}, created {}",
            self.name,
            self.coordinates,
            self.number_of_participants,
            self.establishment_date,
            self.genre,
            self.best_album,
            self.creation_date
        )
    }
}

fn check_name(name: Option<String>) -> Result<String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(BandzError::value("Band name cannot be empty")),
    }
}

fn check_participants(n: Option<i64>) -> Result<i64> {
    match n {
        Some(n) if n > 0 => Ok(n),
        _ => Err(BandzError::value(
            "Number of participants must be greater than zero",
        )),
    }
}
