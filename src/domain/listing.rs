//! Ordering and filtering for booking listings.

use std::fmt;

use super::booking::Booking;

/// Sort order for listings. Every order is ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// By booking id.
    #[default]
    Id,
    /// By price.
    Price,
    /// By creation time.
    Date,
}

impl SortKey {
    /// Parse a sort key as it arrives from a query string.
    ///
    /// Unknown or absent keys fall back to [`SortKey::Id`].
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(key) if key.eq_ignore_ascii_case("price") => Self::Price,
            Some(key) if key.eq_ignore_ascii_case("date") => Self::Date,
            _ => Self::Id,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Price => "price",
            Self::Date => "date",
        }
    }

    /// Sort `bookings` in place.
    ///
    /// The sort is stable, so records with equal keys keep the relative
    /// order they arrived in.
    pub fn sort(self, bookings: &mut [Booking]) {
        match self {
            Self::Id => bookings.sort_by_key(Booking::id),
            Self::Price => bookings.sort_by(|a, b| a.price().total_cmp(&b.price())),
            Self::Date => bookings.sort_by_key(Booking::created_at),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a listing request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: SortKey,
    /// Keep only bookings priced above the high-value threshold.
    pub high_value_only: bool,
}

impl ListQuery {
    #[must_use]
    pub const fn new(sort: SortKey, high_value_only: bool) -> Self {
        Self {
            sort,
            high_value_only,
        }
    }

    /// Filter and sort a store snapshot.
    #[must_use]
    pub fn apply(&self, mut bookings: Vec<Booking>, high_value_threshold: f64) -> Vec<Booking> {
        if self.high_value_only {
            bookings.retain(|b| b.is_high_value(high_value_threshold));
        }
        self.sort.sort(&mut bookings);
        bookings
    }
}
