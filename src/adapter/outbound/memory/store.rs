//! In-memory record store guarded by a readers-writer lock.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::domain::{Booking, BookingId, BookingStatus, NewBooking};
use crate::port::outbound::store::BookingStore;

/// Table contents and the id counter, always mutated together.
#[derive(Debug)]
struct StoreState {
    bookings: HashMap<BookingId, Booking>,
    next_id: u64,
}

impl StoreState {
    fn allocate_id(&mut self) -> BookingId {
        let id = BookingId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Authoritative in-process booking table.
///
/// Every write takes the exclusive lock, so id allocation and insertion are
/// a single atomic step and status updates are linearizable per id.
#[derive(Debug)]
pub struct InMemoryBookingStore {
    state: RwLock<StoreState>,
}

impl InMemoryBookingStore {
    /// Create an empty store. The first id handed out is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                bookings: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store preloaded with existing records.
    ///
    /// The id counter resumes after the highest preloaded id.
    #[must_use]
    pub fn with_bookings(bookings: impl IntoIterator<Item = Booking>) -> Self {
        let bookings: HashMap<BookingId, Booking> =
            bookings.into_iter().map(|b| (b.id(), b)).collect();
        let next_id = bookings
            .keys()
            .map(BookingId::value)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            state: RwLock::new(StoreState { bookings, next_id }),
        }
    }

    /// Create a store holding `count` demo bookings.
    ///
    /// Booking `i` (1-based) belongs to user `i` and service `i`, costs
    /// `i * 1000` and was created `i` minutes before `now`.
    #[must_use]
    pub fn seeded(count: u64, now: DateTime<Utc>) -> Self {
        Self::with_bookings((1..=count).map(|i| {
            let created_at = now - Duration::minutes(i64::try_from(i).unwrap_or(i64::MAX));
            Booking::new(
                BookingId::new(i),
                &NewBooking::new(i, i, (i * 1000) as f64),
                created_at,
            )
        }))
    }

    /// Number of stored bookings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().bookings.len()
    }

    /// Returns true if the store holds no bookings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore for InMemoryBookingStore {
    fn create(&self, request: &NewBooking) -> Booking {
        let mut state = self.state.write();
        let id = state.allocate_id();
        let booking = Booking::new(id, request, Utc::now());
        state.bookings.insert(id, booking.clone());
        booking
    }

    fn get(&self, id: BookingId) -> Option<Booking> {
        self.state.read().bookings.get(&id).cloned()
    }

    fn all(&self) -> Vec<Booking> {
        self.state.read().bookings.values().cloned().collect()
    }

    fn update_status(&self, id: BookingId, status: BookingStatus) -> Option<Booking> {
        let mut state = self.state.write();
        let booking = state.bookings.get_mut(&id)?;
        booking.apply_status(status, Utc::now());
        Some(booking.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn create_assigns_sequential_ids() {
        let store = InMemoryBookingStore::new();
        let a = store.create(&NewBooking::new(1, 1, 10.0));
        let b = store.create(&NewBooking::new(2, 2, 20.0));

        assert_eq!(a.id().value(), 1);
        assert_eq!(b.id().value(), 2);
        assert_eq!(a.status(), BookingStatus::Pending);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let store = InMemoryBookingStore::new();
        assert!(store.get(BookingId::new(42)).is_none());
    }

    #[test]
    fn update_status_refreshes_updated_at() {
        let store = InMemoryBookingStore::seeded(1, Utc::now());
        let before = store.get(BookingId::new(1)).unwrap();

        let after = store
            .update_status(BookingId::new(1), BookingStatus::Confirmed)
            .unwrap();

        assert_eq!(after.status(), BookingStatus::Confirmed);
        assert!(after.updated_at() >= before.updated_at());
        assert_eq!(after.created_at(), before.created_at());
        assert_eq!(store.get(BookingId::new(1)).unwrap(), after);
    }

    #[test]
    fn update_status_unknown_id_is_none() {
        let store = InMemoryBookingStore::new();
        assert!(store
            .update_status(BookingId::new(1), BookingStatus::Canceled)
            .is_none());
    }

    #[test]
    fn seeded_store_matches_demo_data() {
        let now = Utc::now();
        let store = InMemoryBookingStore::seeded(10, now);
        assert_eq!(store.len(), 10);

        let third = store.get(BookingId::new(3)).unwrap();
        assert_eq!(third.user_id(), 3);
        assert_eq!(third.price(), 3000.0);
        assert_eq!(third.created_at(), now - Duration::minutes(3));
    }

    #[test]
    fn ids_continue_after_preloaded_records() {
        let store = InMemoryBookingStore::seeded(10, Utc::now());
        let created = store.create(&NewBooking::new(1, 1, 5.0));
        assert_eq!(created.id().value(), 11);
    }

    #[test]
    fn concurrent_creates_never_share_an_id() {
        let store = Arc::new(InMemoryBookingStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| store.create(&NewBooking::new(t + 1, 1, 1.0)).id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<BookingId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(store.len(), 400);
    }
}
