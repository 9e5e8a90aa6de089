//! Delayed confirmation, expiry sweeps and shutdown.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;

use booking_engine::application::booking::BookingSettings;
use booking_engine::domain::{BookingId, BookingStatus};
use booking_engine::infrastructure::runtime;
use booking_engine::testkit::confirmation::FixedDecider;
use booking_engine::testkit::domain::request;
use booking_engine::testkit::service::ServiceFixture;

fn fast_settings() -> BookingSettings {
    BookingSettings {
        confirmation_delay: Duration::from_millis(30),
        sweep_interval: Duration::from_millis(20),
        ..BookingSettings::default()
    }
}

#[tokio::test]
async fn high_value_booking_resolves_after_delay() {
    let decider = Arc::new(FixedDecider::confirming());
    let f = ServiceFixture::with_settings(fast_settings()).with_decider(decider.clone());

    let booking = f.service.create_booking(request(60_000.0)).unwrap();
    assert_eq!(booking.status(), BookingStatus::Pending);

    tokio::time::sleep(Duration::from_millis(200)).await;

    let resolved = f.service.get_booking(booking.id()).unwrap();
    assert_eq!(resolved.status(), BookingStatus::Confirmed);
    assert!(resolved.updated_at() >= resolved.created_at());
    assert_eq!(decider.calls(), 1);
    f.service.shutdown().await;
}

#[tokio::test]
async fn random_resolution_is_confirmed_or_rejected() {
    let f = ServiceFixture::with_settings(fast_settings());

    let booking = f.service.create_booking(request(60_000.0)).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let status = f.service.get_booking(booking.id()).unwrap().status();
    assert!(
        matches!(status, BookingStatus::Confirmed | BookingStatus::Rejected),
        "unexpected status {status}"
    );
    f.service.shutdown().await;
}

#[tokio::test]
async fn threshold_price_is_not_high_value() {
    let decider = Arc::new(FixedDecider::rejecting());
    let f = ServiceFixture::with_settings(fast_settings()).with_decider(decider.clone());

    let booking = f.service.create_booking(request(50_000.0)).unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(
        f.service.get_booking(booking.id()).unwrap().status(),
        BookingStatus::Pending
    );
    assert_eq!(decider.calls(), 0);
    f.service.shutdown().await;
}

#[tokio::test]
async fn shutdown_drops_waiting_confirmations() {
    let decider = Arc::new(FixedDecider::confirming());
    let settings = BookingSettings {
        confirmation_delay: Duration::from_secs(30),
        ..BookingSettings::default()
    };
    let f = ServiceFixture::with_settings(settings).with_decider(decider.clone());
    let booking = f.service.create_booking(request(75_000.0)).unwrap();

    tokio::time::timeout(Duration::from_secs(2), f.service.shutdown())
        .await
        .expect("shutdown should not wait for the confirmation delay");

    assert!(f.service.scheduler().is_shut_down());
    assert_eq!(decider.calls(), 0);
    assert_eq!(
        f.service.get_booking(booking.id()).unwrap().status(),
        BookingStatus::Pending
    );
}

#[tokio::test]
async fn confirmation_after_cancel_is_dropped() {
    let decider = Arc::new(FixedDecider::confirming());
    let f = ServiceFixture::with_settings(fast_settings()).with_decider(decider.clone());
    let booking = f.service.create_booking(request(80_000.0)).unwrap();

    f.service.cancel_booking(booking.id()).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(decider.calls(), 1);
    assert_eq!(
        f.service.get_booking(booking.id()).unwrap().status(),
        BookingStatus::Canceled
    );
    f.service.shutdown().await;
}

#[tokio::test]
async fn serve_runs_the_sweeper_until_shutdown() {
    let f = ServiceFixture::seeded(10, Utc::now(), fast_settings());
    let (tx, rx) = watch::channel(false);

    let stop = async {
        tokio::time::sleep(Duration::from_millis(150)).await;
        tx.send(true).unwrap();
    };
    tokio::join!(runtime::serve(&f.service, true, rx), stop);

    for id in 1..=10 {
        let status = f.service.get_booking(BookingId::new(id)).unwrap().status();
        let expected = if id > 5 {
            BookingStatus::Canceled
        } else {
            BookingStatus::Pending
        };
        assert_eq!(status, expected, "booking {id}");
    }
    assert!(f.service.scheduler().is_shut_down());
}

#[tokio::test]
async fn serve_without_expiry_leaves_stale_bookings() {
    let f = ServiceFixture::seeded(10, Utc::now(), fast_settings());
    let (tx, rx) = watch::channel(false);

    let stop = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        tx.send(true).unwrap();
    };
    tokio::join!(runtime::serve(&f.service, false, rx), stop);

    assert_eq!(
        f.service.get_booking(BookingId::new(10)).unwrap().status(),
        BookingStatus::Pending
    );
}
