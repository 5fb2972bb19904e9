//! Deterministic simulated readings.
//!
//! Temperature follows a daily sine peaking at 15:00; humidity moves the
//! other way. Each room and each day gets a small fixed offset.

use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use roomwatch_domain::reading::SensorReading;
use roomwatch_domain::room::{RoomCatalog, RoomId};
use roomwatch_domain::status::RoomStatus;

/// One reading per hour.
pub const HOURS_PER_DAY: u32 = 24;

/// Hourly readings of `room` for `date`, ordered by time ascending.
#[must_use]
pub fn day_readings(room: &RoomId, date: NaiveDate) -> Vec<SensorReading> {
    (0..HOURS_PER_DAY)
        .map(|hour| {
            let (temperature, humidity) = sample(room, date, f64::from(hour));
            SensorReading::new(format!("{hour:02}:00"), temperature, humidity)
        })
        .collect()
}

/// Snapshot of every room in `catalog` at `now`, in catalog order.
#[must_use]
pub fn current_status(catalog: &RoomCatalog, now: NaiveDateTime) -> Vec<RoomStatus> {
    let hour = f64::from(now.hour()) + f64::from(now.minute()) / 60.0;
    catalog
        .iter()
        .map(|room| {
            let (temperature, humidity) = sample(room, now.date(), hour);
            RoomStatus {
                room: room.clone(),
                temperature,
                humidity,
            }
        })
        .collect()
}

fn sample(room: &RoomId, date: NaiveDate, hour: f64) -> (f64, f64) {
    let room_offset = f64::from(room_seed(room) % 10) * 0.3;
    let day_offset = f64::from(date.ordinal() % 7) * 0.2;
    let wave = ((hour - 9.0) / 24.0 * TAU).sin();

    let temperature = 20.5 + room_offset + day_offset + 2.5 * wave;
    let humidity = 48.0 - room_offset * 2.0 - 6.0 * wave;
    (round_tenth(temperature), round_tenth(humidity))
}

fn room_seed(room: &RoomId) -> u32 {
    room.as_str()
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)))
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn should_produce_one_reading_per_hour_in_order() {
        let readings = day_readings(&RoomId::from("100"), day());
        assert_eq!(readings.len(), 24);
        assert_eq!(readings[0].time, "00:00");
        assert_eq!(readings[23].time, "23:00");
        assert!(readings.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn should_be_deterministic() {
        let room = RoomId::from("104");
        assert_eq!(day_readings(&room, day()), day_readings(&room, day()));
    }

    #[test]
    fn should_stay_in_plausible_ranges() {
        for room in RoomCatalog::default().iter() {
            for reading in day_readings(room, day()) {
                assert!((15.0..30.0).contains(&reading.temperature));
                assert!((30.0..65.0).contains(&reading.humidity));
            }
        }
    }

    #[test]
    fn should_be_warmer_in_the_afternoon() {
        let readings = day_readings(&RoomId::from("101"), day());
        assert!(readings[15].temperature > readings[3].temperature);
        assert!(readings[15].humidity < readings[3].humidity);
    }

    #[test]
    fn should_report_every_room_in_catalog_order() {
        let catalog = RoomCatalog::default();
        let now = day().and_hms_opt(8, 30, 0).unwrap();
        let status = current_status(&catalog, now);
        let rooms: Vec<&RoomId> = status.iter().map(|s| &s.room).collect();
        let expected: Vec<&RoomId> = catalog.iter().collect();
        assert_eq!(rooms, expected);
    }

    #[test]
    fn should_match_hourly_reading_on_the_hour() {
        let room = RoomId::from("106");
        let catalog = RoomCatalog::new([room.clone()]).unwrap();
        let now = day().and_hms_opt(15, 0, 0).unwrap();

        let status = current_status(&catalog, now);
        let reading = &day_readings(&room, day())[15];
        assert!((status[0].temperature - reading.temperature).abs() < f64::EPSILON);
        assert!((status[0].humidity - reading.humidity).abs() < f64::EPSILON);
    }
}
