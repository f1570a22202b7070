use crate::domain::model::{DaySchedule, ProfessionalId};
use chrono::{Datelike, NaiveDate, Weekday};

/// Last bookable start time. Zero-padded `HH:MM` strings order the same
/// lexicographically and chronologically, so a plain string compare works.
pub const CLOSING_TIME: &str = "18:00";

fn is_weekend(date_str: &str) -> bool {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        Err(e) => {
            // Soft fail: keep the day rather than drop data over a bad date.
            tracing::warn!("unparseable day date {:?}: {}", date_str, e);
            false
        }
    }
}

/// Narrows provider availability to one professional's in-policy slots.
///
/// Weekend days are dropped whole. Within a surviving day a slot survives
/// only when it belongs to `target` and starts before [`CLOSING_TIME`].
/// Days left with no slots are dropped, not returned empty.
pub fn filter_schedule(days: &[DaySchedule], target: ProfessionalId) -> Vec<DaySchedule> {
    let mut filtered = Vec::new();

    for day in days {
        if is_weekend(&day.date) {
            continue;
        }

        let slots: Vec<_> = day
            .available_times
            .iter()
            .filter(|slot| slot.professional_id == target)
            .filter(|slot| slot.start_time.as_str() < CLOSING_TIME)
            .cloned()
            .collect();

        if !slots.is_empty() {
            let mut narrowed = day.clone();
            narrowed.available_times = slots;
            filtered.push(narrowed);
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TimeSlot;

    const TARGET: ProfessionalId = ProfessionalId(5859536659349504);
    const OTHER: ProfessionalId = ProfessionalId(5108599479861248);

    fn slot(start: &str, owner: ProfessionalId) -> TimeSlot {
        TimeSlot {
            start_time: start.to_string(),
            end_time: "23:59".to_string(),
            is_selectable: true,
            is_selected: false,
            professional_id: owner,
        }
    }

    fn day(date: &str, slots: Vec<TimeSlot>) -> DaySchedule {
        DaySchedule {
            date: date.to_string(),
            week: String::new(),
            day_week: String::new(),
            available_times: slots,
            day: 1,
            month: 1,
            year: 2026,
            json_date: String::new(),
        }
    }

    #[test]
    fn test_weekend_days_are_dropped() {
        // 2026-01-24 is a Saturday, 2026-01-25 a Sunday.
        let days = vec![
            day("2026-01-24", vec![slot("10:00", TARGET)]),
            day("2026-01-25", vec![slot("10:00", TARGET)]),
            day("2026-01-26", vec![slot("10:00", TARGET)]),
        ];
        let filtered = filter_schedule(&days, TARGET);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "2026-01-26");
    }

    #[test]
    fn test_slots_of_other_professionals_are_dropped() {
        let days = vec![day(
            "2026-01-26",
            vec![slot("09:00", TARGET), slot("10:00", OTHER)],
        )];
        let filtered = filter_schedule(&days, TARGET);
        assert_eq!(filtered[0].available_times.len(), 1);
        assert_eq!(filtered[0].available_times[0].start_time, "09:00");
    }

    #[test]
    fn test_closing_time_boundary() {
        let days = vec![day(
            "2026-01-26",
            vec![
                slot("17:59", TARGET),
                slot("18:00", TARGET),
                slot("18:30", TARGET),
            ],
        )];
        let filtered = filter_schedule(&days, TARGET);
        assert_eq!(filtered[0].available_times.len(), 1);
        assert_eq!(filtered[0].available_times[0].start_time, "17:59");
    }

    #[test]
    fn test_day_with_no_surviving_slots_is_dropped() {
        let days = vec![day("2026-01-26", vec![slot("10:00", OTHER)])];
        assert!(filter_schedule(&days, TARGET).is_empty());
    }

    #[test]
    fn test_unparseable_date_keeps_the_day() {
        let days = vec![day("not-a-date", vec![slot("10:00", TARGET)])];
        let filtered = filter_schedule(&days, TARGET);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let days = vec![day(
            "2026-01-26",
            vec![slot("10:00", TARGET), slot("11:00", OTHER)],
        )];
        let _ = filter_schedule(&days, TARGET);
        assert_eq!(days[0].available_times.len(), 2);
    }
}
