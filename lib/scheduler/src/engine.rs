//! Free-interval computation and forward slot search.

use crate::error::GatewayError;
use crate::gateway::CalendarGateway;
use crate::interval::Interval;
use crate::workday::{MIN_VIABLE_GAP_MINUTES, WorkDay};
use chrono::{DateTime, Duration, FixedOffset};
use std::sync::Arc;

/// How many calendar days [`AvailabilityEngine::find_next_available`]
/// scans before giving up.
pub const SCAN_DAYS: u32 = 30;

/// Computes the free intervals of a work day given its busy intervals.
///
/// The busy list need not be sorted or disjoint. Busy time outside the
/// working window is clamped away first, then a single sweep from
/// `work_start` emits every gap of at least [`MIN_VIABLE_GAP_MINUTES`].
/// The cursor only ever advances, so overlapping or out-of-order input
/// cannot corrupt the result. Output is chronological and disjoint;
/// empty when the day is fully booked or too fragmented.
#[must_use]
pub fn free_intervals(day: &WorkDay, busy: &[Interval]) -> Vec<Interval> {
    let work_start = day.work_start();
    let work_end = day.work_end();
    let min_gap = Duration::minutes(MIN_VIABLE_GAP_MINUTES);

    let mut clamped: Vec<Interval> = busy
        .iter()
        .filter_map(|b| {
            let start = b.start.max(work_start);
            let end = b.end.min(work_end);
            (start < end).then_some(Interval { start, end })
        })
        .collect();
    clamped.sort_by_key(|b| b.start);

    let mut free = Vec::new();
    let mut cursor = work_start;
    for b in &clamped {
        if b.start - cursor >= min_gap {
            free.push(Interval {
                start: cursor,
                end: b.start,
            });
        }
        // Never regress past an already-covered span.
        cursor = cursor.max(b.end);
    }
    if work_end - cursor >= min_gap {
        free.push(Interval {
            start: cursor,
            end: work_end,
        });
    }
    free
}

/// Answers availability questions against a [`CalendarGateway`].
///
/// Working hours are evaluated in the boss's local zone: every instant
/// is normalized to `boss_offset` before the containing day is derived,
/// so a query carrying a foreign offset is judged against the same
/// 09:00-17:00 window as a boss-local one.
pub struct AvailabilityEngine<G> {
    gateway: Arc<G>,
    boss_offset: FixedOffset,
}

impl<G: CalendarGateway> AvailabilityEngine<G> {
    /// Creates an engine backed by the given gateway.
    #[must_use]
    pub fn new(gateway: Arc<G>, boss_offset: FixedOffset) -> Self {
        Self {
            gateway,
            boss_offset,
        }
    }

    /// Computes the free intervals of the given day from a fresh busy
    /// list.
    ///
    /// # Errors
    ///
    /// Returns an error if the busy list cannot be read.
    pub async fn free_intervals_for(&self, day: &WorkDay) -> Result<Vec<Interval>, GatewayError> {
        let busy = self.gateway.list_busy_intervals(day).await?;
        Ok(free_intervals(day, &busy))
    }

    /// Returns true if `[start, start + duration)` fits entirely inside
    /// a free interval of the day containing `start`.
    ///
    /// The check enforces the request's actual duration, not the
    /// reporting threshold used by [`free_intervals`].
    ///
    /// # Errors
    ///
    /// Returns an error if the busy list cannot be read.
    pub async fn is_slot_available(
        &self,
        start: DateTime<FixedOffset>,
        duration_minutes: i64,
    ) -> Result<bool, GatewayError> {
        let start = start.with_timezone(&self.boss_offset);
        let day = WorkDay::containing(start);
        let end = start + Duration::minutes(duration_minutes);
        let free = self.free_intervals_for(&day).await?;
        Ok(free.iter().any(|f| f.contains_span(start, end)))
    }

    /// Scans forward for the earliest free slot of sufficient length.
    ///
    /// Scans up to [`SCAN_DAYS`] calendar days starting with the day
    /// containing `after`. A candidate must start at or after `after`
    /// and be at least `duration_minutes` long. Returns `Ok(None)` when
    /// the scan is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if any day's busy list cannot be read.
    pub async fn find_next_available(
        &self,
        after: DateTime<FixedOffset>,
        duration_minutes: i64,
    ) -> Result<Option<DateTime<FixedOffset>>, GatewayError> {
        let needed = Duration::minutes(duration_minutes);
        let after = after.with_timezone(&self.boss_offset);
        let mut day = WorkDay::containing(after);
        for day_offset in 0..SCAN_DAYS {
            let free = self.free_intervals_for(&day).await?;
            if let Some(slot) = free
                .iter()
                .find(|f| f.start >= after && f.end - f.start >= needed)
            {
                tracing::debug!(date = %day.date, day_offset, start = %slot.start, "found free slot");
                return Ok(Some(slot.start));
            }
            match day.next() {
                Some(next) => day = next,
                None => break,
            }
        }
        tracing::debug!(%after, duration_minutes, "no free slot within scan window");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryCalendar;
    use chrono::NaiveDate;

    fn boss_offset() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 1800).expect("valid offset")
    }

    fn day() -> WorkDay {
        WorkDay::new(
            NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date"),
            boss_offset(),
        )
    }

    fn at(date: &str, hm: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("{date}T{hm}:00+05:30")).expect("valid instant")
    }

    fn busy(date: &str, spans: &[(&str, &str)]) -> Vec<Interval> {
        spans
            .iter()
            .map(|(s, e)| Interval::new(at(date, s), at(date, e)).expect("valid interval"))
            .collect()
    }

    #[test]
    fn two_meetings_leave_two_gaps() {
        // Scenario: busy 09:00-10:00 and 13:00-14:00 in a 09:00-17:00 day.
        let free = free_intervals(&day(), &busy("2025-07-15", &[("09:00", "10:00"), ("13:00", "14:00")]));

        assert_eq!(free.len(), 2);
        assert_eq!(free[0].start, at("2025-07-15", "10:00"));
        assert_eq!(free[0].end, at("2025-07-15", "13:00"));
        assert_eq!(free[1].start, at("2025-07-15", "14:00"));
        assert_eq!(free[1].end, at("2025-07-15", "17:00"));
    }

    #[test]
    fn empty_busy_list_frees_the_whole_day() {
        let free = free_intervals(&day(), &[]);

        assert_eq!(free.len(), 1);
        assert_eq!(free[0].start, day().work_start());
        assert_eq!(free[0].end, day().work_end());
    }

    #[test]
    fn unsorted_input_yields_identical_output() {
        let sorted = busy(
            "2025-07-15",
            &[("09:30", "10:30"), ("11:00", "12:00"), ("14:00", "15:00")],
        );
        let shuffled = busy(
            "2025-07-15",
            &[("14:00", "15:00"), ("09:30", "10:30"), ("11:00", "12:00")],
        );

        assert_eq!(free_intervals(&day(), &sorted), free_intervals(&day(), &shuffled));
    }

    #[test]
    fn overlapping_busy_intervals_do_not_regress_the_cursor() {
        // Second interval is swallowed by the first; third overlaps its tail.
        let spans = busy(
            "2025-07-15",
            &[("09:00", "12:00"), ("10:00", "11:00"), ("11:30", "12:30")],
        );
        let free = free_intervals(&day(), &spans);

        assert_eq!(free.len(), 1);
        assert_eq!(free[0].start, at("2025-07-15", "12:30"));
        assert_eq!(free[0].end, at("2025-07-15", "17:00"));
    }

    #[test]
    fn gaps_below_threshold_are_not_reported() {
        // 25-minute gap between the meetings is below the 30-minute threshold.
        let spans = busy("2025-07-15", &[("09:00", "12:00"), ("12:25", "16:45")]);
        let free = free_intervals(&day(), &spans);

        // Only the 15-minute trailing gap remains, which is also below threshold.
        assert!(free.is_empty());
    }

    #[test]
    fn busy_time_outside_working_hours_is_clamped() {
        // An evening meeting must not produce a free interval reaching 18:00.
        let spans = busy("2025-07-15", &[("18:00", "19:00")]);
        let free = free_intervals(&day(), &spans);

        assert_eq!(free.len(), 1);
        assert_eq!(free[0].end, day().work_end());

        // A meeting spilling over both ends books the whole day.
        let spans = busy("2025-07-15", &[("08:00", "18:00")]);
        assert!(free_intervals(&day(), &spans).is_empty());
    }

    #[test]
    fn fully_booked_day_has_no_free_intervals() {
        let spans = busy("2025-07-15", &[("09:00", "17:00")]);
        assert!(free_intervals(&day(), &spans).is_empty());
    }

    #[tokio::test]
    async fn slot_inside_free_interval_is_available() {
        let calendar = Arc::new(InMemoryCalendar::with_busy(busy(
            "2025-07-15",
            &[("09:00", "10:00"), ("13:00", "14:00")],
        )));
        let engine = AvailabilityEngine::new(calendar, boss_offset());

        // 10:30 + 45 minutes falls inside the 10:00-13:00 gap.
        assert!(
            engine
                .is_slot_available(at("2025-07-15", "10:30"), 45)
                .await
                .expect("gateway read")
        );
    }

    #[tokio::test]
    async fn slot_overlapping_busy_time_is_not_available() {
        let calendar = Arc::new(InMemoryCalendar::with_busy(busy(
            "2025-07-15",
            &[("09:00", "10:00"), ("13:00", "14:00")],
        )));
        let engine = AvailabilityEngine::new(calendar, boss_offset());

        assert!(
            !engine
                .is_slot_available(at("2025-07-15", "13:15"), 30)
                .await
                .expect("gateway read")
        );
    }

    #[tokio::test]
    async fn duration_longer_than_the_gap_is_not_available() {
        // A 30-minute gap is reported as free, but a 45-minute request
        // must not fit into it.
        let calendar = Arc::new(InMemoryCalendar::with_busy(busy(
            "2025-07-15",
            &[("09:00", "10:00"), ("10:30", "17:00")],
        )));
        let engine = AvailabilityEngine::new(calendar, boss_offset());

        assert!(
            engine
                .is_slot_available(at("2025-07-15", "10:00"), 30)
                .await
                .expect("gateway read")
        );
        assert!(
            !engine
                .is_slot_available(at("2025-07-15", "10:00"), 45)
                .await
                .expect("gateway read")
        );
    }

    #[tokio::test]
    async fn next_available_skips_intervals_starting_before_after() {
        let calendar = Arc::new(InMemoryCalendar::with_busy(busy(
            "2025-07-15",
            &[("09:00", "10:00"), ("13:00", "14:00")],
        )));
        let engine = AvailabilityEngine::new(calendar, boss_offset());

        // 13:15 sits after the 10:00-13:00 interval's start, so the
        // candidate is the 14:00-17:00 interval.
        let next = engine
            .find_next_available(at("2025-07-15", "13:15"), 30)
            .await
            .expect("gateway read");
        assert_eq!(next, Some(at("2025-07-15", "14:00")));
    }

    #[tokio::test]
    async fn next_available_rolls_to_the_following_day() {
        let calendar = Arc::new(InMemoryCalendar::with_busy(busy(
            "2025-07-15",
            &[("09:00", "17:00")],
        )));
        let engine = AvailabilityEngine::new(calendar, boss_offset());

        let next = engine
            .find_next_available(at("2025-07-15", "09:00"), 30)
            .await
            .expect("gateway read");
        assert_eq!(next, Some(at("2025-07-16", "09:00")));
    }

    #[tokio::test]
    async fn next_available_is_never_before_after() {
        let calendar = Arc::new(InMemoryCalendar::new());
        let engine = AvailabilityEngine::new(calendar, boss_offset());

        let after = at("2025-07-15", "08:00");
        let next = engine
            .find_next_available(after, 30)
            .await
            .expect("gateway read")
            .expect("open calendar has a slot");
        assert!(next >= after);
        assert_eq!(next, at("2025-07-15", "09:00"));
    }

    #[tokio::test]
    async fn foreign_offset_instants_are_evaluated_boss_local() {
        let calendar = Arc::new(InMemoryCalendar::with_busy(busy(
            "2025-07-15",
            &[("09:00", "10:00")],
        )));
        let engine = AvailabilityEngine::new(calendar, boss_offset());

        // 05:30+01:00 is 10:00 boss-local, the start of a free interval.
        let start =
            DateTime::parse_from_rfc3339("2025-07-15T05:30:00+01:00").expect("valid instant");
        assert!(
            engine
                .is_slot_available(start, 30)
                .await
                .expect("gateway read")
        );

        // 03:00+01:00 is 08:30 boss-local; the scan must use the boss's
        // day window, not a +01:00 one.
        let after =
            DateTime::parse_from_rfc3339("2025-07-15T03:00:00+01:00").expect("valid instant");
        let next = engine
            .find_next_available(after, 30)
            .await
            .expect("gateway read");
        assert_eq!(next, Some(at("2025-07-15", "10:00")));
    }

    /// xorshift64; enough randomness for interval generation.
    struct Rng(u64);

    impl Rng {
        fn next(&mut self) -> u64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            self.0
        }

        fn below(&mut self, n: u64) -> i64 {
            (self.next() % n) as i64
        }
    }

    #[tokio::test]
    async fn random_slots_agree_with_direct_containment() {
        let mut rng = Rng(0x5eed_1234_5678_9abc);
        let day = day();
        let minute = |m: i64| day.work_start() + Duration::minutes(m);

        for _ in 0..64 {
            // Disjoint busy set: distinct cut points in the work day,
            // paired off in order.
            let pairs = rng.below(4) + 1;
            let mut cuts: Vec<i64> = (0..pairs * 2).map(|_| rng.below(480)).collect();
            cuts.sort_unstable();
            cuts.dedup();
            let spans: Vec<Interval> = cuts
                .chunks_exact(2)
                .map(|c| Interval::new(minute(c[0]), minute(c[1])).expect("valid interval"))
                .collect();

            let calendar = Arc::new(InMemoryCalendar::with_busy(spans.clone()));
            let engine = AvailabilityEngine::new(calendar, boss_offset());

            // Random proposed slot, allowed to stray outside the window.
            let start = minute(rng.below(600) - 60);
            let duration = rng.below(106) + 15;
            let end = start + Duration::minutes(duration);

            let expected = free_intervals(&day, &spans)
                .iter()
                .any(|f| f.contains_span(start, end));
            let actual = engine
                .is_slot_available(start, duration)
                .await
                .expect("gateway read");
            assert_eq!(
                actual, expected,
                "slot {start} + {duration}min against {spans:?}"
            );
        }
    }

    #[tokio::test]
    async fn exhausted_scan_returns_none() {
        // Every day in the scan window fully booked.
        let mut spans = Vec::new();
        let mut current = day();
        for _ in 0..SCAN_DAYS {
            spans.push(
                Interval::new(current.work_start(), current.work_end()).expect("valid interval"),
            );
            current = current.next().expect("not at calendar end");
        }
        let calendar = Arc::new(InMemoryCalendar::with_busy(spans));
        let engine = AvailabilityEngine::new(calendar, boss_offset());

        let next = engine
            .find_next_available(at("2025-07-15", "09:00"), 30)
            .await
            .expect("gateway read");
        assert_eq!(next, None);
    }
}
