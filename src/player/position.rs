use std::time::Duration;

/// Absolute seek targets are clamped defensively even though the UI
/// only issues in-range values.
pub(crate) fn clamp_seek(target: Duration, total: Duration) -> Duration {
    target.min(total)
}

pub(crate) fn skip_target(elapsed: Duration, secs: u64, total: Duration) -> Duration {
    (elapsed + Duration::from_secs(secs)).min(total)
}

pub(crate) fn rewind_target(elapsed: Duration, secs: u64) -> Duration {
    elapsed.saturating_sub(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn skip_then_rewind_round_trips_away_from_the_edges() {
        let total = secs(100);
        let forward = skip_target(secs(5), 15, total);
        assert_eq!(forward, secs(20));
        assert_eq!(rewind_target(forward, 15), secs(5));
    }

    #[test]
    fn skip_clamps_at_the_end_and_the_round_trip_is_lossy() {
        let total = secs(100);
        let forward = skip_target(secs(95), 15, total);
        assert_eq!(forward, total);
        // Clamping discarded the overshoot, so rewinding lands earlier
        // than the starting point.
        assert_eq!(rewind_target(forward, 15), secs(85));
    }

    #[test]
    fn rewind_clamps_at_zero() {
        assert_eq!(rewind_target(secs(4), 15), Duration::ZERO);
        assert_eq!(rewind_target(Duration::ZERO, 15), Duration::ZERO);
    }

    #[test]
    fn positions_never_leave_the_playable_range() {
        let total = secs(90);
        let mut pos = secs(30);
        for (forward, amount) in [(true, 50), (false, 200), (true, 500), (false, 10)] {
            pos = match forward {
                true => skip_target(pos, amount, total),
                false => rewind_target(pos, amount),
            };
            assert!(pos <= total);
        }
    }

    #[test]
    fn absolute_seeks_are_clamped_to_the_total() {
        let total = secs(60);
        assert_eq!(clamp_seek(secs(30), total), secs(30));
        assert_eq!(clamp_seek(secs(600), total), total);
        assert_eq!(clamp_seek(Duration::ZERO, total), Duration::ZERO);
    }
}
