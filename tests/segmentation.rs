mod tests {
    use myrtio_scene_fader::{FadePlan, LightingState, MAX_SEGMENT_MS};

    const OFF: LightingState = LightingState::OFF;
    const WARM: LightingState = LightingState::new(255, 255, 200, 150, 0);

    #[test]
    fn test_zero_duration_is_single_immediate_segment() {
        let plan = FadePlan::new(OFF, WARM, 0);
        assert_eq!(plan.segment_count(), 1);

        let segment = plan.segment(0).unwrap();
        assert_eq!(segment.duration_ms, 0);
        assert_eq!(segment.duration_secs(), 0);
        assert_eq!(segment.target, WARM);
        assert_eq!(plan.segment(1), None);
    }

    #[test]
    fn test_short_fades_are_single_segment() {
        for total_ms in [1, 999, 1_000, 10_000, 254_999, MAX_SEGMENT_MS] {
            let plan = FadePlan::new(OFF, WARM, total_ms);
            assert_eq!(plan.segment_count(), 1, "total_ms={total_ms}");

            let segment = plan.segment(0).unwrap();
            assert_eq!(segment.target, WARM);
            assert_eq!(segment.duration_ms, total_ms);
        }
    }

    #[test]
    fn test_long_fades_split_into_equal_segments() {
        for total_ms in [255_001, 510_000, 510_001, 600_000, 3_600_000, u32::MAX] {
            let plan = FadePlan::new(OFF, WARM, total_ms);
            let count = total_ms.div_ceil(MAX_SEGMENT_MS);
            assert_eq!(plan.segment_count(), count, "total_ms={total_ms}");
            assert_eq!(plan.segment_ms(), total_ms / count);
            assert!(plan.segment_ms() <= MAX_SEGMENT_MS);

            let segments: Vec<_> = plan.segments().collect();
            assert_eq!(segments.len(), count as usize);
            assert!(segments.iter().all(|s| s.duration_ms == plan.segment_ms()));
            assert_eq!(segments.last().unwrap().target, WARM);
        }
    }

    #[test]
    fn test_ten_minute_fade() {
        let plan = FadePlan::new(OFF, WARM, 600_000);
        assert_eq!(plan.segment_count(), 3);

        let segments: Vec<_> = plan.segments().collect();
        let durations: Vec<u8> = segments.iter().map(|s| s.duration_secs()).collect();
        assert_eq!(durations, [200, 200, 200]);

        assert_eq!(segments[0].target, LightingState::new(85, 85, 67, 50, 0));
        assert_eq!(segments[1].target, LightingState::new(170, 170, 133, 100, 0));
        assert_eq!(segments[2].target, WARM);
    }

    #[test]
    fn test_duration_secs_truncates() {
        let plan = FadePlan::new(OFF, WARM, 1_999);
        assert_eq!(plan.segment(0).unwrap().duration_secs(), 1);

        let plan = FadePlan::new(OFF, WARM, 999);
        assert_eq!(plan.segment(0).unwrap().duration_secs(), 0);

        // 255_001 ms -> 2 segments of 127_500 ms
        let plan = FadePlan::new(OFF, WARM, 255_001);
        assert_eq!(plan.segment(0).unwrap().duration_secs(), 127);
    }

    #[test]
    fn test_interpolation_is_monotonic_without_overshoot() {
        let start = LightingState::new(0, 10, 200, 255, 0);
        let target = LightingState::new(255, 250, 0, 0, 128);
        let plan = FadePlan::new(start, target, 2_000_000);
        assert_eq!(plan.segment_count(), 8);

        let mut previous = start;
        for segment in plan.segments() {
            let value = segment.target;
            assert!(
                value.brightness >= previous.brightness && value.brightness <= target.brightness
            );
            assert!(value.red >= previous.red && value.red <= target.red);
            assert!(value.green <= previous.green && value.green >= target.green);
            assert!(value.blue <= previous.blue && value.blue >= target.blue);
            assert!(value.white >= previous.white && value.white <= target.white);
            previous = value;
        }
        assert_eq!(previous, target);
    }

    #[test]
    fn test_equal_start_and_target_stays_flat() {
        let plan = FadePlan::new(WARM, WARM, 1_000_000);
        assert!(plan.segments().all(|s| s.target == WARM));
    }

    #[test]
    fn test_segments_iterator_is_exact_size() {
        let plan = FadePlan::new(OFF, WARM, 600_000);
        let mut segments = plan.segments();
        assert_eq!(segments.len(), 3);
        segments.next();
        assert_eq!(segments.len(), 2);
    }
}
