mod support;

mod tests {
    use myrtio_scene_fader::{FadeEngine, FadeRequest, FadeState, LightingState, ProgressSnapshot};

    use super::support::{RecordingChannel, at};

    const WARM: LightingState = LightingState::new(255, 255, 200, 150, 0);

    #[test]
    fn test_idle_progress_is_zero() {
        let engine = FadeEngine::new(RecordingChannel::new());
        let (state, progress) = engine.progress(at(5_000));

        assert_eq!(state, FadeState::Idle);
        assert_eq!(
            progress,
            ProgressSnapshot {
                target: LightingState::OFF,
                elapsed_ms: 0,
                total_ms: 0,
                percent: 0,
            }
        );
    }

    #[test]
    fn test_progress_spans_all_segments() {
        let mut engine = FadeEngine::new(RecordingChannel::new());
        engine.start(FadeRequest::new(WARM, 600_000), at(1_000)).unwrap();

        let (state, progress) = engine.progress(at(1_000));
        assert_eq!(state, FadeState::Fading);
        assert_eq!(progress.percent, 0);
        assert_eq!(progress.total_ms, 600_000);
        // Final target, not the first segment's target
        assert_eq!(progress.target, WARM);

        let (_, progress) = engine.progress(at(151_000));
        assert_eq!(progress.elapsed_ms, 150_000);
        assert_eq!(progress.percent, 25);

        engine.tick(at(201_000));
        let (_, progress) = engine.progress(at(301_000));
        assert_eq!(progress.elapsed_ms, 300_000);
        assert_eq!(progress.percent, 50);
    }

    #[test]
    fn test_progress_clamps_on_clock_overrun() {
        let mut engine = FadeEngine::new(RecordingChannel::new());
        engine.start(FadeRequest::new(WARM, 10_000), at(0)).unwrap();

        let (state, progress) = engine.progress(at(10_500));
        assert_eq!(state, FadeState::Fading);
        assert_eq!(progress.elapsed_ms, 10_000);
        assert_eq!(progress.percent, 100);
        assert!(progress.is_finished());
    }

    #[test]
    fn test_zero_duration_reports_complete_progress() {
        let mut engine = FadeEngine::new(RecordingChannel::new());
        engine.apply_immediate(WARM, at(0)).unwrap();

        let (state, progress) = engine.progress(at(0));
        assert_eq!(state, FadeState::Fading);
        assert_eq!(progress.percent, 100);
        assert_eq!(progress.total_ms, 0);
    }

    #[test]
    fn test_complete_progress_is_full() {
        let mut engine = FadeEngine::new(RecordingChannel::new());
        engine.start(FadeRequest::new(WARM, 10_000), at(0)).unwrap();
        engine.tick(at(10_000));

        let (state, progress) = engine.progress(at(10_000));
        assert_eq!(state, FadeState::Complete);
        assert_eq!(progress.percent, 100);
        assert_eq!(progress.elapsed_ms, 10_000);
        assert_eq!(progress.target, WARM);
    }

    #[test]
    fn test_progress_has_no_side_effects() {
        let mut engine = FadeEngine::new(RecordingChannel::new());
        engine.start(FadeRequest::new(WARM, 600_000), at(0)).unwrap();
        let state = *engine.state();

        for ms in [0, 200_000, 700_000] {
            engine.progress(at(ms));
        }
        assert_eq!(*engine.state(), state);
        assert_eq!(engine.channel().events.len(), 6);
    }

    #[test]
    fn test_progress_after_abort_reports_final_target() {
        let mut engine = FadeEngine::new(RecordingChannel::new());
        engine.start(FadeRequest::new(WARM, 600_000), at(0)).unwrap();
        engine.abort();

        let (state, progress) = engine.progress(at(10_000));
        assert_eq!(state, FadeState::Idle);
        assert_eq!(
            progress,
            ProgressSnapshot {
                target: WARM,
                elapsed_ms: 0,
                total_ms: 600_000,
                percent: 0,
            }
        );
        // `current` still tracks the last segment actually sent
        assert_eq!(engine.current(), LightingState::new(85, 85, 67, 50, 0));
    }

    #[test]
    fn test_idle_after_complete_keeps_last_fade() {
        let mut engine = FadeEngine::new(RecordingChannel::new());
        engine.start(FadeRequest::new(WARM, 10_000), at(0)).unwrap();
        assert_eq!(engine.tick(at(10_000)), FadeState::Complete);
        assert_eq!(engine.tick(at(10_010)), FadeState::Idle);

        let (state, progress) = engine.progress(at(20_000));
        assert_eq!(state, FadeState::Idle);
        assert_eq!(progress.target, WARM);
        assert_eq!(progress.total_ms, 10_000);
        assert_eq!(progress.elapsed_ms, 0);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn test_failed_start_keeps_previous_fade_in_progress() {
        let mut engine = FadeEngine::new(RecordingChannel::with_budget(6));
        engine.start(FadeRequest::new(WARM, 10_000), at(0)).unwrap();
        let result = engine.start(FadeRequest::new(LightingState::OFF, 5_000), at(10));
        assert!(result.is_err());

        let (state, progress) = engine.progress(at(20));
        assert_eq!(state, FadeState::Idle);
        assert_eq!(progress.target, WARM);
        assert_eq!(progress.total_ms, 10_000);
    }

    #[test]
    fn test_set_current_before_any_fade_is_reported() {
        let mut engine = FadeEngine::new(RecordingChannel::new());
        engine.set_current(WARM);

        let (_, progress) = engine.progress(at(0));
        assert_eq!(progress.target, WARM);
        assert_eq!(progress.total_ms, 0);
        assert_eq!(progress.percent, 0);
    }
}
