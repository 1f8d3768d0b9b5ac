mod common;

use common::*;
use proptest::prelude::*;
use wallsit::config::TrainerConfig;
use wallsit::events::ButtonEvent;
use wallsit::SessionController;

proptest! {
    #[test]
    fn adjustments_commute(ups in prop::collection::vec(any::<bool>(), 0..40)) {
        let config = TrainerConfig::default();
        let mut sc = SessionController::new(config);
        sc.handle_event(RIGHT, 0);

        let n = ups.iter().filter(|up| **up).count() as i64;
        let m = ups.len() as i64 - n;
        for (i, up) in ups.iter().enumerate() {
            let event: ButtonEvent = if *up { LEFT } else { LEFT_DOUBLE };
            sc.handle_event(event, 100 + i as u64);
        }

        let expected = config.default_session_ms + config.session_step_ms * (n - m);
        prop_assert_eq!(sc.threshold().current_ms(), expected);

        sc.tick(config.calibration_ms + 1, Some(0.0));
        sc.handle_event(RIGHT, 20_000);
        let length = expected.max(config.default_session_ms);
        prop_assert_eq!(sc.threshold().current_ms(), length);
        prop_assert_eq!(sc.deadline_ms(), 20_000 + length as u64);
    }
}
