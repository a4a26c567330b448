use super::*;

fn reveal() -> RevealParams {
    RevealParams::new(
        Some(FocusPoint::new(Point::new(30.0, 40.0), 10.0)),
        Some(24.0),
        (300, 400),
        400,
    )
}

#[test]
fn caller_supplied_wins_over_everything() {
    let custom = CustomAnimation::new("slide_in");
    let s = AnimationStrategy::resolve(Some(&custom), true, reveal);
    assert_eq!(s, AnimationStrategy::CallerSupplied(custom.clone()));
    assert_eq!(s.enter(), Animation::Custom(custom.clone()));
    assert_eq!(s.exit(), Animation::Custom(custom));
    assert!(!s.detaches_on_exit());
}

#[test]
fn circular_only_when_supported() {
    let s = AnimationStrategy::resolve(None, true, reveal);
    assert!(matches!(s, AnimationStrategy::CircularReveal(_)));
    assert!(s.detaches_on_exit());

    let s = AnimationStrategy::resolve(None, false, || -> RevealParams {
        panic!("reveal params must not be computed for the fade fallback")
    });
    assert_eq!(s, AnimationStrategy::Fade(FadeParams::default()));
    assert!(s.detaches_on_exit());
}

#[test]
fn circular_enter_grows_from_half_target_width_over_double_duration() {
    let s = AnimationStrategy::CircularReveal(reveal());
    let Animation::CircularReveal {
        center,
        from_radius,
        to_radius,
        duration_ms,
        ease,
    } = s.enter()
    else {
        panic!("expected circular reveal");
    };
    assert_eq!(center, Point::new(30.0, 40.0));
    assert_eq!(from_radius, 12.0);
    assert_eq!(to_radius, 500.0);
    assert_eq!(duration_ms, 800);
    assert_eq!(ease, Ease::FastOutSlowIn);
}

#[test]
fn circular_exit_shrinks_to_zero_over_base_duration() {
    let exit = AnimationStrategy::CircularReveal(reveal()).exit();
    assert_eq!(exit.duration_ms(), Some(400));
    assert_eq!(exit.sample(0.0), Some(500.0));
    assert_eq!(exit.sample(1.0), Some(0.0));
}

#[test]
fn reveal_without_target_starts_at_zero_from_container_center() {
    let p = RevealParams::new(None, None, (200, 100), 400);
    assert_eq!(p.start_radius, 0.0);
    assert_eq!(p.center, Point::new(100.0, 50.0));
}

#[test]
fn fade_runs_fixed_duration_in_both_directions() {
    let s = AnimationStrategy::Fade(FadeParams::default());
    assert_eq!(s.enter().duration_ms(), Some(FADE_DURATION_MS));
    assert_eq!(s.enter().sample(0.0), Some(0.0));
    assert_eq!(s.exit().sample(0.0), Some(1.0));
    assert_eq!(s.exit().sample(0.5), Some(0.5));
}

#[test]
fn custom_animation_has_no_sample_or_duration() {
    let a = Animation::Custom(CustomAnimation::new("x"));
    assert_eq!(a.sample(0.5), None);
    assert_eq!(a.duration_ms(), None);
}

#[test]
fn reveal_ignores_non_finite_target_width() {
    let p = RevealParams::new(None, Some(f64::INFINITY), (300, 400), 400);
    assert_eq!(p.start_radius, 0.0);
}
