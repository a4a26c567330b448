use super::*;
use crate::host::content::ContentView;

#[test]
fn defaults_match_documented_values() {
    let c = ShowcaseBuilder::new().build().unwrap();
    assert_eq!(c.id, None);
    assert_eq!(c.focus_radius_factor, 1.0);
    assert_eq!(c.background, BackgroundColor::DEFAULT);
    assert_eq!(c.title_gravity, Gravity::Center);
    assert_eq!(c.title_style, DEFAULT_TITLE_STYLE);
    assert_eq!(c.animation_duration_ms, DEFAULT_ANIMATION_DURATION_MS);
    assert!(c.close_on_touch);
    assert!(!c.show_once);
    assert!(c.target_bounds().is_none());
}

#[test]
fn show_once_requires_id() {
    assert!(ShowcaseBuilder::new().show_once(true).build().is_err());
    assert!(ShowcaseBuilder::new().id("  ").show_once(true).build().is_err());
    assert!(ShowcaseBuilder::new().id("intro").show_once(true).build().is_ok());
}

#[test]
fn rejects_bad_factor_duration_and_layout() {
    assert!(ShowcaseBuilder::new().focus_radius_factor(-1.0).build().is_err());
    assert!(ShowcaseBuilder::new().focus_radius_factor(f64::INFINITY).build().is_err());
    assert!(ShowcaseBuilder::new().animation_duration_ms(0).build().is_err());
    assert!(ShowcaseBuilder::new().custom_view("", None).build().is_err());
}

#[test]
fn title_descriptor_carries_title_parameters() {
    let c = ShowcaseBuilder::new()
        .title("Hello")
        .title_style("Big", Gravity::Top)
        .build()
        .unwrap();
    assert_eq!(
        c.content_descriptor(),
        ContentDescriptor::Title(TitleContent {
            text: Some("Hello".to_owned()),
            style: "Big".to_owned(),
            gravity: Gravity::Top,
        })
    );
}

#[test]
fn custom_view_takes_precedence_over_title() {
    let cb: OnInflated = Rc::new(|_v: &mut ContentView| {});
    let c = ShowcaseBuilder::new()
        .title("ignored")
        .custom_view("card", Some(cb))
        .build()
        .unwrap();
    assert_eq!(
        c.content_descriptor(),
        ContentDescriptor::Custom {
            layout: "card".to_owned()
        }
    );
    assert!(format!("{c:?}").contains("on_inflated: true"));
}

#[test]
fn spec_json_seeds_builder() {
    let spec = OverlaySpec::from_json_str(
        r##"{
            "id": "fab",
            "title": "New!",
            "target": [10, 20, 50, 60],
            "focus_radius_factor": 1.5,
            "background": "#10203080",
            "title_gravity": "bottom",
            "show_once": true,
            "close_on_touch": false,
            "exit_animation": "slide_out",
            "animation_duration_ms": 250
        }"##,
    )
    .unwrap();
    let c = spec.into_builder().build().unwrap();
    assert_eq!(c.id.as_deref(), Some("fab"));
    assert_eq!(c.target_bounds(), Some(Rect::new(10.0, 20.0, 50.0, 60.0)));
    assert_eq!(c.focus_radius_factor, 1.5);
    assert_eq!(c.background, BackgroundColor(0x8010_2030));
    assert_eq!(c.title_gravity, Gravity::Bottom);
    assert!(c.show_once);
    assert!(!c.close_on_touch);
    assert_eq!(c.enter_animation, None);
    assert_eq!(c.exit_animation, Some(CustomAnimation::new("slide_out")));
    assert_eq!(c.animation_duration_ms, 250);
}

#[test]
fn spec_json_rejects_unknown_fields() {
    let err = OverlaySpec::from_json_str(r#"{"idd": "typo"}"#).unwrap_err();
    assert!(err.to_string().contains("overlay spec"));
}
