use super::*;

#[test]
fn title_descriptor_is_decorated() {
    let d = ContentDescriptor::Title(TitleContent {
        text: Some("Tap here".to_owned()),
        style: DEFAULT_TITLE_STYLE.to_owned(),
        gravity: Gravity::Bottom,
    });
    let v = inflate_content(&PlainInflater, &d, None);
    assert_eq!(v.layout, TITLE_LAYOUT);
    assert_eq!(v.text.as_deref(), Some("Tap here"));
    assert_eq!(v.text_style.as_deref(), Some(DEFAULT_TITLE_STYLE));
    assert_eq!(v.gravity, Some(Gravity::Bottom));
}

#[test]
fn custom_descriptor_runs_callback() {
    let d = ContentDescriptor::Custom {
        layout: "promo_card".to_owned(),
    };
    let cb: OnInflated = Rc::new(|v: &mut ContentView| v.text = Some("decorated".to_owned()));
    let v = inflate_content(&PlainInflater, &d, Some(&cb));
    assert_eq!(v.layout, "promo_card");
    assert_eq!(v.text.as_deref(), Some("decorated"));
    assert_eq!(v.gravity, None);
}

#[test]
fn native_widget_downcasts() {
    let mut v = ContentView::new("x");
    v.native = Some(Rc::new(42u32));
    assert_eq!(v.native::<u32>(), Some(&42));
    assert_eq!(v.native::<String>(), None);
    assert!(format!("{v:?}").contains("native: true"));
}
