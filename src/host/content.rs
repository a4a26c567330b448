use std::{any::Any, fmt, rc::Rc};

/// Layout identifier of the built-in title content.
pub const TITLE_LAYOUT: &str = "spotlight_title";
/// Text appearance applied to titles unless the configuration overrides it.
pub const DEFAULT_TITLE_STYLE: &str = "SpotlightDefaultTitleStyle";

/// Placement of the title text inside the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    #[default]
    Center,
    Top,
    Bottom,
    Start,
    End,
    CenterHorizontal,
    CenterVertical,
}

/// Title parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleContent {
    pub text: Option<String>,
    pub style: String,
    pub gravity: Gravity,
}

impl TitleContent {
    /// Write the title text, appearance and gravity onto an inflated view.
    pub fn apply(&self, view: &mut ContentView) {
        view.text_style = Some(self.style.clone());
        view.gravity = Some(self.gravity);
        view.text = self.text.clone();
    }
}

/// What to inflate into the overlay container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentDescriptor {
    Title(TitleContent),
    Custom { layout: String },
}

impl ContentDescriptor {
    pub fn layout(&self) -> &str {
        match self {
            Self::Title(_) => TITLE_LAYOUT,
            Self::Custom { layout } => layout,
        }
    }
}

/// An inflated content view.
///
/// `native` carries the host toolkit's own widget so hosts and inflate callbacks can reach it.
#[derive(Clone, Default)]
pub struct ContentView {
    pub layout: String,
    pub text: Option<String>,
    pub text_style: Option<String>,
    pub gravity: Option<Gravity>,
    pub native: Option<Rc<dyn Any>>,
}

impl ContentView {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            ..Self::default()
        }
    }

    pub fn native<T: 'static>(&self) -> Option<&T> {
        self.native.as_deref().and_then(|n| n.downcast_ref::<T>())
    }
}

impl fmt::Debug for ContentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentView")
            .field("layout", &self.layout)
            .field("text", &self.text)
            .field("text_style", &self.text_style)
            .field("gravity", &self.gravity)
            .field("native", &self.native.is_some())
            .finish()
    }
}

/// Callback invoked with freshly inflated custom content.
pub type OnInflated = Rc<dyn Fn(&mut ContentView)>;

/// Builds content views from descriptors.
pub trait ContentInflater {
    fn inflate(&self, descriptor: &ContentDescriptor) -> ContentView;
}

/// Inflater that produces plain data views, for headless hosts and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainInflater;

impl ContentInflater for PlainInflater {
    fn inflate(&self, descriptor: &ContentDescriptor) -> ContentView {
        ContentView::new(descriptor.layout())
    }
}

/// Inflate `descriptor`, then let the title parameters or the caller's callback decorate it.
pub fn inflate_content(
    inflater: &dyn ContentInflater,
    descriptor: &ContentDescriptor,
    on_inflated: Option<&OnInflated>,
) -> ContentView {
    let mut view = inflater.inflate(descriptor);
    if let ContentDescriptor::Title(title) = descriptor {
        title.apply(&mut view);
    }
    if let Some(cb) = on_inflated {
        cb(&mut view);
    }
    view
}

#[cfg(test)]
#[path = "../../tests/unit/host/content.rs"]
mod tests;
