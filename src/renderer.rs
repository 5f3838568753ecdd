//! Renderer abstraction for pushing presentation state to the host toolkit.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for displaying Props.
///
/// Implement this trait to connect a view to whatever actually draws it (a
/// toolkit label, a terminal line, an embedded display). Views call
/// [`render`](Self::render) once when created and again every time the model
/// they watch notifies them.
///
/// # Example
///
/// ```rust
/// use useful_mvc::{Renderer, ScoreLabel};
///
/// struct ConsoleRenderer;
///
/// impl Renderer<ScoreLabel> for ConsoleRenderer {
///     fn render(&mut self, props: ScoreLabel) {
///         println!("Score: {}", props.text);
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Replace the displayed state with `props`.
    fn render(&mut self, props: Props);
}

impl<Props, R> Renderer<Props> for Box<R>
where
    R: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so keep one clone for assertions and
/// hand another (or [`boxed`](Self::boxed)) to the view.
///
/// # Example
///
/// ```rust
/// use useful_mvc::{Score, ScoreLabel, ScoreView, TestRenderer};
///
/// let renderer = TestRenderer::<ScoreLabel>::new();
/// let score = Score::new(3);
/// let _view = ScoreView::new(&score, renderer.clone());
///
/// score.set_value(4);
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].text, "3");
///     assert_eq!(renders[1].text, "4");
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A type-erased clone, for views that take `Box<dyn Renderer<_>>`.
    pub fn boxed(&self) -> Box<dyn Renderer<Props> + Send> {
        Box::new(self.clone())
    }

    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Inspect every captured Props, oldest first.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Props]) -> R,
    {
        f(&self.renders.lock())
    }
}
