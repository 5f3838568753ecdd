//! Headless presenters for scores and users.
//!
//! View presenters subscribe to a model and push fresh Props to a
//! [`Renderer`] whenever it notifies. Action presenters forward user input to a
//! [`ScoreCommands`] or [`UserCommands`] implementation, which is either the
//! model itself or a controller bound to it.

#[cfg(feature = "no_std")]
use alloc::format;
#[cfg(feature = "no_std")]
use alloc::string::{String, ToString};

use log::debug;
use portable_atomic_util::Arc;
use spin::Mutex;

use crate::{
    Observable, ObservableResult, Renderer, Score, ScoreCommands, Subscriber, User, UserCommands,
};

/// Text of a read-only score label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLabel {
    pub text: String,
}

impl ScoreLabel {
    pub fn of(score: &Score) -> Self {
        Self {
            text: score.value().to_string(),
        }
    }
}

/// Text of the editable score entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub text: String,
}

impl ScoreEntry {
    pub fn of(score: &Score) -> Self {
        Self {
            text: score.value().to_string(),
        }
    }
}

/// Text of the user summary label: `"{firstname} {LASTNAME} ({email})"`.
///
/// Unset fields format as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLabel {
    pub text: String,
}

impl UserLabel {
    pub fn of(user: &User) -> Self {
        let firstname = user.firstname().unwrap_or_default();
        let lastname = user.lastname().unwrap_or_default().to_uppercase();
        let email = user.email().unwrap_or_default();
        Self {
            text: format!("{firstname} {lastname} ({email})"),
        }
    }
}

enum FirstRender {
    Now,
    OnFirstChange,
}

struct Presenter<R> {
    renderer: Mutex<R>,
    // Set when a change arrives while `renderer` is busy rendering.
    stale: Mutex<bool>,
}

/// Subscribe `renderer` to `model` so it receives `present(model)` after every
/// notification, and right away for [`FirstRender::Now`].
///
/// A renderer may itself change the model. The nested notification does not
/// render; once the outer render returns, the latest state is rendered again.
fn attach<S, P, R>(
    model: &S,
    renderer: R,
    present: fn(&S) -> P,
    first_render: FirstRender,
) -> Subscriber<S>
where
    S: Observable + 'static,
    P: 'static,
    R: Renderer<P> + Send + 'static,
{
    let presenter = Arc::new(Presenter {
        renderer: Mutex::new(renderer),
        stale: Mutex::new(false),
    });
    if let FirstRender::Now = first_render {
        presenter.renderer.lock().render(present(model));
    }

    let subscriber = Subscriber::from_fn(move |subject: &S, _: &()| {
        let Some(mut renderer) = presenter.renderer.try_lock() else {
            debug!("render in progress, deferring nested change");
            *presenter.stale.lock() = true;
            return;
        };
        loop {
            renderer.render(present(subject));
            let mut stale = presenter.stale.lock();
            if !*stale {
                break;
            }
            *stale = false;
        }
    });
    model.subscribe(subscriber.clone());
    subscriber
}

/// Read-only score display.
#[derive(Debug)]
pub struct ScoreView<'a> {
    model: &'a Score,
    subscriber: Subscriber<Score>,
}

impl<'a> ScoreView<'a> {
    /// Render the current score and follow every later change.
    pub fn new<R>(model: &'a Score, renderer: R) -> Self
    where
        R: Renderer<ScoreLabel> + Send + 'static,
    {
        let subscriber = attach(model, renderer, ScoreLabel::of, FirstRender::Now);
        Self { model, subscriber }
    }

    /// Stop following the score.
    pub fn detach(&self) -> ObservableResult<()> {
        self.model.unsubscribe(&self.subscriber)
    }
}

/// Read-only user display.
///
/// Renders nothing until the user is first saved.
#[derive(Debug)]
pub struct UserView<'a> {
    model: &'a User,
    subscriber: Subscriber<User>,
}

impl<'a> UserView<'a> {
    pub fn new<R>(model: &'a User, renderer: R) -> Self
    where
        R: Renderer<UserLabel> + Send + 'static,
    {
        let subscriber = attach(model, renderer, UserLabel::of, FirstRender::OnFirstChange);
        Self { model, subscriber }
    }

    /// Stop following the user.
    pub fn detach(&self) -> ObservableResult<()> {
        self.model.unsubscribe(&self.subscriber)
    }
}

/// Editable score entry: shows the score and accepts typed replacements.
///
/// The entry mirrors every change to the score, whoever made it. Typed text is
/// committed with [`commit`](Self::commit), which is the only place user input
/// is parsed.
#[derive(Debug)]
pub struct ScoreEditor<'a, C> {
    model: &'a Score,
    commands: C,
    subscriber: Subscriber<Score>,
}

impl<'a, C: ScoreCommands> ScoreEditor<'a, C> {
    pub fn new<R>(model: &'a Score, commands: C, renderer: R) -> Self
    where
        R: Renderer<ScoreEntry> + Send + 'static,
    {
        let subscriber = attach(model, renderer, ScoreEntry::of, FirstRender::Now);
        Self {
            model,
            commands,
            subscriber,
        }
    }

    /// Apply typed text as the new score.
    ///
    /// Surrounding whitespace is ignored. Text that is not an integer is
    /// discarded and leaves the score untouched. Returns whether the input was
    /// applied.
    pub fn commit(&self, text: &str) -> bool {
        match text.trim().parse::<i64>() {
            Ok(value) => {
                self.commands.try_set_value(value);
                true
            }
            Err(err) => {
                debug!("discarding score input {text:?}: {err}");
                false
            }
        }
    }

    /// Stop mirroring the score.
    pub fn detach(&self) -> ObservableResult<()> {
        self.model.unsubscribe(&self.subscriber)
    }
}

/// The `+` and `-` buttons.
#[derive(Debug, Clone)]
pub struct ScoreUpdater<C> {
    commands: C,
}

impl<C: ScoreCommands> ScoreUpdater<C> {
    pub fn new(commands: C) -> Self {
        Self { commands }
    }

    pub fn increment(&self) {
        self.commands.increment();
    }

    pub fn decrement(&self) {
        self.commands.decrement();
    }
}

/// User edit form: three entries and a save button.
///
/// Entries are staged locally and only reach the model on
/// [`submit`](Self::submit), after which they are cleared.
#[derive(Debug)]
pub struct UserEditor<C> {
    commands: C,
    firstname: String,
    lastname: String,
    email: String,
}

impl<C: UserCommands> UserEditor<C> {
    pub fn new(commands: C) -> Self {
        Self {
            commands,
            firstname: String::new(),
            lastname: String::new(),
            email: String::new(),
        }
    }

    pub fn set_firstname(&mut self, text: impl Into<String>) {
        self.firstname = text.into();
    }

    pub fn set_lastname(&mut self, text: impl Into<String>) {
        self.lastname = text.into();
    }

    pub fn set_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
    }

    /// Current entry contents as `(firstname, lastname, email)`.
    pub fn entries(&self) -> (&str, &str, &str) {
        (&self.firstname, &self.lastname, &self.email)
    }

    /// Save the three entries as one change, then clear them.
    pub fn submit(&mut self) {
        self.commands
            .save(&self.firstname, &self.lastname, &self.email);
        self.firstname.clear();
        self.lastname.clear();
        self.email.clear();
    }
}
