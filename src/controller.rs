//! Controllers and the mutation capabilities action surfaces depend on.
//!
//! An action surface is written against [`ScoreCommands`] or [`UserCommands`]
//! and never against a concrete type. Handing it a model wires it directly
//! (views mutate models themselves); handing it a controller puts the controller
//! in between. The models behave identically either way.

use crate::{Score, User};

/// Score mutations an action surface may request.
pub trait ScoreCommands {
    /// Raise the score by one, saturating at `i64::MAX`.
    ///
    /// Notifies once even when the score is already at the bound.
    fn increment(&self);

    /// Lower the score by one, saturating at `i64::MIN`.
    ///
    /// Notifies once even when the score is already at the bound.
    fn decrement(&self);

    /// Replace the score with an already-parsed value.
    fn try_set_value(&self, value: i64);
}

/// User mutations an action surface may request.
pub trait UserCommands {
    /// Overwrite all three fields and commit them as one change.
    fn save(&self, firstname: &str, lastname: &str, email: &str);
}

impl<T: ScoreCommands + ?Sized> ScoreCommands for &T {
    fn increment(&self) {
        (**self).increment();
    }

    fn decrement(&self) {
        (**self).decrement();
    }

    fn try_set_value(&self, value: i64) {
        (**self).try_set_value(value);
    }
}

impl<T: UserCommands + ?Sized> UserCommands for &T {
    fn save(&self, firstname: &str, lastname: &str, email: &str) {
        (**self).save(firstname, lastname, email);
    }
}

// Direct binding: surfaces mutate the model with no controller in between.

impl ScoreCommands for Score {
    fn increment(&self) {
        self.set_value(self.value().saturating_add(1));
    }

    fn decrement(&self) {
        self.set_value(self.value().saturating_sub(1));
    }

    fn try_set_value(&self, value: i64) {
        self.set_value(value);
    }
}

impl UserCommands for User {
    fn save(&self, firstname: &str, lastname: &str, email: &str) {
        self.set_firstname(firstname);
        self.set_lastname(lastname);
        self.set_email(email);
        User::save(self);
    }
}

/// Translates score intentions into model mutations.
///
/// Bound to one [`Score`] for its whole life. Holds no state of its own and
/// performs no validation: callers parse user input before calling in.
#[derive(Debug, Clone, Copy)]
pub struct ScoreController<'a> {
    model: &'a Score,
}

impl<'a> ScoreController<'a> {
    pub fn new(model: &'a Score) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'a Score {
        self.model
    }

    /// Write `value + 1` (saturating), notifying once.
    pub fn increment(&self) {
        ScoreCommands::increment(self.model);
    }

    /// Write `value - 1` (saturating), notifying once.
    pub fn decrement(&self) {
        ScoreCommands::decrement(self.model);
    }

    /// Write `value` as is, notifying once.
    pub fn try_set_value(&self, value: i64) {
        ScoreCommands::try_set_value(self.model, value);
    }
}

impl ScoreCommands for ScoreController<'_> {
    fn increment(&self) {
        ScoreController::increment(self);
    }

    fn decrement(&self) {
        ScoreController::decrement(self);
    }

    fn try_set_value(&self, value: i64) {
        ScoreController::try_set_value(self, value);
    }
}

/// Translates user edits into a single committed model change.
#[derive(Debug, Clone, Copy)]
pub struct UserController<'a> {
    model: &'a User,
}

impl<'a> UserController<'a> {
    pub fn new(model: &'a User) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'a User {
        self.model
    }

    /// Stage all three fields, then save. Observers are notified exactly once
    /// and see the three new values together.
    pub fn save(&self, firstname: &str, lastname: &str, email: &str) {
        UserCommands::save(self.model, firstname, lastname, email);
    }
}

impl UserCommands for UserController<'_> {
    fn save(&self, firstname: &str, lastname: &str, email: &str) {
        UserController::save(self, firstname, lastname, email);
    }
}
