//! Three-field user record with stage-then-commit notification.

#[cfg(feature = "no_std")]
use alloc::string::String;

use log::info;
use spin::Mutex;

use crate::{Observable, Subscribers};

#[derive(Debug, Default)]
struct UserFields {
    firstname: Option<String>,
    lastname: Option<String>,
    email: Option<String>,
}

/// An observable user record.
///
/// Field setters only stage values: they neither validate nor notify. Observers
/// are told about changes only when [`save`](Self::save) commits them, so a
/// notified observer always sees all three fields as of that save.
///
/// Every field reads as `None` until it is first assigned.
///
/// # Example
///
/// ```rust
/// use useful_mvc::User;
///
/// let user = User::new();
/// user.set_firstname("Ada");
/// user.set_lastname("Lovelace");
/// user.set_email("ada@example.com");
/// user.save();
///
/// assert_eq!(user.firstname().as_deref(), Some("Ada"));
/// ```
#[derive(Debug, Default)]
pub struct User {
    fields: Mutex<UserFields>,
    subscribers: Subscribers<User>,
}

impl User {
    /// Create an unsaved user with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn firstname(&self) -> Option<String> {
        self.fields.lock().firstname.clone()
    }

    pub fn lastname(&self) -> Option<String> {
        self.fields.lock().lastname.clone()
    }

    pub fn email(&self) -> Option<String> {
        self.fields.lock().email.clone()
    }

    pub fn set_firstname(&self, firstname: impl Into<String>) {
        self.fields.lock().firstname = Some(firstname.into());
    }

    pub fn set_lastname(&self, lastname: impl Into<String>) {
        self.fields.lock().lastname = Some(lastname.into());
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.fields.lock().email = Some(email.into());
    }

    /// Commit the staged fields: log them, then notify every subscriber once.
    ///
    /// This is where persistence would attach; for now the log line is the
    /// only record kept.
    pub fn save(&self) {
        {
            let fields = self.fields.lock();
            info!(
                "User#save(): {} {} {}",
                fields.firstname.as_deref().unwrap_or_default(),
                fields.lastname.as_deref().unwrap_or_default(),
                fields.email.as_deref().unwrap_or_default(),
            );
        }

        self.notify_observers(&());
    }
}

impl Observable for User {
    fn subscribers(&self) -> &Subscribers<Self> {
        &self.subscribers
    }
}
