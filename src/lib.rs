#![cfg_attr(feature = "no_std", no_std)]

//! Observable models and controllers for Model-View-Controller wiring, with `no_std` support.
//!
//! Models know nothing about who watches them. They keep an ordered list of
//! [`Subscriber`]s and notify them synchronously whenever their state changes.
//! Views subscribe to models and re-read them on each notification; action
//! surfaces mutate either the models directly or a controller bound to them.
//!
//! ## Example
//!
//! ```rust
//! use useful_mvc::{Observable, Score, ScoreController, Subscriber, User, UserController};
//!
//! let score = Score::new(3);
//! let user = User::new();
//!
//! // A view: re-read the model whenever it changes.
//! score.subscribe(Subscriber::from_fn(|score: &Score, _| {
//!     println!("Score: {}", score.value());
//! }));
//! user.subscribe(Subscriber::from_fn(|user: &User, _| {
//!     println!("User: {:?} {:?}", user.firstname(), user.lastname());
//! }));
//!
//! // Actions go through controllers.
//! let score_controller = ScoreController::new(&score);
//! score_controller.increment();
//! assert_eq!(score.value(), 4);
//!
//! let user_controller = UserController::new(&user);
//! user_controller.save("Ada", "Lovelace", "ada@example.com");
//! assert_eq!(user.email().as_deref(), Some("ada@example.com"));
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod controller;
mod error;
mod observable;
mod renderer;
mod score;
mod user;
mod view;

// Public re-exports
pub use controller::{ScoreCommands, ScoreController, UserCommands, UserController};
pub use error::{ObservableError, ObservableResult};
pub use observable::{Observable, Observer, Subscriber, Subscribers};
pub use renderer::Renderer;
pub use score::Score;
pub use user::User;
pub use view::{
    ScoreEditor, ScoreEntry, ScoreLabel, ScoreUpdater, ScoreView, UserEditor, UserLabel, UserView,
};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
