//! Views read the models; action surfaces only talk to controllers.
//!
//! ```text
//! cargo run --example with_controllers -- 3
//! ```

mod console;

use console::Console;
use useful_mvc::{
    Score, ScoreController, ScoreEditor, ScoreUpdater, ScoreView, User, UserController,
    UserEditor, UserView,
};

fn main() -> std::io::Result<()> {
    console::init_logging();

    let score = Score::new(console::seed());
    let user = User::new();

    // One controller per model, shared by every action surface on it.
    let score_controller = ScoreController::new(&score);
    let editor = ScoreEditor::new(&score, score_controller, Console::new("score entry"));
    let _score_view = ScoreView::new(&score, Console::new("score"));
    let updater = ScoreUpdater::new(score_controller);

    let user_controller = UserController::new(&user);
    let _user_view = UserView::new(&user, Console::new("user"));
    let mut form = UserEditor::new(user_controller);

    console::run(&editor, &updater, &mut form)
}
