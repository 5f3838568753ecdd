//! Views and action surfaces bound straight to the models.
//!
//! ```text
//! cargo run --example without_controllers -- 3
//! ```

mod console;

use console::Console;
use useful_mvc::{Score, ScoreEditor, ScoreUpdater, ScoreView, User, UserEditor, UserView};

fn main() -> std::io::Result<()> {
    console::init_logging();

    let score = Score::new(console::seed());
    let user = User::new();

    // Every surface gets the model itself.
    let editor = ScoreEditor::new(&score, &score, Console::new("score entry"));
    let _score_view = ScoreView::new(&score, Console::new("score"));
    let updater = ScoreUpdater::new(&score);

    let _user_view = UserView::new(&user, Console::new("user"));
    let mut form = UserEditor::new(&user);

    console::run(&editor, &updater, &mut form)
}
