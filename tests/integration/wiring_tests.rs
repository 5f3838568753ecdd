use useful_mvc::{
    Score, ScoreController, ScoreEditor, ScoreEntry, ScoreLabel, ScoreUpdater, ScoreView,
    TestRenderer, User, UserController, UserEditor, UserLabel, UserView,
};

struct ScoreScreen {
    labels: TestRenderer<ScoreLabel>,
    entries: TestRenderer<ScoreEntry>,
}

fn texts<P>(renderer: &TestRenderer<P>, text: fn(&P) -> &str) -> Vec<String>
where
    P: Send + 'static,
{
    renderer.with_renders(|renders| renders.iter().map(|props| text(props).to_string()).collect())
}

impl ScoreScreen {
    fn new() -> Self {
        Self {
            labels: TestRenderer::new(),
            entries: TestRenderer::new(),
        }
    }

    fn label_texts(&self) -> Vec<String> {
        texts(&self.labels, |label| &label.text)
    }

    fn entry_texts(&self) -> Vec<String> {
        texts(&self.entries, |entry| &entry.text)
    }
}

#[test]
fn given_views_wired_directly_to_the_model_should_stay_in_sync() {
    let score = Score::new(3);
    let screen = ScoreScreen::new();
    let editor = ScoreEditor::new(&score, &score, screen.entries.clone());
    let _view = ScoreView::new(&score, screen.labels.clone());
    let updater = ScoreUpdater::new(&score);

    updater.increment();
    assert!(editor.commit("12"));
    assert!(!editor.commit("twelve"));
    updater.decrement();

    assert_eq!(score.value(), 11);
    assert_eq!(screen.label_texts(), vec!["3", "4", "12", "11"]);
    assert_eq!(screen.entry_texts(), vec!["3", "4", "12", "11"]);
}

#[test]
fn given_views_wired_through_a_controller_should_stay_in_sync() {
    let score = Score::new(3);
    let controller = ScoreController::new(&score);
    let screen = ScoreScreen::new();
    let editor = ScoreEditor::new(&score, controller, screen.entries.clone());
    let _view = ScoreView::new(&score, screen.labels.clone());
    let updater = ScoreUpdater::new(controller);

    updater.increment();
    assert!(editor.commit("12"));
    assert!(!editor.commit("twelve"));
    updater.decrement();

    assert_eq!(score.value(), 11);
    assert_eq!(screen.label_texts(), vec!["3", "4", "12", "11"]);
    assert_eq!(screen.entry_texts(), vec!["3", "4", "12", "11"]);
}

#[test]
fn given_a_user_form_wired_directly_should_render_each_save() {
    let user = User::new();
    let labels = TestRenderer::<UserLabel>::new();
    let _view = UserView::new(&user, labels.clone());
    let mut form = UserEditor::new(&user);

    form.set_firstname("Ada");
    form.set_lastname("Lovelace");
    form.set_email("ada@example.com");
    assert_eq!(labels.count(), 0);
    form.submit();

    form.set_firstname("Grace");
    form.set_lastname("Hopper");
    form.set_email("grace@example.com");
    form.submit();

    assert_eq!(
        texts(&labels, |label| &label.text),
        vec!["Ada LOVELACE (ada@example.com)", "Grace HOPPER (grace@example.com)"]
    );
}

#[test]
fn given_a_user_form_wired_through_a_controller_should_render_each_save() {
    let user = User::new();
    let labels = TestRenderer::<UserLabel>::new();
    let view = UserView::new(&user, labels.clone());
    let mut form = UserEditor::new(UserController::new(&user));

    form.set_firstname("Ada");
    form.set_lastname("Lovelace");
    form.set_email("ada@example.com");
    form.submit();

    view.detach().unwrap();
    form.submit();

    assert_eq!(
        texts(&labels, |label| &label.text),
        vec!["Ada LOVELACE (ada@example.com)"]
    );
    assert_eq!(user.firstname().as_deref(), Some(""));
}
