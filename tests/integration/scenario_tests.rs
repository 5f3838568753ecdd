use mockall::predicate::eq;
use useful_mvc::{Observable, Score, ScoreController, User, UserController};

use super::{observe_score, observe_user, MockScoreListener, MockUserListener};

#[test]
fn given_a_score_of_three_when_incremented_should_notify_once_with_four() {
    let score = Score::new(3);
    let mut listener = MockScoreListener::new();
    listener
        .expect_on_score_changed()
        .with(eq(4))
        .times(1)
        .return_const(());
    observe_score(&score, listener);

    ScoreController::new(&score).increment();

    assert_eq!(score.value(), 4);
}

#[test]
fn given_an_empty_user_when_saved_through_controller_should_notify_once_with_all_fields() {
    let user = User::new();
    let mut listener = MockUserListener::new();
    listener
        .expect_on_user_saved()
        .with(
            eq(Some("Ada".to_string())),
            eq(Some("Lovelace".to_string())),
            eq(Some("ada@example.com".to_string())),
        )
        .times(1)
        .return_const(());
    observe_user(&user, listener);

    UserController::new(&user).save("Ada", "Lovelace", "ada@example.com");

    assert_eq!(user.firstname().as_deref(), Some("Ada"));
    assert_eq!(user.lastname().as_deref(), Some("Lovelace"));
    assert_eq!(user.email().as_deref(), Some("ada@example.com"));
}

#[test]
fn given_a_listener_unsubscribed_between_two_sets_should_only_see_the_first() {
    let score = Score::new(0);
    let mut listener = MockScoreListener::new();
    listener
        .expect_on_score_changed()
        .with(eq(7))
        .times(1)
        .return_const(());
    let subscriber = observe_score(&score, listener);

    score.set_value(7);
    score.unsubscribe(&subscriber).unwrap();
    score.set_value(8);

    assert_eq!(score.value(), 8);
}
