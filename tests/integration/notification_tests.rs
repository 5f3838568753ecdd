use mockall::predicate::eq;
use mockall::Sequence;
use useful_mvc::{Observable, ObservableError, Score, ScoreController, User};

use super::{observe_score, observe_user, MockScoreListener, MockUserListener};

#[test]
fn given_two_listeners_when_value_set_should_notify_both_once_in_subscription_order() {
    let score = Score::new(0);
    let mut seq = Sequence::new();

    let mut first = MockScoreListener::new();
    first
        .expect_on_score_changed()
        .with(eq(5))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let mut second = MockScoreListener::new();
    second
        .expect_on_score_changed()
        .with(eq(5))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    observe_score(&score, first);
    observe_score(&score, second);

    score.set_value(5);
}

#[test]
fn given_a_listener_when_several_values_set_should_notify_once_per_value() {
    let score = Score::new(0);
    let mut listener = MockScoreListener::new();
    for n in [-3, 0, 99] {
        listener
            .expect_on_score_changed()
            .with(eq(n))
            .times(1)
            .return_const(());
    }
    observe_score(&score, listener);

    score.set_value(-3);
    score.set_value(0);
    score.set_value(99);
}

#[test]
fn given_a_controller_when_incremented_and_decremented_should_notify_each_step() {
    let score = Score::new(7);
    let mut seq = Sequence::new();
    let mut listener = MockScoreListener::new();
    listener
        .expect_on_score_changed()
        .with(eq(8))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    listener
        .expect_on_score_changed()
        .with(eq(7))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    observe_score(&score, listener);

    let controller = ScoreController::new(&score);
    controller.increment();
    controller.decrement();

    assert_eq!(score.value(), 7);
}

#[test]
fn given_field_setters_only_should_never_notify() {
    let user = User::new();
    let mut listener = MockUserListener::new();
    listener.expect_on_user_saved().never();
    observe_user(&user, listener);

    user.set_firstname("Ada");
    user.set_lastname("Lovelace");
    user.set_email("ada@example.com");
}

#[test]
fn given_staged_fields_when_saved_should_notify_once_with_every_field() {
    let user = User::new();
    let mut listener = MockUserListener::new();
    listener
        .expect_on_user_saved()
        .with(
            eq(Some("Grace".to_string())),
            eq(Some("Hopper".to_string())),
            eq(Some("grace@example.com".to_string())),
        )
        .times(1)
        .return_const(());
    observe_user(&user, listener);

    user.set_email("grace@example.com");
    user.set_firstname("Grace");
    user.set_lastname("Hopper");
    user.save();
}

#[test]
fn given_an_unsaved_user_when_saved_should_report_unset_fields() {
    let user = User::new();
    let mut listener = MockUserListener::new();
    listener
        .expect_on_user_saved()
        .with(eq(None), eq(None), eq(None))
        .times(1)
        .return_const(());
    observe_user(&user, listener);

    user.save();
}

#[test]
fn given_an_unsubscribed_listener_when_unsubscribed_again_should_fail_with_not_found() {
    let score = Score::new(0);
    let mut listener = MockScoreListener::new();
    listener.expect_on_score_changed().never();
    let subscriber = observe_score(&score, listener);

    assert_eq!(score.unsubscribe(&subscriber), Ok(()));
    assert_eq!(
        score.unsubscribe(&subscriber),
        Err(ObservableError::NotFound)
    );

    score.set_value(1);
    assert!(!score.is_observed());
}
