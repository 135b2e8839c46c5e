use std::env;

use learning_portal::config::{Config, LogFormat};
use learning_portal::error::Error;
use learning_portal::services::grading_service::Band;
use learning_portal::services::session_service::{SessionState, SubmitOutcome};
use learning_portal::Portal;
use uuid::Uuid;

fn portal() -> Portal {
    learning_portal::init_tracing(LogFormat::Text);
    let dir = env::temp_dir().join(format!("portal-quiz-{}", Uuid::new_v4()));
    Portal::new(&Config::new(dir)).expect("portal")
}

fn run(portal: &Portal, quiz_id: &str, requester: &str, picks: &[usize]) -> SubmitOutcome {
    let mut session = portal.new_session();
    session.start(quiz_id, Some(requester)).expect("start");
    let mut last = None;
    for &pick in picks {
        last = Some(session.submit_answer(pick).expect("submit"));
    }
    last.expect("at least one answer")
}

#[test]
fn start_shows_first_question() {
    let portal = portal();
    for (id, quiz) in portal.catalog.list() {
        let mut session = portal.new_session();
        session.start(id, Some("requester")).expect("start");
        assert_eq!(session.current_question().expect("question"), &quiz.questions[0]);
        assert_eq!(session.position(), 0);
    }
}

#[test]
fn basic_concepts_perfect_run() {
    let portal = portal();
    let outcome = run(&portal, "basic-concepts", "u-1", &[1, 3, 1, 1, 1]);

    let SubmitOutcome::Finished(result) = outcome else {
        panic!("expected finished outcome");
    };
    assert_eq!(result.score, 5);
    assert_eq!(result.total, 5);
    assert_eq!(result.percentage, 100);
    assert_eq!(result.band(), Band::Strong);
}

#[test]
fn basic_concepts_one_wrong_is_still_strong() {
    let portal = portal();
    let outcome = run(&portal, "basic-concepts", "u-1", &[0, 3, 1, 1, 1]);

    let SubmitOutcome::Finished(result) = outcome else {
        panic!("expected finished outcome");
    };
    assert_eq!((result.score, result.percentage), (4, 80));
    assert_eq!(result.band().label(), "strong");
}

#[test]
fn completion_takes_exactly_question_count_submissions() {
    let portal = portal();
    let mut session = portal.new_session();
    session.start("indian-constitution", Some("u-2")).expect("start");

    for i in 0..4 {
        let outcome = session.submit_answer(0).expect("submit");
        assert!(matches!(outcome, SubmitOutcome::Advanced(_)), "submission {} finished early", i);
    }
    assert!(matches!(session.submit_answer(0).expect("submit"), SubmitOutcome::Finished(_)));
    assert_eq!(session.position(), 5);
}

#[test]
fn scoring_matches_number_of_correct_picks() {
    let portal = portal();
    let correct = [1usize, 2, 1, 2, 1];

    for k in 0..=correct.len() {
        let picks: Vec<usize> = correct
            .iter()
            .enumerate()
            .map(|(i, &c)| if i < k { c } else { (c + 1) % 4 })
            .collect();
        let SubmitOutcome::Finished(result) = run(&portal, "indian-constitution", "u-3", &picks) else {
            panic!("expected finished outcome");
        };
        assert_eq!(result.score as usize, k);
        assert_eq!(result.percentage as usize, (100 * k + 2) / 5);
    }
}

#[test]
fn restart_resets_position_and_answers() {
    let portal = portal();
    let mut session = portal.new_session();
    session.start("civil-rights", Some("u-4")).expect("start");
    session.submit_answer(1).expect("submit");
    session.submit_answer(1).expect("submit");
    assert_eq!(session.position(), 2);

    session.start("civil-rights", Some("u-4")).expect("restart");
    assert_eq!(session.position(), 0);
    assert!(session.answers().is_empty());

    for _ in 0..5 {
        session.submit_answer(1).expect("submit");
    }
    assert!(matches!(session.state(), SessionState::Completed(_)));

    session.retake().expect("retake");
    assert_eq!(session.state(), &SessionState::InProgress { position: 0 });
    assert_eq!(session.quiz_id(), Some("civil-rights"));
    assert_eq!(session.requester_id(), Some("u-4"));
}

#[test]
fn one_past_last_option_is_rejected() {
    let portal = portal();
    let mut session = portal.new_session();
    session.start("social-justice", Some("u-5")).expect("start");
    let len = session.current_question().expect("question").options.len();

    let err = session.submit_answer(len).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.is_client_error());
    assert_eq!(session.position(), 0);
}

#[test]
fn answering_after_completion_is_rejected() {
    let portal = portal();
    let mut session = portal.new_session();
    session.start("modern-challenges", Some("u-6")).expect("start");
    for _ in 0..5 {
        session.submit_answer(1).expect("submit");
    }
    let before = session.result().cloned().expect("result");
    let answers_before = session.answers().to_vec();

    assert!(matches!(session.submit_answer(1), Err(Error::IllegalState(_))));
    assert!(matches!(session.current_question(), Err(Error::IllegalState(_))));
    assert_eq!(session.result(), Some(&before));
    assert_eq!(session.answers(), answers_before.as_slice());
}

#[test]
fn missing_requester_keeps_session_not_started() {
    let portal = portal();
    let mut session = portal.new_session();

    let err = session.start("basic-concepts", None).unwrap_err();
    assert!(matches!(err, Error::AuthenticationRequired(_)));
    assert_eq!(session.state(), &SessionState::NotStarted);
}

#[test]
fn unknown_quiz_is_not_found() {
    let portal = portal();
    let mut session = portal.new_session();
    assert!(matches!(
        session.start("no-such-quiz", Some("u-7")),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn completed_results_are_appended_per_requester() {
    let portal = portal();
    run(&portal, "basic-concepts", "u-8", &[1, 3, 1, 1, 1]);
    run(&portal, "basic-concepts", "u-8", &[0, 0, 0, 0, 0]);
    run(&portal, "civil-rights", "u-9", &[1, 1, 1, 1, 1]);

    let mine = portal.results.results_for("u-8").expect("results");
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].percentage, 100);
    assert_eq!(mine[1].score, 0);
    assert_eq!(mine[1].band(), Band::NeedsReview);

    let theirs = portal.results.results_for("u-9").expect("results");
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].quiz_id, "civil-rights");
    assert!(portal.results.results_for("nobody").expect("results").is_empty());
}
