mod common;

use connector_guide::catalog::{Gender, Orientation};
use connector_guide::wizard::{
    AnswersPatch, ApplicationType, FetchOutcome, OrientationChoice, PoleCount, ResultSet, Role,
    Step, Transition, WizardState,
};
use pretty_assertions::assert_eq;

fn answer_first_three(state: &mut WizardState) {
    state.update_answers(AnswersPatch::application_type(ApplicationType::WireToWire));
    assert_eq!(state.advance(), Transition::Moved(Step::PoleCount));
    state.update_answers(AnswersPatch::pole_count(PoleCount::try_from(4).unwrap()));
    assert_eq!(state.advance(), Transition::Moved(Step::Orientation));
    state.update_answers(AnswersPatch::orientation(OrientationChoice::Horizontal));
    assert_eq!(state.advance(), Transition::Moved(Step::Refinements));
}

fn outcome_with_socket() -> FetchOutcome {
    let mut results = ResultSet::default();
    results.set(
        Role::Socket,
        vec![common::record(1, "CS-4F", Gender::Female, 4, Orientation::Horizontal)],
    );
    FetchOutcome {
        results,
        failed_roles: Vec::new(),
    }
}

fn start_fetch(state: &mut WizardState) -> u64 {
    match state.advance() {
        Transition::Fetch(ticket) => ticket.generation,
        other => panic!("Expected a fetch ticket, got {:?}", other),
    }
}

#[test]
fn test_next_is_disabled_until_the_step_is_answered() {
    let mut state = WizardState::new();
    assert_eq!(state.step(), Step::ApplicationType);
    assert!(!state.can_advance());
    assert_eq!(state.advance(), Transition::Blocked);
    assert_eq!(state.step(), Step::ApplicationType);

    state.update_answers(AnswersPatch::application_type(ApplicationType::BoardToBoard));
    assert!(state.can_advance());
    assert_eq!(state.advance(), Transition::Moved(Step::PoleCount));
    assert!(!state.can_advance());
}

#[test]
fn test_refinements_are_optional() {
    let mut state = WizardState::new();
    answer_first_three(&mut state);

    assert!(state.can_advance());
    assert!(!state.answers().special_version);
    start_fetch(&mut state);
    assert!(state.is_loading());
    assert_eq!(state.step(), Step::Refinements);
}

#[test]
fn test_fetch_completion_moves_to_results() {
    let mut state = WizardState::new();
    answer_first_three(&mut state);
    let generation = start_fetch(&mut state);

    assert!(state.complete_fetch(generation, outcome_with_socket()));
    assert_eq!(state.step(), Step::Results);
    assert!(!state.is_loading());
    assert_eq!(state.results().sockets.len(), 1);
    assert_eq!(state.advance(), Transition::Blocked);
}

#[test]
fn test_second_advance_while_loading_is_blocked() {
    let mut state = WizardState::new();
    answer_first_three(&mut state);
    start_fetch(&mut state);

    assert!(!state.can_advance());
    assert_eq!(state.advance(), Transition::Blocked);
}

#[test]
fn test_retreat_discards_in_flight_fetch() {
    let mut state = WizardState::new();
    answer_first_three(&mut state);
    let generation = start_fetch(&mut state);

    assert_eq!(state.retreat(), Step::Orientation);
    assert!(!state.is_loading());

    assert!(!state.complete_fetch(generation, outcome_with_socket()));
    assert_eq!(state.step(), Step::Orientation);
    assert!(state.results().is_empty());
}

#[test]
fn test_newer_fetch_wins_over_older_one() {
    let mut state = WizardState::new();
    answer_first_three(&mut state);
    let first = start_fetch(&mut state);

    state.retreat();
    state.advance();
    let second = start_fetch(&mut state);
    assert!(second > first);

    assert!(!state.complete_fetch(first, outcome_with_socket()));
    assert!(state.is_loading());
    assert!(state.complete_fetch(second, FetchOutcome::default()));
    assert!(state.results().is_empty());
}

#[test]
fn test_reset_clears_answers_results_and_pending_fetch() {
    let mut state = WizardState::new();
    answer_first_three(&mut state);
    state.update_answers(AnswersPatch {
        special_version: Some(true),
        ..Default::default()
    });
    let generation = start_fetch(&mut state);

    state.reset();
    assert_eq!(state.step(), Step::ApplicationType);
    assert_eq!(state.answers().application_type, None);
    assert!(!state.answers().special_version);
    assert!(!state.is_loading());
    assert!(!state.complete_fetch(generation, outcome_with_socket()));
    assert_eq!(state.step(), Step::ApplicationType);
}

#[test]
fn test_retreat_keeps_answers() {
    let mut state = WizardState::new();
    answer_first_three(&mut state);

    assert_eq!(state.retreat(), Step::Orientation);
    assert_eq!(state.retreat(), Step::PoleCount);
    assert_eq!(state.answers().orientation, Some(OrientationChoice::Horizontal));
    assert!(state.can_advance());

    state.retreat();
    assert_eq!(state.retreat(), Step::ApplicationType);
    assert!(!state.can_retreat());
}

#[test]
fn test_empty_patch_changes_nothing() {
    let mut state = WizardState::new();

    // Unanswered step 1: still blocked
    state.update_answers(AnswersPatch::default());
    assert_eq!(state.step(), Step::ApplicationType);
    assert!(!state.can_advance());

    state.update_answers(AnswersPatch::application_type(ApplicationType::WireToBoard));
    let before = state.answers().clone();
    let patch = AnswersPatch::default();
    assert!(patch.is_empty());
    state.update_answers(patch);
    assert_eq!(state.answers(), &before);
    assert_eq!(state.step(), Step::ApplicationType);
    assert!(state.can_advance());

    // Step 3, before and after answering
    state.advance();
    state.update_answers(AnswersPatch::pole_count(PoleCount::try_from(6).unwrap()));
    state.advance();
    assert_eq!(state.step(), Step::Orientation);
    state.update_answers(AnswersPatch::default());
    assert_eq!(state.step(), Step::Orientation);
    assert!(!state.can_advance());

    state.update_answers(AnswersPatch::orientation(OrientationChoice::Either));
    let before = state.answers().clone();
    state.update_answers(AnswersPatch::default());
    assert_eq!(state.answers(), &before);
    assert_eq!(state.step(), Step::Orientation);
    assert!(state.can_advance());
}

#[test]
fn test_later_patch_overwrites_earlier_value() {
    let mut state = WizardState::new();
    state.update_answers(AnswersPatch::application_type(ApplicationType::WireToBoard));
    state.update_answers(AnswersPatch::application_type(ApplicationType::WireToWire));
    assert_eq!(
        state.answers().application_type,
        Some(ApplicationType::WireToWire)
    );
}
