use super::*;
use crate::game::words::WORDS;

fn settings() -> Settings {
    Settings {
        round_duration: Duration::from_secs(10),
        panic_threshold: Duration::from_secs(3),
        seed: Some(99),
    }
}

fn started_round() -> RoundState {
    let mut state = RoundState::new(&settings());
    state.on_begin();
    state
}

#[test]
fn start_sets_duration_score_and_word() {
    let state = started_round();
    assert_eq!(state.remaining_time(), Duration::from_secs(10));
    assert_eq!(state.remaining_time_string(), "00:10");
    assert_eq!(state.score(), 0);
    assert!(WORDS.contains(&state.word()));
    assert_eq!(state.finish_signal(), None);
    assert_eq!(state.buzz_signal(), BuzzType::Start);
}

#[test]
fn score_tracks_correct_and_skip() {
    let mut state = started_round();
    state.on_correct();
    state.on_correct();
    state.on_correct();
    state.on_skip();
    assert_eq!(state.score(), 2);
}

#[test]
fn score_equals_correct_minus_skip() {
    let mut state = started_round();
    let actions = [true, false, false, true, false, false, false, true, false, false];
    let mut expected = 0;
    for is_correct in actions.iter() {
        if *is_correct {
            state.on_correct();
            expected += 1;
        } else {
            state.on_skip();
            expected -= 1;
        }
        assert_eq!(state.score(), expected);
    }
    assert!(state.score() < 0);
}

#[test]
fn every_action_advances_the_word() {
    let mut state = started_round();
    let mut seen = vec![state.word().to_owned()];
    for i in 0..WORDS.len() - 1 {
        if i % 2 == 0 {
            state.on_correct();
        } else {
            state.on_skip();
        }
        assert!(!seen.contains(&state.word().to_owned()));
        seen.push(state.word().to_owned());
    }
}

#[test]
fn advancing_past_the_list_reshuffles() {
    let mut state = started_round();
    for _ in 0..WORDS.len() * 2 + 3 {
        state.advance_word();
        assert!(!state.word().is_empty());
    }
    assert!(state.words.shuffle_count() > 2);
}

#[test]
fn correct_requests_a_buzz() {
    let mut state = started_round();
    state.acknowledge_buzz();
    assert_eq!(state.buzz_signal(), BuzzType::NoBuzz);
    state.on_correct();
    assert_eq!(state.buzz_signal(), BuzzType::Correct);
    assert_eq!(state.acknowledge_buzz(), Some(BuzzType::Correct));
    assert_eq!(state.buzz_signal(), BuzzType::NoBuzz);
}

#[test]
fn skip_does_not_buzz() {
    let mut state = started_round();
    state.acknowledge_buzz();
    state.on_skip();
    assert_eq!(state.buzz_signal(), BuzzType::NoBuzz);
}

#[test]
fn finishes_after_ten_ticks() {
    let mut state = started_round();
    for _ in 0..9 {
        state.countdown_tick();
        assert_eq!(state.finish_signal(), None);
    }
    state.countdown_tick();
    assert_eq!(state.remaining_time(), DONE);
    assert_eq!(state.finish_signal(), Some(0));
    assert!(state.is_over());
    assert_eq!(state.acknowledge_finish(), Some(0));
    assert_eq!(state.finish_signal(), None);
}

#[test]
fn finish_carries_final_score() {
    let mut state = started_round();
    state.on_correct();
    state.on_correct();
    state.on_tick(Duration::from_secs(10));
    assert_eq!(state.finish_signal(), Some(2));
    assert_eq!(state.buzz_signal(), BuzzType::GameOver);
}

#[test]
fn finish_never_refires_without_new_round() {
    let mut state = started_round();
    state.on_tick(Duration::from_secs(10));
    assert_eq!(state.acknowledge_finish(), Some(0));
    state.on_tick(Duration::from_secs(30));
    state.countdown_tick();
    assert_eq!(state.finish_signal(), None);
    assert_eq!(state.acknowledge_finish(), None);
}

#[test]
fn actions_after_finish_are_ignored() {
    let mut state = started_round();
    state.on_correct();
    state.on_tick(Duration::from_secs(10));
    let word = state.word().to_owned();
    state.on_correct();
    state.on_skip();
    assert_eq!(state.score(), 1);
    assert_eq!(state.word(), word);
    assert_eq!(state.finish_signal(), Some(1));
}

#[test]
fn ticks_at_one_second_resolution() {
    let mut state = started_round();
    state.on_tick(Duration::from_millis(999));
    assert_eq!(state.remaining_time(), Duration::from_secs(10));
    state.on_tick(Duration::from_millis(1));
    assert_eq!(state.remaining_time(), Duration::from_secs(9));
    state.on_tick(Duration::from_millis(2500));
    assert_eq!(state.remaining_time(), Duration::from_secs(7));
}

#[test]
fn panics_near_the_end() {
    let mut state = started_round();
    state.acknowledge_buzz();
    for _ in 0..6 {
        state.countdown_tick();
    }
    assert_eq!(state.remaining_time(), Duration::from_secs(4));
    assert_eq!(state.buzz_signal(), BuzzType::NoBuzz);
    state.countdown_tick();
    assert_eq!(state.buzz_signal(), BuzzType::CountdownPanic);
}

#[test]
fn restart_resets_previous_round() {
    let mut state = started_round();
    state.on_skip();
    state.on_skip();
    state.on_tick(Duration::from_secs(10));
    assert_eq!(state.finish_signal(), Some(-2));

    state.start_round();
    assert_eq!(state.remaining_time(), Duration::from_secs(10));
    assert_eq!(state.score(), 0);
    assert_eq!(state.finish_signal(), None);
    assert!(!state.is_over());
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut settings = settings();
    settings.round_duration = Duration::from_secs(0);
    let mut state = RoundState::new(&settings);
    state.on_begin();
    assert_eq!(state.finish_signal(), Some(0));
}

#[test]
fn end_cancels_countdown() {
    let mut state = started_round();
    state.on_end();
    state.on_tick(Duration::from_secs(20));
    assert_eq!(state.remaining_time(), Duration::from_secs(10));
    assert_eq!(state.finish_signal(), None);
}
