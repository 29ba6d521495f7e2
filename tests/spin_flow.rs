#[allow(dead_code, reason = "harness helpers are shared by several test binaries")]
mod harness;

use std::collections::HashSet;
use std::time::Duration;

use harness::fixtures::{SPIN_DURATION, fixed_instant, seeded_state};

use gacha::app::action::Action;
use gacha::app::effect::Effect;
use gacha::app::focused_field::FocusedField;
use gacha::app::reducer::reduce;
use gacha::app::render_schedule::next_animation_deadline;
use gacha::app::spinner::SpinnerPhase;

fn resolutions(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::NotifyResolved { .. }))
        .count()
}

#[test]
fn typed_list_expands_then_spins_to_a_listed_winner() {
    let now = fixed_instant();
    let mut state = seeded_state("");

    for c in "cat".chars() {
        reduce(&mut state, Action::Input(c), now);
    }
    reduce(&mut state, Action::NewLine, now);
    reduce(&mut state, Action::Paste("dog\r\nowl".to_string()), now);
    reduce(&mut state, Action::FocusNext, now);
    assert_eq!(state.focused_field, FocusedField::Count);
    reduce(&mut state, Action::Input('7'), now);

    reduce(&mut state, Action::Expand, now);

    let list = state.candidate_list();
    assert_eq!(list.len(), 7);
    let unique: HashSet<&str> = list.as_slice().iter().map(String::as_str).collect();
    assert_eq!(unique, HashSet::from(["cat", "dog", "owl"]));

    let effects = reduce(&mut state, Action::Spin, now);
    assert_eq!(effects, vec![Effect::NotifyRunningChange(true)]);

    let effects = reduce(&mut state, Action::Tick, now + SPIN_DURATION);
    assert_eq!(resolutions(&effects), 1);
    let winner = state.spinner.winner().unwrap();
    assert!(unique.contains(winner));
}

#[test]
fn restart_mid_spin_resolves_once() {
    let start = fixed_instant();
    let mut state = seeded_state("A\nB\nC");
    let mut total = Vec::new();

    total.extend(reduce(&mut state, Action::Spin, start));
    total.extend(reduce(&mut state, Action::Spin, start + Duration::from_millis(10)));

    for step in 1..=30 {
        total.extend(reduce(
            &mut state,
            Action::Tick,
            start + Duration::from_millis(step * 10),
        ));
    }

    assert_eq!(resolutions(&total), 1);
    assert_eq!(
        total
            .iter()
            .filter(|e| **e == Effect::NotifyRunningChange(true))
            .count(),
        1
    );
    assert_eq!(state.spinner.phase(), SpinnerPhase::Resolved);
}

#[test]
fn restart_pushes_the_deadline_back() {
    let start = fixed_instant();
    let mut state = seeded_state("A\nB");

    reduce(&mut state, Action::Spin, start);
    reduce(&mut state, Action::Spin, start + Duration::from_millis(50));
    let effects = reduce(&mut state, Action::Tick, start + SPIN_DURATION);

    assert_eq!(resolutions(&effects), 0);
    assert!(state.spinner.is_running());
}

#[test]
fn stop_then_late_ticks_never_resolve_again() {
    let start = fixed_instant();
    let mut state = seeded_state("A\nB");

    reduce(&mut state, Action::Spin, start);
    let stopped = reduce(&mut state, Action::StopSpin, start + Duration::from_millis(20));
    let stopped_again = reduce(&mut state, Action::StopSpin, start + Duration::from_millis(30));
    let late = reduce(&mut state, Action::Tick, start + Duration::from_secs(1));

    assert_eq!(resolutions(&stopped), 1);
    assert_eq!(resolutions(&stopped_again), 0);
    assert_eq!(resolutions(&late), 0);
    assert!(next_animation_deadline(&state, start).is_none());
}

#[test]
fn reset_dedupes_and_clears_winner() {
    let now = fixed_instant();
    let mut state = seeded_state("b\na\nb\na");

    reduce(&mut state, Action::Spin, now);
    reduce(&mut state, Action::Tick, now + SPIN_DURATION);
    assert!(state.spinner.winner().is_some());

    reduce(&mut state, Action::Reset, now + SPIN_DURATION);

    assert_eq!(state.candidates.as_str(), "b\na");
    assert!(state.spinner.winner().is_none());
    assert_eq!(state.spinner.phase(), SpinnerPhase::Idle);
}

#[test]
fn spin_on_empty_list_resolves_without_winner() {
    let now = fixed_instant();
    let mut state = seeded_state("");

    reduce(&mut state, Action::Spin, now);
    let effects = reduce(&mut state, Action::Tick, now + SPIN_DURATION);

    assert!(effects.contains(&Effect::NotifyResolved { winner: None }));
    assert!(state.spinner.displayed().is_none());
}
