use crate::notation::{Token, Trace};
use crate::operator::{Operator, OperatorError, OperatorSet};
use crate::search::{Enumerator, SearchState};

fn tokens(trace: &Trace) -> String {
    format!("{}", trace)
}

#[test]
fn test_seed_preloads_two_operands() {
    let state = SearchState::seed(&[8.0, 1.0, 1.0, 5.0]);
    assert_eq!(state.pending(), &[8.0, 1.0]);
    assert_eq!(state.remaining(), &[5.0, 1.0]);
    assert_eq!(tokens(state.trace()), "8 1");
}

#[test]
fn test_push_next_consumes_left_to_right() {
    let state = SearchState::seed(&[1.0, 2.0, 3.0, 4.0]);
    let next = state.push_next();
    assert!(next.is_some());
    if let Some(next) = next {
        assert_eq!(next.pending(), &[1.0, 2.0, 3.0]);
        assert_eq!(next.remaining(), &[4.0]);
        // the parent state is untouched
        assert_eq!(state.pending(), &[1.0, 2.0]);
        assert_eq!(state.remaining(), &[4.0, 3.0]);
    }

    let exhausted = SearchState::seed(&[1.0, 2.0]);
    assert!(exhausted.push_next().is_none());
}

#[test]
fn test_apply_uses_lifo_order() {
    let state = SearchState::seed(&[1.0, 5.0]);
    let next = state.apply(Operator::Sub);
    assert!(matches!(next, Some(Ok(_))));
    if let Some(Ok(next)) = next {
        assert_eq!(next.pending(), &[-4.0]);
        assert_eq!(tokens(next.trace()), "1 5 -");
        assert_eq!(next.result(), Some(-4.0));
    }
}

#[test]
fn test_apply_rejects_zero_divisor() {
    let state = SearchState::seed(&[3.0, 0.0]);
    assert_eq!(
        state.apply(Operator::Div),
        Some(Err(OperatorError::DivisionByZero))
    );
}

#[test]
fn test_apply_needs_two_pending_values() {
    let state = SearchState::seed(&[3.0]);
    assert_eq!(state.apply(Operator::Add), None);
}

#[test]
fn test_enumerate_two_operands() {
    let operators = OperatorSet::new(true);
    let mut enumerator = Enumerator::new(&operators, 4.0, 0.0);
    let results = enumerator.enumerate(&[2.0, 2.0]);
    let rendered: Vec<String> = results.iter().map(tokens).collect();
    assert_eq!(rendered, vec!["2 2 +", "2 2 *", "2 2 ^"]);
}

#[test]
fn test_enumerate_finds_eight_over_one_minus_fifth() {
    let operators = OperatorSet::default();
    let mut enumerator = Enumerator::new(&operators, 10.0, 1e-9);
    let results = enumerator.enumerate(&[8.0, 1.0, 1.0, 5.0]);
    let expected = Trace::from_tokens(vec![
        Token::Operand(8.0),
        Token::Operand(1.0),
        Token::Operand(1.0),
        Token::Operand(5.0),
        Token::Operator(Operator::Div),
        Token::Operator(Operator::Sub),
        Token::Operator(Operator::Div),
    ]);
    assert!(results.contains(&expected));
}

#[test]
fn test_enumerate_results_are_valid_solutions() {
    let operators = OperatorSet::default();
    let mut enumerator = Enumerator::new(&operators, 24.0, 1e-9);
    let results = enumerator.enumerate(&[6.0, 1.0, 3.0, 4.0]);
    assert!(!results.is_empty());

    for trace in &results {
        assert_eq!(trace.operands(), vec![6.0, 1.0, 3.0, 4.0]);
        assert_eq!(trace.operator_count(), 3);
        let value = trace.evaluate();
        assert!(value.is_ok());
        if let Ok(value) = value {
            assert!((value - 24.0).abs() < 1e-9);
        }
    }
    assert_eq!(enumerator.stats().solutions, results.len());
}

#[test]
fn test_enumerate_is_deterministic() {
    let operators = OperatorSet::default();
    let first = Enumerator::new(&operators, 10.0, 1e-9).enumerate(&[1.0, 2.0, 3.0, 4.0]);
    let second = Enumerator::new(&operators, 10.0, 1e-9).enumerate(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_enumerate_no_solution() {
    let operators = OperatorSet::default();
    let mut enumerator = Enumerator::new(&operators, 10.0, 1e-9);
    assert!(enumerator.enumerate(&[1.0, 1.0, 1.0, 1.0]).is_empty());
    assert!(enumerator.stats().nodes > 0);
}

#[test]
fn test_enumerate_prunes_division_by_zero() {
    let operators = OperatorSet::default();
    let mut enumerator = Enumerator::new(&operators, 0.0, 0.0);
    let results = enumerator.enumerate(&[5.0, 0.0]);
    let rendered: Vec<String> = results.iter().map(tokens).collect();
    assert_eq!(rendered, vec!["5 0 *"]);
    assert_eq!(enumerator.stats().pruned, 1);
}

#[test]
fn test_enumerate_fewer_than_two_operands() {
    let operators = OperatorSet::default();
    let mut enumerator = Enumerator::new(&operators, 7.0, 0.0);
    assert!(enumerator.enumerate(&[7.0]).is_empty());
    assert!(enumerator.enumerate(&[]).is_empty());
}

#[test]
fn test_stats_reset_between_orderings() {
    let operators = OperatorSet::default();
    let mut enumerator = Enumerator::new(&operators, 10.0, 1e-9);
    let first = enumerator.enumerate(&[1.0, 2.0, 3.0, 4.0]);
    let first_stats = enumerator.stats();
    let second = enumerator.enumerate(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(first, second);
    assert_eq!(enumerator.stats(), first_stats);
    assert_eq!(first_stats.solutions, first.len());
}
