use super::*;
use pretty_assertions::assert_eq;

/// Feed `def name` and return the tracker poised before `(`.
fn after_def_name() -> SignatureTracker {
    let mut tracker = SignatureTracker::default();
    tracker.observe_token(Some(TokenHint::Def));
    tracker.observe_token(Some(TokenHint::Name));
    tracker
}

#[test]
fn starts_idle() {
    let tracker = SignatureTracker::default();
    assert_eq!(tracker.state(), Signature::Idle);
    assert_eq!(tracker.last_hint(), None);
}

#[test]
fn def_then_name_expects_open() {
    let tracker = after_def_name();
    assert_eq!(tracker.state(), Signature::ExpectOpenAfterName);
    assert_eq!(tracker.last_hint(), Some(TokenHint::Name));
}

#[test]
fn full_header_with_tuple_return() {
    // def f(a: uint256, b: address) -> (uint256, bool):
    let mut tracker = after_def_name();
    let mut roles = vec![tracker.observe_punct('(')];
    tracker.observe_token(Some(TokenHint::Name));
    roles.push(tracker.observe_punct(':'));
    tracker.observe_token(Some(TokenHint::Type));
    roles.push(tracker.observe_punct(','));
    tracker.observe_token(Some(TokenHint::Name));
    roles.push(tracker.observe_punct(':'));
    tracker.observe_token(Some(TokenHint::Type));
    roles.push(tracker.observe_punct(')'));
    assert_eq!(tracker.state(), Signature::AfterParameters);
    tracker.observe_token(Some(TokenHint::Returns));
    assert_eq!(tracker.state(), Signature::ExpectOpenAfterReturns);
    roles.push(tracker.observe_punct('('));
    tracker.observe_token(Some(TokenHint::Type));
    roles.push(tracker.observe_punct(','));
    tracker.observe_token(Some(TokenHint::Type));
    roles.push(tracker.observe_punct(')'));
    roles.push(tracker.observe_punct(':'));

    assert_eq!(
        roles,
        vec![
            PunctRole::ParameterOpen,
            PunctRole::Grouping,
            PunctRole::ParameterSeparator,
            PunctRole::Grouping,
            PunctRole::ParameterClose,
            PunctRole::ReturnOpen,
            PunctRole::ReturnSeparator,
            PunctRole::ReturnClose,
            PunctRole::Grouping,
        ]
    );
    assert_eq!(tracker.state(), Signature::Idle);
}

#[test]
fn single_return_type_goes_idle() {
    let mut tracker = after_def_name();
    tracker.observe_punct('(');
    tracker.observe_punct(')');
    tracker.observe_token(Some(TokenHint::Returns));
    tracker.observe_token(Some(TokenHint::Type));
    assert_eq!(tracker.state(), Signature::Idle);
    assert_eq!(tracker.observe_punct(':'), PunctRole::Grouping);
}

#[test]
fn nested_brackets_do_not_close_the_list() {
    // def f(a: HashMap[address, uint256], b: uint256 = max(1, 2))
    let mut tracker = after_def_name();
    tracker.observe_punct('(');
    tracker.observe_token(Some(TokenHint::Name));
    tracker.observe_punct(':');
    tracker.observe_token(Some(TokenHint::Type));
    assert_eq!(tracker.observe_punct('['), PunctRole::Grouping);
    tracker.observe_token(Some(TokenHint::Type));
    assert_eq!(tracker.observe_punct(','), PunctRole::Grouping);
    tracker.observe_token(Some(TokenHint::Type));
    assert_eq!(tracker.observe_punct(']'), PunctRole::Grouping);
    assert_eq!(tracker.observe_punct(','), PunctRole::ParameterSeparator);
    tracker.observe_token(None);
    tracker.observe_token(Some(TokenHint::Name));
    assert_eq!(tracker.observe_punct('('), PunctRole::Grouping);
    tracker.observe_token(None);
    tracker.observe_punct(',');
    tracker.observe_token(None);
    assert_eq!(tracker.observe_punct(')'), PunctRole::Grouping);
    assert_eq!(tracker.observe_punct(')'), PunctRole::ParameterClose);
}

#[test]
fn unexpected_punctuation_fails_soft() {
    let mut tracker = after_def_name();
    assert_eq!(tracker.observe_punct('['), PunctRole::Grouping);
    assert_eq!(tracker.state(), Signature::Idle);

    let mut tracker = after_def_name();
    tracker.observe_punct('(');
    assert_eq!(tracker.observe_punct(']'), PunctRole::Grouping);
    assert_eq!(tracker.state(), Signature::Idle);
}

#[test]
fn unexpected_token_after_name_fails_soft() {
    let mut tracker = after_def_name();
    tracker.observe_token(None);
    assert_eq!(tracker.state(), Signature::Idle);
    assert_eq!(tracker.observe_punct('('), PunctRole::Grouping);
}

#[test]
fn def_restarts_from_any_idle_like_state() {
    let mut tracker = SignatureTracker::default();
    tracker.observe_token(Some(TokenHint::Def));
    tracker.observe_token(Some(TokenHint::Def));
    assert_eq!(tracker.state(), Signature::ExpectName);
}

#[test]
fn conversion_call_after_type() {
    let mut tracker = SignatureTracker::default();
    tracker.observe_token(Some(TokenHint::Type));
    assert_eq!(tracker.observe_punct('('), PunctRole::ConversionOpen);
    assert_eq!(tracker.observe_punct('('), PunctRole::Grouping);
}

#[test]
fn returns_outside_header_is_ignored() {
    let mut tracker = SignatureTracker::default();
    tracker.observe_token(Some(TokenHint::Returns));
    assert_eq!(tracker.observe_punct('('), PunctRole::Grouping);
    assert_eq!(tracker.state(), Signature::Idle);
}

#[test]
fn deep_nesting_saturates_to_idle() {
    let mut tracker = after_def_name();
    tracker.observe_punct('(');
    for _ in 0..u8::MAX {
        tracker.observe_punct('[');
    }
    assert_eq!(
        tracker.state(),
        Signature::InParameterList { depth: u8::MAX }
    );
    tracker.observe_punct('[');
    assert_eq!(tracker.state(), Signature::Idle);
}
