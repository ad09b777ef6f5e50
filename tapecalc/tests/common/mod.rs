use tapecalc::{Action, ActionTrace};

/// Final cursor positions obtained by replaying only the move tokens of a
/// trace from the origin.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cursors {
    pub input: usize,
    pub output: usize,
    pub scratch: (usize, usize),
}

/// Replays `trace`, moving exactly one cell per move token.
///
/// Panics if a move would step off the left or top edge, since a valid trace
/// never does.
pub fn replay(trace: &ActionTrace) -> Cursors {
    let mut cursors = Cursors::default();
    for action in trace {
        match action {
            Action::InputRight => cursors.input += 1,
            Action::InputLeft => cursors.input -= 1,
            Action::OutputRight => cursors.output += 1,
            Action::OutputLeft => cursors.output -= 1,
            Action::ScratchRight => cursors.scratch.0 += 1,
            Action::ScratchLeft => cursors.scratch.0 -= 1,
            Action::ScratchDown => cursors.scratch.1 += 1,
            Action::ScratchUp => cursors.scratch.1 -= 1,
            _ => {}
        }
    }
    cursors
}

/// Strategy-friendly operand: a digit string with no leading zero.
pub fn operand(digits: &[u8]) -> String {
    let s: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
