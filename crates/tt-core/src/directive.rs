//! Parsing and dispatch of control directives.

use tracing::{debug, warn};

use crate::error::{TalkError, TalkResult};
use crate::sentinel::{GOTO, NONE, QUIT};

/// What the walk does after a directive ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep walking.
    Continue,
    /// Stop the walk.
    Terminate,
}

impl Flow {
    /// Whether this flow ends the walk.
    pub fn is_terminate(self) -> bool {
        self == Self::Terminate
    }
}

/// A parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `::QUIT`
    Quit,
    /// `::NONE`
    NoOp,
    /// `::GOTO <target>`
    Goto(String),
    /// Any directive without a recognized form. Runs as a no-op.
    Ignored(String),
}

impl Directive {
    /// Tokenize a directive string on whitespace.
    pub fn parse(raw: &str) -> TalkResult<Self> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Err(TalkError::EmptyDirective(raw.to_string())),
            [QUIT] => Ok(Self::Quit),
            [NONE] => Ok(Self::NoOp),
            [GOTO, target] => Ok(Self::Goto((*target).to_string())),
            _ => Ok(Self::Ignored(raw.to_string())),
        }
    }

    /// Apply the directive to `cursor`.
    pub fn apply(self, cursor: &mut String) -> Flow {
        match self {
            Self::Quit => Flow::Terminate,
            Self::NoOp => Flow::Continue,
            Self::Goto(target) => {
                debug!(from = %cursor, to = %target, "goto");
                *cursor = target;
                Flow::Continue
            }
            Self::Ignored(raw) => {
                warn!(directive = %raw, node = %cursor, "ignoring unrecognized directive");
                Flow::Continue
            }
        }
    }
}

/// Parse `raw` and apply it to `cursor`.
pub fn resolve(raw: &str, cursor: &mut String) -> TalkResult<Flow> {
    Ok(Directive::parse(raw)?.apply(cursor))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn run(raw: &str) -> (TalkResult<Flow>, String) {
        let mut cursor = "here".to_string();
        let flow = resolve(raw, &mut cursor);
        (flow, cursor)
    }

    #[test]
    fn quit_terminates() {
        let (flow, cursor) = run("::QUIT");
        assert_eq!(flow.unwrap(), Flow::Terminate);
        assert_eq!(cursor, "here");
    }

    #[test]
    fn none_continues() {
        let (flow, cursor) = run("::NONE");
        assert_eq!(flow.unwrap(), Flow::Continue);
        assert_eq!(cursor, "here");
    }

    #[test]
    fn goto_moves_cursor() {
        let (flow, cursor) = run("::GOTO  there ");
        assert_eq!(flow.unwrap(), Flow::Continue);
        assert_eq!(cursor, "there");
    }

    #[test]
    fn empty_directive_fails() {
        let (flow, _) = run("   ");
        assert!(matches!(flow, Err(TalkError::EmptyDirective(_))));
    }

    #[test]
    fn unrecognized_forms_are_ignored() {
        for raw in ["::JUMP", "::WAIT 5", "::GOTO a b", "::QUIT now"] {
            let (flow, cursor) = run(raw);
            assert_eq!(flow.unwrap(), Flow::Continue, "{raw}");
            assert_eq!(cursor, "here", "{raw}");
        }
    }

    #[test]
    fn parse_forms() {
        assert_eq!(Directive::parse("::QUIT").unwrap(), Directive::Quit);
        assert_eq!(Directive::parse("::NONE").unwrap(), Directive::NoOp);
        assert_eq!(
            Directive::parse("::GOTO x").unwrap(),
            Directive::Goto("x".to_string())
        );
        assert_eq!(
            Directive::parse("::GOTO").unwrap(),
            Directive::Ignored("::GOTO".to_string())
        );
    }

    proptest! {
        #[test]
        fn goto_always_lands_on_target(target in "[A-Za-z0-9_:]{1,16}") {
            let mut cursor = "start".to_string();
            let flow = resolve(&format!("::GOTO {target}"), &mut cursor).unwrap();
            prop_assert_eq!(flow, Flow::Continue);
            prop_assert_eq!(cursor, target);
        }

        #[test]
        fn quit_terminates_from_any_cursor(start in "\\PC*") {
            let mut cursor = start.clone();
            let flow = resolve("::QUIT", &mut cursor).unwrap();
            prop_assert!(flow.is_terminate());
            prop_assert_eq!(cursor, start);
        }
    }
}
