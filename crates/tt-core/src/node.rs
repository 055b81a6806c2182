//! Node model: the three kinds of addressable dialogue content.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{TalkError, TalkResult};
use crate::sentinel::DIRECTIVE_PREFIX;

/// One entry of a dialogue node: text to show, or a directive to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Plain text written to the output stream.
    Text(String),
    /// An embedded directive that ends the visit.
    Directive(String),
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        if is_directive(&value) {
            Self::Directive(value)
        } else {
            Self::Text(value)
        }
    }
}

/// A classified node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Runs exactly one directive.
    Directive {
        /// The directive to run.
        directive: String,
    },
    /// Shows lines in order until an embedded directive is reached.
    Dialogue {
        /// The lines of the node.
        lines: Vec<Entry>,
    },
    /// Shows a prompt, reads one input and runs the matching option.
    Msg {
        /// The prompt text.
        text: String,
        /// Input token to directive.
        options: BTreeMap<String, String>,
    },
}

/// The raw, authored shape of a node.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawNode {
    Directive {
        directive: String,
    },
    Dialogue {
        dialogue: Vec<String>,
    },
    Msg {
        msg: String,
        #[serde(default)]
        opt: BTreeMap<String, String>,
    },
}

impl Node {
    /// Classify a raw document entry by its `type` field.
    ///
    /// `id` is only used for error reporting.
    pub fn classify(id: &str, raw: &Value) -> TalkResult<Self> {
        let raw = RawNode::deserialize(raw).map_err(|e| TalkError::malformed(id, e.to_string()))?;

        match raw {
            RawNode::Directive { directive } => {
                require_directive(id, &directive)?;
                Ok(Self::Directive { directive })
            }
            RawNode::Dialogue { dialogue } => Ok(Self::Dialogue {
                lines: dialogue.into_iter().map(Entry::from).collect(),
            }),
            RawNode::Msg { msg, opt } => {
                for (input, directive) in &opt {
                    if !is_directive(directive) {
                        return Err(TalkError::malformed(
                            id,
                            format!("option {input:?} maps to {directive:?}, which is not a directive"),
                        ));
                    }
                }
                Ok(Self::Msg {
                    text: msg,
                    options: opt,
                })
            }
        }
    }
}

/// Whether `value` is a directive string.
pub fn is_directive(value: &str) -> bool {
    value.starts_with(DIRECTIVE_PREFIX)
}

fn require_directive(id: &str, directive: &str) -> TalkResult<()> {
    if is_directive(directive) {
        Ok(())
    } else {
        Err(TalkError::malformed(
            id,
            format!("{directive:?} is not a directive"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classify_directive() {
        let node = Node::classify("n", &json!({"type": "directive", "directive": "::QUIT"})).unwrap();
        assert_eq!(
            node,
            Node::Directive {
                directive: "::QUIT".to_string()
            }
        );
    }

    #[test]
    fn classify_dialogue_splits_entries() {
        let node = Node::classify(
            "n",
            &json!({"type": "dialogue", "dialogue": ["Hello", "::GOTO next", "never"]}),
        )
        .unwrap();

        let Node::Dialogue { lines } = node else {
            panic!("expected dialogue");
        };
        assert_eq!(
            lines,
            vec![
                Entry::Text("Hello".to_string()),
                Entry::Directive("::GOTO next".to_string()),
                Entry::Text("never".to_string()),
            ]
        );
    }

    #[test]
    fn classify_msg() {
        let node = Node::classify(
            "n",
            &json!({"type": "msg", "msg": "Where to?", "opt": {"go": "::GOTO end"}}),
        )
        .unwrap();

        let Node::Msg { text, options } = node else {
            panic!("expected msg");
        };
        assert_eq!(text, "Where to?");
        assert_eq!(options.get("go").map(String::as_str), Some("::GOTO end"));
    }

    #[test]
    fn msg_options_default_to_empty() {
        let node = Node::classify("n", &json!({"type": "msg", "msg": "Well?"})).unwrap();
        assert!(matches!(node, Node::Msg { options, .. } if options.is_empty()));
    }

    #[test]
    fn unknown_type_is_malformed() {
        let err = Node::classify("n", &json!({"type": "song", "lyrics": []})).unwrap_err();
        match err {
            TalkError::MalformedNode { id, .. } => assert_eq!(id, "n"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_fields_are_malformed() {
        for raw in [
            json!({"type": "directive"}),
            json!({"type": "dialogue"}),
            json!({"type": "msg", "opt": {}}),
            json!({"directive": "::QUIT"}),
            json!("::QUIT"),
        ] {
            let err = Node::classify("n", &raw).unwrap_err();
            assert!(matches!(err, TalkError::MalformedNode { .. }), "{raw}");
        }
    }

    #[test]
    fn non_directive_values_are_malformed() {
        let err = Node::classify("n", &json!({"type": "directive", "directive": "QUIT"})).unwrap_err();
        assert!(matches!(err, TalkError::MalformedNode { .. }));

        let err = Node::classify(
            "n",
            &json!({"type": "msg", "msg": "?", "opt": {"go": "somewhere"}}),
        )
        .unwrap_err();
        assert!(matches!(err, TalkError::MalformedNode { .. }));

        let err = Node::classify("n", &json!({"type": "dialogue", "dialogue": ["ok", 3]})).unwrap_err();
        assert!(matches!(err, TalkError::MalformedNode { .. }));
    }

    #[test]
    fn directive_detection() {
        assert!(is_directive("::QUIT"));
        assert!(is_directive("::"));
        assert!(!is_directive(": QUIT"));
        assert!(!is_directive(""));
    }
}
