//! Property-based tests for the format's correctness contracts: the
//! quoting rule, the keyable-string splitting rule, and fan-out
//! cardinality over generated sizes.

use proptest::prelude::*;
use serde_json::json;

use dae_outline::expr::quote;
use dae_outline::{split_key, to_string, Outline};

/// Exact inverse of `quote`'s escaping: strip the delimiters and undo
/// `\'` sequences. Returns `None` when the input is not a quoted literal.
fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'\'') {
            out.push(chars.next().unwrap());
        } else {
            out.push(ch);
        }
    }
    Some(out)
}

proptest! {
    #[test]
    fn prop_quote_round_trips(s in ".*") {
        let quoted = quote(&s);
        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));
        prop_assert_eq!(unquote(&quoted).unwrap(), s.clone());
        // Re-quoting the unquoted form is stable.
        prop_assert_eq!(quote(&unquote(&quoted).unwrap()), quoted);
    }

    #[test]
    fn prop_quote_escapes_every_single_quote(s in ".*") {
        let quoted = quote(&s);
        let inner = &quoted[1..quoted.len() - 1];
        // One escape per quote in the input, nothing else added.
        prop_assert_eq!(inner.len(), s.len() + s.matches('\'').count());
    }

    #[test]
    fn prop_split_key_splits_key_prefixed_urls(
        key in "[a-z][a-z0-9_]{0,11}",
        host in "[a-z][a-z0-9]{0,11}",
    ) {
        let s = format!("{}:https://{}.com", key, host);
        let (k, v) = split_key(&s).unwrap();
        prop_assert_eq!(k, key.as_str());
        let expected = format!("https://{}.com", host);
        prop_assert_eq!(v, expected.as_str());
    }

    #[test]
    fn prop_split_key_leaves_bare_urls_alone(host in "[a-z][a-z0-9]{0,11}") {
        let s = format!("https://{}.com", host);
        prop_assert_eq!(split_key(&s), None);
    }

    #[test]
    fn prop_split_key_none_without_colon(s in "[^:]*") {
        prop_assert_eq!(split_key(&s), None);
    }

    #[test]
    fn prop_fan_out_cardinality(n in 1usize..20) {
        let names: Vec<String> = (0..n).map(|i| format!("group_{}", i)).collect();
        let policies: Vec<String> = (0..n).map(|i| format!("fixed({})", i)).collect();
        let doc = json!({
            "version": "",
            "leaves": ["string", "config.FunctionListOrString"],
            "structure": [{
                "name": "Group", "mapping": "group", "isArray": true,
                "type": "config.Group",
                "structure": [
                    { "name": "Name", "mapping": "_", "type": "string",
                      "value": names },
                    { "name": "Policy", "mapping": "policy",
                      "type": "config.FunctionListOrString",
                      "value": policies }
                ]
            }]
        });
        let outline: Outline = serde_json::from_value(doc).unwrap();
        let text = to_string(&outline).unwrap();

        // Exactly n repeated blocks, keyed in input order.
        for i in 0..n {
            let needle = format!("    group_{} {{\n", i);
            prop_assert!(text.contains(&needle));
        }
        prop_assert_eq!(text.matches(" {\n").count(), n + 1);
        prop_assert_eq!(text.matches("policy: fixed(").count(), n);
    }
}
