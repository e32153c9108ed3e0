use dae_outline::expr::{
    expression_types, function_call, function_list_or_string, function_or_string, keyable_string,
    param, quote, routing_rule,
};
use dae_outline::Error;

#[test]
fn quote_wraps_in_single_quotes() {
    assert_eq!(quote("info"), "'info'");
    assert_eq!(quote(""), "''");
    assert_eq!(quote("https://test.com/my_sub"), "'https://test.com/my_sub'");
}

#[test]
fn quote_escapes_internal_single_quotes_only() {
    assert_eq!(quote("a'b"), r"'a\'b'");
    assert_eq!(quote("''"), r"'\'\''");
    // Everything else passes through untouched, including backslashes
    // and double quotes.
    assert_eq!(quote(r#"a\b"c"#), r#"'a\b"c'"#);
}

#[test]
fn function_list_joins_with_and() {
    assert_eq!(
        function_list_or_string(Some(&["min_avg10", "fixed(0)"][..]), None),
        "min_avg10 && fixed(0)"
    );
    // Given functions win over the fallback.
    assert_eq!(
        function_list_or_string(Some(&["min"][..]), Some("random")),
        "min"
    );
}

#[test]
fn function_list_falls_back_to_plain_string() {
    assert_eq!(
        function_list_or_string::<&str>(None, Some("random")),
        "random"
    );
    assert_eq!(function_list_or_string::<&str>(None, None), "");
    assert_eq!(function_list_or_string::<&str>(Some(&[][..]), None), "");
}

#[test]
fn function_or_string_prefers_the_function() {
    assert_eq!(function_or_string(Some("qtype(aaaa)"), Some("asis")), "qtype(aaaa)");
    assert_eq!(function_or_string(None, Some("asis")), "asis");
    assert_eq!(function_or_string(Some(""), Some("asis")), "asis");
    assert_eq!(function_or_string(None, None), "");
}

#[test]
fn keyable_string_builds_key_prefixed_values() {
    assert_eq!(
        keyable_string(Some("mysub"), "https://test.com/my_sub").unwrap(),
        "mysub: https://test.com/my_sub"
    );
    assert_eq!(keyable_string(None, "http://test.com").unwrap(), "http://test.com");
    assert_eq!(keyable_string(Some(""), "http://test.com").unwrap(), "http://test.com");
}

#[test]
fn keyable_string_rejects_pre_quoted_values() {
    assert_eq!(
        keyable_string(Some("k"), "'quoted'"),
        Err(Error::pre_quoted("KeyableString"))
    );
    assert_eq!(
        keyable_string(None, "\"quoted\""),
        Err(Error::pre_quoted("KeyableString"))
    );
}

#[test]
fn param_quotes_strings_and_leaves_primitives_bare() {
    assert_eq!(param(Some("keyword"), "HK").unwrap(), "keyword: 'HK'");
    assert_eq!(param(Some("dport"), 53).unwrap(), "dport: 53");
    assert_eq!(param(None, 0).unwrap(), "0");
    assert_eq!(param(None, true).unwrap(), "true");
    assert_eq!(param(None, 1.5).unwrap(), "1.5");
}

#[test]
fn param_rejects_pre_quoted_strings() {
    assert_eq!(param(Some("k"), "'HK'"), Err(Error::pre_quoted("Param")));
    assert_eq!(param(None, "\"HK\""), Err(Error::pre_quoted("Param")));
}

#[test]
fn function_call_joins_formatted_params() {
    assert_eq!(function_call("subtag", &["mysub"], false), "subtag(mysub)");
    assert_eq!(
        function_call("name", &["keyword: 'HK'", "regex: 'HK$'"], false),
        "name(keyword: 'HK', regex: 'HK$')"
    );
}

#[test]
fn outbound_references_without_params_are_bare() {
    assert_eq!(function_call::<&str>("direct", &[], true), "direct");
    assert_eq!(function_call::<&str>("direct", &[], false), "direct()");
    assert_eq!(function_call("fixed", &["0"], true), "fixed(0)");
}

#[test]
fn routing_rule_joins_conditions_with_an_arrow() {
    assert_eq!(
        routing_rule(&["domain(geosite:cn)"], "direct"),
        "domain(geosite:cn) -> direct"
    );
    assert_eq!(
        routing_rule(&["dip(8.8.8.8)", "dport(53)"], "my_group"),
        "dip(8.8.8.8) && dport(53) -> my_group"
    );
}

/// The composition the example-config corpus embeds in its group policy.
#[test]
fn corpus_policy_expression_composes_to_fixed_zero() {
    let calls = vec![function_call("fixed", &[param(None, 0).unwrap()], false)];
    assert_eq!(function_list_or_string(Some(calls.as_slice()), None), "fixed(0)");
}

#[test]
fn full_routing_rule_composition() {
    let conditions = vec![
        function_call(
            "domain",
            &[param(Some("suffix"), "google.com").unwrap()],
            false,
        ),
        function_call("dport", &[param(None, 443).unwrap()], false),
    ];
    let outbound = function_call::<&str>("my_group", &[], true);
    assert_eq!(
        routing_rule(&conditions, &outbound),
        "domain(suffix: 'google.com') && dport(443) -> my_group"
    );
}

#[test]
fn expression_types_documents_the_composite_set_in_order() {
    let types = expression_types();
    let names: Vec<_> = types.keys().copied().collect();
    assert_eq!(
        names,
        vec![
            "config.FunctionListOrString",
            "config.FunctionOrString",
            "config.KeyableString",
            "config_parser.Function",
            "config_parser.RoutingRule",
        ]
    );
}
