use rls_tool::scan::{Scanned, Scanner};
use rls_tool::{extract, RequestedAction};

fn state_on() -> Vec<RequestedAction> {
    vec![RequestedAction::new("state", "on")]
}

#[test]
fn comment_on_marker_line_disables_rule() {
    let doc = "// disabled (0:cond)=>{AddProp.state=on;}";
    let result = extract(doc, &state_on());
    assert!(result.is_empty());
    assert_eq!(result.stats.commented, 1);
    assert_eq!(result.output, "");
}

#[test]
fn comment_on_line_above_is_sentence_cloud() {
    let doc = "// disabled\n(0:cond)=>{AddProp.state=on;}";
    let result = extract(doc, &state_on());
    assert_eq!(result.kept.len(), 1);
    assert_eq!(result.kept[0].rule.comment.as_deref(), Some(" disabled"));
    assert_eq!(result.output, "// disabled\n(0:cond)=>{AddProp.state=on;}\n\n");
}

#[test]
fn rule_without_separator_excluded() {
    let doc = "(0:cond){AddProp.state=on;}";
    let result = extract(doc, &state_on());
    assert!(result.is_empty());
    assert_eq!(result.stats.scanned, 1);
    assert_eq!(result.stats.without_action, 1);
}

#[test]
fn malformed_weight_keeps_scanning() {
    let doc = "<heavy> (0:a)=>{AddProp.state=on;}\n<3> (0:b)=>{AddProp.state=on;}";
    let result = extract(doc, &state_on());
    assert_eq!(result.kept.len(), 2);
    assert_eq!(result.kept[0].rule.weight, None);
    assert_eq!(result.kept[0].rule.weight(), 1.0);
    assert_eq!(result.kept[0].reconstruction, "(0:a)=>{AddProp.state=on;}");
    assert_eq!(result.kept[1].rule.weight, Some(3.0));
}

#[test]
fn default_and_zero_weights_dropped_from_output() {
    let doc = "<1> (0:c)=>{AddProp.state=on;}\n<0> (0:d)=>{AddProp.state=on;}";
    let result = extract(doc, &state_on());
    assert_eq!(
        result.output,
        "(0:c)=>{AddProp.state=on;}\n\n(0:d)=>{AddProp.state=on;}\n\n"
    );
    assert_eq!(result.kept[0].rule.weight, Some(1.0));
    assert_eq!(result.kept[1].rule.weight, Some(0.0));
}

#[test]
fn weight_is_never_nan() {
    let doc = "<NaN> (0:a)=>{AddProp.state=on;}";
    let result = extract(doc, &state_on());
    assert!(!result.kept[0].rule.weight().is_nan());
}

#[test]
fn nested_braces_truncate_rule() {
    // The first closing brace ends the rule, so the action section is cut short.
    let doc = "(0:a)=>{AddProp.map={x};AddProp.state=on;}";
    let result = extract(doc, &state_on());
    assert!(result.is_empty());

    let items: Vec<_> = Scanner::new(doc).collect();
    assert_eq!(items.len(), 1);
    match &items[0] {
        Scanned::Rule(r) => assert_eq!(r.text, "(0:a)=>{AddProp.map={x}"),
        Scanned::Commented { .. } => panic!("rule should not be commented"),
    }
}

#[test]
fn windows_line_endings() {
    let doc = "//note\r\n<2> (0:a)=>{AddProp.state=on;}\r\n";
    let result = extract(doc, &state_on());
    assert_eq!(result.kept.len(), 1);
    assert_eq!(result.kept[0].rule.comment.as_deref(), Some("note\r"));
    assert_eq!(
        result.kept[0].reconstruction,
        "//note\r\n<2> (0:a)=>{AddProp.state=on;}"
    );
}

#[test]
fn unicode_text_around_rules() {
    let doc = "// règle für état\n<1.5> (0:ñ)=>{AddProp.état=activé;}";
    let result = extract(doc, &[RequestedAction::new("état", "activé")]);
    assert_eq!(result.kept.len(), 1);
    assert_eq!(result.kept[0].rule.comment.as_deref(), Some(" règle für état"));
    assert_eq!(result.kept[0].reconstruction, doc);
}

#[test]
fn document_of_only_comments() {
    let doc = "// nothing\n// to see\n";
    let result = extract(doc, &[]);
    assert_eq!(result.stats.scanned, 0);
    assert!(result.is_empty());
}

#[test]
fn many_rules() {
    let mut doc = String::new();
    for i in 0..500 {
        let value = if i % 2 == 0 { "on" } else { "off" };
        doc.push_str(&format!("<{i}> (0:r{i})=>{{AddProp.state={value};}}\n"));
    }
    let result = extract(&doc, &state_on());
    assert_eq!(result.stats.scanned, 500);
    assert_eq!(result.kept.len(), 250);
    assert_eq!(result.kept[1].rule.weight, Some(2.0));
}
