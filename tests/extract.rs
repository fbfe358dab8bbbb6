use pretty_assertions::assert_eq;
use rls_tool::{extract, output_name, remove_rules, splice_include, ActionKind, RequestedAction};

fn req(pairs: &[(&str, &str)]) -> Vec<RequestedAction> {
    pairs
        .iter()
        .map(|(p, v)| RequestedAction::new(*p, *v))
        .collect()
}

const RULESET: &str = r#"// lighting rules
version 3

//turn the lamp on at dusk
<2.5> (0:time == dusk)=>{AddProp.state=on;AddProp.level=high;}

(0:time == dawn)=>{RemoveProp.state=on;}

// (0:debug)=>{AddProp.state=on;}

//audit only
(0:always){AddProp.state=on;}

<0.5> (0:motion)=>{AddProp.state=on;Notify(owner);}
"#;

#[test]
fn extract_matching_rules_with_metadata() {
    let result = extract(RULESET, &req(&[("state", "on")]));

    assert_eq!(
        result.output,
        "//turn the lamp on at dusk\n\
         <2.5> (0:time == dusk)=>{AddProp.state=on;AddProp.level=high;}\n\n\
         (0:time == dawn)=>{RemoveProp.state=on;}\n\n\
         <0.5> (0:motion)=>{AddProp.state=on;Notify(owner);}\n\n"
    );
    assert_eq!(result.kept.len(), 3);
    assert_eq!(result.stats.scanned, 5);
    assert_eq!(result.stats.commented, 1);
    assert_eq!(result.stats.without_action, 1);
}

#[test]
fn decoded_fields_of_kept_rule() {
    let result = extract(RULESET, &req(&[("level", "high")]));
    assert_eq!(result.kept.len(), 1);

    let rule = &result.kept[0].rule;
    assert_eq!(rule.weight, Some(2.5));
    assert_eq!(rule.weight(), 2.5);
    assert_eq!(rule.comment.as_deref(), Some("turn the lamp on at dusk"));
    assert_eq!(rule.condition, "(0:time == dusk)");
    assert_eq!(
        rule.action_text.as_deref(),
        Some("{AddProp.state=on;AddProp.level=high;}")
    );
    assert_eq!(rule.actions.len(), 2);
    assert_eq!(rule.actions[1].kind, ActionKind::AddProperty);
    assert_eq!(rule.actions[1].property, "level");
}

#[test]
fn rule_without_weight_uses_default() {
    let result = extract(RULESET, &req(&[("state", "on")]));
    let dawn = &result.kept[1].rule;
    assert_eq!(dawn.weight, None);
    assert_eq!(dawn.weight(), 1.0);
    assert_eq!(dawn.comment, None);
}

#[test]
fn multiple_requested_pairs_narrow_results() {
    let result = extract(RULESET, &req(&[("state", "on"), ("level", "high")]));
    assert_eq!(result.kept.len(), 1);
    assert_eq!(result.kept[0].rule.condition, "(0:time == dusk)");
}

#[test]
fn empty_request_keeps_every_rule_with_actions() {
    let result = extract(RULESET, &[]);
    assert_eq!(result.kept.len(), 3);
}

#[test]
fn full_round_trip_remove_and_include() {
    let requested = req(&[("level", "high")]);
    let result = extract(RULESET, &requested);
    let name = output_name(&requested);
    assert_eq!(name, "rules_level_high.rls");

    let (rest, removed) = remove_rules(RULESET, &result.kept);
    assert_eq!(removed, 1);
    assert!(!rest.contains("time == dusk"));
    assert!(!rest.contains("turn the lamp on at dusk"));
    assert!(rest.contains("(0:time == dawn)"));

    let spliced = splice_include(&rest, &name);
    assert!(spliced.starts_with("#include \"rules_level_high.rls\"\n// lighting rules\n"));

    // Nothing left to extract for the same request.
    assert!(extract(&spliced, &requested).is_empty());
}

#[test]
fn output_name_examples() {
    assert_eq!(output_name(&req(&[("state", "on")])), "rules_state_on.rls");
    assert_eq!(
        output_name(&req(&[("a", "1"), ("b", "2")])),
        "rules_a_1_b_2.rls"
    );
}
