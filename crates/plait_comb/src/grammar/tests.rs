use super::*;
use crate::combinator::first_of;
use crate::primitive::ch;
use crate::repeat::zero_or_more;
use pretty_assertions::assert_eq;

/// `group = '(' group* ')'`
fn balanced() -> (Grammar, Rule) {
    let mut builder = GrammarBuilder::new();
    let group = builder.declare("group");
    let inner = zero_or_more(builder.reference(group).unwrap());
    builder
        .define(group, crate::seq![ch('('), inner, ch(')')])
        .unwrap();
    (builder.build().unwrap(), group)
}

#[test]
fn self_recursive_rule() {
    let (grammar, group) = balanced();
    let parser = grammar.rule(group).unwrap();
    assert_eq!(parser.parse("(()())x"), Outcome::matched("(()())", "x"));
    assert!(parser.parse("(()").is_rejected());
}

#[test]
fn mutually_recursive_rules() {
    // list = '[' item* ']' ; item = 'x' | list
    let mut builder = GrammarBuilder::new();
    let list = builder.declare("list");
    let item = builder.declare("item");
    let items = zero_or_more(builder.reference(item).unwrap());
    builder
        .define(list, crate::seq![ch('['), items, ch(']')])
        .unwrap();
    builder
        .define(item, first_of([ch('x'), builder.reference(list).unwrap()]))
        .unwrap();
    let grammar = builder.build().unwrap();

    let parser = grammar.rule(list).unwrap();
    assert_eq!(parser.parse("[x[x[]]x]"), Outcome::matched("[x[x[]]x]", ""));
    assert!(parser.parse("[x[x]").is_rejected());
    assert_eq!(grammar.rule_names(), vec!["list", "item"]);
    assert_eq!(grammar.len(), 2);
    assert!(!grammar.is_empty());
}

#[test]
fn redefinition_is_an_error() {
    let mut builder = GrammarBuilder::new();
    let rule = builder.declare("digit");
    builder.define(rule, ch('1')).unwrap();
    assert_eq!(
        builder.define(rule, ch('2')),
        Err(GrammarError::Redefined { name: "digit" })
    );
}

#[test]
fn undefined_rule_fails_build() {
    let mut builder = GrammarBuilder::new();
    let defined = builder.declare("defined");
    builder.declare("missing");
    builder.define(defined, ch('a')).unwrap();
    let err = builder.build().unwrap_err();
    assert_eq!(err, GrammarError::Undefined { name: "missing" });
    assert_eq!(err.to_string(), "rule `missing` is declared but never defined");
}

#[test]
fn foreign_rule_is_rejected() {
    let mut first = GrammarBuilder::new();
    let foreign = first.declare("foreign");
    let mut second = GrammarBuilder::new();
    let local = second.declare("local");

    assert_eq!(
        second.reference(foreign).unwrap_err(),
        GrammarError::UnknownRule { name: "foreign" }
    );
    assert!(second.define(foreign, ch('a')).is_err());

    second.define(local, ch('a')).unwrap();
    let grammar = second.build().unwrap();
    assert!(grammar.rule(foreign).is_err());
}

#[test]
fn reference_before_definition_rejects_instead_of_panicking() {
    let mut builder = GrammarBuilder::new();
    let rule = builder.declare("later");
    let early = builder.reference(rule).unwrap();
    let rejection = early.parse("a").rejection().unwrap().clone();
    assert_eq!(rejection.message(), "rule `later` is not defined");
}

#[test]
fn reference_after_builder_dropped_rejects() {
    let mut builder = GrammarBuilder::new();
    let rule = builder.declare("orphan");
    let orphan = builder.reference(rule).unwrap();
    builder.define(rule, ch('a')).unwrap();
    drop(builder);
    assert!(orphan.parse("a").is_rejected());
}

#[test]
fn rule_parser_outlives_grammar_value() {
    let (grammar, group) = balanced();
    let parser = grammar.rule(group).unwrap();
    drop(grammar);
    assert_eq!(parser.parse("(())"), Outcome::matched("(())", ""));
}

#[test]
fn each_entry_point_keeps_every_rule_alive() {
    let mut builder = GrammarBuilder::new();
    let list = builder.declare("list");
    let item = builder.declare("item");
    let items = zero_or_more(builder.reference(item).unwrap());
    builder
        .define(list, crate::seq![ch('['), items, ch(']')])
        .unwrap();
    builder
        .define(item, first_of([ch('x'), builder.reference(list).unwrap()]))
        .unwrap();
    let grammar = builder.build().unwrap();
    let item_parser = grammar.rule(item).unwrap();
    drop(grammar);

    assert_eq!(item_parser.parse("[x[x]]!"), Outcome::matched("[x[x]]", "!"));
    assert_eq!(item_parser.parse("x"), Outcome::matched("x", ""));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let (grammar, group) = balanced();
    let parser = grammar.rule(group).unwrap();
    let depth = 50_000;
    let input = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parser.match_len(&input), Some(input.len()));
}

#[test]
fn grammar_is_shared_across_threads() {
    let (grammar, group) = balanced();
    let parser = grammar.rule(group).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.match_len("(()(()))"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(8));
    }
}

#[test]
fn debug_lists_rule_names() {
    let (grammar, _) = balanced();
    assert_eq!(format!("{grammar:?}"), "Grammar { rules: [\"group\"] }");
}
