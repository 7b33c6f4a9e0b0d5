use super::*;
use nomina_common::{DeclOrigin, ProjectId, SearchContext, SearchScope};
use nomina_index::{ClassRecord, FieldDef, InMemoryIndex};
use nomina_solver::TypeNode;

fn ctx() -> SearchContext {
    SearchContext::for_project(ProjectId(1))
}

/// X : Y, Y has no parent.
fn xy_index() -> InMemoryIndex {
    let mut index = InMemoryIndex::new();
    index.add_class(ClassRecord::new("X", Some("Y")));
    index.add_class(ClassRecord::new("Y", None));
    index
}

fn x() -> TypeNode {
    TypeNode::create("X", Some("Y".to_string()))
}

fn collect_all(
    index: &InMemoryIndex,
    matcher: &dyn PrefixMatcher,
    options: CollectOptions,
) -> Vec<Candidate> {
    let mut session = ResolveSession::new(index, ctx());
    let mut out = Vec::new();
    CandidateCollector::new(&mut session).collect(&x(), matcher, options, &mut out);
    out
}

fn summary(candidates: &[Candidate]) -> Vec<(&str, &str, Origin)> {
    candidates
        .iter()
        .map(|c| (c.name.as_str(), c.owner.as_str(), c.origin))
        .collect()
}

#[test]
fn test_own_field_before_inherited_field() {
    let mut index = xy_index();
    index.add_field(FieldDef::new("X", "x"));
    index.add_field(FieldDef::new("Y", "y"));

    let all = collect_all(&index, &AcceptAll, CollectOptions::default());
    assert_eq!(
        summary(&all),
        vec![("x", "X", Origin::Own), ("y", "Y", Origin::Inherited)]
    );
    assert!(all[0].origin.is_emphasized());
    assert!(!all[1].origin.is_emphasized());

    let filtered = collect_all(&index, &PlainPrefixMatcher::new("x"), CollectOptions::default());
    assert_eq!(summary(&filtered), vec![("x", "X", Origin::Own)]);
}

#[test]
fn test_kind_groups_in_fixed_order() {
    let mut index = xy_index();
    index.add_method(MethodDef::instance("X", "draw"));
    index.add_method(MethodDef::static_method("Y", "create"));
    index.add_field(FieldDef::new("Y", "id"));
    index.add_method(MethodDef::static_method("X", "new"));
    index.add_field(FieldDef::new("X", "name"));

    let all = collect_all(&index, &AcceptAll, CollectOptions::default());
    let order: Vec<(&str, MemberKind)> = all
        .iter()
        .map(|c| (c.name.as_str(), c.kind))
        .collect();
    assert_eq!(
        order,
        vec![
            ("name", MemberKind::Field),
            ("id", MemberKind::Field),
            ("new", MemberKind::StaticMethod),
            ("create", MemberKind::StaticMethod),
            ("draw", MemberKind::Method),
        ]
    );
}

#[test]
fn test_declaration_order_kept_within_level() {
    let mut index = xy_index();
    for name in ["zeta", "alpha", "mid"] {
        index.add_field(FieldDef::new("X", name));
    }

    let all = collect_all(&index, &AcceptAll, CollectOptions::default());
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_shadowed_members_are_not_deduplicated() {
    let mut index = xy_index();
    index.add_field(FieldDef::new("X", "value"));
    index.add_field(FieldDef::new("Y", "value"));
    index.add_method(MethodDef::instance("X", "run"));
    index.add_method(MethodDef::instance("Y", "run"));

    let all = collect_all(&index, &AcceptAll, CollectOptions::default());
    assert_eq!(
        summary(&all),
        vec![
            ("value", "X", Origin::Own),
            ("value", "Y", Origin::Inherited),
            ("run", "X", Origin::Own),
            ("run", "Y", Origin::Inherited),
        ]
    );
}

#[test]
fn test_static_methods_always_use_call_template() {
    let mut index = xy_index();
    index.add_method(MethodDef::instance("X", "update").with_params(["dt"]));
    index.add_method(MethodDef::static_method("X", "new").with_params(["name", "hp"]));

    let as_field = collect_all(&index, &AcceptAll, CollectOptions { use_as_field: true });
    let new = as_field.iter().find(|c| c.name == "new").unwrap();
    let update = as_field.iter().find(|c| c.name == "update").unwrap();
    assert_eq!(
        new.insertion,
        Some(InsertionHint::CallTemplate {
            params: vec!["name".to_string(), "hp".to_string()]
        })
    );
    assert_eq!(update.insertion, Some(InsertionHint::AsFieldReference));

    let as_call = collect_all(&index, &AcceptAll, CollectOptions::default());
    let update = as_call.iter().find(|c| c.name == "update").unwrap();
    assert_eq!(
        update.insertion,
        Some(InsertionHint::CallTemplate {
            params: vec!["dt".to_string()]
        })
    );
}

#[test]
fn test_fields_carry_no_insertion_hint() {
    let mut index = xy_index();
    index.add_field(FieldDef::new("X", "hp"));
    let all = collect_all(&index, &AcceptAll, CollectOptions::default());
    assert_eq!(all[0].insertion, None);
}

#[test]
fn test_snippet_rendering() {
    let call = InsertionHint::CallTemplate {
        params: vec!["dx".to_string(), "dy".to_string()],
    };
    assert_eq!(call.snippet("move"), "move(${1:dx}, ${2:dy})");
    assert_eq!(
        InsertionHint::CallTemplate { params: Vec::new() }.snippet("reset"),
        "reset()"
    );
    assert_eq!(InsertionHint::AsFieldReference.snippet("move"), "move");
}

#[test]
fn test_prefix_filter_applies_to_every_kind() {
    let mut index = xy_index();
    index.add_field(FieldDef::new("X", "getter"));
    index.add_field(FieldDef::new("X", "other"));
    index.add_method(MethodDef::instance("Y", "get"));
    index.add_method(MethodDef::static_method("Y", "getInstance"));
    index.add_method(MethodDef::static_method("Y", "make"));

    let all = collect_all(&index, &PlainPrefixMatcher::new("get"), CollectOptions::default());
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["getter", "getInstance", "get"]);
}

#[test]
fn test_case_insensitive_matcher() {
    let matcher = PlainPrefixMatcher::case_insensitive("GeT");
    assert!(matcher.prefix_matches("getName"));
    assert!(matcher.prefix_matches("GET"));
    assert!(!matcher.prefix_matches("ge"));
    assert!(!matcher.prefix_matches("set"));

    let strict = PlainPrefixMatcher::new("Get");
    assert!(!strict.prefix_matches("getName"));
    assert!(strict.prefix_matches("GetName"));
    assert_eq!(strict.prefix(), "Get");
}

#[test]
fn test_single_kind_collectors() {
    let mut index = xy_index();
    index.add_field(FieldDef::new("Y", "id"));
    index.add_method(MethodDef::static_method("Y", "new"));
    index.add_method(MethodDef::instance("X", "draw"));

    let mut session = ResolveSession::new(&index, ctx());
    let mut collector = CandidateCollector::new(&mut session);
    let root = x();

    let mut fields = Vec::new();
    assert_eq!(collector.collect_fields(&root, &AcceptAll, &mut fields), 1);
    assert_eq!(fields[0].kind, MemberKind::Field);

    let mut statics = Vec::new();
    assert_eq!(collector.collect_static_methods(&root, &AcceptAll, &mut statics), 1);
    assert_eq!(statics[0].origin, Origin::Inherited);

    let mut methods = Vec::new();
    let emitted =
        collector.collect_methods(&root, &AcceptAll, CollectOptions::default(), &mut methods);
    assert_eq!(emitted, 1);
    assert_eq!(methods[0].name, "draw");
}

#[test]
fn test_cycle_keeps_members_collected_before_reentry() {
    let mut index = InMemoryIndex::new();
    index.add_class(ClassRecord::new("X", Some("Y")));
    index.add_class(ClassRecord::new("Y", Some("X")));
    index.add_field(FieldDef::new("X", "a"));
    index.add_field(FieldDef::new("Y", "b"));

    let mut session = ResolveSession::new(&index, ctx());
    let mut out = Vec::new();
    CandidateCollector::new(&mut session).collect(
        &x(),
        &AcceptAll,
        CollectOptions::default(),
        &mut out,
    );

    assert_eq!(
        summary(&out),
        vec![("a", "X", Origin::Own), ("b", "Y", Origin::Inherited)]
    );
    assert_eq!(session.diagnostics().len(), 1);
}

#[test]
fn test_project_scope_hides_library_members() {
    let mut index = xy_index();
    index.add_field(FieldDef::new("X", "mine"));
    index.add_field(FieldDef::new("X", "vendored").with_origin(DeclOrigin::Library));

    let mut session = ResolveSession::new(&index, ctx().with_scope(SearchScope::Project));
    let mut out = Vec::new();
    CandidateCollector::new(&mut session).collect(
        &x(),
        &AcceptAll,
        CollectOptions::default(),
        &mut out,
    );
    assert_eq!(summary(&out), vec![("mine", "X", Origin::Own)]);
}

#[test]
fn test_candidate_serializes_for_hosts() {
    let candidate = Candidate {
        name: "new".to_string(),
        kind: MemberKind::StaticMethod,
        owner: "Dog".to_string(),
        origin: Origin::Inherited,
        insertion: Some(InsertionHint::CallTemplate {
            params: vec!["name".to_string()],
        }),
    };
    let json = serde_json::to_value(&candidate).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "new",
            "kind": "staticMethod",
            "owner": "Dog",
            "origin": "inherited",
            "insertion": { "style": "callTemplate", "params": ["name"] }
        })
    );
}
