//! End-to-end traversal scenarios

use gremlin_statement::{Comparer, Error, PropertyToken, Statement};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_filter_vertices_by_predicate() -> anyhow::Result<()> {
    init_tracing();
    let q = Statement::new()
        .v()
        .has_label("person")
        .has("age", Comparer::gt(30))
        .values(["name"])?;
    assert_eq!(
        q.to_string(),
        "g.V().hasLabel('person').has('age',gt(30)).values('name')"
    );
    Ok(())
}

#[test]
fn test_add_vertex_with_properties() {
    let q = Statement::new()
        .add_v(Some("person"))
        .property("name", "Alice")
        .property("age", 30);
    assert_eq!(
        q.to_string(),
        "g.addV('person').property('name','Alice').property('age',30)"
    );
}

#[test]
fn test_edge_source_has_no_separator() {
    let q = Statement::new()
        .e()
        .has_label("knows")
        .out_v(None)
        .as_("a");
    assert_eq!(q.to_string(), "gE().hasLabel('knows').outV().as('a')");
}

#[test]
fn test_add_edge_to_nested_statement() {
    let q = Statement::new()
        .v_id("1")
        .add_e(Some("knows"))
        .to(&Statement::new().v_id("2"));
    assert_eq!(q.to_string(), "g.V('1').addE('knows').to(g.V('2'))");
}

#[test]
fn test_rendering_is_idempotent() {
    let q = Statement::new().v().out(Some("created")).dedup();
    let renders: Vec<String> = (0..3).map(|_| q.to_string()).collect();
    assert!(renders.iter().all(|r| r == "g.V().out('created').dedup()"));
}

#[test]
fn test_each_step_extends_previous_text() -> anyhow::Result<()> {
    let q = Statement::new().v();
    let observer = q.clone();
    let mut seen = vec![observer.to_string()];

    let q = q.has("name", "marko");
    seen.push(observer.to_string());
    let q = q.out_e(Some("created"));
    seen.push(observer.to_string());
    let q = q.in_v(None);
    seen.push(observer.to_string());
    let q = q.values(["name", "lang"])?;
    seen.push(observer.to_string());
    let _ = q.count();
    seen.push(observer.to_string());

    for pair in seen.windows(2) {
        assert!(pair[1].starts_with(&pair[0]));
        assert!(pair[1].len() > pair[0].len());
    }
    assert_eq!(
        seen.last().map(String::as_str),
        Some("g.V().has('name','marko').outE('created').inV().values('name','lang').count()")
    );
    Ok(())
}

#[test]
fn test_source_steps_follow_only_fresh_statement() {
    let q = Statement::new()
        .v_id("1")
        .add_e(Some("knows"))
        .to(&Statement::new().v_id("2"))
        .property("weight", 0.4);
    assert_eq!(q.kind_name(), "added");
    assert_eq!(
        q.to_string(),
        "g.V('1').addE('knows').to(g.V('2')).property('weight',0.4)"
    );
    assert_eq!(Statement::new().e_id("x").to_string(), "gE('x')");
}

#[test]
fn test_string_arguments_quoted() {
    let q = Statement::new().add_v(None).property("a", "b");
    assert!(q.to_string().ends_with(".property('a','b')"));
}

#[test]
fn test_doubles_render_with_dot() {
    for (value, expected) in [
        (3.5, "3.5"),
        (0.1, "0.1"),
        (-12.75, "-12.75"),
        (1000.5, "1000.5"),
        (f64::INFINITY, "Double.POSITIVE_INFINITY"),
    ] {
        let q = Statement::new().v().property("x", value);
        let text = q.to_string();
        assert_eq!(text, format!("g.V().property('x',{})", expected));
    }
}

#[test]
fn test_empty_argument_lists_fail() {
    let none: Vec<String> = Vec::new();
    let err = Statement::new().v().values(&none).unwrap_err();
    assert_eq!(err, Error::EmptyArgumentList { step: "values" });
    assert!(err.is_invalid_argument());

    let err = Statement::new().v().select(&none).unwrap_err();
    assert_eq!(err, Error::EmptyArgumentList { step: "select" });
}

#[test]
fn test_nested_embedding_is_snapshot() {
    let inner = Statement::new().v_id("2");
    let inner_alias = inner.clone();
    let outer = Statement::new().v_id("1").add_e(Some("knows")).to(&inner);

    let _ = inner_alias.out(Some("knows")).count();

    assert_eq!(outer.to_string(), "g.V('1').addE('knows').to(g.V('2'))");
    assert_eq!(inner.to_string(), "g.V('2').out('knows').count()");
}

#[test]
fn test_group_count_by_label() {
    let q = Statement::new().v().group().by(PropertyToken::label()).by("name");
    assert_eq!(q.to_string(), "g.V().group().by(T.label).by('name')");
}

#[test]
fn test_independent_statements_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || Statement::new().v_id(i).out(None).to_string())
        })
        .collect();
    let rendered: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    assert_eq!(rendered[0], "g.V(0).out()");
    assert_eq!(rendered[3], "g.V(3).out()");
}
