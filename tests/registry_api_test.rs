//! Integration tests for the registry public API.

use serde::Serialize;
use std::fs;
use std::sync::Arc;
use templates_map::{CompiledTemplate, FuncMap, RegistryOptions, TemplatesError, TemplatesMap};
use tempfile::TempDir;

fn testdata_glob(rel: &str) -> String {
    let root = glob::Pattern::escape(env!("CARGO_MANIFEST_DIR"));
    format!("{}/tests/testdata/{}", root, rel)
}

fn layouts_glob() -> String {
    testdata_glob("layouts/*.html")
}

fn roles_glob() -> String {
    testdata_glob("roles/*.html")
}

fn users_glob() -> String {
    testdata_glob("users/*.html")
}

#[derive(Serialize)]
struct Role {
    name: String,
}

#[derive(Serialize)]
struct User {
    email: String,
}

#[derive(Serialize)]
struct RoleList {
    roles: Vec<Role>,
}

fn funcs() -> FuncMap {
    FuncMap::new().with("upper", |s: String| s.to_uppercase())
}

fn roles() -> RoleList {
    RoleList {
        roles: vec![
            Role {
                name: "RoleA".into(),
            },
            Role {
                name: "RoleB".into(),
            },
        ],
    }
}

fn full_registry() -> TemplatesMap {
    TemplatesMap::new(
        &layouts_glob(),
        Some(funcs()),
        [roles_glob(), users_glob()],
    )
    .unwrap()
}

fn render(map: &TemplatesMap, name: &str, data: impl Serialize) -> String {
    let mut out = Vec::new();
    map.render(&mut out, name, data).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn patterns_without_matches_build_empty_registries() {
    let map = TemplatesMap::new(&layouts_glob(), Some(funcs()), ["notfound"]).unwrap();
    assert_eq!(map.layouts().len(), 3);
    assert_eq!(map.len(), 3);

    let map = TemplatesMap::new("layouts", Some(funcs()), ["notfound"]).unwrap();
    assert!(map.layouts().is_empty());
    assert!(map.is_empty());
}

#[test]
fn registry_holds_layout_and_page_entries() {
    let mut map = TemplatesMap::new(&layouts_glob(), Some(funcs()), [roles_glob()]).unwrap();
    assert_eq!(map.layouts().len(), 3);
    assert_eq!(map.len(), 4);
    assert!(map.contains("role-list.html"));
    assert_eq!(
        map.names(),
        vec!["base.html", "footer.html", "head.html", "role-list.html"]
    );

    let user =
        CompiledTemplate::from_glob(&users_glob(), None, &RegistryOptions::default()).unwrap();
    map.insert("user-detail", user.clone());
    map.insert("user-detail.html", user);
    assert_eq!(map.len(), 6);

    map.remove("user-detail");
    assert_eq!(map.len(), 5);
}

#[test]
fn layouts_resolve_in_alphabetical_order() {
    let map = TemplatesMap::without_functions(&layouts_glob(), Vec::<&str>::new()).unwrap();
    let names: Vec<_> = map
        .layouts()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["base.html", "footer.html", "head.html"]);
}

#[test]
fn render_unknown_name_is_not_found() {
    let map = full_registry();
    let mut out = Vec::new();

    let err = map.render(&mut out, "notfound", ()).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, TemplatesError::TemplateNotFound { ref name } if name == "notfound"));
    assert!(out.is_empty());
}

#[test]
fn render_layout_entry() {
    let map = full_registry();
    let out = render(&map, "base.html", ());

    assert!(out.contains("base block"));
    assert!(out.contains("example.css"));
    assert!(out.contains("example.js"));
}

#[test]
fn render_role_list_uppercases_names() {
    let map = full_registry();
    let data = roles();
    let out = render(&map, "role-list.html", &data);

    for role in &data.roles {
        assert!(out.contains(&role.name.to_uppercase()));
    }
    assert_eq!(out.matches("example.css").count(), 1);
    assert_eq!(out.matches("example.js").count(), 1);
    assert!(!out.contains("base block"));
}

#[test]
fn render_role_list_output() {
    let map = TemplatesMap::new(&layouts_glob(), Some(funcs()), [roles_glob()]).unwrap();
    let out = render(&map, "role-list.html", roles());

    insta::assert_snapshot!(out, @r#"
<!DOCTYPE html>
<html>
<head>
<link rel="stylesheet" href="/static/example.css">
</head>
<body>

<ul>
  <li>ROLEA</li>
  <li>ROLEB</li>
</ul>

<script src="/static/example.js"></script>
</body>
</html>
"#);
}

#[test]
fn render_user_detail() {
    let map = full_registry();
    let user = User {
        email: "user@example.com".into(),
    };
    let out = render(&map, "user-detail.html", &user);
    assert!(out.contains(&user.email));
}

#[test]
fn functions_are_callable_from_layouts() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("shell.html"),
        "<title>{{ upper(\"RoleA\") }}</title>{% block body %}{% endblock %}",
    )
    .unwrap();
    fs::create_dir(temp.path().join("pages")).unwrap();
    fs::write(
        temp.path().join("pages").join("plain.html"),
        "{% extends \"shell.html\" %}{% block body %}body{% endblock %}",
    )
    .unwrap();

    let layouts = temp.path().join("*.html").to_string_lossy().into_owned();
    let pages = temp
        .path()
        .join("pages")
        .join("*.html")
        .to_string_lossy()
        .into_owned();
    let map = TemplatesMap::new(&layouts, Some(funcs()), [pages]).unwrap();

    assert_eq!(
        render(&map, "plain.html", ()),
        "<title>ROLEA</title>body"
    );
}

#[test]
fn add_registers_new_pages() {
    let mut map = TemplatesMap::new(&layouts_glob(), Some(funcs()), [roles_glob()]).unwrap();
    assert!(!map.contains("user-detail.html"));

    map.add([users_glob()]).unwrap();
    assert!(map.contains("user-detail.html"));
    assert_eq!(map.len(), 5);

    let out = render(
        &map,
        "user-detail.html",
        User {
            email: "someone@example.com".into(),
        },
    );
    assert!(out.contains("someone@example.com"));
    assert!(out.contains("example.css"));
}

#[test]
fn adding_same_pattern_twice_keeps_one_entry() {
    let mut map = TemplatesMap::new(&layouts_glob(), Some(funcs()), [roles_glob()]).unwrap();
    map.add([roles_glob()]).unwrap();
    assert_eq!(map.len(), 4);
}

#[test]
fn page_referencing_missing_layout_fails_at_render() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("orphan.html"),
        "{% extends \"missing.html\" %}",
    )
    .unwrap();
    let pages = temp.path().join("*.html").to_string_lossy().into_owned();

    let map = TemplatesMap::new(&layouts_glob(), Some(funcs()), [pages]).unwrap();
    let mut out = Vec::new();
    let err = map.render(&mut out, "orphan.html", ()).unwrap_err();
    assert!(matches!(err, TemplatesError::Render(_)));
}

#[test]
fn render_error_keeps_partial_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("partial.html"), "before {{ fail() }} after").unwrap();
    let pages = temp.path().join("*.html").to_string_lossy().into_owned();

    let funcs = funcs().with("fail", || -> Result<String, minijinja::Error> {
        Err(minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            "deliberate failure",
        ))
    });
    let map = TemplatesMap::new(&layouts_glob(), Some(funcs), [pages]).unwrap();

    let mut out = Vec::new();
    let err = map.render(&mut out, "partial.html", ()).unwrap_err();
    assert!(matches!(err, TemplatesError::Render(_)));
    assert!(err.to_string().contains("deliberate failure"));

    let written = String::from_utf8(out).unwrap();
    assert!(written.starts_with("before"));
    assert!(!written.contains("after"));
}

#[test]
fn concurrent_renders_share_one_registry() {
    let map = Arc::new(full_registry());

    std::thread::scope(|scope| {
        for i in 0..4 {
            let map = Arc::clone(&map);
            scope.spawn(move || {
                let email = format!("user{}@example.com", i);
                let out = render(&map, "user-detail.html", User { email: email.clone() });
                assert!(out.contains(&email));
            });
        }
    });
}
