//! Integration tests for samurai-router
//!
//! Every test builds a throwaway view tree:
//!
//! ```text
//! views/
//! ├── __init__.rs
//! ├── current_time.rs
//! └── colors/
//!     ├── __init__.rs
//!     ├── <slug:slug>.rs
//!     └── add.rs
//! ```

use pretty_assertions::assert_eq;
use samurai_router::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VIEW_FILES: &[&str] = &[
    "current_time.rs",
    "colors/add.rs",
    "colors/__init__.rs",
    "colors/<slug:slug>.rs",
    "__init__.rs",
];

fn view_tree() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let views = temp_dir.path().join("views");

    for file in VIEW_FILES {
        let path = views.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }

    (temp_dir, views)
}

fn module_resolver(module_path: &str, _file: &Path) -> Result<Resolved<String>> {
    Ok(Resolved::new(module_path.to_string()))
}

fn urls_and_names<H>(routes: &[Route<H>]) -> Vec<(&str, &str)> {
    routes
        .iter()
        .map(|r| (r.url.as_str(), r.url_name.as_str()))
        .collect()
}

#[test]
fn test_get_files_descending_order() {
    let (_temp_dir, views) = view_tree();

    let files: Vec<PathBuf> = get_files(&views, "rs")
        .unwrap()
        .into_iter()
        .map(|p| p.strip_prefix(&views).unwrap().to_path_buf())
        .collect();

    let expected: Vec<PathBuf> = VIEW_FILES.iter().map(PathBuf::from).collect();
    assert_eq!(files, expected);
}

#[test]
fn test_get_files_is_deterministic() {
    let (_temp_dir, views) = view_tree();
    assert_eq!(get_files(&views, "rs").unwrap(), get_files(&views, "rs").unwrap());
}

#[test]
fn test_exclude_first_file() {
    let (_temp_dir, views) = view_tree();
    let files = get_files(&views, "rs").unwrap();

    assert!(exclude_file(&files[0], "*time.rs").unwrap());
    assert!(!exclude_file(&files[1], "*time.rs").unwrap());
}

#[test]
fn test_module_path_of_second_file() {
    let (temp_dir, views) = view_tree();
    let files = get_files(&views, "rs").unwrap();

    let relative = files[1].strip_prefix(temp_dir.path()).unwrap();
    assert_eq!(get_module_path(relative), "views.colors.add");
}

#[test]
fn test_url_of_second_file() {
    let (_temp_dir, views) = view_tree();
    let files = get_files(&views, "rs").unwrap();
    let none = RouteOverrides::default();

    let url = get_url(&files[1], &views, &InferOptions::default(), &none);
    assert_eq!(url, "colors/add");

    let options = InferOptions::default().with_append_slash(true);
    assert_eq!(get_url(&files[1], &views, &options, &none), "colors/add/");
}

#[test]
fn test_file_patterns_append_slash() {
    let (_temp_dir, views) = view_tree();
    let options = InferOptions::default().with_append_slash(true);

    let routes = file_patterns(&views, &options, &module_resolver).unwrap();

    assert_eq!(
        urls_and_names(&routes),
        vec![
            ("current_time/", "current_time"),
            ("colors/add/", "colors_add"),
            ("colors/", "colors"),
            ("colors/<slug:slug>/", "colors_slug"),
            ("", "index"),
        ]
    );
}

#[test]
fn test_file_patterns_exclude() {
    let (_temp_dir, views) = view_tree();
    let options = InferOptions::default().with_exclude("*time.rs");

    let routes = file_patterns(&views, &options, &module_resolver).unwrap();

    assert_eq!(
        urls_and_names(&routes),
        vec![
            ("colors/add", "colors_add"),
            ("colors", "colors"),
            ("colors/<slug:slug>", "colors_slug"),
            ("", "index"),
        ]
    );
}

#[test]
fn test_file_patterns_carries_handlers_and_modules() {
    let (_temp_dir, views) = view_tree();
    let routes = file_patterns(&views, &InferOptions::default(), &module_resolver).unwrap();

    for route in &routes {
        assert_eq!(route.handler, route.module_path);
        assert_eq!(route.module_path, get_module_path(&route.file));
    }
    assert!(routes[1].module_path.ends_with("views.colors.add"));
}

#[test]
fn test_file_patterns_name_override() {
    let (_temp_dir, views) = view_tree();
    let resolver = |module_path: &str, _file: &Path| -> Result<Resolved<()>> {
        let resolved = Resolved::new(());
        if module_path.ends_with("views.__init__") {
            Ok(resolved.with_overrides(RouteOverrides::default().with_url_name("home")))
        } else {
            Ok(resolved)
        }
    };

    let routes = file_patterns(&views, &InferOptions::default(), &resolver).unwrap();
    let last = routes.last().unwrap();
    assert_eq!((last.url.as_str(), last.url_name.as_str()), ("", "home"));
}

#[test]
fn test_file_patterns_url_override_feeds_name() {
    let (_temp_dir, views) = view_tree();
    let resolver = |module_path: &str, _file: &Path| -> Result<Resolved<()>> {
        let resolved = Resolved::new(());
        if module_path.ends_with("current_time") {
            Ok(resolved.with_overrides(RouteOverrides::default().with_url("clock/now")))
        } else {
            Ok(resolved)
        }
    };

    let routes = file_patterns(&views, &InferOptions::default(), &resolver).unwrap();
    assert_eq!(routes[0].url, "clock/now");
    assert_eq!(routes[0].url_name, "clock_now");
}

#[test]
fn test_resolve_failure_aborts_pass() {
    let (_temp_dir, views) = view_tree();
    let resolver = |module_path: &str, _file: &Path| -> Result<Resolved<()>> {
        if module_path.ends_with("colors.add") {
            Err(RouteError::ModuleNotFound(module_path.to_string()))
        } else {
            Ok(Resolved::new(()))
        }
    };

    let result = file_patterns(&views, &InferOptions::default(), &resolver);
    assert!(matches!(result, Err(RouteError::ModuleNotFound(m)) if m.ends_with("colors.add")));
}

#[test]
fn test_excluded_files_are_not_resolved() {
    let (_temp_dir, views) = view_tree();
    let resolver = |module_path: &str, _file: &Path| -> Result<Resolved<()>> {
        assert!(!module_path.ends_with("current_time"));
        Ok(Resolved::new(()))
    };

    let options = InferOptions::default().with_exclude("current_*.rs");
    let routes = file_patterns(&views, &options, &resolver).unwrap();
    assert_eq!(routes.len(), 4);
}

#[test]
fn test_malformed_exclude_pattern() {
    let (_temp_dir, views) = view_tree();
    let options = InferOptions::default().with_exclude("[oops");

    let result = file_patterns(&views, &options, &module_resolver);
    assert!(matches!(result, Err(RouteError::Pattern(_))));
}

#[test]
fn test_missing_start_dir() {
    let temp_dir = TempDir::new().unwrap();
    let result = file_patterns(temp_dir.path().join("nope"), &InferOptions::default(), &module_resolver);
    assert!(matches!(result, Err(RouteError::Walk(_))));
}

#[test]
fn test_other_extensions_are_ignored() {
    let (_temp_dir, views) = view_tree();
    fs::write(views.join("README.md"), "# views").unwrap();
    fs::write(views.join("colors/list.html"), "<ul></ul>").unwrap();

    let routes = file_patterns(&views, &InferOptions::default(), &module_resolver).unwrap();
    assert_eq!(routes.len(), VIEW_FILES.len());

    let options = InferOptions::default().with_extension("html");
    let routes = file_patterns(&views, &options, &module_resolver).unwrap();
    assert_eq!(urls_and_names(&routes), vec![("colors/list", "colors_list")]);
}

#[test]
fn test_underscore_file_is_named_index() {
    let temp_dir = TempDir::new().unwrap();
    let views = temp_dir.path().join("views");
    fs::create_dir_all(&views).unwrap();
    fs::write(views.join("_.rs"), "").unwrap();

    let routes = file_patterns(&views, &InferOptions::default(), &module_resolver).unwrap();
    assert_eq!(urls_and_names(&routes), vec![("_", "index")]);
}

#[test]
fn test_route_into_parts() {
    let (_temp_dir, views) = view_tree();
    let routes = file_patterns(&views, &InferOptions::default(), &module_resolver).unwrap();

    let (url, handler, name) = routes.into_iter().nth(2).unwrap().into_parts();
    assert_eq!(url, "colors");
    assert!(handler.ends_with("views.colors.__init__"));
    assert_eq!(name, "colors");
}
