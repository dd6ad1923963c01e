//! End-to-end resolution tests over the real MiniJinja and Tera backends.

use std::fs;
use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use formwork_core::prelude::*;
use formwork_engines::{builtin, combined_renderer, standalone_renderer};
use formwork_engines::{MiniJinjaBackend, TeraBackend};

fn text_widget() -> RenderContext {
    RenderContext::new().with("widget", json!({"name": "q"}))
}

// ── Standalone resolver ──────────────────────────────────────────────────

#[test]
fn standalone_renders_the_bundled_text_widget() {
    let renderer = standalone_renderer();
    let html = renderer
        .render("formwork/widgets/text.html", &text_widget())
        .unwrap();
    assert_eq!(html, "<input type=\"text\" name=\"q\">");
}

#[test]
fn standalone_output_is_trimmed() {
    // The bundled files end with a newline; render must strip it.
    let renderer = standalone_renderer();
    let html = renderer
        .render("formwork/widgets/text.html", &text_widget())
        .unwrap();
    assert_eq!(html, html.trim());
}

#[test]
fn standalone_caches_its_engine() {
    let renderer = standalone_renderer();
    let first = renderer.engine().unwrap();
    let second = renderer.engine().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.kind(), BackendKind::MiniJinja);
}

#[test]
fn standalone_miss_names_the_bundled_engine() {
    let renderer = standalone_renderer();
    let err = renderer.get_template("formwork/widgets/nope.html").unwrap_err();
    match err {
        RenderError::NotFound(not_found) => {
            assert_eq!(not_found.engine.as_deref(), Some(BUNDLED_APP));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

// ── Combined resolver ────────────────────────────────────────────────────

#[test]
fn combined_with_no_engines_serves_bundled_templates() {
    let renderer = combined_renderer(TemplateSettings::default().into_shared());
    let handle = renderer.get_template("formwork/widgets/text.html").unwrap();
    assert_eq!(handle.engine(), BUNDLED_APP);
}

#[test]
fn configured_engine_overrides_a_bundled_template() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("formwork/widgets")).unwrap();
    fs::write(
        dir.path().join("formwork/widgets/text.html"),
        "<input class=\"custom\" name=\"{{ widget.name }}\">",
    )
    .unwrap();

    let settings = TemplateSettings {
        engines: vec![EngineConfig::new(BackendKind::Tera, "app").with_dir(dir.path())],
        installed_apps: Vec::new(),
    }
    .into_shared();

    let renderer = combined_renderer(settings);
    let html = renderer
        .render("formwork/widgets/text.html", &text_widget())
        .unwrap();
    assert_eq!(html, "<input class=\"custom\" name=\"q\">");
}

#[test]
fn double_miss_chains_configured_then_bundled_failures() {
    let settings = TemplateSettings {
        engines: vec![EngineConfig::new(BackendKind::MiniJinja, "app")],
        installed_apps: Vec::new(),
    }
    .into_shared();

    let renderer = combined_renderer(settings);
    let err = renderer.get_template("widgets/nope.html").unwrap_err();
    match err {
        RenderError::NotFound(not_found) => {
            let engines: Vec<_> = not_found
                .attempted()
                .iter()
                .map(|e| e.engine.as_deref().unwrap())
                .collect();
            assert_eq!(engines, vec!["app", BUNDLED_APP]);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn app_dirs_engine_gets_the_bundled_dir_injected() {
    let settings = TemplateSettings {
        engines: vec![EngineConfig::new(BackendKind::Tera, "app").with_app_dirs(true)],
        installed_apps: Vec::new(),
    }
    .into_shared();

    let renderer = combined_renderer(settings.clone());
    let handle = renderer.get_template("formwork/widgets/text.html").unwrap();

    // The configured engine served the bundled template itself; no fallback.
    assert_eq!(handle.engine(), "app");
    assert_eq!(
        settings.read().unwrap().engines[0].dirs,
        vec![builtin::template_root(BackendKind::Tera)]
    );
}

#[test]
fn repeated_lookups_do_not_duplicate_the_injected_dir() {
    let settings = TemplateSettings {
        engines: vec![EngineConfig::new(BackendKind::Tera, "app").with_app_dirs(true)],
        installed_apps: Vec::new(),
    }
    .into_shared();

    let renderer = combined_renderer(settings.clone());
    for _ in 0..3 {
        let _ = renderer.get_template("formwork/widgets/text.html");
    }
    assert_eq!(settings.read().unwrap().engines[0].dirs.len(), 1);
}

#[test]
fn no_injection_when_the_bundled_set_is_an_installed_app() {
    let settings = TemplateSettings {
        engines: vec![EngineConfig::new(BackendKind::Tera, "app").with_app_dirs(true)],
        installed_apps: vec![InstalledApp::new(BUNDLED_APP, "vendored/formwork")],
    }
    .into_shared();

    let renderer = combined_renderer(settings.clone());
    let _ = renderer.get_template("formwork/widgets/text.html");

    assert!(settings.read().unwrap().engines[0].dirs.is_empty());
}

// ── Bundled widget templates, both flavors ───────────────────────────────

fn bundled_backend(kind: BackendKind) -> Box<dyn TemplateBackend> {
    let config = EngineConfig::new(kind, "bundled").with_dir(builtin::template_root(kind));
    match kind {
        BackendKind::MiniJinja => Box::new(MiniJinjaBackend::new(&config, &[]).unwrap()),
        BackendKind::Tera => Box::new(TeraBackend::new(&config, &[]).unwrap()),
    }
}

#[test]
fn both_flavors_render_equivalent_text_markup() {
    for kind in [BackendKind::MiniJinja, BackendKind::Tera] {
        let backend = bundled_backend(kind);
        let ctx = RenderContext::new().with(
            "widget",
            json!({"name": "email", "value": "a@b.example", "attrs": {"id": "id_email"}}),
        );
        let html = backend
            .get_template("formwork/widgets/text.html")
            .unwrap()
            .render(&ctx)
            .unwrap();
        assert_eq!(
            html.trim(),
            "<input type=\"text\" name=\"email\" value=\"a@b.example\" id=\"id_email\">",
            "flavor: {kind}"
        );
    }
}

#[test]
fn checkbox_widget_renders_checked_state() {
    for kind in [BackendKind::MiniJinja, BackendKind::Tera] {
        let backend = bundled_backend(kind);

        let checked = RenderContext::new()
            .with("widget", json!({"name": "subscribe", "checked": true}));
        let html = backend
            .get_template("formwork/widgets/checkbox.html")
            .unwrap()
            .render(&checked)
            .unwrap();
        assert!(html.contains(" checked"), "flavor: {kind}, html: {html}");

        let unchecked =
            RenderContext::new().with("widget", json!({"name": "subscribe"}));
        let html = backend
            .get_template("formwork/widgets/checkbox.html")
            .unwrap()
            .render(&unchecked)
            .unwrap();
        assert!(!html.contains(" checked"), "flavor: {kind}, html: {html}");
    }
}

#[test]
fn select_widget_renders_options_and_selection() {
    for kind in [BackendKind::MiniJinja, BackendKind::Tera] {
        let backend = bundled_backend(kind);
        let ctx = RenderContext::new().with(
            "widget",
            json!({
                "name": "color",
                "options": [
                    {"value": "r", "label": "Red"},
                    {"value": "g", "label": "Green", "selected": true},
                ],
            }),
        );
        let html = backend
            .get_template("formwork/widgets/select.html")
            .unwrap()
            .render(&ctx)
            .unwrap();

        assert!(html.contains("<select name=\"color\">"), "flavor: {kind}");
        assert!(html.contains("<option value=\"r\">Red</option>"), "flavor: {kind}");
        assert!(
            html.contains("<option value=\"g\" selected>Green</option>"),
            "flavor: {kind}"
        );
    }
}

#[test]
fn textarea_widget_escapes_its_value() {
    for kind in [BackendKind::MiniJinja, BackendKind::Tera] {
        let backend = bundled_backend(kind);
        let ctx = RenderContext::new()
            .with("widget", json!({"name": "bio", "value": "<script>"}));
        let html = backend
            .get_template("formwork/widgets/textarea.html")
            .unwrap()
            .render(&ctx)
            .unwrap();
        assert!(
            html.contains("&lt;script&gt;"),
            "flavor: {kind}, html: {html}"
        );
        assert!(!html.contains("<script>"), "flavor: {kind}");
    }
}

#[test]
fn hidden_widget_renders_value() {
    for kind in [BackendKind::MiniJinja, BackendKind::Tera] {
        let backend = bundled_backend(kind);
        let ctx = RenderContext::new()
            .with("widget", json!({"name": "token", "value": "abc123"}));
        let html = backend
            .get_template("formwork/widgets/hidden.html")
            .unwrap()
            .render(&ctx)
            .unwrap();
        assert_eq!(
            html.trim(),
            "<input type=\"hidden\" name=\"token\" value=\"abc123\">",
            "flavor: {kind}"
        );
    }
}
