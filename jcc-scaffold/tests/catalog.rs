use jcc_scaffold::catalog::{Frontend, TemplateCatalog};
use jcc_scaffold::ScaffoldConfig;
use std::path::Path;

#[test]
fn inertia_vue_resolves_to_its_entry() {
    let catalog = TemplateCatalog::builtin();
    let source = catalog.resolve(Some("Inertia + Vue"));
    assert_eq!(source, catalog.source(Frontend::InertiaVue));
    assert_eq!(source.branch, Some("inertia-vue"));
}

#[test]
fn inertia_react_resolves_to_its_entry() {
    let catalog = TemplateCatalog::builtin();
    assert_eq!(
        catalog.resolve(Some("Inertia + React")),
        catalog.source(Frontend::InertiaReact)
    );
}

#[test]
fn unknown_choice_falls_back_to_default() {
    let catalog = TemplateCatalog::builtin();
    let default = catalog.source(catalog.default_frontend());
    assert_eq!(catalog.resolve(Some("Svelte")), default);
    assert_eq!(catalog.resolve(Some("")), default);
}

#[test]
fn omitted_choice_falls_back_to_default() {
    let catalog = TemplateCatalog::builtin();
    assert_eq!(catalog.frontend_for(None), Frontend::Handlebars);
    assert_eq!(catalog.resolve(None), catalog.source(Frontend::Handlebars));
    assert_eq!(catalog.resolve(None).branch, None);
}

#[test]
fn every_label_round_trips_through_the_catalog() {
    let catalog = TemplateCatalog::builtin();
    for label in catalog.labels() {
        let frontend = catalog.frontend_for(Some(label));
        assert_eq!(frontend.label(), label);
    }
}

// ── Commands derived from a source ──────────────────────────────────

#[test]
fn clone_command_is_shallow_and_targets_absolute_path() {
    let config = ScaffoldConfig::default();
    let catalog = TemplateCatalog::builtin();
    let target = Path::new("/work/-weird");

    let cmd = config.clone_command(catalog.source(Frontend::InertiaVue), target);

    assert_eq!(cmd.program, "git");
    assert_eq!(
        cmd.args,
        vec![
            "clone",
            "--depth",
            "1",
            "--branch",
            "inertia-vue",
            "--",
            "https://github.com/jammehabdou64/jcc-express-mvc-library",
            "/work/-weird",
        ]
    );
    assert!(cmd.cwd.is_none());
}

#[test]
fn default_source_clones_without_branch() {
    let config = ScaffoldConfig::default();
    let catalog = TemplateCatalog::builtin();
    let cmd = config.clone_command(catalog.resolve(None), Path::new("/work/app"));
    assert!(!cmd.args.iter().any(|a| a == "--branch"));
}

#[test]
fn install_runs_inside_project() {
    let config = ScaffoldConfig::with_tools("git", "pnpm");
    let cmd = config.install_command(Path::new("/work/app"));
    assert_eq!(cmd.to_string(), "pnpm install");
    assert_eq!(cmd.cwd.as_deref(), Some(Path::new("/work/app")));
    assert_eq!(config.start_hint(), "pnpm run dev");
}
