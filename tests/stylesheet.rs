//! Integration tests for the build-time stylesheet pipeline.
//!
//! These run the real flow: a configuration with themes and content globs,
//! a source tree on disk, and the generated CSS — then hand the result to
//! the composition root the way a build would.

use std::fs;

use proptest::prelude::*;

use vitrine::{
    App, ColorRole, Component, Document, Element, Generator, RenderContext, RenderError,
    StylesheetConfig, Theme,
};

fn sample_theme() -> Theme {
    Theme::new("sample")
        .role(ColorRole::Primary, "#fbbf24")
        .role(ColorRole::Secondary, "#bef264")
        .role(ColorRole::Accent, "#c084fc")
        .role(ColorRole::Neutral, "#374151")
        .role(ColorRole::BaseSurface, "#1f2937")
        .role(ColorRole::Info, "#60a5fa")
        .role(ColorRole::Success, "#34d399")
        .role(ColorRole::Warning, "#fb923c")
        .role(ColorRole::Error, "#fb7185")
        .shape_token("controlRadius", "9999px")
}

#[test]
fn test_generated_primary_class_uses_exact_theme_color() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/views")).unwrap();
    fs::write(
        dir.path().join("src/views/home.vue"),
        "<template><p class=\"text-primary\">hi</p></template>",
    )
    .unwrap();

    let config = StylesheetConfig::new()
        .theme(sample_theme())
        .plugin("themer")
        .content("./src/**/*.{vue,js,ts}");

    let generator = Generator::new(&config).unwrap();
    let css = generator.generate(dir.path()).unwrap();

    assert!(css.contains(".text-primary {"));
    assert!(css.contains("color: #fbbf24;"));
}

#[test]
fn test_zero_matching_files_yields_zero_utility_rules() {
    let dir = tempfile::tempdir().unwrap();
    // Nothing under src/ at all.
    let config = StylesheetConfig::new()
        .theme(sample_theme())
        .content("./src/**/*.{vue,js,ts}");

    let generator = Generator::new(&config).unwrap();
    let css = generator.generate(dir.path()).unwrap();

    assert!(!css.contains(".text-"));
    assert!(!css.contains(".bg-"));
    assert!(!css.contains(".border-"));
    assert!(!css.contains(".btn"));
    // The theme definition itself still serializes into custom properties.
    assert!(css.contains("[data-theme=\"sample\"]"));
    assert!(css.contains("--color-primary: #fbbf24;"));
}

#[test]
fn test_only_used_classes_are_emitted() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/views")).unwrap();
    fs::write(
        dir.path().join("src/views/home.vue"),
        "<button class=\"btn\"></button><div class=\"bg-base-surface\"></div>",
    )
    .unwrap();

    let config = StylesheetConfig::new()
        .theme(sample_theme())
        .content("src/**/*.vue");

    let css = Generator::new(&config).unwrap().generate(dir.path()).unwrap();

    assert!(css.contains(".btn {"));
    assert!(css.contains("border-radius: 9999px;"));
    assert!(css.contains(".bg-base-surface {"));
    assert!(css.contains("background-color: #1f2937;"));
    assert!(!css.contains(".text-primary"));
    assert!(!css.contains(".border-error"));
}

#[test]
fn test_config_round_trip_across_pipeline_boundary() {
    let config = StylesheetConfig::new()
        .theme(sample_theme())
        .plugin("themer")
        .content("./src/**/*.{vue,js,ts}");

    let json = serde_json::to_string_pretty(&config).unwrap();
    let reloaded = StylesheetConfig::from_json_str(&json).unwrap();
    assert_eq!(config, reloaded);

    // The reloaded configuration drives the generator identically.
    let a = Generator::new(&config).unwrap().emit(&Default::default()).unwrap();
    let b = Generator::new(&reloaded).unwrap().emit(&Default::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generated_css_feeds_the_composition_root() {
    struct Plain;
    impl Component for Plain {
        fn render(&self, _ctx: &RenderContext<'_>) -> Result<Element, RenderError> {
            Ok(Element::new("main").with_class("btn"))
        }
    }

    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/views")).unwrap();
    fs::write(dir.path().join("src/views/home.vue"), "class=\"btn\"").unwrap();

    let config = StylesheetConfig::new()
        .theme(sample_theme())
        .content("src/**/*.vue");
    let css = Generator::new(&config).unwrap().generate(dir.path()).unwrap();

    let mut doc = Document::with_body(
        Element::new("body").with_child(Element::new("div").with_id("app")),
    );
    let mut app = App::builder()
        .root(Plain)
        .stylesheet_inline(css)
        .build()
        .unwrap();
    app.bootstrap(&mut doc).unwrap();

    let html = doc.to_html();
    assert!(html.contains("background-color: #fbbf24;"));
    assert!(html.contains("<main class=\"btn\"></main>"));
}

proptest! {
    // Role and token maps survive a serialize/deserialize boundary intact
    // for arbitrary hex palettes.
    #[test]
    fn test_theme_round_trip_property(
        channels in proptest::collection::vec(0u32..=0xFFFFFF, 9),
        radius in 0u32..=10_000u32,
    ) {
        let mut theme = Theme::new("generated");
        for (role, value) in ColorRole::ALL.iter().zip(&channels) {
            theme = theme.role(*role, format!("#{:06x}", value));
        }
        let theme = theme.shape_token("control-radius", format!("{}px", radius));

        prop_assert!(theme.validate().is_ok());

        let json = serde_json::to_string(&theme).unwrap();
        let from_json: Theme = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&theme, &from_json);

        let yaml = serde_yaml::to_string(&theme).unwrap();
        let from_yaml: Theme = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(&theme, &from_yaml);
    }
}
