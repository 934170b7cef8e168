//! Stylesheet generation: themes merged, unused utilities dropped.

use std::collections::BTreeSet;
use std::path::Path;

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::theme::{ColorRole, ResolvedTheme, ThemeValidationError, DEFAULT_THEME};

use super::config::StylesheetConfig;
use super::scan::{ContentScanner, PatternError};

/// Corner radius for interactive controls when the active theme does not
/// set the `control-radius` token.
const FALLBACK_CONTROL_RADIUS: &str = "0.5rem";

const STYLESHEET_TEMPLATE: &str = "\
{% for theme in themes %}[data-theme=\"{{ theme.name }}\"] {
{% for var in theme.vars %}  --{{ var.name }}: {{ var.value }};
{% endfor %}}
{% endfor %}\
{% for rule in rules %}{{ rule.selector }} {
{% for decl in rule.declarations %}  {{ decl.property }}: {{ decl.value }};
{% endfor %}}
{% endfor %}";

/// One color utility recognized by the pipeline.
struct UtilitySpec {
    class: String,
    property: &'static str,
    role: ColorRole,
}

/// Every color utility the pipeline can emit: `text-`, `bg-`, and
/// `border-` for each role. A utility only reaches the stylesheet when the
/// scan found its class name in use.
static COLOR_UTILITIES: Lazy<Vec<UtilitySpec>> = Lazy::new(|| {
    let mut table = Vec::new();
    for role in ColorRole::ALL {
        for (prefix, property) in [
            ("text", "color"),
            ("bg", "background-color"),
            ("border", "border-color"),
        ] {
            table.push(UtilitySpec {
                class: format!("{}-{}", prefix, role.as_str()),
                property,
                role,
            });
        }
    }
    table
});

#[derive(Serialize)]
struct Var {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct ThemeBlock {
    name: String,
    vars: Vec<Var>,
}

#[derive(Serialize)]
struct Declaration {
    property: String,
    value: String,
}

#[derive(Serialize)]
struct Rule {
    selector: String,
    declarations: Vec<Declaration>,
}

#[derive(Serialize)]
struct StylesheetContext {
    themes: Vec<ThemeBlock>,
    rules: Vec<Rule>,
}

/// Error returned by stylesheet generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// A configured theme is incomplete or has an unparseable color.
    Theme(ThemeValidationError),
    /// Two configured themes share a name.
    DuplicateTheme { name: String },
    /// A content glob failed to compile.
    Pattern(PatternError),
    /// The stylesheet template failed to compile or render.
    Template { message: String },
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::Theme(source) => write!(f, "{}", source),
            GeneratorError::DuplicateTheme { name } => {
                write!(f, "duplicate theme \"{}\" in stylesheet config", name)
            }
            GeneratorError::Pattern(source) => write!(f, "{}", source),
            GeneratorError::Template { message } => {
                write!(f, "stylesheet template error: {}", message)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

impl From<ThemeValidationError> for GeneratorError {
    fn from(source: ThemeValidationError) -> Self {
        GeneratorError::Theme(source)
    }
}

impl From<PatternError> for GeneratorError {
    fn from(source: PatternError) -> Self {
        GeneratorError::Pattern(source)
    }
}

/// The build-time stylesheet generator.
///
/// Construction validates every configured theme eagerly — a config with a
/// missing role or a bad color never produces a generator, so nothing
/// downstream deals with partially valid palettes. Utility classes resolve
/// against the first configured theme; when the config lists no themes the
/// built-in [`DEFAULT_THEME`] palette applies. Every theme additionally
/// gets a `[data-theme="name"]` custom-property block for runtime theme
/// switching.
///
/// # Example
///
/// ```rust,ignore
/// let config = StylesheetConfig::from_json_str(&source)?;
/// let generator = Generator::new(&config)?;
/// let css = generator.generate("./web")?;
/// ```
#[derive(Debug)]
pub struct Generator {
    themes: Vec<ResolvedTheme>,
    content: Vec<String>,
    env: Environment<'static>,
}

impl Generator {
    /// Builds a generator from a configuration, validating all themes.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::Theme`] for the first invalid theme,
    /// [`GeneratorError::DuplicateTheme`] if two themes share a name.
    pub fn new(config: &StylesheetConfig) -> Result<Self, GeneratorError> {
        let mut themes: Vec<ResolvedTheme> = Vec::new();
        for theme in &config.plugin_options.themes {
            if themes.iter().any(|seen| seen.name() == theme.name()) {
                return Err(GeneratorError::DuplicateTheme {
                    name: theme.name().to_string(),
                });
            }
            themes.push(theme.resolve()?);
        }
        if themes.is_empty() {
            themes.push(DEFAULT_THEME.resolve()?);
        }

        let mut env = Environment::new();
        env.add_template_owned("stylesheet".to_string(), STYLESHEET_TEMPLATE.to_string())
            .map_err(|e| GeneratorError::Template {
                message: e.to_string(),
            })?;

        debug!(themes = themes.len(), "stylesheet generator ready");
        Ok(Self {
            themes,
            content: config.content.clone(),
            env,
        })
    }

    /// The validated themes, first one active.
    pub fn themes(&self) -> &[ResolvedTheme] {
        &self.themes
    }

    /// Scans `root` with the configured content globs and emits the
    /// stylesheet for whatever class usage the scan found.
    ///
    /// # Errors
    ///
    /// Glob compilation and template failures; an empty scan is not an
    /// error.
    pub fn generate(&self, root: impl AsRef<Path>) -> Result<String, GeneratorError> {
        let scanner = ContentScanner::new(root.as_ref(), &self.content)?;
        let report = scanner.scan();
        self.emit(&report.candidates)
    }

    /// Emits the stylesheet for an already-known candidate set.
    ///
    /// Theme custom-property blocks are always present; utility rules only
    /// for candidates the pipeline recognizes. Zero candidates therefore
    /// yields zero utility rules.
    pub fn emit(&self, candidates: &BTreeSet<String>) -> Result<String, GeneratorError> {
        let active = &self.themes[0];

        let mut rules = Vec::new();
        for spec in COLOR_UTILITIES.iter() {
            if !candidates.contains(&spec.class) {
                continue;
            }
            rules.push(Rule {
                selector: format!(".{}", spec.class),
                declarations: vec![Declaration {
                    property: spec.property.to_string(),
                    value: active.color(spec.role).as_css().to_string(),
                }],
            });
        }

        if candidates.contains("btn") {
            rules.push(Rule {
                selector: ".btn".to_string(),
                declarations: vec![
                    Declaration {
                        property: "background-color".to_string(),
                        value: active.color(ColorRole::Primary).as_css().to_string(),
                    },
                    Declaration {
                        property: "color".to_string(),
                        value: active.color(ColorRole::BaseSurface).as_css().to_string(),
                    },
                    Declaration {
                        property: "border-radius".to_string(),
                        value: active
                            .token("control-radius")
                            .unwrap_or(FALLBACK_CONTROL_RADIUS)
                            .to_string(),
                    },
                ],
            });
        }

        let context = StylesheetContext {
            themes: self
                .themes
                .iter()
                .map(|theme| ThemeBlock {
                    name: theme.name().to_string(),
                    vars: theme_vars(theme),
                })
                .collect(),
            rules,
        };

        debug!(
            utilities = context.rules.len(),
            themes = context.themes.len(),
            "emitting stylesheet"
        );

        let template =
            self.env
                .get_template("stylesheet")
                .map_err(|e| GeneratorError::Template {
                    message: e.to_string(),
                })?;
        template
            .render(&context)
            .map_err(|e| GeneratorError::Template {
                message: e.to_string(),
            })
    }
}

fn theme_vars(theme: &ResolvedTheme) -> Vec<Var> {
    let mut vars: Vec<Var> = ColorRole::ALL
        .iter()
        .map(|role| Var {
            name: format!("color-{}", role.as_str()),
            value: theme.color(*role).as_css().to_string(),
        })
        .collect();
    if let Some(radius) = theme.token("control-radius") {
        vars.push(Var {
            name: "control-radius".to_string(),
            value: radius.to_string(),
        });
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

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

    fn candidates(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_used_utility_gets_theme_color() {
        let config = StylesheetConfig::new().theme(sample_theme());
        let generator = Generator::new(&config).unwrap();
        let css = generator.emit(&candidates(&["text-primary"])).unwrap();
        assert!(css.contains(".text-primary {"));
        assert!(css.contains("color: #fbbf24;"));
    }

    #[test]
    fn test_unused_utilities_are_dropped() {
        let config = StylesheetConfig::new().theme(sample_theme());
        let generator = Generator::new(&config).unwrap();
        let css = generator.emit(&candidates(&["text-primary"])).unwrap();
        assert!(!css.contains(".bg-primary"));
        assert!(!css.contains(".text-secondary"));
    }

    #[test]
    fn test_zero_candidates_zero_utility_rules() {
        let config = StylesheetConfig::new().theme(sample_theme());
        let generator = Generator::new(&config).unwrap();
        let css = generator.emit(&BTreeSet::new()).unwrap();
        assert!(!css.contains(".text-"));
        assert!(!css.contains(".bg-"));
        assert!(!css.contains(".btn"));
        // The theme block itself is still present.
        assert!(css.contains("[data-theme=\"sample\"]"));
    }

    #[test]
    fn test_btn_uses_shape_token() {
        let config = StylesheetConfig::new().theme(sample_theme());
        let generator = Generator::new(&config).unwrap();
        let css = generator.emit(&candidates(&["btn"])).unwrap();
        assert!(css.contains(".btn {"));
        assert!(css.contains("border-radius: 9999px;"));
        assert!(css.contains("background-color: #fbbf24;"));
    }

    #[test]
    fn test_btn_falls_back_without_token() {
        let mut theme = Theme::new("flat");
        for role in ColorRole::ALL {
            theme = theme.role(role, "#111827");
        }
        let config = StylesheetConfig::new().theme(theme);
        let generator = Generator::new(&config).unwrap();
        let css = generator.emit(&candidates(&["btn"])).unwrap();
        assert!(css.contains(&format!("border-radius: {};", FALLBACK_CONTROL_RADIUS)));
    }

    #[test]
    fn test_theme_block_lists_all_roles() {
        let config = StylesheetConfig::new().theme(sample_theme());
        let generator = Generator::new(&config).unwrap();
        let css = generator.emit(&BTreeSet::new()).unwrap();
        assert!(css.contains("--color-primary: #fbbf24;"));
        assert!(css.contains("--color-base-surface: #1f2937;"));
        assert!(css.contains("--control-radius: 9999px;"));
    }

    #[test]
    fn test_no_themes_falls_back_to_default_palette() {
        let generator = Generator::new(&StylesheetConfig::new()).unwrap();
        assert_eq!(generator.themes()[0].name(), "default");
        let css = generator.emit(&candidates(&["text-primary"])).unwrap();
        assert!(css.contains("color: #570df8;"));
    }

    #[test]
    fn test_invalid_theme_rejected_at_construction() {
        let config = StylesheetConfig::new().theme(Theme::new("thin"));
        match Generator::new(&config).unwrap_err() {
            GeneratorError::Theme(ThemeValidationError::MissingRole { .. }) => {}
            other => panic!("expected theme validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_theme_names_rejected() {
        let config = StylesheetConfig::new()
            .theme(sample_theme())
            .theme(sample_theme());
        match Generator::new(&config).unwrap_err() {
            GeneratorError::DuplicateTheme { name } => assert_eq!(name, "sample"),
            other => panic!("expected duplicate theme error, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_scans_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/views")).unwrap();
        std::fs::write(
            dir.path().join("src/views/home.html"),
            "<button class=\"btn text-primary\">go</button>",
        )
        .unwrap();

        let config = StylesheetConfig::new()
            .theme(sample_theme())
            .content("./src/**/*.html");
        let generator = Generator::new(&config).unwrap();
        let css = generator.generate(dir.path()).unwrap();
        assert!(css.contains(".btn {"));
        assert!(css.contains(".text-primary {"));
        assert!(css.contains("color: #fbbf24;"));
    }

    #[test]
    fn test_bad_content_glob_surfaces_from_generate() {
        let config = StylesheetConfig::new()
            .theme(sample_theme())
            .content("src/{**");
        let generator = Generator::new(&config).unwrap();
        assert!(matches!(
            generator.generate("."),
            Err(GeneratorError::Pattern(_))
        ));
    }
}
