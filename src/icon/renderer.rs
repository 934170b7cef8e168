//! The renderable icon component.

use minijinja::Environment;
use serde::Serialize;

use super::error::IconError;
use super::library::IconLibrary;

/// The markup shape every rendered icon shares. Geometry and labelling come
/// from the render context; everything else is fixed.
const ICON_TEMPLATE: &str = "<svg class=\"icon icon-{{ name }}\
{% if classes %} {{ classes }}{% endif %}\" viewBox=\"{{ view_box }}\"\
{% if title %} role=\"img\"{% else %} aria-hidden=\"true\"{% endif %}>\
{% if title %}<title>{{ title }}</title>{% endif %}\
<path d=\"{{ path }}\" fill=\"currentColor\"/></svg>";

/// Render-time properties for one icon use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconProps {
    classes: Vec<String>,
    title: Option<String>,
}

impl IconProps {
    /// Creates empty props: no extra classes, hidden from assistive tech.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class to the rendered `<svg>` element.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Gives the icon an accessible title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Serialize)]
struct IconContext<'a> {
    name: &'a str,
    view_box: &'a str,
    path: &'a str,
    classes: String,
    title: Option<&'a str>,
}

/// The component bound to the global icon alias.
///
/// Owns the glyph library and a pre-compiled markup template; rendering is
/// a lookup plus a template evaluation, with no I/O.
///
/// # Example
///
/// ```rust
/// use vitrine::{IconGlyph, IconLibrary, IconProps, IconRenderer};
///
/// let mut library = IconLibrary::new();
/// library.add(IconGlyph::new("rocket", "0 0 512 512", "M156 384")).unwrap();
///
/// let renderer = IconRenderer::new(library).unwrap();
/// let svg = renderer.render("rocket", &IconProps::new()).unwrap();
/// assert!(svg.contains("icon-rocket"));
/// ```
pub struct IconRenderer {
    env: Environment<'static>,
    library: IconLibrary,
}

impl IconRenderer {
    /// Creates a renderer over a populated library.
    ///
    /// # Errors
    ///
    /// [`IconError::Render`] if the markup template fails to compile.
    pub fn new(library: IconLibrary) -> Result<Self, IconError> {
        let mut env = Environment::new();
        env.add_template_owned("icon".to_string(), ICON_TEMPLATE.to_string())
            .map_err(|e| IconError::Render {
                message: e.to_string(),
            })?;
        Ok(Self { env, library })
    }

    /// The library this renderer resolves glyph names against.
    pub fn library(&self) -> &IconLibrary {
        &self.library
    }

    /// Renders the named glyph to SVG markup.
    ///
    /// # Errors
    ///
    /// [`IconError::UnknownGlyph`] if the name is not in the library,
    /// [`IconError::Render`] if template evaluation fails.
    pub fn render(&self, name: &str, props: &IconProps) -> Result<String, IconError> {
        let glyph = self
            .library
            .get(name)
            .ok_or_else(|| IconError::UnknownGlyph {
                name: name.to_string(),
            })?;

        let context = IconContext {
            name: glyph.name(),
            view_box: glyph.view_box(),
            path: glyph.path(),
            classes: props.classes.join(" "),
            title: props.title.as_deref(),
        };

        let template = self.env.get_template("icon").map_err(|e| IconError::Render {
            message: e.to_string(),
        })?;
        template.render(&context).map_err(|e| IconError::Render {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::glyph::IconGlyph;

    fn renderer() -> IconRenderer {
        let mut library = IconLibrary::new();
        library
            .add(IconGlyph::new("rocket", "0 0 512 512", "M156 384"))
            .unwrap();
        IconRenderer::new(library).unwrap()
    }

    #[test]
    fn test_render_basic_markup() {
        let svg = renderer().render("rocket", &IconProps::new()).unwrap();
        assert!(svg.starts_with("<svg class=\"icon icon-rocket\""));
        assert!(svg.contains("viewBox=\"0 0 512 512\""));
        assert!(svg.contains("d=\"M156 384\""));
        assert!(svg.contains("aria-hidden=\"true\""));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn test_render_with_classes_and_title() {
        let props = IconProps::new().class("spin").class("large").title("Launch");
        let svg = renderer().render("rocket", &props).unwrap();
        assert!(svg.contains("class=\"icon icon-rocket spin large\""));
        assert!(svg.contains("<title>Launch</title>"));
        assert!(svg.contains("role=\"img\""));
        assert!(!svg.contains("aria-hidden"));
    }

    #[test]
    fn test_render_unknown_glyph() {
        let err = renderer().render("ghost", &IconProps::new()).unwrap_err();
        assert_eq!(
            err,
            IconError::UnknownGlyph {
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_same_name_always_resolves_to_same_asset() {
        let renderer = renderer();
        let a = renderer.render("rocket", &IconProps::new()).unwrap();
        let b = renderer.render("rocket", &IconProps::new()).unwrap();
        assert_eq!(a, b);
    }
}
