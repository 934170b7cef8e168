//! Terminal previews for themes, as a development aid.

use console::Style;

use super::role::ColorRole;
use super::theme::{Theme, ThemeValidationError};

impl Theme {
    /// Renders a one-line-per-role preview of the theme for terminals.
    ///
    /// Colors with resolvable RGB channels get a swatch styled via the
    /// nearest ANSI-256 index; opaque keyword tokens are listed without one.
    /// Output respects the terminal's color support, so piped output stays
    /// plain.
    ///
    /// # Errors
    ///
    /// The theme is resolved first; an incomplete or malformed theme fails
    /// with the same errors as [`Theme::validate`].
    pub fn preview(&self) -> Result<String, ThemeValidationError> {
        let resolved = self.resolve()?;
        let label_width = ColorRole::ALL
            .iter()
            .map(|role| role.as_str().len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("theme: {}\n", resolved.name()));
        for role in ColorRole::ALL {
            let color = resolved.color(role);
            let swatch = match color.ansi256() {
                Some(index) => Style::new()
                    .color256(index)
                    .apply_to("\u{25a0}\u{25a0}")
                    .to_string(),
                None => "  ".to_string(),
            };
            out.push_str(&format!(
                "  {} {:<width$} {}\n",
                swatch,
                role.as_str(),
                color.as_css(),
                width = label_width
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Theme {
        let mut theme = Theme::new("swatches");
        for role in ColorRole::ALL {
            theme = theme.role(role, "#60a5fa");
        }
        theme
    }

    #[test]
    fn test_preview_lists_every_role() {
        let rendered = complete().preview().unwrap();
        for role in ColorRole::ALL {
            assert!(rendered.contains(role.as_str()), "missing {}", role);
        }
        assert!(rendered.contains("#60a5fa"));
        assert!(rendered.starts_with("theme: swatches"));
    }

    #[test]
    fn test_preview_fails_on_incomplete_theme() {
        let theme = Theme::new("thin").role(ColorRole::Primary, "#fff");
        assert!(theme.preview().is_err());
    }

    #[test]
    fn test_preview_handles_opaque_tokens() {
        let mut theme = Theme::new("tokens");
        for role in ColorRole::ALL {
            theme = theme.role(role, "surface-token");
        }
        let rendered = theme.preview().unwrap();
        assert!(rendered.contains("surface-token"));
    }
}
