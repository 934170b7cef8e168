//! Icon assets.

/// One icon asset: a stable name plus the outline geometry needed to draw
/// it.
///
/// The geometry is opaque to this crate — `view_box` and `path` are carried
/// into the rendered markup untouched, so any SVG-outline icon set plugs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGlyph {
    name: String,
    view_box: String,
    path: String,
}

impl IconGlyph {
    /// Creates a glyph from its name, view box, and path data.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vitrine::IconGlyph;
    ///
    /// let rocket = IconGlyph::new("rocket", "0 0 512 512", "M156.6 384.9 ...");
    /// assert_eq!(rocket.name(), "rocket");
    /// ```
    pub fn new(
        name: impl Into<String>,
        view_box: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            view_box: view_box.into(),
            path: path.into(),
        }
    }

    /// The glyph's stable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The SVG view box.
    pub fn view_box(&self) -> &str {
        &self.view_box
    }

    /// The SVG outline path data.
    pub fn path(&self) -> &str {
        &self.path
    }
}
