/// Root of an Android vector drawable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorDrawable {
    /// Intrinsic width, without the `dp` suffix
    pub width: String,
    /// Intrinsic height, without the `dp` suffix
    pub height: String,
    pub viewport_width: String,
    pub viewport_height: String,
    /// Shapes in document order
    pub paths: Vec<DrawablePath>,
}

/// A single `<path>` of the drawable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawablePath {
    /// `None` when the source `path` had no `d` attribute
    pub path_data: Option<String>,
    pub fill_color: String,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub color: String,
    pub width: String,
}

impl DrawablePath {
    pub fn new(path_data: Option<String>, fill_color: impl Into<String>) -> Self {
        Self {
            path_data,
            fill_color: fill_color.into(),
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: impl Into<String>) -> Self {
        self.stroke = Some(Stroke {
            color: color.into(),
            width: width.into(),
        });
        self
    }
}
