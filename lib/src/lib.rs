//! Convert SVG documents into Android vector drawables.
//!
//! Only a small subset of SVG is understood: `path` and `polygon` shapes with
//! their `fill`/`stroke` attributes, and class-based fills declared in embedded
//! `<style>` blocks. Path data is copied through verbatim.
//!
//! ```
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 48">
//!     <path d="M0 0 L10 10" fill="red"/>
//! </svg>"#;
//! let xml = svg2vd::convert_str(svg, &svg2vd::Settings::default()).unwrap();
//! assert!(xml.contains(r##"android:fillColor="#FF0000""##));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Processes a directory of SVG files
mod batch;
/// Maps named colors to hex values
mod color;
/// Converts an SVG to a [`VectorDrawable`]
mod converter;
/// Target document model
mod drawable;
mod error;
/// Serializes a [`VectorDrawable`] to XML
mod postprocess;
/// Extracts class-based styles from embedded CSS
mod style;

pub use batch::{convert_dir, convert_file, drawable_name, list_svgs, BatchConfig, BatchReport};
pub use color::{is_valid_color, resolve_color};
pub use converter::{convert_str, svg2drawable, ConversionConfig, ShapeKind};
pub use drawable::{DrawablePath, Stroke, VectorDrawable};
pub use error::ConvertError;
pub use postprocess::{write_drawable, PostprocessConfig};
pub use style::StyleTable;

/// Everything needed to turn an SVG file into a vector drawable file
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Settings {
    pub conversion: ConversionConfig,
    pub postprocess: PostprocessConfig,
    pub batch: BatchConfig,
}

impl Settings {
    /// Rejects settings that would produce an unusable drawable.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !is_valid_color(&self.conversion.default_fill) {
            return Err(ConvertError::InvalidSettings(format!(
                "default fill `{}` is not a color",
                self.conversion.default_fill
            )));
        }
        if self.batch.extension.is_empty() {
            return Err(ConvertError::InvalidSettings(
                "source extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
