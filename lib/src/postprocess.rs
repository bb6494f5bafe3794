use std::io::{self, Write as _};

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::drawable::{DrawablePath, VectorDrawable};
use crate::ConvertError;

const XML_DECLARATION: &[u8] = b"<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";
const ANDROID_NAMESPACE: &str = "http://schemas.android.com/apk/res/android";

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct PostprocessConfig {
    /// Put every element on its own indented line
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set
    pub indent: usize,
}

impl Default for PostprocessConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 4,
        }
    }
}

/// Serializes a drawable, XML declaration included
pub fn write_drawable(
    drawable: &VectorDrawable,
    config: &PostprocessConfig,
) -> Result<String, ConvertError> {
    let mut out = Vec::with_capacity(256 + drawable.paths.len() * 128);
    out.write_all(XML_DECLARATION)
        .map_err(ConvertError::Serialize)?;

    let mut writer = if config.pretty {
        Writer::new_with_indent(&mut out, b' ', config.indent)
    } else {
        Writer::new(&mut out)
    };
    write_vector(&mut writer, drawable).map_err(ConvertError::Serialize)?;

    String::from_utf8(out)
        .map_err(|err| ConvertError::Serialize(io::Error::new(io::ErrorKind::InvalidData, err)))
}

fn write_vector<W: io::Write>(writer: &mut Writer<W>, drawable: &VectorDrawable) -> io::Result<()> {
    let width = format!("{}dp", drawable.width);
    let height = format!("{}dp", drawable.height);

    let mut vector = BytesStart::new("vector");
    vector.push_attribute(("xmlns:android", ANDROID_NAMESPACE));
    vector.push_attribute(("android:width", width.as_str()));
    vector.push_attribute(("android:height", height.as_str()));
    vector.push_attribute(("android:viewportWidth", drawable.viewport_width.as_str()));
    vector.push_attribute(("android:viewportHeight", drawable.viewport_height.as_str()));

    if drawable.paths.is_empty() {
        return writer.write_event(Event::Empty(vector));
    }

    writer.write_event(Event::Start(vector))?;
    for path in &drawable.paths {
        writer.write_event(Event::Empty(path_element(path)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("vector")))
}

fn path_element(path: &DrawablePath) -> BytesStart<'_> {
    let mut element = BytesStart::new("path");
    if let Some(data) = &path.path_data {
        element.push_attribute(("android:pathData", data.as_str()));
    }
    element.push_attribute(("android:fillColor", path.fill_color.as_str()));
    if let Some(stroke) = &path.stroke {
        element.push_attribute(("android:strokeColor", stroke.color.as_str()));
        element.push_attribute(("android:strokeWidth", stroke.width.as_str()));
    }
    element
}
