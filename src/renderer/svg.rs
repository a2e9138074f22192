//! SVG generation from a drawing description

use crate::drawing::{DrawingDescription, ImagePlacement};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add an accessible title
    pub fn add_title(&mut self, title: &str) {
        self.elements.push(format!(
            "{}<title>{}</title>",
            self.indent_str(),
            escape_xml(title)
        ));
    }

    /// Add a filled path
    pub fn add_path(&mut self, fill: &str, d: &str) {
        self.elements.push(format!(
            r#"{}<path fill="{}" d="{}"/>"#,
            self.indent_str(),
            escape_xml(fill),
            d
        ));
    }

    /// Add an overlay image stretched to its placement box
    pub fn add_image(&mut self, image: &ImagePlacement) {
        let href = escape_xml(&image.source);
        self.elements.push(format!(
            r#"{}<image href="{}" xlink:href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none" opacity="{}"/>"#,
            self.indent_str(),
            href,
            href,
            image.x,
            image.y,
            image.width,
            image.height,
            image.opacity
        ));
    }

    /// Build the final SVG string
    pub fn build(self, size: f64, view_box: [usize; 4]) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let rendering = if self.config.crisp_edges {
            r#" shape-rendering="crispEdges""#
        } else {
            ""
        };
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="{} {} {} {}" role="img"{}>"#,
            size, size, view_box[0], view_box[1], view_box[2], view_box[3], rendering
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a drawing to an SVG string
///
/// Element order: title, background, foreground, overlay image.
pub fn render_svg(drawing: &DrawingDescription, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    if let Some(title) = &drawing.title {
        builder.add_title(title);
    }
    builder.add_path(&drawing.background_color, &drawing.background_d());
    builder.add_path(&drawing.foreground_color, &drawing.foreground.to_svg_d());
    if let Some(image) = &drawing.image {
        builder.add_image(image);
    }

    builder.build(drawing.size, drawing.view_box())
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
