//! Sketch rendering of [`Primitive`]s.
//!
//! | Primitive | Rendering |
//! |-----------|-----------|
//! | `Rectangle` | light fill (hachure or solid) under a rough outline |
//! | `Line` | rough stroke |
//! | `Circle` | filled dot under a rough circular outline |
//! | `Text` | `<text>` glyph hanging from its anchor |

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, FillStyle, LayeredOutput, Sketcher},
    geometry::{Bounds, Point, Size},
    primitive::Primitive,
};

impl Drawable for Primitive {
    fn render_to_layers(&self, sketcher: &mut Sketcher<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let layer = self.layer();
        let style = sketcher.style();

        match *self {
            Self::Rectangle {
                x,
                y,
                width,
                height,
            } => {
                let bounds = Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height));
                let fill = style.fill();

                match fill.style() {
                    FillStyle::Hachure => {
                        output.add_to_layer(layer, sketcher.hachure(bounds));
                    }
                    FillStyle::Solid => {
                        let rect = svg_element::Rectangle::new()
                            .set("x", x)
                            .set("y", y)
                            .set("width", width)
                            .set("height", height)
                            .set("fill", fill.color().to_opaque_string())
                            .set("fill-opacity", fill.color().alpha())
                            .set("stroke", "none");
                        output.add_to_layer(layer, Box::new(rect));
                    }
                    FillStyle::None => {}
                }

                output.add_to_layer(layer, sketcher.rectangle_outline(bounds));
            }
            Self::Line { x, y, x2, y2 } => {
                output.add_to_layer(layer, sketcher.line(Point::new(x, y), Point::new(x2, y2)));
            }
            Self::Circle { x, y, diameter } => {
                let dot = svg_element::Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", diameter / 2.0)
                    .set("fill", style.dot_fill().to_opaque_string())
                    .set("fill-opacity", style.dot_fill().alpha())
                    .set("stroke", "none");
                output.add_to_layer(layer, Box::new(dot));
                output.add_to_layer(layer, sketcher.circle_outline(Point::new(x, y), diameter));
            }
            Self::Text { x, y, character } => {
                let text = style.text();
                let glyph = svg_element::Text::new(character.to_string())
                    .set("x", x)
                    .set("y", y)
                    .set("dominant-baseline", "hanging")
                    .set("font-family", text.font_family())
                    .set("font-size", u32::from(text.font_size()))
                    .set("fill", text.color().to_opaque_string())
                    .set("fill-opacity", text.color().alpha());
                output.add_to_layer(layer, Box::new(glyph));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{FillDefinition, SketchStyle, StrokeDefinition, TextDefinition};

    fn render(primitive: Primitive, style: &SketchStyle) -> Vec<String> {
        let mut sketcher = Sketcher::new(style, 42);
        primitive
            .render_to_layers(&mut sketcher)
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    fn style_with_fill(fill_style: FillStyle) -> SketchStyle {
        let defaults = SketchStyle::default();
        SketchStyle::new(
            StrokeDefinition::default(),
            FillDefinition::new(defaults.fill().color(), fill_style),
            defaults.dot_fill(),
            TextDefinition::default(),
            defaults.roughness(),
        )
    }

    #[test]
    fn test_rectangle_hachure_renders_fill_and_outline() {
        let rect = Primitive::rectangle(Point::new(1.0, 2.0), Size::new(58.0, 18.0));
        let groups = render(rect, &style_with_fill(FillStyle::Hachure));

        assert_eq!(groups.len(), 1);
        assert!(groups[0].contains("data-layer=\"box\""));
        assert_eq!(groups[0].matches("<path").count(), 2);
    }

    #[test]
    fn test_rectangle_solid_fill() {
        let rect = Primitive::rectangle(Point::new(1.0, 2.0), Size::new(58.0, 18.0));
        let groups = render(rect, &style_with_fill(FillStyle::Solid));

        assert!(groups[0].contains("<rect"));
        assert!(groups[0].contains("fill=\"rgb(99, 102, 241)\""));
        assert!(groups[0].contains("fill-opacity=\"0.05\""));
        assert_eq!(groups[0].matches("<path").count(), 1);
    }

    #[test]
    fn test_rectangle_without_fill() {
        let rect = Primitive::rectangle(Point::new(1.0, 2.0), Size::new(58.0, 18.0));
        let groups = render(rect, &style_with_fill(FillStyle::None));

        assert!(!groups[0].contains("<rect"));
        assert_eq!(groups[0].matches("<path").count(), 1);
    }

    #[test]
    fn test_line_renders_on_stroke_layer() {
        let line = Primitive::line(Point::new(1.0, 11.0), Point::new(11.0, 11.0));
        let groups = render(line, &SketchStyle::default());

        assert!(groups[0].contains("data-layer=\"stroke\""));
        assert!(groups[0].contains("fill=\"none\""));
    }

    #[test]
    fn test_circle_renders_dot_and_outline() {
        let dot = Primitive::circle(Point::new(6.0, 11.0), 3.0);
        let groups = render(dot, &SketchStyle::default());

        assert!(groups[0].contains("<circle"));
        assert!(groups[0].contains("r=\"1.5\""));
        assert!(groups[0].contains("<path"));
    }

    #[test]
    fn test_text_renders_glyph() {
        let text = Primitive::text(Point::new(2.0, 2.0), 'Q');
        let groups = render(text, &SketchStyle::default());

        assert!(groups[0].contains("data-layer=\"text\""));
        assert!(groups[0].contains("<text"));
        assert!(groups[0].contains('Q'));
        assert!(groups[0].contains("dominant-baseline=\"hanging\""));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let rect = Primitive::rectangle(Point::new(1.0, 2.0), Size::new(30.0, 18.0));
        let style = SketchStyle::default();
        assert_eq!(render(rect, &style), render(rect, &style));
    }
}
