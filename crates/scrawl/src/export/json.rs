//! JSON dump of the primitive sequence.
//!
//! Each primitive is written as an object tagged by `type`, matching the
//! shape consumed by canvas front ends:
//!
//! ```json
//! { "type": "rectangle", "x": 1.0, "y": 2.0, "width": 46.0, "height": 18.0 }
//! ```

use std::io::Write;

use log::{debug, error};

use scrawl_core::primitive::Primitive;

use crate::export;

/// Writes primitives as a pretty-printed JSON array.
#[derive(Debug, Default)]
pub struct Json;

impl Json {
    pub fn new() -> Self {
        Self
    }
}

impl export::Exporter for Json {
    fn export_primitives(
        &mut self,
        primitives: &[Primitive],
        writer: &mut dyn Write,
    ) -> Result<(), export::Error> {
        debug!(primitives = primitives.len(); "Writing JSON primitives");

        serde_json::to_writer_pretty(&mut *writer, primitives).map_err(|err| {
            error!(err:err; "Failed to write JSON primitives");
            if err.is_io() {
                export::Error::Io(err.into())
            } else {
                export::Error::Render(err.to_string())
            }
        })?;

        writeln!(writer).map_err(export::Error::Io)
    }
}

#[cfg(test)]
mod tests {
    use scrawl_core::geometry::{Point, Size};

    use super::*;
    use crate::export::Exporter;

    fn export(primitives: &[Primitive]) -> serde_json::Value {
        let mut buffer = Vec::new();
        Json::new()
            .export_primitives(primitives, &mut buffer)
            .unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(export(&[]), serde_json::json!([]));
    }

    #[test]
    fn test_tagged_objects() {
        let value = export(&[
            Primitive::rectangle(Point::new(1.0, 2.0), Size::new(46.0, 18.0)),
            Primitive::text(Point::new(14.0, 2.0), 'a'),
        ]);

        assert_eq!(
            value,
            serde_json::json!([
                { "type": "rectangle", "x": 1.0, "y": 2.0, "width": 46.0, "height": 18.0 },
                { "type": "text", "x": 14.0, "y": 2.0, "text": "a" },
            ])
        );
    }
}
