//! Built-in example sketches.
//!
//! Each [`Example`] pairs a short id, used on the command line, with a
//! display name and its ASCII source.
//!
//! ```
//! # use scrawl::gallery;
//! let rocket = gallery::find("rocket").unwrap();
//! assert_eq!(rocket.name(), "Rocket Art");
//! assert!(gallery::find("spaceship").is_err());
//! ```

use crate::ScrawlError;

/// A named ASCII-art sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    id: &'static str,
    name: &'static str,
    source: &'static str,
}

impl Example {
    const fn new(id: &'static str, name: &'static str, source: &'static str) -> Self {
        Self { id, name, source }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The ASCII art itself.
    pub fn source(&self) -> &'static str {
        self.source
    }
}

const EXAMPLES: [Example; 5] = [
    Example::new(
        "arch",
        "Cloud Arch",
        r"      [ Mobile ]
          |
    +-----+-----+
    |  Auth API |
    +-----+-----+
          |
    +-----+-----+      +--------+
    |  Gateway  | <--- | Config |
    +-----+-----+      +--------+
       /     \
   [Node 1] [Node 2]
      \       /
    +-----+-----+
    | Database  |
    +-----------+",
    ),
    Example::new(
        "flow",
        "Login Flow",
        r"( Start )
    |
[ Credentials ]
    |
{ Valid? } --No--> [ Error ]
    |
   Yes
    |
[ Home Page ]
    |
 ( End )",
    ),
    Example::new(
        "ui",
        "Web Layout",
        r"+-----------------------+
| [ Logo ]  [H] [A] [C] |
+-----------------------+
|                       |
|   [ Better Design ]   |
|   [ Modern Style  ]   |
|                       |
|   +-------+ +-------+ |
|   | Card1 | | Card2 | |
|   +-------+ +-------+ |
+-----------------------+",
    ),
    Example::new(
        "rocket",
        "Rocket Art",
        r"      /\
     |  |
     |  |
    /|  |\
   /_|  |_\
     |  |
    /____\
   ( vvvv )",
    ),
    Example::new(
        "system",
        "Bot System",
        r"      [o] [o]
       \___/
      |     |
    --| ROB |---
      |     |
      +-----+
       /   \
      [ ] [ ]",
    ),
];

/// Returns every built-in example, in gallery order.
pub fn all() -> &'static [Example] {
    &EXAMPLES
}

/// Looks up an example by id.
///
/// # Errors
///
/// Returns [`ScrawlError::UnknownExample`] when no example has that id.
pub fn find(id: &str) -> Result<&'static Example, ScrawlError> {
    EXAMPLES
        .iter()
        .find(|example| example.id == id)
        .ok_or_else(|| ScrawlError::UnknownExample {
            name: id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all().iter().map(Example::id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("arch").unwrap().name(), "Cloud Arch");
        assert!(find("arch").unwrap().source().starts_with("      [ Mobile ]"));
    }

    #[test]
    fn test_unknown_example() {
        let err = find("nope").unwrap_err();
        assert!(matches!(err, ScrawlError::UnknownExample { ref name } if name == "nope"));
    }

    #[test]
    fn test_sources_keep_backslashes() {
        let rocket = find("rocket").unwrap().source();
        assert_eq!(rocket.lines().next(), Some(r"      /\"));
        assert!(!rocket.contains(r"\\"));
    }
}
