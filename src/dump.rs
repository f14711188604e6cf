//! Defines the rendering of values included in diagnostic logs.

use serde::Serialize;
use std::fmt::Debug;

/// Rendering strategy for logged values, chosen once at startup and
/// applied at every dump site.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DumpStyle {
    /// Use the value's debug representation.
    Debug,
    /// Serialize the value as pretty-printed JSON.
    Json,
}

impl DumpStyle {
    /// Select the style from the serialize-to-JSON setting.
    pub fn from_flag(serialize_to_json: bool) -> Self {
        if serialize_to_json {
            DumpStyle::Json
        } else {
            DumpStyle::Debug
        }
    }

    /// Render a single value for inclusion in a log line. Values that
    /// fail to serialize fall back to their debug representation.
    pub fn render<T: Serialize + Debug>(self, value: &T) -> String {
        match self {
            DumpStyle::Json => serde_json::to_string_pretty(value)
                .unwrap_or_else(|_| format!("{:?}", value)),
            DumpStyle::Debug => format!("{:?}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    struct Sample {
        name: &'static str,
    }

    #[test]
    fn debug_style_uses_debug_representation() {
        let rendered = DumpStyle::Debug.render(&Sample { name: "probe" });
        assert_eq!(rendered, "Sample { name: \"probe\" }");
    }

    #[test]
    fn json_style_pretty_prints() {
        let rendered = DumpStyle::Json.render(&Sample { name: "probe" });
        assert_eq!(rendered, "{\n  \"name\": \"probe\"\n}");
    }

    #[test]
    fn style_follows_the_flag() {
        assert_eq!(DumpStyle::from_flag(false), DumpStyle::Debug);
        assert_eq!(DumpStyle::from_flag(true), DumpStyle::Json);
    }
}
