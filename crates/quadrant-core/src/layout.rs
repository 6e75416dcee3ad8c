// File: crates/quadrant-core/src/layout.rs
// Summary: Artboard layout: padding, viewBox, container offset, corner annotations.

use crate::types::Labels;

/// Text anchoring for corner annotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

impl Anchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::End => "end",
        }
    }
}

/// One corner label describing the low/high meaning of each axis end.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub position: (f64, f64),
    pub text: [String; 2],
    pub anchor: Anchor,
}

/// Everything derived from `(unit, width, height, labels)`. Pure and cheap:
/// recomputed on every render/update so nothing cached can go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtboardLayout {
    pub padding: f64,
    pub viewbox: [f64; 4],
    pub offset: (f64, f64),
    pub annotations: [Annotation; 4],
}

impl ArtboardLayout {
    pub fn compute(unit: f64, width: f64, height: f64, labels: &Labels) -> Self {
        let padding = unit * 3.0;
        let left = padding / 2.0;
        let right = width + padding / 2.0;
        let top = padding * 0.35;
        let bottom = height + padding * 0.85;

        let low_x = format!("low {}", labels.x);
        let high_x = format!("high {}", labels.x);
        let low_y = format!("low {}", labels.y);
        let high_y = format!("high {}", labels.y);

        // fixed corner order: top-left, bottom-left, bottom-right, top-right
        let annotations = [
            Annotation {
                position: (left, top),
                text: [low_x.clone(), high_y.clone()],
                anchor: Anchor::Start,
            },
            Annotation {
                position: (left, bottom),
                text: [low_x, low_y.clone()],
                anchor: Anchor::Start,
            },
            Annotation {
                position: (right, bottom),
                text: [high_x.clone(), low_y],
                anchor: Anchor::End,
            },
            Annotation {
                position: (right, top),
                text: [high_x, high_y],
                anchor: Anchor::End,
            },
        ];

        Self {
            padding,
            viewbox: [0.0, 0.0, width + padding, height + padding],
            offset: (padding / 2.0, padding / 2.0),
            annotations,
        }
    }
}
