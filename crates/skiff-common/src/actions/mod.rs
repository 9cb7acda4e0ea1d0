use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// Scroll direction axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

/// How far a scroll action moves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollStep {
    /// Step increments; negative scrolls up/left.
    Lines(i32),
    /// Page increments; negative scrolls up/left.
    Pages(i32),
}

/// Boolean engine settings that can be flipped per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Setting {
    CaretBrowsing,
    AutoLoadImages,
    Scripts,
    Plugins,
}
