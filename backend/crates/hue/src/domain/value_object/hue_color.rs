//! Hue Color
//!
//! 回答で選べる固定 11 色のパレット。ラベルは画面表示と同じ日本語。

use std::fmt;
use std::str::FromStr;

use crate::error::HueError;

/// One of the eleven allowed colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HueColor {
    Black,
    Gray,
    White,
    Pink,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Brown,
}

impl HueColor {
    /// The full palette in display order
    pub const ALL: [HueColor; 11] = [
        HueColor::Black,
        HueColor::Gray,
        HueColor::White,
        HueColor::Pink,
        HueColor::Red,
        HueColor::Orange,
        HueColor::Yellow,
        HueColor::Green,
        HueColor::Blue,
        HueColor::Purple,
        HueColor::Brown,
    ];

    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            HueColor::Black => "黒",
            HueColor::Gray => "灰色",
            HueColor::White => "白",
            HueColor::Pink => "ピンク",
            HueColor::Red => "赤",
            HueColor::Orange => "オレンジ",
            HueColor::Yellow => "黄色",
            HueColor::Green => "緑",
            HueColor::Blue => "青",
            HueColor::Purple => "紫",
            HueColor::Brown => "茶",
        }
    }

    /// Look a color up by its label (surrounding whitespace ignored)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl FromStr for HueColor {
    type Err = HueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| HueError::InvalidChoice(format!("unknown color {s:?}")))
    }
}

impl fmt::Display for HueColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
