//! Hue Choices
//!
//! 単語ごとの色の割り当て。構築時に一度だけ検証・複製し、以降は読み取り
//! 専用の参照だけを渡す。

use std::collections::BTreeMap;

use crate::domain::value_object::hue_color::HueColor;
use crate::error::{HueError, HueResult};

/// Non-empty mapping of word to palette color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueChoices(BTreeMap<String, HueColor>);

impl HueChoices {
    /// Validate a raw word → color-label map
    ///
    /// Fails when the map is empty, when a word or color is blank after
    /// trimming, when a color is outside the palette, or when two words
    /// collapse to the same trimmed word.
    pub fn new<'a, I>(raw: I) -> HueResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut values = BTreeMap::new();

        for (word, color) in raw {
            let word = word.trim();
            if word.is_empty() {
                return Err(HueError::InvalidChoice("word cannot be blank".to_string()));
            }

            if color.trim().is_empty() {
                return Err(HueError::InvalidChoice(format!(
                    "color for {word:?} cannot be blank"
                )));
            }

            let color: HueColor = color.parse()?;

            if values.insert(word.to_string(), color).is_some() {
                return Err(HueError::InvalidChoice(format!("duplicate word {word:?}")));
            }
        }

        if values.is_empty() {
            return Err(HueError::InvalidChoice(
                "at least one choice is required".to_string(),
            ));
        }

        Ok(Self(values))
    }

    /// Validate an owned string map (request payloads, stored JSON)
    pub fn from_map(raw: &BTreeMap<String, String>) -> HueResult<Self> {
        Self::new(raw.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Word → color label, as sent over the wire and stored
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(w, c)| (w.clone(), c.label().to_string()))
            .collect()
    }
}
