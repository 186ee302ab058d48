use std::collections::HashMap;

use log::debug;

use super::bitmap::{CharSize, Glyph};
use super::hd44780;
use crate::ConfigError;

/// Character substituted for anything missing from a table.
pub const FALLBACK: char = '?';

/// Immutable character to glyph mapping with a guaranteed fallback.
#[derive(Clone, Debug)]
pub struct GlyphTable {
    char_size: CharSize,
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
}

impl GlyphTable {
    pub fn new<I>(char_size: CharSize, entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (char, Glyph)>,
    {
        let mut glyphs = HashMap::new();
        for (ch, glyph) in entries {
            let found = glyph.size();
            if found != char_size {
                return Err(ConfigError::GlyphSize {
                    ch,
                    expected_w: char_size.w,
                    expected_h: char_size.h,
                    found_w: found.w,
                    found_h: found.h,
                });
            }
            glyphs.insert(ch, glyph);
        }

        let fallback = glyphs.get(&FALLBACK).cloned().ok_or(ConfigError::MissingFallback(FALLBACK))?;

        Ok(Self { char_size, glyphs, fallback })
    }

    /// Builds a table from HD44780-style column bytes.
    pub fn from_columns(char_size: CharSize, entries: &[(char, &[u8])]) -> Result<Self, ConfigError> {
        let glyphs = entries
            .iter()
            .map(|&(ch, columns)| Glyph::from_columns(columns, char_size.h).map(|glyph| (ch, glyph)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(char_size, glyphs)
    }

    /// Built-in 5x7 font covering printable ASCII.
    pub fn standard() -> Result<Self, ConfigError> {
        let entries: Vec<(char, &[u8])> =
            hd44780::GLYPHS.iter().map(|(ch, columns)| (*ch, &columns[..])).collect();
        Self::from_columns(hd44780::CHAR_SIZE, &entries)
    }

    pub fn char_size(&self) -> CharSize {
        self.char_size
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Glyph for `ch`, or the fallback glyph when `ch` is not in the table.
    pub fn lookup(&self, ch: char) -> &Glyph {
        match self.glyphs.get(&ch) {
            Some(glyph) => glyph,
            None => {
                debug!("no glyph for {:?} (U+{:04X}), using {:?}", ch, u32::from(ch), FALLBACK);
                &self.fallback
            },
        }
    }
}
