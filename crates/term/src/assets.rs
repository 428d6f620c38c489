//! Glyph assets for terminal tiles.
//!
//! Faces resolve through a fallback chain: the user theme, then the built-in
//! table for the default vocabulary, then a placeholder. A resolver with no
//! placeholder returns `None` for unknown faces and the tile is drawn blank.

use std::collections::HashMap;

use crate::core::AssetResolver;
use crate::fb::Rgb;
use crate::types::FaceId;

/// What a tile draws when face-up (or the shared back).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub text: String,
    pub color: Rgb,
}

impl Glyph {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

const THEME_COLOR: Rgb = Rgb::new(235, 235, 235);
const PLACEHOLDER_COLOR: Rgb = Rgb::new(150, 150, 150);
const BACK_COLOR: Rgb = Rgb::new(90, 110, 170);

/// Built-in glyphs for the default vocabulary.
fn builtin(face: &str) -> Option<Glyph> {
    let (text, color) = match face {
        "Darkness" => ("DRK", Rgb::new(120, 90, 160)),
        "Double" => ("DBL", Rgb::new(200, 200, 200)),
        "Fairy" => ("FRY", Rgb::new(240, 140, 200)),
        "Fighting" => ("FGT", Rgb::new(200, 120, 70)),
        "Fire" => ("FIR", Rgb::new(230, 80, 60)),
        "Grass" => ("GRS", Rgb::new(100, 200, 90)),
        "Lightning" => ("LGT", Rgb::new(245, 220, 70)),
        "Metal" => ("MTL", Rgb::new(170, 180, 190)),
        "Psychic" => ("PSY", Rgb::new(200, 100, 220)),
        "Water" => ("WTR", Rgb::new(80, 150, 240)),
        _ => return None,
    };
    Some(Glyph::new(text, color))
}

#[derive(Debug, Clone)]
pub struct GlyphResolver {
    theme: HashMap<String, String>,
    placeholder: Option<Glyph>,
    back: Option<Glyph>,
}

impl Default for GlyphResolver {
    fn default() -> Self {
        Self {
            theme: HashMap::new(),
            placeholder: Some(Glyph::new("?", PLACEHOLDER_COLOR)),
            back: Some(Glyph::new("░", BACK_COLOR)),
        }
    }
}

impl GlyphResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Face name -> glyph text overrides, checked before the built-in table.
    pub fn with_theme(mut self, theme: impl IntoIterator<Item = (String, String)>) -> Self {
        self.theme = theme.into_iter().collect();
        self
    }

    /// Drop the last fallback; unknown faces then resolve to `None`.
    pub fn without_placeholder(mut self) -> Self {
        self.placeholder = None;
        self
    }

    pub fn with_back(mut self, back: Option<Glyph>) -> Self {
        self.back = back;
        self
    }

    fn themed(&self, face: &str) -> Option<Glyph> {
        let text = self.theme.get(face)?;
        if text.is_empty() {
            return None;
        }
        let color = builtin(face).map_or(THEME_COLOR, |g| g.color);
        Some(Glyph::new(text.clone(), color))
    }
}

impl AssetResolver for GlyphResolver {
    type Image = Glyph;

    fn resolve_face(&self, face: &FaceId) -> Option<Glyph> {
        let name = face.as_str();
        self.themed(name)
            .or_else(|| builtin(name))
            .or_else(|| self.placeholder.clone())
    }

    fn back_image(&self) -> Option<Glyph> {
        self.back.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_default_vocabulary() {
        let resolver = GlyphResolver::new();
        for name in crate::types::DEFAULT_VOCABULARY {
            let glyph = resolver.resolve_face(&FaceId::new(name)).unwrap();
            assert_ne!(glyph.text, "?", "{name} fell through to the placeholder");
        }
    }

    #[test]
    fn theme_overrides_builtin() {
        let theme = HashMap::from([("Fire".to_string(), "FLM".to_string())]);
        let resolver = GlyphResolver::new().with_theme(theme);
        let glyph = resolver.resolve_face(&FaceId::new("Fire")).unwrap();
        assert_eq!(glyph.text, "FLM");
        assert_eq!(glyph.color, builtin("Fire").unwrap().color);
    }

    #[test]
    fn empty_theme_entry_falls_through() {
        let theme = HashMap::from([("Water".to_string(), String::new())]);
        let resolver = GlyphResolver::new().with_theme(theme);
        assert_eq!(resolver.resolve_face(&FaceId::new("Water")), builtin("Water"));
    }

    #[test]
    fn unknown_face_uses_placeholder() {
        let resolver = GlyphResolver::new();
        let glyph = resolver.resolve_face(&FaceId::new("Dragon")).unwrap();
        assert_eq!(glyph.text, "?");
    }

    #[test]
    fn total_failure_is_none() {
        let resolver = GlyphResolver::new().without_placeholder().with_back(None);
        assert_eq!(resolver.resolve_face(&FaceId::new("Dragon")), None);
        assert_eq!(resolver.back_image(), None);
    }
}
