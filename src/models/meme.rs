use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_BOTTOM_TEXT, DEFAULT_IMAGE_URL, DEFAULT_TOP_TEXT};

/// The caption/image triple the user is editing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meme {
    pub top_text: String,
    pub bottom_text: String,
    pub image_url: String,
}

impl Meme {
    pub fn new(
        top_text: impl Into<String>,
        bottom_text: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            top_text: top_text.into(),
            bottom_text: bottom_text.into(),
            image_url: image_url.into(),
        }
    }

    /// Get the text of a caption field
    pub fn caption(&self, field: MemeField) -> &str {
        match field {
            MemeField::TopText => &self.top_text,
            MemeField::BottomText => &self.bottom_text,
        }
    }

    /// Overwrite a single caption field, leaving the rest untouched
    pub fn set_caption(&mut self, field: MemeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MemeField::TopText => self.top_text = value,
            MemeField::BottomText => self.bottom_text = value,
        }
    }

    /// Swap the background image
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = url.into();
    }
}

impl Default for Meme {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_TEXT, DEFAULT_BOTTOM_TEXT, DEFAULT_IMAGE_URL)
    }
}

/// Editable caption fields of a [`Meme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemeField {
    TopText,
    BottomText,
}

impl MemeField {
    /// Form order
    pub const ALL: [Self; 2] = [Self::TopText, Self::BottomText];

    /// Label shown next to the input
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopText => "Top Text",
            Self::BottomText => "Bottom Text",
        }
    }

    /// `name` attribute of the input element
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::TopText => "topText",
            Self::BottomText => "bottomText",
        }
    }

    /// CSS class of the caption overlay
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::TopText => "top",
            Self::BottomText => "bottom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_meme_captions() {
        let meme = Meme::default();

        assert_eq!(meme.caption(MemeField::TopText), "One does not simply");
        assert_eq!(meme.caption(MemeField::BottomText), "Walk into Mordor");
        assert_eq!(meme.image_url, "http://i.imgflip.com/1bij.jpg");
    }

    #[test]
    fn test_set_top_caption_only_touches_top() {
        let mut meme = Meme::default();
        meme.set_caption(MemeField::TopText, "Brace yourselves");

        assert_eq!(meme.top_text, "Brace yourselves");
        assert_eq!(meme.bottom_text, "Walk into Mordor");
        assert_eq!(meme.image_url, "http://i.imgflip.com/1bij.jpg");
    }

    #[test]
    fn test_set_bottom_caption_only_touches_bottom() {
        let mut meme = Meme::default();
        meme.set_caption(MemeField::BottomText, "");

        assert_eq!(meme.top_text, "One does not simply");
        assert_eq!(meme.bottom_text, "");
        assert_eq!(meme.image_url, "http://i.imgflip.com/1bij.jpg");
    }

    #[test]
    fn test_set_image_url_keeps_captions() {
        let mut meme = Meme::new("top", "bottom", "a");
        meme.set_image_url("b");

        assert_eq!(meme, Meme::new("top", "bottom", "b"));
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(MemeField::ALL, [MemeField::TopText, MemeField::BottomText]);
        assert_eq!(MemeField::TopText.input_name(), "topText");
        assert_eq!(MemeField::BottomText.input_name(), "bottomText");
        assert_eq!(MemeField::BottomText.label(), "Bottom Text");
        assert_eq!(MemeField::BottomText.css_class(), "bottom");
    }
}
