//! Typography - Material Design 3 Type Scale

/// MD3 type scale constants (font sizes in logical pixels)
pub struct TypeScale;

impl TypeScale {
    pub const DISPLAY_LARGE: f32 = 57.0;
    pub const DISPLAY_MEDIUM: f32 = 45.0;
    pub const DISPLAY_SMALL: f32 = 36.0;

    pub const HEADLINE_LARGE: f32 = 32.0;
    pub const HEADLINE_MEDIUM: f32 = 28.0;
    pub const HEADLINE_SMALL: f32 = 24.0;

    pub const TITLE_LARGE: f32 = 22.0;
    pub const TITLE_MEDIUM: f32 = 16.0;
    pub const TITLE_SMALL: f32 = 14.0;

    pub const BODY_LARGE: f32 = 16.0;
    pub const BODY_MEDIUM: f32 = 14.0;
    pub const BODY_SMALL: f32 = 12.0;

    pub const LABEL_LARGE: f32 = 14.0;
    pub const LABEL_MEDIUM: f32 = 12.0;
    pub const LABEL_SMALL: f32 = 11.0;

    // Line heights
    pub const LEADING_TIGHT: f32 = 1.25;
    pub const LEADING_NORMAL: f32 = 1.5;
}
