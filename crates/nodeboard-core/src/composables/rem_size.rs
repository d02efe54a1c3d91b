pub(crate) const SOURCE_PATH: &str = file!();

/// Fallback base font size, matching the usual browser/root default.
pub const DEFAULT_PIXELS_PER_REM: f32 = 16.0;

/// Wraps the UI's base font size so sizes can be expressed in rem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemSizeUnit {
    pixels_per_rem: f32,
}

impl Default for RemSizeUnit {
    fn default() -> Self {
        Self {
            pixels_per_rem: DEFAULT_PIXELS_PER_REM,
        }
    }
}

impl RemSizeUnit {
    /// The scale must be a positive finite pixel count; anything else falls
    /// back to the default.
    pub fn new(pixels_per_rem: f32) -> Self {
        if pixels_per_rem.is_finite() && pixels_per_rem > 0.0 {
            Self { pixels_per_rem }
        } else {
            log::warn!(
                "ignoring invalid rem scale {} px, using {} px",
                pixels_per_rem,
                DEFAULT_PIXELS_PER_REM
            );
            Self::default()
        }
    }

    /// Read the base font size from the egui style.
    pub fn from_egui(ctx: &egui::Context) -> Self {
        Self::new(egui::TextStyle::Body.resolve(ctx.style().as_ref()).size)
    }

    pub fn pixels_per_rem(&self) -> f32 {
        self.pixels_per_rem
    }

    pub fn rem_in_pixels(&self, rem: f32) -> f32 {
        self.pixels_per_rem * rem
    }
}
