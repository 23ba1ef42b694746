//! Site configuration.
//!
//! Loaded from `site.toml`, embedded into the binary at compile time.

use serde::Deserialize;

use crate::error::ConfigError;

const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub scroll: ScrollConfig,
    pub video: VideoConfig,
    pub carousel: CarouselSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub hero_title: String,
    pub tagline: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "SafeLine Pickup".into(),
            hero_title: "Welcome to SafeLine Pickup".into(),
            tagline: "Simplifying School Pickups, One Tap at a Time.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset in CSS pixels past which the back-to-top button appears.
    pub back_to_top_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub title: String,
    pub embed_id: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            title: "Project Demo".into(),
            embed_id: "YOUR_VIDEO_ID".into(),
        }
    }
}

impl VideoConfig {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.embed_id)
    }
}

/// Behaviour of the origin-story carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Render dot indicators below the slides.
    pub dots: bool,
    /// Wrap around at either end.
    pub infinite: bool,
    /// Slide transition duration.
    pub speed_ms: u32,
    pub autoplay: bool,
    pub autoplay_interval_ms: u32,
    /// Render previous/next arrows.
    pub arrows: bool,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    /// Hold autoplay while the pointer is over the carousel.
    pub pause_on_hover: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            dots: true,
            infinite: true,
            speed_ms: 500,
            autoplay: true,
            autoplay_interval_ms: 3000,
            arrows: false,
            slides_to_show: 1,
            slides_to_scroll: 1,
            pause_on_hover: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The `site.toml` compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(EMBEDDED_CONFIG)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.scroll.back_to_top_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid {
                field: "scroll.back_to_top_threshold",
                reason: "must be a non-negative number",
            });
        }
        if self.carousel.slides_to_show == 0 {
            return Err(ConfigError::Invalid {
                field: "carousel.slides_to_show",
                reason: "must be at least 1",
            });
        }
        if self.carousel.slides_to_scroll == 0 {
            return Err(ConfigError::Invalid {
                field: "carousel.slides_to_scroll",
                reason: "must be at least 1",
            });
        }
        if self.carousel.autoplay && self.carousel.autoplay_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "carousel.autoplay_interval_ms",
                reason: "must be positive when autoplay is on",
            });
        }
        Ok(())
    }
}
