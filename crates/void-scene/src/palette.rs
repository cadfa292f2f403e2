//! Display mode and the colors, fog, and light levels it selects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SceneError;

/// An 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_hex_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// sRGB channels scaled to `[0, 1]`.
    pub fn to_srgb_f32(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| f32::from(c) / 255.0)
    }

    /// Linear-light channels, for shading and blending.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb_f32().map(|c| {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Light or dark presentation of the scene, chosen by the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

impl FromStr for DisplayMode {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(SceneError::UnknownMode(s.to_string())),
        }
    }
}

/// Linear depth fog that fades geometry into the background color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Color,
    /// View depth where fog begins.
    pub near: f32,
    /// View depth where geometry is fully fogged.
    pub far: f32,
}

impl Fog {
    pub const NEAR: f32 = 30.0;
    pub const FAR: f32 = 220.0;

    const fn new(color: Color) -> Self {
        Self {
            color,
            near: Self::NEAR,
            far: Self::FAR,
        }
    }

    /// Fog blend factor at `depth`: 0 before `near`, 1 past `far`, smoothstep between.
    pub fn factor(&self, depth: f32) -> f32 {
        let t = ((depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }
}

/// Every mode-dependent constant of the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub fog: Fog,
    pub point_color: Color,
    pub point_opacity: f32,
    pub haze_color: Color,
    pub haze_opacity: f32,
    pub ambient_intensity: f32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::from_hex_u32(0x000000),
        fog: Fog::new(Color::from_hex_u32(0x000000)),
        point_color: Color::from_hex_u32(0xffffff),
        point_opacity: 0.6,
        haze_color: Color::from_hex_u32(0x0a0a0f),
        haze_opacity: 0.12,
        ambient_intensity: 0.15,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::from_hex_u32(0xf5f5f5),
        fog: Fog::new(Color::from_hex_u32(0xf5f5f5)),
        point_color: Color::from_hex_u32(0x111827),
        point_opacity: 0.6,
        haze_color: Color::from_hex_u32(0xcbd5e1),
        haze_opacity: 0.18,
        ambient_intensity: 0.65,
    };
}

/// Look up the palette for a display mode.
pub fn palette_for(mode: DisplayMode) -> Palette {
    match mode {
        DisplayMode::Dark => Palette::DARK,
        DisplayMode::Light => Palette::LIGHT,
    }
}
