//! The decorative icon field behind the hero: six icons at fixed 3D
//! positions, seen through a static perspective camera and flattened onto
//! the page as absolutely positioned elements.

use std::f64::consts::PI;

pub const CYAN: &str = "#00ffff";
pub const YELLOW: &str = "#ffff00";

const ROTATION_INTENSITY: f64 = 0.5;
const FLOAT_INTENSITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Wifi,
    Camera,
    Cpu,
    Usb,
    Zap,
    Cog,
}

impl IconKind {
    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Wifi => "📶",
            IconKind::Camera => "📷",
            IconKind::Cpu => "🖥",
            IconKind::Usb => "🔌",
            IconKind::Zap => "⚡",
            IconKind::Cog => "⚙",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IconKind::Wifi => "wifi",
            IconKind::Camera => "camera",
            IconKind::Cpu => "cpu",
            IconKind::Usb => "usb",
            IconKind::Zap => "zap",
            IconKind::Cog => "cog",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingIcon {
    pub kind: IconKind,
    pub position: [f64; 3],
    pub color: &'static str,
    pub speed: f64,
}

impl FloatingIcon {
    /// One full bob cycle, in seconds.
    pub fn float_period(&self) -> f64 {
        8.0 * PI / self.speed
    }

    /// Peak vertical drift in world units.
    pub fn float_amplitude(&self) -> f64 {
        0.1 * FLOAT_INTENSITY
    }

    /// Peak roll while bobbing, in degrees.
    pub fn tilt_degrees(&self) -> f64 {
        (ROTATION_INTENSITY / 20.0).to_degrees()
    }
}

pub fn icon_field() -> Vec<FloatingIcon> {
    let layout = [
        (IconKind::Wifi, [-4.0, 3.0, -2.0], CYAN),
        (IconKind::Camera, [4.0, 2.0, -1.0], CYAN),
        (IconKind::Cpu, [-3.0, -2.0, -3.0], YELLOW),
        (IconKind::Usb, [3.0, -1.0, -2.0], YELLOW),
        (IconKind::Zap, [-5.0, 0.0, -1.0], YELLOW),
        (IconKind::Cog, [5.0, 1.0, -3.0], YELLOW),
    ];

    layout
        .iter()
        .enumerate()
        .map(|(index, &(kind, position, color))| FloatingIcon {
            kind,
            position,
            color,
            speed: 1.5 + index as f64 * 0.2,
        })
        .collect()
}

/// Where a projected point lands, in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x_pct: f64,
    pub y_pct: f64,
    /// Screen-space size of one world unit, relative to viewport height.
    pub unit_scale: f64,
}

/// Pinhole camera looking down -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: [f64; 3],
    pub fov_degrees: f64,
    pub near: f64,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            fov_degrees: 75.0,
            near: 0.1,
        }
    }
}

impl PerspectiveCamera {
    /// `None` when the point is behind the near plane.
    pub fn project(&self, point: [f64; 3], aspect: f64) -> Option<ScreenPoint> {
        let dx = point[0] - self.position[0];
        let dy = point[1] - self.position[1];
        let depth = self.position[2] - point[2];
        if depth < self.near || aspect <= 0.0 {
            return None;
        }

        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let ndc_x = dx * focal / (aspect * depth);
        let ndc_y = dy * focal / depth;

        Some(ScreenPoint {
            x_pct: (ndc_x + 1.0) * 50.0,
            y_pct: (1.0 - ndc_y) * 50.0,
            unit_scale: focal / depth / 2.0,
        })
    }
}
