//! Lock-on camera for the solar-system menu.
//!
//! Selecting a planet first zooms back out to the base zoom, then pans onto
//! the planet while zooming in, and finally locks on and keeps following it
//! along its orbit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Camera tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fraction of the remaining distance kept per 60 Hz frame
    /// (0.0 = instant snap, 0.9 = smooth).
    pub smoothing: f32,
    /// An axis locks once within this many layout pixels of its target.
    pub offset_epsilon: f32,
    /// Zoom locks once within this fraction of its target.
    pub zoom_epsilon: f32,
    pub base_zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.9,
            offset_epsilon: 0.5,
            zoom_epsilon: 0.01,
            base_zoom: 1.0,
            min_zoom: 0.05,
            max_zoom: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// No focus yet.
    Idle,
    /// Returning to the base zoom before panning to a new focus.
    ZoomingOut,
    /// Converging on the focus.
    Panning,
    /// Following the focus exactly.
    LockedOnPlanet,
}

/// Offset and zoom that centre a planet on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockTarget {
    pub offset: Vec2,
    pub zoom: f32,
}

impl LockTarget {
    /// The pan offset cancels the planet's scaled distance from the centre;
    /// the zoom makes the planet appear as large as the reference body.
    pub fn for_planet(
        planet_pos: Vec2,
        center: Vec2,
        layout_scale: f32,
        planet_size: f32,
        reference_size: f32,
    ) -> Self {
        let zoom = if planet_size > 0.0 {
            reference_size / planet_size
        } else {
            1.0
        };
        Self {
            offset: -(planet_pos - center) * layout_scale,
            zoom,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CameraController {
    config: CameraConfig,
    mode: CameraMode,
    focus: Option<usize>,
    zoom: f32,
    target_zoom: f32,
    offset: Vec2,
    target_offset: Vec2,
    /// False until the first `track` after a selection; the first target is
    /// taken as-is rather than treated as target motion.
    tracking: bool,
    x_locked: bool,
    y_locked: bool,
    zoom_locked: bool,
}

impl CameraController {
    pub fn new(config: CameraConfig) -> Self {
        let zoom = config.base_zoom;
        Self {
            config,
            mode: CameraMode::Idle,
            focus: None,
            zoom,
            target_zoom: zoom,
            offset: Vec2::ZERO,
            target_offset: Vec2::ZERO,
            tracking: false,
            x_locked: false,
            y_locked: false,
            zoom_locked: false,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    pub fn target_offset(&self) -> Vec2 {
        self.target_offset
    }

    /// Whether both axes and the zoom have locked.
    pub fn is_locked(&self) -> bool {
        self.x_locked && self.y_locked && self.zoom_locked
    }

    /// Focus a new body. Locks are cleared and the flight restarts from the
    /// current offset and zoom, wherever the camera is.
    pub fn select(&mut self, index: usize) -> CameraMode {
        self.focus = Some(index);
        self.x_locked = false;
        self.y_locked = false;
        self.zoom_locked = false;
        self.tracking = false;
        let base = self.config.base_zoom;
        self.mode = if self.zoom > base * (1.0 + self.config.zoom_epsilon) {
            CameraMode::ZoomingOut
        } else {
            CameraMode::Panning
        };
        log::debug!("camera: focus {} ({:?})", index, self.mode);
        self.mode
    }

    /// Update the lock target for the focused body (it moves every frame).
    ///
    /// While panning, target motion is carried straight into the unlocked
    /// axes so the remaining error keeps shrinking even though the planet
    /// orbits. Once locked the offset snaps to the target.
    pub fn track(&mut self, target: LockTarget) {
        let new_offset = target.offset;
        if self.tracking && self.mode == CameraMode::Panning {
            let delta = new_offset - self.target_offset;
            if !self.x_locked {
                self.offset.x += delta.x;
            }
            if !self.y_locked {
                self.offset.y += delta.y;
            }
        }
        self.target_offset = new_offset;
        self.target_zoom = target.zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        self.tracking = true;

        if self.mode == CameraMode::LockedOnPlanet {
            self.offset = self.target_offset;
            self.zoom = self.target_zoom;
        }
    }

    /// Advance the smoothing by `dt` seconds. Zoom only moves towards its
    /// target when `zoom_enabled`. Returns the new mode when it changed.
    pub fn update(&mut self, dt: f32, zoom_enabled: bool) -> Option<CameraMode> {
        let before = self.mode;
        let k = 1.0 - self.config.smoothing.powf(dt.max(0.0) * 60.0);

        match self.mode {
            CameraMode::Idle => {}
            CameraMode::ZoomingOut => {
                let base = self.config.base_zoom;
                self.zoom += (base - self.zoom) * k;
                if (self.zoom - base).abs() <= base * self.config.zoom_epsilon {
                    self.zoom = base;
                    self.mode = CameraMode::Panning;
                }
            }
            CameraMode::Panning => {
                let eps = self.config.offset_epsilon;
                step_axis(&mut self.offset.x, self.target_offset.x, k, eps, &mut self.x_locked);
                step_axis(&mut self.offset.y, self.target_offset.y, k, eps, &mut self.y_locked);

                if self.zoom_locked {
                    self.zoom = self.target_zoom;
                } else if zoom_enabled {
                    self.zoom += (self.target_zoom - self.zoom) * k;
                    let tolerance = self.target_zoom * self.config.zoom_epsilon;
                    if (self.target_zoom - self.zoom).abs() <= tolerance {
                        self.zoom = self.target_zoom;
                        self.zoom_locked = true;
                    }
                }

                if self.is_locked() {
                    self.mode = CameraMode::LockedOnPlanet;
                }
            }
            CameraMode::LockedOnPlanet => {
                self.offset = self.target_offset;
                self.zoom = self.target_zoom;
            }
        }

        self.zoom = self.zoom.clamp(self.config.min_zoom, self.config.max_zoom);

        if self.mode != before {
            log::debug!("camera: {:?} -> {:?}", before, self.mode);
            Some(self.mode)
        } else {
            None
        }
    }
}

fn step_axis(value: &mut f32, target: f32, k: f32, epsilon: f32, locked: &mut bool) {
    if *locked {
        *value = target;
        return;
    }
    *value += (target - *value) * k;
    if (target - *value).abs() <= epsilon {
        *value = target;
        *locked = true;
    }
}
