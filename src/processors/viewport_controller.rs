use crate::models::{CameraUpdate, OutletFeature, ViewportTarget};
use crate::settings::ViewportSettings;
use tracing::debug;

/// Tracks where the map camera should be.
///
/// State changes are immediate; the returned [`CameraUpdate`] tells the map
/// view how to animate towards the new target.
#[derive(Debug, Clone)]
pub struct ViewportController {
    settings: ViewportSettings,
    target: ViewportTarget,
}

impl ViewportController {
    pub fn new(settings: ViewportSettings) -> Self {
        let target = ViewportTarget::new(settings.default_center, settings.default_zoom);
        Self { settings, target }
    }

    pub fn default_target(&self) -> ViewportTarget {
        ViewportTarget::new(self.settings.default_center, self.settings.default_zoom)
    }

    pub fn target(&self) -> ViewportTarget {
        self.target
    }

    pub fn reset(&mut self) -> CameraUpdate {
        self.target = self.default_target();
        debug!(zoom = self.target.zoom, "Viewport reset");
        self.camera_update()
    }

    pub fn focus(&mut self, feature: &OutletFeature) -> CameraUpdate {
        self.target = ViewportTarget::new(feature.coordinate(), self.settings.focus_zoom);
        debug!(name = feature.name(), zoom = self.target.zoom, "Viewport focused");
        self.camera_update()
    }

    pub fn camera_update(&self) -> CameraUpdate {
        CameraUpdate {
            center: self.target.center,
            zoom: self.target.zoom,
            duration_ms: self.settings.transition_ms,
            easing: self.settings.easing,
        }
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewportSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Easing, OutletProperties};

    #[test]
    fn test_starts_at_default() {
        let controller = ViewportController::default();
        let target = controller.target();

        assert_eq!(target.center, Coordinate::new(2.213749, 46.227638));
        assert_eq!(target.zoom, 5.0);
    }

    #[test]
    fn test_focus_then_reset() {
        let mut controller = ViewportController::default();
        let feature =
            OutletFeature::new(Coordinate::new(4.8357, 45.764), OutletProperties::default());

        let update = controller.focus(&feature);
        assert_eq!(update.center, Coordinate::new(4.8357, 45.764));
        assert_eq!(update.zoom, 20.0);
        assert_eq!(update.duration_ms, 1000);
        assert_eq!(update.easing, Easing::Linear);
        assert_eq!(controller.target(), update.target());

        let update = controller.reset();
        assert_eq!(update.target(), controller.default_target());
    }

    #[test]
    fn test_custom_settings() {
        let settings = ViewportSettings {
            focus_zoom: 15.0,
            transition_ms: 250,
            easing: Easing::EaseInOut,
            ..Default::default()
        };
        let mut controller = ViewportController::new(settings);
        let feature = OutletFeature::new(Coordinate::new(1.0, 2.0), OutletProperties::default());

        let update = controller.focus(&feature);
        assert_eq!(update.zoom, 15.0);
        assert_eq!(update.duration_ms, 250);
        assert_eq!(update.easing, Easing::EaseInOut);
    }
}
