//! Mode controller: current mode, derived flags and control indicators.

use super::mode::DrawingMode;
use crate::config::CanvasVariant;
use crate::draw::ShapeKind;
use crate::error::CanvasError;

/// Semantic flags derived from the active mode.
///
/// At most one of `erasing`, `drawing_shape` and `text_mode` is set; all
/// clear means freehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeFlags {
    pub erasing: bool,
    pub drawing_shape: bool,
    pub shape_kind: Option<ShapeKind>,
    pub text_mode: bool,
}

impl ModeFlags {
    pub fn for_mode(mode: DrawingMode) -> Self {
        match mode {
            DrawingMode::Freehand => Self::default(),
            DrawingMode::Eraser => Self {
                erasing: true,
                ..Self::default()
            },
            DrawingMode::Circle | DrawingMode::Rectangle => Self {
                drawing_shape: true,
                shape_kind: mode.shape_kind(),
                ..Self::default()
            },
            DrawingMode::Text => Self {
                text_mode: true,
                ..Self::default()
            },
        }
    }
}

/// "Active" markers for the mode controls of one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeIndicators {
    controls: Vec<(DrawingMode, bool)>,
}

impl ModeIndicators {
    /// One inactive control per supported mode of `variant`.
    pub fn for_variant(variant: CanvasVariant) -> Self {
        Self {
            controls: variant
                .supported_modes()
                .iter()
                .map(|mode| (*mode, false))
                .collect(),
        }
    }

    /// Marks the control for `mode` active and every other control inactive.
    ///
    /// Fails without touching any marker when there is no control for `mode`.
    pub fn activate(&mut self, mode: DrawingMode) -> Result<(), CanvasError> {
        if !self.controls.iter().any(|(control, _)| *control == mode) {
            return Err(CanvasError::InvalidButtonMode(mode.to_string()));
        }
        for (control, active) in &mut self.controls {
            *active = *control == mode;
        }
        Ok(())
    }

    pub fn is_active(&self, mode: DrawingMode) -> bool {
        self.controls
            .iter()
            .any(|(control, active)| *control == mode && *active)
    }

    /// Modes whose control currently shows as active.
    pub fn active_modes(&self) -> Vec<DrawingMode> {
        self.controls
            .iter()
            .filter(|(_, active)| *active)
            .map(|(mode, _)| *mode)
            .collect()
    }
}

/// Owns the drawing mode and the control indicators.
#[derive(Debug, Clone)]
pub struct ModeController {
    variant: CanvasVariant,
    mode: DrawingMode,
    flags: ModeFlags,
    indicators: ModeIndicators,
}

impl ModeController {
    /// Creates a controller in freehand mode with no control marked yet.
    ///
    /// Call [`set_mode`](Self::set_mode) once at startup to light the
    /// freehand control.
    pub fn new(variant: CanvasVariant) -> Self {
        Self {
            variant,
            mode: DrawingMode::Freehand,
            flags: ModeFlags::default(),
            indicators: ModeIndicators::for_variant(variant),
        }
    }

    pub fn variant(&self) -> CanvasVariant {
        self.variant
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn flags(&self) -> ModeFlags {
        self.flags
    }

    pub fn indicators(&self) -> &ModeIndicators {
        &self.indicators
    }

    /// Switches to `mode` if this variant offers it.
    ///
    /// On error the mode, flags and indicators are left as they were.
    /// Re-applying the current mode is a no-op.
    pub fn set_mode(&mut self, mode: DrawingMode) -> Result<(), CanvasError> {
        if !self.variant.supports(mode) {
            return Err(CanvasError::InvalidMode(format!(
                "{mode} (not offered by the {} canvas)",
                self.variant
            )));
        }

        self.indicators.activate(mode)?;
        self.mode = mode;
        self.flags = ModeFlags::for_mode(mode);
        log::debug!("Drawing mode set to {mode}");
        Ok(())
    }

    /// Parses a control identifier ("freehand", "circle", ...) and applies it.
    pub fn set_mode_by_name(&mut self, name: &str) -> Result<(), CanvasError> {
        let mode: DrawingMode = name.parse()?;
        self.set_mode(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_mode_lights_exactly_one_control() {
        for variant in [CanvasVariant::Shapes, CanvasVariant::Text] {
            let mut controller = ModeController::new(variant);
            for mode in variant.supported_modes() {
                controller.set_mode(*mode).unwrap();
                assert_eq!(controller.indicators().active_modes(), vec![*mode]);
                assert_eq!(controller.flags(), ModeFlags::for_mode(*mode));
                assert_eq!(controller.mode(), *mode);
            }
        }
    }

    #[test]
    fn test_flags_describe_a_single_semantic_mode() {
        for mode in DrawingMode::ALL {
            let flags = ModeFlags::for_mode(mode);
            let set = [flags.erasing, flags.drawing_shape, flags.text_mode]
                .iter()
                .filter(|f| **f)
                .count();
            assert!(set <= 1, "{mode} sets {set} flags");
            assert_eq!(flags.shape_kind.is_some(), flags.drawing_shape);
        }
        assert_eq!(ModeFlags::for_mode(DrawingMode::Freehand), ModeFlags::default());
    }

    #[test]
    fn test_unknown_mode_leaves_state_unchanged() {
        let mut controller = ModeController::new(CanvasVariant::Shapes);
        controller.set_mode(DrawingMode::Circle).unwrap();

        let err = controller.set_mode_by_name("lasso").unwrap_err();
        assert!(matches!(err, CanvasError::InvalidMode(_)));
        assert_eq!(controller.mode(), DrawingMode::Circle);
        assert_eq!(
            controller.indicators().active_modes(),
            vec![DrawingMode::Circle]
        );
        assert!(controller.flags().drawing_shape);
    }

    #[test]
    fn test_mode_outside_variant_is_rejected() {
        let mut controller = ModeController::new(CanvasVariant::Shapes);
        controller.set_mode(DrawingMode::Eraser).unwrap();

        assert!(controller.set_mode(DrawingMode::Text).is_err());
        assert_eq!(controller.mode(), DrawingMode::Eraser);
        assert!(controller.flags().erasing);
    }

    #[test]
    fn test_reapplying_mode_is_idempotent() {
        let mut controller = ModeController::new(CanvasVariant::Text);
        controller.set_mode(DrawingMode::Text).unwrap();
        let before = controller.indicators().clone();
        controller.set_mode(DrawingMode::Text).unwrap();
        assert_eq!(controller.indicators(), &before);
    }

    #[test]
    fn test_indicators_reject_missing_control() {
        let mut indicators = ModeIndicators::for_variant(CanvasVariant::Text);
        indicators.activate(DrawingMode::Eraser).unwrap();
        let err = indicators.activate(DrawingMode::Circle).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidButtonMode(_)));
        assert!(indicators.is_active(DrawingMode::Eraser));
    }
}
