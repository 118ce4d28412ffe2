use crate::geometry::{Point, RadarConfig, ScreenRect};
use crate::hit::{control_points, hit_test};
use crate::input::{CancelReason, DragState, PointerKind};
use crate::model::RadarModel;
use crate::render::{self, RadarSurface};
use crate::svg::{ExportStyle, SvgScene, svg_data_uri};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Suppress the event's default (text selection, touch scrolling).
    PreventDefault,
    /// Subscribe move/release listeners at document level for this session.
    AcquireGlobalListeners,
    /// Drop the document-level listeners acquired for the session.
    ReleaseGlobalListeners,
    /// Redraw the data layer only.
    RenderData,
    /// Rebuild the whole chart.
    RenderAll,
}

/// One radar chart instance: layout, model and drag session.
///
/// Holds no surface, so it can be driven and tested without a browser. Hosts
/// feed it input events and carry out the returned [`Action`]s.
#[derive(Debug, Clone, Default)]
pub struct RadarChart {
    pub config: RadarConfig,
    model: RadarModel,
    drag: DragState,
}

impl RadarChart {
    #[must_use]
    pub fn new(config: RadarConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the axis set (new template). Any active drag ends first.
    pub fn load_labels(&mut self, labels: Vec<String>) -> Vec<Action> {
        let mut actions = self.end_session();
        self.model.reset(labels);
        log::debug!("radar: loaded {} axes", self.model.len());
        actions.push(Action::RenderAll);
        actions
    }

    // --- Input events ---

    /// Press on the control point tagged `axis`.
    ///
    /// Ignored while another session is active or if `axis` is not an axis.
    pub fn on_press(&mut self, axis: usize, kind: PointerKind) -> Vec<Action> {
        if self.drag.is_dragging() || axis >= self.model.len() {
            return Vec::new();
        }
        self.drag = DragState::Dragging { axis, kind };
        log::debug!("radar: drag start on axis {axis} ({kind:?})");
        vec![Action::PreventDefault, Action::AcquireGlobalListeners]
    }

    /// Press at a logical-space position, for surfaces without per-element
    /// event targets.
    pub fn on_press_at(&mut self, logical: Point, kind: PointerKind) -> Vec<Action> {
        let points = control_points(&self.config, self.model.values());
        match hit_test(logical, &points) {
            Some(axis) => self.on_press(axis, kind),
            None => Vec::new(),
        }
    }

    /// Pointer moved to `client` while the chart occupies `bounds` on screen.
    pub fn on_move(&mut self, client: Point, bounds: ScreenRect) -> Vec<Action> {
        if !self.drag.is_dragging() {
            return Vec::new();
        }
        match bounds.to_logical(client, self.config.logical_size) {
            Some(logical) => self.on_move_logical(logical),
            None => vec![Action::PreventDefault],
        }
    }

    /// Pointer moved to an already-rescaled logical position.
    pub fn on_move_logical(&mut self, logical: Point) -> Vec<Action> {
        let Some(axis) = self.drag.axis() else {
            return Vec::new();
        };
        let magnitude = self
            .config
            .project_onto_axis(axis, self.model.len(), logical);
        match self.model.set_value(axis, magnitude) {
            Ok(()) => vec![Action::PreventDefault, Action::RenderData],
            Err(err) => {
                log::warn!("radar: dropping move: {err}");
                vec![Action::PreventDefault]
            }
        }
    }

    /// Normal end of gesture.
    pub fn on_release(&mut self) -> Vec<Action> {
        self.end_session()
    }

    /// Abnormal end of gesture. Same cleanup as a release.
    pub fn on_cancel(&mut self, reason: CancelReason) -> Vec<Action> {
        if self.drag.is_dragging() {
            log::debug!("radar: drag cancelled by {reason}");
        }
        self.end_session()
    }

    fn end_session(&mut self) -> Vec<Action> {
        if !self.drag.is_dragging() {
            return Vec::new();
        }
        self.drag = DragState::Idle;
        vec![Action::ReleaseGlobalListeners]
    }

    // --- Rendering ---

    /// Full rebuild onto `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the surface's error.
    pub fn init_radar<S: RadarSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::init_radar(surface, &self.config, &self.model)
    }

    /// Data-layer redraw onto `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the surface's error.
    pub fn update_radar<S: RadarSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::update_radar(surface, &self.config, &self.model)
    }

    /// Render the current state into a fresh headless scene.
    #[must_use]
    pub fn scene(&self) -> SvgScene {
        let mut scene = SvgScene::new(self.config.logical_size);
        match self.init_radar(&mut scene) {
            Ok(()) => scene,
            Err(never) => match never {},
        }
    }

    /// Self-contained export SVG wrapped as a `data:` URI.
    #[must_use]
    pub fn export_data_uri(&self, style: &ExportStyle) -> String {
        svg_data_uri(&self.scene().to_export_svg(style))
    }

    // --- Queries ---

    #[must_use]
    pub fn model(&self) -> &RadarModel {
        &self.model
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.model.values()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.model.labels()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn usage_summary(&self) -> String {
        self.model.usage_summary()
    }
}
