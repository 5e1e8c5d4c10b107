//! Drawing session façade composing the draw and edit controllers.
//!
//! A [`DrawingSession`] owns the shape canvas, the constructor registry, a
//! handle to the rendering surface, and all shared gesture state. Pointer
//! and scroll events are fed in through the handler methods defined in
//! [`draw`] and [`edit`]; each returns `bool` so the host's event adapter
//! can let unhandled events propagate (e.g. to pan/zoom bindings).

pub mod draw;
pub mod edit;
pub mod events;
pub mod throttle;


// Re-export commonly used types at module level
pub use edit::ScrollDirection;
pub use events::{EventHub, HandlerId, SessionEvent, SessionEventKind};
pub use throttle::{DEFAULT_REDRAW_INTERVAL, RedrawThrottle};

use crate::canvas::{Canvas, CanvasItem, ItemId};
use crate::config::SessionConfig;
use crate::draw::{DrawKind, DrawParams, DrawRegistry, ParamValue};
use crate::error::SessionError;
use crate::surface::{RedrawReason, Surface};
use draw::DrawGesture;
use edit::EditGrab;
use std::time::{Duration, Instant};

/// Interactive drawing-and-editing session over one surface.
///
/// Draw gestures construct new shapes from the active kind; edit gestures
/// select and modify committed shapes. The two are mutually exclusive per
/// pointer-down: beginning a draw discards any edit selection, and the edit
/// controller never sees the in-progress candidate.
pub struct DrawingSession<S: Surface> {
    /// Committed shapes, bottom to top
    canvas: Canvas,
    /// Injected kind-to-constructor mapping
    registry: DrawRegistry,
    /// Render target redraw requests go to
    surface: S,
    /// Kinds with a constructor, in priority order (fixed at creation)
    enabled_kinds: Vec<DrawKind>,
    /// Active shape kind for new draw gestures
    draw_kind: DrawKind,
    /// Shared style parameters handed to constructors (copied, never aliased)
    params: DrawParams,
    /// Whether draw gestures are accepted at all
    can_draw: bool,
    /// Content for text-kind shapes
    draw_text: String,
    /// Accumulated scroll rotation, reset at every draw begin
    rot_accum: f64,
    /// In-progress draw gesture, if any
    gesture: Option<DrawGesture>,
    /// Shape currently selected for editing
    selected: Option<ItemId>,
    /// Active drag on the selected shape
    grab: Option<EditGrab>,
    /// Redraw request gate
    throttle: RedrawThrottle,
    /// Observer registry
    events: EventHub,
}

impl<S: Surface> DrawingSession<S> {
    /// Creates a session from an injected registry, surface, and config.
    ///
    /// The enabled kind set is computed here, once. The initial draw kind is
    /// the configured default when enabled, otherwise the highest-priority
    /// enabled kind. Drawing starts disabled.
    pub fn new(registry: DrawRegistry, surface: S, config: &SessionConfig) -> Self {
        let enabled_kinds = registry.enabled_kinds();
        if enabled_kinds.is_empty() {
            log::warn!("draw registry has no constructors; drawing is unavailable");
        }

        let draw_kind = config
            .drawing
            .default_type
            .parse::<DrawKind>()
            .ok()
            .filter(|kind| enabled_kinds.contains(kind))
            .or_else(|| enabled_kinds.first().copied())
            .unwrap_or(DrawKind::Point);

        let mut params = DrawParams::new();
        params.set(DrawParams::COLOR, config.drawing.default_color.as_str());
        params.set(DrawParams::CAP_RADIUS, config.drawing.capture_radius);

        Self {
            canvas: Canvas::new(),
            registry,
            surface,
            enabled_kinds,
            draw_kind,
            params,
            can_draw: false,
            draw_text: config.drawing.draw_text.clone(),
            rot_accum: 0.0,
            gesture: None,
            selected: None,
            grab: None,
            throttle: RedrawThrottle::new(Duration::from_millis(
                config.performance.redraw_interval_ms,
            )),
            events: EventHub::new(),
        }
    }

    /// Enables or disables draw gestures. Edit gestures are unaffected.
    pub fn enable_draw(&mut self, enabled: bool) {
        log::debug!("drawing {}", if enabled { "enabled" } else { "disabled" });
        self.can_draw = enabled;
    }

    /// Whether draw gestures are currently accepted.
    pub fn can_draw(&self) -> bool {
        self.can_draw
    }

    /// Selects the active shape kind for subsequent draw gestures.
    ///
    /// Rejected synchronously when the kind has no registered constructor;
    /// the active kind is left unchanged.
    pub fn set_drawtype(&mut self, kind: DrawKind) -> Result<(), SessionError> {
        if !self.enabled_kinds.contains(&kind) {
            return Err(SessionError::DisabledDrawType(kind));
        }
        log::debug!("draw type set to '{kind}'");
        self.draw_kind = kind;
        Ok(())
    }

    /// [`set_drawtype`](Self::set_drawtype) that also replaces the shared
    /// parameters with a copy of `params`.
    pub fn set_drawtype_with_params(
        &mut self,
        kind: DrawKind,
        params: &DrawParams,
    ) -> Result<(), SessionError> {
        self.set_drawtype(kind)?;
        self.params = params.clone();
        Ok(())
    }

    /// [`set_drawtype`](Self::set_drawtype) by name.
    pub fn set_drawtype_name(&mut self, name: &str) -> Result<(), SessionError> {
        self.set_drawtype(name.parse()?)
    }

    /// The active shape kind.
    pub fn drawtype(&self) -> DrawKind {
        self.draw_kind
    }

    /// Kinds usable on this session, in priority order.
    pub fn drawtypes(&self) -> &[DrawKind] {
        &self.enabled_kinds
    }

    /// Replaces the shared parameters with a copy of `params`.
    pub fn set_params(&mut self, params: &DrawParams) {
        self.params = params.clone();
    }

    /// Copy of the shared parameters.
    pub fn params(&self) -> DrawParams {
        self.params.clone()
    }

    /// Sets a single shared parameter.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.set(key, value);
    }

    /// Sets the shared color parameter.
    pub fn set_draw_color(&mut self, color: &str) {
        self.params.set(DrawParams::COLOR, color);
    }

    /// Sets the content used by text-kind shapes.
    pub fn set_draw_text(&mut self, text: impl Into<String>) {
        self.draw_text = text.into();
    }

    /// Content used by text-kind shapes.
    pub fn draw_text(&self) -> &str {
        &self.draw_text
    }

    /// Whether a draw gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    /// The provisional shape of the in-progress draw gesture, if any.
    pub fn candidate(&self) -> Option<&dyn CanvasItem> {
        self.gesture.as_ref().and_then(|g| g.candidate.as_deref())
    }

    /// The shape currently selected for editing, if any.
    pub fn selection(&self) -> Option<ItemId> {
        self.selected
    }

    /// The committed shape collection.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access to the committed shape collection.
    ///
    /// External mutation of editing flags is tolerated: the edit controller
    /// reconciles opportunistically on the next `edit_begin`.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the rendering surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Registers an observer for one event channel.
    pub fn subscribe(
        &mut self,
        kind: SessionEventKind,
        callback: impl FnMut(&SessionEvent) + 'static,
    ) -> HandlerId {
        self.events.subscribe(kind, callback)
    }

    /// Removes an observer; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Throttled redraw request; dropped when inside the throttle interval.
    pub(crate) fn request_redraw(&mut self, reason: RedrawReason) {
        if self.throttle.ready(Instant::now()) {
            self.surface.redraw(reason);
        }
    }

    /// Unthrottled redraw request; always issued, restarts the interval.
    pub(crate) fn force_redraw(&mut self, reason: RedrawReason) {
        self.throttle.stamp(Instant::now());
        self.surface.redraw(reason);
    }
}
