//! Browser adapter: a live `<svg>` surface and the event wiring around it.
//!
//! This is the only module that touches `web_sys`. [`DomSurface`] implements
//! [`RadarSurface`] against an `<svg>` element. [`RadarWidget`] owns a
//! [`RadarChart`] plus that surface, routes DOM events into the chart, and
//! carries out the returned [`Action`]s.
//!
//! LISTENER DISCIPLINE
//! ===================
//! Press listeners live on the `<svg>` for the widget's lifetime and read the
//! axis from the pressed element's `data-index`. Everything a drag needs
//! beyond that (document-level move/release, touch cancel, window blur,
//! visibility change) is acquired as one [`Session`] when a drag starts and
//! detached through the same path when it ends, however it ends.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Element, Event, EventTarget, HtmlCanvasElement,
    HtmlImageElement, MouseEvent, TouchEvent,
};

use crate::consts::EXPORT_SIZE_PX;
use crate::engine::{Action, RadarChart};
use crate::geometry::{Point, RadarConfig, ScreenRect};
use crate::hit::{ControlPoint, parse_axis_tag};
use crate::input::{CancelReason, PointerKind};
use crate::raster::{RasterImage, Rasterizer};
use crate::render::{GridLayer, RadarSurface};
use crate::svg::{
    CLASS_AXIS, CLASS_GRID, CLASS_LABEL, CLASS_POINT, CLASS_POLYGON, SVG_NS, fmt_num, format_points,
};

const AXIS_TAG: &str = "data-index";

// =============================================================
// Surface
// =============================================================

/// [`RadarSurface`] backed by an `<svg>` element in the page.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
    root: Element,
}

impl DomSurface {
    #[must_use]
    pub fn new(document: Document, root: Element) -> Self {
        Self { document, root }
    }

    /// Current on-screen bounding box of the `<svg>`.
    #[must_use]
    pub fn bounds(&self) -> ScreenRect {
        let rect = self.root.get_bounding_client_rect();
        ScreenRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn create(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element_ns(Some(SVG_NS), tag)?;
        el.set_attribute("class", class)?;
        Ok(el)
    }

    fn append(&self, el: &Element) -> Result<(), JsValue> {
        self.root.append_child(el)?;
        Ok(())
    }
}

impl RadarSurface for DomSurface {
    type Error = JsValue;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.root.set_inner_html("");
        Ok(())
    }

    fn clear_data(&mut self) -> Result<(), Self::Error> {
        let stale = self
            .root
            .query_selector_all(&format!(".{CLASS_POLYGON}, .{CLASS_POINT}"))?;
        // The list is static, so removing while walking it is safe.
        for i in 0..stale.length() {
            if let Some(node) = stale.item(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    el.remove();
                }
            }
        }
        Ok(())
    }

    fn draw_grid(&mut self, grid: &GridLayer) -> Result<(), Self::Error> {
        for ring in &grid.rings {
            let el = self.create("polygon", CLASS_GRID)?;
            el.set_attribute("points", &format_points(ring))?;
            self.append(&el)?;
        }
        for spoke in &grid.spokes {
            let el = self.create("line", CLASS_AXIS)?;
            el.set_attribute("x1", &fmt_num(spoke.from.x))?;
            el.set_attribute("y1", &fmt_num(spoke.from.y))?;
            el.set_attribute("x2", &fmt_num(spoke.to.x))?;
            el.set_attribute("y2", &fmt_num(spoke.to.y))?;
            self.append(&el)?;
        }
        for label in &grid.labels {
            let el = self.create("text", CLASS_LABEL)?;
            el.set_attribute("x", &fmt_num(label.at.x))?;
            el.set_attribute("y", &fmt_num(label.at.y))?;
            el.set_attribute("text-anchor", "middle")?;
            el.set_attribute("dominant-baseline", "middle")?;
            el.set_text_content(Some(&label.text));
            self.append(&el)?;
        }
        Ok(())
    }

    fn draw_polygon(&mut self, polygon: &[Point]) -> Result<(), Self::Error> {
        let el = self.create("polygon", CLASS_POLYGON)?;
        el.set_attribute("points", &format_points(polygon))?;
        self.append(&el)
    }

    fn draw_points(&mut self, points: &[ControlPoint]) -> Result<(), Self::Error> {
        for p in points {
            let el = self.create("circle", CLASS_POINT)?;
            el.set_attribute("cx", &fmt_num(p.center.x))?;
            el.set_attribute("cy", &fmt_num(p.center.y))?;
            el.set_attribute("r", &fmt_num(p.radius))?;
            el.set_attribute(AXIS_TAG, &p.axis.to_string())?;
            self.append(&el)?;
        }
        Ok(())
    }
}

// =============================================================
// Listeners
// =============================================================

/// One registered DOM listener. Dropping it detaches it.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `callback`. Non-passive so handlers may `preventDefault`.
    fn attach(target: &EventTarget, kind: &'static str, callback: Closure<dyn FnMut(Event)>) -> Result<Self, JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    /// Idempotent: removing an unregistered listener is a no-op in the DOM.
    fn detach(&self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("radar: failed to detach {} listener: {err:?}", self.kind);
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Listeners held for exactly one drag session.
struct Session {
    listeners: Vec<Listener>,
}

impl Session {
    fn acquire(state: &Rc<RefCell<WidgetState>>) -> Result<Self, JsValue> {
        let weak = Rc::downgrade(state);
        let document = state.borrow().surface.document.clone();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let listeners = vec![
            Listener::attach(&document, "mousemove", move_handler(weak.clone(), PointerKind::Mouse))?,
            Listener::attach(&document, "touchmove", move_handler(weak.clone(), PointerKind::Touch))?,
            Listener::attach(&document, "mouseup", release_handler(weak.clone()))?,
            Listener::attach(&document, "touchend", release_handler(weak.clone()))?,
            Listener::attach(&document, "touchcancel", cancel_handler(weak.clone(), CancelReason::TouchCancel))?,
            Listener::attach(&document, "visibilitychange", visibility_handler(weak.clone()))?,
            Listener::attach(&window, "blur", cancel_handler(weak, CancelReason::Blur))?,
        ];
        Ok(Self { listeners })
    }

    fn detach(&self) {
        for listener in &self.listeners {
            listener.detach();
        }
    }
}

// =============================================================
// Widget
// =============================================================

struct WidgetState {
    chart: RadarChart,
    surface: DomSurface,
    session: Option<Session>,
    /// The last session, already detached. Its closures may still be on the
    /// call stack (a release handler ends its own session), so they are only
    /// dropped when the next session starts or the widget goes away.
    retired: Option<Session>,
}

/// An interactive radar chart mounted on an `<svg>` element.
pub struct RadarWidget {
    state: Rc<RefCell<WidgetState>>,
    _press: Vec<Listener>,
}

impl RadarWidget {
    /// Mount on `root` and start listening for presses on control points.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `root` is detached or listeners cannot be attached.
    pub fn mount(root: Element, config: RadarConfig) -> Result<Self, JsValue> {
        let document = root
            .owner_document()
            .ok_or_else(|| JsValue::from_str("radar element is not in a document"))?;
        let state = Rc::new(RefCell::new(WidgetState {
            chart: RadarChart::new(config),
            surface: DomSurface::new(document, root.clone()),
            session: None,
            retired: None,
        }));
        let weak = Rc::downgrade(&state);
        let press = vec![
            Listener::attach(&root, "mousedown", press_handler(weak.clone(), PointerKind::Mouse))?,
            Listener::attach(&root, "touchstart", press_handler(weak, PointerKind::Touch))?,
        ];
        Ok(Self { state, _press: press })
    }

    /// Create the chart's `<svg>` as the last child of `parent` and mount on it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element cannot be created or listeners attached.
    pub fn mount_in(parent: &Element, config: RadarConfig) -> Result<Self, JsValue> {
        let document = parent
            .owner_document()
            .ok_or_else(|| JsValue::from_str("radar host is not in a document"))?;
        let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
        let side = fmt_num(config.logical_size);
        svg.set_attribute("viewBox", &format!("0 0 {side} {side}"))?;
        svg.set_attribute("class", "radar-chart")?;
        parent.append_child(&svg)?;
        Self::mount(svg, config)
    }

    /// Replace the axis set and fully redraw.
    pub fn load_labels(&self, labels: Vec<String>) {
        let actions = self.state.borrow_mut().chart.load_labels(labels);
        apply(&self.state, None, actions);
    }

    /// Snapshot of the chart (model and layout) for export.
    #[must_use]
    pub fn chart(&self) -> RadarChart {
        self.state.borrow().chart.clone()
    }
}

fn apply(state: &Rc<RefCell<WidgetState>>, event: Option<&Event>, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            Action::AcquireGlobalListeners => {
                let acquired = Session::acquire(state);
                let mut s = state.borrow_mut();
                drop(s.retired.take());
                match acquired {
                    Ok(session) => s.session = Some(session),
                    Err(err) => {
                        log::warn!("radar: could not track drag, abandoning it: {err:?}");
                        s.chart.on_release();
                    }
                }
            }
            Action::ReleaseGlobalListeners => {
                let mut s = state.borrow_mut();
                if let Some(session) = s.session.take() {
                    session.detach();
                    s.retired = Some(session);
                }
            }
            Action::RenderData => {
                let mut guard = state.borrow_mut();
                let s = &mut *guard;
                if let Err(err) = s.chart.update_radar(&mut s.surface) {
                    log::warn!("radar: redraw failed: {err:?}");
                }
            }
            Action::RenderAll => {
                let mut guard = state.borrow_mut();
                let s = &mut *guard;
                if let Err(err) = s.chart.init_radar(&mut s.surface) {
                    log::warn!("radar: rebuild failed: {err:?}");
                }
            }
        }
    }
}

// =============================================================
// Handlers
// =============================================================

fn press_handler(weak: Weak<RefCell<WidgetState>>, kind: PointerKind) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let Some(tag) = axis_tag(&event) else {
            return;
        };
        let actions = {
            let mut s = state.borrow_mut();
            match parse_axis_tag(&tag, s.chart.labels().len()) {
                Some(axis) => s.chart.on_press(axis, kind),
                None => return,
            }
        };
        apply(&state, Some(&event), actions);
    })
}

fn move_handler(weak: Weak<RefCell<WidgetState>>, kind: PointerKind) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let Some(client) = client_point(&event, kind) else {
            return;
        };
        let actions = {
            let mut s = state.borrow_mut();
            let bounds = s.surface.bounds();
            s.chart.on_move(client, bounds)
        };
        apply(&state, Some(&event), actions);
    })
}

fn release_handler(weak: Weak<RefCell<WidgetState>>) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let actions = state.borrow_mut().chart.on_release();
        apply(&state, Some(&event), actions);
    })
}

fn cancel_handler(weak: Weak<RefCell<WidgetState>>, reason: CancelReason) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |_event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let actions = state.borrow_mut().chart.on_cancel(reason);
        apply(&state, None, actions);
    })
}

fn visibility_handler(weak: Weak<RefCell<WidgetState>>) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |_event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let hidden = state.borrow().surface.document.hidden();
        if !hidden {
            return;
        }
        let actions = state.borrow_mut().chart.on_cancel(CancelReason::Hidden);
        apply(&state, None, actions);
    })
}

/// `data-index` of the control point under the event target, if any.
fn axis_tag(event: &Event) -> Option<String> {
    let target = event.target()?;
    let Ok(el) = target.dyn_into::<Element>() else {
        return None;
    };
    match el.closest(&format!("[{AXIS_TAG}]")) {
        Ok(Some(point)) => point.get_attribute(AXIS_TAG),
        _ => None,
    }
}

fn client_point(event: &Event, kind: PointerKind) -> Option<Point> {
    match kind {
        PointerKind::Mouse => event
            .dyn_ref::<MouseEvent>()
            .map(|e| Point::new(f64::from(e.client_x()), f64::from(e.client_y()))),
        PointerKind::Touch => event
            .dyn_ref::<TouchEvent>()
            .and_then(|e| e.touches().get(0))
            .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y()))),
    }
}

// =============================================================
// Rasterizer
// =============================================================

/// Browser [`Rasterizer`]: decodes through an `<img>` and paints onto an
/// offscreen canvas with a white background.
#[derive(Debug, Clone)]
pub struct CanvasRasterizer {
    document: Document,
    size: u32,
}

impl CanvasRasterizer {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document, size: EXPORT_SIZE_PX }
    }

    fn paint(&self, image: &HtmlImageElement) -> Result<String, JsValue> {
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(self.size);
        canvas.set_height(self.size);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let side = f64::from(self.size);
        ctx.set_fill_style_str("white");
        ctx.fill_rect(0.0, 0.0, side, side);
        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, side, side)?;
        canvas.to_data_url_with_type("image/png")
    }
}

impl Rasterizer for CanvasRasterizer {
    async fn rasterize(&self, svg_data_uri: &str) -> Option<RasterImage> {
        let image = match decode_image(svg_data_uri).await {
            Ok(Some(image)) => image,
            Ok(None) => {
                log::warn!("radar: browser could not decode export SVG");
                return None;
            }
            Err(err) => {
                log::warn!("radar: image decode setup failed: {err:?}");
                return None;
            }
        };
        match self.paint(&image) {
            Ok(data_uri) => Some(RasterImage::from_data_uri(data_uri, self.size, self.size)),
            Err(err) => {
                log::warn!("radar: raster export unavailable: {err:?}");
                None
            }
        }
    }
}

/// Load `src` into a fresh `<img>`, resolving once it loads or errors.
async fn decode_image(src: &str) -> Result<Option<HtmlImageElement>, JsValue> {
    let image = HtmlImageElement::new()?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let on_load = settle(Rc::clone(&tx), true);
    let on_error = settle(tx, false);

    image.set_onload(Some(on_load.as_ref().unchecked_ref::<js_sys::Function>()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref::<js_sys::Function>()));
    image.set_src(src);

    let loaded = matches!(rx.await, Ok(true));
    image.set_onload(None);
    image.set_onerror(None);
    Ok(loaded.then_some(image))
}

fn settle(tx: Rc<RefCell<Option<oneshot::Sender<bool>>>>, loaded: bool) -> Closure<dyn FnMut()> {
    Closure::new(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            if tx.send(loaded).is_err() {
                log::debug!("radar: image settled after the export stopped waiting");
            }
        }
    })
}
