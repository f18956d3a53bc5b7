//! # Browser Host
//!
//! Canvas surface, `requestAnimationFrame` pacing, DOM layout probe and
//! DOM style writes, plus the window listeners that feed the stage.
//!
//! ```text
//! window ── mousemove/resize/scroll ──► EventSender ─┐
//!                                                    ▼
//! requestAnimationFrame ──► Stage::on_frame(AnimationFrames, dt, DomProbe, DomStyleSink)
//!                                 │                       │
//!                          CanvasSurface            element.style
//! ```
//!
//! Elements are looked up by the DOM ids from [`PageElements::dom_ids`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use parallax_motion::{ElementBounds, ElementId, ElementStyle, StyleSink, ViewportProbe};
use parallax_particles::{Color, FrameRequest, FrameScheduler, Surface};

use crate::config::StageConfig;
use crate::content::ProfileContent;
use crate::error::{StageError, StageResult};
use crate::events::EventSender;
use crate::page::PageElements;
use crate::stage::Stage;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type DomIds = Rc<HashMap<ElementId, String>>;

/// A 2D canvas context as a drawing surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Looks up a canvas by DOM id and acquires its 2D context.
    ///
    /// Returns `None` if the element is missing, is not a canvas, or has no
    /// 2D context.
    #[must_use]
    pub fn from_element_id(document: &Document, id: &str) -> Option<Self> {
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Setting either dimension also clears the canvas.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let arc = self.ctx.arc(
            f64::from(x),
            f64::from(y),
            f64::from(radius),
            0.0,
            std::f64::consts::TAU,
        );
        if arc.is_ok() {
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(from.0), f64::from(from.1));
        self.ctx.line_to(f64::from(to.0), f64::from(to.1));
        self.ctx.stroke();
    }
}

/// `requestAnimationFrame` as a frame scheduler.
pub struct AnimationFrames {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) -> FrameRequest {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return FrameRequest(0);
        };
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        match self.window.request_animation_frame(function) {
            Ok(id) => FrameRequest(u64::try_from(id).unwrap_or_default()),
            Err(err) => {
                tracing::warn!(?err, "requestAnimationFrame failed");
                FrameRequest(0)
            }
        }
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if let Ok(id) = i32::try_from(request.0) {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Reads element positions from the live DOM.
pub struct DomProbe {
    window: Window,
    document: Document,
    ids: DomIds,
}

impl ViewportProbe for DomProbe {
    fn viewport_height(&self) -> f32 {
        viewport_size(&self.window).1 as f32
    }

    fn bounds(&self, element: ElementId) -> Option<ElementBounds> {
        let id = self.ids.get(&element)?;
        let rect = self.document.get_element_by_id(id)?.get_bounding_client_rect();
        Some(ElementBounds::new(rect.top() as f32, rect.height() as f32))
    }
}

/// Writes element styles as inline `transform` and `opacity`.
pub struct DomStyleSink {
    document: Document,
    ids: DomIds,
}

impl StyleSink for DomStyleSink {
    fn apply(&mut self, element: ElementId, style: ElementStyle) {
        let Some(node) = self
            .ids
            .get(&element)
            .and_then(|id| self.document.get_element_by_id(id))
        else {
            return;
        };
        let Ok(node) = node.dyn_into::<HtmlElement>() else {
            return;
        };
        let css = node.style();
        let _ = css.set_property("transform", &style.css_transform());
        let _ = css.set_property("opacity", &style.opacity.to_string());
    }
}

struct Mounted {
    stage: Stage<CanvasSurface>,
    frames: AnimationFrames,
    probe: DomProbe,
    sink: DomStyleSink,
    last_timestamp: Option<f64>,
}

impl Mounted {
    fn frame(&mut self, timestamp: f64) {
        let dt = self
            .last_timestamp
            .map_or(0.0, |last| ((timestamp - last) / 1000.0).max(0.0) as f32);
        self.last_timestamp = Some(timestamp);

        let Self {
            stage,
            frames,
            probe,
            sink,
            ..
        } = self;
        stage.on_frame(frames, dt, probe, sink);
    }
}

/// The profile stage mounted into a browser page.
pub struct WebStage {
    window: Window,
    mounted: Rc<RefCell<Option<Mounted>>>,
    callback: FrameCallback,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    sender: EventSender,
}

impl WebStage {
    /// Mounts onto the current page, drawing particles on the canvas with
    /// DOM id `canvas_id`.
    ///
    /// A missing canvas or 2D context leaves particles disabled.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::HostUnavailable`] outside a browser window, or
    /// any config/content validation error.
    pub fn mount(canvas_id: &str, config: StageConfig, content: ProfileContent) -> StageResult<Self> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or(StageError::HostUnavailable("window"))?;
        let document = window
            .document()
            .ok_or(StageError::HostUnavailable("document"))?;

        let surface = CanvasSurface::from_element_id(&document, canvas_id).map(|mut surface| {
            let (width, height) = viewport_size(&window);
            surface.resize(width, height);
            surface
        });

        let ids: DomIds = Rc::new(
            PageElements::for_content(&content)
                .dom_ids()
                .into_iter()
                .collect(),
        );
        let probe = DomProbe {
            window: window.clone(),
            document: document.clone(),
            ids: Rc::clone(&ids),
        };
        let sink = DomStyleSink { document, ids };

        // The callback exists before the first request; the stage lands in
        // the slot before the first frame fires.
        let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&mounted);
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(mounted) = slot.borrow_mut().as_mut() {
                mounted.frame(timestamp);
            }
        }));

        let mut frames = AnimationFrames {
            window: window.clone(),
            callback: Rc::clone(&callback),
        };
        let stage = Stage::mount(config, content, surface, &probe, &mut frames)?;
        let sender = stage.sender();

        *mounted.borrow_mut() = Some(Mounted {
            stage,
            frames,
            probe,
            sink,
            last_timestamp: None,
        });

        let mut web_stage = Self {
            window,
            mounted,
            callback,
            listeners: Vec::with_capacity(3),
            sender,
        };
        web_stage.listen_all();
        Ok(web_stage)
    }

    /// Handle for queuing host events from other code.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Removes listeners, stops the frame loop and tears down every region.
    ///
    /// Idempotent: returns `true` only for the call that unmounted.
    pub fn unmount(&mut self) -> bool {
        for (name, listener) in self.listeners.drain(..) {
            let function: &js_sys::Function = listener.as_ref().unchecked_ref();
            let _ = self
                .window
                .remove_event_listener_with_callback(name, function);
        }

        let unmounted = match self.mounted.borrow_mut().as_mut() {
            Some(Mounted { stage, frames, .. }) => stage.unmount(frames),
            None => false,
        };
        // Breaks the callback -> slot -> frames -> callback cycle.
        self.callback.borrow_mut().take();
        unmounted
    }

    fn listen_all(&mut self) {
        let sender = self.sender.clone();
        self.listen(
            "mousemove",
            Closure::new(move |event: Event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    sender.pointer_move(mouse.client_x() as f32, mouse.client_y() as f32);
                }
            }),
        );

        let sender = self.sender.clone();
        let window = self.window.clone();
        self.listen(
            "resize",
            Closure::new(move |_: Event| {
                let (width, height) = viewport_size(&window);
                sender.resize(width, height);
            }),
        );

        let sender = self.sender.clone();
        self.listen(
            "scroll",
            Closure::new(move |_: Event| {
                sender.scroll();
            }),
        );
    }

    fn listen(&mut self, name: &'static str, listener: Closure<dyn FnMut(Event)>) {
        let function: &js_sys::Function = listener.as_ref().unchecked_ref();
        if let Err(err) = self.window.add_event_listener_with_callback(name, function) {
            tracing::warn!(event = name, ?err, "listener not attached");
            return;
        }
        self.listeners.push((name, listener));
    }
}

impl Drop for WebStage {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn viewport_size(window: &Window) -> (u32, u32) {
    let dimension = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
            .max(0.0) as u32
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}
