use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::collision::{CollisionStrategy, Droppable};
use super::geometry::{Point, Rect};
use super::keyboard::{next_coordinates, KeyboardAction};
use crate::config::BoardConfig;

/// Attribute every sortable region carries; measurement walks the DOM for it.
pub const DND_ID_ATTR: &str = "data-dnd-id";

#[derive(Debug, Clone, PartialEq)]
pub struct DragStartEvent {
    pub active: String,
}

/// Payload of drag move and drag end. `over` is `None` when nothing collides
/// or the drag was cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOverEvent {
    pub active: Option<String>,
    pub over: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sensor {
    Pointer,
    Keyboard,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingPointer {
    id: String,
    origin: Point,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveDrag {
    id: String,
    sensor: Sensor,
    initial_rect: Rect,
    pointer_origin: Point,
    collision_rect: Rect,
    over: Option<String>,
}

/// Handle to the drag engine, provided as context by [`DndProvider`].
#[derive(Clone, Copy)]
pub struct DndHandle {
    active: RwSignal<Option<ActiveDrag>>,
    pending: RwSignal<Option<PendingPointer>>,
    collision: CollisionStrategy,
    activation_distance: f64,
    keyboard: bool,
    on_drag_start: Callback<DragStartEvent>,
    on_drag_move: Callback<DragOverEvent>,
    on_drag_end: Callback<DragOverEvent>,
}

pub fn use_dnd() -> DndHandle {
    use_context::<DndHandle>().expect("Sortable used outside of DndProvider")
}

impl DndHandle {
    pub fn is_dragging(&self) -> bool {
        self.active.with(|a| a.is_some())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.with(|a| a.as_ref().is_some_and(|a| a.id == id))
    }

    /// Where the overlay should be drawn.
    pub fn overlay_rect(&self) -> Option<Rect> {
        self.active.with(|a| a.as_ref().map(|a| a.collision_rect))
    }

    pub fn pointer_down(&self, id: &str, ev: &ev::PointerEvent) {
        if ev.button() != 0 || self.active.with_untracked(|a| a.is_some()) {
            return;
        }
        let origin = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        if self.activation_distance <= 0.0 {
            self.start(id, Sensor::Pointer, origin);
        } else {
            self.pending.set(Some(PendingPointer { id: id.to_string(), origin }));
        }
    }

    fn pointer_move(&self, ev: &ev::PointerEvent) {
        let position = Point::new(ev.client_x() as f64, ev.client_y() as f64);

        if let Some(pending) = self.pending.get_untracked() {
            if pending.origin.distance(position) >= self.activation_distance {
                self.pending.set(None);
                self.start(&pending.id, Sensor::Pointer, pending.origin);
            } else {
                return;
            }
        }

        let Some(drag) = self.active.get_untracked() else { return };
        if drag.sensor != Sensor::Pointer {
            return;
        }
        let collision_rect = drag.initial_rect.translate(
            position.x - drag.pointer_origin.x,
            position.y - drag.pointer_origin.y,
        );
        self.update_target(collision_rect);
    }

    fn pointer_up(&self) {
        self.pending.set(None);
        let is_pointer = self
            .active
            .with_untracked(|a| a.as_ref().is_some_and(|a| a.sensor == Sensor::Pointer));
        if is_pointer {
            self.drop_active();
        }
    }

    /// Keydown on a sortable. Only picking up is handled here; once a
    /// keyboard drag runs, window-level keydown takes over because the
    /// focused element may be re-rendered elsewhere.
    pub fn key_down(&self, id: &str, ev: &ev::KeyboardEvent) {
        if !self.keyboard || self.active.with_untracked(|a| a.is_some()) {
            return;
        }
        if KeyboardAction::from_code(&ev.code()) == Some(KeyboardAction::Toggle) {
            ev.prevent_default();
            ev.stop_propagation();
            let origin = measure(id).map(|r| r.origin()).unwrap_or_default();
            self.start(id, Sensor::Keyboard, origin);
        }
    }

    fn window_key_down(&self, ev: &ev::KeyboardEvent) {
        let Some(drag) = self.active.get_untracked() else { return };
        let Some(action) = KeyboardAction::from_code(&ev.code()) else { return };

        match (action, drag.sensor) {
            (KeyboardAction::Cancel, _) => {
                ev.prevent_default();
                self.cancel();
            }
            (KeyboardAction::Toggle, Sensor::Keyboard) => {
                ev.prevent_default();
                self.drop_active();
            }
            (KeyboardAction::Move(direction), Sensor::Keyboard) => {
                ev.prevent_default();
                let droppables = measure_droppables();
                if let Some(origin) = next_coordinates(direction, &drag.collision_rect, &drag.id, &droppables) {
                    self.update_target(drag.collision_rect.move_to(origin));
                }
            }
            _ => {}
        }
    }

    fn start(&self, id: &str, sensor: Sensor, pointer_origin: Point) {
        let initial_rect = measure(id).unwrap_or_default();
        tracing::debug!(%id, ?sensor, "drag start");
        self.active.set(Some(ActiveDrag {
            id: id.to_string(),
            sensor,
            initial_rect,
            pointer_origin,
            collision_rect: initial_rect,
            over: None,
        }));
        self.on_drag_start.run(DragStartEvent { active: id.to_string() });
    }

    fn update_target(&self, collision_rect: Rect) {
        let over = self.collision.detect(&collision_rect, &measure_droppables());
        let mut active_id = None;
        self.active.update(|a| {
            if let Some(a) = a {
                a.collision_rect = collision_rect;
                a.over = over.clone();
                active_id = Some(a.id.clone());
            }
        });
        tracing::trace!(active = ?active_id, over = ?over, "collision");
        if active_id.is_some() {
            self.on_drag_move.run(DragOverEvent { active: active_id, over });
        }
    }

    fn drop_active(&self) {
        let Some(drag) = self.active.get_untracked() else { return };
        self.active.set(None);
        tracing::debug!(active = %drag.id, over = ?drag.over, "drag end");
        self.on_drag_end.run(DragOverEvent { active: Some(drag.id), over: drag.over });
    }

    /// Ends the drag with no target, so nothing is committed.
    fn cancel(&self) {
        self.pending.set(None);
        let Some(drag) = self.active.get_untracked() else { return };
        self.active.set(None);
        tracing::debug!(active = %drag.id, "drag cancelled");
        self.on_drag_end.run(DragOverEvent { active: Some(drag.id), over: None });
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn measure(id: &str) -> Option<Rect> {
    let selector = format!("[{DND_ID_ATTR}=\"{id}\"]");
    let element = document()?.query_selector(&selector).ok()??;
    Some(element.get_bounding_client_rect().into())
}

/// Current rects of every sortable region, in document order.
fn measure_droppables() -> Vec<Droppable> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(&format!("[{DND_ID_ATTR}]")).ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let id = el.get_attribute(DND_ID_ATTR)?;
            Some(Droppable::new(id, el.get_bounding_client_rect().into()))
        })
        .collect()
}

/// Owns the pointer and keyboard sensors for every [`Sortable`](super::Sortable)
/// below it and reports the drag lifecycle through the three callbacks.
#[component]
pub fn DndProvider(
    on_drag_start: Callback<DragStartEvent>,
    on_drag_move: Callback<DragOverEvent>,
    on_drag_end: Callback<DragOverEvent>,
    children: Children,
) -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let handle = DndHandle {
        active: RwSignal::new(None),
        pending: RwSignal::new(None),
        collision: config.collision,
        activation_distance: config.activation_distance,
        keyboard: config.keyboard,
        on_drag_start,
        on_drag_move,
        on_drag_end,
    };
    provide_context(handle);

    let pointer_move = window_event_listener(ev::pointermove, move |e| handle.pointer_move(&e));
    let pointer_up = window_event_listener(ev::pointerup, move |_| handle.pointer_up());
    let pointer_cancel = window_event_listener(ev::pointercancel, move |_| handle.cancel());
    let key_down = window_event_listener(ev::keydown, move |e| handle.window_key_down(&e));
    on_cleanup(move || {
        pointer_move.remove();
        pointer_up.remove();
        pointer_cancel.remove();
        key_down.remove();
    });

    view! { <div class="dnd-context">{children()}</div> }
}
