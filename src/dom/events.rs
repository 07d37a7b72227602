// ============================================================================
// EVENT HANDLING - Listeners sobre elementos del DOM
// ============================================================================
// Cada render reconstruye el árbol. Los Closure del árbol vivo se guardan en
// LISTENERS y se sueltan en el siguiente render; con forget() quedarían en
// memoria para siempre.
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, MouseEvent};

/// Dueño de los listeners de un render
pub struct ListenerBag<T> {
    held: RefCell<Vec<T>>,
}

impl<T> ListenerBag<T> {
    pub const fn new() -> Self {
        Self {
            held: RefCell::new(Vec::new()),
        }
    }

    pub fn hold(&self, listener: T) {
        self.held.borrow_mut().push(listener);
    }

    /// Saca todo lo guardado; se libera cuando el caller lo suelta
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.held.borrow_mut())
    }

    pub fn restore(&self, listeners: Vec<T>) {
        self.held.borrow_mut().extend(listeners);
    }

    pub fn len(&self) -> usize {
        self.held.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.borrow().is_empty()
    }
}

impl<T> Default for ListenerBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

type Listener = Closure<dyn FnMut(Event)>;

thread_local! {
    static LISTENERS: ListenerBag<Listener> = const { ListenerBag::new() };
}

/// Listeners del árbol actual (ver `App::render`)
pub fn take_listeners() -> Vec<Listener> {
    LISTENERS.with(|bag| bag.take())
}

pub fn restore_listeners(listeners: Vec<Listener>) {
    LISTENERS.with(|bag| bag.restore(listeners));
}

fn listen<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    LISTENERS.with(|bag| bag.hold(closure));
    Ok(())
}

/// Click simple
pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", move |e: Event| handler(e.unchecked_into::<MouseEvent>()))
}

/// `input` de un `<input>`: entrega el valor actual
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "input", move |e: Event| {
        if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(input.value());
        }
    })
}

/// `change` de un `<select>`: entrega el value elegido
pub fn on_select_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "change", move |e: Event| {
        if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
            handler(select.value());
        }
    })
}

/// `submit` de un formulario, sin recargar la página
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(element, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}
