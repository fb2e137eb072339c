use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{MapError, Result};
use crate::map::{Handler, ListSurface};
use crate::severity::LIST_ITEM_CLASS;

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| MapError::Js("no document available".to_string()))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MapError::MissingElement(id.to_string()))
}

/// Write a CSS `background` (usually a gradient) on `element`.
pub fn apply_background(element: &Element, css: &str) -> Result<()> {
    let element = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| MapError::Js("background target is not an HTML element".to_string()))?;
    element
        .style()
        .set_property("background", css)
        .map_err(MapError::from_js)
}

struct Entry {
    element: Element,
    _on_click: Closure<dyn FnMut()>,
}

/// Sidebar list rendered as `<li>` children of a container element.
///
/// Only the entries appended through this value are removed by `clear`;
/// any markup already in the container is left alone.
pub struct DomList {
    document: Document,
    container: Element,
    entries: Vec<Entry>,
}

impl DomList {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ListSurface for DomList {
    fn append_entry(&mut self, label: &str, class: Option<&str>, on_click: Handler) -> Result<()> {
        let item = self.document.create_element("li").map_err(MapError::from_js)?;
        item.set_class_name(LIST_ITEM_CLASS);
        if let Some(class) = class {
            item.class_list().add_1(class).map_err(MapError::from_js)?;
        }
        item.set_text_content(Some(label));

        let on_click = Closure::<dyn FnMut()>::new(move || on_click());
        item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(MapError::from_js)?;
        self.container.append_child(&item).map_err(MapError::from_js)?;

        self.entries.push(Entry {
            element: item,
            _on_click: on_click,
        });
        Ok(())
    }

    fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            entry.element.remove();
        }
    }
}

impl Drop for DomList {
    fn drop(&mut self) {
        self.clear();
    }
}
