// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use js_sys::{Function, Promise, Reflect};
use kurbo::{Point, Rect};
use panscan_dom::{ComputedStyle, Document, FullscreenError};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlVideoElement, Window};

use crate::convert;

/// A live browser document seen through [`Document`].
///
/// Cloning is cheap: both fields are JS handles.
#[derive(Clone, Debug)]
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Wraps `document`, which must belong to `window`.
    pub fn new(window: Window, document: web_sys::Document) -> Self {
        Self { window, document }
    }

    /// Wraps the current window's document, if there is one.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    /// Returns the window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the underlying document.
    pub fn raw(&self) -> &web_sys::Document {
        &self.document
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "elementsFromPoint takes f32 viewport coordinates."
)]
fn f64_to_f32(v: f64) -> f32 {
    v as f32
}

impl Document for WebDocument {
    type Node = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn first_child(&self, node: &Element) -> Option<Element> {
        node.first_element_child()
    }

    fn next_sibling(&self, node: &Element) -> Option<Element> {
        node.next_element_sibling()
    }

    fn is_video(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlVideoElement>().is_some()
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        convert::client_rect(r.x(), r.y(), r.width(), r.height())
    }

    fn computed_style(&self, node: &Element) -> ComputedStyle {
        let Ok(Some(style)) = self.window.get_computed_style(node) else {
            return ComputedStyle::VISIBLE;
        };
        let get = |name: &str| style.get_property_value(name).unwrap_or_default();
        convert::computed_style(
            &get("display"),
            &get("visibility"),
            &get("overflow"),
            &get("opacity"),
        )
    }

    fn elements_from_point(&self, point: Point) -> Vec<Element> {
        self.document
            .elements_from_point(f64_to_f32(point.x), f64_to_f32(point.y))
            .iter()
            .filter_map(|value| value.dyn_into::<Element>().ok())
            .collect()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            debug!(name, ?err, "set_attribute failed");
        }
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        if let Err(err) = node.remove_attribute(name) {
            debug!(name, ?err, "remove_attribute failed");
        }
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            debug!(class, ?err, "classList.add failed");
        }
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            debug!(class, ?err, "classList.remove failed");
        }
    }

    fn set_transform(&mut self, node: &Element, css: &str) {
        let Some(node) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = node.style().set_property("transform", css) {
            debug!(?err, "setting transform failed");
        }
    }

    fn fullscreen_element(&self) -> Option<Element> {
        self.document.fullscreen_element()
    }

    fn request_fullscreen(&mut self, node: &Element) -> Result<(), FullscreenError> {
        if !self.document.fullscreen_enabled() {
            return Err(FullscreenError::Unsupported);
        }
        // Browsers refuse through the returned promise, not by throwing.
        let request = Reflect::get(node, &JsValue::from_str("requestFullscreen"))
            .ok()
            .and_then(|request| request.dyn_into::<Function>().ok())
            .ok_or(FullscreenError::Unsupported)?;
        let pending = request
            .call0(node)
            .map_err(|_| FullscreenError::Rejected)?;
        if let Ok(pending) = pending.dyn_into::<Promise>() {
            let on_reject = Closure::<dyn FnMut(JsValue)>::once(|err: JsValue| {
                warn!(error = ?err, "can't make full-screen");
            });
            drop(pending.catch(&on_reject));
            on_reject.forget();
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if self.document.fullscreen_element().is_none() {
            return Err(FullscreenError::Rejected);
        }
        self.document.exit_fullscreen();
        Ok(())
    }

    fn ensure_stylesheet(&mut self, id: &str, css: &str) -> bool {
        if self.document.get_element_by_id(id).is_some() {
            return false;
        }
        let Some(head) = self.document.head() else {
            return false;
        };
        let style = match self.document.create_element("style") {
            Ok(style) => style,
            Err(err) => {
                debug!(?err, "creating <style> failed");
                return false;
            }
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).is_ok()
    }
}
