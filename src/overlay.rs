use crate::constants::*;
use crate::dom;
use tree_core::landmark::HAND_CONNECTIONS;
use tree_core::{blessing_lines, LandmarkSet, OverlayCard};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Show the persistent "not ready" indicator with `text`.
pub fn show_status(document: &web::Document, text: &str) {
    if let Some(el) = dom::html_element(document, STATUS_ID) {
        el.set_text_content(Some(text));
        dom::set_style(&el, "display", "");
    }
}

#[inline]
pub fn hide_status(document: &web::Document) {
    if let Some(el) = dom::html_element(document, STATUS_ID) {
        dom::set_style(&el, "display", "none");
    }
}

/// Move the cursor to the hand, or fade it out when there is none.
pub fn update_cursor(document: &web::Document, hand: Option<glam::Vec2>) {
    let Some(el) = dom::html_element(document, CURSOR_ID) else {
        return;
    };
    match hand {
        Some(pos) => {
            let (left, top) = cursor_css(pos.x, pos.y);
            dom::set_style(&el, "left", &left);
            dom::set_style(&el, "top", &top);
            dom::set_style(&el, "opacity", "1");
        }
        None => dom::set_style(&el, "opacity", "0"),
    }
}

/// Sync the blessing card element. Lines are rebuilt only when shown.
pub fn update_card(document: &web::Document, card: &OverlayCard) {
    let Some(el) = dom::html_element(document, CARD_ID) else {
        return;
    };
    if card.visible {
        el.set_inner_html("");
        for line in blessing_lines(card.text) {
            if let Ok(p) = document.create_element("p") {
                p.set_text_content(Some(line));
                _ = el.append_child(&p);
            }
        }
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("data-visible", "1");
    } else {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("data-visible", "0");
    }
}

/// Draw the detected skeleton into the small mirrored preview canvas.
#[allow(deprecated)]
pub fn draw_preview(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    landmarks: Option<&LandmarkSet>,
) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    let Some(lm) = landmarks else {
        return;
    };
    let pts = lm.points();

    ctx.set_stroke_style(&JsValue::from_str(PREVIEW_LINE_COLOR));
    ctx.set_line_width(PREVIEW_LINE_WIDTH);
    ctx.begin_path();
    for &(a, b) in HAND_CONNECTIONS.iter() {
        let (ax, ay) = preview_point(pts[a].x, pts[a].y, w, h);
        let (bx, by) = preview_point(pts[b].x, pts[b].y, w, h);
        ctx.move_to(ax, ay);
        ctx.line_to(bx, by);
    }
    ctx.stroke();

    ctx.set_fill_style(&JsValue::from_str(PREVIEW_POINT_COLOR));
    for p in pts.iter() {
        let (x, y) = preview_point(p.x, p.y, w, h);
        ctx.begin_path();
        _ = ctx.arc(x, y, PREVIEW_POINT_RADIUS, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}
