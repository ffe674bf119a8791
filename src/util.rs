use wasm_bindgen::JsValue;
use yew_swipe::Sample;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Human-readable travel between two samples, e.g. "20px right, 5px up".
pub fn describe_swipe(start: Sample, end: Sample) -> String {
    let dx = end.client_x - start.client_x;
    let dy = end.client_y - start.client_y;
    let horiz = if dx >= 0.0 { "right" } else { "left" };
    let vert = if dy >= 0.0 { "down" } else { "up" };
    format!("{:.0}px {}, {:.0}px {}", dx.abs(), horiz, dy.abs(), vert)
}

/// SVG polyline `points` attribute for a trail.
pub fn polyline_points<'a>(trail: impl IntoIterator<Item = &'a Sample>) -> String {
    trail
        .into_iter()
        .map(|s| format!("{},{}", s.client_x, s.client_y))
        .collect::<Vec<_>>()
        .join(" ")
}
