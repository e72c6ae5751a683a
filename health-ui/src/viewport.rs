use leptos::{create_signal, ev, on_cleanup, window_event_listener, ReadSignal, SignalGetUntracked, SignalSet};

/// Widths below this get the compact chart and a collapsed settings panel.
pub const NARROW_VIEWPORT_MAX_WIDTH_PX: f64 = 600.;

pub fn is_narrow_width(width_px: f64) -> bool {
    width_px < NARROW_VIEWPORT_MAX_WIDTH_PX
}

pub fn is_narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(is_narrow_width)
        .unwrap_or(false)
}

/// Tracks [is_narrow_viewport] across window resizes, only notifying when the answer flips.
pub fn create_narrow_viewport_signal() -> ReadSignal<bool> {
    let (narrow_r, narrow_w) = create_signal(is_narrow_viewport());
    let listener = window_event_listener(ev::resize, move |_| {
        let narrow = is_narrow_viewport();
        if narrow != narrow_r.get_untracked() {
            narrow_w.set(narrow);
        }
    });
    on_cleanup(move || listener.remove());
    narrow_r
}

#[cfg(test)]
mod test {
    use crate::viewport::is_narrow_width;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_narrow_width(375.));
        assert!(is_narrow_width(599.9));
        assert!(!is_narrow_width(600.));
        assert!(!is_narrow_width(1280.));
    }
}
