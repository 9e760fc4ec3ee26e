use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::validation::FileMeta;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || {
            inner_callback();
        }));
    })
}

pub fn file_meta(file: &GlooFile) -> FileMeta {
    FileMeta {
        name: file.name(),
        mime: file.raw_mime_type(),
        size: file.size(),
    }
}

/// Every file in the list, images or not; validation decides what stays.
pub fn collect_files(file_list: &FileList) -> Vec<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(GlooFile::from)
        .collect()
}

pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let head: String = name.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

pub fn format_bytes(bytes: u64) -> String {
    const MIB: f64 = 1024.0 * 1024.0;
    if bytes as f64 >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB)
    } else {
        format!("{:.0} KB", (bytes as f64 / 1024.0).ceil())
    }
}

/// Buzzes the device if the browser exposes the Vibration API.
pub fn vibrate(pattern: &[u32]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
    if !supported {
        log::debug!("Vibration API not available");
        return;
    }
    let steps: js_sys::Array = pattern.iter().map(|ms| JsValue::from(*ms)).collect();
    navigator.vibrate_with_pattern(&steps);
}

pub fn set_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} | ScamCheck", title));
    }
}

#[hook]
pub fn use_title(title: String) {
    use_effect_with(title, |title| {
        set_title(title);
        || ()
    });
}

pub fn render_error_message(error: Option<&str>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

pub fn render_skeleton_rows(rows: usize, columns: usize) -> Html {
    html! {
        { for (0..rows).map(|row| html! {
            <tr class="skeleton-row" key={row.to_string()}>
                { for (0..columns).map(|_| html! { <td><span class="skeleton-bar"></span></td> }) }
            </tr>
        })}
    }
}
