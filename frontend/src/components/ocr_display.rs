use yew::prelude::*;

const COLLAPSED_CHARS: usize = 280;

#[derive(Properties, PartialEq)]
pub struct OcrDisplayProps {
    pub text: String,
}

/// Text the backend read out of the uploaded image.
#[function_component(OcrDisplay)]
pub fn ocr_display(props: &OcrDisplayProps) -> Html {
    let expanded = use_state(|| false);
    let long = props.text.chars().count() > COLLAPSED_CHARS;

    let shown = if long && !*expanded {
        let head: String = props.text.chars().take(COLLAPSED_CHARS).collect();
        format!("{}…", head)
    } else {
        props.text.clone()
    };

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <section class="sub-panel ocr-display">
            <h3><i class="fa-solid fa-font"></i>{" ข้อความที่อ่านได้จากรูปภาพ"}</h3>
            <pre class="ocr-text">{ shown }</pre>
            if long {
                <button class="link-btn" onclick={toggle}>
                    { if *expanded { "ย่อ" } else { "แสดงทั้งหมด" } }
                </button>
            }
        </section>
    }
}
