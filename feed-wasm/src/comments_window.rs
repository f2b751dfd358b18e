use feed_core::Comment;
use wasm_bindgen::JsValue;
use web_sys::{Document, Node, Window};

fn js_err(context: &str, err: JsValue) -> String {
    format!("{context}: {err:?}")
}

/// Открывает пустую вкладку. Вызывается синхронно из обработчика клика,
/// иначе браузер блокирует всплывающее окно.
pub(crate) fn open_blank_tab() -> Result<Window, String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    window
        .open_with_url_and_target("", "_blank")
        .map_err(|err| js_err("failed to open tab", err))?
        .ok_or_else(|| "new tab was blocked by the browser".to_string())
}

fn append_text(document: &Document, parent: &Node, tag: &str, text: &str) -> Result<(), String> {
    let element = document
        .create_element(tag)
        .map_err(|err| js_err("failed to create element", err))?;
    element.set_text_content(Some(text));
    parent
        .append_child(&element)
        .map_err(|err| js_err("failed to append element", err))?;
    Ok(())
}

/// Рисует во вкладке заголовок и по блоку на комментарий. Текст
/// вставляется как текст, не как HTML.
pub(crate) fn write_comments(tab: &Window, comments: &[Comment]) -> Result<(), String> {
    let document = tab
        .document()
        .ok_or_else(|| "tab has no document".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "tab has no body".to_string())?;

    append_text(&document, &body, "h1", "Comments")?;

    for comment in comments {
        let block = document
            .create_element("div")
            .map_err(|err| js_err("failed to create element", err))?;
        append_text(&document, &block, "h3", &comment.name)?;
        append_text(&document, &block, "p", &comment.body)?;

        let separator = document
            .create_element("hr")
            .map_err(|err| js_err("failed to create element", err))?;
        block
            .append_child(&separator)
            .map_err(|err| js_err("failed to append element", err))?;
        body.append_child(&block)
            .map_err(|err| js_err("failed to append element", err))?;
    }

    Ok(())
}
