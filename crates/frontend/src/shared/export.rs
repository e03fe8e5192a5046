/// Экспорт табличных данных: CSV для Excel и печатная форма (PDF через диалог печати)
use contracts::dashboards::d405_app_level_retn_rem::ExportTable;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// How long a print view's object URL stays alive after the window opens
const PRINT_URL_TTL_MS: u32 = 60_000;

/// Экспортирует таблицу в CSV файл и инициирует скачивание
pub fn export_to_excel(table: &ExportTable, filename: &str) -> Result<(), String> {
    if table.is_empty() {
        return Err("No data to export".to_string());
    }

    let blob = create_blob(&table.to_csv(), "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)?;

    Ok(())
}

/// Opens a print view of the table in a new window. The document calls
/// `window.print()` on load, so the user can save it as PDF.
pub fn export_to_pdf(table: &ExportTable, title: &str, generated_at: &str) -> Result<(), String> {
    if table.is_empty() {
        return Err("No data to export".to_string());
    }

    let blob = create_blob(&table.to_print_html(title, generated_at), "text/html;charset=utf-8;")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let opened = window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open print window: {:?}", e))?;
    if opened.is_none() {
        let _ = Url::revoke_object_url(&url);
        return Err("Print window was blocked by the browser".to_string());
    }

    // Новое окно загружает документ асинхронно, URL освобождаем позже
    gloo_timers::callback::Timeout::new(PRINT_URL_TTL_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();

    Ok(())
}

/// Создает Blob объект с текстовым содержимым
fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Временная ссылка для скачивания
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
