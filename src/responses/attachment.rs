// responses/attachment.rs
//
// File names for downloads. Names come from people ("João da Silva"), so the
// header carries an ASCII fallback plus the UTF-8 form.

const FALLBACK_SEED: &str = "documento";

/// Collapses every run of non-alphanumeric characters into one `_`,
/// dropping leading and trailing runs. `"João  da Silva!"` -> `"João_da_Silva"`.
pub fn sanitize_file_seed(seed: &str) -> String {
    let mut out = String::with_capacity(seed.len());
    let mut pending_gap = false;

    for ch in seed.chars() {
        if ch.is_alphanumeric() {
            if pending_gap && !out.is_empty() {
                out.push('_');
            }
            pending_gap = false;
            out.push(ch);
        } else {
            pending_gap = true;
        }
    }

    if out.is_empty() {
        FALLBACK_SEED.to_string()
    } else {
        out
    }
}

/// `<prefix>_<seed>.<extension>`
pub fn attachment_filename(prefix: &str, seed: &str, extension: &str) -> String {
    format!("{prefix}_{}.{extension}", sanitize_file_seed(seed))
}

pub fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|ch| if ch.is_ascii() && ch != '"' { ch } else { '_' })
        .collect();
    // form encoding writes spaces as `+`; RFC 5987 wants `%20`.
    let encoded = url::form_urlencoded::byte_serialize(filename.as_bytes())
        .collect::<String>()
        .replace('+', "%20");

    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}
