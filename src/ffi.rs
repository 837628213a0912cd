//! C-ABI FFI bindings for cross-language integration.
//!
//! Exposes extraction over span dump files so that renderers written in
//! other languages can hand off their output and read back JSON, Markdown
//! or digest text.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use crate::render::{JsonFormat, RenderOptions};
use crate::{chapter_names, extract_file, render, ExtractOptions, SourceRegistry};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct PapersectFfiResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `papersect_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `papersect_free_result`.
    pub error: *mut c_char,
}

impl PapersectFfiResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(data) => Self {
                success: true,
                data: data.into_raw(),
                error: ptr::null_mut(),
            },
            Err(e) => Self::error(format!(
                "Output contains a NUL byte at position {}",
                e.nul_position()
            )),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message.replace('\0', ""))
                .unwrap_or_default()
                .into_raw(),
        }
    }

    fn from_result(result: crate::Result<String>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

/// Borrow a C path argument as a `&Path`.
unsafe fn path_arg<'a>(path: *const c_char) -> Result<&'a Path, PapersectFfiResult> {
    if path.is_null() {
        return Err(PapersectFfiResult::error("Path cannot be null".to_string()));
    }
    match CStr::from_ptr(path).to_str() {
        Ok(s) => Ok(Path::new(s)),
        Err(_) => Err(PapersectFfiResult::error("Invalid UTF-8 path".to_string())),
    }
}

/// Extract a span dump file to JSON.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `papersect_free_result`.
#[no_mangle]
pub unsafe extern "C" fn papersect_extract_json(
    path: *const c_char,
    pretty: bool,
) -> PapersectFfiResult {
    let path = match path_arg(path) {
        Ok(path) => path,
        Err(result) => return result,
    };

    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };

    PapersectFfiResult::from_result(extract_file(path).and_then(|e| render::to_json(&e, format)))
}

/// Extract a span dump file to Markdown.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `papersect_free_result`.
#[no_mangle]
pub unsafe extern "C" fn papersect_to_markdown(path: *const c_char) -> PapersectFfiResult {
    let path = match path_arg(path) {
        Ok(path) => path,
        Err(result) => return result,
    };

    PapersectFfiResult::from_result(
        extract_file(path).and_then(|e| render::to_markdown(&e, &RenderOptions::default())),
    )
}

/// Extract a span dump file to digest text.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `papersect_free_result`.
#[no_mangle]
pub unsafe extern "C" fn papersect_to_digest(path: *const c_char) -> PapersectFfiResult {
    let path = match path_arg(path) {
        Ok(path) => path,
        Err(result) => return result,
    };

    PapersectFfiResult::from_result(
        extract_file(path).and_then(|e| render::to_digest(&e, &RenderOptions::default())),
    )
}

/// Extract a span dump file with a known title, returning JSON.
///
/// # Safety
///
/// `path` and `title` must be valid null-terminated UTF-8 strings.
/// The returned result must be freed with `papersect_free_result`.
#[no_mangle]
pub unsafe extern "C" fn papersect_extract_with_title(
    path: *const c_char,
    title: *const c_char,
) -> PapersectFfiResult {
    let path = match path_arg(path) {
        Ok(path) => path,
        Err(result) => return result,
    };
    if title.is_null() {
        return PapersectFfiResult::error("Title cannot be null".to_string());
    }
    let title = match CStr::from_ptr(title).to_str() {
        Ok(s) => s,
        Err(_) => return PapersectFfiResult::error("Invalid UTF-8 title".to_string()),
    };

    let options = ExtractOptions::new().with_known_title(title);
    PapersectFfiResult::from_result(
        crate::extract_file_with_options(path, &options)
            .and_then(|e| render::to_json(&e, JsonFormat::Compact)),
    )
}

/// List the numbered chapter lines of a span dump file as a JSON array.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `papersect_free_result`.
#[no_mangle]
pub unsafe extern "C" fn papersect_chapters(path: *const c_char) -> PapersectFfiResult {
    let path = match path_arg(path) {
        Ok(path) => path,
        Err(result) => return result,
    };

    PapersectFfiResult::from_result(chapters_internal(path))
}

fn chapters_internal(path: &Path) -> crate::Result<String> {
    let doc = SourceRegistry::with_defaults().load(path)?;
    Ok(serde_json::to_string(&chapter_names(&doc))?)
}

/// Free a result returned by any papersect function.
///
/// # Safety
///
/// The `result` must have been returned by a papersect function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn papersect_free_result(result: PapersectFfiResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by papersect.
///
/// # Safety
///
/// The `ptr` must have been allocated by papersect.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn papersect_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the papersect library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn papersect_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
