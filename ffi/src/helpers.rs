use std::cmp::Ordering;
use std::ffi::{c_char, c_int, CStr, CString};

use gover::Error;

use super::ERROR_MESSAGE;
use crate::constants::{
    GV_ERROR_INTERNAL_LOGIC_ERROR, GV_ERROR_INVALID_ARGS, GV_ERROR_PARSING_ERROR,
    GV_ERROR_TEXT_ENCODE_FAIL, GV_ORDER_EQUAL, GV_ORDER_GREATER, GV_ORDER_LESS,
};

pub(crate) fn error(code: c_int, message: &str) -> c_int {
    ERROR_MESSAGE.with(|f| {
        *f.borrow_mut() = CString::new(message.as_bytes())
            .or_else(|_e| CString::new(message.replace('\0', "\\0").as_bytes()))
            .unwrap_or_else(|_e| c"Failed to retrieve error message".into());
    });
    code
}

pub(crate) fn handle_error(err: &Error) -> c_int {
    let code = map_error(err);
    error(code, &format!("{err}"))
}

fn map_error(err: &Error) -> c_int {
    match err {
        Error::InvalidVersion(_) => GV_ERROR_PARSING_ERROR,
        _ => GV_ERROR_INTERNAL_LOGIC_ERROR,
    }
}

pub(crate) fn map_ordering(ordering: Ordering) -> c_int {
    match ordering {
        Ordering::Less => GV_ORDER_LESS,
        Ordering::Equal => GV_ORDER_EQUAL,
        Ordering::Greater => GV_ORDER_GREATER,
    }
}

pub(crate) unsafe fn to_str<'a>(c_string: *const c_char) -> Result<&'a str, c_int> {
    if c_string.is_null() {
        Err(error(GV_ERROR_INVALID_ARGS, "Null pointer passed"))
    } else {
        CStr::from_ptr(c_string)
            .to_str()
            .map_err(|_e| error(GV_ERROR_INVALID_ARGS, "Non-UTF-8 string passed"))
    }
}

/// Allocates a C string that the caller must free with `gv_string_free()`.
pub(crate) fn to_c_string(string: &str) -> Result<*mut c_char, c_int> {
    CString::new(string)
        .map(CString::into_raw)
        .map_err(|e| error(GV_ERROR_TEXT_ENCODE_FAIL, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_error_should_map_an_invalid_version_to_a_parsing_error() {
        let code = handle_error(&Error::InvalidVersion("go1.02".into()));

        assert_eq!(GV_ERROR_PARSING_ERROR, code);
        ERROR_MESSAGE.with(|f| {
            assert_eq!(
                "invalid version \"go1.02\"",
                f.borrow().to_str().unwrap()
            );
        });
    }

    #[test]
    fn error_should_escape_nul_characters_in_the_message() {
        error(GV_ERROR_INVALID_ARGS, "bad\0input");

        ERROR_MESSAGE.with(|f| {
            assert_eq!("bad\\0input", f.borrow().to_str().unwrap());
        });
    }

    #[test]
    fn map_ordering_should_map_to_order_constants() {
        assert_eq!(GV_ORDER_LESS, map_ordering(Ordering::Less));
        assert_eq!(GV_ORDER_EQUAL, map_ordering(Ordering::Equal));
        assert_eq!(GV_ORDER_GREATER, map_ordering(Ordering::Greater));
    }

    #[test]
    fn to_str_should_error_for_a_null_pointer() {
        let result = unsafe { to_str(std::ptr::null()) };

        assert_eq!(Err(GV_ERROR_INVALID_ARGS), result);
    }

    #[test]
    fn to_c_string_should_error_if_the_string_contains_a_nul() {
        assert_eq!(Err(GV_ERROR_TEXT_ENCODE_FAIL), to_c_string("go1\0"));
    }

    #[test]
    fn to_c_string_should_allocate_an_owned_copy() {
        let pointer = to_c_string("go1.21").unwrap();
        let string = unsafe { CString::from_raw(pointer) };

        assert_eq!("go1.21", string.to_str().unwrap());
    }
}
