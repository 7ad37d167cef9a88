// Deny some rustc lints that are allow-by-default.
#![deny(
    ambiguous_negative_literals,
    impl_trait_overcaptures,
    let_underscore_drop,
    missing_copy_implementations,
    missing_debug_implementations,
    non_ascii_idents,
    redundant_imports,
    redundant_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unit_bindings,
    unreachable_pub
)]
#![deny(clippy::pedantic)]
// Allow a few clippy pedantic lints.
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_safety_doc)]
// Selectively deny clippy restriction lints.
#![deny(
    clippy::as_conversions,
    clippy::as_underscore,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::indexing_slicing,
    clippy::map_err_ignore,
    clippy::mem_forget,
    clippy::missing_assert_message,
    clippy::multiple_unsafe_ops_per_block,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::str_to_string,
    clippy::string_slice,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::unimplemented,
    clippy::unreachable,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::use_debug
)]
#![cfg_attr(
    test,
    allow(
        clippy::indexing_slicing,
        clippy::missing_assert_message,
        clippy::multiple_unsafe_ops_per_block,
        clippy::panic,
        clippy::unwrap_used,
    )
)]
mod constants;
mod helpers;

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CString};
use std::panic::catch_unwind;
use std::ptr;

use gover::toolchain;

pub use constants::*;
use helpers::{error, handle_error, map_ordering, to_c_string, to_str};

thread_local!(static ERROR_MESSAGE: RefCell<CString> = RefCell::default());

/// Checks that `name` is a valid toolchain name. Unlike
/// `gv_version_is_valid()`, an invalid name is reported as
/// `GV_ERROR_PARSING_ERROR`, and `gv_get_error_message()` then describes
/// which name was rejected.
#[no_mangle]
pub unsafe extern "C" fn gv_version_parse(name: *const c_char) -> c_int {
    catch_unwind(|| {
        let name = match to_str(name) {
            Ok(x) => x,
            Err(e) => return e,
        };

        match toolchain::parse(name) {
            Ok(_) => GV_OK,
            Err(e) => handle_error(&e),
        }
    })
    .unwrap_or(GV_ERROR_PANICKED)
}

#[no_mangle]
pub unsafe extern "C" fn gv_version_is_valid(name: *const c_char, is_valid: *mut bool) -> c_int {
    catch_unwind(|| {
        if is_valid.is_null() {
            error(GV_ERROR_INVALID_ARGS, "Null pointer passed")
        } else {
            let name = match to_str(name) {
                Ok(x) => x,
                Err(e) => return e,
            };

            *is_valid = toolchain::is_valid(name);

            GV_OK
        }
    })
    .unwrap_or(GV_ERROR_PANICKED)
}

/// Writes `GV_ORDER_LESS`, `GV_ORDER_EQUAL` or `GV_ORDER_GREATER` to
/// `order`. Invalid names compare less than valid names and are not an
/// error.
#[no_mangle]
pub unsafe extern "C" fn gv_version_compare(
    x: *const c_char,
    y: *const c_char,
    order: *mut c_int,
) -> c_int {
    catch_unwind(|| {
        if order.is_null() {
            error(GV_ERROR_INVALID_ARGS, "Null pointer passed")
        } else {
            let (x, y) = match (to_str(x), to_str(y)) {
                (Ok(x), Ok(y)) => (x, y),
                (Err(e), _) | (_, Err(e)) => return e,
            };

            *order = map_ordering(toolchain::compare(x, y));

            GV_OK
        }
    })
    .unwrap_or(GV_ERROR_PANICKED)
}

/// Writes a copy of the greater of `x` and `y` (or `x` if they are equal) to
/// `max`. The copy must be freed with `gv_string_free()`.
#[no_mangle]
pub unsafe extern "C" fn gv_version_max(
    x: *const c_char,
    y: *const c_char,
    max: *mut *mut c_char,
) -> c_int {
    catch_unwind(|| {
        if max.is_null() {
            error(GV_ERROR_INVALID_ARGS, "Null pointer passed")
        } else {
            let (x, y) = match (to_str(x), to_str(y)) {
                (Ok(x), Ok(y)) => (x, y),
                (Err(e), _) | (_, Err(e)) => return e,
            };

            match to_c_string(toolchain::max(x, y)) {
                Ok(s) => {
                    *max = s;
                    GV_OK
                }
                Err(e) => e,
            }
        }
    })
    .unwrap_or(GV_ERROR_PANICKED)
}

/// Writes the language version of `name` to `lang`, or a null pointer if
/// `name` is not a valid toolchain name. A non-null result must be freed with
/// `gv_string_free()`.
#[no_mangle]
pub unsafe extern "C" fn gv_version_lang(name: *const c_char, lang: *mut *mut c_char) -> c_int {
    catch_unwind(|| {
        if lang.is_null() {
            error(GV_ERROR_INVALID_ARGS, "Null pointer passed")
        } else {
            let name = match to_str(name) {
                Ok(x) => x,
                Err(e) => return e,
            };

            match toolchain::lang(name) {
                None => {
                    *lang = ptr::null_mut();
                    GV_OK
                }
                Some(l) => match to_c_string(&l) {
                    Ok(s) => {
                        *lang = s;
                        GV_OK
                    }
                    Err(e) => e,
                },
            }
        }
    })
    .unwrap_or(GV_ERROR_PANICKED)
}

#[no_mangle]
pub unsafe extern "C" fn gv_string_free(string: *mut c_char) {
    if !string.is_null() {
        drop(CString::from_raw(string));
    }
}

#[no_mangle]
pub unsafe extern "C" fn gv_get_error_message(message: *mut *const c_char) -> c_int {
    catch_unwind(|| {
        if message.is_null() {
            error(GV_ERROR_INVALID_ARGS, "Null pointer passed")
        } else {
            ERROR_MESSAGE.with(|f| {
                if f.borrow().as_bytes().is_empty() {
                    *message = ptr::null();
                } else {
                    *message = f.borrow().as_ptr();
                }
            });

            GV_OK
        }
    })
    .unwrap_or(GV_ERROR_PANICKED)
}
