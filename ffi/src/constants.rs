use libc::c_int;

#[no_mangle]
pub static GV_OK: c_int = 0;

/// Invalid arguments were given for the function.
#[no_mangle]
pub static GV_ERROR_INVALID_ARGS: c_int = -1;

/// The given string is not a valid toolchain name.
#[no_mangle]
pub static GV_ERROR_PARSING_ERROR: c_int = -2;

/// Something panicked.
#[no_mangle]
pub static GV_ERROR_PANICKED: c_int = -3;

/// Failed to encode string as a C string, e.g. because there was a nul present.
#[no_mangle]
pub static GV_ERROR_TEXT_ENCODE_FAIL: c_int = -4;

/// An error variant that this version of the bindings does not know about.
#[no_mangle]
pub static GV_ERROR_INTERNAL_LOGIC_ERROR: c_int = -5;

/// The first version is less than the second.
#[no_mangle]
pub static GV_ORDER_LESS: c_int = -1;

/// The two versions are equal.
#[no_mangle]
pub static GV_ORDER_EQUAL: c_int = 0;

/// The first version is greater than the second.
#[no_mangle]
pub static GV_ORDER_GREATER: c_int = 1;
