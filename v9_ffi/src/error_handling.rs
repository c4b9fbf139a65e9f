use std::{cell::RefCell, ffi::CString};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Debug representation of the error value that occurred, may hold the exact input values
    /// that were rejected.
    pub error_report_data: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, error_report_data: CString) -> Self {
        LastErrorData {
            error_msg,
            error_report_data,
        }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

/// Set last error information.
///
/// `error_msg` and `error_report` are turned into CStrings from bytes, interior nulls are replaced
/// by a fixed message.
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T, error_report: T) {
    let msg = CString::new(error_msg)
        .unwrap_or_else(|_| CString::from(c"Failed to create error message string!"));
    let report = CString::new(error_report)
        .unwrap_or_else(|_| CString::from(c"Failed to create error report string!"));

    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = Some(LastErrorData::new(msg, report));
    });
}

/// Record `err` as the last error and return `code`.
pub fn report_error(err: &v9::Error, code: i32) -> i32 {
    set_last_error(err.to_string(), format!("{:?}", err));
    code
}

/// Clear the last error information.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = None;
    });
}
