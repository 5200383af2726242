//! Console logging
//!
//! Goes to the browser console on wasm32 and to stderr elsewhere (tests).

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::log::log(&format!($($t)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => {
        $crate::log::error(&format!($($t)*))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(msg: &str) {
    eprintln!("{msg}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(msg: &str) {
    eprintln!("error: {msg}");
}
