//! Exit handling: signal handlers and the top-level panic report.

use std::panic;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit without unwinding
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(130) }
}

/// Install signal handlers and replace the panic hook so unexpected failures
/// print their message instead of a backtrace dump. Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }

    panic::set_hook(Box::new(|info| {
        let msg = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unexpected failure");
        log::debug!("panic at {:?}", info.location());
        eprintln!("{RED}{msg}{RESET}");
    }));
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
