use std::cell::RefCell;
use log::LevelFilter::*;

thread_local! {
    static LOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Removes and returns all messages logged since the last call.
pub fn take_log() -> Vec<String> {
    LOG.with(|log| {
        log.replace(Vec::new())
    })
}

/// Buffers messages to be printed once per tick by the JS side.
struct BufferedLog;
/// Sends messages to the player as game notifications.
struct GameNotify;

impl log::Log for BufferedLog {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        #[cfg(not(test))]
        #[cfg(not(feature = "separate_messages"))]
        LOG.with(|log| {
            log.borrow_mut().push(format!("{}", record.args()));
        });
        #[cfg(not(test))]
        #[cfg(feature = "separate_messages")]
        web_sys::console::log_1(&js_sys::JsString::from(format!("{}", record.args())));
        #[cfg(test)]
        println!("{}", record.args());
    }

    fn flush(&self) {}
}

impl log::Log for GameNotify {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    #[allow(unused_variables)]
    fn log(&self, record: &log::Record<'_>) {
        #[cfg(not(test))]
        screeps::game::notify(&format!("{}", record.args()), None);
    }

    fn flush(&self) {}
}

#[cfg(test)]
static LOGGING_INITIALIZED: std::sync::Mutex<bool> = std::sync::Mutex::new(false);

/// Installs the logger. Outside of tests it must be called only once per WASM VM instance.
pub fn init_logging(verbosity: log::LevelFilter) {
    #[cfg(test)]
    {
        let mut lock = LOGGING_INITIALIZED.lock().unwrap();

        if *lock {
            return;
        }

        *lock = true;
    }

    let result = fern::Dispatch::new()
        .level(verbosity)
        .format(|out, message, record| {
            #[cfg(not(test))]
            let postfix = "</span>";
            #[cfg(test)]
            let postfix = "";
            if record.level() >= Debug {
                #[cfg(not(test))]
                let prefix = "<span style=\"color: #66b\">";
                #[cfg(test)]
                let prefix = "[DEBUG] ";
                out.finish(format_args!(
                    "{}{}: {}{}",
                    prefix,
                    record.target(),
                    message,
                    postfix
                ))
            } else if record.level() <= Warn {
                #[cfg(not(test))]
                let prefix = "<span style=\"color: #f99\">";
                #[cfg(test)]
                let prefix = "";
                out.finish(format_args!(
                    "{}[{}] {}: {}{}",
                    prefix,
                    record.level(),
                    record.target(),
                    message,
                    postfix
                ))
            } else {
                out.finish(format_args!("{}", message))
            }
        })
        .chain(Box::new(BufferedLog) as Box<dyn log::Log>)
        .chain(
            fern::Dispatch::new()
                .level(Error)
                .chain(Box::new(GameNotify) as Box<dyn log::Log>),
        )
        .apply();

    if result.is_err() {
        // A logger is already installed, e.g., by the bot this crate is linked into.
        log::debug!("Logging was already initialized.");
    }
}
