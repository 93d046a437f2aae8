use std::io;

/// Line writer forwarding formatted tracing output to the developer console
struct ConsoleWriter;

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(super) fn init_tracing() {
    // wasm32 has no clock for the default timer
    let _ = tracing_subscriber::fmt()
        .with_writer(|| ConsoleWriter)
        .without_time()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
