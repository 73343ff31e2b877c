//! Line-oriented diagnostic log over any `ufmt` sink
//!
//! Nothing is buffered; each call writes one line straight to the sink.
//! Write errors are dropped since the remote has no way to report them.
//! Never log from inside a pulse: the carrier timing is busy-waited.

use core::convert::Infallible;
use ufmt::{uWrite, uwrite};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogType {
    System,
    Debug,
    Error,
}

impl LogType {
    fn tag(self) -> &'static str {
        match self {
            LogType::System => "[SYS] ",
            LogType::Debug => "[DBG] ",
            LogType::Error => "[ERR] ",
        }
    }
}

pub struct Logger<W> {
    sink: W,
}

impl<W: uWrite> Logger<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn log_system(&mut self, msg: &str) {
        self.log_entry(LogType::System, msg, None);
    }

    /// `msg: 0x<value>`
    pub fn log_debug(&mut self, msg: &str, value: u32) {
        self.log_entry(LogType::Debug, msg, Some(value));
    }

    pub fn log_error(&mut self, msg: &str) {
        self.log_entry(LogType::Error, msg, None);
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn log_entry(&mut self, log_type: LogType, msg: &str, value: Option<u32>) {
        self.write_entry(log_type, msg, value).ok();
    }

    fn write_entry(&mut self, log_type: LogType, msg: &str, value: Option<u32>) -> Result<(), W::Error> {
        uwrite!(&mut self.sink, "{}{}", log_type.tag(), msg)?;
        if let Some(value) = value {
            self.sink.write_str(": 0x")?;
            self.write_hex(value)?;
        }
        self.sink.write_str("\r\n")
    }

    // Upper-case hex without leading zeros
    fn write_hex(&mut self, value: u32) -> Result<(), W::Error> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        let mut started = false;
        for shift in (0..8).rev() {
            let nibble = (value >> (shift * 4)) & 0xF;
            if nibble == 0 && !started && shift > 0 {
                continue;
            }
            started = true;
            self.sink.write_char(char::from(HEX_CHARS[nibble as usize]))?;
        }
        Ok(())
    }
}

/// Discards everything; used when the `debug` feature is off
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl uWrite for NullSink {
    type Error = Infallible;

    #[inline(always)]
    fn write_str(&mut self, _s: &str) -> Result<(), Infallible> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Capture;

    #[test]
    fn system_line() {
        let mut logger = Logger::new(Capture::default());
        logger.log_system("wake");
        assert_eq!(logger.sink().0, "[SYS] wake\r\n");
    }

    #[test]
    fn debug_value_in_hex() {
        let mut logger = Logger::new(Capture::default());
        logger.log_debug("frame", 0xF1D2D);
        logger.log_debug("command", 0);
        logger.log_debug("address", 0x1E3A);
        assert_eq!(
            logger.into_inner().0,
            "[DBG] frame: 0xF1D2D\r\n[DBG] command: 0x0\r\n[DBG] address: 0x1E3A\r\n"
        );
    }

    #[test]
    fn error_line() {
        let mut logger = Logger::new(Capture::default());
        logger.log_error("button read failed");
        assert_eq!(logger.sink().0, "[ERR] button read failed\r\n");
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut logger = Logger::new(NullSink);
        logger.log_system("boot");
        logger.log_debug("frame", u32::MAX);
    }
}
