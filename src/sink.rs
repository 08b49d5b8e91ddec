//! Destinations for convergence records.

use crate::convergence::LogRecord;
use crate::error::*;
use clap::ValueEnum;
use std::io::prelude::*;
use std::path::Path;

/// Consumer of the ordered record stream.
pub trait RecordSink {
    fn record(&mut self, record: LogRecord) -> Result<()>;

    /// Flush anything buffered.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl RecordSink for Vec<LogRecord> {
    fn record(&mut self, record: LogRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Counts records and drops them.
#[derive(Debug, Default, Copy, Clone)]
pub struct CountingSink {
    pub count: usize,
}

impl RecordSink for CountingSink {
    fn record(&mut self, _record: LogRecord) -> Result<()> {
        self.count += 1;
        Ok(())
    }
}

/// How magnitudes are rendered in the text log.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ValueFormat {
    /// Six significant digits, `%g` style
    #[default]
    Compat,

    /// Shortest representation that round trips
    Exact,
}

impl ValueFormat {
    pub fn write<W: Write>(&self, w: &mut W, value: f64) -> std::io::Result<()> {
        match self {
            ValueFormat::Compat => write!(w, "{}", format_g6(value)),
            ValueFormat::Exact => write!(w, "{value}"),
        }
    }
}

/// Render `value` with six significant digits using `%g` rules:
/// fixed notation when the decimal exponent is in `[-5, 6)`,
/// scientific otherwise, trailing zeros dropped.
pub fn format_g6(value: f64) -> String {
    const PRECISION: i32 = 6;
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to PRECISION digits.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Writes `t i j |current| |next|` lines.
pub struct WriterSink<W: Write> {
    output: W,
    format: ValueFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(output: W, format: ValueFormat) -> Self {
        WriterSink { output, format }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl WriterSink<std::io::BufWriter<std::fs::File>> {
    /// Create (truncate) the log file at `path`.
    pub fn create<P: AsRef<Path>>(path: P, format: ValueFormat) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| {
            StencilError::OutputUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(WriterSink::new(std::io::BufWriter::new(file), format))
    }
}

impl<W: Write> RecordSink for WriterSink<W> {
    fn record(&mut self, r: LogRecord) -> Result<()> {
        write!(self.output, "{} {} {} ", r.t, r.i, r.j)?;
        self.format.write(&mut self.output, r.current)?;
        write!(self.output, " ")?;
        self.format.write(&mut self.output, r.next)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}
