//! File-based record reading
//!
//! ## Supported Formats
//!
//! 1. **CSV**: comma-separated values with a header row
//! 2. **JSON Lines**: one JSON object per line
//!
//! ### CSV Format
//! ```csv
//! Strefa,Sezon,Pora_dnia,Temperatura_C,Wilgotnosc_rel_%,Predkosc_wiatru_m_s,PM2_5_ug_m3
//! miejska,zima,rano,-2.5,88,0.7,96
//! ```
//!
//! Headers are matched case-insensitively, in either the Polish form above
//! or English snake_case (`zone`, `season`, `time_of_day`, `temperature_c`,
//! `humidity_pct`, `wind_m_s`, `pm25_ug_m3`). Columns may appear in any
//! order; unknown columns are ignored. A column absent from the header
//! defaults to an empty tag or a reading of 0. Cells may be double-quoted.
//!
//! ### JSON Lines Format
//! ```json
//! {"zone":"miejska","season":"zima","time_of_day":"rano","temperature":-2.5,"humidity":88,"wind":0.7,"particulate":96}
//! ```
//!
//! Blank lines are skipped in both formats.
//!
//! ## Error Handling
//!
//! The reader is an iterator of `Result`s: a malformed row yields an error
//! for that row and reading continues with the next one. [`RecordReader::read_all`]
//! logs and skips such rows, and stops only on I/O failure.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    errors::{RecordError, RecordResult},
    sample::EnvironmentalSample,
};

/// Record file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Line-delimited JSON
    JsonLines,
}

impl RecordFormat {
    /// Guess the format from a file extension, CSV unless it looks like JSON
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("jsonl") | Some("ndjson") | Some("json") => Self::JsonLines,
            _ => Self::Csv,
        }
    }
}

/// Statistics for record reading
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReaderStats {
    /// Records parsed successfully
    pub records_read: usize,
    /// Non-blank lines seen, header included
    pub lines_processed: usize,
    /// Rows rejected as malformed
    pub parse_errors: usize,
    /// Bytes read from the source
    pub bytes_read: usize,
}

/// Columns the CSV reader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Zone,
    Season,
    TimeOfDay,
    Temperature,
    Humidity,
    Wind,
    Particulate,
}

impl Column {
    fn from_header(name: &str) -> Option<Self> {
        let name = name.trim().trim_start_matches('\u{feff}');
        let column = match name.to_ascii_lowercase().as_str() {
            "strefa" | "zone" => Self::Zone,
            "sezon" | "season" => Self::Season,
            "pora_dnia" | "time_of_day" => Self::TimeOfDay,
            "temperatura_c" | "temperature_c" | "temperature" => Self::Temperature,
            "wilgotnosc_rel_%" | "humidity_pct" | "humidity" => Self::Humidity,
            "predkosc_wiatru_m_s" | "wind_m_s" | "wind" => Self::Wind,
            "pm2_5_ug_m3" | "pm25_ug_m3" | "particulate" => Self::Particulate,
            _ => return None,
        };
        Some(column)
    }
}

/// Parsed CSV header
#[derive(Debug, Clone)]
struct Header {
    names: Vec<String>,
    columns: Vec<Option<Column>>,
}

impl Header {
    fn parse(line: &str) -> Self {
        let names = split_fields(line);
        let columns = names.iter().map(|name| Column::from_header(name)).collect::<Vec<_>>();

        for (name, column) in names.iter().zip(&columns) {
            if column.is_none() {
                debug!("Ignoring unknown column {:?}", name);
            }
        }

        Self { names, columns }
    }

    fn sample(&self, line: usize, text: &str) -> RecordResult<EnvironmentalSample> {
        let cells = split_fields(text);
        let mut sample = EnvironmentalSample::default();

        for (index, column) in self.columns.iter().enumerate() {
            let Some(column) = column else { continue };
            let field = &self.names[index];
            let cell = cells.get(index).ok_or_else(|| RecordError::MissingField {
                line,
                field: field.clone(),
            })?;

            match column {
                Column::Zone => sample.zone = cell.trim().to_owned(),
                Column::Season => sample.season = cell.trim().to_owned(),
                Column::TimeOfDay => sample.time_of_day = cell.trim().to_owned(),
                Column::Temperature => sample.temperature = number(line, field, cell)?,
                Column::Humidity => sample.humidity = number(line, field, cell)?,
                Column::Wind => sample.wind = number(line, field, cell)?,
                Column::Particulate => sample.particulate = number(line, field, cell)?,
            }
        }

        Ok(sample)
    }
}

fn number(line: usize, field: &str, cell: &str) -> RecordResult<f64> {
    cell.trim().parse::<f64>().map_err(|_| RecordError::InvalidNumber {
        line,
        field: field.to_owned(),
        value: cell.to_owned(),
    })
}

/// Split one CSV line into cells, honouring double quotes
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

/// Streaming reader of environmental records
///
/// ```rust,no_run
/// use airguard_records::RecordReader;
///
/// let reader = RecordReader::open("data/data.csv")?;
/// let (samples, stats) = reader.read_all()?;
/// println!("{} records, {} rejected", samples.len(), stats.parse_errors);
/// # Ok::<(), airguard_records::RecordError>(())
/// ```
pub struct RecordReader<R> {
    source: R,
    path: PathBuf,
    format: RecordFormat,
    header: Option<Header>,
    buffer: String,
    line: usize,
    stats: ReaderStats,
}

impl RecordReader<BufReader<File>> {
    /// Open a file, guessing the format from its extension
    pub fn open<P: AsRef<Path>>(path: P) -> RecordResult<Self> {
        let format = RecordFormat::from_path(&path);
        Self::open_with_format(path, format)
    }

    /// Open a file in an explicit format
    pub fn open_with_format<P: AsRef<Path>>(path: P, format: RecordFormat) -> RecordResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| RecordError::Io {
            path: path.clone(),
            source,
        })?;

        let mut reader = Self::new(BufReader::new(file), format);
        reader.path = path;
        Ok(reader)
    }
}

impl<R: BufRead> RecordReader<R> {
    /// Read records from any buffered source
    pub fn new(source: R, format: RecordFormat) -> Self {
        Self {
            source,
            path: PathBuf::from("<stream>"),
            format,
            header: None,
            buffer: String::new(),
            line: 0,
            stats: ReaderStats::default(),
        }
    }

    /// Format being read
    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Statistics so far
    pub fn stats(&self) -> &ReaderStats {
        &self.stats
    }

    /// Read every record, skipping malformed rows
    ///
    /// Per-row failures are logged at warn and counted in the returned
    /// statistics. An I/O failure aborts the read.
    pub fn read_all(mut self) -> RecordResult<(Vec<EnvironmentalSample>, ReaderStats)> {
        let mut samples = Vec::new();

        while let Some(result) = self.next() {
            match result {
                Ok(sample) => samples.push(sample),
                Err(err) if err.is_per_record() => warn!("Skipping record in {}: {}", self.path.display(), err),
                Err(err) => return Err(err),
            }
        }

        Ok((samples, self.stats))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = RecordResult<EnvironmentalSample>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.source.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(bytes) => {
                    self.stats.bytes_read += bytes;
                    self.line += 1;
                }
                Err(source) => {
                    return Some(Err(RecordError::Io {
                        path: self.path.clone(),
                        source,
                    }))
                }
            }

            let text = self.buffer.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }
            self.stats.lines_processed += 1;

            let result = match self.format {
                RecordFormat::Csv => match &self.header {
                    None => {
                        self.header = Some(Header::parse(text));
                        continue;
                    }
                    Some(header) => header.sample(self.line, text),
                },
                RecordFormat::JsonLines => serde_json::from_str::<EnvironmentalSample>(text)
                    .map_err(|source| RecordError::Json { line: self.line, source }),
            };

            match &result {
                Ok(_) => self.stats.records_read += 1,
                Err(_) => self.stats.parse_errors += 1,
            }
            return Some(result);
        }
    }
}

/// Read every record of a file, skipping malformed rows
pub fn load<P: AsRef<Path>>(path: P) -> RecordResult<(Vec<EnvironmentalSample>, ReaderStats)> {
    RecordReader::open(path)?.read_all()
}
