//! Interactive menu
//!
//! Two modes: typing in one set of readings by hand, or assessing the
//! records of a database file after filtering them by tag. Input and output
//! are generic so the whole dialogue can be driven from tests.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use airguard_core::{Model, QualityAssessment, Readings};
use airguard_records::{load, Criteria, EnvironmentalSample, RecordError, Tag};
use anyhow::Result;
use log::info;

/// Tag combinations offered in database mode, by menu number
const FILTER_OPTIONS: [(&str, &[Tag]); 7] = [
    ("Zone", &[Tag::Zone]),
    ("Season", &[Tag::Season]),
    ("Time of day", &[Tag::TimeOfDay]),
    ("Zone + Season", &[Tag::Zone, Tag::Season]),
    ("Season + Time of day", &[Tag::Season, Tag::TimeOfDay]),
    ("Zone + Time of day", &[Tag::Zone, Tag::TimeOfDay]),
    ("All three", &[Tag::Zone, Tag::Season, Tag::TimeOfDay]),
];

/// Menu session over a model and a database file
pub struct Menu<'m, R, W> {
    model: &'m Model,
    database: PathBuf,
    input: R,
    output: W,
}

impl<'m, R: BufRead, W: Write> Menu<'m, R, W> {
    /// New session
    pub fn new(model: &'m Model, database: PathBuf, input: R, output: W) -> Self {
        Self {
            model,
            database,
            input,
            output,
        }
    }

    /// Show the main menu and run the chosen mode once
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== EXPERT SYSTEM: ENVIRONMENTAL QUALITY ===")?;
        writeln!(self.output, "1) Enter your own weather readings")?;
        writeln!(self.output, "2) Use records from the database (CSV)")?;

        match self.prompt("\nChoose an option (1 or 2): ")?.as_deref() {
            Some("1") => self.manual_mode(),
            Some("2") => self.database_mode(),
            _ => {
                writeln!(self.output, "Invalid choice.")?;
                Ok(())
            }
        }
    }

    fn manual_mode(&mut self) -> Result<()> {
        let prompts = [
            "PM2.5 (ug/m3): ",
            "Wind speed (m/s): ",
            "Temperature (degrees Celsius): ",
            "Relative humidity (%): ",
        ];

        let mut values = [0.0f64; 4];
        for (value, prompt) in values.iter_mut().zip(prompts) {
            match self.prompt(prompt)?.and_then(|text| text.parse::<f64>().ok()) {
                Some(parsed) => *value = parsed,
                None => {
                    writeln!(self.output, "Invalid numeric input.")?;
                    return Ok(());
                }
            }
        }

        let [particulate, wind, temperature, humidity] = values;
        let sample = EnvironmentalSample::manual(Readings::new(particulate, wind, temperature, humidity));
        crate::warn_outside_universe(self.model, &sample.to_readings());

        match sample.evaluate(self.model) {
            Ok(assessment) => {
                writeln!(self.output, "\nEnvironmental assessment: {}", summary(&assessment))?
            }
            Err(err) => writeln!(self.output, "\nCannot assess these readings: {}", err)?,
        }
        Ok(())
    }

    fn database_mode(&mut self) -> Result<()> {
        let samples = match load(&self.database) {
            Ok((samples, stats)) => {
                info!(
                    "Loaded {} records from {} ({} rejected)",
                    stats.records_read,
                    self.database.display(),
                    stats.parse_errors
                );
                samples
            }
            Err(RecordError::Io { path, source }) if source.kind() == io::ErrorKind::NotFound => {
                writeln!(self.output, "Database file not found: {}", path.display())?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        if samples.is_empty() {
            return Ok(());
        }

        writeln!(self.output, "\nFilter the records by:")?;
        for (number, (name, _)) in FILTER_OPTIONS.iter().enumerate() {
            writeln!(self.output, "{}) {}", number + 1, name)?;
        }

        let choice = self.prompt("Choose an option number: ")?;
        let tags = choice
            .and_then(|text| text.parse::<usize>().ok())
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| FILTER_OPTIONS.get(index))
            .map(|(_, tags)| *tags)
            .unwrap_or(&[]);

        let mut criteria = Criteria::new();
        for tag in tags {
            let value = self.prompt(&format!("{}: ", capitalized(*tag)))?.unwrap_or_default();
            criteria = criteria.with(*tag, value);
        }

        let matched: Vec<&EnvironmentalSample> = criteria.filter(&samples).collect();
        if matched.is_empty() {
            writeln!(self.output, "\nNo records match the criteria.")?;
            return Ok(());
        }

        writeln!(self.output, "\nFound {} records.\n", matched.len())?;
        for sample in matched {
            self.show_record(sample)?;
        }
        Ok(())
    }

    fn show_record(&mut self, sample: &EnvironmentalSample) -> io::Result<()> {
        writeln!(
            self.output,
            "Zone: {}, Season: {}, Time of day: {}",
            sample.zone, sample.season, sample.time_of_day
        )?;
        writeln!(
            self.output,
            "  Temperature={} C, Humidity={} %, PM2.5={} ug/m3, Wind={} m/s",
            sample.temperature, sample.humidity, sample.particulate, sample.wind
        )?;
        match sample.evaluate(self.model) {
            Ok(assessment) => writeln!(self.output, "  Assessment: {}\n", summary(&assessment)),
            Err(err) => writeln!(self.output, "  Assessment failed: {}\n", err),
        }
    }

    /// Print `text`, read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

/// "label (index N)" line used by every text output
pub fn summary(assessment: &QualityAssessment) -> String {
    let mut text = format!("{} (index {:.1})", assessment.label(), assessment.index);
    if assessment.degenerate {
        text.push_str(" [no rule fired, fallback index]");
    }
    text
}

fn capitalized(tag: Tag) -> String {
    let name = tag.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DATABASE: &str = "\
Strefa,Sezon,Pora_dnia,Temperatura_C,Wilgotnosc_rel_%,Predkosc_wiatru_m_s,PM2_5_ug_m3
wiejska,lato,poludnie,18,50,1.5,0
miejska,zima,rano,18,50,1.5,150
miejska,lato,noc,18,50,4,20
";

    fn run(model: &Model, database: PathBuf, input: &str) -> String {
        let mut output = Vec::new();
        Menu::new(model, database, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn database() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(DATABASE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn manual_mode_prints_label_and_index() {
        let model = Model::standard().unwrap();
        let output = run(&model, PathBuf::from("unused.csv"), "1\n0\n1.5\n18\n50\n");

        assert!(output.contains("Environmental assessment: very good (index 90.7)"), "{}", output);
    }

    #[test]
    fn manual_mode_rejects_text() {
        let model = Model::standard().unwrap();
        let output = run(&model, PathBuf::from("unused.csv"), "1\nlots\n");

        assert!(output.contains("Invalid numeric input."));
        assert!(!output.contains("Environmental assessment"));
    }

    #[test]
    fn manual_mode_reports_negative_readings() {
        let model = Model::standard().unwrap();
        let output = run(&model, PathBuf::from("unused.csv"), "1\n-1\n0\n20\n50\n");

        assert!(output.contains("Cannot assess these readings"), "{}", output);
    }

    #[test]
    fn invalid_main_choice() {
        let model = Model::standard().unwrap();
        let output = run(&model, PathBuf::from("unused.csv"), "3\n");

        assert!(output.trim_end().ends_with("Invalid choice."));
    }

    #[test]
    fn database_mode_filters_by_zone() {
        let model = Model::standard().unwrap();
        let file = database();
        let output = run(&model, file.path().to_path_buf(), "2\n1\n MIEJSKA \n");

        assert!(output.contains("Found 2 records."), "{}", output);
        assert!(output.contains("Assessment: alarming (index 9.1)"));
        assert!(output.contains("Assessment: good (index 80.4)"));
        assert!(!output.contains("wiejska"));
    }

    #[test]
    fn database_mode_filters_by_all_three_tags() {
        let model = Model::standard().unwrap();
        let file = database();
        let output = run(&model, file.path().to_path_buf(), "2\n7\nwiejska\nlato\npoludnie\n");

        assert!(output.contains("Found 1 records."), "{}", output);
        assert!(output.contains("Assessment: very good (index 90.7)"));
    }

    #[test]
    fn database_mode_without_matches() {
        let model = Model::standard().unwrap();
        let file = database();
        let output = run(&model, file.path().to_path_buf(), "2\n2\nwiosna\n");

        assert!(output.contains("No records match the criteria."));
    }

    #[test]
    fn unknown_filter_option_keeps_every_record() {
        let model = Model::standard().unwrap();
        let file = database();
        let output = run(&model, file.path().to_path_buf(), "2\n9\n");

        assert!(output.contains("Found 3 records."), "{}", output);
    }

    #[test]
    fn missing_database_returns_to_caller() {
        let model = Model::standard().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = run(&model, dir.path().join("data.csv"), "2\n");

        assert!(output.contains("Database file not found"));
    }

    #[test]
    fn unreadable_database_is_an_error() {
        let model = Model::standard().unwrap();
        let dir = tempfile::tempdir().unwrap();

        // A directory opens on unix but fails on read; either way it is not "not found"
        let mut output = Vec::new();
        let result = Menu::new(&model, dir.path().to_path_buf(), Cursor::new("2\n"), &mut output).run();
        let output = String::from_utf8(output).unwrap();

        assert!(!output.contains("Database file not found"), "{}", output);
        assert!(matches!(
            result.unwrap_err().downcast_ref::<RecordError>(),
            Some(RecordError::Io { .. })
        ));
    }

    #[test]
    fn summary_marks_fallback() {
        let assessment = QualityAssessment::new(50.0, true);
        assert_eq!(summary(&assessment), "poor (index 50.0) [no rule fired, fallback index]");
    }
}
