use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::*;
use log::info;
use rand::Rng;

use st_sequence::Composition;
use st_sequence::IDENTIFIER_LENGTH;
use st_sequence::Record;
use st_sequence::embed_name;
use st_sequence::random_sequence;
use st_sequence::record_file_name;
use st_sequence::write_record;
use st_plotting::CompositionRenderer;

use crate::prompts::{DESCRIPTION_PROMPT, NAME_PROMPT};
use crate::prompts::{prompt_line, read_identifier, read_length};


/// Where output goes and how identifiers are generated.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Records are written to `<output_dir>/<identifier>.fasta`.
    pub output_dir: PathBuf,
    /// Length of identifiers generated for blank answers.
    pub identifier_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            output_dir: PathBuf::from("."),
            identifier_length: IDENTIFIER_LENGTH,
        }
    }
}

/// Everything a finished session produced.
#[derive(Clone, Debug)]
pub struct SessionReport {
    pub record: Record,
    pub record_path: PathBuf,
    pub chart_path: Option<PathBuf>,
    pub composition: Composition,
    /// Where the name was spliced into the generated sequence.
    pub offset: usize,
    pub generated_identifier: bool,
}

/// One interactive run: prompt, generate, embed, write, report, plot.
///
/// Invalid lengths are re-prompted. A record that cannot be written ends the
/// session with an error before any statistics are shown.
pub fn run_session<R, W, G, C>(
    input: &mut R,
    output: &mut W,
    rng: &mut G,
    renderer: &mut C,
    config: &SessionConfig,
) -> Result<SessionReport>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
    C: CompositionRenderer + ?Sized,
{
    let length = read_length(input, output)?;
    let (identifier, generated_identifier) =
        read_identifier(input, output, rng, config.identifier_length)?;
    let description = prompt_line(input, output, DESCRIPTION_PROMPT)?;
    let name = prompt_line(input, output, NAME_PROMPT)?;

    let sequence = random_sequence(length, rng)?;
    let embedding = embed_name(&sequence, &name, rng);
    info!("Embedded name ({} chars) at offset {}", name.chars().count(), embedding.offset);

    let record = Record::new(&identifier, &description, &embedding.text);
    let record_path = config.output_dir.join(record_file_name(&identifier));
    write_record(&record_path, &record)
        .with_context(|| format!("Cannot write record to {}", record_path.display()))?;

    writeln!(output)?;
    writeln!(output, "Sequence saved to file {}", record_path.display().to_string().green())?;
    writeln!(output, "Sequence statistics:")?;

    let composition = Composition::of(&record.payload);
    writeln!(output, "{}", composition)?;
    output.flush()?;

    let chart_path = renderer.render(&identifier, &composition)
        .with_context(|| format!("Cannot render composition chart for '{}'", identifier))?;
    if let Some(path) = &chart_path {
        writeln!(output, "Chart saved to file {}", path.display().to_string().green())?;
    }

    Ok(SessionReport {
        record,
        record_path,
        chart_path,
        composition,
        offset: embedding.offset,
        generated_identifier,
    })
}
