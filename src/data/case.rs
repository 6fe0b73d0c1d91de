//! JSON case files holding one `EvaluationInput`.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use crate::{data::cores, evaluate::EvaluationInput};

/// Load a case file, optionally replacing its biopsy detail with a CSV core sheet.
pub fn load_case(path: &Path, core_sheet: Option<&Path>) -> Result<EvaluationInput> {
    let file = File::open(path).with_context(|| format!("opening case file {}", path.display()))?;
    let mut input: EvaluationInput = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing case file {}", path.display()))?;
    if let Some(sheet) = core_sheet {
        input.biopsy = Some(cores::read_core_sheet(sheet)?);
    }
    info!(
        path = %path.display(),
        biopsy_detail = input.has_biopsy_detail(),
        "loaded case"
    );
    Ok(input)
}
