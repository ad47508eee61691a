//! # Reading of linear programs
//!
//! Problems are described in JSON files, such as
//!
//! ```json
//! {
//!     "kind": "MaxIP",
//!     "constraints": [[2, -2], [0, 1]],
//!     "b": [3, 3],
//!     "c": [4, -1],
//!     "config": {"strategy": "depth-first"}
//! }
//! ```
//!
//! The `config` field is optional, as are all of its fields.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::algorithm::SolverConfig;
use crate::data::linear_program::elements::ProblemKind;
use crate::data::linear_program::general_form::Problem;
use crate::io::error::Import;

pub mod error;

/// Contents of a problem file, before any validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProblemFile {
    /// Direction of optimization and variable type.
    pub kind: ProblemKind,
    /// Rows of `A` in `Ax <= b`.
    pub constraints: Vec<Vec<f64>>,
    /// Right hand side.
    pub b: Vec<f64>,
    /// Cost vector.
    pub c: Vec<f64>,
    /// Solver settings.
    #[serde(default)]
    pub config: SolverConfig,
}

impl ProblemFile {
    /// Parse the contents of a problem file.
    ///
    /// # Errors
    ///
    /// If the text is not a valid problem description.
    pub fn parse(program: &str) -> Result<Self, Import> {
        serde_json::from_str(program).map_err(Import::Parse)
    }

    /// Build the problem, checking its dimensions.
    ///
    /// # Errors
    ///
    /// If the dimensions of the problem don't agree.
    pub fn into_problem(self) -> Result<(Problem, SolverConfig), Import> {
        let problem = Problem::new(self.constraints, self.b, self.c, self.kind)
            .map_err(Import::LinearProgram)?;

        Ok((problem, self.config))
    }
}

/// Import a problem from a file.
///
/// Only supports the JSON filetype.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or the contents don't
/// describe a problem, an error type is returned.
pub fn import(file_path: &Path) -> Result<ProblemFile, Import> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(Import::IO)?
        .read_to_string(&mut program)
        .map_err(Import::IO)?;

    match file_path.extension().and_then(|extension| extension.to_str()) {
        Some("json") => ProblemFile::parse(&program),
        Some(extension) => Err(Import::FileExtension(format!(
            "Could not recognise file extension \"{}\" of file: {:?}", extension, file_path,
        ))),
        None => Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}", file_path,
        ))),
    }
}
