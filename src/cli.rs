//! Command line arguments of the `matgen` binary

use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;
use crate::factory::MatrixFactory;
use crate::matrix::{MatrixKind, MatrixSpec};
use crate::writer::{MatrixWriter, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate sparse test matrices for iterative solvers", long_about = None)]
pub struct CliArgs {
    /// Matrix type
    #[arg(long = "type", value_enum, default_value_t = MatrixKind::Laplace1d)]
    pub kind: MatrixKind,

    /// Matrix size (laplace1d, diagonal, random)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Grid size in x direction (laplace2d)
    #[arg(long, default_value_t = DEFAULT_GRID_EXTENT)]
    pub nx: usize,

    /// Grid size in y direction (laplace2d)
    #[arg(long, default_value_t = DEFAULT_GRID_EXTENT)]
    pub ny: usize,

    /// Density of random matrices
    #[arg(long, default_value_t = DEFAULT_RANDOM_DENSITY)]
    pub density: f64,

    /// Diagonal shift of diagonally dominant matrices
    #[arg(long, default_value_t = DEFAULT_DOMINANCE)]
    pub dominance: f64,

    /// Seed for the random kinds; drawn at random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::MatrixMarket)]
    pub format: OutputFormat,

    /// Log level: 0 off, 1 info, 2 debug, 3 trace
    #[arg(long, default_value_t = 0)]
    pub log: u8,
}

impl CliArgs {
    pub fn matrix_spec(&self) -> MatrixSpec {
        match self.kind {
            MatrixKind::Laplace1d => MatrixSpec::Laplace1d { n: self.size },
            MatrixKind::Laplace2d => MatrixSpec::Laplace2d {
                nx: self.nx,
                ny: self.ny,
            },
            MatrixKind::Diagonal => MatrixSpec::DiagonalDominant {
                n: self.size,
                dominance: self.dominance,
            },
            MatrixKind::Random => MatrixSpec::RandomSparse {
                n: self.size,
                density: self.density,
            },
        }
    }

    pub fn factory(&self) -> MatrixFactory {
        match self.seed {
            Some(seed) => MatrixFactory::new(seed),
            None => MatrixFactory::from_entropy(),
        }
    }

    pub fn writer(&self) -> MatrixWriter {
        MatrixWriter::new(self.format)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        match self.log {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}
