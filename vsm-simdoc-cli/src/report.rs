use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use vsm_simdoc::SimilarityResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl FromStr for Format {
    type Err = &'static str;
    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err("Could not parse an output format"),
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    i: usize,
    j: usize,
    left: &'a str,
    right: &'a str,
    similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<usize>,
}

pub fn write_results<W>(
    mut wtr: W,
    format: Format,
    results: &[SimilarityResult],
    names: &[String],
) -> Result<()>
where
    W: Write,
{
    match format {
        Format::Csv => {
            writeln!(wtr, "i,j,similarity,tokens")?;
            for r in results {
                let tokens = r.shared_tokens.map(|t| t.to_string()).unwrap_or_default();
                writeln!(wtr, "{},{},{},{}", r.i, r.j, r.score, tokens)?;
            }
        }
        Format::Json => {
            for r in results {
                let record = Record {
                    i: r.i,
                    j: r.j,
                    left: &names[r.i],
                    right: &names[r.j],
                    similarity: r.score,
                    token: r.shared_tokens,
                };
                serde_json::to_writer(&mut wtr, &record)?;
                writeln!(wtr)?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}
